//! # 隐写核心模块
//!
//! 线格式：4 字节大端序长度头 + 原始载荷字节，按字节内高位在前的顺序
//! 逐位写入行主序像素的 R、G、B 通道 LSB。
//! 容量检查先于任何写入，失败时缓冲区保持原样。

use std::path::Path;

use crate::constants::{LENGTH_HEADER_BITS, LENGTH_HEADER_BYTES, OUTPUT_EXTENSION, STEGO_SUFFIX};
use crate::error::{Result, StegoError};
use crate::pixel::PixelBuffer;

pub fn encode(pixels: &mut PixelBuffer, payload: &[u8]) -> Result<()> {
    let capacity_bits = pixels.capacity_bits();
    let needed_bits =
        LENGTH_HEADER_BITS.saturating_add((payload.len() as u64).saturating_mul(8));

    if u32::try_from(payload.len()).is_err() || needed_bits > capacity_bits {
        return Err(StegoError::PayloadTooLarge {
            capacity_bits,
            needed_bits,
        });
    }

    let header = (payload.len() as u32).to_be_bytes();
    let bits = header
        .iter()
        .chain(payload)
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1));

    for (channel, bit) in pixels.as_raw_mut().iter_mut().zip(bits) {
        *channel = (*channel & 0xFE) | bit;
    }

    Ok(())
}

pub fn decode(pixels: &PixelBuffer) -> Result<Vec<u8>> {
    let capacity_bits = pixels.capacity_bits();
    if capacity_bits < LENGTH_HEADER_BITS {
        return Err(StegoError::TruncatedHeader { capacity_bits });
    }

    let channels = pixels.as_raw();

    let mut claimed_bytes: u32 = 0;
    for &channel in &channels[..LENGTH_HEADER_BYTES * 8] {
        claimed_bytes = (claimed_bytes << 1) | u32::from(channel & 1);
    }

    let needed_bits = LENGTH_HEADER_BITS + 8 * u64::from(claimed_bytes);
    if needed_bits > capacity_bits {
        return Err(StegoError::TruncatedPayload {
            claimed_bytes,
            capacity_bits,
            needed_bits,
        });
    }

    let body = &channels[LENGTH_HEADER_BYTES * 8..];
    let payload = body
        .chunks_exact(8)
        .take(claimed_bytes as usize)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, &channel| (byte << 1) | (channel & 1))
        })
        .collect();

    Ok(payload)
}

/// 由输入文件名推导隐写输出文件名：去掉最后一个扩展名，
/// 追加 `_stego` 后缀并固定使用 `.png` 扩展名。
///
/// 调用方依赖这一约定避免覆盖源文件，同时保证输出为无损格式。
pub fn derive_output_name(original_name: &str) -> String {
    let stem = Path::new(original_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(original_name);
    format!("{stem}{STEGO_SUFFIX}.{OUTPUT_EXTENSION}")
}
