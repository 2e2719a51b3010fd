//! # 像素缓冲模块
//!
//! 提供隐写核心所依赖的 RGB 像素缓冲抽象。
//! 图像的解码与编码由外部协作者完成，本模块只关心内存中的像素布局。

use crate::constants::CHANNELS_PER_PIXEL;
use crate::error::{Result, StegoError};

/// 行主序存储的 RGB 像素缓冲。
///
/// 像素数据以扁平字节序列存放，每个像素依次占用 R、G、B 三个字节，
/// 原点位于左上角。不变式：`data.len() == width * height * 3`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// 创建一个全零像素的缓冲，主要用于合成图像与测试。
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS_PER_PIXEL as usize;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// 从扁平 RGB 字节序列构造缓冲。
    ///
    /// # Errors
    ///
    /// 数据长度与 `width * height * 3` 不一致时返回 `UnsupportedChannelLayout`，
    /// 例如误传了带 alpha 通道的 RGBA 数据。检查发生在任何位被读写之前。
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS_PER_PIXEL as usize;
        if data.len() != expected {
            return Err(StegoError::UnsupportedChannelLayout {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 图像可用的 LSB 槽位总数 (`width * height * 3`)。
    pub fn capacity_bits(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * CHANNELS_PER_PIXEL
    }

    /// 读取 `(x, y)` 处的像素。
    ///
    /// # Panics
    ///
    /// 坐标越界时 panic。
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = self.offset(x, y);
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    /// 写入 `(x, y)` 处的像素。
    ///
    /// # Panics
    ///
    /// 坐标越界时 panic。
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let offset = self.offset(x, y);
        self.data[offset..offset + 3].copy_from_slice(&rgb);
    }

    /// 按行主序展开的通道字节视图，依次为每个像素的 R、G、B。
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// 取出底层字节序列，交给外部图像编码器持久化。
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS_PER_PIXEL as usize
    }
}
