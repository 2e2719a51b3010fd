//! # 错误类型模块
//!
//! 定义隐写编解码过程中可能返回的所有错误。
//! 这些错误都在触碰像素数据之前同步返回，失败时缓冲区保持原样。

/// 隐写编解码的错误类型。
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    /// 载荷（含 4 字节长度头）超出图像的 LSB 容量。
    #[error("payload too large for this image: {needed_bits} bits needed, {capacity_bits} available")]
    PayloadTooLarge {
        capacity_bits: u64,
        needed_bits: u64,
    },

    /// 图像容量连 32 bits 的长度头都放不下。
    #[error("image too small to hold a length header: {capacity_bits} bits available, 32 required")]
    TruncatedHeader { capacity_bits: u64 },

    /// 长度头声明的载荷超出图像容量，说明图像已损坏或并非本工具的产物。
    #[error(
        "length header claims {claimed_bytes} bytes ({needed_bits} bits) but the image holds only {capacity_bits} bits"
    )]
    TruncatedPayload {
        claimed_bytes: u32,
        capacity_bits: u64,
        needed_bits: u64,
    },

    /// 像素数据长度与 `width * height` 的 RGB 三通道布局不匹配。
    #[error(
        "pixel data length {actual} does not match the {width}x{height} RGB layout ({expected} bytes expected)"
    )]
    UnsupportedChannelLayout {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, StegoError>;
