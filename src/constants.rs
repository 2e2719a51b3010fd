/// 长度头占用的字节数。
/// 载荷长度以 `u32` 大端序写入，占 4 字节 (32 bits)。
pub const LENGTH_HEADER_BYTES: usize = 4;

/// 长度头占用的位数 (`LENGTH_HEADER_BYTES * 8`)。
/// 容量不足 32 bits 的图像连长度头都放不下。
pub const LENGTH_HEADER_BITS: u64 = 32;

/// 每个像素可用的 LSB 槽位数。
/// 每个像素有 R、G、B 三个通道，每个通道贡献 1 bit。
pub const CHANNELS_PER_PIXEL: u64 = 3;

/// 隐写输出文件名的后缀。
/// 附加在原文件名（去掉最后一个扩展名）之后，避免覆盖源文件。
pub const STEGO_SUFFIX: &str = "_stego";

/// 隐写输出固定使用的扩展名。
/// 只有无损格式能保留 LSB 数据，因此输出一律为 PNG。
pub const OUTPUT_EXTENSION: &str = "png";
