//! # stego_link 库
//!
//! 本库包含 URL 隐写工具的核心逻辑：
//! 将任意字节载荷（实践中为 UTF-8 URL）嵌入 RGB 像素通道的最低有效位中，
//! 并支持从图像中还原该载荷。
//!
//! ## 线格式
//!
//! 4 字节大端序长度头 + 原始载荷字节；按字节内高位在前的顺序逐位写入
//! 行主序像素的 R、G、B 通道 LSB。
//!
//! ## 注意
//!
//! LSB 数据会被有损压缩破坏，隐写结果必须保存为无损格式（本工具强制输出 PNG）。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod pixel;
pub mod steganography;
