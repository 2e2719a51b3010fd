//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写算法以及向用户报告结果。
//!
//! 图像格式的解码与编码完全委托给 `image` crate；
//! 隐写核心只见到归一化后的 RGB 像素缓冲。

use crate::cli::{EmbedArgs, ExtractArgs};
use crate::pixel::PixelBuffer;
use crate::steganography::{decode, derive_output_name, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Embed' 命令的执行逻辑。
///
/// 负责读取并归一化输入图像、将 URL 字节嵌入像素 LSB、
/// 最后把结果图像以无损 PNG 格式写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入图像、URL 与输出路径的 `EmbedArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取或解码输入的图像文件。
/// * 图像的 LSB 容量不足以容纳长度头加 URL。
/// * 无法写入到目标图像文件。
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let mut pixels = open_pixel_buffer(&args.image)?;

    encode(&mut pixels, args.url.as_bytes()).with_context(|| {
        format!(
            "Not enough space in the image to embed the URL: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    save_png(pixels, &dest)?;

    println!(
        "The URL has been successfully embedded and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用解码核心还原嵌入的载荷，
/// 并将其写入目标文件或打印到标准输出。
///
/// 解码成功并不证明图像确实被嵌入过消息：任意图像的 LSB
/// 也可能恰好构成一个通过容量检查的长度头，此时得到的是噪声字节。
///
/// # Arguments
///
/// * `args` - 包含输入图像与输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 图像容量放不下长度头，或长度头声明的载荷超出图像容量。
/// * 输出文件已存在且未指定 `--force`，或无法写入。
/// * 打印到标准输出时载荷不是合法的 UTF-8。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let pixels = open_pixel_buffer(&args.image)?;

    let payload = decode(&pixels).with_context(|| {
        format!(
            "Failed to extract a URL from '{}'. \nThe image may not contain an embedded message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match &args.text {
        Some(path) => {
            ensure_writable(path, args.force)?;
            fs::write(path, &payload).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The URL has been successfully extracted and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => {
            let url = String::from_utf8(payload).context(
                "The extracted payload is not valid UTF-8. \nThe image may not contain an embedded message.",
            )?;
            println!("{}", url.green().bold());
        }
    }

    Ok(())
}

/// 打开图像并归一化为 RGB 像素缓冲。
///
/// 带 alpha 通道或调色板的图像在此统一转换为三通道 RGB，
/// 隐写核心只接受严格的 RGB 布局。
fn open_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(PixelBuffer::from_raw(width, height, rgb.into_raw())?)
}

/// 将像素缓冲以无损 PNG 格式写入目标路径。
///
/// 无论目标路径的扩展名是什么都强制使用 PNG 编码，
/// 有损格式的量化会破坏 LSB 数据。
fn save_png(pixels: PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = (pixels.width(), pixels.height());
    let img = RgbImage::from_raw(width, height, pixels.into_raw())
        .context("The pixel buffer length does not match its dimensions.")?;

    img.save_with_format(path, ImageFormat::Png).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 计算 embed 的默认输出路径：源图像所在目录下的 `<stem>_stego.png`。
fn default_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(derive_output_name(&name))
}

/// 检查输出文件是否已存在，未指定 `--force` 时拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
