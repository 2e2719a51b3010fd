//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于将 URL 嵌入图像并从隐写图像中提取，输出固定为无损 PNG。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于将 URL 嵌入图像并从隐写图像中提取。输入支持 PNG, BMP, JPEG 等常见格式，输出固定为无损 PNG（有损压缩会破坏 LSB 数据）。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将 URL 嵌入图像像素的 LSB 中，结果保存为无损 PNG。
    Embed(EmbedArgs),

    /// 从经过隐写的图像中提取嵌入的 URL。
    Extract(ExtractArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP, JPEG)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要嵌入的 URL（或任意 UTF-8 文本）。
    #[arg(short, long)]
    pub url: String,

    /// 隐写完成后，保存结果 PNG 的输出路径。
    /// 省略时在源图像目录生成 `<原文件名去扩展名>_stego.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已嵌入 URL 的隐写图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取结果的保存路径。省略时将提取出的 URL 打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}
