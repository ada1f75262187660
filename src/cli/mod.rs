//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量转换字体为 WOFF2
//! - `list`:    列出可转换的字体
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, list

pub mod convert;
pub mod list;

use clap::{Parser, Subcommand};

/// fontpack - 网页字体批量转换工具
#[derive(Parser)]
#[command(name = "fontpack")]
#[command(version)]
#[command(about = "Batch convert TTF/OTF outline fonts to WOFF2 web fonts", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert all TTF/OTF fonts in a directory to WOFF2
    Convert(convert::ConvertArgs),

    /// List convertible fonts and their name-derived metadata
    List(list::ListArgs),
}
