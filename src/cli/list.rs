//! # list 子命令 CLI 定义
//!
//! 列出目录中可转换的字体文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to scan for TTF/OTF font files
    #[arg(short, long, default_value = "input")]
    pub input: PathBuf,
}
