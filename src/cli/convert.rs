//! # convert 子命令 CLI 定义
//!
//! 批量转换字体文件 (.ttf/.otf -> .woff2)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory containing TTF/OTF font files
    #[arg(short, long, default_value = "input")]
    pub input: PathBuf,

    /// Output directory for converted WOFF2 files (created if absent)
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Number of parallel jobs (1 = sequential, 0 = number of CPUs)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Brotli compression effort (0-11)
    #[arg(short, long, default_value_t = 11, value_parser = clap::value_parser!(u32).range(0..=11))]
    pub quality: u32,
}
