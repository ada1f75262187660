//! # fontpack - 网页字体批量转换工具
//!
//! 将 TTF/OTF 轮廓字体批量转换为 WOFF2 网页字体格式。
//! 单个损坏的字体不会中断整个批次：每个转换在独立线程中执行，
//! 结果通过消息通道回传。
//!
//! ## 子命令
//! - `convert` - 批量转换目录中的 TTF/OTF 字体为 WOFF2
//! - `list`    - 列出目录中可转换的字体及其元信息
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/  (扫描、隔离执行、汇总)
//!   │     ├── codec/  (sfnt 解析与 WOFF2 编码)
//!   │     └── models/ (字体元信息)
//!   ├── utils/      (终端输出与进度动画)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
