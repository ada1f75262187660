//! # 批量处理模块
//!
//! 提供字体批量转换的核心能力。
//!
//! ## 功能
//! - 按扩展名扫描输入目录
//! - 每个任务在独立线程中隔离执行，结果经消息通道回传
//! - 单个损坏输入不影响批次其余任务
//! - 进度反馈与统计汇总
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `rayon` 提供可选的有界并行
//! - 使用 `utils/progress.rs` 显示进度

pub mod runner;
pub mod scanner;
pub mod worker;

pub use runner::{BatchRunner, RunSummary};
pub use worker::{ConversionJob, ConversionResult};
