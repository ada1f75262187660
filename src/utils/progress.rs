//! # 进度动画工具
//!
//! 封装 `indicatif` 提供单任务旋转动画与批量进度条。
//!
//! ## Spinner 生命周期
//! 每个任务一次 Idle -> Animating -> Idle 周期：`start` 启动 80ms
//! 定时帧动画并原位刷新当前行，`stop` 取消动画并写出带 ✓/✗ 标记的
//! 最终行。动画在 indicatif 的计时线程上执行，`start`/`stop` 立即
//! 返回，不阻塞调用方。
//!
//! ## 依赖关系
//! - 被 `commands/`、`batch/runner.rs` 使用
//! - 使用 `indicatif`、`colored` crate

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 旋转动画帧
const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// 帧间隔
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// 单任务旋转动画
///
/// 独占持有底层 `ProgressBar`；状态仅通过 `start`/`update`/`stop`
/// 变更。动画期间再次 `start` 会先取消上一个动画，保证任意时刻
/// 至多一个定时器在运行。
pub struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    pub fn new() -> Self {
        Self { pb: None }
    }

    /// 是否处于 Animating 状态
    pub fn is_active(&self) -> bool {
        self.pb.is_some()
    }

    /// 开始新一轮动画，替换并清除可能残留的上一轮
    pub fn start(&mut self, label: &str) {
        if let Some(prev) = self.pb.take() {
            prev.finish_and_clear();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&SPINNER_FRAMES),
        );
        pb.set_message(label.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        self.pb = Some(pb);
    }

    /// 更新动画行的文字（保持动画继续）
    pub fn update(&mut self, label: &str) {
        if let Some(pb) = &self.pb {
            pb.set_message(label.to_string());
        }
    }

    /// 结束动画：清除动画行，写出带状态标记的最终行
    pub fn stop(&mut self, final_label: &str, success: bool) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }

        let glyph = if success {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!("{} {}", glyph, final_label);
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

/// 创建批量进度条（有界并行模式使用）
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
