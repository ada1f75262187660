//! # 隔离执行单元
//!
//! 在独立线程中执行单个字体转换任务，结果通过一次性消息通道回传。
//!
//! ## 隔离协议
//! 编解码器对恶意或损坏输入的任何故障都必须被折叠为
//! `ConversionResult::Failure`，而不是让调度方进程崩溃：
//! - 输入不可读 / 输出不可写 -> Failure
//! - 编解码器返回错误 -> Failure
//! - 编解码器 panic -> `catch_unwind` 捕获 -> Failure
//! - 线程未回传结果即终止（通道关闭）-> Failure
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `error.rs` 定义的 Result

use crate::error::Result;

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// 单个转换任务：输入与输出路径均已解析完毕
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    /// 输入文件名（用于进度显示与失败报告）
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// 单个任务的转换结果，每个任务恰好产生一个
#[derive(Debug, Clone)]
pub enum ConversionResult {
    /// 转换成功，输出文件已写入
    Success,
    /// 转换失败（已包含诊断信息）
    Failure(String),
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success)
    }
}

/// 执行单元句柄：持有结果通道的接收端与线程句柄
pub struct ConversionHandle {
    rx: mpsc::Receiver<ConversionResult>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ConversionHandle {
    /// 阻塞等待转换结果
    ///
    /// 线程崩溃或未回传结果时返回 Failure，绝不向调用方抛出 panic。
    pub fn wait(self) -> ConversionResult {
        let result = self.rx.recv();
        if let Some(handle) = self.handle {
            let _ = handle.join();
        }
        match result {
            Ok(result) => result,
            Err(_) => ConversionResult::Failure(
                "conversion worker terminated without reporting a result".to_string(),
            ),
        }
    }
}

/// 将任务派发到新建的执行单元线程
pub fn dispatch<C>(job: ConversionJob, codec: C) -> ConversionHandle
where
    C: FnOnce(&[u8]) -> Result<Vec<u8>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let name = format!("fontpack-worker-{}", job.file_name());

    let spawned = thread::Builder::new().name(name).spawn(move || {
        let result = run_contained(&job, codec);
        // 调度方先于接收结果退出时发送才会失败，此时结果无人关心
        tx.send(result).ok();
    });

    match spawned {
        Ok(handle) => ConversionHandle {
            rx,
            handle: Some(handle),
        },
        Err(e) => {
            let (tx, rx) = mpsc::channel();
            tx.send(ConversionResult::Failure(format!(
                "failed to spawn conversion worker: {}",
                e
            )))
            .ok();
            ConversionHandle { rx, handle: None }
        }
    }
}

/// 在当前线程执行完整的"读取 -> 编码 -> 写入"流程，折叠所有故障
fn run_contained<C>(job: &ConversionJob, codec: C) -> ConversionResult
where
    C: FnOnce(&[u8]) -> Result<Vec<u8>>,
{
    let data = match fs::read(&job.input) {
        Ok(data) => data,
        Err(e) => {
            return ConversionResult::Failure(format!(
                "failed to read '{}': {}",
                job.input.display(),
                e
            ))
        }
    };

    let encoded = match panic::catch_unwind(AssertUnwindSafe(|| codec(&data))) {
        Ok(Ok(encoded)) => encoded,
        Ok(Err(e)) => return ConversionResult::Failure(e.to_string()),
        Err(payload) => {
            return ConversionResult::Failure(format!("codec panicked: {}", panic_message(payload.as_ref())))
        }
    };

    match fs::write(&job.output, &encoded) {
        Ok(()) => ConversionResult::Success,
        Err(e) => ConversionResult::Failure(format!(
            "failed to write '{}': {}",
            job.output.display(),
            e
        )),
    }
}

/// 从 panic 载荷中提取可读信息
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
