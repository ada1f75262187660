//! # 批量执行器
//!
//! 驱动全部转换任务至完成并汇总结果。
//!
//! ## 调度模型
//! - 基线（jobs = 1）：同一时刻仅一个任务在途，按扫描顺序派发并等待，
//!   每个任务对应进度动画的一次 start/stop 周期
//! - 有界并行（jobs = N）：rayon 线程池限定并发度，任务仍经由独立
//!   执行单元线程完成；终端写入统一经进度条序列化，失败行通过
//!   `suspend` 插入，避免输出交错
//!
//! 两种模式下每个任务都恰好产生一个结果，汇总与完成顺序无关。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/worker.rs` 派发任务
//! - 使用 `utils/progress.rs` 显示进度
//! - 使用 `rayon` 进行有界并行

use crate::batch::worker::{self, ConversionJob, ConversionResult};
use crate::error::Result;
use crate::utils::output;
use crate::utils::progress::{self, Spinner};

use rayon::prelude::*;

/// 批量运行汇总
///
/// 仅由执行器变更，运行期间只追加；结束时满足
/// `succeeded + failures.len() == total`。
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 任务总数
    pub total: usize,
    /// 成功数量
    pub succeeded: usize,
    /// 失败详情 (文件名, 诊断信息)
    pub failures: Vec<(String, String)>,
}

impl RunSummary {
    fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// 记录单个任务的结果
    fn record(&mut self, name: String, result: ConversionResult) {
        match result {
            ConversionResult::Success => self.succeeded += 1,
            ConversionResult::Failure(msg) => self.failures.push((name, msg)),
        }
    }

    /// 失败数量
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = CPU 核数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 处理任务列表并返回汇总
    pub fn run<C>(&self, jobs: Vec<ConversionJob>, codec: C, spinner: &mut Spinner) -> RunSummary
    where
        C: Fn(&[u8]) -> Result<Vec<u8>> + Clone + Send + Sync + 'static,
    {
        let summary = if self.jobs <= 1 {
            self.run_sequential(jobs, codec, spinner)
        } else {
            self.run_pooled(jobs, codec)
        };

        debug_assert_eq!(summary.succeeded + summary.failures.len(), summary.total);
        summary
    }

    /// 基线模式：逐个派发，按扫描顺序报告
    fn run_sequential<C>(
        &self,
        jobs: Vec<ConversionJob>,
        codec: C,
        spinner: &mut Spinner,
    ) -> RunSummary
    where
        C: Fn(&[u8]) -> Result<Vec<u8>> + Clone + Send + 'static,
    {
        let mut summary = RunSummary::new(jobs.len());

        for job in jobs {
            let name = job.file_name();
            let out_name = job
                .output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            spinner.start(&format!("Converting '{}'...", name));

            let codec = codec.clone();
            let result = worker::dispatch(job, move |data| codec(data)).wait();

            match &result {
                ConversionResult::Success => {
                    spinner.stop(&format!("'{}' -> '{}'", name, out_name), true);
                }
                ConversionResult::Failure(msg) => {
                    spinner.stop(&format!("'{}': {}", name, msg), false);
                }
            }

            summary.record(name, result);
        }

        summary
    }

    /// 有界并行模式：rayon 线程池限定并发，进度条序列化终端写入
    fn run_pooled<C>(&self, jobs: Vec<ConversionJob>, codec: C) -> RunSummary
    where
        C: Fn(&[u8]) -> Result<Vec<u8>> + Clone + Send + Sync + 'static,
    {
        let total = jobs.len();
        let pb = progress::create_progress_bar(total as u64, "Converting");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .unwrap();

        let results: Vec<(String, ConversionResult)> = pool.install(|| {
            jobs.into_par_iter()
                .map(|job| {
                    let name = job.file_name();
                    let codec = codec.clone();
                    let result = worker::dispatch(job, move |data| codec(data)).wait();

                    if let ConversionResult::Failure(msg) = &result {
                        pb.suspend(|| {
                            output::print_error(&format!("'{}': {}", name, msg));
                        });
                    }
                    pb.inc(1);
                    (name, result)
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果（与完成顺序无关）
        let mut summary = RunSummary::new(total);
        for (name, result) in results {
            summary.record(name, result);
        }
        summary
    }
}
