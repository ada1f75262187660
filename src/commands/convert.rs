//! # convert 命令实现
//!
//! 批量转换目录中的 TTF/OTF 字体为 WOFF2。
//!
//! ## 流程
//! 1. 校验输入目录存在（致命前置条件，先于一切副作用）
//! 2. 扫描字体文件；空结果按"无事可做"处理，进程正常退出
//! 3. 创建输出目录（幂等、递归）
//! 4. 逐个派发到隔离执行单元，旋转动画反馈进度
//! 5. 打印失败明细与汇总计数；单任务失败不影响退出码
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/` 扫描与执行
//! - 使用 `codec/` 编码 WOFF2
//! - 使用 `utils/output.rs` 输出

use crate::batch::runner::RunSummary;
use crate::batch::scanner;
use crate::batch::{BatchRunner, ConversionJob};
use crate::cli::convert::ConvertArgs;
use crate::codec;
use crate::error::{FontpackError, Result};
use crate::utils::output;
use crate::utils::progress::Spinner;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Converting fonts to WOFF2");

    // 输入目录缺失在任何输出副作用之前报告
    let files = scanner::scan(&args.input)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No TTF/OTF files found in '{}'. Nothing to convert.",
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} font file(s) to convert", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| FontpackError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let jobs: Vec<ConversionJob> = files
        .iter()
        .map(|input| {
            let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("font");
            let output = args.output.join(format!("{}.woff2", stem));
            ConversionJob::new(input.clone(), output)
        })
        .collect();

    let quality = args.quality;
    let mut spinner = Spinner::new();
    let summary = BatchRunner::new(args.jobs).run(
        jobs,
        move |data| codec::encode_woff2(data, quality),
        &mut spinner,
    );

    print_summary(&summary, &args.output);
    Ok(())
}

/// 失败明细表的一行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 打印失败明细与汇总计数
fn print_summary(summary: &RunSummary, output_dir: &Path) {
    if !summary.failures.is_empty() {
        let rows: Vec<FailureRow> = summary
            .failures
            .iter()
            .map(|(file, reason)| FailureRow {
                file: file.clone(),
                reason: reason.clone(),
            })
            .collect();
        println!("\n{}", Table::new(rows));
    }

    output::print_done(&format!(
        "{} / {} font(s) converted to '{}'",
        summary.succeeded,
        summary.total,
        output_dir.display()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::sfnt::tests::build_test_font;
    use crate::codec::sfnt::{FLAVOR_CFF, FLAVOR_TRUETYPE};
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("fontpack-convert-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn args(input: PathBuf, output: PathBuf) -> ConvertArgs {
        ConvertArgs {
            input,
            output,
            jobs: 1,
            quality: 5,
        }
    }

    #[test]
    fn test_missing_input_dir_fails_before_output_created() {
        let root = temp_dir("missing-input");
        let output = root.join("out");

        let result = execute(args(root.join("no-such-dir"), output.clone()));

        assert!(matches!(
            result,
            Err(FontpackError::DirectoryNotFound { .. })
        ));
        assert!(!output.exists());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_empty_input_dir_is_noop() {
        let root = temp_dir("empty-input");
        let input = root.join("in");
        let output = root.join("out");
        fs::create_dir_all(&input).unwrap();

        assert!(execute(args(input, output.clone())).is_ok());
        assert!(!output.exists());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_mixed_batch_converts_good_and_names_bad() {
        let root = temp_dir("mixed-batch");
        let input = root.join("in");
        let output = root.join("out");
        fs::create_dir_all(&input).unwrap();

        let ttf = build_test_font(FLAVOR_TRUETYPE, &[(*b"head", &[1, 2, 3, 4])]);
        let otf = build_test_font(FLAVOR_CFF, &[(*b"CFF ", &[5, 6, 7, 8])]);
        fs::write(input.join("Regular.ttf"), &ttf).unwrap();
        fs::write(input.join("Bold.otf"), &otf).unwrap();
        fs::write(input.join("corrupt.ttf"), b"not a font at all").unwrap();

        // 单任务失败不构成命令级错误
        assert!(execute(args(input, output.clone())).is_ok());

        assert!(output.join("Regular.woff2").exists());
        assert!(output.join("Bold.woff2").exists());
        assert!(!output.join("corrupt.woff2").exists());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_rerun_overwrites_existing_outputs() {
        let root = temp_dir("rerun");
        let input = root.join("in");
        let output = root.join("out");
        fs::create_dir_all(&input).unwrap();

        let ttf = build_test_font(FLAVOR_TRUETYPE, &[(*b"head", &[1, 2, 3, 4])]);
        fs::write(input.join("Solo.ttf"), &ttf).unwrap();

        assert!(execute(args(input.clone(), output.clone())).is_ok());
        assert!(execute(args(input, output.clone())).is_ok());
        assert!(output.join("Solo.woff2").exists());
        let _ = fs::remove_dir_all(&root);
    }
}

