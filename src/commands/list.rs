//! # list 命令实现
//!
//! 列出目录中可转换的字体及文件名推断出的元信息。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `batch/scanner.rs` 扫描
//! - 使用 `models/fontface.rs` 推断元信息
//! - 使用 `utils/output.rs` 输出

use crate::batch::scanner;
use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::models::FontFace;
use crate::utils::output;

use std::fs;
use tabled::{Table, Tabled};

/// 字体列表的一行
#[derive(Tabled)]
struct FontRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Style")]
    style: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header("Fonts available for conversion");

    let files = scanner::scan(&args.input)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No TTF/OTF files found in '{}'.",
            args.input.display()
        ));
        return Ok(());
    }

    let rows: Vec<FontRow> = files
        .iter()
        .map(|path| {
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let face = FontFace::from_file_name(&file);
            let size = fs::metadata(path)
                .map(|m| format_size(m.len()))
                .unwrap_or_else(|_| "?".to_string());

            FontRow {
                file,
                family: face.family,
                weight: format!("{} ({})", face.weight, face.weight_num),
                style: face.style,
                size,
            }
        })
        .collect();

    println!("{}", Table::new(rows));
    output::print_info(&format!(
        "{} font file(s) in '{}'",
        files.len(),
        args.input.display()
    ));
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}
