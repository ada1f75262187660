//! # 字体文件扫描器
//!
//! 在输入目录中收集待转换的字体文件。
//!
//! ## 约定
//! - 仅扫描目录第一层（不递归）
//! - 扩展名大小写不敏感地匹配允许集 (ttf/otf)
//! - 目录不存在是致命的前置条件错误
//! - 目录为空返回空列表，由调用方按"无事可做"处理
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`、`commands/list.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{FontpackError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 可转换的字体扩展名允许集
const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// 收集目录中所有可转换的字体文件，按路径排序
pub fn scan(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(FontpackError::DirectoryNotFound {
            path: input_dir.display().to_string(),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_font_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    Ok(files)
}

/// 检查扩展名是否属于允许集（大小写不敏感）
fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            FONT_EXTENSIONS.iter().any(|allowed| *allowed == ext)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fontpack-scanner-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_is_font_file() {
        assert!(is_font_file(Path::new("Roboto-Regular.ttf")));
        assert!(is_font_file(Path::new("Lora.otf")));
        assert!(is_font_file(Path::new("SHOUT.TTF")));
        assert!(is_font_file(Path::new("Mixed.OtF")));
        assert!(!is_font_file(Path::new("readme.txt")));
        assert!(!is_font_file(Path::new("archive.woff2")));
        assert!(!is_font_file(Path::new("noextension")));
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = std::env::temp_dir().join("fontpack-scanner-does-not-exist");
        let result = scan(&dir);
        assert!(matches!(
            result,
            Err(FontpackError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = temp_dir("empty");
        let files = scan(&dir).unwrap();
        assert!(files.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = temp_dir("mixed");
        fs::write(dir.join("b.ttf"), b"x").unwrap();
        fs::write(dir.join("A.OTF"), b"x").unwrap();
        fs::write(dir.join("notes.md"), b"x").unwrap();
        fs::create_dir(dir.join("sub.ttf")).unwrap();

        let files = scan(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["A.OTF", "b.ttf"]);
        let _ = fs::remove_dir_all(&dir);
    }
}
