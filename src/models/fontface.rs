//! # 字体元信息推断
//!
//! 从文件名推断字族、字重与样式。文件名按 `-`/`_`/空格切分，
//! 命中字重或样式词表的片段归入对应属性，其余片段拼为字族名。
//!
//! ## 依赖关系
//! - 被 `commands/list.rs` 使用

use std::path::Path;

/// 字重词表 -> CSS 数值字重
const WEIGHT_MAP: [(&str, u16); 19] = [
    ("thin", 100),
    ("hairline", 100),
    ("extralight", 200),
    ("ultralight", 200),
    ("light", 300),
    ("book", 400),
    ("normal", 400),
    ("regular", 400),
    ("roman", 400),
    ("medium", 500),
    ("semibold", 600),
    ("demibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("black", 900),
    ("heavy", 900),
    ("extrablack", 950),
    ("ultrablack", 950),
];

/// 样式词表
const STYLE_WORDS: [&str; 2] = ["italic", "oblique"];

/// 从文件名推断出的字体元信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    /// 字族名
    pub family: String,
    /// 字重名 (regular/bold/...)
    pub weight: String,
    /// CSS 数值字重
    pub weight_num: u16,
    /// 样式 (normal/italic/oblique)
    pub style: String,
}

impl FontFace {
    /// 按文件名切分并推断元信息
    pub fn from_file_name(file_name: &str) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);

        let parts: Vec<&str> = stem
            .split(['-', '_', ' '])
            .filter(|p| !p.is_empty())
            .collect();

        let mut family_parts: Vec<String> = Vec::new();
        let mut weight = "regular".to_string();
        let mut weight_num = 400;
        let mut style = "normal".to_string();

        for part in &parts {
            let lower = part.to_lowercase();
            if let Some((name, num)) = WEIGHT_MAP.iter().find(|(name, _)| *name == lower) {
                weight = (*name).to_string();
                weight_num = *num;
            } else if STYLE_WORDS.contains(&lower.as_str()) {
                style = lower;
            } else {
                family_parts.push(capitalize(part));
            }
        }

        if family_parts.is_empty() {
            let fallback = parts.first().copied().unwrap_or("UnknownFont");
            family_parts.push(fallback.to_string());
        }

        Self {
            family: family_parts.join(" "),
            weight,
            weight_num,
            style,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
