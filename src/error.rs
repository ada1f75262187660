//! # 统一错误处理模块
//!
//! 定义 fontpack 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fontpack 统一错误类型
#[derive(Error, Debug)]
pub enum FontpackError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 字体解析 / 编码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid font data: {reason}")]
    InvalidFont { reason: String },

    #[error("WOFF2 encoding failed: {reason}")]
    EncodeError { reason: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FontpackError>;
