//! # 数据模型模块
//!
//! 字体元信息模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: fontface

pub mod fontface;

pub use fontface::FontFace;
