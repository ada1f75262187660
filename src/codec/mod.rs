//! # 编解码器模块
//!
//! 字体转换的编解码边界：输入字节，输出字节，失败即返回错误。
//! 调度核心只通过 `Fn(&[u8]) -> Result<Vec<u8>>` 使用本模块，
//! 不关心字体格式细节。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 注入到批量执行器
//! - 使用 `brotli` 压缩表数据流
//! - 子模块: sfnt (容器解析), woff2 (容器编码)

pub mod sfnt;
pub mod woff2;

pub use woff2::encode_woff2;
