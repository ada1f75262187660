//! # sfnt 容器解析
//!
//! 解析 TTF/OTF 共用的 sfnt 容器：版本标记与表目录。
//! 所有偏移与长度均做边界检查，损坏输入返回 `InvalidFont`
//! 而不是越界 panic。
//!
//! ## 依赖关系
//! - 被 `codec/woff2.rs` 调用
//! - 使用 `error.rs` 定义的 Result

use crate::error::{FontpackError, Result};

/// TrueType 轮廓 (0x00010000)
pub const FLAVOR_TRUETYPE: u32 = 0x0001_0000;
/// CFF 轮廓 ('OTTO')
pub const FLAVOR_CFF: u32 = u32::from_be_bytes(*b"OTTO");
/// Apple 传统 TrueType ('true')
pub const FLAVOR_APPLE: u32 = u32::from_be_bytes(*b"true");

/// 表目录上限，超出视为损坏文件
const MAX_TABLES: usize = 4096;

/// sfnt 表目录记录
#[derive(Debug, Clone)]
pub struct TableRecord {
    pub tag: [u8; 4],
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

impl TableRecord {
    /// 标签的可读形式
    pub fn tag_str(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }
}

/// 已解析的 sfnt 字体，表数据借用自输入切片
pub struct SfntFont<'a> {
    pub flavor: u32,
    pub tables: Vec<TableRecord>,
    data: &'a [u8],
}

impl<'a> SfntFont<'a> {
    /// 解析 sfnt 容器头与表目录
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < 12 {
            return invalid("file too small to hold an sfnt header");
        }

        let flavor = read_u32(data, 0);
        if !matches!(flavor, FLAVOR_TRUETYPE | FLAVOR_CFF | FLAVOR_APPLE) {
            return invalid(&format!("unrecognized sfnt version 0x{:08X}", flavor));
        }

        let num_tables = read_u16(data, 4) as usize;
        if num_tables == 0 || num_tables > MAX_TABLES {
            return invalid(&format!("implausible table count: {}", num_tables));
        }

        let dir_end = 12 + num_tables * 16;
        if data.len() < dir_end {
            return invalid("table directory truncated");
        }

        let mut tables = Vec::with_capacity(num_tables);
        for i in 0..num_tables {
            let base = 12 + i * 16;
            let record = TableRecord {
                tag: [data[base], data[base + 1], data[base + 2], data[base + 3]],
                checksum: read_u32(data, base + 4),
                offset: read_u32(data, base + 8),
                length: read_u32(data, base + 12),
            };

            let end = record
                .offset
                .checked_add(record.length)
                .ok_or_else(|| FontpackError::InvalidFont {
                    reason: format!("table '{}' offset overflow", record.tag_str()),
                })?;
            if end as usize > data.len() {
                return invalid(&format!("table '{}' extends past end of file", record.tag_str()));
            }

            tables.push(record);
        }

        Ok(Self {
            flavor,
            tables,
            data,
        })
    }

    /// 取出一张表的原始数据
    pub fn table_data(&self, record: &TableRecord) -> &'a [u8] {
        let start = record.offset as usize;
        &self.data[start..start + record.length as usize]
    }
}

fn invalid<T>(reason: &str) -> Result<T> {
    Err(FontpackError::InvalidFont {
        reason: reason.to_string(),
    })
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
