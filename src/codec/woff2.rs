//! # WOFF2 容器编码
//!
//! 将解析后的 sfnt 字体打包为 WOFF2 容器：48 字节文件头、
//! 变长表目录（known-tag 标志字节 + UIntBase128 长度）、
//! Brotli 压缩的表数据流。
//!
//! glyf/loca 使用空变换（变换版本 3），表数据按原字体中的
//! 物理顺序原样进入压缩流，不做轮廓重打包。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 注入到批量执行器
//! - 使用 `codec/sfnt.rs` 解析输入
//! - 使用 `brotli` crate 压缩

use crate::codec::sfnt::{SfntFont, TableRecord};
use crate::error::{FontpackError, Result};

use std::io::Write;

/// 'wOF2'
pub const WOFF2_SIGNATURE: u32 = 0x774F_4632;

/// Brotli 窗口大小 (log2)
const BROTLI_WINDOW: u32 = 22;

/// WOFF2 规范附录的已知表标签，标志字节低 6 位为其下标
const KNOWN_TABLES: [&[u8; 4]; 63] = [
    b"cmap", b"head", b"hhea", b"hmtx", b"maxp", b"name", b"OS/2", b"post", b"cvt ", b"fpgm",
    b"glyf", b"loca", b"prep", b"CFF ", b"VORG", b"EBDT", b"EBLC", b"gasp", b"hdmx", b"kern",
    b"LTSH", b"PCLT", b"VDMX", b"vhea", b"vmtx", b"BASE", b"GDEF", b"GPOS", b"GSUB", b"EBSC",
    b"JSTF", b"MATH", b"CBDT", b"CBLC", b"COLR", b"CPAL", b"SVG ", b"sbix", b"acnt", b"avar",
    b"bdat", b"bloc", b"bsln", b"cvar", b"fdsc", b"feat", b"fmtx", b"fvar", b"gvar", b"hsty",
    b"just", b"lcar", b"mort", b"morx", b"opbd", b"prop", b"trak", b"Zapf", b"Silf", b"Glat",
    b"Gloc", b"Feat", b"Sill",
];

/// 将 sfnt 字体编码为 WOFF2，quality 为 Brotli 压缩档位 (0-11)
pub fn encode_woff2(data: &[u8], quality: u32) -> Result<Vec<u8>> {
    let font = SfntFont::parse(data)?;

    // 表目录顺序决定压缩流中的数据顺序，按物理偏移排列
    let mut records: Vec<&TableRecord> = font.tables.iter().collect();
    records.sort_by_key(|r| r.offset);

    let mut directory = Vec::new();
    let mut stream = Vec::new();
    let mut total_sfnt_size: u64 = 12 + 16 * records.len() as u64;

    for record in &records {
        directory.push(flag_byte(&record.tag));
        if known_table_index(&record.tag).is_none() {
            directory.extend_from_slice(&record.tag);
        }
        write_base128(&mut directory, record.length);

        stream.extend_from_slice(font.table_data(record));
        total_sfnt_size += u64::from(align4(record.length));
    }

    let compressed = compress(&stream, quality)?;

    let total_len = 48 + directory.len() + compressed.len();
    let mut out = Vec::with_capacity(total_len);
    out.extend_from_slice(&WOFF2_SIGNATURE.to_be_bytes());
    out.extend_from_slice(&font.flavor.to_be_bytes());
    out.extend_from_slice(&(total_len as u32).to_be_bytes());
    out.extend_from_slice(&(records.len() as u16).to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes()); // reserved
    out.extend_from_slice(&(total_sfnt_size as u32).to_be_bytes());
    out.extend_from_slice(&(compressed.len() as u32).to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes()); // majorVersion
    out.extend_from_slice(&0u16.to_be_bytes()); // minorVersion
    out.extend_from_slice(&[0u8; 20]); // meta/priv 块未使用
    out.extend_from_slice(&directory);
    out.extend_from_slice(&compressed);
    Ok(out)
}

/// 表目录标志字节：高 2 位为变换版本，低 6 位为已知表下标
///
/// glyf/loca 的空变换是版本 3，其余表的空变换是版本 0；
/// 两种情况下 transformLength 均不出现在目录中。
fn flag_byte(tag: &[u8; 4]) -> u8 {
    let index = known_table_index(tag).unwrap_or(63);
    let transform = if tag == b"glyf" || tag == b"loca" {
        3u8
    } else {
        0u8
    };
    (transform << 6) | index
}

fn known_table_index(tag: &[u8; 4]) -> Option<u8> {
    KNOWN_TABLES
        .iter()
        .position(|known| *known == tag)
        .map(|i| i as u8)
}

/// UIntBase128 变长编码：大端 7 位一组，非末字节最高位置 1
fn write_base128(out: &mut Vec<u8>, mut value: u32) {
    let mut groups = [0u8; 5];
    let mut count = 0;
    loop {
        groups[count] = (value & 0x7F) as u8;
        count += 1;
        value >>= 7;
        if value == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        let continuation = if i > 0 { 0x80 } else { 0 };
        out.push(groups[i] | continuation);
    }
}

fn align4(n: u32) -> u32 {
    n.checked_add(3).map(|v| v & !3).unwrap_or(u32::MAX & !3)
}

fn compress(stream: &[u8], quality: u32) -> Result<Vec<u8>> {
    let mut compressed = Vec::new();
    let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, quality, BROTLI_WINDOW);
    writer
        .write_all(stream)
        .map_err(|e| FontpackError::EncodeError {
            reason: format!("brotli compression failed: {}", e),
        })?;
    drop(writer);
    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::sfnt::tests::build_test_font;
    use crate::codec::sfnt::{FLAVOR_CFF, FLAVOR_TRUETYPE};

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

    #[test]
    fn test_encode_minimal_font() {
        let font = build_test_font(
            FLAVOR_TRUETYPE,
            &[(*b"head", &[1, 2, 3, 4]), (*b"cmap", &[5, 6, 7, 8])],
        );
        let woff2 = encode_woff2(&font, 5).unwrap();

        assert_eq!(read_u32(&woff2, 0), WOFF2_SIGNATURE);
        assert_eq!(read_u32(&woff2, 4), FLAVOR_TRUETYPE);
        assert_eq!(read_u32(&woff2, 8) as usize, woff2.len());
        assert_eq!(read_u16(&woff2, 12), 2); // numTables
        assert_eq!(read_u16(&woff2, 14), 0); // reserved
        // totalSfntSize = 12 + 2*16 + 4 + 4
        assert_eq!(read_u32(&woff2, 16), 52);
    }

    #[test]
    fn test_encode_preserves_cff_flavor() {
        let font = build_test_font(FLAVOR_CFF, &[(*b"CFF ", &[9u8; 32])]);
        let woff2 = encode_woff2(&font, 5).unwrap();
        assert_eq!(read_u32(&woff2, 4), FLAVOR_CFF);
    }

    #[test]
    fn test_encode_rejects_non_font() {
        let result = encode_woff2(b"plain text pretending to be a font", 5);
        assert!(matches!(result, Err(FontpackError::InvalidFont { .. })));
    }

    #[test]
    fn test_flag_byte_known_and_transform() {
        assert_eq!(flag_byte(b"cmap"), 0);
        assert_eq!(flag_byte(b"head"), 1);
        // glyf/loca 空变换：版本 3 编码在高 2 位
        assert_eq!(flag_byte(b"glyf"), 0xC0 | 10);
        assert_eq!(flag_byte(b"loca"), 0xC0 | 11);
        assert_eq!(flag_byte(b"Sill"), 62);
        // 未知表使用下标 63
        assert_eq!(flag_byte(b"XXXX"), 63);
    }

    #[test]
    fn test_base128_encoding() {
        let encode = |v: u32| {
            let mut out = Vec::new();
            write_base128(&mut out, v);
            out
        };
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(0x7F), vec![0x7F]);
        assert_eq!(encode(0x80), vec![0x81, 0x00]);
        assert_eq!(encode(0x4000), vec![0x81, 0x80, 0x00]);
        assert_eq!(encode(u32::MAX), vec![0x8F, 0xFF, 0xFF, 0xFF, 0x7F]);
    }

    #[test]
    fn test_unknown_tag_written_into_directory() {
        let font = build_test_font(FLAVOR_TRUETYPE, &[(*b"XYZW", &[1, 2, 3])]);
        let woff2 = encode_woff2(&font, 5).unwrap();
        // 目录紧跟 48 字节文件头：标志字节 63，随后是完整标签
        assert_eq!(woff2[48] & 0x3F, 63);
        assert_eq!(&woff2[49..53], b"XYZW");
    }
}
