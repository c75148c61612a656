//! # 解析器模块
//!
//! 读取坐标块与材料记录。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xyz

pub mod xyz;

use crate::error::{MatforgeError, Result};
use crate::models::MaterialRecord;
use std::fs;
use std::path::Path;

/// 从文件得到的坐标块
#[derive(Debug, Clone)]
pub struct CoordinateSource {
    /// 显示名称：材料名或文件名
    pub name: String,

    /// 原始坐标文本（未经校验）
    pub content: String,
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MatforgeError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| MatforgeError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读取 JSON 材料记录
pub fn parse_material_record_file(path: &Path) -> Result<MaterialRecord> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| MatforgeError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 从文件路径推断格式并读取坐标块
///
/// `.json` 视为材料记录，其余按 XYZ 文本读取。
pub fn load_coordinate_block(path: &Path) -> Result<CoordinateSource> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("structure")
        .to_string();

    match ext.as_str() {
        "json" => {
            let record = parse_material_record_file(path)?;
            Ok(CoordinateSource {
                name: record.material_name,
                content: record.xyz_coordinates,
            })
        }
        "xyz" | "txt" | "" => Ok(CoordinateSource {
            name: stem,
            content: read_file(path)?,
        }),
        _ => Err(MatforgeError::UnsupportedFormat(format!(
            "Cannot determine format for: {}",
            path.display()
        ))),
    }
}
