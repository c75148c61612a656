//! # XYZ 文件导出
//!
//! 把通过严格校验的坐标块打包成可保存的文本文件。
//! 校验失败时拒绝导出，不产生任何文件。
//!
//! ## 文件名规则
//! 材料名中连续空白替换为单个下划线，路径分隔符、`: * ? " < > |` 等字符与
//! 开头的连续 `.` 也替换为下划线。结果为空时使用 `material`，后缀 `.xyz`。
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 和 `commands/design.rs` 调用
//! - 使用 `parsers/xyz.rs` 的严格校验
//! - 使用 `regex` 处理空白

use crate::error::{MatforgeError, Result};
use crate::parsers::xyz::validate_xyz;

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 导出文件 MIME 类型
pub const XYZ_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

const FALLBACK_FILE_STEM: &str = "material";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 路径分隔符与文件名中不允许的字符
static UNSAFE_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).unwrap());

static LEADING_DOTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.+").unwrap());

/// 待保存的 XYZ 文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyzArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// 由材料名生成不带后缀的文件名
///
/// 结果只含单个路径组件，写入时不会离开目标目录。
pub fn export_stem(material_name: &str) -> String {
    let stem = WHITESPACE_RUN.replace_all(material_name, "_");
    let stem = UNSAFE_CHAR.replace_all(&stem, "_");
    let stem = LEADING_DOTS.replace(&stem, "_");
    if stem.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem.into_owned()
    }
}

/// 由材料名生成 .xyz 文件名
pub fn export_filename(material_name: &str) -> String {
    format!("{}.xyz", export_stem(material_name))
}

/// 生成导出文件；坐标块未通过严格校验时返回 None
pub fn export_xyz(coordinates: &str, material_name: &str) -> Option<XyzArtifact> {
    if !validate_xyz(coordinates) {
        return None;
    }

    Some(XyzArtifact {
        filename: export_filename(material_name),
        content_type: XYZ_CONTENT_TYPE,
        bytes: coordinates.as_bytes().to_vec(),
    })
}

/// 写出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    Written(PathBuf),
    Skipped(PathBuf),
}

impl XyzArtifact {
    /// 写入目录；文件已存在且不覆盖时跳过
    pub fn write_to(&self, dir: &Path, overwrite: bool) -> Result<WriteStatus> {
        fs::create_dir_all(dir).map_err(|e| MatforgeError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let path = dir.join(&self.filename);
        if path.exists() && !overwrite {
            return Ok(WriteStatus::Skipped(path));
        }

        fs::write(&path, &self.bytes).map_err(|e| MatforgeError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(WriteStatus::Written(path))
    }
}

/// 导出并写盘，校验失败时返回 `ExportRefused`
pub fn save_xyz(
    coordinates: &str,
    material_name: &str,
    dir: &Path,
    overwrite: bool,
) -> Result<WriteStatus> {
    let artifact = export_xyz(coordinates, material_name).ok_or_else(|| {
        MatforgeError::ExportRefused {
            name: material_name.to_string(),
        }
    })?;
    artifact.write_to(dir, overwrite)
}

#[cfg(test)]
mod tests {
    use super::*;

    const H2: &str = "2\nTest\nH 0 0 0\nH 0 0 0.74\n";

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Poly Lactic  Acid"), "Poly_Lactic_Acid.xyz");
        assert_eq!(export_filename("tab\tname\n"), "tab_name_.xyz");
        assert_eq!(export_filename(""), "material.xyz");
        assert_eq!(export_filename("Graphene"), "Graphene.xyz");
    }

    #[test]
    fn test_export_filename_stays_in_directory() {
        assert_eq!(
            export_filename("Poly(ethylene/propylene) Blend"),
            "Poly(ethylene_propylene)_Blend.xyz"
        );
        assert_eq!(export_filename("/tmp/evil"), "_tmp_evil.xyz");
        assert_eq!(export_filename("..\\up"), "__up.xyz");
        assert_eq!(export_filename(".hidden"), "_hidden.xyz");
        assert_eq!(export_filename(r#"a:b*c?d"e<f>g|h"#), "a_b_c_d_e_f_g_h.xyz");
    }

    #[test]
    fn test_save_xyz_sanitized_name() {
        let dir = std::env::temp_dir().join(format!("matforge_export_safe_{}", std::process::id()));

        let status = save_xyz(H2, "/tmp/escape/evil", &dir, true).unwrap();
        let path = dir.join("_tmp_escape_evil.xyz");
        assert_eq!(status, WriteStatus::Written(path.clone()));
        assert!(path.exists());

        let status = save_xyz(H2, "Poly(ethylene/propylene) Blend", &dir, true).unwrap();
        assert_eq!(
            status,
            WriteStatus::Written(dir.join("Poly(ethylene_propylene)_Blend.xyz"))
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_export_valid_block() {
        let artifact = export_xyz(H2, "Hydrogen Gas").unwrap();
        assert_eq!(artifact.filename, "Hydrogen_Gas.xyz");
        assert_eq!(artifact.content_type, XYZ_CONTENT_TYPE);
        assert_eq!(artifact.bytes, H2.as_bytes());
    }

    #[test]
    fn test_export_refused_when_invalid() {
        assert!(export_xyz("3\nTest\nH 0 0 0\nH 0 0 0.74\n", "bad").is_none());
        assert!(export_xyz("", "empty").is_none());
    }

    #[test]
    fn test_save_xyz_writes_and_skips() {
        let dir = std::env::temp_dir().join(format!("matforge_export_{}", std::process::id()));

        let first = save_xyz(H2, "H two", &dir, false).unwrap();
        let path = dir.join("H_two.xyz");
        assert_eq!(first, WriteStatus::Written(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), H2);

        let second = save_xyz(H2, "H two", &dir, false).unwrap();
        assert_eq!(second, WriteStatus::Skipped(path));

        let refused = save_xyz("nonsense", "H two", &dir, true);
        assert!(matches!(refused, Err(MatforgeError::ExportRefused { .. })));

        fs::remove_dir_all(&dir).ok();
    }
}
