//! # 材料设计数据模型
//!
//! 用户需求（发送给 AI 服务）与材料记录（AI 服务返回）。
//! JSON 字段名与服务端 schema 保持一致（camelCase）。
//!
//! ## 依赖关系
//! - 被 `design/` 和 `commands/` 使用
//! - 使用 `serde` 序列化，`clap` 提供命令行取值

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 导电性需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Conductivity {
    #[default]
    #[serde(rename = "Not Required")]
    NotRequired,
    High,
    Medium,
    Low,
    Insulator,
}

/// 弹性需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Elasticity {
    #[default]
    #[serde(rename = "Not Required")]
    NotRequired,
    High,
    Medium,
    Low,
    Rigid,
}

/// 可降解性需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Biodegradability {
    #[default]
    #[serde(rename = "Not Required")]
    NotRequired,
    High,
    Medium,
    Low,
    #[serde(rename = "Non-biodegradable")]
    NonBiodegradable,
}

impl std::fmt::Display for Conductivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conductivity::NotRequired => write!(f, "Not Required"),
            Conductivity::High => write!(f, "High"),
            Conductivity::Medium => write!(f, "Medium"),
            Conductivity::Low => write!(f, "Low"),
            Conductivity::Insulator => write!(f, "Insulator"),
        }
    }
}

impl std::fmt::Display for Elasticity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Elasticity::NotRequired => write!(f, "Not Required"),
            Elasticity::High => write!(f, "High"),
            Elasticity::Medium => write!(f, "Medium"),
            Elasticity::Low => write!(f, "Low"),
            Elasticity::Rigid => write!(f, "Rigid"),
        }
    }
}

impl std::fmt::Display for Biodegradability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Biodegradability::NotRequired => write!(f, "Not Required"),
            Biodegradability::High => write!(f, "High"),
            Biodegradability::Medium => write!(f, "Medium"),
            Biodegradability::Low => write!(f, "Low"),
            Biodegradability::NonBiodegradable => write!(f, "Non-biodegradable"),
        }
    }
}

/// 用户提交的材料设计需求
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRequirements {
    /// 主要功能（必填）
    pub functionality: String,

    /// 预期用途（必填）
    pub use_case: String,

    pub compatibility: String,
    pub environment: String,
    pub conductivity: Conductivity,
    pub elasticity: Elasticity,
    pub biodegradability: Biodegradability,
    pub regulatory_compliance: String,
}

impl UserRequirements {
    /// 检查必填字段，返回每个缺失字段对应的提示
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.functionality.trim().is_empty() {
            missing.push("Material Functionality is a required field.");
        }
        if self.use_case.trim().is_empty() {
            missing.push("Intended Use / Application is a required field.");
        }
        missing
    }
}

/// AI 服务返回的材料记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub material_name: String,
    pub description: String,

    /// XYZ 格式坐标块
    pub xyz_coordinates: String,

    pub synthesis_methodology: String,
    pub validation_summary: String,
}

impl MaterialRecord {
    /// 所有字段均非空
    pub fn is_complete(&self) -> bool {
        [
            &self.material_name,
            &self.description,
            &self.xyz_coordinates,
            &self.synthesis_methodology,
            &self.validation_summary,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_from_json_defaults() {
        let json = r#"{"functionality": "self-healing", "useCase": "wearables"}"#;
        let req: UserRequirements = serde_json::from_str(json).unwrap();

        assert_eq!(req.functionality, "self-healing");
        assert_eq!(req.use_case, "wearables");
        assert_eq!(req.conductivity, Conductivity::NotRequired);
        assert!(req.missing_fields().is_empty());
    }

    #[test]
    fn test_requirements_property_labels() {
        let json = r#"{"conductivity": "Insulator", "biodegradability": "Non-biodegradable", "elasticity": "Not Required"}"#;
        let req: UserRequirements = serde_json::from_str(json).unwrap();

        assert_eq!(req.conductivity, Conductivity::Insulator);
        assert_eq!(req.biodegradability, Biodegradability::NonBiodegradable);
        assert_eq!(req.biodegradability.to_string(), "Non-biodegradable");
    }

    #[test]
    fn test_requirements_missing_fields() {
        let req = UserRequirements {
            functionality: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(req.missing_fields().len(), 2);
    }

    #[test]
    fn test_material_record_camel_case() {
        let json = r#"{
            "materialName": "Polyfoo",
            "description": "d",
            "xyzCoordinates": "1\nX\nC 0 0 0",
            "synthesisMethodology": "s",
            "validationSummary": "v"
        }"#;
        let record: MaterialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.material_name, "Polyfoo");
        assert!(record.is_complete());
    }

    #[test]
    fn test_material_record_incomplete() {
        let record = MaterialRecord {
            material_name: "Polyfoo".to_string(),
            description: String::new(),
            xyz_coordinates: "1\nX\nC 0 0 0".to_string(),
            synthesis_methodology: "s".to_string(),
            validation_summary: "v".to_string(),
        };
        assert!(!record.is_complete());
    }
}
