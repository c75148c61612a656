//! # 数据模型模块
//!
//! 定义分子结构与材料设计记录的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `viewer/`, `design/` 和 `commands/` 使用
//! - 子模块: molecule, material

pub mod material;
pub mod molecule;

pub use material::{Biodegradability, Conductivity, Elasticity, MaterialRecord, UserRequirements};
pub use molecule::{Atom, Bond, Molecule};
