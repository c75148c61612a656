//! # 分子结构预览模块
//!
//! 坐标文本 → 原子 → 键 → 二维场景。全部为无副作用的纯函数，
//! 相同输入总是得到相同输出，可在数据变化时直接重新调用。
//!
//! ## 子模块
//! - `elements`: 元素颜色与共价半径表
//! - `bonds`: 基于距离的键推断
//! - `scene`: 二维投影与图元生成
//! - `plot`: 图像输出
//! - `export`: XYZ 文件导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/xyz.rs` 和 `models/`

pub mod bonds;
pub mod elements;
pub mod export;
pub mod plot;
pub mod scene;

pub use bonds::infer_bonds;
pub use scene::Scene;

use crate::models::Molecule;
use crate::parsers::xyz::{parse_label, parse_xyz, validate_xyz};

/// 坐标块未通过严格校验时的提示
pub const INVALID_STRUCTURE_MESSAGE: &str =
    "Invalid or malformed molecular structure data received.";

/// 没有可显示原子时的提示
pub const EMPTY_STRUCTURE_MESSAGE: &str = "No molecule to display";

/// 渲染入口的结果
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// 可绘制的分子
    Scene { molecule: Molecule, scene: Scene },
    /// 严格校验失败
    Invalid,
    /// 没有原子
    Empty,
}

impl RenderOutcome {
    /// 非场景结果对应的固定提示
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RenderOutcome::Scene { .. } => None,
            RenderOutcome::Invalid => Some(INVALID_STRUCTURE_MESSAGE),
            RenderOutcome::Empty => Some(EMPTY_STRUCTURE_MESSAGE),
        }
    }
}

/// 宽松解析并推断键，不做严格校验
pub fn build_molecule(content: &str) -> Molecule {
    let atoms = parse_xyz(content);
    let bonds = infer_bonds(&atoms);
    Molecule::new(parse_label(content), atoms, bonds)
}

/// 渲染入口：严格校验把关，宽松解析提供原子
pub fn render_molecule(content: &str) -> RenderOutcome {
    if !validate_xyz(content) {
        return RenderOutcome::Invalid;
    }

    let molecule = build_molecule(content);
    match Scene::build(&molecule.atoms, &molecule.bonds) {
        Some(scene) => RenderOutcome::Scene { molecule, scene },
        None => RenderOutcome::Empty,
    }
}
