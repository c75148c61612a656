//! # 键推断
//!
//! 仅根据原子间距离与共价半径推断成键，不考虑键级、芳香性或价态。
//!
//! ## 判据
//! d_ij 落在 (0.5, (r_i + r_j) × 1.2) 开区间内即成键。
//! 下限排除坐标重合的退化情况（视为不成键，而非错误）。
//!
//! ## 依赖关系
//! - 被 `viewer/mod.rs` 调用
//! - 使用 `viewer/elements.rs` 的共价半径表

use crate::models::{Atom, Bond};
use crate::viewer::elements::covalent_radius;

/// 允许键长略微拉伸的容差系数
pub const BOND_TOLERANCE: f64 = 1.2;

/// 最小成键距离 (Å)
pub const MIN_BOND_DISTANCE: f64 = 0.5;

/// 推断键列表，每对原子最多出现一次且 atom1 < atom2
///
/// O(N²)，分子规模在几十个原子以内。
pub fn infer_bonds(atoms: &[Atom]) -> Vec<Bond> {
    let radii: Vec<f64> = atoms.iter().map(|a| covalent_radius(&a.element)).collect();
    let mut bonds = Vec::new();

    for i in 0..atoms.len() {
        for j in (i + 1)..atoms.len() {
            let distance = atoms[i].distance_to(&atoms[j]);
            let max_bond_length = (radii[i] + radii[j]) * BOND_TOLERANCE;

            if distance > MIN_BOND_DISTANCE && distance < max_bond_length {
                bonds.push(Bond::new(i, j));
            }
        }
    }

    bonds
}
