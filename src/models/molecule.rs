//! # 分子结构数据模型
//!
//! 原子以其在列表中的下标作为唯一标识，键只通过下标引用原子。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs` 和 `viewer/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 原子信息（笛卡尔坐标，Å）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号（大小写不敏感）
    pub element: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Atom {
    pub fn new(element: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Atom {
            element: element.into(),
            x,
            y,
            z,
        }
    }

    /// 到另一个原子的欧氏距离
    pub fn distance_to(&self, other: &Atom) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// 化学键：无序下标对，约定 atom1 < atom2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
}

impl Bond {
    pub fn new(atom1: usize, atom2: usize) -> Self {
        Bond { atom1, atom2 }
    }
}

/// 分子：原子列表及其推断出的键
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// 结构标签（XYZ 第二行）
    pub label: String,

    pub atoms: Vec<Atom>,

    /// 由原子列表派生，原子变化时必须重新计算
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new(label: impl Into<String>, atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Molecule {
            label: label.into(),
            atoms,
            bonds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// 计算化学式（按元素字母序）
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 成键原子之间的距离
    pub fn bond_length(&self, bond: &Bond) -> Option<f64> {
        let a = self.atoms.get(bond.atom1)?;
        let b = self.atoms.get(bond.atom2)?;
        Some(a.distance_to(b))
    }
}
