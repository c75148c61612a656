//! # 二维投影场景
//!
//! 把原子与键正交投影到屏幕平面，生成可直接绘制的图元。
//!
//! ## 算法
//! 1. 丢弃 z 并取 -y（屏幕坐标 y 向下）
//! 2. 计算投影点的包围盒
//! 3. 四周各留 20 单位边距；宽或高不超过 0.1 时改用固定 100
//! 4. 原子半径取视口较小边的 5%，键线宽取原子半径的 20%
//! 5. 每个原子一个圆（按元素着色，白色描边，描边宽为键线宽一半）
//! 6. 每个键一条灰色线段
//!
//! ## 依赖关系
//! - 被 `viewer/mod.rs` 和 `viewer/plot.rs` 使用
//! - 使用 `viewer/elements.rs` 的颜色表

use crate::models::{Atom, Bond};
use crate::viewer::elements::{atom_color, Color};

/// 包围盒四周边距
pub const VIEWPORT_PADDING: f64 = 20.0;

/// 分子尺寸退化阈值
pub const DEGENERATE_EXTENT: f64 = 0.1;

/// 退化时使用的视口边长
pub const FALLBACK_VIEWPORT_SIZE: f64 = 100.0;

const ATOM_RADIUS_FRACTION: f64 = 0.05;
const BOND_WIDTH_FRACTION: f64 = 0.2;

/// 键的颜色（中性灰）
pub const BOND_COLOR: Color = Color::rgb(0x55, 0x55, 0x55);

/// 原子描边颜色
pub const OUTLINE_COLOR: Color = Color::rgb(0xFF, 0xFF, 0xFF);

/// 视口（场景坐标）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// 由投影点计算视口，点集为空时返回 None
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let extent = |span: f64| {
            if span > DEGENERATE_EXTENT {
                span + VIEWPORT_PADDING * 2.0
            } else {
                FALLBACK_VIEWPORT_SIZE
            }
        };

        Some(Viewport {
            x: min_x - VIEWPORT_PADDING,
            y: min_y - VIEWPORT_PADDING,
            width: extent(max_x - min_x),
            height: extent(max_y - min_y),
        })
    }

    /// 较小的边长
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// 原子圆
#[derive(Debug, Clone, PartialEq)]
pub struct AtomCircle {
    /// 对应原子下标
    pub index: usize,
    pub element: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// 键线段
#[derive(Debug, Clone, PartialEq)]
pub struct BondLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
    pub width: f64,
}

/// 可绘制场景
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub atom_radius: f64,
    pub bond_width: f64,
    pub atoms: Vec<AtomCircle>,
    pub bonds: Vec<BondLine>,
}

/// 正交投影：丢弃 z，翻转 y
pub fn project(atom: &Atom) -> (f64, f64) {
    (atom.x, -atom.y)
}

impl Scene {
    /// 构建场景；没有原子时返回 None，由调用方显示“无分子”状态
    ///
    /// `bonds` 中的下标必须落在 `atoms` 范围内（由 `infer_bonds` 保证），越界的键被忽略。
    pub fn build(atoms: &[Atom], bonds: &[Bond]) -> Option<Self> {
        let projected: Vec<(f64, f64)> = atoms.iter().map(project).collect();
        let viewport = Viewport::fit(&projected)?;

        let atom_radius = viewport.min_side() * ATOM_RADIUS_FRACTION;
        let bond_width = atom_radius * BOND_WIDTH_FRACTION;

        let bond_lines = bonds
            .iter()
            .filter_map(|bond| {
                let (x1, y1) = *projected.get(bond.atom1)?;
                let (x2, y2) = *projected.get(bond.atom2)?;
                Some(BondLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: BOND_COLOR,
                    width: bond_width,
                })
            })
            .collect();

        let atom_circles = atoms
            .iter()
            .zip(&projected)
            .enumerate()
            .map(|(index, (atom, &(cx, cy)))| AtomCircle {
                index,
                element: atom.element.clone(),
                cx,
                cy,
                radius: atom_radius,
                fill: atom_color(&atom.element),
                stroke: OUTLINE_COLOR,
                stroke_width: bond_width * 0.5,
            })
            .collect();

        Some(Scene {
            viewport,
            atom_radius,
            bond_width,
            atoms: atom_circles,
            bonds: bond_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::bonds::infer_bonds;
    use crate::viewer::elements::DEFAULT_COLOR;

    #[test]
    fn test_empty_atoms_no_scene() {
        assert!(Scene::build(&[], &[]).is_none());
    }

    #[test]
    fn test_single_atom_fallback_viewport() {
        let atoms = vec![Atom::new("C", 3.0, 4.0, 5.0)];
        let scene = Scene::build(&atoms, &[]).unwrap();

        assert_eq!(scene.viewport.width, FALLBACK_VIEWPORT_SIZE);
        assert_eq!(scene.viewport.height, FALLBACK_VIEWPORT_SIZE);
        assert!((scene.viewport.x - (3.0 - 20.0)).abs() < 1e-12);
        assert!((scene.viewport.y - (-4.0 - 20.0)).abs() < 1e-12);
        assert!((scene.atom_radius - 5.0).abs() < 1e-12);
        assert!((scene.bond_width - 1.0).abs() < 1e-12);
        assert!(scene.bonds.is_empty());
    }

    #[test]
    fn test_projection_flips_y_and_drops_z() {
        let atoms = vec![Atom::new("O", 1.5, 2.5, -9.0)];
        assert_eq!(project(&atoms[0]), (1.5, -2.5));
    }

    #[test]
    fn test_viewport_padding() {
        let atoms = vec![
            Atom::new("C", 0.0, 0.0, 0.0),
            Atom::new("C", 10.0, 0.0, 0.0),
            Atom::new("C", 0.0, 5.0, 0.0),
        ];
        let scene = Scene::build(&atoms, &[]).unwrap();

        // 宽 10 + 40，高 5 + 40
        assert!((scene.viewport.width - 50.0).abs() < 1e-12);
        assert!((scene.viewport.height - 45.0).abs() < 1e-12);
        assert!((scene.viewport.x + 20.0).abs() < 1e-12);
        assert!((scene.viewport.y + 25.0).abs() < 1e-12);
        assert!((scene.atom_radius - 2.25).abs() < 1e-12);
        assert!((scene.bond_width - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_hydrogen_molecule_scene() {
        // 沿 z 排列，投影后宽高均退化
        let atoms = vec![Atom::new("H", 0.0, 0.0, 0.0), Atom::new("H", 0.0, 0.0, 0.74)];
        let bonds = infer_bonds(&atoms);
        let scene = Scene::build(&atoms, &bonds).unwrap();

        assert_eq!(scene.atoms.len(), 2);
        assert_eq!(scene.bonds.len(), 1);
        assert_eq!(scene.viewport.width, FALLBACK_VIEWPORT_SIZE);
        assert_eq!(scene.bonds[0].color, BOND_COLOR);
        assert_eq!(scene.atoms[0].fill.hex(), "#FFFFFF");
        assert!((scene.atoms[0].stroke_width - scene.bond_width * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_element_renders_pink() {
        let atoms = vec![Atom::new("Xx", 0.0, 0.0, 0.0)];
        let scene = Scene::build(&atoms, &[]).unwrap();
        assert_eq!(scene.atoms[0].fill, DEFAULT_COLOR);
    }

    #[test]
    fn test_bond_endpoints_follow_projection() {
        let atoms = vec![Atom::new("C", 0.0, 0.0, 0.0), Atom::new("C", 1.2, 0.8, 0.3)];
        let bonds = infer_bonds(&atoms);
        let scene = Scene::build(&atoms, &bonds).unwrap();

        let line = &scene.bonds[0];
        assert_eq!((line.x1, line.y1), (0.0, -0.0));
        assert_eq!((line.x2, line.y2), (1.2, -0.8));
    }

    #[test]
    fn test_scene_deterministic() {
        let atoms = vec![
            Atom::new("N", 0.1, 0.2, 0.3),
            Atom::new("H", 1.0, 0.2, 0.3),
            Atom::new("H", 0.1, 1.1, 0.3),
        ];
        let bonds = infer_bonds(&atoms);
        assert_eq!(Scene::build(&atoms, &bonds), Scene::build(&atoms, &bonds));
    }
}
