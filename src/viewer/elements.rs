//! # 元素属性表
//!
//! 元素符号（大写）到 CPK 显示颜色与共价半径的静态映射。
//! 未收录的元素使用 DEFAULT 条目（粉色，0.8 Å）。
//!
//! ## 数据来源
//! - 颜色：CPK 配色
//! - 共价半径：单键共价半径 (Å)
//!
//! ## 依赖关系
//! - 被 `viewer/bonds.rs` 和 `viewer/scene.rs` 调用
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// `#RRGGBB` 形式
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// 未知元素颜色（粉色）
pub const DEFAULT_COLOR: Color = Color::rgb(0xFF, 0xC0, 0xCB);

/// 未知元素共价半径 (Å)
pub const DEFAULT_COVALENT_RADIUS: f64 = 0.8;

/// CPK 颜色表
pub static CPK_COLORS: LazyLock<HashMap<&'static str, Color>> = LazyLock::new(|| {
    HashMap::from([
        ("H", Color::rgb(0xFF, 0xFF, 0xFF)),
        ("C", Color::rgb(0x28, 0x28, 0x28)),
        ("N", Color::rgb(0x00, 0x00, 0xFF)),
        ("O", Color::rgb(0xFF, 0x00, 0x00)),
        ("F", Color::rgb(0x90, 0xE0, 0x50)),
        ("CL", Color::rgb(0x1F, 0xF0, 0x1F)),
        ("BR", Color::rgb(0xA6, 0x29, 0x29)),
        ("I", Color::rgb(0x94, 0x00, 0x94)),
        ("S", Color::rgb(0xFF, 0xFF, 0x00)),
        ("P", Color::rgb(0xFF, 0xA5, 0x00)),
        ("B", Color::rgb(0xFA, 0x80, 0x72)),
        ("SI", Color::rgb(0xF0, 0xC8, 0xA0)),
    ])
});

/// 共价半径表 (Å)
pub static COVALENT_RADII: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("H", 0.37),
        ("C", 0.77),
        ("N", 0.75),
        ("O", 0.73),
        ("F", 0.71),
        ("S", 1.02),
        ("CL", 0.99),
        ("P", 1.1),
        ("SI", 1.17),
        ("BR", 1.14),
        ("I", 1.33),
    ])
});

/// 获取元素显示颜色（大小写不敏感）
pub fn atom_color(element: &str) -> Color {
    CPK_COLORS
        .get(element.to_uppercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_COLOR)
}

/// 获取元素共价半径（大小写不敏感）
pub fn covalent_radius(element: &str) -> f64 {
    COVALENT_RADII
        .get(element.to_uppercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_COVALENT_RADIUS)
}
