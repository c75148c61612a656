//! # 表格输出
//!
//! 使用 `tabled` 打印原子与化学键列表。
//!
//! ## 依赖关系
//! - 被 `commands/render.rs` 和 `commands/design.rs` 使用
//! - 使用 `models/molecule.rs`, `viewer/elements.rs`

use crate::models::Molecule;
use crate::utils::output;
use crate::viewer::elements::{atom_color, covalent_radius};

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "x (Å)")]
    x: String,
    #[tabled(rename = "y (Å)")]
    y: String,
    #[tabled(rename = "z (Å)")]
    z: String,
    #[tabled(rename = "r_cov (Å)")]
    radius: String,
    #[tabled(rename = "Color")]
    color: String,
}

#[derive(Tabled)]
struct BondRow {
    #[tabled(rename = "Atom 1")]
    atom1: String,
    #[tabled(rename = "Atom 2")]
    atom2: String,
    #[tabled(rename = "Length (Å)")]
    length: String,
}

/// 打印原子表
pub fn print_atom_table(molecule: &Molecule) {
    if molecule.is_empty() {
        return;
    }

    let rows: Vec<AtomRow> = molecule
        .atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| AtomRow {
            index,
            element: atom.element.clone(),
            x: format!("{:.4}", atom.x),
            y: format!("{:.4}", atom.y),
            z: format!("{:.4}", atom.z),
            radius: format!("{:.2}", covalent_radius(&atom.element)),
            color: atom_color(&atom.element).hex(),
        })
        .collect();

    output::print_header(&format!("Atoms ({}, {})", rows.len(), molecule.formula()));
    println!("{}", Table::new(&rows));
}

/// 打印化学键表
pub fn print_bond_table(molecule: &Molecule) {
    let label = |i: usize| {
        molecule
            .atoms
            .get(i)
            .map(|a| format!("{}{}", a.element, i))
            .unwrap_or_else(|| i.to_string())
    };

    let rows: Vec<BondRow> = molecule
        .bonds
        .iter()
        .map(|bond| BondRow {
            atom1: label(bond.atom1),
            atom2: label(bond.atom2),
            length: molecule
                .bond_length(bond)
                .map(|d| format!("{:.3}", d))
                .unwrap_or_default(),
        })
        .collect();

    if rows.is_empty() {
        output::print_info("No bonds inferred");
    } else {
        output::print_header(&format!("Bonds ({})", rows.len()));
        println!("{}", Table::new(&rows));
    }
}
