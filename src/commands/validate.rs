//! # validate 命令实现
//!
//! 对坐标块做严格格式校验，并给出宽松解析能取出的原子数作为对照。
//!
//! ## 功能
//! - 单文件：打印结论，失败时返回错误
//! - 目录：并行校验，打印汇总表，可导出 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/validate.rs` 定义的参数
//! - 使用 `parsers/`, `viewer/bonds.rs`
//! - 使用 `batch/`, `utils/output.rs`
//! - 使用 `csv` 写报告，`tabled` 打印表格

use crate::batch::{BatchRunner, FileCollector};
use crate::cli::validate::ValidateArgs;
use crate::error::{MatforgeError, Result};
use crate::parsers::{self, xyz};
use crate::utils::output;
use crate::viewer;

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 单个文件的校验结果
#[derive(Debug, Clone)]
pub struct ValidationRow {
    pub file: String,
    pub name: String,
    pub valid: bool,
    /// 宽松解析得到的原子数
    pub parsed_atoms: usize,
    pub bonds: usize,
    pub reason: String,
}

#[derive(Tabled)]
struct ValidationTableRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Valid")]
    valid: String,
    #[tabled(rename = "Atoms")]
    atoms: usize,
    #[tabled(rename = "Bonds")]
    bonds: usize,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 validate 命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    output::print_header("Coordinate Block Validation");

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_directory(&args)
    } else {
        Err(MatforgeError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 校验一段坐标文本
pub fn validate_content(file: &str, name: &str, content: &str) -> ValidationRow {
    let molecule = viewer::build_molecule(content);
    let (valid, reason) = match xyz::check_xyz(content) {
        Ok(()) => (true, String::new()),
        Err(violation) => (false, violation.to_string()),
    };

    ValidationRow {
        file: file.to_string(),
        name: name.to_string(),
        valid,
        parsed_atoms: molecule.atoms.len(),
        bonds: molecule.bonds.len(),
        reason,
    }
}

/// 读取并校验一个文件；无法读取时记为无效
fn validate_file(path: &Path) -> ValidationRow {
    let file = path.display().to_string();
    match parsers::load_coordinate_block(path) {
        Ok(source) => validate_content(&file, &source.name, &source.content),
        Err(e) => ValidationRow {
            file,
            name: String::new(),
            valid: false,
            parsed_atoms: 0,
            bonds: 0,
            reason: e.to_string(),
        },
    }
}

/// 单文件模式
fn execute_single_file(args: &ValidateArgs) -> Result<()> {
    let row = validate_file(&args.input);

    if let Some(ref report) = args.report {
        write_report(std::slice::from_ref(&row), report)?;
    }

    if row.valid {
        output::print_success(&format!(
            "'{}' is a valid XYZ block ({} atoms, {} bonds)",
            row.name, row.parsed_atoms, row.bonds
        ));
        Ok(())
    } else {
        if row.parsed_atoms > 0 {
            output::print_info(&format!(
                "Lenient parser still extracts {} atom(s)",
                row.parsed_atoms
            ));
        }
        Err(MatforgeError::InvalidStructure {
            path: row.file,
            reason: row.reason,
        })
    }
}

/// 目录模式
fn execute_directory(args: &ValidateArgs) -> Result<()> {
    let files: Vec<PathBuf> = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Checking {} files", files.len()));

    let runner = BatchRunner::new(args.jobs);
    let rows = runner.map(&files, |file| validate_file(file));

    let table_rows: Vec<ValidationTableRow> = rows
        .iter()
        .map(|r| ValidationTableRow {
            file: r.file.clone(),
            valid: if r.valid { "yes" } else { "no" }.to_string(),
            atoms: r.parsed_atoms,
            bonds: r.bonds,
            reason: r.reason.clone(),
        })
        .collect();
    println!("{}", Table::new(&table_rows));

    if let Some(ref report) = args.report {
        write_report(&rows, report)?;
        output::print_saved("Report", &report.display().to_string());
    }

    let valid = rows.iter().filter(|r| r.valid).count();
    output::print_separator();
    output::print_done(&format!(
        "{} valid, {} invalid",
        valid,
        rows.len() - valid
    ));

    Ok(())
}

/// 写出 CSV 报告
pub fn write_report(rows: &[ValidationRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "name", "valid", "parsed_atoms", "bonds", "reason"])?;
    for row in rows {
        wtr.write_record([
            row.file.clone(),
            row.name.clone(),
            row.valid.to_string(),
            row.parsed_atoms.to_string(),
            row.bonds.to_string(),
            row.reason.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| MatforgeError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
