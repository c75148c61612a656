//! # export 子命令 CLI 定义
//!
//! 从材料记录导出 .xyz 文件，坐标块未通过严格校验时拒绝导出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Material record JSON file (as produced by `design --save-record`)
    pub record: PathBuf,

    /// Output directory for the .xyz file
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Override the material name used for the file name
    #[arg(long)]
    pub name: Option<String>,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
