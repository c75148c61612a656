//! # validate 子命令 CLI 定义
//!
//! 对坐标块做严格格式校验。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/validate.rs`

use clap::Args;
use std::path::PathBuf;

/// validate 子命令参数
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input: .xyz / .json file, or directory containing them
    pub input: PathBuf,

    /// Glob pattern for input files (directory mode, comma separated)
    #[arg(long, default_value = "*.xyz,*.json")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Write a CSV report of every checked file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
