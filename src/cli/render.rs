//! # render 子命令 CLI 定义
//!
//! 由 .xyz 文件或材料记录 (.json) 生成二维结构图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/render.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 结构图输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ImageFormat {
    /// SVG vector image
    Svg,
    /// PNG image
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// render 子命令参数
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input: .xyz / .json file, or directory containing them
    pub input: PathBuf,

    /// Output: file path (single mode, "-" for SVG on stdout) or directory (batch mode)
    #[arg(short, long, default_value = "molecule.svg")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ImageFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title drawn on the picture (default: structure label)
    #[arg(long)]
    pub title: Option<String>,

    /// Do not draw a title
    #[arg(long, default_value_t = false)]
    pub no_title: bool,

    /// Print atom and bond tables (single mode)
    #[arg(long, default_value_t = false)]
    pub tables: bool,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode, comma separated)
    #[arg(long, default_value = "*.xyz,*.json")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
