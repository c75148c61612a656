//! # design 子命令 CLI 定义
//!
//! 材料需求与 AI 服务配置。需求可以来自命令行参数、JSON 文件或两者组合
//! （命令行参数覆盖文件中的同名字段）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/design.rs`

use super::render::ImageFormat;
use crate::design::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::models::{Biodegradability, Conductivity, Elasticity};

use clap::Args;
use std::path::PathBuf;

/// design 子命令参数
#[derive(Args, Debug)]
pub struct DesignArgs {
    // ─────────────────────────────────────────────────────────────
    // 材料需求
    // ─────────────────────────────────────────────────────────────
    /// Load requirements from a JSON file (camelCase keys)
    #[arg(long)]
    pub requirements: Option<PathBuf>,

    /// Material functionality (required)
    #[arg(long)]
    pub functionality: Option<String>,

    /// Intended use / application (required)
    #[arg(long)]
    pub use_case: Option<String>,

    /// Compatibility requirements
    #[arg(long)]
    pub compatibility: Option<String>,

    /// Operating environment
    #[arg(long)]
    pub environment: Option<String>,

    /// Electrical conductivity
    #[arg(long, value_enum)]
    pub conductivity: Option<Conductivity>,

    /// Elasticity
    #[arg(long, value_enum)]
    pub elasticity: Option<Elasticity>,

    /// Biodegradability
    #[arg(long, value_enum)]
    pub biodegradability: Option<Biodegradability>,

    /// Regulatory & compliance needs
    #[arg(long)]
    pub regulatory: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // AI 服务配置
    // ─────────────────────────────────────────────────────────────
    /// API key for the generative AI service
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model name
    #[arg(long, env = "MATFORGE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API endpoint base URL
    #[arg(long, env = "MATFORGE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.7)]
    pub temperature: f64,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,

    // ─────────────────────────────────────────────────────────────
    // 输出
    // ─────────────────────────────────────────────────────────────
    /// Directory for the record, .xyz export and structure picture
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Save the material record as JSON
    #[arg(long, default_value_t = false)]
    pub save_record: bool,

    /// Save the .xyz file (refused when the structure is invalid)
    #[arg(long, default_value_t = false)]
    pub save_xyz: bool,

    /// Structure picture format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: ImageFormat,

    /// Skip the structure picture
    #[arg(long, default_value_t = false)]
    pub no_render: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
