//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `design`: 调用 AI 服务设计材料并预览结构
//! - `render`: 由坐标块生成结构图
//! - `validate`: 严格校验坐标块
//! - `export`: 从材料记录导出 .xyz 文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: design, render, validate, export

pub mod design;
pub mod export;
pub mod render;
pub mod validate;

use clap::{Parser, Subcommand};

/// matforge - AI 辅助功能材料设计工具
#[derive(Parser)]
#[command(name = "matforge")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "AI-assisted functional material design with molecular structure preview", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Design a material from requirements using a generative AI service
    Design(design::DesignArgs),

    /// Render a 2D molecule picture from an XYZ block or material record
    Render(render::RenderArgs),

    /// Strictly validate XYZ blocks (single file or directory)
    Validate(validate::ValidateArgs),

    /// Export the .xyz file of a material record
    Export(export::ExportArgs),
}
