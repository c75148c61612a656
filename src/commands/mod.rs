//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `design/`, `viewer/`, `utils/`
//! - 子模块: design, render, validate, export

pub mod design;
pub mod export;
pub mod render;
pub mod validate;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Design(args) => design::execute(args),
        Commands::Render(args) => render::execute(args),
        Commands::Validate(args) => validate::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
