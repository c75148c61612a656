//! # matforge - AI 辅助功能材料设计工具
//!
//! 根据用户需求调用生成式 AI 服务设计功能材料，并对返回的分子坐标
//! 做校验、键推断与二维结构预览，统一成单一可执行文件。
//!
//! ## 子命令
//! - `design`   - 提交材料需求，展示材料记录与结构预览
//! - `render`   - 由 XYZ 坐标块或材料记录生成结构图（支持批量）
//! - `validate` - 严格校验 XYZ 坐标块（支持批量与 CSV 报告）
//! - `export`   - 从材料记录导出 .xyz 文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (XYZ 与材料记录解析)
//!   │     ├── viewer/    (键推断、二维投影、绘图、导出)
//!   │     ├── design/    (提示词、AI 客户端、失败分类)
//!   │     ├── batch/     (批量文件处理)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod design;
mod error;
mod models;
mod parsers;
mod utils;
mod viewer;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
