//! # export 命令实现
//!
//! 从材料记录导出 .xyz 文件。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `parsers/` 读取记录，`viewer/export.rs` 生成文件

use crate::cli::export::ExportArgs;
use crate::error::Result;
use crate::parsers;
use crate::utils::output;
use crate::viewer::export::{save_xyz, WriteStatus};

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Exporting XYZ File");

    let record = parsers::parse_material_record_file(&args.record)?;
    let name = args.name.as_deref().unwrap_or(&record.material_name);

    output::print_info(&format!("Material: {}", record.material_name));

    match save_xyz(&record.xyz_coordinates, name, &args.output, args.overwrite)? {
        WriteStatus::Written(path) => {
            output::print_saved("XYZ", &path.display().to_string());
        }
        WriteStatus::Skipped(path) => {
            output::print_skip(&format!(
                "Output exists, use --overwrite to replace: {}",
                path.display()
            ));
        }
    }

    Ok(())
}
