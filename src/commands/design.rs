//! # design 命令实现
//!
//! 收集材料需求 → 调用 AI 服务 → 展示材料记录与结构预览 → 按需保存。
//!
//! ## 流程
//! 1. 合并 JSON 需求文件与命令行参数，检查必填字段
//! 2. 调用 `MaterialDesigner`（等待期间显示 spinner）
//! 3. 打印名称、描述、合成方法与验证摘要
//! 4. 坐标块通过严格校验时绘制结构图，否则提示并禁用导出
//! 5. 可选保存记录 JSON 与 .xyz 文件
//!
//! ## 依赖关系
//! - 使用 `cli/design.rs` 定义的参数
//! - 使用 `design/` 调用服务，`viewer/` 渲染与导出
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/tables.rs`

use crate::cli::design::DesignArgs;
use crate::cli::render::ImageFormat;
use crate::design::{GeminiClient, GeminiConfig, MaterialDesigner};
use crate::error::{MatforgeError, Result};
use crate::models::{MaterialRecord, UserRequirements};
use crate::utils::{output, progress, tables};
use crate::viewer::export::{export_stem, save_xyz, WriteStatus};
use crate::viewer::{self, RenderOutcome};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 执行 design 命令
pub fn execute(args: DesignArgs) -> Result<()> {
    output::print_header("AI Material Design");

    let requirements = collect_requirements(&args)?;

    let mut config = GeminiConfig::new(args.api_key.clone());
    config.model = args.model.clone();
    config.endpoint = args.endpoint.clone();
    config.temperature = args.temperature;
    config.timeout = Duration::from_secs(args.timeout);

    let client = GeminiClient::new(config)?;
    output::print_info(&format!("Model: {}", client.config().model));

    let record = request_design(&client, &requirements)?;
    present_record(&record, &args)
}

/// 合并需求文件与命令行参数，命令行优先
pub fn collect_requirements(args: &DesignArgs) -> Result<UserRequirements> {
    let mut req = match args.requirements {
        Some(ref path) => read_requirements_file(path)?,
        None => UserRequirements::default(),
    };

    if let Some(ref v) = args.functionality {
        req.functionality = v.clone();
    }
    if let Some(ref v) = args.use_case {
        req.use_case = v.clone();
    }
    if let Some(ref v) = args.compatibility {
        req.compatibility = v.clone();
    }
    if let Some(ref v) = args.environment {
        req.environment = v.clone();
    }
    if let Some(v) = args.conductivity {
        req.conductivity = v;
    }
    if let Some(v) = args.elasticity {
        req.elasticity = v;
    }
    if let Some(v) = args.biodegradability {
        req.biodegradability = v;
    }
    if let Some(ref v) = args.regulatory {
        req.regulatory_compliance = v.clone();
    }

    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(MatforgeError::MissingRequirement(missing.join(" ")));
    }

    Ok(req)
}

fn read_requirements_file(path: &Path) -> Result<UserRequirements> {
    let content = fs::read_to_string(path).map_err(|e| MatforgeError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| MatforgeError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 调用服务，等待期间显示 spinner
pub fn request_design(
    designer: &impl MaterialDesigner,
    requirements: &UserRequirements,
) -> Result<MaterialRecord> {
    let spinner = progress::create_spinner("Designing material...");
    let result = designer.design(requirements);
    spinner.finish_and_clear();

    if let Err(ref failure) = result {
        output::print_info(&format!("Failure category: {}", failure.kind()));
    }

    Ok(result?)
}

/// 展示记录并写出请求的文件
fn present_record(record: &MaterialRecord, args: &DesignArgs) -> Result<()> {
    output::print_success(&format!("Designed '{}'", record.material_name));
    println!();
    output::print_section(&record.material_name, &record.description);
    output::print_section("Synthesis Methodology", &record.synthesis_methodology);
    output::print_section("AI Validation Summary", &record.validation_summary);

    let stem = export_stem(&record.material_name);

    match viewer::render_molecule(&record.xyz_coordinates) {
        RenderOutcome::Scene { molecule, scene } => {
            tables::print_atom_table(&molecule);
            tables::print_bond_table(&molecule);

            if !args.no_render {
                let path = picture_path(&args.output, &stem, args.format);
                if path.exists() && !args.overwrite {
                    output::print_skip(&format!(
                        "Output exists, use --overwrite to replace: {}",
                        path.display()
                    ));
                } else {
                    create_output_dir(&args.output)?;
                    viewer::plot::generate_molecule_plot(
                        &scene,
                        &path,
                        Some(&record.material_name),
                        800,
                        800,
                        args.format == ImageFormat::Svg,
                    )?;
                    output::print_saved("Structure", &path.display().to_string());
                }
            }
        }
        outcome => {
            if let Some(message) = outcome.message() {
                output::print_warning(message);
            }
            if outcome == RenderOutcome::Invalid {
                output::print_info("Export is disabled for this structure");
            }
        }
    }

    if args.save_record {
        save_record(record, &args.output, &stem, args.overwrite)?;
    }

    if args.save_xyz {
        match save_xyz(
            &record.xyz_coordinates,
            &record.material_name,
            &args.output,
            args.overwrite,
        ) {
            Ok(WriteStatus::Written(path)) => {
                output::print_saved("XYZ", &path.display().to_string())
            }
            Ok(WriteStatus::Skipped(path)) => output::print_skip(&format!(
                "Output exists, use --overwrite to replace: {}",
                path.display()
            )),
            Err(e @ MatforgeError::ExportRefused { .. }) => output::print_warning(&e.to_string()),
            Err(e) => return Err(e),
        }
    }

    output::print_separator();
    output::print_done("Design complete");
    Ok(())
}

fn picture_path(dir: &Path, stem: &str, format: ImageFormat) -> PathBuf {
    dir.join(format!("{}.{}", stem, format.extension()))
}

fn create_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| MatforgeError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })
}

/// 保存记录 JSON
pub fn save_record(
    record: &MaterialRecord,
    dir: &Path,
    stem: &str,
    overwrite: bool,
) -> Result<WriteStatus> {
    create_output_dir(dir)?;

    let path = dir.join(format!("{}.json", stem));
    if path.exists() && !overwrite {
        output::print_skip(&format!(
            "Output exists, use --overwrite to replace: {}",
            path.display()
        ));
        return Ok(WriteStatus::Skipped(path));
    }

    let json = serde_json::to_string_pretty(record).map_err(|e| MatforgeError::JsonError {
        path: path.display().to_string(),
        source: e,
    })?;
    fs::write(&path, json).map_err(|e| MatforgeError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    output::print_saved("Record", &path.display().to_string());
    Ok(WriteStatus::Written(path))
}
