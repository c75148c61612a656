//! # render 命令实现
//!
//! 由坐标块生成二维结构图。
//!
//! ## 功能
//! - 支持单文件和批量目录处理
//! - 严格校验不通过时不渲染
//! - 输出 SVG/PNG，可选打印原子与键表
//!
//! ## 依赖关系
//! - 使用 `cli/render.rs` 定义的 RenderArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `viewer/` 模块构建场景与绘图
//! - 使用 `parsers/` 读取坐标块

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::render::{ImageFormat, RenderArgs};
use crate::error::{MatforgeError, Result};
use crate::parsers::{self, xyz::check_xyz};
use crate::utils::{output, tables};
use crate::viewer::{self, RenderOutcome};

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 render 命令
pub fn execute(args: RenderArgs) -> Result<()> {
    output::print_header("Molecular Structure Rendering");

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(MatforgeError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单个结构的绘图参数
struct PlotOptions {
    format: ImageFormat,
    width: u32,
    height: u32,
    title: Option<String>,
    no_title: bool,
}

/// 从文件扩展名推断输出格式
pub fn guess_format_from_extension(path: &Path) -> ImageFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("png") => ImageFormat::Png,
        _ => ImageFormat::Svg,
    }
}

/// 严格校验失败的说明
fn invalid_reason(content: &str) -> String {
    match check_xyz(content) {
        Err(violation) => format!("{} ({})", viewer::INVALID_STRUCTURE_MESSAGE, violation),
        Ok(()) => viewer::INVALID_STRUCTURE_MESSAGE.to_string(),
    }
}

/// 渲染一个坐标块并写出图像，返回结构名与原子/键数量
fn render_to_file(
    input: &Path,
    output_path: &Path,
    options: &PlotOptions,
    print_tables: bool,
) -> Result<Option<(String, usize, usize)>> {
    let source = parsers::load_coordinate_block(input)?;

    match viewer::render_molecule(&source.content) {
        RenderOutcome::Scene { molecule, scene } => {
            let title = if options.no_title {
                None
            } else if let Some(ref t) = options.title {
                Some(t.clone())
            } else if molecule.label.is_empty() {
                Some(source.name.clone())
            } else {
                Some(molecule.label.clone())
            };

            viewer::plot::generate_molecule_plot(
                &scene,
                output_path,
                title.as_deref(),
                options.width,
                options.height,
                options.format == ImageFormat::Svg,
            )?;

            if print_tables {
                tables::print_atom_table(&molecule);
                tables::print_bond_table(&molecule);
            }

            Ok(Some((
                format!("{} ({})", source.name, molecule.formula()),
                molecule.atoms.len(),
                molecule.bonds.len(),
            )))
        }
        RenderOutcome::Invalid => Err(MatforgeError::InvalidStructure {
            path: input.display().to_string(),
            reason: invalid_reason(&source.content),
        }),
        RenderOutcome::Empty => Ok(None),
    }
}

/// 单文件模式
fn execute_single_file(args: &RenderArgs) -> Result<()> {
    if args.output == Path::new("-") {
        return write_svg_to_stdout(args);
    }

    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let options = PlotOptions {
        format: args
            .format
            .unwrap_or_else(|| guess_format_from_extension(&args.output)),
        width: args.width,
        height: args.height,
        title: args.title.clone(),
        no_title: args.no_title,
    };

    if args.output.exists() && !args.overwrite {
        output::print_skip(&format!(
            "Output exists, use --overwrite to replace: {}",
            args.output.display()
        ));
        return Ok(());
    }

    match render_to_file(&args.input, &args.output, &options, args.tables)? {
        Some((name, atoms, bonds)) => {
            output::print_success(&format!(
                "Rendered '{}' ({} atoms, {} bonds) to '{}'",
                name,
                atoms,
                bonds,
                args.output.display()
            ));
        }
        None => output::print_warning(viewer::EMPTY_STRUCTURE_MESSAGE),
    }

    Ok(())
}

/// `-o -`：SVG 直接写到标准输出
fn write_svg_to_stdout(args: &RenderArgs) -> Result<()> {
    let source = parsers::load_coordinate_block(&args.input)?;

    match viewer::render_molecule(&source.content) {
        RenderOutcome::Scene { scene, .. } => {
            let svg = viewer::plot::scene_to_svg(&scene, args.width, args.height)?;
            println!("{}", svg);
            Ok(())
        }
        RenderOutcome::Invalid => Err(MatforgeError::InvalidStructure {
            path: args.input.display().to_string(),
            reason: invalid_reason(&source.content),
        }),
        RenderOutcome::Empty => {
            output::print_warning(viewer::EMPTY_STRUCTURE_MESSAGE);
            Ok(())
        }
    }
}

/// 批量处理模式
fn execute_batch(args: &RenderArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
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

    output::print_info(&format!("Found {} structure files", files.len()));

    // 批量模式下 output 为目录
    fs::create_dir_all(&args.output).map_err(|e| MatforgeError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let options = PlotOptions {
        format: args.format.unwrap_or(ImageFormat::Svg),
        width: args.width,
        height: args.height,
        title: args.title.clone(),
        no_title: args.no_title,
    };
    output::print_info(&format!("Output format: {}", options.format));

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(&files, |file| {
        process_batch_file(file, &args.input, &args.output, &options, args.overwrite)
    });

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} files, {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    for path in &result.outputs {
        output::print_saved("Structure", path);
    }
    for reason in &result.skips {
        output::print_skip(reason);
    }

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 批量模式的输出路径
///
/// 保留输入相对目录与完整文件名（`a/water.xyz` → `out/a/water.xyz.svg`），
/// 同名不同扩展名或不同子目录的输入不会写到同一个文件。
fn batch_output_path(
    input_root: &Path,
    input: &Path,
    output_dir: &Path,
    format: ImageFormat,
) -> PathBuf {
    let relative = input
        .strip_prefix(input_root)
        .ok()
        .filter(|r| !r.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.file_name().map(PathBuf::from).unwrap_or_default());

    let file_name = relative
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("molecule");
    let output_name = format!("{}.{}", file_name, format.extension());

    match relative.parent() {
        Some(parent) => output_dir.join(parent).join(output_name),
        None => output_dir.join(output_name),
    }
}

/// 处理批量模式中的单个文件
fn process_batch_file(
    input: &PathBuf,
    input_root: &Path,
    output_dir: &Path,
    options: &PlotOptions,
    overwrite: bool,
) -> ProcessResult {
    let output_file = batch_output_path(input_root, input, output_dir, options.format);

    if output_file.exists() && !overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    if let Some(parent) = output_file.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            return ProcessResult::Failed(input.display().to_string(), e.to_string());
        }
    }

    match render_to_file(input, &output_file, options, false) {
        Ok(Some(_)) => {
            ProcessResult::Success(output_file.display().to_string())
        }
        Ok(None) => ProcessResult::Skipped(format!(
            "{}: {}",
            input.display(),
            viewer::EMPTY_STRUCTURE_MESSAGE
        )),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("a.PNG")), ImageFormat::Png);
        assert_eq!(guess_format_from_extension(Path::new("a.svg")), ImageFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a")), ImageFormat::Svg);
    }

    #[test]
    fn test_invalid_reason_mentions_violation() {
        let reason = invalid_reason("3\nTest\nH 0 0 0\nH 0 0 0.74\n");
        assert!(reason.starts_with(viewer::INVALID_STRUCTURE_MESSAGE));
        assert!(reason.contains("declared 3 atoms but found 2 data lines"));
    }

    #[test]
    fn test_batch_file_renders_svg() {
        let dir = std::env::temp_dir().join(format!("matforge_render_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("water.xyz");
        fs::write(
            &input,
            "3\nWater\nO 0 0 0.117\nH 0 0.757 -0.469\nH 0 -0.757 -0.469\n",
        )
        .unwrap();

        let options = PlotOptions {
            format: ImageFormat::Svg,
            width: 200,
            height: 200,
            title: None,
            no_title: true,
        };
        let out_dir = dir.join("out");
        fs::create_dir_all(&out_dir).unwrap();

        let result = process_batch_file(&input, &dir, &out_dir, &options, false);
        assert!(matches!(result, ProcessResult::Success(_)));
        assert!(out_dir.join("water.xyz.svg").exists());

        let again = process_batch_file(&input, &dir, &out_dir, &options, false);
        assert!(matches!(again, ProcessResult::Skipped(_)));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_batch_file_invalid_fails() {
        let dir = std::env::temp_dir().join(format!("matforge_render_bad_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("bad.xyz");
        fs::write(&input, "5\nBad\nC 0 0 0\n").unwrap();

        let options = PlotOptions {
            format: ImageFormat::Svg,
            width: 200,
            height: 200,
            title: None,
            no_title: true,
        };

        let result = process_batch_file(&input, &dir, &dir, &options, true);
        assert!(matches!(result, ProcessResult::Failed(_, _)));
        assert!(!dir.join("bad.xyz.svg").exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_batch_output_paths_distinct() {
        let root = Path::new("/data/in");
        let out = Path::new("/data/out");

        assert_eq!(
            batch_output_path(root, Path::new("/data/in/water.xyz"), out, ImageFormat::Svg),
            PathBuf::from("/data/out/water.xyz.svg")
        );
        assert_eq!(
            batch_output_path(root, Path::new("/data/in/water.json"), out, ImageFormat::Svg),
            PathBuf::from("/data/out/water.json.svg")
        );
        assert_eq!(
            batch_output_path(root, Path::new("/data/in/a/mol.xyz"), out, ImageFormat::Png),
            PathBuf::from("/data/out/a/mol.xyz.png")
        );
        assert_ne!(
            batch_output_path(root, Path::new("/data/in/a/mol.xyz"), out, ImageFormat::Png),
            batch_output_path(root, Path::new("/data/in/b/mol.xyz"), out, ImageFormat::Png)
        );
    }

    #[test]
    fn test_batch_same_stem_inputs_both_rendered() {
        let dir = std::env::temp_dir().join(format!("matforge_render_stem_{}", std::process::id()));
        let nested = dir.join("sub");
        fs::create_dir_all(&nested).unwrap();

        let block = "2\nH2\nH 0 0 0\nH 0 0 0.74\n";
        fs::write(dir.join("h2.xyz"), block).unwrap();
        fs::write(nested.join("h2.xyz"), block).unwrap();
        let record = serde_json::json!({
            "materialName": "H2",
            "description": "d",
            "xyzCoordinates": block,
            "synthesisMethodology": "s",
            "validationSummary": "v"
        });
        fs::write(dir.join("h2.json"), record.to_string()).unwrap();

        let files = FileCollector::new(dir.clone())
            .with_pattern("*.xyz,*.json")
            .unwrap()
            .recursive(true)
            .collect();
        assert_eq!(files.len(), 3);

        let options = PlotOptions {
            format: ImageFormat::Svg,
            width: 200,
            height: 200,
            title: None,
            no_title: true,
        };
        let out_dir = std::env::temp_dir().join(format!("matforge_render_stem_out_{}", std::process::id()));
        let result = BatchRunner::new(2).run(&files, |file| {
            process_batch_file(file, &dir, &out_dir, &options, false)
        });

        assert_eq!(result.success, 3);
        assert_eq!(result.outputs.len(), 3);
        assert!(out_dir.join("h2.xyz.svg").exists());
        assert!(out_dir.join("h2.json.svg").exists());
        assert!(out_dir.join("sub").join("h2.xyz.svg").exists());

        fs::remove_dir_all(&dir).ok();
        fs::remove_dir_all(&out_dir).ok();
    }
}
