//! # 分子结构图生成
//!
//! 使用 `plotters` 把场景绘制到 SVG 或 PNG。
//!
//! ## 功能
//! - 视口等比缩放并在画布中居中（等价于 SVG 的 `xMidYMid meet`）
//! - 先画键再画原子，原子带白色描边
//! - 可选左上角标题
//!
//! ## 依赖关系
//! - 被 `commands/render.rs` 和 `commands/design.rs` 调用
//! - 使用 `viewer/scene.rs` 的 Scene 结构
//! - 使用 `plotters` 渲染图像

use crate::error::{MatforgeError, Result};
use crate::viewer::elements::Color as SceneColor;
use crate::viewer::scene::{Scene, Viewport};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 画布背景色
const BACKGROUND: RGBColor = RGBColor(0x0F, 0x17, 0x2A);

fn rgb(color: SceneColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// 场景坐标到像素坐标的映射
#[derive(Debug, Clone, Copy)]
struct PixelMap {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    viewport: Viewport,
}

impl PixelMap {
    fn new(viewport: Viewport, width: u32, height: u32) -> Self {
        let scale = (width as f64 / viewport.width).min(height as f64 / viewport.height);
        PixelMap {
            scale,
            offset_x: (width as f64 - viewport.width * scale) / 2.0,
            offset_y: (height as f64 - viewport.height * scale) / 2.0,
            viewport,
        }
    }

    fn point(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (self.offset_x + (x - self.viewport.x) * self.scale).round() as i32,
            (self.offset_y + (y - self.viewport.y) * self.scale).round() as i32,
        )
    }

    fn length(&self, len: f64) -> f64 {
        len * self.scale
    }
}

/// 生成结构图文件
pub fn generate_molecule_plot(
    scene: &Scene,
    output_path: &Path,
    title: Option<&str>,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scene(&root, scene, title, width, height)?;
        root.present()
            .map_err(|e| MatforgeError::RenderError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scene(&root, scene, title, width, height)?;
        root.present()
            .map_err(|e| MatforgeError::RenderError(e.to_string()))?;
    }
    Ok(())
}

/// 生成 SVG 字符串
pub fn scene_to_svg(scene: &Scene, width: u32, height: u32) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
        draw_scene(&root, scene, None, width, height)?;
        root.present()
            .map_err(|e| MatforgeError::RenderError(e.to_string()))?;
    }
    Ok(buffer)
}

/// 绘制场景的核心逻辑
fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    title: Option<&str>,
    width: u32,
    height: u32,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&BACKGROUND)
        .map_err(|e| MatforgeError::RenderError(format!("{:?}", e)))?;

    let map = PixelMap::new(scene.viewport, width, height);

    for bond in &scene.bonds {
        let stroke = (map.length(bond.width).round() as u32).max(1);
        root.draw(&PathElement::new(
            vec![map.point(bond.x1, bond.y1), map.point(bond.x2, bond.y2)],
            rgb(bond.color).stroke_width(stroke),
        ))
        .map_err(|e| MatforgeError::RenderError(format!("{:?}", e)))?;
    }

    for atom in &scene.atoms {
        let center = map.point(atom.cx, atom.cy);
        let radius = (map.length(atom.radius).round() as i32).max(1);
        let outline = (map.length(atom.stroke_width).round() as u32).max(1);

        root.draw(&Circle::new(center, radius, rgb(atom.fill).filled()))
            .map_err(|e| MatforgeError::RenderError(format!("{:?}", e)))?;
        root.draw(&Circle::new(
            center,
            radius,
            rgb(atom.stroke).stroke_width(outline),
        ))
        .map_err(|e| MatforgeError::RenderError(format!("{:?}", e)))?;
    }

    if let Some(title) = title {
        root.draw(&Text::new(
            title.to_string(),
            (12, 12),
            ("sans-serif", 20).into_font().color(&WHITE),
        ))
        .map_err(|e| MatforgeError::RenderError(format!("{:?}", e)))?;
    }

    Ok(())
}
