// File: crates/chart-core/src/render.rs
// Summary: Headless PNG/RGBA rendering of a chart using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::{Axis, AxisOrient, TICK_PADDING, TICK_SIZE};
use crate::chart::Chart;
use crate::color::Color;
use crate::curve::PathCommand;
use crate::error::ChartError;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::tooltip::Tooltip;

const LABEL_SIZE: f32 = 10.0;
const TOOLTIP_TEXT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 5.0;

pub struct RenderOptions {
    /// Overrides the theme background when set.
    pub background: Option<Color>,
    pub draw_labels: bool,
    pub draw_tooltip: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: None, draw_labels: true, draw_tooltip: true }
    }
}

fn sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

impl Chart {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Surface("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels as `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Surface("reading pixels failed".into()).into());
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn draw_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let outer = match self.scene() {
            Some(scene) => scene.outer(),
            None => self.config.sizing.outer(),
        };
        let (w, h) = ((outer.width.ceil() as i32).max(1), (outer.height.ceil() as i32).max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {w}x{h} raster surface")))?;
        let theme = &self.config.theme;
        let canvas = surface.canvas();
        canvas.clear(sk(opts.background.unwrap_or(theme.background)));

        if let Some(scene) = self.scene() {
            canvas.save();
            canvas.translate((scene.insets.left as f32, scene.insets.top as f32));
            draw_axis(canvas, scene, &scene.x_axis, theme, opts.draw_labels);
            draw_axis(canvas, scene, &scene.y_axis, theme, opts.draw_labels);
            draw_line(canvas, scene);
            canvas.restore();
        }
        if opts.draw_tooltip {
            if let Some(t) = self.tooltip().filter(|t| t.visible) {
                draw_tooltip(canvas, t, theme, (w as f32, h as f32));
            }
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, scene: &Scene, axis: &Axis, theme: &Theme, labels: bool) {
    let mut line = skia::Paint::default();
    line.set_color(sk(theme.axis_line));
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    line.set_stroke_width(1.0);

    let mut text = skia::Paint::default();
    text.set_color(sk(theme.axis_label));
    text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(LABEL_SIZE);

    let k = axis.direction() as f32;
    let tick = TICK_SIZE as f32;
    let gap = (TICK_SIZE + TICK_PADDING) as f32;
    let (r0, r1) = (axis.range.0.min(axis.range.1) as f32, axis.range.0.max(axis.range.1) as f32);

    match axis.orient {
        AxisOrient::Bottom => {
            let y = scene.plot.height as f32;
            canvas.draw_line((r0, y), (r1, y), &line);
            for t in &axis.ticks {
                let x = t.offset as f32;
                canvas.draw_line((x, y), (x, y + k * tick), &line);
                if labels {
                    let (width, _) = font.measure_str(&t.label, Some(&text));
                    canvas.draw_str(&t.label, (x - width / 2.0, y + gap + LABEL_SIZE), &font, &text);
                }
            }
        }
        AxisOrient::Left => {
            canvas.draw_line((0.0, r0), (0.0, r1), &line);
            for t in &axis.ticks {
                let y = t.offset as f32;
                canvas.draw_line((0.0, y), (k * tick, y), &line);
                if labels {
                    let (width, _) = font.measure_str(&t.label, Some(&text));
                    canvas.draw_str(&t.label, (-gap - width, y + LABEL_SIZE * 0.32), &font, &text);
                }
            }
        }
    }
}

fn draw_line(canvas: &skia::Canvas, scene: &Scene) {
    if scene.path.is_empty() {
        return;
    }
    let mut path = skia::Path::new();
    for cmd in scene.path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { path.move_to((p.x as f32, p.y as f32)); }
            PathCommand::LineTo(p) => { path.line_to((p.x as f32, p.y as f32)); }
            PathCommand::CubicTo { control1: a, control2: b, to } => {
                path.cubic_to((a.x as f32, a.y as f32), (b.x as f32, b.y as f32), (to.x as f32, to.y as f32));
            }
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(scene.stroke.width as f32);
    // An unparseable color leaves the line invisible, as a browser would.
    stroke.set_color(sk(scene.stroke.color.unwrap_or(Color::TRANSPARENT)));
    canvas.draw_path(&path, &stroke);
}

fn draw_tooltip(canvas: &skia::Canvas, tooltip: &Tooltip, theme: &Theme, bounds: (f32, f32)) {
    let mut text = skia::Paint::default();
    text.set_color(sk(theme.tooltip_text));
    text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(TOOLTIP_TEXT_SIZE);

    let lines = tooltip.lines();
    let width = lines
        .iter()
        .map(|l| font.measure_str(l, Some(&text)).0)
        .fold(0.0f32, f32::max);
    let line_h = TOOLTIP_TEXT_SIZE * 1.25;
    let box_w = width + TOOLTIP_PADDING * 2.0;
    let box_h = line_h * lines.len() as f32 + TOOLTIP_PADDING * 2.0;

    // Keep the box on the surface.
    let left = (tooltip.position.x as f32).min(bounds.0 - box_w).max(0.0);
    let top = (tooltip.position.y as f32).min(bounds.1 - box_h).max(0.0);
    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(sk(theme.tooltip_background));
    canvas.draw_rect(rect, &fill);

    let mut border = skia::Paint::default();
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(sk(theme.tooltip_border));
    canvas.draw_rect(rect, &border);

    for (i, l) in lines.iter().enumerate() {
        let baseline = top + TOOLTIP_PADDING + line_h * i as f32 + TOOLTIP_TEXT_SIZE;
        canvas.draw_str(l, (left + TOOLTIP_PADDING, baseline), &font, &text);
    }
}
