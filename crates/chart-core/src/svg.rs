// File: crates/chart-core/src/svg.rs
// Summary: Standalone SVG output mirroring the in-page markup (axis groups, one path, overlay).

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::axis::{Axis, AxisOrient, TICK_PADDING, TICK_SIZE};
use crate::chart::Chart;
use crate::render::RenderOptions;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::tooltip::Tooltip;

impl Scene {
    /// Complete `<svg>` document for this scene.
    pub fn to_svg(&self, theme: &Theme, tooltip: Option<&Tooltip>, draw_labels: bool) -> String {
        let outer = self.outer();
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            outer.width, outer.height, outer.width, outer.height
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background);
        let _ = writeln!(out, r#"<g transform="translate({},{})">"#, self.insets.left, self.insets.top);
        write_axis(&mut out, self, &self.x_axis, theme, draw_labels);
        write_axis(&mut out, self, &self.y_axis, theme, draw_labels);
        let _ = writeln!(
            out,
            r#"<path class="{}" d="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
            self.curve.class_name(),
            self.path.to_svg_data(),
            escape(&self.stroke.css),
            self.stroke.width
        );
        let _ = writeln!(
            out,
            r#"<rect class="overlay" width="{}" height="{}" fill="none" pointer-events="all"/>"#,
            self.plot.width, self.plot.height
        );
        out.push_str("</g>\n");
        if let Some(t) = tooltip.filter(|t| t.visible) {
            write_tooltip(&mut out, t, theme);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Chart {
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Option<String> {
        let tooltip = if opts.draw_tooltip { self.tooltip() } else { None };
        self.scene().map(|s| s.to_svg(&self.config.theme, tooltip, opts.draw_labels))
    }

    /// Write the SVG document to `output_svg_path`. Charts without a scene write an empty canvas.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        let doc = self.render_to_svg_string(opts).unwrap_or_else(|| {
            let outer = self.config.sizing.outer();
            format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\"></svg>\n",
                outer.width, outer.height
            )
        });
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn write_axis(out: &mut String, scene: &Scene, axis: &Axis, theme: &Theme, labels: bool) {
    let k = axis.direction() * TICK_SIZE;
    let gap = axis.direction() * (TICK_SIZE + TICK_PADDING);
    let (class, transform, anchor) = match axis.orient {
        AxisOrient::Bottom => ("x axis", format!("translate(0,{})", scene.plot.height), "middle"),
        AxisOrient::Left => ("y axis", String::new(), "end"),
    };
    let _ = write!(out, r#"<g class="{class}" fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}""#);
    if !transform.is_empty() {
        let _ = write!(out, r#" transform="{transform}""#);
    }
    out.push_str(">\n");
    let _ = writeln!(out, r#"<path class="domain" stroke="{}" d="{}"/>"#, theme.axis_line, axis.domain_path());
    for t in &axis.ticks {
        let (tick_transform, line, text) = match axis.orient {
            AxisOrient::Bottom => (
                format!("translate({},0)", t.offset + 0.5),
                format!(r#"<line stroke="{}" y2="{k}"/>"#, theme.axis_line),
                format!(r#"<text fill="{}" y="{gap}" dy="0.71em">{}</text>"#, theme.axis_label, escape(&t.label)),
            ),
            AxisOrient::Left => (
                format!("translate(0,{})", t.offset + 0.5),
                format!(r#"<line stroke="{}" x2="{k}"/>"#, theme.axis_line),
                format!(r#"<text fill="{}" x="{gap}" dy="0.32em">{}</text>"#, theme.axis_label, escape(&t.label)),
            ),
        };
        let _ = write!(out, r#"<g class="tick" opacity="1" transform="{tick_transform}">{line}"#);
        if labels {
            out.push_str(&text);
        }
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n");
}

fn write_tooltip(out: &mut String, t: &Tooltip, theme: &Theme) {
    let [time, data] = t.lines();
    let width = time.len().max(data.len()) as f64 * 7.0 + 10.0;
    let _ = writeln!(
        out,
        r#"<g class="tooltip" transform="translate({},{})"><rect width="{width}" height="40" fill="{}" stroke="{}"/><text x="5" y="16" font-size="12" fill="{}">{}</text><text x="5" y="32" font-size="12" fill="{}">{}</text></g>"#,
        t.position.x, t.position.y, theme.tooltip_background, theme.tooltip_border,
        theme.tooltip_text, escape(&time), theme.tooltip_text, escape(&data)
    );
}

/// Escape text for XML attribute and element content.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
