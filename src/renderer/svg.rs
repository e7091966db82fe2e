//! SVG generation from grid layouts

use crate::catalog::Icon;
use crate::layout::{BoundingBox, Cell, GridLayout};
use crate::theme::Theme;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Open a group translated to `(x, y)`
    pub fn start_group(&mut self, x: f64, y: f64) {
        self.elements.push(format!(
            r#"{}<g transform="translate({}, {})">"#,
            self.indent_str(),
            fmt_num(x),
            fmt_num(y)
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Add a title element (tooltip / accessible name)
    pub fn add_title(&mut self, text: &str) {
        self.elements.push(format!(
            "{}<title>{}</title>",
            self.indent_str(),
            escape_xml(text)
        ));
    }

    /// Add a rounded square at the group origin
    pub fn add_rounded_square(&mut self, size: f64, radius: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}" rx="{}" fill="{}"/>"#,
            self.indent_str(),
            fmt_num(size),
            fmt_num(size),
            fmt_num(radius),
            escape_xml(fill)
        ));
    }

    /// Add a glyph path, offset by `offset` on both axes and scaled
    pub fn add_glyph(&mut self, d: &str, fill: &str, offset: f64, scale: f64) {
        self.elements.push(format!(
            r#"{}<path d="{}" fill="{}" transform="translate({}, {}) scale({})"/>"#,
            self.indent_str(),
            escape_xml(d),
            escape_xml(fill),
            fmt_num(offset),
            fmt_num(offset),
            fmt_scale(scale)
        ));
    }

    /// Build the final SVG string sized to `canvas`
    pub fn build(self, canvas: BoundingBox) -> String {
        let nl = self.newline();
        let width = fmt_num(canvas.width);
        let height = fmt_num(canvas.height);

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            width,
            height,
            fmt_num(canvas.x),
            fmt_num(canvas.y),
            width,
            height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render icons into the cells of a grid layout
///
/// `icons` and `layout.cells` are paired by position; extra entries on
/// either side are ignored.
pub fn render_grid(
    icons: &[&Icon],
    layout: &GridLayout,
    theme: Theme,
    config: &SvgConfig,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for (icon, cell) in icons.iter().zip(&layout.cells) {
        render_cell(icon, cell, layout, theme, config, &mut builder);
    }

    builder.build(layout.bounds)
}

/// Render a single icon cell to the builder
fn render_cell(
    icon: &Icon,
    cell: &Cell,
    layout: &GridLayout,
    theme: Theme,
    config: &SvgConfig,
    builder: &mut SvgBuilder,
) {
    let grid = &layout.config;

    builder.start_group(cell.bounds.x, cell.bounds.y);
    if config.titles {
        builder.add_title(&icon.title);
    }
    builder.add_rounded_square(cell.bounds.width, grid.corner_radius(), &theme.cell_fill(icon));
    builder.add_glyph(
        &icon.path,
        &theme.glyph_fill(icon),
        grid.padding(),
        grid.glyph_scale(),
    );
    builder.end_group();
}

/// Format a coordinate with at most two decimals and no trailing zeros
///
/// Keeps output byte-stable where plain float formatting would print
/// artifacts such as `172.79999999999998`.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_fixed(value, 2)
}

/// Format a glyph scale factor
///
/// Scales are `size / 48` and need more digits than coordinates: at two
/// decimals a 32px cell would print `0.67` and the glyph would overflow
/// its padded interior.
pub(crate) fn fmt_scale(value: f64) -> String {
    fmt_fixed(value, 6)
}

fn fmt_fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
