//! SVG export of decoded pages.
//!
//! Point coordinates are fractions of the page, so the drawing is scaled up to
//! the fixed 850×1100 canvas by a group transform. Each pair of consecutive
//! points in a stroke becomes its own `<line>`, so the width can follow the
//! pen pressure: `line_width_scale * mean(pressure)`. Strokes are drawn black;
//! colors and tools are not interpreted.

use crate::error::{QuillError, Result};
use crate::model::{Page, CANVAS_HEIGHT, CANVAS_WIDTH};
use std::io::Write;

pub const DEFAULT_LINE_WIDTH_SCALE: f64 = 0.003;
pub const DEFAULT_MARGIN: f64 = 0.010;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub line_width_scale: f64,
    /// Offset applied before scaling to the canvas.
    pub margin: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_width_scale: DEFAULT_LINE_WIDTH_SCALE,
            margin: DEFAULT_MARGIN,
        }
    }
}

pub fn write_page_svg<W: Write>(out: &mut W, page: &Page, opts: &RenderOptions) -> Result<()> {
    let (width, height) = (CANVAS_WIDTH, CANVAS_HEIGHT);
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    )?;
    writeln!(
        out,
        r##"<g transform="translate({m} {m}) scale({w} {h})" fill="none" stroke="#000000" stroke-linecap="round" stroke-linejoin="round">"##,
        m = opts.margin,
        w = width,
        h = height
    )?;

    let mut skipped = 0usize;
    for stroke in &page.strokes {
        for segment in stroke.segments() {
            let coords = [segment.from.x, segment.from.y, segment.to.x, segment.to.y];
            if !coords.iter().all(|c| c.is_finite()) || !segment.pressure.is_finite() {
                skipped += 1;
                continue;
            }
            let stroke_width = opts.line_width_scale * f64::from(segment.pressure);
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}"/>"#,
                segment.from.x, segment.from.y, segment.to.x, segment.to.y, stroke_width
            )?;
        }
    }
    if skipped > 0 {
        log::warn!("skipped {} segment(s) with non-finite values", skipped);
    }

    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;
    Ok(())
}

pub fn render_page_svg(page: &Page, opts: &RenderOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_page_svg(&mut buf, page, opts)?;
    String::from_utf8(buf).map_err(|e| QuillError::Encode(e.to_string()))
}
