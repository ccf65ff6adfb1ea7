// File: crates/atlas-core/src/text.rs
// Summary: Text shaping and drawing via Skia textlayout, upright inside a y-up canvas.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Arial", "Helvetica", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, bold);
        p.longest_line()
    }

    /// Draw `text` with its left edge at `x`, vertically centred on `y`, rotated by
    /// `angle` degrees. The canvas is y-up, so glyphs are flipped back locally.
    pub fn draw_middle(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        angle: f32,
    ) {
        let mut p = self.layout(text, size, color, true);
        let half = p.height() * 0.5;
        canvas.save();
        canvas.translate((x, y));
        canvas.scale((1.0, -1.0));
        canvas.rotate(angle, None);
        p.paint(canvas, (0.0, -half));
        canvas.restore();
    }

    /// Draw lines top-down from `(x, y)` on a y-down canvas (overlay surfaces).
    pub fn draw_lines_top_left(&self, canvas: &skia::Canvas, lines: &[String], x: f32, y: f32, size: f32, color: skia::Color) {
        let mut cursor = y;
        for line in lines {
            let mut p = self.layout(line, size, color, false);
            let h = p.height().max(size * 1.2);
            p.paint(canvas, (x, cursor));
            cursor += h;
        }
    }
}
