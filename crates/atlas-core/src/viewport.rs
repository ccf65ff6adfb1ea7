// File: crates/atlas-core/src/viewport.rs
// Summary: Raster drawing surface with a bottom-left origin, plus PNG/RGBA export and tooltip compositing.

use skia_safe as skia;
use tracing::debug;

use crate::error::{AtlasError, Result};
use crate::hover::Tooltip;
use crate::text::TextShaper;
use crate::types::{self, PlotRect, DEFAULT_PADDING_RATIO};

pub struct Viewport {
    surface: skia::Surface,
    width: i32,
    height: i32,
    text: TextShaper,
}

impl Viewport {
    /// White surface of `width` x `height` with the origin moved to the bottom-left corner.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_background(width, height, skia::Color::WHITE)
    }

    pub fn with_background(width: i32, height: i32, background: skia::Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(AtlasError::InvalidSize { width, height });
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height)).ok_or(AtlasError::Surface)?;
        let canvas = surface.canvas();
        canvas.clear(background);
        // y grows upward from the bottom edge
        canvas.translate((0.0, height as f32));
        canvas.scale((1.0, -1.0));
        debug!(width, height, "viewport ready");
        Ok(Self { surface, width, height, text: TextShaper::new() })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    pub fn text_shaper(&self) -> &TextShaper {
        &self.text
    }

    /// Padding used when a plot does not set one: 2% of the width.
    pub fn default_padding(&self) -> f32 {
        self.width as f32 * DEFAULT_PADDING_RATIO
    }

    pub fn plot_rect(&self, padding: f32) -> PlotRect {
        PlotRect::padded(self.width, self.height, padding)
    }

    /// Surface pixel (origin top-left, as pointers report it) to plot space.
    pub fn to_plot_space(&self, px: f64, py: f64) -> (f64, f64) {
        types::to_plot_space(self.height, px, py)
    }

    /// Bold text centred vertically on `(x, y)` in plot space, rotated by `angle` degrees.
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: skia::Color, angle: f32) {
        let canvas = self.surface.canvas();
        self.text.draw_middle(canvas, text, x, y, size, color, angle);
    }

    pub fn render_to_png_bytes(&mut self) -> Result<Vec<u8>> {
        encode_png(&mut self.surface)
    }

    /// Write the current frame as PNG, creating parent directories.
    pub fn render_to_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA pixels: (buffer, width, height, stride).
    pub fn render_to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        read_rgba8(&mut self.surface)
    }

    pub fn render_with_tooltip_png(&mut self, tooltip: &Tooltip) -> Result<Vec<u8>> {
        let mut composed = self.compose(tooltip)?;
        encode_png(&mut composed)
    }

    pub fn render_with_tooltip_rgba8(&mut self, tooltip: &Tooltip) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut composed = self.compose(tooltip)?;
        read_rgba8(&mut composed)
    }

    /// Copy of the frame with the tooltip box on top; the frame itself is untouched.
    fn compose(&mut self, tooltip: &Tooltip) -> Result<skia::Surface> {
        let base = self.surface.image_snapshot();
        let mut out = skia::surfaces::raster_n32_premul((self.width, self.height)).ok_or(AtlasError::Surface)?;
        let canvas = out.canvas();
        canvas.draw_image(&base, (0.0, 0.0), None);
        draw_tooltip_box(canvas, &self.text, tooltip, self.width as f32, self.height as f32);
        Ok(out)
    }
}

const TOOLTIP_TEXT: f32 = 12.0;
const TOOLTIP_PAD: f32 = 8.0;

fn draw_tooltip_box(canvas: &skia::Canvas, text: &TextShaper, tooltip: &Tooltip, w: f32, h: f32) {
    let content_w = tooltip
        .lines
        .iter()
        .map(|l| text.measure_width(l, TOOLTIP_TEXT, false))
        .fold(0.0f32, f32::max);
    let box_w = content_w + TOOLTIP_PAD * 2.0;
    let box_h = tooltip.lines.len() as f32 * TOOLTIP_TEXT * 1.2 + TOOLTIP_PAD * 2.0;
    // keep the box on the surface
    let left = (tooltip.left as f32).clamp(0.0, (w - box_w).max(0.0));
    let top = (tooltip.top as f32).clamp(0.0, (h - box_h).max(0.0));
    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(skia::Color::from_argb(235, 255, 255, 255));
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(skia::Color::from_argb(255, 90, 90, 90));
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    text.draw_lines_top_left(
        canvas,
        &tooltip.lines,
        left + TOOLTIP_PAD,
        top + TOOLTIP_PAD,
        TOOLTIP_TEXT,
        skia::Color::BLACK,
    );
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(AtlasError::Encode("PNG"))?;
    Ok(data.as_bytes().to_vec())
}

fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(AtlasError::Encode("RGBA"));
    }
    Ok((pixels, w as u32, h as u32, stride))
}
