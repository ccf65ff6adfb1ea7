// File: crates/atlas-core/src/types.rs
// Summary: Shared constants and the padded plot rectangle.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1500;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 900;

/// Padding as a share of the surface width when none is given.
pub const DEFAULT_PADDING_RATIO: f32 = 0.02;

/// Half length of an axis tick mark, in pixels.
pub const TICK_HALF: f32 = 5.0;

/// Pointer distance that counts as touching a dot or line vertex.
pub const HOVER_RADIUS: f64 = 5.0;

/// Surface pixel (origin top-left, as pointers report it) to plot space on a surface `height` tall.
pub fn to_plot_space(height: i32, px: f64, py: f64) -> (f64, f64) {
    (px, height as f64 - py)
}

/// Rectangle in plot space (origin bottom-left, y grows upward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl PlotRect {
    /// Surface of `width` x `height` shrunk by `padding` on every side.
    pub fn padded(width: i32, height: i32, padding: f32) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self {
            left: padding,
            bottom: padding,
            right: (w - padding).max(padding),
            top: (h - padding).max(padding),
        }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.top - self.bottom }

    pub fn x_range(&self) -> (f64, f64) { (self.left as f64, self.right as f64) }
    pub fn y_range(&self) -> (f64, f64) { (self.bottom as f64, self.top as f64) }
}
