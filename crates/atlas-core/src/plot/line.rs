// File: crates/atlas-core/src/plot/line.rs
// Summary: Line plot: scatter points joined in x order.

use skia_safe as skia;
use tracing::debug;

use crate::axis::AxesProperties;
use crate::draw::{draw_points, draw_polyline};
use crate::error::Result;
use crate::hover::{HoverLayer, Placement};
use crate::plot::dot::{place_marks, point_targets};
use crate::plot::Plot;
use crate::table::Table;
use crate::viewport::Viewport;

#[derive(Clone, Debug)]
pub struct LinePlot {
    pub table: Table,
    pub x: String,
    pub y: String,
    pub info: Vec<String>,
    pub color: skia::Color,
    pub filled: bool,
    pub radius: f32,
    pub line_width: f32,
    pub padding: Option<f32>,
    pub axes: Option<AxesProperties>,
}

impl LinePlot {
    pub fn new(table: Table, x: impl Into<String>, y: impl Into<String>) -> Self {
        let (x, y) = (x.into(), y.into());
        Self {
            table,
            info: vec![x.clone(), y.clone()],
            x,
            y,
            color: skia::Color::BLACK,
            filled: false,
            radius: 5.0,
            line_width: 1.0,
            padding: None,
            axes: None,
        }
    }

    pub fn with_info(mut self, info: Vec<String>) -> Self { self.info = info; self }
    pub fn with_color(mut self, color: skia::Color) -> Self { self.color = color; self }
    pub fn with_filled(mut self, filled: bool) -> Self { self.filled = filled; self }
    pub fn with_radius(mut self, radius: f32) -> Self { self.radius = radius; self }
    pub fn with_line_width(mut self, width: f32) -> Self { self.line_width = width; self }
    pub fn with_padding(mut self, padding: f32) -> Self { self.padding = Some(padding); self }
    pub fn with_axes(mut self, axes: AxesProperties) -> Self { self.axes = Some(axes); self }
}

impl Plot for LinePlot {
    fn id(&self) -> &'static str { "line" }

    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer> {
        let marks = place_marks(vp, &self.table, &self.x, &self.y, self.padding)?;
        let canvas = vp.canvas();
        draw_points(canvas, &marks.points, self.color, self.filled, self.radius);
        draw_polyline(canvas, &marks.points, self.color, self.line_width);
        if let Some(axes) = &self.axes {
            axes.draw(vp, &marks.rows.xs, &marks.rows.ys, marks.padding)?;
        }
        debug!(points = marks.points.len(), "line plot drawn");
        let targets = point_targets(&marks, &self.info);
        Ok(HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByIndex, targets))
    }
}
