// File: crates/atlas-core/src/plot/dot.rs
// Summary: Scatter plot of two numeric columns with hoverable points.

use skia_safe as skia;
use tracing::debug;

use crate::axis::AxesProperties;
use crate::draw::draw_points;
use crate::error::Result;
use crate::hover::{HitShape, HoverLayer, HoverTarget, Placement};
use crate::plot::{resolve_padding, Plot, XyRows};
use crate::table::Table;
use crate::types::HOVER_RADIUS;
use crate::viewport::Viewport;

#[derive(Clone, Debug)]
pub struct DotPlot {
    pub table: Table,
    pub x: String,
    pub y: String,
    /// Columns listed in the tooltip.
    pub info: Vec<String>,
    pub color: skia::Color,
    pub filled: bool,
    pub radius: f32,
    /// Margin around the plot rectangle; 2% of the width when unset.
    pub padding: Option<f32>,
    pub axes: Option<AxesProperties>,
}

impl DotPlot {
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
            padding: None,
            axes: None,
        }
    }

    pub fn with_info(mut self, info: Vec<String>) -> Self { self.info = info; self }
    pub fn with_color(mut self, color: skia::Color) -> Self { self.color = color; self }
    pub fn with_filled(mut self, filled: bool) -> Self { self.filled = filled; self }
    pub fn with_radius(mut self, radius: f32) -> Self { self.radius = radius; self }
    pub fn with_padding(mut self, padding: f32) -> Self { self.padding = Some(padding); self }
    pub fn with_axes(mut self, axes: AxesProperties) -> Self { self.axes = Some(axes); self }
}

/// Points of a scatter or line plot, sorted by x, in plot space.
pub(crate) struct Marks {
    pub table: Table,
    pub rows: XyRows,
    pub points: Vec<(f64, f64)>,
    pub padding: f32,
}

pub(crate) fn place_marks(vp: &Viewport, table: &Table, x: &str, y: &str, padding: Option<f32>) -> Result<Marks> {
    let mut table = table.clone();
    table.sort_by_column(x)?;
    let padding = resolve_padding(padding, vp);
    let rect = vp.plot_rect(padding);
    let rows = XyRows::collect(&table, x, y)?;
    let (sx, sy) = rows.scales(&rect, None)?;
    let points = rows.project(&sx, &sy);
    Ok(Marks { table, rows, points, padding })
}

pub(crate) fn point_targets(marks: &Marks, info: &[String]) -> Vec<HoverTarget> {
    marks
        .rows
        .rows
        .iter()
        .zip(&marks.points)
        .map(|(&row, &(cx, cy))| HoverTarget {
            shape: HitShape::Circle { cx, cy, r: HOVER_RADIUS },
            lines: marks.table.info_lines(row, info),
        })
        .collect()
}

impl Plot for DotPlot {
    fn id(&self) -> &'static str { "dot" }

    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer> {
        let marks = place_marks(vp, &self.table, &self.x, &self.y, self.padding)?;
        draw_points(vp.canvas(), &marks.points, self.color, self.filled, self.radius);
        if let Some(axes) = &self.axes {
            axes.draw(vp, &marks.rows.xs, &marks.rows.ys, marks.padding)?;
        }
        debug!(points = marks.points.len(), "dot plot drawn");
        let targets = point_targets(&marks, &self.info);
        Ok(HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByIndex, targets))
    }
}
