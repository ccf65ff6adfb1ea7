// File: crates/atlas-core/src/plot/bubble.rs
// Summary: Bubble chart: scatter with marker size taken from a third column.

use skia_safe as skia;
use tracing::debug;

use crate::axis::AxesProperties;
use crate::draw::draw_bubbles;
use crate::error::Result;
use crate::hover::{HitShape, HoverLayer, HoverTarget, Placement};
use crate::plot::{bubble_sizes, resolve_padding, Plot, XyRows};
use crate::table::Table;
use crate::types::{PlotRect, HOVER_RADIUS};
use crate::viewport::Viewport;

#[derive(Clone, Debug)]
pub struct BubblePlot {
    pub table: Table,
    pub x: String,
    pub y: String,
    /// Column driving the bubble radius.
    pub size: String,
    pub min_size: f64,
    pub max_size: f64,
    pub info: Vec<String>,
    pub color: skia::Color,
    pub padding: Option<f32>,
    pub axes: Option<AxesProperties>,
}

impl BubblePlot {
    pub fn new(table: Table, x: impl Into<String>, y: impl Into<String>, size: impl Into<String>) -> Self {
        let (x, y, size) = (x.into(), y.into(), size.into());
        Self {
            table,
            info: vec![x.clone(), y.clone(), size.clone()],
            x,
            y,
            size,
            min_size: 2.0,
            max_size: 50.0,
            color: skia::Color::from_rgb(0, 139, 139),
            padding: None,
            axes: None,
        }
    }

    pub fn with_sizes(mut self, min_size: f64, max_size: f64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn with_info(mut self, info: Vec<String>) -> Self { self.info = info; self }
    pub fn with_color(mut self, color: skia::Color) -> Self { self.color = color; self }
    pub fn with_padding(mut self, padding: f32) -> Self { self.padding = Some(padding); self }
    pub fn with_axes(mut self, axes: AxesProperties) -> Self { self.axes = Some(axes); self }
}

/// Bubbles in plot space, smallest first so large ones paint on top.
pub(crate) struct Bubbles {
    pub table: Table,
    pub rows: XyRows,
    pub circles: Vec<(f64, f64, f64)>,
}

pub(crate) struct BubbleColumns<'a> {
    pub x: &'a str,
    pub y: &'a str,
    pub size: &'a str,
    pub min_size: f64,
    pub max_size: f64,
}

pub(crate) fn place_bubbles(
    table: &Table,
    cols: &BubbleColumns<'_>,
    rect: &PlotRect,
    frame: Option<((f64, f64), (f64, f64))>,
) -> Result<Bubbles> {
    let mut table = table.clone();
    table.sort_by_column(cols.size)?;
    let rows = XyRows::collect(&table, cols.x, cols.y)?;
    let radii = bubble_sizes(&table, cols.size, &rows.rows, cols.min_size, cols.max_size)?;
    let (sx, sy) = rows.scales(rect, frame)?;
    let circles = rows
        .project(&sx, &sy)
        .into_iter()
        .zip(radii)
        .map(|((x, y), r)| (x, y, r))
        .collect();
    Ok(Bubbles { table, rows, circles })
}

pub(crate) fn bubble_targets(bubbles: &Bubbles, info: &[String]) -> Vec<HoverTarget> {
    bubbles
        .rows
        .rows
        .iter()
        .zip(&bubbles.circles)
        .map(|(&row, &(cx, cy, r))| HoverTarget {
            shape: HitShape::Circle { cx, cy, r: r.max(HOVER_RADIUS) },
            lines: bubbles.table.info_lines(row, info),
        })
        .collect()
}

impl Plot for BubblePlot {
    fn id(&self) -> &'static str { "bubble" }

    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer> {
        let padding = resolve_padding(self.padding, vp);
        let rect = vp.plot_rect(padding);
        let cols = BubbleColumns {
            x: &self.x,
            y: &self.y,
            size: &self.size,
            min_size: self.min_size,
            max_size: self.max_size,
        };
        let bubbles = place_bubbles(&self.table, &cols, &rect, None)?;
        draw_bubbles(vp.canvas(), &bubbles.circles, self.color);
        if let Some(axes) = &self.axes {
            axes.draw(vp, &bubbles.rows.xs, &bubbles.rows.ys, padding)?;
        }
        debug!(bubbles = bubbles.circles.len(), "bubble plot drawn");
        let targets = bubble_targets(&bubbles, &self.info);
        Ok(HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByIndex, targets))
    }
}
