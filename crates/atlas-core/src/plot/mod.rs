// File: crates/atlas-core/src/plot/mod.rs
// Summary: Plot trait and the row-to-pixel projection shared by every chart kind.

use tracing::warn;

use crate::error::{AtlasError, Result};
use crate::hover::HoverLayer;
use crate::scale::{extent, LinearScale};
use crate::table::Table;
use crate::types::PlotRect;
use crate::viewport::Viewport;

pub mod bar;
pub mod bubble;
pub mod dot;
pub mod line;
pub mod map;

pub use bar::BarPlot;
pub use bubble::BubblePlot;
pub use dot::DotPlot;
pub use line::LinePlot;
pub use map::{HeatMap, MapBubblePlot, MapDotPlot};

/// One chart drawn onto a viewport in a single pass.
pub trait Plot {
    fn id(&self) -> &'static str;
    /// Draw the marks and return what the pointer can hover over.
    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer>;
}

/// Rows that have numbers in both columns, with their values.
pub(crate) struct XyRows {
    pub rows: Vec<usize>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl XyRows {
    pub fn collect(table: &Table, x: &str, y: &str) -> Result<Self> {
        let (xcol, ycol) = (table.numbers(x)?, table.numbers(y)?);
        let mut out = Self { rows: Vec::new(), xs: Vec::new(), ys: Vec::new() };
        let mut skipped = 0usize;
        for (i, (xv, yv)) in xcol.into_iter().zip(ycol).enumerate() {
            match (xv, yv) {
                (Some(xv), Some(yv)) => {
                    out.rows.push(i);
                    out.xs.push(xv);
                    out.ys.push(yv);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(skipped, x, y, "rows without numeric values skipped");
        }
        if out.rows.is_empty() {
            return Err(AtlasError::EmptyData(format!("no rows with numeric '{x}' and '{y}'")));
        }
        Ok(out)
    }

    /// Scales over the data extent, optionally widened to `frame` (x range, y range).
    pub fn scales(&self, rect: &PlotRect, frame: Option<((f64, f64), (f64, f64))>) -> Result<(LinearScale, LinearScale)> {
        let empty = || AtlasError::EmptyData("no finite values".into());
        let mut sx = LinearScale::new(extent(self.xs.iter().copied()).ok_or_else(empty)?, rect.x_range());
        let mut sy = LinearScale::new(extent(self.ys.iter().copied()).ok_or_else(empty)?, rect.y_range());
        if let Some((fx, fy)) = frame {
            sx = sx.union_domain(fx);
            sy = sy.union_domain(fy);
        }
        Ok((sx, sy))
    }

    pub fn project(&self, sx: &LinearScale, sy: &LinearScale) -> Vec<(f64, f64)> {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| (sx.map(x), sy.map(y))).collect()
    }
}

/// Per-row marker sizes mapped into `[min_size, max_size]`; rows without a number get `min_size`.
pub(crate) fn bubble_sizes(table: &Table, column: &str, rows: &[usize], min_size: f64, max_size: f64) -> Result<Vec<f64>> {
    let sizes = table.numbers(column)?;
    let picked: Vec<Option<f64>> = rows.iter().map(|&r| sizes[r]).collect();
    let scale = LinearScale::from_values(picked.iter().flatten().copied(), (min_size, max_size));
    Ok(picked
        .into_iter()
        .map(|v| match (v, scale) {
            (Some(v), Some(s)) => s.map(v),
            _ => min_size,
        })
        .collect())
}

pub(crate) fn resolve_padding(padding: Option<f32>, vp: &Viewport) -> f32 {
    padding.unwrap_or_else(|| vp.default_padding())
}
