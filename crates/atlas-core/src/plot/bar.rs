// File: crates/atlas-core/src/plot/bar.rs
// Summary: Bar chart of category counts with pastel bars and category labels.

use skia_safe as skia;
use tracing::debug;

use crate::color::PastelPalette;
use crate::draw::fill_bar;
use crate::error::{AtlasError, Result};
use crate::hover::{HitShape, HoverLayer, HoverTarget, Placement};
use crate::plot::{resolve_padding, Plot};
use crate::table::{Table, Value};
use crate::viewport::Viewport;

/// Category label size in pixels.
const CATEGORY_LABEL_SIZE: f32 = 12.0;

#[derive(Clone, Debug)]
pub struct BarPlot {
    pub table: Table,
    /// Column whose distinct values become bars.
    pub category: String,
    pub padding: Option<f32>,
    /// Fixes the pastel colors; random per render when unset.
    pub seed: Option<u64>,
    pub label_color: skia::Color,
}

impl BarPlot {
    pub fn new(table: Table, category: impl Into<String>) -> Self {
        Self {
            table,
            category: category.into(),
            padding: None,
            seed: None,
            label_color: skia::Color::BLACK,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self { self.padding = Some(padding); self }
    pub fn with_seed(mut self, seed: u64) -> Self { self.seed = Some(seed); self }
}

impl Plot for BarPlot {
    fn id(&self) -> &'static str { "bar" }

    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer> {
        let counts = self.table.count_by(&self.category)?;
        if counts.is_empty() {
            return Err(AtlasError::EmptyData(format!("no rows to count in '{}'", self.category)));
        }
        let padding = resolve_padding(self.padding, vp);
        let rect = vp.plot_rect(padding);
        let bar_width = rect.width() / counts.len() as f32;
        let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f32;
        let mut palette = PastelPalette::new(self.seed);

        let mut targets = Vec::with_capacity(counts.len());
        for (i, (name, count)) in counts.iter().enumerate() {
            let left = rect.left + i as f32 * bar_width;
            let height = *count as f32 / max_count * rect.height();
            fill_bar(vp.canvas(), left, rect.bottom, bar_width, height, palette.next_color());
            // centred under the bar
            let label_w = vp.text_shaper().measure_width(name, CATEGORY_LABEL_SIZE, true);
            let label_x = left + bar_width / 2.0 - label_w / 2.0;
            vp.draw_text(name, label_x, padding / 2.0, CATEGORY_LABEL_SIZE, self.label_color, 0.0);

            targets.push(HoverTarget {
                shape: HitShape::Rect {
                    left: left as f64,
                    bottom: rect.bottom as f64,
                    width: bar_width as f64,
                    height: height as f64,
                },
                lines: vec![
                    format!("{} : {}", self.category, name),
                    format!("count : {}", Value::Number(*count as f64).tooltip_text()),
                ],
            });
        }
        debug!(bars = counts.len(), "bar plot drawn");
        Ok(HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByIndex, targets))
    }
}
