// File: crates/atlas-core/src/scene.rs
// Summary: TOML scene files: viewport, text, axes and plots rendered in file order.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::axis::{self, AxesProperties, AxisStyle, StepAxis};
use crate::color::parse_color;
use crate::error::Result;
use crate::geo::FeatureCollection;
use crate::hover::HoverLayer;
use crate::plot::{BarPlot, BubblePlot, DotPlot, HeatMap, LinePlot, MapBubblePlot, MapDotPlot, Plot};
use crate::table::Table;
use crate::ticks::TickMode;
use crate::types::{HEIGHT, WIDTH};
use crate::viewport::Viewport;

fn default_width() -> i32 { WIDTH }
fn default_height() -> i32 { HEIGHT }
fn black() -> String { "black".into() }
fn white() -> String { "white".into() }
fn darkcyan() -> String { "darkcyan".into() }
fn red() -> String { "red".into() }
fn dot_radius() -> f32 { 5.0 }
fn map_dot_radius() -> f32 { 7.0 }
fn line_width() -> f32 { 1.0 }
fn min_bubble() -> f64 { 2.0 }
fn max_bubble() -> f64 { 50.0 }
fn text_size() -> f32 { 16.0 }
fn label_space() -> f32 { 20.0 }
fn auto_ticks() -> TickMode { TickMode::Auto }
fn filled() -> bool { true }

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "white")]
    pub background: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, background: white() }
    }
}

/// Free text such as a title; `(x, y)` is the left edge, vertically centred, in plot space.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    pub text: String,
    pub x: f32,
    pub y: f32,
    #[serde(default = "text_size")]
    pub size: f32,
    #[serde(default = "black")]
    pub color: String,
    /// Degrees, counter-clockwise.
    #[serde(default)]
    pub angle: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    X,
    Y,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum AxisConfig {
    /// Ticks every `step` between `start` and `end`.
    Step {
        orientation: Orientation,
        start: f64,
        end: f64,
        x: f32,
        y: f32,
        step: f64,
        #[serde(default = "black")]
        color: String,
        #[serde(default = "label_space")]
        label_space: f32,
    },
    /// Ticks picked from a CSV column.
    Column {
        orientation: Orientation,
        csv: PathBuf,
        column: String,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default = "black")]
        color: String,
        #[serde(default = "label_space")]
        label_space: f32,
        #[serde(default)]
        label_angle: f32,
        padding: Option<f32>,
        /// `-1` nice interval, `0` every value, positive fixed step.
        #[serde(default = "auto_ticks")]
        ticks: TickMode,
    },
}

/// Axes drawn by a cartesian plot around its own data.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxesConfig {
    pub x_pos: f32,
    pub y_pos: f32,
    pub x_label_space: f32,
    pub y_label_space: f32,
    pub x_label_angle: f32,
    pub color: String,
    pub x_ticks: TickMode,
    pub y_ticks: TickMode,
}

impl Default for AxesConfig {
    fn default() -> Self {
        let d = AxesProperties::default();
        Self {
            x_pos: d.x_pos,
            y_pos: d.y_pos,
            x_label_space: d.x_label_space,
            y_label_space: d.y_label_space,
            x_label_angle: d.x_label_angle,
            color: black(),
            x_ticks: d.x_ticks,
            y_ticks: d.y_ticks,
        }
    }
}

impl AxesConfig {
    pub fn to_properties(&self) -> Result<AxesProperties> {
        Ok(AxesProperties {
            x_pos: self.x_pos,
            y_pos: self.y_pos,
            x_label_space: self.x_label_space,
            y_label_space: self.y_label_space,
            x_label_angle: self.x_label_angle,
            color: parse_color(&self.color)?,
            x_ticks: self.x_ticks,
            y_ticks: self.y_ticks,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum PlotConfig {
    Dot {
        csv: PathBuf,
        x: String,
        y: String,
        #[serde(default)]
        info: Vec<String>,
        #[serde(default = "black")]
        color: String,
        #[serde(default)]
        filled: bool,
        #[serde(default = "dot_radius")]
        radius: f32,
        padding: Option<f32>,
        axes: Option<AxesConfig>,
    },
    Line {
        csv: PathBuf,
        x: String,
        y: String,
        #[serde(default)]
        info: Vec<String>,
        #[serde(default = "black")]
        color: String,
        #[serde(default)]
        filled: bool,
        #[serde(default = "dot_radius")]
        radius: f32,
        #[serde(default = "line_width")]
        line_width: f32,
        padding: Option<f32>,
        axes: Option<AxesConfig>,
    },
    Bar {
        csv: PathBuf,
        column: String,
        padding: Option<f32>,
        seed: Option<u64>,
        #[serde(default = "black")]
        label_color: String,
    },
    Bubble {
        csv: PathBuf,
        x: String,
        y: String,
        size: String,
        #[serde(default = "min_bubble")]
        min_size: f64,
        #[serde(default = "max_bubble")]
        max_size: f64,
        #[serde(default)]
        info: Vec<String>,
        #[serde(default = "darkcyan")]
        color: String,
        padding: Option<f32>,
        axes: Option<AxesConfig>,
    },
    MapDot {
        geojson: PathBuf,
        csv: PathBuf,
        lon: String,
        lat: String,
        #[serde(default)]
        info: Vec<String>,
        #[serde(default = "darkcyan")]
        color: String,
        #[serde(default = "filled")]
        filled: bool,
        #[serde(default = "map_dot_radius")]
        radius: f32,
        padding: Option<f32>,
    },
    MapBubble {
        geojson: PathBuf,
        csv: PathBuf,
        lon: String,
        lat: String,
        size: String,
        #[serde(default = "min_bubble")]
        min_size: f64,
        #[serde(default = "max_bubble")]
        max_size: f64,
        #[serde(default)]
        info: Vec<String>,
        #[serde(default = "darkcyan")]
        color: String,
        padding: Option<f32>,
    },
    HeatMap {
        geojson: PathBuf,
        csv: PathBuf,
        variable: String,
        region_property: String,
        link_column: String,
        #[serde(default = "red")]
        color: String,
        #[serde(default)]
        info: Vec<String>,
        padding: Option<f32>,
    },
}

/// One frame: a viewport and the draw calls made on it, in order.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub texts: Vec<TextConfig>,
    #[serde(default)]
    pub axes: Vec<AxisConfig>,
    #[serde(default)]
    pub plots: Vec<PlotConfig>,
}

impl Scene {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let scene = Self::from_str(&text)?;
        debug!(path = %path.display(), plots = scene.plots.len(), "scene loaded");
        Ok(scene)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Draw plots, then axes, then texts; data paths are resolved against `base_dir`.
    /// Returns the frame and the hover targets of every plot, later plots on top.
    pub fn render(&self, base_dir: impl AsRef<Path>) -> Result<(Viewport, HoverLayer)> {
        let base = base_dir.as_ref();
        let background = parse_color(&self.viewport.background)?;
        let mut vp = Viewport::with_background(self.viewport.width, self.viewport.height, background)?;
        let mut hover = HoverLayer::new(vp.width(), vp.height());

        for config in &self.plots {
            let plot = build_plot(config, base)?;
            let layer = plot.draw(&mut vp)?;
            debug!(kind = plot.id(), targets = layer.len(), "plot rendered");
            hover.merge(layer);
        }
        for config in &self.axes {
            draw_axis(&mut vp, config, base)?;
        }
        for t in &self.texts {
            vp.draw_text(&t.text, t.x, t.y, t.size, parse_color(&t.color)?, t.angle);
        }
        info!(
            width = vp.width(),
            height = vp.height(),
            plots = self.plots.len(),
            targets = hover.len(),
            "scene rendered"
        );
        Ok((vp, hover))
    }
}

fn info_or(info: &[String], fallback: &[&String]) -> Vec<String> {
    if info.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        info.to_vec()
    }
}

fn axes_props(axes: &Option<AxesConfig>) -> Result<Option<AxesProperties>> {
    axes.as_ref().map(AxesConfig::to_properties).transpose()
}

fn build_plot(config: &PlotConfig, base: &Path) -> Result<Box<dyn Plot>> {
    let plot: Box<dyn Plot> = match config {
        PlotConfig::Dot { csv, x, y, info, color, filled, radius, padding, axes } => Box::new(DotPlot {
            table: Table::from_path(base.join(csv))?,
            x: x.clone(),
            y: y.clone(),
            info: info_or(info, &[x, y]),
            color: parse_color(color)?,
            filled: *filled,
            radius: *radius,
            padding: *padding,
            axes: axes_props(axes)?,
        }),
        PlotConfig::Line { csv, x, y, info, color, filled, radius, line_width, padding, axes } => Box::new(LinePlot {
            table: Table::from_path(base.join(csv))?,
            x: x.clone(),
            y: y.clone(),
            info: info_or(info, &[x, y]),
            color: parse_color(color)?,
            filled: *filled,
            radius: *radius,
            line_width: *line_width,
            padding: *padding,
            axes: axes_props(axes)?,
        }),
        PlotConfig::Bar { csv, column, padding, seed, label_color } => Box::new(BarPlot {
            table: Table::from_path(base.join(csv))?,
            category: column.clone(),
            padding: *padding,
            seed: *seed,
            label_color: parse_color(label_color)?,
        }),
        PlotConfig::Bubble { csv, x, y, size, min_size, max_size, info, color, padding, axes } => Box::new(BubblePlot {
            table: Table::from_path(base.join(csv))?,
            x: x.clone(),
            y: y.clone(),
            size: size.clone(),
            min_size: *min_size,
            max_size: *max_size,
            info: info_or(info, &[x, y, size]),
            color: parse_color(color)?,
            padding: *padding,
            axes: axes_props(axes)?,
        }),
        PlotConfig::MapDot { geojson, csv, lon, lat, info, color, filled, radius, padding } => Box::new(MapDotPlot {
            map: FeatureCollection::from_path(base.join(geojson))?,
            table: Table::from_path(base.join(csv))?,
            lon: lon.clone(),
            lat: lat.clone(),
            info: info_or(info, &[lon, lat]),
            color: parse_color(color)?,
            filled: *filled,
            radius: *radius,
            padding: *padding,
        }),
        PlotConfig::MapBubble { geojson, csv, lon, lat, size, min_size, max_size, info, color, padding } => {
            Box::new(MapBubblePlot {
                map: FeatureCollection::from_path(base.join(geojson))?,
                table: Table::from_path(base.join(csv))?,
                lon: lon.clone(),
                lat: lat.clone(),
                size: size.clone(),
                min_size: *min_size,
                max_size: *max_size,
                info: info_or(info, &[lon, lat, size]),
                color: parse_color(color)?,
                padding: *padding,
            })
        }
        PlotConfig::HeatMap { geojson, csv, variable, region_property, link_column, color, info, padding } => {
            Box::new(HeatMap {
                map: FeatureCollection::from_path(base.join(geojson))?,
                table: Table::from_path(base.join(csv))?,
                variable: variable.clone(),
                color: parse_color(color)?,
                region_property: region_property.clone(),
                link_column: link_column.clone(),
                info: info_or(info, &[link_column, variable]),
                padding: *padding,
            })
        }
    };
    Ok(plot)
}

fn draw_axis(vp: &mut Viewport, config: &AxisConfig, base: &Path) -> Result<()> {
    match config {
        AxisConfig::Step { orientation, start, end, x, y, step, color, label_space } => {
            let axis = StepAxis {
                start: *start,
                end: *end,
                x: *x,
                y: *y,
                step: *step,
                color: parse_color(color)?,
                label_space: *label_space,
            };
            match orientation {
                Orientation::X => axis::draw_x_axis(vp, &axis),
                Orientation::Y => axis::draw_y_axis(vp, &axis),
            }
        }
        AxisConfig::Column { orientation, csv, column, x, y, color, label_space, label_angle, padding, ticks } => {
            let table = Table::from_path(base.join(csv))?;
            let values: Vec<f64> = table.numbers(column)?.into_iter().flatten().collect();
            let style = AxisStyle {
                x: *x,
                y: *y,
                color: parse_color(color)?,
                label_space: *label_space,
                label_angle: *label_angle,
            };
            let padding = padding.unwrap_or_else(|| vp.default_padding());
            match orientation {
                Orientation::X => axis::draw_x_axis_with_intervals(vp, &values, &style, padding, *ticks)?,
                Orientation::Y => axis::draw_y_axis_with_intervals(vp, &values, &style, padding, *ticks)?,
            };
            Ok(())
        }
    }
}
