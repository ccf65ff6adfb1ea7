// File: crates/atlas-core/src/axis.rs
// Summary: Axis drawing: fixed-step axes and axes whose ticks come from data values.

use skia_safe as skia;

use crate::draw::draw_segment;
use crate::error::{AtlasError, Result};
use crate::scale::LinearScale;
use crate::ticks::{check_tick_count, format_tick, tick_values, TickMode};
use crate::types::TICK_HALF;
use crate::viewport::Viewport;

/// Tick label size in pixels.
pub const LABEL_SIZE: f32 = 10.0;

/// Axis with ticks every `step` from `start` to `end`, drawn from the anchor `(x, y)`.
#[derive(Clone, Copy, Debug)]
pub struct StepAxis {
    pub start: f64,
    pub end: f64,
    pub x: f32,
    pub y: f32,
    pub step: f64,
    pub color: skia::Color,
    pub label_space: f32,
}

fn step_values(axis: &StepAxis) -> Result<Vec<f64>> {
    if !(axis.step > 0.0) || !axis.step.is_finite() {
        return Err(AtlasError::InvalidTicks(format!("axis step must be positive, got {}", axis.step)));
    }
    check_tick_count(axis.start, axis.end, axis.step)?;
    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        let v = axis.start + axis.step * k as f64;
        if v > axis.end + 1e-9 { break; }
        out.push(v);
        k += 1;
    }
    Ok(out)
}

/// Horizontal axis line from `x` to `x + end`; labels sit `label_space` below it.
pub fn draw_x_axis(vp: &mut Viewport, axis: &StepAxis) -> Result<()> {
    let values = step_values(axis)?;
    let canvas = vp.canvas();
    draw_segment(canvas, (axis.x, axis.y), (axis.x + axis.end as f32, axis.y), axis.color);
    for &v in &values {
        let tx = axis.x + v as f32;
        draw_segment(canvas, (tx, axis.y - TICK_HALF), (tx, axis.y + TICK_HALF), axis.color);
    }
    for &v in &values {
        let tx = axis.x + v as f32;
        vp.draw_text(&format_tick(v), tx - 5.0, axis.y - axis.label_space, LABEL_SIZE, axis.color, 0.0);
    }
    Ok(())
}

/// Vertical axis line from `y` to `y + end`; labels sit `label_space` left of it.
pub fn draw_y_axis(vp: &mut Viewport, axis: &StepAxis) -> Result<()> {
    let values = step_values(axis)?;
    let canvas = vp.canvas();
    draw_segment(canvas, (axis.x, axis.y), (axis.x, axis.y + axis.end as f32), axis.color);
    for &v in &values {
        let ty = axis.y + v as f32;
        draw_segment(canvas, (axis.x - TICK_HALF, ty), (axis.x + TICK_HALF, ty), axis.color);
    }
    for &v in &values {
        let ty = axis.y + v as f32;
        vp.draw_text(&format_tick(v), axis.x - axis.label_space, ty, LABEL_SIZE, axis.color, 0.0);
    }
    Ok(())
}

/// Placement and look of a data-driven axis.
#[derive(Clone, Copy, Debug)]
pub struct AxisStyle {
    pub x: f32,
    pub y: f32,
    pub color: skia::Color,
    pub label_space: f32,
    /// Label rotation in degrees (x axis only).
    pub label_angle: f32,
}

/// Horizontal axis whose ticks are chosen from `values` by `mode` and placed with the
/// same scale the plots use. Returns the tick values drawn.
pub fn draw_x_axis_with_intervals(
    vp: &mut Viewport,
    values: &[f64],
    style: &AxisStyle,
    padding: f32,
    mode: TickMode,
) -> Result<Vec<f64>> {
    let rect = vp.plot_rect(padding);
    let scale = LinearScale::from_values(values.iter().copied(), rect.x_range())
        .ok_or_else(|| AtlasError::EmptyData("x axis has no numeric values".into()))?;
    let ticks = tick_values(mode, values)?;
    let pxs: Vec<f32> = ticks.iter().map(|&v| style.x + scale.map(v) as f32).collect();
    let (first, last) = pxs.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let base_y = style.y + padding;

    let canvas = vp.canvas();
    if first.is_finite() {
        draw_segment(canvas, (first, base_y), (last, base_y), style.color);
    }
    for &px in &pxs {
        draw_segment(canvas, (px, base_y - TICK_HALF), (px, base_y + TICK_HALF), style.color);
    }
    for (&v, &px) in ticks.iter().zip(&pxs) {
        vp.draw_text(&format_tick(v), px - 5.0, style.y + style.label_space, LABEL_SIZE, style.color, -style.label_angle);
    }
    Ok(ticks)
}

/// Vertical counterpart of [`draw_x_axis_with_intervals`].
pub fn draw_y_axis_with_intervals(
    vp: &mut Viewport,
    values: &[f64],
    style: &AxisStyle,
    padding: f32,
    mode: TickMode,
) -> Result<Vec<f64>> {
    let rect = vp.plot_rect(padding);
    let scale = LinearScale::from_values(values.iter().copied(), rect.y_range())
        .ok_or_else(|| AtlasError::EmptyData("y axis has no numeric values".into()))?;
    let ticks = tick_values(mode, values)?;
    let pys: Vec<f32> = ticks.iter().map(|&v| style.y + scale.map(v) as f32).collect();
    let (first, last) = pys.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let base_x = style.x + padding;

    let canvas = vp.canvas();
    if first.is_finite() {
        draw_segment(canvas, (base_x, first), (base_x, last), style.color);
    }
    for &py in &pys {
        draw_segment(canvas, (base_x - TICK_HALF, py), (base_x + TICK_HALF, py), style.color);
    }
    for (&v, &py) in ticks.iter().zip(&pys) {
        vp.draw_text(&format_tick(v), style.x - style.label_space, py, LABEL_SIZE, style.color, 0.0);
    }
    Ok(ticks)
}

/// Axes a cartesian plot draws around its marks.
#[derive(Clone, Copy, Debug)]
pub struct AxesProperties {
    pub x_pos: f32,
    pub y_pos: f32,
    pub x_label_space: f32,
    pub y_label_space: f32,
    pub x_label_angle: f32,
    pub color: skia::Color,
    pub x_ticks: TickMode,
    pub y_ticks: TickMode,
}

impl Default for AxesProperties {
    fn default() -> Self {
        Self {
            x_pos: 0.0,
            y_pos: 0.0,
            x_label_space: 20.0,
            y_label_space: -10.0,
            x_label_angle: 0.0,
            color: skia::Color::BLACK,
            x_ticks: TickMode::Auto,
            y_ticks: TickMode::Auto,
        }
    }
}

impl AxesProperties {
    pub fn draw(&self, vp: &mut Viewport, xs: &[f64], ys: &[f64], padding: f32) -> Result<()> {
        let x_style = AxisStyle {
            x: self.x_pos,
            y: self.y_pos,
            color: self.color,
            label_space: self.x_label_space,
            label_angle: self.x_label_angle,
        };
        let y_style = AxisStyle { label_space: self.y_label_space, label_angle: 0.0, ..x_style };
        draw_x_axis_with_intervals(vp, xs, &x_style, padding, self.x_ticks)?;
        draw_y_axis_with_intervals(vp, ys, &y_style, padding, self.y_ticks)?;
        Ok(())
    }
}
