// File: crates/atlas-core/src/draw.rs
// Summary: Canvas primitives shared by plots: dots, bubbles, polylines, bars and polygons.

use skia_safe as skia;

pub fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

pub fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Circles of `radius` at each point: always outlined, filled on request.
pub fn draw_points(canvas: &skia::Canvas, points: &[(f64, f64)], color: skia::Color, filled: bool, radius: f32) {
    let stroke = stroke_paint(color, 1.0);
    let fill = fill_paint(color);
    for &(x, y) in points {
        let c = (x as f32, y as f32);
        if filled {
            canvas.draw_circle(c, radius, &fill);
        }
        canvas.draw_circle(c, radius, &stroke);
    }
}

/// Filled circles, each with its own radius.
pub fn draw_bubbles(canvas: &skia::Canvas, bubbles: &[(f64, f64, f64)], color: skia::Color) {
    let fill = fill_paint(color);
    for &(x, y, r) in bubbles {
        canvas.draw_circle((x as f32, y as f32), r.max(0.0) as f32, &fill);
    }
}

pub fn draw_polyline(canvas: &skia::Canvas, points: &[(f64, f64)], color: skia::Color, width: f32) {
    if points.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    let (x0, y0) = points[0];
    path.move_to((x0 as f32, y0 as f32));
    for &(x, y) in points.iter().skip(1) {
        path.line_to((x as f32, y as f32));
    }
    canvas.draw_path(&path, &stroke_paint(color, width));
}

/// Filled rectangle anchored at its bottom-left corner.
pub fn fill_bar(canvas: &skia::Canvas, left: f32, bottom: f32, width: f32, height: f32, color: skia::Color) {
    let rect = skia::Rect::from_xywh(left, bottom, width, height.max(0.0));
    canvas.draw_rect(rect, &fill_paint(color));
}

/// Each ring closed, filled, then outlined, as separate shapes.
pub fn draw_polygon(canvas: &skia::Canvas, rings: &[Vec<(f64, f64)>], fill: skia::Color, outline: skia::Color, outline_width: f32) {
    let fill = fill_paint(fill);
    let stroke = stroke_paint(outline, outline_width);
    for ring in rings.iter().filter(|r| r.len() >= 2) {
        let mut path = skia::Path::new();
        path.move_to((ring[0].0 as f32, ring[0].1 as f32));
        for &(x, y) in ring.iter().skip(1) {
            path.line_to((x as f32, y as f32));
        }
        path.close();
        canvas.draw_path(&path, &fill);
        canvas.draw_path(&path, &stroke);
    }
}

pub fn draw_segment(canvas: &skia::Canvas, from: (f32, f32), to: (f32, f32), color: skia::Color) {
    canvas.draw_line(from, to, &stroke_paint(color, 1.0));
}
