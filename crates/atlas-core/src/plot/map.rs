// File: crates/atlas-core/src/plot/map.rs
// Summary: Map plots: points and bubbles over GeoJSON outlines, and choropleth (heat) maps.

use skia_safe as skia;
use tracing::{debug, warn};

use crate::color::{SequentialScale, NO_DATA};
use crate::draw::{draw_bubbles, draw_points, draw_polygon};
use crate::error::{AtlasError, Result};
use crate::geo::{BoundingBox, FeatureCollection, MapProjection};
use crate::hover::{HitShape, HoverLayer, HoverTarget, Placement};
use crate::plot::bubble::{bubble_targets, place_bubbles, BubbleColumns};
use crate::plot::{resolve_padding, Plot, XyRows};
use crate::scale::extent;
use crate::table::Table;
use crate::types::HOVER_RADIUS;
use crate::viewport::Viewport;

const OUTLINE_WIDTH: f32 = 1.0;

/// Map box widened to cover the data, so outlines and marks share one projection.
fn shared_frame(map: &FeatureCollection, rows: &XyRows) -> BoundingBox {
    let mut data = BoundingBox::empty();
    for (&x, &y) in rows.xs.iter().zip(&rows.ys) {
        data.extend(x, y);
    }
    map.bounding_box().union(&data)
}

fn draw_outline(vp: &mut Viewport, map: &FeatureCollection, projection: &MapProjection) {
    let canvas = vp.canvas();
    for feature in &map.features {
        for polygon in feature.polygons() {
            let rings = projection.project_rings(polygon);
            draw_polygon(canvas, &rings, skia::Color::WHITE, skia::Color::BLACK, OUTLINE_WIDTH);
        }
    }
}

fn frame_ranges(bbox: &BoundingBox) -> ((f64, f64), (f64, f64)) {
    ((bbox.min_x, bbox.max_x), (bbox.min_y, bbox.max_y))
}

/// Points at lon/lat positions from a CSV, over the map outline.
#[derive(Clone, Debug)]
pub struct MapDotPlot {
    pub map: FeatureCollection,
    pub table: Table,
    pub lon: String,
    pub lat: String,
    pub info: Vec<String>,
    pub color: skia::Color,
    pub filled: bool,
    pub radius: f32,
    pub padding: Option<f32>,
}

impl MapDotPlot {
    pub fn new(map: FeatureCollection, table: Table, lon: impl Into<String>, lat: impl Into<String>) -> Self {
        let (lon, lat) = (lon.into(), lat.into());
        Self {
            map,
            table,
            info: vec![lon.clone(), lat.clone()],
            lon,
            lat,
            color: skia::Color::from_rgb(0, 139, 139),
            filled: true,
            radius: 7.0,
            padding: None,
        }
    }

    pub fn with_info(mut self, info: Vec<String>) -> Self { self.info = info; self }
    pub fn with_color(mut self, color: skia::Color) -> Self { self.color = color; self }
    pub fn with_filled(mut self, filled: bool) -> Self { self.filled = filled; self }
    pub fn with_radius(mut self, radius: f32) -> Self { self.radius = radius; self }
    pub fn with_padding(mut self, padding: f32) -> Self { self.padding = Some(padding); self }
}

impl Plot for MapDotPlot {
    fn id(&self) -> &'static str { "map_dot" }

    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer> {
        let rect = vp.plot_rect(resolve_padding(self.padding, vp));
        let rows = XyRows::collect(&self.table, &self.lon, &self.lat)?;
        let frame = shared_frame(&self.map, &rows);
        let projection = MapProjection::new(&frame, &rect);
        draw_outline(vp, &self.map, &projection);

        let points: Vec<(f64, f64)> = rows
            .xs
            .iter()
            .zip(&rows.ys)
            .map(|(&lon, &lat)| projection.project(lon, lat))
            .collect();
        draw_points(vp.canvas(), &points, self.color, self.filled, self.radius);
        debug!(points = points.len(), features = self.map.features.len(), "map dot plot drawn");

        let targets = rows
            .rows
            .iter()
            .zip(&points)
            .map(|(&row, &(cx, cy))| HoverTarget {
                shape: HitShape::Circle { cx, cy, r: HOVER_RADIUS },
                lines: self.table.info_lines(row, &self.info),
            })
            .collect();
        Ok(HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByIndex, targets))
    }
}

/// Bubbles sized by a CSV column at lon/lat positions, over the map outline.
#[derive(Clone, Debug)]
pub struct MapBubblePlot {
    pub map: FeatureCollection,
    pub table: Table,
    pub lon: String,
    pub lat: String,
    pub size: String,
    pub min_size: f64,
    pub max_size: f64,
    pub info: Vec<String>,
    pub color: skia::Color,
    pub padding: Option<f32>,
}

impl MapBubblePlot {
    pub fn new(
        map: FeatureCollection,
        table: Table,
        lon: impl Into<String>,
        lat: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        let (lon, lat, size) = (lon.into(), lat.into(), size.into());
        Self {
            map,
            table,
            info: vec![lon.clone(), lat.clone(), size.clone()],
            lon,
            lat,
            size,
            min_size: 2.0,
            max_size: 50.0,
            color: skia::Color::from_rgb(0, 139, 139),
            padding: None,
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
}

impl Plot for MapBubblePlot {
    fn id(&self) -> &'static str { "map_bubble" }

    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer> {
        let rect = vp.plot_rect(resolve_padding(self.padding, vp));
        let frame = shared_frame(&self.map, &XyRows::collect(&self.table, &self.lon, &self.lat)?);
        let projection = MapProjection::new(&frame, &rect);
        draw_outline(vp, &self.map, &projection);

        let cols = BubbleColumns {
            x: &self.lon,
            y: &self.lat,
            size: &self.size,
            min_size: self.min_size,
            max_size: self.max_size,
        };
        let bubbles = place_bubbles(&self.table, &cols, &rect, Some(frame_ranges(&frame)))?;
        draw_bubbles(vp.canvas(), &bubbles.circles, self.color);
        debug!(bubbles = bubbles.circles.len(), features = self.map.features.len(), "map bubble plot drawn");
        let targets = bubble_targets(&bubbles, &self.info);
        Ok(HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByIndex, targets))
    }
}

/// Choropleth: each region shaded by the value of its matching CSV row.
#[derive(Clone, Debug)]
pub struct HeatMap {
    pub map: FeatureCollection,
    pub table: Table,
    /// Numeric column that drives the shade.
    pub variable: String,
    /// Darkest shade, reached near the largest value.
    pub color: skia::Color,
    /// GeoJSON property naming each region.
    pub region_property: String,
    /// CSV column matched against `region_property`.
    pub link_column: String,
    pub info: Vec<String>,
    pub padding: Option<f32>,
}

impl HeatMap {
    pub fn new(
        map: FeatureCollection,
        table: Table,
        variable: impl Into<String>,
        region_property: impl Into<String>,
        link_column: impl Into<String>,
    ) -> Self {
        let (variable, link_column) = (variable.into(), link_column.into());
        Self {
            map,
            table,
            info: vec![link_column.clone(), variable.clone()],
            variable,
            color: skia::Color::RED,
            region_property: region_property.into(),
            link_column,
            padding: None,
        }
    }

    pub fn with_info(mut self, info: Vec<String>) -> Self { self.info = info; self }
    pub fn with_color(mut self, color: skia::Color) -> Self { self.color = color; self }
    pub fn with_padding(mut self, padding: f32) -> Self { self.padding = Some(padding); self }
}

impl Plot for HeatMap {
    fn id(&self) -> &'static str { "heat_map" }

    fn draw(&self, vp: &mut Viewport) -> Result<HoverLayer> {
        self.table.column_index(&self.link_column)?;
        let values = self.table.numbers(&self.variable)?;
        let (min, max) = extent(values.iter().flatten().copied())
            .ok_or_else(|| AtlasError::EmptyData(format!("no numeric values in '{}'", self.variable)))?;
        let shades = SequentialScale::for_extent(min, max, self.color);

        let bbox = self.map.bounding_box();
        if bbox.is_empty() {
            return Err(AtlasError::EmptyData("map has no polygons".into()));
        }
        let rect = vp.plot_rect(resolve_padding(self.padding, vp));
        let projection = MapProjection::new(&bbox, &rect);

        let mut targets = Vec::with_capacity(self.map.features.len());
        let mut unmatched = 0usize;
        let canvas = vp.canvas();
        for feature in &self.map.features {
            let row = feature
                .property(&self.region_property)
                .and_then(|key| self.table.find_row(&self.link_column, &key));
            let fill = match row.and_then(|r| values[r]) {
                Some(v) => shades.color(v),
                None => NO_DATA,
            };
            let polygons: Vec<Vec<Vec<(f64, f64)>>> =
                feature.polygons().into_iter().map(|p| projection.project_rings(p)).collect();
            for rings in &polygons {
                draw_polygon(canvas, rings, fill, skia::Color::BLACK, OUTLINE_WIDTH);
            }
            let lines = match row {
                Some(r) => self.table.info_lines(r, &self.info),
                None => {
                    unmatched += 1;
                    self.info.iter().map(|c| format!("{c} : N/A")).collect()
                }
            };
            targets.push(HoverTarget { shape: HitShape::Region(polygons), lines });
        }
        if unmatched > 0 {
            warn!(unmatched, property = %self.region_property, "regions without a matching row");
        }
        debug!(regions = targets.len(), "heat map drawn");
        Ok(HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByPointer, targets))
    }
}
