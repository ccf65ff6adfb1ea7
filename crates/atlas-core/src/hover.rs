// File: crates/atlas-core/src/hover.rs
// Summary: Pointer hit-testing over drawn marks and tooltip placement.

use crate::geo::point_in_rings;
use crate::types::to_plot_space;

/// Hit area of one drawn mark, in plot space (origin bottom-left).
#[derive(Clone, Debug, PartialEq)]
pub enum HitShape {
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { left: f64, bottom: f64, width: f64, height: f64 },
    /// Polygons of one region, each given as its rings.
    Region(Vec<Vec<Vec<(f64, f64)>>>),
}

impl HitShape {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            HitShape::Circle { cx, cy, r } => ((x - cx).powi(2) + (y - cy).powi(2)).sqrt() <= *r,
            HitShape::Rect { left, bottom, width, height } => {
                x >= *left && x <= left + width && y >= *bottom && y <= bottom + height
            }
            HitShape::Region(polygons) => polygons.iter().any(|rings| point_in_rings((x, y), rings)),
        }
    }
}

/// Which side of the pointer the tooltip opens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Flip left once the hit mark is past the middle of the data.
    ByIndex,
    /// Flip left once the pointer is past the middle of the surface.
    ByPointer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    pub shape: HitShape,
    pub lines: Vec<String>,
}

/// Tooltip content and its top-left corner in surface pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub lines: Vec<String>,
    pub left: f64,
    pub top: f64,
}

impl Tooltip {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Clone, Debug)]
struct Group {
    targets: Vec<HoverTarget>,
    placement: Placement,
}

/// Hit targets of everything drawn on one surface.
#[derive(Clone, Debug)]
pub struct HoverLayer {
    width: i32,
    height: i32,
    groups: Vec<Group>,
}

impl HoverLayer {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, groups: Vec::new() }
    }

    pub fn with_targets(width: i32, height: i32, placement: Placement, targets: Vec<HoverTarget>) -> Self {
        let mut layer = Self::new(width, height);
        layer.groups.push(Group { targets, placement });
        layer
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.targets.is_empty())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.targets.len()).sum()
    }

    /// Append another layer; its marks were drawn later and sit on top.
    pub fn merge(&mut self, other: HoverLayer) {
        self.groups.extend(other.groups);
    }

    /// Tooltip for the pointer at surface pixel `(px, py)` (origin top-left).
    /// The last target hit wins, matching paint order.
    pub fn hover(&self, px: f64, py: f64) -> Option<Tooltip> {
        let (x, y) = to_plot_space(self.height, px, py);
        let (group, index, target) = self
            .groups
            .iter()
            .flat_map(|g| g.targets.iter().enumerate().map(move |(i, t)| (g, i, t)))
            .filter(|(_, _, t)| t.shape.contains(x, y))
            .last()?;
        let flip = match group.placement {
            Placement::ByIndex => index as f64 > group.targets.len() as f64 / 2.0,
            Placement::ByPointer => px > self.width as f64 / 2.0,
        };
        let left = if flip { px - 180.0 } else { px + 50.0 };
        Some(Tooltip { lines: target.lines.clone(), left, top: py + 10.0 })
    }
}
