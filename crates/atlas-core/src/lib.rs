// File: crates/atlas-core/src/lib.rs
// Summary: Core library entry point; exports data loading, plots, hover and scene rendering.

pub mod axis;
pub mod color;
pub mod draw;
pub mod error;
pub mod geo;
pub mod hover;
pub mod plot;
pub mod scale;
pub mod scene;
pub mod table;
pub mod text;
pub mod ticks;
pub mod types;
pub mod viewport;

pub use axis::{AxesProperties, AxisStyle, StepAxis};
pub use color::{parse_color, PastelPalette, SequentialScale};
pub use error::{AtlasError, Result};
pub use geo::{BoundingBox, Feature, FeatureCollection, MapProjection};
pub use hover::{HitShape, HoverLayer, HoverTarget, Placement, Tooltip};
pub use plot::{BarPlot, BubblePlot, DotPlot, HeatMap, LinePlot, MapBubblePlot, MapDotPlot, Plot};
pub use scale::LinearScale;
pub use scene::Scene;
pub use table::{Table, Value};
pub use text::TextShaper;
pub use ticks::TickMode;
pub use viewport::Viewport;
