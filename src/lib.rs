//! chart3d-overlay: decorative overlay components for 3D category charts.
//!
//! The 3D engine owns the world model and the projection math; this crate
//! owns the overlay entities the rendering pass consumes once projection has
//! run: marker lines anchored to mesh vertices, per-item data labels and
//! per-series colors.

pub mod data;
pub mod error;
pub mod label;
pub mod marker;
pub mod render;
pub mod telemetry;

pub use data::{CategoryValues3D, ItemKey, ItemSelection, StandardItemSelection};
pub use error::{OverlayError, OverlayResult};
pub use label::{CategoryItemLabelGenerator, LabelTemplate, StandardItemLabelGenerator};
pub use marker::{MarkerLine, MarkerLineStyle, ScreenPoint, marker_line_primitives};
pub use render::{Color, ColorSource, LinePrimitive, StandardSeriesColorSource};
