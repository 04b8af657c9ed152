//! Colors and draw-command primitives exposed to the rendering pass.

mod color;
mod color_source;
mod primitives;

pub use color::{Color, DEFAULT_COLORS};
pub use color_source::{ColorSource, StandardSeriesColorSource};
pub use primitives::LinePrimitive;
