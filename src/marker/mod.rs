//! Axis marker overlay geometry.

mod line;

pub use line::{MarkerLine, ScreenPoint};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{OverlayError, OverlayResult};
use crate::render::{Color, LinePrimitive};

/// Stroke style applied to every marker line emitted in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerLineStyle {
    pub stroke_width: f64,
    pub color: Color,
}

impl Default for MarkerLineStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            color: Color::rgb(0x66, 0x66, 0x66),
        }
    }
}

impl MarkerLineStyle {
    fn validate(self) -> OverlayResult<Self> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(OverlayError::InvalidStyle(
                "marker stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Converts resolved marker lines into pixel-space draw commands.
///
/// A pegged line is never emitted, even when stale projected points are
/// still present from an earlier projection pass. A line the projector has
/// not resolved yet (either endpoint missing) is skipped. Suppression is a
/// normal outcome, not an error; the only failure modes are an invalid
/// style and non-finite projected coordinates.
pub fn marker_line_primitives(
    lines: &[MarkerLine],
    style: MarkerLineStyle,
) -> OverlayResult<Vec<LinePrimitive>> {
    let style = style.validate()?;
    let mut primitives = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_pegged() {
            trace!(pos = line.pos(), "skip pegged marker line");
            continue;
        }
        let (Some(start), Some(end)) = (line.start_point(), line.end_point()) else {
            trace!(pos = line.pos(), "skip unprojected marker line");
            continue;
        };
        let primitive = LinePrimitive::new(
            start.x,
            start.y,
            end.x,
            end.y,
            style.stroke_width,
            style.color,
        );
        primitive.validate()?;
        primitives.push(primitive);
    }
    Ok(primitives)
}
