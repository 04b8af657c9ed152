use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OverlayError, OverlayResult};

use super::color::{Color, DEFAULT_COLORS};

/// Supplies fill and legend colors for data series.
///
/// Row and column indices are part of the interface so per-cell color
/// sources can plug in behind the same seam; series-level implementations
/// ignore them.
pub trait ColorSource {
    fn color(&self, series: usize, row: usize, column: usize) -> Color;

    fn legend_color(&self, series: usize) -> Color;

    /// Replaces the entire palette. On rejection the previous palette is
    /// left untouched.
    fn style(&mut self, colors: &[Color]) -> OverlayResult<()>;
}

/// Color source that cycles a fixed ordered palette by series index.
///
/// The series count is not known in advance and may exceed the palette
/// size; `series % palette_len` gives every series a deterministic,
/// reproducible color without requiring the caller to size the palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardSeriesColorSource {
    colors: Vec<Color>,
}

impl StandardSeriesColorSource {
    /// Creates a source from the supplied palette. At least one color is
    /// required.
    pub fn new(colors: &[Color]) -> OverlayResult<Self> {
        Ok(Self {
            colors: checked_palette(colors)?,
        })
    }

    /// The current palette, in cycling order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Serializes to pretty JSON for chart-configuration files.
    ///
    /// The layout is unstable across versions; only functional equality
    /// after a round-trip is guaranteed.
    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OverlayError::Persistence(format!("failed to serialize color source: {e}"))
        })
    }

    /// Deserializes from JSON.
    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| OverlayError::Persistence(format!("failed to parse color source: {e}")))
    }
}

impl Default for StandardSeriesColorSource {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl ColorSource for StandardSeriesColorSource {
    fn color(&self, series: usize, _row: usize, _column: usize) -> Color {
        self.colors[series % self.colors.len()]
    }

    fn legend_color(&self, series: usize) -> Color {
        self.colors[series % self.colors.len()]
    }

    fn style(&mut self, colors: &[Color]) -> OverlayResult<()> {
        let next = checked_palette(colors)?;
        debug!(palette_len = next.len(), "restyle series colors");
        self.colors = next;
        Ok(())
    }
}

fn checked_palette(colors: &[Color]) -> OverlayResult<Vec<Color>> {
    if colors.is_empty() {
        return Err(OverlayError::InvalidPalette(
            "at least one color is required".to_owned(),
        ));
    }
    Ok(colors.to_vec())
}
