use serde::{Deserialize, Serialize};

/// Projected point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One marker line within the overlay geometry for an axis marker.
///
/// The line is anchored to two vertices of the externally owned 3D mesh.
/// `pos` is the marker's position along its axis as a fraction of the
/// visible span (conceptually `0.0..=1.0`; the axis logic clamps before
/// constructing, so no range check happens here). A pegged line records a
/// value that fell outside the visible range and was moved to the nearest
/// axis boundary; pegged lines are not drawn.
///
/// The projector writes the screen endpoints back after resolving the
/// referenced vertices under the current view. They are not recomputed when
/// the view changes; the rendering pass re-projects and re-populates them
/// each cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pos: f64,
    pegged: bool,
    v0: i32,
    v1: i32,
    start: Option<ScreenPoint>,
    end: Option<ScreenPoint>,
}

impl MarkerLine {
    /// Vertex index meaning "not yet assigned".
    pub const UNASSIGNED_VERTEX: i32 = -1;

    /// Creates a marker line with unassigned vertices.
    #[must_use]
    pub fn new(pos: f64, pegged: bool) -> Self {
        Self::with_vertices(
            pos,
            pegged,
            Self::UNASSIGNED_VERTEX,
            Self::UNASSIGNED_VERTEX,
        )
    }

    /// Creates a marker line anchored to the given mesh vertex indices.
    #[must_use]
    pub fn with_vertices(pos: f64, pegged: bool, v0: i32, v1: i32) -> Self {
        Self {
            pos,
            pegged,
            v0,
            v1,
            start: None,
            end: None,
        }
    }

    /// The relative position of the line along its axis.
    #[must_use]
    pub fn pos(&self) -> f64 {
        self.pos
    }

    /// Whether the line was pegged to an axis boundary.
    #[must_use]
    pub fn is_pegged(&self) -> bool {
        self.pegged
    }

    /// The mesh vertex index for the start of the line.
    #[must_use]
    pub fn v0(&self) -> i32 {
        self.v0
    }

    pub fn set_v0(&mut self, v0: i32) {
        self.v0 = v0;
    }

    /// The mesh vertex index for the end of the line.
    #[must_use]
    pub fn v1(&self) -> i32 {
        self.v1
    }

    pub fn set_v1(&mut self, v1: i32) {
        self.v1 = v1;
    }

    /// Records the projected starting point for the line.
    pub fn set_start_point(&mut self, point: ScreenPoint) {
        self.start = Some(point);
    }

    /// Records the projected ending point for the line.
    pub fn set_end_point(&mut self, point: ScreenPoint) {
        self.end = Some(point);
    }

    // The projected points are read only by the in-crate rendering pass;
    // external code writes them and consumes the emitted primitives.
    pub(crate) fn start_point(&self) -> Option<ScreenPoint> {
        self.start
    }

    pub(crate) fn end_point(&self) -> Option<ScreenPoint> {
        self.end
    }
}
