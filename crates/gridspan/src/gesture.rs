//! Pointer gesture input
//!
//! A gesture is a strictly ordered start, move*, end sequence. Each event
//! carries the coordinate of the cell under the pointer and, when that cell
//! is a merged region, the region's bottom-right coordinate.

use gridspan_core::{CellCoordinate, GridCell, Result};

/// The cell under the pointer for one gesture event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GesturePoint {
    /// Coordinate of the target cell, `None` when the pointer is off the grid
    pub coordinate: Option<CellCoordinate>,
    /// Bottom-right corner of the target cell's region, if merged
    pub merged_coordinate: Option<CellCoordinate>,
}

impl GesturePoint {
    /// A point over an unmerged cell
    pub fn new(coordinate: CellCoordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            merged_coordinate: None,
        }
    }

    /// A point over a merged cell
    pub fn with_merged(coordinate: CellCoordinate, merged_coordinate: CellCoordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            merged_coordinate: Some(merged_coordinate),
        }
    }

    /// A point that is not over any cell
    pub fn outside() -> Self {
        Self::default()
    }

    /// Build a point from the keys a renderer attaches to a cell
    ///
    /// Empty keys mean "absent".
    pub fn parse(coordinate: &str, merged_coordinate: &str) -> Result<Self> {
        Ok(Self {
            coordinate: CellCoordinate::parse_optional(coordinate)?,
            merged_coordinate: CellCoordinate::parse_optional(merged_coordinate)?,
        })
    }

    /// The point a renderer reports for `cell`
    pub fn from_cell(cell: &GridCell) -> Self {
        Self {
            coordinate: Some(cell.coordinate),
            merged_coordinate: cell.merged_coordinate,
        }
    }

    /// Both coordinates, for a selection bag
    pub fn coordinates(&self) -> [Option<CellCoordinate>; 2] {
        [self.coordinate, self.merged_coordinate]
    }
}

/// Where the controller is in the gesture cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress
    #[default]
    Idle,
    /// A gesture started at `start` and has not ended yet
    Dragging {
        /// Where the gesture started
        start: GesturePoint,
    },
}

impl GesturePhase {
    /// Whether no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, GesturePhase::Idle)
    }

    /// Whether a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, GesturePhase::Dragging { .. })
    }

    /// Where the current gesture started
    pub fn start_point(&self) -> Option<GesturePoint> {
        match self {
            GesturePhase::Idle => None,
            GesturePhase::Dragging { start } => Some(*start),
        }
    }
}

/// Selection bag for a gesture from `start` to `current`
pub(crate) fn coordinate_bag(
    start: &GesturePoint,
    current: &GesturePoint,
) -> [Option<CellCoordinate>; 4] {
    let [a, b] = start.coordinates();
    let [c, d] = current.coordinates();
    [a, b, c, d]
}
