//! Grid cell data

use super::address::{CellCoordinate, CellRange};

/// Default width hint for new cells (presentation only)
pub const DEFAULT_CELL_WIDTH: u32 = 200;

/// Default height hint for new cells (presentation only)
pub const DEFAULT_CELL_HEIGHT: u32 = 50;

/// A single cell of the grid
///
/// A cell with `row_span = r` and `col_span = c` occupies an `r x c`
/// rectangle whose top-left corner is `coordinate`. Cells absorbed by a
/// merge keep a unit span and point back at their region through
/// `first_coordinate` (the anchor) and `merged_coordinate` (the region's
/// bottom-right corner). The back-references are plain keys into the same
/// grid, never owning links.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridCell {
    /// Position of the cell (re-derived on every reshape)
    pub coordinate: CellCoordinate,
    /// Number of rows the cell spans
    pub row_span: u32,
    /// Number of columns the cell spans
    pub col_span: u32,
    /// Top-left anchor of the region this cell belongs to
    pub first_coordinate: Option<CellCoordinate>,
    /// Bottom-right corner of the region this cell belongs to
    pub merged_coordinate: Option<CellCoordinate>,
    /// Width hint, passed through untouched
    pub width: u32,
    /// Height hint, passed through untouched
    pub height: u32,
}

impl GridCell {
    /// Create an unmerged unit cell at `coordinate`
    pub fn new(coordinate: CellCoordinate) -> Self {
        Self::with_size(coordinate, DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }

    /// Create an unmerged unit cell with explicit size hints
    pub fn with_size(coordinate: CellCoordinate, width: u32, height: u32) -> Self {
        Self {
            coordinate,
            row_span: 1,
            col_span: 1,
            first_coordinate: None,
            merged_coordinate: None,
            width,
            height,
        }
    }

    /// Whether the cell belongs to a multi-cell region
    pub fn is_merged(&self) -> bool {
        self.first_coordinate.is_some() || self.row_span > 1 || self.col_span > 1
    }

    /// Whether the cell is hidden inside another cell's region
    pub fn is_absorbed(&self) -> bool {
        self.first_coordinate
            .is_some_and(|first| first != self.coordinate)
    }

    /// Whether the cell is the top-left anchor of a multi-cell region
    pub fn is_anchor(&self) -> bool {
        !self.is_absorbed() && (self.row_span > 1 || self.col_span > 1)
    }

    /// Rectangle the cell visually occupies through its own span
    ///
    /// `None` for a zero span, which occupies nothing, and for a span that
    /// runs past the last representable coordinate.
    pub fn span_range(&self) -> Option<CellRange> {
        self.span_end().map(|end| CellRange::new(self.coordinate, end))
    }

    /// Whether the span is non-zero but reaches past `u32::MAX`
    pub fn span_overflows(&self) -> bool {
        self.row_span > 0 && self.col_span > 0 && self.span_end().is_none()
    }

    fn span_end(&self) -> Option<CellCoordinate> {
        let row = self.coordinate.row.checked_add(self.row_span.checked_sub(1)?)?;
        let col = self.coordinate.col.checked_add(self.col_span.checked_sub(1)?)?;
        Some(CellCoordinate::new(row, col))
    }

    /// Rectangle of the whole region this cell belongs to
    ///
    /// Uses the back-references when present, otherwise the cell's own span.
    /// `None` when the span overflows (see [`GridCell::span_overflows`]).
    pub fn region(&self) -> Option<CellRange> {
        match (self.first_coordinate, self.merged_coordinate) {
            (Some(first), Some(last)) => Some(CellRange::new(first, last)),
            (Some(first), None) => Some(CellRange::new(first, self.coordinate)),
            (None, Some(last)) => Some(CellRange::new(self.coordinate, last)),
            (None, None) if self.span_overflows() => None,
            (None, None) => Some(
                self.span_range()
                    .unwrap_or_else(|| CellRange::single(self.coordinate)),
            ),
        }
    }

    /// Reset to an unmerged unit cell, keeping coordinate and size hints
    pub fn reset_span(&mut self) {
        self.row_span = 1;
        self.col_span = 1;
        self.first_coordinate = None;
        self.merged_coordinate = None;
    }
}
