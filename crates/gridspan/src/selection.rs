//! Transient selection state shared with the presentation layer

use gridspan_core::{
    coordinate_to_index, spans_multiple_columns, spans_multiple_rows, CellCoordinate, CellRange,
    GridCell, Selection,
};

/// The currently highlighted rectangle
///
/// Reset by [`clear`](SelectionState::clear) or by the start of a gesture,
/// recomputed on every gesture update, and read by merge, split and
/// rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SelectionState {
    selection: Selection,
}

impl SelectionState {
    /// An empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the current selection
    pub fn clear(&mut self) {
        self.selection = Selection::empty();
    }

    /// Replace the current selection
    pub fn set(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// The resolved rectangle
    pub fn range(&self) -> Option<CellRange> {
        self.selection.range
    }

    /// Selected coordinates, row by row
    pub fn coordinates(&self) -> &[CellCoordinate] {
        &self.selection.coordinates
    }

    /// Linear indices of the selected cells
    pub fn indices(&self) -> &[usize] {
        &self.selection.indices
    }

    /// Selected coordinates as `row_col` keys
    pub fn keys(&self) -> Vec<String> {
        self.selection.keys()
    }

    /// Whether the linear index is selected
    pub fn contains_index(&self, index: usize) -> bool {
        self.selection.contains_index(index)
    }

    /// Whether a rendered cell should be highlighted
    pub fn is_highlighted(&self, cell: &GridCell, columns: u32) -> bool {
        self.range().is_some_and(|range| range.contains(&cell.coordinate))
            && self.contains_index(coordinate_to_index(cell.coordinate, columns))
    }

    /// Whether the selection covers more than one row
    pub fn spans_multiple_rows(&self) -> bool {
        spans_multiple_rows(self.coordinates())
    }

    /// Whether the selection covers more than one column
    pub fn spans_multiple_columns(&self) -> bool {
        spans_multiple_columns(self.coordinates())
    }

    /// The underlying resolved selection
    pub fn as_selection(&self) -> &Selection {
        &self.selection
    }
}

impl From<Selection> for SelectionState {
    fn from(selection: Selection) -> Self {
        Self { selection }
    }
}
