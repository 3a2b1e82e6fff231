//! Conversion between the flat cell list and the row-grouped grid view
//!
//! The flat, row-major list is the only form that is ever mutated. The
//! [`GridView`] is a disposable projection rebuilt on demand; building it
//! re-derives every cell's coordinate from its position, so coordinates
//! are always consistent after a reshape.

use crate::cell::{CellCoordinate, GridCell};
use crate::codec::index_to_coordinate;

/// Either shape of a cell collection, accepted by [`flatten`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellRows {
    /// Row-major flat list
    Flat(Vec<GridCell>),
    /// Row-grouped cells
    Grid(Vec<Vec<GridCell>>),
}

impl From<Vec<GridCell>> for CellRows {
    fn from(cells: Vec<GridCell>) -> Self {
        CellRows::Flat(cells)
    }
}

impl From<Vec<Vec<GridCell>>> for CellRows {
    fn from(rows: Vec<Vec<GridCell>>) -> Self {
        CellRows::Grid(rows)
    }
}

impl From<GridView> for CellRows {
    fn from(view: GridView) -> Self {
        CellRows::Grid(view.rows)
    }
}

/// Row-grouped projection of the flat cell list, used for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GridView {
    rows: Vec<Vec<GridCell>>,
}

impl GridView {
    /// All rows
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    /// A single row
    pub fn row(&self, row: u32) -> Option<&[GridCell]> {
        self.rows.get(row as usize).map(Vec::as_slice)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Look up a cell by coordinate
    pub fn cell(&self, coord: CellCoordinate) -> Option<&GridCell> {
        self.rows
            .get(coord.row as usize)
            .and_then(|row| row.get(coord.col as usize))
    }

    /// Iterate over every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.rows.iter().flatten()
    }

    /// Iterate over the cells a renderer draws: everything not absorbed by a merge
    pub fn visible_cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.cells().filter(|cell| !cell.is_absorbed())
    }

    /// Concatenate back into the flat list
    pub fn into_flat(self) -> Vec<GridCell> {
        flatten(self)
    }
}

/// Build a `rows x columns` grid of unmerged unit cells, row-major
///
/// Coordinates are assigned as `"r_c"` in order.
pub fn generate_flat_rows(rows: u32, columns: u32) -> Vec<GridCell> {
    (0..rows)
        .flat_map(|row| (0..columns).map(move |col| GridCell::new(CellCoordinate::new(row, col))))
        .collect()
}

/// Concatenate row-grouped cells into the flat list; a flat list passes through
pub fn flatten(rows: impl Into<CellRows>) -> Vec<GridCell> {
    match rows.into() {
        CellRows::Flat(cells) => cells,
        CellRows::Grid(rows) => rows.into_iter().flatten().collect(),
    }
}

/// Group the flat list into rows of `columns` cells
///
/// Each cell's coordinate is re-derived from its position. The last row
/// may be short when the list length is not a multiple of `columns`. A
/// zero column count yields an empty view.
pub fn to_grid_view(cells: &[GridCell], columns: u32) -> GridView {
    if columns == 0 {
        return GridView::default();
    }

    let rows = cells
        .chunks(columns as usize)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| GridCell {
                    coordinate: CellCoordinate::new(row as u32, col as u32),
                    ..cell.clone()
                })
                .collect()
        })
        .collect();

    GridView { rows }
}

/// Number of rows the flat list spans: `ceil(len / columns)`
pub fn row_count(cells: &[GridCell], columns: u32) -> u32 {
    if columns == 0 {
        return 0;
    }
    let columns = columns as usize;
    ((cells.len() + columns - 1) / columns) as u32
}

/// Re-derive coordinates of an owned flat list in place
pub(crate) fn renumber(mut cells: Vec<GridCell>, columns: u32) -> Vec<GridCell> {
    if columns == 0 {
        return cells;
    }
    for (index, cell) in cells.iter_mut().enumerate() {
        cell.coordinate = index_to_coordinate(index, columns);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_flat_rows() {
        let cells = generate_flat_rows(2, 2);
        let keys: Vec<String> = cells.iter().map(|c| c.coordinate.key()).collect();
        assert_eq!(keys, vec!["0_0", "0_1", "1_0", "1_1"]);
        assert!(cells.iter().all(|c| c.row_span == 1 && c.col_span == 1));
        assert!(cells.iter().all(|c| !c.is_merged()));
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate_flat_rows(0, 5).is_empty());
        assert!(generate_flat_rows(5, 0).is_empty());
    }

    #[test]
    fn test_to_grid_view_shape() {
        let view = to_grid_view(&generate_flat_rows(3, 4), 4);
        assert_eq!(view.row_count(), 3);
        assert!(view.rows().iter().all(|row| row.len() == 4));
        assert_eq!(
            view.cell(CellCoordinate::new(2, 3)).map(|c| c.coordinate),
            Some(CellCoordinate::new(2, 3))
        );
        assert!(view.cell(CellCoordinate::new(3, 0)).is_none());
    }

    #[test]
    fn test_to_grid_view_rederives_coordinates() {
        let mut cells = generate_flat_rows(2, 3);
        // Stale coordinates from a different column count
        for cell in &mut cells {
            cell.coordinate = CellCoordinate::new(9, 9);
        }

        let view = to_grid_view(&cells, 2);
        assert_eq!(view.row_count(), 3);
        let keys: Vec<String> = view.cells().map(|c| c.coordinate.key()).collect();
        assert_eq!(keys, vec!["0_0", "0_1", "1_0", "1_1", "2_0", "2_1"]);
    }

    #[test]
    fn test_to_grid_view_short_last_row() {
        let cells = generate_flat_rows(1, 5);
        let view = to_grid_view(&cells, 2);
        assert_eq!(view.row_count(), 3);
        assert_eq!(view.row(2).map(<[GridCell]>::len), Some(1));
        assert_eq!(row_count(&cells, 2), 3);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let cells = generate_flat_rows(3, 3);
        let view = to_grid_view(&cells, 3);

        let flat = flatten(view.clone());
        assert_eq!(flat, cells);
        assert_eq!(flatten(flat.clone()), flat);
        assert_eq!(view.into_flat(), cells);
    }

    #[test]
    fn test_row_count() {
        let cells = generate_flat_rows(4, 3);
        assert_eq!(row_count(&cells, 3), 4);
        assert_eq!(row_count(&cells, 5), 3);
        assert_eq!(row_count(&[], 3), 0);
        assert_eq!(row_count(&cells, 0), 0);
    }

    #[test]
    fn test_visible_cells_skip_absorbed() {
        let mut cells = generate_flat_rows(1, 3);
        let first = CellCoordinate::new(0, 0);
        let last = CellCoordinate::new(0, 1);
        cells[0].col_span = 2;
        cells[0].first_coordinate = Some(first);
        cells[0].merged_coordinate = Some(last);
        cells[1].first_coordinate = Some(first);
        cells[1].merged_coordinate = Some(last);

        let view = to_grid_view(&cells, 3);
        let visible: Vec<String> = view.visible_cells().map(|c| c.coordinate.key()).collect();
        assert_eq!(visible, vec!["0_0", "0_2"]);
    }
}
