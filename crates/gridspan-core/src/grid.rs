//! Owning grid type

use crate::cell::{CellCoordinate, CellRange, GridCell, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::codec::{checked_coordinate_to_index, checked_index_to_coordinate};
use crate::engine::{merge_cells, split_cells};
use crate::error::{Error, Result};
use crate::resolve::{resolve_selection, row_index_list, Selection};
use crate::shape::{flatten, renumber, to_grid_view, GridView};
use crate::validate::validate_partition;

/// Default number of rows for a new grid
pub const DEFAULT_ROWS: u32 = 10;

/// Default number of columns for a new grid
pub const DEFAULT_COLUMNS: u32 = 10;

/// Options for building a new grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub columns: u32,
    /// Width hint given to every new cell
    pub cell_width: u32,
    /// Height hint given to every new cell
    pub cell_height: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

/// A rectangular grid of cells held as the canonical flat, row-major list
///
/// `Grid` is immutable in the sense that merge and split return a new
/// grid; callers replace their stored value with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    cells: Vec<GridCell>,
    columns: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::with_options(&GridOptions::default())
    }
}

impl Grid {
    /// Create a `rows x columns` grid of unmerged cells
    pub fn new(rows: u32, columns: u32) -> Self {
        Self::with_options(&GridOptions {
            rows,
            columns,
            ..Default::default()
        })
    }

    /// Create a grid from options
    pub fn with_options(options: &GridOptions) -> Self {
        let cells = (0..options.rows)
            .flat_map(|row| {
                (0..options.columns).map(move |col| {
                    GridCell::with_size(
                        CellCoordinate::new(row, col),
                        options.cell_width,
                        options.cell_height,
                    )
                })
            })
            .collect();
        Self {
            cells,
            columns: options.columns,
        }
    }

    /// Adopt an existing flat cell list
    ///
    /// The list length must be a multiple of `columns`. Coordinates are
    /// re-derived from position; spans and back-references are kept as
    /// given (see [`Grid::validate`]).
    pub fn from_cells(cells: Vec<GridCell>, columns: u32) -> Result<Self> {
        if columns == 0 || cells.len() % columns as usize != 0 {
            return Err(Error::InvalidDimensions {
                rows: cells.len(),
                columns,
            });
        }
        Ok(Self {
            cells: renumber(cells, columns),
            columns,
        })
    }

    /// Adopt a row-grouped view
    pub fn from_view(view: GridView, columns: u32) -> Result<Self> {
        Self::from_cells(flatten(view), columns)
    }

    /// The flat cell list
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Consume the grid, returning the flat cell list
    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }

    /// Number of columns
    pub fn column_count(&self) -> u32 {
        self.columns
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        if self.columns == 0 {
            0
        } else {
            (self.cells.len() / self.columns as usize) as u32
        }
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` lies inside the grid
    pub fn contains(&self, coord: CellCoordinate) -> bool {
        coord.row < self.row_count() && coord.col < self.columns
    }

    /// Linear index of `coord`, rejecting coordinates outside the grid
    pub fn index_of(&self, coord: CellCoordinate) -> Result<usize> {
        checked_coordinate_to_index(coord, self.row_count(), self.columns)
    }

    /// Coordinate of a linear index, rejecting indices past the end
    pub fn coordinate_of(&self, index: usize) -> Result<CellCoordinate> {
        checked_index_to_coordinate(index, self.cells.len(), self.columns)
    }

    /// Get a cell by coordinate
    pub fn cell(&self, coord: CellCoordinate) -> Option<&GridCell> {
        self.index_of(coord).ok().and_then(|i| self.cells.get(i))
    }

    /// Get a cell by linear index
    pub fn cell_at_index(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// Row-grouped view for rendering
    pub fn view(&self) -> GridView {
        to_grid_view(&self.cells, self.columns)
    }

    /// Resolve a coordinate bag against this grid's merges
    pub fn resolve_selection<I>(&self, bag: I) -> Result<Selection>
    where
        I: IntoIterator<Item = Option<CellCoordinate>>,
    {
        resolve_selection(&self.cells, bag, self.columns)
    }

    /// Every index of every row the resolved rectangle around `coords` touches
    pub fn row_indices(&self, coords: &[CellCoordinate]) -> Result<Vec<usize>> {
        row_index_list(&self.cells, coords, self.columns)
    }

    /// Merge the resolved rectangle around `selection`, returning a new grid
    pub fn merge(&self, selection: &[CellCoordinate]) -> Result<Grid> {
        Ok(Self {
            cells: merge_cells(&self.cells, selection, self.columns)?,
            columns: self.columns,
        })
    }

    /// Split every region touched by `indices`, returning a new grid
    pub fn split(&self, indices: &[usize]) -> Result<Grid> {
        Ok(Self {
            cells: split_cells(&self.cells, indices, self.columns)?,
            columns: self.columns,
        })
    }

    /// Rectangles of every multi-cell region, in anchor order
    pub fn merged_regions(&self) -> Vec<CellRange> {
        self.cells
            .iter()
            .filter(|cell| cell.is_anchor())
            .filter_map(GridCell::span_range)
            .collect()
    }

    /// Check the partition invariants
    pub fn validate(&self) -> Result<()> {
        validate_partition(&self.cells, self.columns)
    }
}
