//! # gridspan-core
//!
//! Core data structures and region algebra for the gridspan merge/split grid.
//!
//! This crate provides:
//! - [`CellCoordinate`] and [`CellRange`] - Cell addressing and rectangles
//! - [`GridCell`] - A cell with its spans and region back-references
//! - [`codec`] - Conversion between linear indices and coordinates
//! - [`shape`] - Conversion between the flat cell list and the row-grouped view
//! - [`resolve`] - Selection resolution that widens around existing merges
//! - [`engine`] - Merge and split over the flat cell list
//! - [`Grid`] - An owning wrapper tying the pieces together
//!
//! ## Example
//!
//! ```rust
//! use gridspan_core::{CellCoordinate, Grid};
//!
//! let grid = Grid::new(3, 3);
//! let merged = grid
//!     .merge(&[CellCoordinate::new(0, 0), CellCoordinate::new(1, 1)])
//!     .unwrap();
//!
//! let anchor = merged.cell(CellCoordinate::new(0, 0)).unwrap();
//! assert_eq!((anchor.row_span, anchor.col_span), (2, 2));
//!
//! // Selecting across the corner of the block widens to enclose it
//! let selection = merged
//!     .resolve_selection([Some(CellCoordinate::new(0, 1)), Some(CellCoordinate::new(2, 2))])
//!     .unwrap();
//! assert_eq!(selection.start(), Some(CellCoordinate::new(0, 0)));
//! ```

pub mod cell;
pub mod codec;
pub mod engine;
pub mod error;
pub mod grid;
pub mod header;
pub mod resolve;
pub mod shape;
pub mod validate;

// Re-exports for convenience
pub use cell::{CellCoordinate, CellRange, GridCell, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
pub use codec::{coordinate_to_index, index_to_coordinate};
pub use engine::{merge_cells, reset_cells, split_cells};
pub use error::{Error, Result};
pub use grid::{Grid, GridOptions, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use header::{column_label, header_labels, row_labels};
pub use resolve::{
    coordinate_range, index_list_for_coordinates, resolve_selection, row_index_list,
    spans_multiple_columns, spans_multiple_rows, Selection,
};
pub use shape::{flatten, generate_flat_rows, row_count, to_grid_view, CellRows, GridView};
pub use validate::validate_partition;
