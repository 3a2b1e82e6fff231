//! # gridspan
//!
//! A spreadsheet-style grid whose rectangular regions can be merged and
//! split, modelled on HTML `rowSpan`/`colSpan` tables.
//!
//! ## Features
//!
//! - Conversion between linear indices and `row_col` coordinates
//! - Flat and row-grouped views of the same cell list
//! - Selection resolution that widens around existing merges
//! - Merge and split that keep the grid an exact partition
//! - A gesture-driven [`GridController`] with change and select callbacks
//!
//! ## Example
//!
//! ```rust
//! use gridspan::prelude::*;
//!
//! let mut controller = GridController::new(4, 4);
//!
//! // Drag from A1 to B2 and merge the result
//! controller.on_gesture_start(GesturePoint::new(CellCoordinate::new(0, 0))).unwrap();
//! controller.on_gesture_move(GesturePoint::new(CellCoordinate::new(1, 1))).unwrap();
//! controller.on_gesture_end(None).unwrap();
//! controller.merge().unwrap();
//!
//! let anchor = controller.grid().cell(CellCoordinate::new(0, 0)).unwrap();
//! assert_eq!((anchor.row_span, anchor.col_span), (2, 2));
//! ```

pub mod controller;
pub mod gesture;
pub mod prelude;
pub mod selection;

pub use controller::{ControllerOptions, GridController, GridListener};
pub use gesture::{GesturePhase, GesturePoint};
pub use selection::SelectionState;

// Re-export core types
pub use gridspan_core::{
    cell, codec, column_label, coordinate_range, coordinate_to_index, engine, flatten,
    generate_flat_rows, header_labels, index_list_for_coordinates, index_to_coordinate,
    merge_cells, reset_cells, resolve, resolve_selection, row_count, row_index_list, row_labels,
    shape, spans_multiple_columns, spans_multiple_rows, split_cells, to_grid_view,
    validate_partition, CellCoordinate, CellRange, CellRows, Error, Grid, GridCell, GridOptions,
    GridView, Result, Selection, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLUMNS,
    DEFAULT_ROWS,
};
