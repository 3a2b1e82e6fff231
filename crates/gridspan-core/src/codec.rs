//! Conversion between linear cell indices and `(row, col)` coordinates
//!
//! The flat cell list is row-major, so `index = row * columns + col`.
//! The plain conversions are total arithmetic; the `checked_*` variants
//! reject coordinates and indices that fall outside a concrete grid.

use crate::cell::CellCoordinate;
use crate::error::{Error, Result};

/// Linear index of `coord` in a grid with `columns` columns
///
/// `coord.col` must be below `columns`; otherwise the result addresses a
/// different cell. Use [`checked_coordinate_to_index`] at trust boundaries.
pub fn coordinate_to_index(coord: CellCoordinate, columns: u32) -> usize {
    coord.row as usize * columns as usize + coord.col as usize
}

/// Coordinate of linear `index` in a grid with `columns` columns
///
/// `columns` must be at least 1.
pub fn index_to_coordinate(index: usize, columns: u32) -> CellCoordinate {
    let columns = columns as usize;
    CellCoordinate::new((index / columns) as u32, (index % columns) as u32)
}

/// Like [`coordinate_to_index`], but fails for coordinates outside a
/// `rows x columns` grid
pub fn checked_coordinate_to_index(
    coord: CellCoordinate,
    rows: u32,
    columns: u32,
) -> Result<usize> {
    if coord.row >= rows || coord.col >= columns {
        return Err(Error::CoordinateOutOfBounds {
            coordinate: coord.key(),
            rows,
            columns,
        });
    }
    Ok(coordinate_to_index(coord, columns))
}

/// Like [`index_to_coordinate`], but fails for indices past `len` or a
/// zero column count
pub fn checked_index_to_coordinate(index: usize, len: usize, columns: u32) -> Result<CellCoordinate> {
    if columns == 0 {
        return Err(Error::InvalidDimensions {
            rows: len,
            columns,
        });
    }
    if index >= len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    Ok(index_to_coordinate(index, columns))
}
