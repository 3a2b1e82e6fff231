//! Structural checks for the flat cell list
//!
//! A well-formed grid decomposes into non-overlapping rectangles that
//! cover every cell exactly once. Every non-absorbed cell contributes the
//! rectangle of its own span (a zero span covers nothing). Absorbed cells
//! contribute nothing and must point at a live anchor whose span matches
//! their back-references.

use crate::cell::{CellCoordinate, CellRange, GridCell};
use crate::codec::{coordinate_to_index, index_to_coordinate};
use crate::error::{Error, Result};
use crate::shape::renumber;

/// Check that `cells` forms a partition of rectangular regions
///
/// Coordinates are taken from list position, not from the cells' own
/// (possibly stale) coordinate fields. Returns the first problem found.
pub fn validate_partition(cells: &[GridCell], columns: u32) -> Result<()> {
    if columns == 0 || cells.len() % columns as usize != 0 {
        return Err(Error::InvalidDimensions {
            rows: cells.len(),
            columns,
        });
    }
    let cells = renumber(cells.to_vec(), columns);
    let rows = (cells.len() / columns as usize) as u32;
    let grid = CellRange::from_indices(0, 0, rows.saturating_sub(1), columns - 1);

    check_back_references(&cells, columns)?;

    let mut owner: Vec<Option<usize>> = vec![None; cells.len()];
    for (index, cell) in cells.iter().enumerate() {
        if cell.is_absorbed() {
            continue;
        }
        if cell.span_overflows() {
            return Err(Error::CoordinateOutOfBounds {
                coordinate: cell.coordinate.key(),
                rows,
                columns,
            });
        }
        let Some(rect) = cell.span_range() else {
            continue;
        };
        if !grid.contains_range(&rect) {
            return Err(Error::CoordinateOutOfBounds {
                coordinate: rect.end.key(),
                rows,
                columns,
            });
        }
        for coord in rect.cells() {
            let slot = &mut owner[coordinate_to_index(coord, columns)];
            if slot.is_some() {
                return Err(Error::Overlap(coord.key()));
            }
            *slot = Some(index);
        }
    }

    match owner.iter().position(Option::is_none) {
        Some(index) => Err(Error::Gap(index_to_coordinate(index, columns).key())),
        None => Ok(()),
    }
}

fn check_back_references(cells: &[GridCell], columns: u32) -> Result<()> {
    for cell in cells {
        let (first, last) = match (cell.first_coordinate, cell.merged_coordinate) {
            (None, None) => continue,
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::StaleBackReference(cell.coordinate.key())),
        };

        let region = CellRange::new(first, last);
        let anchor = anchor_at(cells, first, columns);
        let live = region.start == first
            && region.contains(&cell.coordinate)
            && anchor.is_some_and(|a| !a.is_absorbed() && a.span_range() == Some(region));
        if !live {
            return Err(Error::StaleBackReference(cell.coordinate.key()));
        }
    }
    Ok(())
}

fn anchor_at(cells: &[GridCell], coord: CellCoordinate, columns: u32) -> Option<&GridCell> {
    if coord.col >= columns {
        return None;
    }
    cells.get(coordinate_to_index(coord, columns))
}
