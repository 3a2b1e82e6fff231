//! Merge and split operations over the flat cell list
//!
//! Both operations are pure: they read the input list and return a fresh
//! one with coordinates re-derived from position.

use std::collections::BTreeSet;

use tracing::debug;

use crate::cell::{CellCoordinate, CellRange, GridCell};
use crate::codec::coordinate_to_index;
use crate::error::{Error, Result};
use crate::resolve::{region_in_grid, resolve_selection_range};
use crate::shape::renumber;

/// Merge the resolved rectangle around `selection` into one region
///
/// The rectangle's top-left cell becomes the anchor with
/// `row_span x col_span` covering it. Every cell of the rectangle,
/// the anchor included, points at the anchor and the bottom-right corner.
/// Anchors of regions nested inside the rectangle lose their span. Cells
/// outside the rectangle pass through unchanged.
///
/// An empty selection, or one resolving to a single cell, returns the
/// input reshaped.
pub fn merge_cells(
    cells: &[GridCell],
    selection: &[CellCoordinate],
    columns: u32,
) -> Result<Vec<GridCell>> {
    let range = resolve_selection_range(cells, selection.iter().copied().map(Some), columns)?;
    let mut result = renumber(cells.to_vec(), columns);

    match range {
        Some(range) if !range.is_single() => {
            apply_merge(&mut result, range, columns);
            debug!(range = %range, rows = range.row_count(), cols = range.col_count(), "merged cells");
        }
        _ => debug!("merge selection is empty or a single cell, nothing to merge"),
    }

    Ok(result)
}

fn apply_merge(cells: &mut [GridCell], range: CellRange, columns: u32) {
    for coord in range.cells() {
        let cell = &mut cells[coordinate_to_index(coord, columns)];
        if coord == range.start {
            cell.row_span = range.row_count();
            cell.col_span = range.col_count();
        } else {
            cell.row_span = 1;
            cell.col_span = 1;
        }
        cell.first_coordinate = Some(range.start);
        cell.merged_coordinate = Some(range.end);
    }
}

/// Split every region that any of `indices` belongs to
///
/// Each index is widened to its whole region (through its back-references,
/// or its own span for an anchor), and every cell of those regions is reset
/// to an unmerged unit cell. Other cells are untouched, so the grid stays a
/// partition of rectangles.
pub fn split_cells(cells: &[GridCell], indices: &[usize], columns: u32) -> Result<Vec<GridCell>> {
    check_indices(cells, indices, columns)?;
    let result = renumber(cells.to_vec(), columns);

    let mut targets = BTreeSet::new();
    for &index in indices {
        targets.insert(index);
        let cell = &result[index];
        if cell.is_merged() {
            let region = region_in_grid(&result, cell, columns)?;
            targets.extend(region.cells().map(|coord| coordinate_to_index(coord, columns)));
        }
    }

    debug!(requested = indices.len(), reset = targets.len(), "split cells");
    Ok(reset_indices(result, &targets))
}

/// Reset exactly the cells at `indices` to unmerged unit cells
///
/// Unlike [`split_cells`], the rest of a region is left alone: resetting
/// only an anchor leaves its former members with back-references to a
/// region that no longer exists. Use [`crate::validate::validate_partition`]
/// to detect such leftovers.
pub fn reset_cells(cells: &[GridCell], indices: &[usize], columns: u32) -> Result<Vec<GridCell>> {
    check_indices(cells, indices, columns)?;
    let targets: BTreeSet<usize> = indices.iter().copied().collect();
    Ok(reset_indices(renumber(cells.to_vec(), columns), &targets))
}

fn reset_indices(mut cells: Vec<GridCell>, targets: &BTreeSet<usize>) -> Vec<GridCell> {
    for &index in targets {
        if let Some(cell) = cells.get_mut(index) {
            cell.reset_span();
        }
    }
    cells
}

fn check_indices(cells: &[GridCell], indices: &[usize], columns: u32) -> Result<()> {
    if columns == 0 {
        return Err(Error::InvalidDimensions {
            rows: cells.len(),
            columns,
        });
    }
    match indices.iter().find(|&&index| index >= cells.len()) {
        Some(&index) => Err(Error::IndexOutOfBounds {
            index,
            len: cells.len(),
        }),
        None => Ok(()),
    }
}
