//! Selection resolution against existing merges
//!
//! A selection is described by a bag of "interesting" coordinates: the
//! gesture's start and current cells, plus the region markers picked up
//! from merged cells under the pointer. Resolving it yields the smallest
//! rectangle that contains every coordinate and fully contains every
//! merged region it touches. Widening to enclose one region can make the
//! rectangle touch another, so widening repeats until nothing changes.

use ahash::AHashSet;
use tracing::trace;

use crate::cell::{CellCoordinate, CellRange, GridCell};
use crate::codec::coordinate_to_index;
use crate::error::{Error, Result};
use crate::shape::row_count;

/// A resolved selection: its rectangle plus the enumerated cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Resolved rectangle, `None` when nothing is selected
    pub range: Option<CellRange>,
    /// Every coordinate inside the rectangle, row by row
    pub coordinates: Vec<CellCoordinate>,
    /// Linear indices of `coordinates`
    pub indices: Vec<usize>,
}

impl Selection {
    /// An empty selection
    pub fn empty() -> Self {
        Self::default()
    }

    /// Enumerate a resolved rectangle
    pub fn from_range(range: CellRange, columns: u32) -> Self {
        let coordinates: Vec<CellCoordinate> = range.cells().collect();
        let indices = coordinates
            .iter()
            .map(|coord| coordinate_to_index(*coord, columns))
            .collect();
        Self {
            range: Some(range),
            coordinates,
            indices,
        }
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    /// Top-left corner of the selection
    pub fn start(&self) -> Option<CellCoordinate> {
        self.range.map(|r| r.start)
    }

    /// Bottom-right corner of the selection
    pub fn end(&self) -> Option<CellCoordinate> {
        self.range.map(|r| r.end)
    }

    /// Whether the linear index is selected
    pub fn contains_index(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected coordinates as `row_col` keys
    pub fn keys(&self) -> Vec<String> {
        self.coordinates.iter().map(CellCoordinate::key).collect()
    }
}

/// Look up the cell at `coord`, failing for coordinates outside the grid
pub(crate) fn cell_at(cells: &[GridCell], coord: CellCoordinate, columns: u32) -> Result<&GridCell> {
    if columns == 0 {
        return Err(Error::InvalidDimensions {
            rows: cells.len(),
            columns,
        });
    }
    let out_of_bounds = || Error::CoordinateOutOfBounds {
        coordinate: coord.key(),
        rows: row_count(cells, columns),
        columns,
    };
    if coord.col >= columns {
        return Err(out_of_bounds());
    }
    cells
        .get(coordinate_to_index(coord, columns))
        .ok_or_else(out_of_bounds)
}

/// Region of a merged `cell`, failing unless both corners lie inside the grid
pub(crate) fn region_in_grid(cells: &[GridCell], cell: &GridCell, columns: u32) -> Result<CellRange> {
    let region = cell.region().ok_or_else(|| Error::CoordinateOutOfBounds {
        coordinate: cell.coordinate.key(),
        rows: row_count(cells, columns),
        columns,
    })?;
    cell_at(cells, region.start, columns)?;
    cell_at(cells, region.end, columns)?;
    Ok(region)
}

/// Bounding box of a coordinate bag, ignoring empty entries
pub fn bounding_box<I>(bag: I) -> Option<CellRange>
where
    I: IntoIterator<Item = Option<CellCoordinate>>,
{
    CellRange::bounding(bag.into_iter().flatten())
}

/// Widen `range` until it fully contains every merged region it overlaps
///
/// Each pass enumerates the rectangle, collects the region corners of the
/// merged cells inside it, and takes the bounding box again. The
/// rectangle never shrinks and every changing pass grows it by at least
/// one row or column, so at most `rows + columns` passes are needed.
pub fn expand_to_full_regions(
    cells: &[GridCell],
    range: CellRange,
    columns: u32,
) -> Result<CellRange> {
    let max_passes = row_count(cells, columns) as usize + columns as usize + 1;
    let mut current = range;

    for pass in 0..max_passes {
        let mut markers: AHashSet<CellCoordinate> = AHashSet::new();
        markers.insert(current.start);
        markers.insert(current.end);

        for coord in current.cells() {
            let cell = cell_at(cells, coord, columns)?;
            if cell.is_merged() {
                let region = region_in_grid(cells, cell, columns)?;
                markers.insert(region.start);
                markers.insert(region.end);
            }
        }

        let next = CellRange::bounding(markers).unwrap_or(current);
        if next == current {
            return Ok(current);
        }

        trace!(pass, from = %current, to = %next, "widened selection to enclose merged regions");
        current = next;
    }

    Err(Error::other(format!(
        "selection {} did not settle within {} passes",
        range, max_passes
    )))
}

/// Resolve a coordinate bag to its consistent rectangle
///
/// Returns `None` when the bag holds no coordinates.
pub fn resolve_selection_range<I>(
    cells: &[GridCell],
    bag: I,
    columns: u32,
) -> Result<Option<CellRange>>
where
    I: IntoIterator<Item = Option<CellCoordinate>>,
{
    match bounding_box(bag) {
        None => Ok(None),
        Some(candidate) => expand_to_full_regions(cells, candidate, columns).map(Some),
    }
}

/// Resolve a coordinate bag to a full [`Selection`]
///
/// An empty bag (or one holding only empty entries) resolves to an empty
/// selection rather than an error.
pub fn resolve_selection<I>(cells: &[GridCell], bag: I, columns: u32) -> Result<Selection>
where
    I: IntoIterator<Item = Option<CellCoordinate>>,
{
    Ok(resolve_selection_range(cells, bag, columns)?
        .map(|range| Selection::from_range(range, columns))
        .unwrap_or_default())
}

/// Coordinates of the resolved rectangle spanned by `first` and `last`
///
/// Empty when either endpoint is missing.
pub fn coordinate_range(
    cells: &[GridCell],
    first: Option<CellCoordinate>,
    last: Option<CellCoordinate>,
    columns: u32,
) -> Result<Vec<CellCoordinate>> {
    let (Some(first), Some(last)) = (first, last) else {
        return Ok(Vec::new());
    };
    Ok(resolve_selection(cells, [Some(first), Some(last)], columns)?.coordinates)
}

/// Linear indices of the resolved rectangle around `coords`
pub fn index_list_for_coordinates(
    cells: &[GridCell],
    coords: &[CellCoordinate],
    columns: u32,
) -> Result<Vec<usize>> {
    Ok(resolve_selection(cells, coords.iter().copied().map(Some), columns)?.indices)
}

/// Every index of every row the resolved rectangle around `coords` touches
///
/// Indices are de-duplicated and returned in ascending order.
pub fn row_index_list(
    cells: &[GridCell],
    coords: &[CellCoordinate],
    columns: u32,
) -> Result<Vec<usize>> {
    let Some(range) = resolve_selection_range(cells, coords.iter().copied().map(Some), columns)?
    else {
        return Ok(Vec::new());
    };

    let width = columns as usize;
    Ok((range.start.row..=range.end.row)
        .flat_map(|row| {
            let first = row as usize * width;
            first..first + width
        })
        .filter(|index| *index < cells.len())
        .collect())
}

/// Whether the coordinates cover more than one distinct row
pub fn spans_multiple_rows(coords: &[CellCoordinate]) -> bool {
    coords
        .iter()
        .map(|c| c.row)
        .collect::<AHashSet<_>>()
        .len()
        > 1
}

/// Whether the coordinates cover more than one distinct column
pub fn spans_multiple_columns(coords: &[CellCoordinate]) -> bool {
    coords
        .iter()
        .map(|c| c.col)
        .collect::<AHashSet<_>>()
        .len()
        > 1
}
