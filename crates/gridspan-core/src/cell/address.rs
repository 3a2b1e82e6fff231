//! Cell coordinate and rectangle types

use crate::codec;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell coordinate (e.g., "0_0", "3_2")
///
/// Coordinates are zero-based `(row, col)` pairs. Their textual key is
/// `"{row}_{col}"`, which is also how they serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct CellCoordinate {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u32,
}

impl CellCoordinate {
    /// Create a new coordinate
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a coordinate from its `row_col` key
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::CellCoordinate;
    ///
    /// let coord = CellCoordinate::parse("2_5").unwrap();
    /// assert_eq!(coord.row, 2);
    /// assert_eq!(coord.col, 5);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidCoordinate("empty coordinate".into()));
        }

        let (row_str, col_str) = s
            .split_once('_')
            .ok_or_else(|| Error::InvalidCoordinate(format!("missing '_' separator in '{}'", s)))?;

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidCoordinate(format!("invalid row in '{}'", s)))?;
        let col: u32 = col_str
            .parse()
            .map_err(|_| Error::InvalidCoordinate(format!("invalid column in '{}'", s)))?;

        Ok(Self { row, col })
    }

    /// Parse an optional key, treating an empty string as "no coordinate"
    pub fn parse_optional(s: &str) -> Result<Option<Self>> {
        if s.trim().is_empty() {
            Ok(None)
        } else {
            Self::parse(s).map(Some)
        }
    }

    /// Format as the `row_col` key
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Linear row-major index of this coordinate
    pub fn to_index(&self, columns: u32) -> usize {
        codec::coordinate_to_index(*self, columns)
    }

    /// Coordinate of a linear row-major index
    pub fn from_index(index: usize, columns: u32) -> Self {
        codec::index_to_coordinate(index, columns)
    }

    /// Create a range from this coordinate to another
    pub fn to(&self, other: CellCoordinate) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.row, self.col)
    }
}

impl FromStr for CellCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<CellCoordinate> for String {
    fn from(coord: CellCoordinate) -> Self {
        coord.to_string()
    }
}

impl TryFrom<String> for CellCoordinate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<(u32, u32)> for CellCoordinate {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

/// An axis-aligned rectangle of cells (e.g., "0_0:1_1")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start coordinate (top-left)
    pub start: CellCoordinate,
    /// End coordinate (bottom-right)
    pub end: CellCoordinate,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: CellCoordinate, end: CellCoordinate) -> Self {
        // Normalize so start is top-left and end is bottom-right
        Self {
            start: CellCoordinate::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellCoordinate::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self::new(
            CellCoordinate::new(start_row, start_col),
            CellCoordinate::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(coord: CellCoordinate) -> Self {
        Self {
            start: coord,
            end: coord,
        }
    }

    /// Smallest range containing every coordinate, or `None` for no coordinates
    pub fn bounding<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = CellCoordinate>,
    {
        coords.into_iter().fold(None, |acc, coord| match acc {
            None => Some(Self::single(coord)),
            Some(range) => Some(range.extend(coord)),
        })
    }

    /// Parse a range from `r_c:r_c` notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some((start, end)) = s.split_once(':') {
            Ok(Self::new(
                CellCoordinate::parse(start)?,
                CellCoordinate::parse(end)?,
            ))
        } else {
            CellCoordinate::parse(s).map(Self::single)
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, coord: &CellCoordinate) -> bool {
        coord.row >= self.start.row
            && coord.row <= self.end.row
            && coord.col >= self.start.col
            && coord.col <= self.end.col
    }

    /// Check if another range lies entirely within this one
    pub fn contains_range(&self, other: &CellRange) -> bool {
        self.contains(&other.start) && self.contains(&other.end)
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Whether the range covers exactly one cell
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Grow the range just enough to contain `coord`
    pub fn extend(&self, coord: CellCoordinate) -> CellRange {
        CellRange::from_indices(
            self.start.row.min(coord.row),
            self.start.col.min(coord.col),
            self.end.row.max(coord.row),
            self.end.col.max(coord.col),
        )
    }

    /// Smallest range containing both ranges
    pub fn union(&self, other: &CellRange) -> CellRange {
        self.extend(other.start).extend(other.end)
    }

    /// Iterate over all cell coordinates in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u32,
}

impl Iterator for CellRangeIterator {
    type Item = CellCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row > self.range.end.row {
            return None;
        }

        let coord = CellCoordinate::new(self.current_row, self.current_col);

        // Move to next cell
        if self.current_col == self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        } else {
            self.current_col += 1;
        }

        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current_row > self.range.end.row {
            return (0, Some(0));
        }
        let cols = self.range.col_count() as usize;
        let full_rows = (self.range.end.row - self.current_row) as usize;
        let in_row = (self.range.end.col - self.current_col) as usize + 1;
        let remaining = full_rows * cols + in_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_parse() {
        let coord = CellCoordinate::parse("0_0").unwrap();
        assert_eq!(coord, CellCoordinate::new(0, 0));

        let coord = CellCoordinate::parse("12_7").unwrap();
        assert_eq!(coord.row, 12);
        assert_eq!(coord.col, 7);

        let coord = CellCoordinate::parse(" 3_4 ").unwrap();
        assert_eq!(coord, CellCoordinate::new(3, 4));
    }

    #[test]
    fn test_coordinate_parse_errors() {
        assert!(CellCoordinate::parse("").is_err());
        assert!(CellCoordinate::parse("3").is_err());
        assert!(CellCoordinate::parse("a_1").is_err());
        assert!(CellCoordinate::parse("1_").is_err());
        assert!(CellCoordinate::parse("-1_2").is_err());
        assert!(CellCoordinate::parse("1_2_3").is_err());
    }

    #[test]
    fn test_coordinate_parse_optional() {
        assert_eq!(CellCoordinate::parse_optional("").unwrap(), None);
        assert_eq!(CellCoordinate::parse_optional("  ").unwrap(), None);
        assert_eq!(
            CellCoordinate::parse_optional("1_1").unwrap(),
            Some(CellCoordinate::new(1, 1))
        );
        assert!(CellCoordinate::parse_optional("x").is_err());
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(CellCoordinate::new(0, 0).to_string(), "0_0");
        assert_eq!(CellCoordinate::new(9, 2).key(), "9_2");
    }

    #[test]
    fn test_cell_range_normalizes() {
        let range = CellRange::new(CellCoordinate::new(2, 0), CellCoordinate::new(0, 3));
        assert_eq!(range.start, CellCoordinate::new(0, 0));
        assert_eq!(range.end, CellCoordinate::new(2, 3));
        assert_eq!(range.row_count(), 3);
        assert_eq!(range.col_count(), 4);
        assert_eq!(range.cell_count(), 12);
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("0_0:1_1").unwrap();
        assert_eq!(range.start, CellCoordinate::new(0, 0));
        assert_eq!(range.end, CellCoordinate::new(1, 1));

        // Single cell
        let range = CellRange::parse("2_2").unwrap();
        assert!(range.is_single());
        assert_eq!(range.to_string(), "2_2");
    }

    #[test]
    fn test_cell_range_contains() {
        let range = CellRange::parse("1_1:3_3").unwrap();

        assert!(range.contains(&CellCoordinate::new(1, 1)));
        assert!(range.contains(&CellCoordinate::new(3, 3)));
        assert!(range.contains(&CellCoordinate::new(2, 2)));

        assert!(!range.contains(&CellCoordinate::new(0, 0)));
        assert!(!range.contains(&CellCoordinate::new(4, 1)));

        assert!(range.contains_range(&CellRange::parse("2_2:3_3").unwrap()));
        assert!(!range.contains_range(&CellRange::parse("2_2:4_3").unwrap()));
    }

    #[test]
    fn test_cell_range_bounding() {
        assert_eq!(CellRange::bounding(Vec::new()), None);

        let range = CellRange::bounding(vec![
            CellCoordinate::new(2, 1),
            CellCoordinate::new(0, 2),
            CellCoordinate::new(1, 0),
        ])
        .unwrap();
        assert_eq!(range, CellRange::from_indices(0, 0, 2, 2));
    }

    #[test]
    fn test_cell_range_union_and_overlap() {
        let a = CellRange::parse("0_0:1_1").unwrap();
        let b = CellRange::parse("1_1:2_3").unwrap();
        let c = CellRange::parse("3_0:3_0").unwrap();

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.union(&b), CellRange::from_indices(0, 0, 2, 3));
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("0_0:1_1").unwrap();
        let mut cells = range.cells();
        assert_eq!(cells.len(), 4);

        assert_eq!(cells.next(), Some(CellCoordinate::new(0, 0)));
        assert_eq!(cells.next(), Some(CellCoordinate::new(0, 1)));
        assert_eq!(cells.len(), 2);
        assert_eq!(cells.next(), Some(CellCoordinate::new(1, 0)));
        assert_eq!(cells.next(), Some(CellCoordinate::new(1, 1)));
        assert_eq!(cells.next(), None);
        assert_eq!(cells.len(), 0);
    }
}
