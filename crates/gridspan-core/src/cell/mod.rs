//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellCoordinate`] - A cell's location (e.g., "0_1")
//! - [`CellRange`] - A rectangle of cells (e.g., "0_0:1_1")
//! - [`GridCell`] - Complete cell data including spans and region back-references

mod address;
mod data;

pub use address::{CellCoordinate, CellRange, CellRangeIterator};
pub use data::{GridCell, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
