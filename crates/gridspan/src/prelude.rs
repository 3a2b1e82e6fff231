//! Prelude module - common imports for gridspan users
//!
//! ```rust
//! use gridspan::prelude::*;
//! ```

pub use crate::{
    CellCoordinate,
    CellRange,
    ControllerOptions,
    Error,
    GesturePhase,
    GesturePoint,
    Grid,
    GridCell,
    GridController,
    GridListener,
    GridOptions,
    GridView,
    Result,
    Selection,
    SelectionState,
};
