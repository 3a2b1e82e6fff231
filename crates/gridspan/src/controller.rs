//! Interaction controller
//!
//! [`GridController`] owns the authoritative cell list, the transient
//! selection and the gesture phase. Pointer gestures resolve into a
//! selection; merge and split act on that selection and replace the cell
//! list wholesale.

use std::fmt;

use gridspan_core::{
    header_labels, row_labels, CellCoordinate, Grid, GridCell, GridOptions, GridView, Result,
};
use tracing::{debug, warn};

use crate::gesture::{coordinate_bag, GesturePhase, GesturePoint};
use crate::selection::SelectionState;

/// Receives notifications from a [`GridController`]
///
/// Both methods default to doing nothing.
pub trait GridListener {
    /// Called after every merge or split with the new row-grouped view
    fn on_change(&mut self, _view: &GridView) {}

    /// Called when a gesture ends with the final selection
    fn on_select(&mut self, _selection: &SelectionState) {}
}

/// Options for a [`GridController`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Shape of the initial grid
    pub grid: GridOptions,
    /// Ignore gestures, merges and splits
    pub readonly: bool,
}

/// Drives a grid from pointer gestures and merge/split commands
pub struct GridController {
    grid: Grid,
    selection: SelectionState,
    phase: GesturePhase,
    readonly: bool,
    listener: Option<Box<dyn GridListener>>,
}

impl fmt::Debug for GridController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridController")
            .field("grid", &self.grid)
            .field("selection", &self.selection)
            .field("phase", &self.phase)
            .field("readonly", &self.readonly)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for GridController {
    fn default() -> Self {
        Self::with_options(&ControllerOptions::default())
    }
}

impl GridController {
    /// Controller over a fresh `rows x columns` grid
    pub fn new(rows: u32, columns: u32) -> Self {
        Self::from_grid(Grid::new(rows, columns))
    }

    /// Controller built from options
    pub fn with_options(options: &ControllerOptions) -> Self {
        let mut controller = Self::from_grid(Grid::with_options(&options.grid));
        controller.readonly = options.readonly;
        controller
    }

    /// Controller over an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            selection: SelectionState::new(),
            phase: GesturePhase::Idle,
            readonly: false,
            listener: None,
        }
    }

    /// Controller over a caller-supplied flat cell list
    pub fn from_cells(cells: Vec<GridCell>, columns: u32) -> Result<Self> {
        Ok(Self::from_grid(Grid::from_cells(cells, columns)?))
    }

    /// Install the change/select listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl GridListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Toggle readonly mode
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Whether the controller ignores gestures and edits
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// The current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current flat cell list
    pub fn cells(&self) -> &[GridCell] {
        self.grid.cells()
    }

    /// Row-grouped view for rendering
    pub fn view(&self) -> GridView {
        self.grid.view()
    }

    /// Column header labels
    pub fn headers(&self) -> Vec<String> {
        header_labels(self.grid.column_count())
    }

    /// Row header labels
    pub fn row_headers(&self) -> Vec<String> {
        row_labels(self.grid.row_count())
    }

    /// The current selection
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The current gesture phase
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Begin a gesture
    ///
    /// Clears the selection. A point with no coordinate leaves the
    /// controller idle.
    pub fn on_gesture_start(&mut self, point: GesturePoint) -> Result<()> {
        if self.ignore_readonly("gesture start") {
            return Ok(());
        }
        self.selection.clear();
        self.phase = GesturePhase::Idle;

        if point.coordinate.is_none() {
            debug!("gesture start outside the grid, ignoring");
            return Ok(());
        }

        let resolved = self
            .grid
            .resolve_selection(coordinate_bag(&point, &GesturePoint::outside()))?;
        self.selection.set(resolved);
        self.phase = GesturePhase::Dragging { start: point };
        debug!(start = ?point.coordinate, "gesture started");
        Ok(())
    }

    /// Extend the current gesture to `point`
    ///
    /// Events outside a gesture are ignored. A point with no coordinate
    /// shrinks the selection back to the start cell's region.
    pub fn on_gesture_move(&mut self, point: GesturePoint) -> Result<()> {
        if self.ignore_readonly("gesture move") {
            return Ok(());
        }
        let Some(start) = self.phase.start_point() else {
            warn!("gesture move without a start, ignoring");
            return Ok(());
        };
        self.extend_selection(&start, &point)
    }

    /// Finish the current gesture, optionally at a final point
    ///
    /// The controller is idle afterwards even when the final point fails to
    /// resolve. On success the listener's `on_select` gets the final
    /// selection.
    pub fn on_gesture_end(&mut self, point: Option<GesturePoint>) -> Result<()> {
        if self.ignore_readonly("gesture end") {
            return Ok(());
        }
        let Some(start) = self.phase.start_point() else {
            warn!("gesture end without a start, ignoring");
            return Ok(());
        };
        self.phase = GesturePhase::Idle;
        if let Some(point) = point {
            self.extend_selection(&start, &point)?;
        }
        debug!(selection = ?self.selection.range(), "gesture ended");

        if let Some(listener) = self.listener.as_mut() {
            listener.on_select(&self.selection);
        }
        Ok(())
    }

    /// Select the resolved rectangle around `coords` directly
    pub fn select(&mut self, coords: &[CellCoordinate]) -> Result<()> {
        let resolved = self
            .grid
            .resolve_selection(coords.iter().copied().map(Some))?;
        self.selection.set(resolved);
        Ok(())
    }

    /// Select every cell of every row the rectangle around `coords` touches
    pub fn select_rows(&mut self, coords: &[CellCoordinate]) -> Result<()> {
        let indices = self.grid.row_indices(coords)?;
        let (Some(first), Some(last)) = (indices.first(), indices.last()) else {
            self.selection.clear();
            return Ok(());
        };
        let bag = [
            Some(self.grid.coordinate_of(*first)?),
            Some(self.grid.coordinate_of(*last)?),
        ];
        let resolved = self.grid.resolve_selection(bag)?;
        self.selection.set(resolved);
        Ok(())
    }

    /// Forget the current selection
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Merge the current selection into one region
    ///
    /// The selection is kept, since it now exactly covers the new region.
    pub fn merge(&mut self) -> Result<()> {
        if self.ignore_readonly("merge") {
            return Ok(());
        }
        if self.selection.is_empty() {
            debug!("merge with empty selection, nothing to do");
            return Ok(());
        }
        let merged = self.grid.merge(self.selection.coordinates())?;
        self.replace_grid(merged);
        Ok(())
    }

    /// Split every region touched by the current selection
    pub fn split(&mut self) -> Result<()> {
        if self.ignore_readonly("split") {
            return Ok(());
        }
        if self.selection.is_empty() {
            debug!("split with empty selection, nothing to do");
            return Ok(());
        }
        let split = self.grid.split(self.selection.indices())?;
        self.replace_grid(split);
        Ok(())
    }

    /// Split the regions containing `indices`, ignoring the selection
    pub fn split_indices(&mut self, indices: &[usize]) -> Result<()> {
        if self.ignore_readonly("split") {
            return Ok(());
        }
        let split = self.grid.split(indices)?;
        self.replace_grid(split);
        Ok(())
    }

    fn extend_selection(&mut self, start: &GesturePoint, point: &GesturePoint) -> Result<()> {
        let resolved = self.grid.resolve_selection(coordinate_bag(start, point))?;
        self.selection.set(resolved);
        Ok(())
    }

    fn ignore_readonly(&self, action: &str) -> bool {
        if self.readonly {
            warn!(action, "grid is readonly, ignoring");
        }
        self.readonly
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(&self.grid.view());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridspan_core::CellRange;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn c(row: u32, col: u32) -> CellCoordinate {
        CellCoordinate::new(row, col)
    }

    #[derive(Default)]
    struct Counts {
        changes: usize,
        selects: usize,
    }

    struct Recorder(Rc<RefCell<Counts>>);

    impl GridListener for Recorder {
        fn on_change(&mut self, _view: &GridView) {
            self.0.borrow_mut().changes += 1;
        }

        fn on_select(&mut self, _selection: &SelectionState) {
            self.0.borrow_mut().selects += 1;
        }
    }

    #[test]
    fn test_default_controller() {
        let controller = GridController::default();
        assert_eq!(controller.grid().row_count(), 10);
        assert_eq!(controller.headers().len(), 10);
        assert_eq!(controller.row_headers()[9], "10");
        assert!(controller.selection().is_empty());
        assert!(controller.phase().is_idle());
    }

    #[test]
    fn test_gesture_selects_rectangle() {
        let mut controller = GridController::new(3, 3);
        controller.on_gesture_start(GesturePoint::new(c(0, 0))).unwrap();
        assert!(controller.phase().is_dragging());
        assert_eq!(controller.selection().indices(), &[0]);

        controller.on_gesture_move(GesturePoint::new(c(1, 1))).unwrap();
        assert_eq!(controller.selection().indices(), &[0, 1, 3, 4]);

        controller.on_gesture_end(None).unwrap();
        assert!(controller.phase().is_idle());
        assert_eq!(controller.selection().indices(), &[0, 1, 3, 4]);
    }

    #[test]
    fn test_failed_end_still_finishes_gesture() {
        let counts = Rc::new(RefCell::new(Counts::default()));
        let mut controller = GridController::new(3, 3);
        controller.set_listener(Recorder(Rc::clone(&counts)));

        controller.on_gesture_start(GesturePoint::new(c(0, 0))).unwrap();
        controller.on_gesture_move(GesturePoint::new(c(0, 1))).unwrap();
        assert!(controller
            .on_gesture_end(Some(GesturePoint::new(c(9, 9))))
            .is_err());
        assert!(controller.phase().is_idle());
        assert_eq!(counts.borrow().selects, 0);

        // Stray moves after the failed end no longer touch the selection
        controller.on_gesture_move(GesturePoint::new(c(2, 2))).unwrap();
        assert_eq!(controller.selection().indices(), &[0, 1]);
    }

    #[test]
    fn test_events_without_start_are_ignored() {
        let mut controller = GridController::new(2, 2);
        controller.on_gesture_move(GesturePoint::new(c(1, 1))).unwrap();
        controller.on_gesture_end(Some(GesturePoint::new(c(1, 1)))).unwrap();
        assert!(controller.selection().is_empty());

        controller.on_gesture_start(GesturePoint::outside()).unwrap();
        assert!(controller.phase().is_idle());
    }

    #[test]
    fn test_listener_notifications() {
        let counts = Rc::new(RefCell::new(Counts::default()));
        let mut controller = GridController::new(3, 3);
        controller.set_listener(Recorder(Rc::clone(&counts)));

        controller.on_gesture_start(GesturePoint::new(c(0, 0))).unwrap();
        controller.on_gesture_move(GesturePoint::new(c(0, 1))).unwrap();
        assert_eq!(counts.borrow().selects, 0);
        controller.on_gesture_end(None).unwrap();
        assert_eq!(counts.borrow().selects, 1);

        controller.merge().unwrap();
        controller.split().unwrap();
        assert_eq!(counts.borrow().changes, 2);
    }

    #[test]
    fn test_readonly_ignores_input() {
        let mut controller = GridController::with_options(&ControllerOptions {
            readonly: true,
            ..Default::default()
        });
        controller.on_gesture_start(GesturePoint::new(c(0, 0))).unwrap();
        assert!(controller.selection().is_empty());

        controller.select(&[c(0, 0), c(1, 1)]).unwrap();
        let before = controller.grid().clone();
        controller.merge().unwrap();
        assert_eq!(controller.grid(), &before);

        controller.set_readonly(false);
        controller.merge().unwrap();
        assert_eq!(controller.grid().merged_regions().len(), 1);
    }

    #[test]
    fn test_select_rows() {
        let mut controller = GridController::new(3, 3);
        controller.select_rows(&[c(1, 1)]).unwrap();
        assert_eq!(controller.selection().indices(), &[3, 4, 5]);
        assert!(!controller.selection().spans_multiple_rows());
        assert!(controller.selection().spans_multiple_columns());

        controller.clear_selection();
        assert!(controller.selection().is_empty());
    }

    #[test]
    fn test_split_indices_leaves_other_regions() {
        let mut controller = GridController::new(3, 3);
        controller.select(&[c(0, 0), c(0, 1)]).unwrap();
        controller.merge().unwrap();
        controller.select(&[c(2, 1), c(2, 2)]).unwrap();
        controller.merge().unwrap();

        controller.split_indices(&[1, 4]).unwrap();
        assert_eq!(
            controller.grid().merged_regions(),
            vec![CellRange::new(c(2, 1), c(2, 2))]
        );
        // The selection is left alone
        assert_eq!(controller.selection().indices(), &[7, 8]);
    }

    #[test]
    fn test_merge_with_empty_selection_is_noop() {
        let mut controller = GridController::new(2, 2);
        controller.merge().unwrap();
        controller.split().unwrap();
        assert_eq!(controller.grid(), &Grid::new(2, 2));
    }
}
