//! WebAssembly bindings for gridspan
//!
//! This module provides wasm-bindgen-based bindings so JavaScript/TypeScript
//! code can drive a mergeable grid from pointer events and render it as an
//! HTML table.

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use gridspan::{
    header_labels, row_labels, CellCoordinate, ControllerOptions, GesturePoint, GridController,
    GridListener, GridOptions, GridView, SelectionState,
};

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

// =============================================================================
// Listener bridging to JavaScript callbacks
// =============================================================================

struct JsListener {
    on_change: Option<Function>,
    on_select: Option<Function>,
}

impl GridListener for JsListener {
    fn on_change(&mut self, view: &GridView) {
        if let (Some(callback), Ok(value)) = (&self.on_change, serde_wasm_bindgen::to_value(view)) {
            // Callback exceptions are ignored
            let _ = callback.call1(&JsValue::NULL, &value);
        }
    }

    fn on_select(&mut self, selection: &SelectionState) {
        if let (Some(callback), Ok(value)) = (
            &self.on_select,
            serde_wasm_bindgen::to_value(selection.indices()),
        ) {
            let _ = callback.call1(&JsValue::NULL, &value);
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    rows: u32,
    columns: u32,
    headers: Vec<String>,
    row_headers: Vec<String>,
    cells: GridView,
    selected: &'a [usize],
}

// =============================================================================
// Table
// =============================================================================

/// A mergeable grid driven by pointer events
#[wasm_bindgen]
pub struct Table {
    inner: GridController,
    on_change: Option<Function>,
    on_select: Option<Function>,
}

#[wasm_bindgen]
impl Table {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, columns: u32, readonly: Option<bool>) -> Self {
        let inner = GridController::with_options(&ControllerOptions {
            grid: GridOptions {
                rows,
                columns,
                ..Default::default()
            },
            readonly: readonly.unwrap_or(false),
        });
        Self {
            inner,
            on_change: None,
            on_select: None,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.inner.grid().row_count()
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.inner.grid().column_count()
    }

    #[wasm_bindgen(getter)]
    pub fn readonly(&self) -> bool {
        self.inner.is_readonly()
    }

    #[wasm_bindgen(setter)]
    pub fn set_readonly(&mut self, readonly: bool) {
        self.inner.set_readonly(readonly);
    }

    /// Register the callback invoked with the new rows after merge/split
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Option<Function>) {
        self.on_change = callback;
        self.install_listener();
    }

    /// Register the callback invoked with the selected indices on pointer up
    #[wasm_bindgen(js_name = onSelect)]
    pub fn on_select(&mut self, callback: Option<Function>) {
        self.on_select = callback;
        self.install_listener();
    }

    /// Pointer pressed over a cell; `merged` is the cell's region end, or ""
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, coordinate: &str, merged: &str) -> Result<(), JsError> {
        let point = GesturePoint::parse(coordinate, merged).map_err(to_js_error)?;
        self.inner.on_gesture_start(point).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, coordinate: &str, merged: &str) -> Result<(), JsError> {
        let point = GesturePoint::parse(coordinate, merged).map_err(to_js_error)?;
        self.inner.on_gesture_move(point).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<(), JsError> {
        self.inner.on_gesture_end(None).map_err(to_js_error)
    }

    /// Select the rectangle around the given `row_col` keys
    pub fn select(&mut self, keys: Vec<String>) -> Result<(), JsError> {
        let coords = parse_keys(&keys)?;
        self.inner.select(&coords).map_err(to_js_error)
    }

    /// Select every row the given `row_col` keys touch
    #[wasm_bindgen(js_name = selectRows)]
    pub fn select_rows(&mut self, keys: Vec<String>) -> Result<(), JsError> {
        let coords = parse_keys(&keys)?;
        self.inner.select_rows(&coords).map_err(to_js_error)
    }

    pub fn clear(&mut self) {
        self.inner.clear_selection();
    }

    pub fn merge(&mut self) -> Result<(), JsError> {
        self.inner.merge().map_err(to_js_error)
    }

    pub fn split(&mut self) -> Result<(), JsError> {
        self.inner.split().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = selectedIndices)]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.inner.selection().indices().to_vec()
    }

    #[wasm_bindgen(js_name = isSelected)]
    pub fn is_selected(&self, index: usize) -> bool {
        self.inner.selection().contains_index(index)
    }

    pub fn headers(&self) -> Vec<String> {
        header_labels(self.columns())
    }

    /// Row-grouped cells as plain JS objects
    pub fn cells(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.view()).map_err(to_js_error)
    }

    /// Rows, headers, cells and selection in one object
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        let grid = self.inner.grid();
        let snapshot = Snapshot {
            rows: grid.row_count(),
            columns: grid.column_count(),
            headers: header_labels(grid.column_count()),
            row_headers: row_labels(grid.row_count()),
            cells: grid.view(),
            selected: self.inner.selection().indices(),
        };
        serde_wasm_bindgen::to_value(&snapshot).map_err(to_js_error)
    }
}

impl Table {
    fn install_listener(&mut self) {
        if self.on_change.is_none() && self.on_select.is_none() {
            self.inner.clear_listener();
        } else {
            self.inner.set_listener(JsListener {
                on_change: self.on_change.clone(),
                on_select: self.on_select.clone(),
            });
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(gridspan::DEFAULT_ROWS, gridspan::DEFAULT_COLUMNS, None)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn parse_keys(keys: &[String]) -> Result<Vec<CellCoordinate>, JsError> {
    keys.iter()
        .map(|key| CellCoordinate::parse(key).map_err(to_js_error))
        .collect()
}

/// Column header labels for a grid with `columns` columns
#[wasm_bindgen(js_name = headerLabels)]
pub fn js_header_labels(columns: u32) -> Vec<String> {
    header_labels(columns)
}
