//! WASM binding tests
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use gridspan_wasm::*;

wasm_bindgen_test_configure!(run_in_browser);

// =============================================================================
// Table Tests
// =============================================================================

#[wasm_bindgen_test]
fn test_table_new() {
    let table = Table::new(3, 4, None);
    assert_eq!(table.rows(), 3);
    assert_eq!(table.columns(), 4);
    assert!(!table.readonly());
    assert_eq!(table.headers(), vec!["A", "B", "C", "D"]);
}

#[wasm_bindgen_test]
fn test_pointer_drag_and_merge() {
    let mut table = Table::new(3, 3, None);
    table.pointer_down("0_0", "").unwrap();
    table.pointer_move("1_1", "").unwrap();
    table.pointer_up().unwrap();
    assert_eq!(table.selected_indices(), vec![0, 1, 3, 4]);

    table.merge().unwrap();
    table.clear();
    assert!(table.selected_indices().is_empty());

    // Pressing the merged cell selects its whole region
    table.pointer_down("0_0", "1_1").unwrap();
    table.pointer_up().unwrap();
    assert_eq!(table.selected_indices(), vec![0, 1, 3, 4]);

    table.split().unwrap();
    assert!(table.cells().is_ok());
}

#[wasm_bindgen_test]
fn test_invalid_key_is_error() {
    let mut table = Table::new(2, 2, None);
    assert!(table.pointer_down("nope", "").is_err());
    assert!(table.select(vec!["5_5".to_string()]).is_err());
}

#[wasm_bindgen_test]
fn test_readonly_table() {
    let mut table = Table::new(2, 2, Some(true));
    table.pointer_down("0_0", "").unwrap();
    table.pointer_up().unwrap();
    assert!(table.selected_indices().is_empty());
}

#[wasm_bindgen_test]
fn test_select_rows() {
    let mut table = Table::new(3, 3, None);
    table.select_rows(vec!["1_1".to_string()]).unwrap();
    assert_eq!(table.selected_indices(), vec![3, 4, 5]);
    assert!(table.is_selected(5));
    assert!(!table.is_selected(6));
}

#[wasm_bindgen_test]
fn test_header_labels_and_snapshot() {
    assert_eq!(js_header_labels(2), vec!["A", "B"]);
    assert!(Table::default().snapshot().is_ok());
}
