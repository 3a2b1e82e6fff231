//! Row and column header labels

/// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
///
/// Past Z the labels continue bijective base-26 (AA, AB, ..., AZ, BA)
/// rather than repeating one letter (AA, BB, CC).
pub fn column_label(col: u32) -> String {
    let mut result = String::new();
    let mut n = col as u64 + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Column header labels for a grid with `columns` columns
pub fn header_labels(columns: u32) -> Vec<String> {
    (0..columns).map(column_label).collect()
}

/// Row header labels (1-based) for a grid with `rows` rows
pub fn row_labels(rows: u32) -> Vec<String> {
    (1..=rows).map(|row| row.to_string()).collect()
}
