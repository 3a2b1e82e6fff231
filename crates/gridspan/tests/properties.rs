//! Property tests: arbitrary merge/split sequences keep the grid a partition,
//! merging is idempotent and splitting undoes a merge

use gridspan::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Merge(u32, u32, u32, u32),
    Split(usize),
}

fn op(rows: u32, columns: u32) -> impl Strategy<Value = Op> {
    let cells = (rows * columns) as usize;
    prop_oneof![
        (0..rows, 0..columns, 0..rows, 0..columns).prop_map(|(r1, c1, r2, c2)| Op::Merge(r1, c1, r2, c2)),
        (0..cells).prop_map(Op::Split),
    ]
}

fn scenario() -> impl Strategy<Value = (u32, u32, Vec<Op>)> {
    (1u32..7, 1u32..7).prop_flat_map(|(rows, columns)| {
        (
            Just(rows),
            Just(columns),
            prop::collection::vec(op(rows, columns), 0..12),
        )
    })
}

fn premerged(rows: u32, columns: u32, ops: &[Op]) -> Grid {
    ops.iter().fold(Grid::new(rows, columns), |grid, op| match *op {
        Op::Merge(r1, c1, r2, c2) => grid
            .merge(&[CellCoordinate::new(r1, c1), CellCoordinate::new(r2, c2)])
            .unwrap(),
        Op::Split(_) => grid,
    })
}

fn corner(point: (u32, u32), rows: u32, columns: u32) -> CellCoordinate {
    CellCoordinate::new(point.0 % rows, point.1 % columns)
}

proptest! {
    #[test]
    fn test_operations_preserve_partition((rows, columns, ops) in scenario()) {
        let mut grid = Grid::new(rows, columns);
        for op in ops {
            grid = match op {
                Op::Merge(r1, c1, r2, c2) => grid
                    .merge(&[CellCoordinate::new(r1, c1), CellCoordinate::new(r2, c2)])
                    .unwrap(),
                Op::Split(index) => grid.split(&[index]).unwrap(),
            };
            prop_assert!(grid.validate().is_ok(), "invalid grid: {:?}", grid.merged_regions());
            prop_assert_eq!(grid.len(), (rows * columns) as usize);
        }
    }

    #[test]
    fn test_resolved_selection_encloses_touched_regions(
        (rows, columns, ops) in scenario(),
        a in (0u32..7, 0u32..7),
        b in (0u32..7, 0u32..7),
    ) {
        let grid = premerged(rows, columns, &ops);
        let a = corner(a, rows, columns);
        let b = corner(b, rows, columns);
        let selection = grid.resolve_selection([Some(a), Some(b)]).unwrap();
        let range = selection.range.unwrap();

        prop_assert!(range.contains(&a) && range.contains(&b));
        for region in grid.merged_regions() {
            if region.overlaps(&range) {
                prop_assert!(range.contains_range(&region));
            }
        }
    }

    #[test]
    fn test_merge_twice_equals_merge_once(
        (rows, columns, ops) in scenario(),
        a in (0u32..7, 0u32..7),
        b in (0u32..7, 0u32..7),
    ) {
        let grid = premerged(rows, columns, &ops);
        let selection = grid
            .resolve_selection([Some(corner(a, rows, columns)), Some(corner(b, rows, columns))])
            .unwrap();

        let once = grid.merge(&selection.coordinates).unwrap();
        let twice = once.merge(&selection.coordinates).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_split_after_merge_restores_grid(
        (rows, columns) in (1u32..7, 1u32..7),
        a in (0u32..7, 0u32..7),
        b in (0u32..7, 0u32..7),
    ) {
        let fresh = Grid::new(rows, columns);
        let range = CellRange::new(corner(a, rows, columns), corner(b, rows, columns));
        let merged = fresh.merge(&[range.start, range.end]).unwrap();

        let indices: Vec<usize> = range
            .cells()
            .map(|coord| merged.index_of(coord).unwrap())
            .collect();
        prop_assert_eq!(merged.split(&indices).unwrap(), fresh);
    }

    #[test]
    fn test_split_clears_merged_rectangle(
        (rows, columns, ops) in scenario(),
        a in (0u32..7, 0u32..7),
        b in (0u32..7, 0u32..7),
    ) {
        let grid = premerged(rows, columns, &ops);
        let selection = grid
            .resolve_selection([Some(corner(a, rows, columns)), Some(corner(b, rows, columns))])
            .unwrap();
        let merged = grid.merge(&selection.coordinates).unwrap();
        let split = merged.split(&selection.indices).unwrap();

        for &index in &selection.indices {
            let cell = split.cell_at_index(index).unwrap();
            prop_assert_eq!((cell.row_span, cell.col_span), (1, 1));
            prop_assert_eq!(cell.first_coordinate, None);
            prop_assert_eq!(cell.merged_coordinate, None);
        }
        prop_assert!(split.validate().is_ok());
    }
}
