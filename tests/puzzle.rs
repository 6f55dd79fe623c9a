//! Validates grid construction, slot extraction and numbering, and pattern
//! projection

use gridfill::FillError;
use gridfill::dictionary::Pattern;
use gridfill::io::input::parse_puzzle_text;
use gridfill::puzzle::{Cell, Clue, Direction, Grid, Slot, SlotCell, SlotId, extract_slots};

fn grid_from(lines: &[&str]) -> Grid {
    parse_puzzle_text(&lines.join("\n")).unwrap()
}

#[test]
fn test_raw_rows_are_normalized() {
    let rows = vec![
        vec!["c", "A", "#"],
        vec!["", "  ", "xy"],
        vec!["t", ".", "z"],
    ];
    let grid = Grid::from_raw_rows(&rows).unwrap();
    assert_eq!(grid.cell(0, 0), Some(Cell::Letter('C')));
    assert_eq!(grid.cell(2, 0), Some(Cell::Blocked));
    // Empty, whitespace, and multi-character content all read as empty
    assert_eq!(grid.cell(0, 1), Some(Cell::Empty));
    assert_eq!(grid.cell(1, 1), Some(Cell::Empty));
    assert_eq!(grid.cell(2, 1), Some(Cell::Empty));
    assert_eq!(grid.cell(0, 2), Some(Cell::Letter('T')));
}

#[test]
fn test_grid_validation() {
    let empty: Vec<Vec<&str>> = Vec::new();
    assert!(matches!(
        Grid::from_raw_rows(&empty),
        Err(FillError::InvalidGrid { .. })
    ));

    let zero_cols: Vec<Vec<&str>> = vec![Vec::new()];
    assert!(matches!(
        Grid::from_raw_rows(&zero_cols),
        Err(FillError::InvalidGrid { .. })
    ));

    let ragged = vec![vec![".", "."], vec!["."]];
    assert!(matches!(
        Grid::from_raw_rows(&ragged),
        Err(FillError::InvalidGrid { .. })
    ));
}

#[test]
fn test_out_of_bounds_reads_are_none() {
    let grid = grid_from(&["..", ".."]);
    assert_eq!(grid.cell(2, 0), None);
    assert_eq!(grid.cell(0, 5), None);
}

#[test]
fn test_open_grid_numbering() {
    let grid = grid_from(&["...", "...", "..."]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    // Shared numbering: (0,0) starts both directions under number 1, the
    // rest of the first row continues down-only numbers, later rows pick up
    // across-only numbers
    let across_numbers: Vec<u32> = across.iter().map(|s| s.id.number).collect();
    let down_numbers: Vec<u32> = down.iter().map(|s| s.id.number).collect();
    assert_eq!(across_numbers, [1, 4, 5]);
    assert_eq!(down_numbers, [1, 2, 3]);

    for slot in across.iter().chain(&down) {
        assert_eq!(slot.len(), 3);
    }
}

#[test]
fn test_blocked_layout_extraction() {
    // .#.
    // ...
    // .#.
    let grid = grid_from(&[".#.", "...", ".#."]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    // Row 0 and row 2 hold only length-1 runs, which are not slots
    assert_eq!(across.len(), 1);
    assert_eq!(across[0].id, SlotId { direction: Direction::Across, number: 3 });
    assert_eq!(
        across[0].cells,
        [
            SlotCell { x: 0, y: 1, index: 0 },
            SlotCell { x: 1, y: 1, index: 1 },
            SlotCell { x: 2, y: 1, index: 2 },
        ]
    );

    assert_eq!(down.len(), 2);
    assert_eq!(down[0].id, SlotId { direction: Direction::Down, number: 1 });
    assert_eq!(down[1].id, SlotId { direction: Direction::Down, number: 2 });
    assert_eq!(down[0].cells[0], SlotCell { x: 0, y: 0, index: 0 });
    assert_eq!(down[1].cells[0], SlotCell { x: 2, y: 0, index: 0 });
}

#[test]
fn test_isolated_cell_yields_no_slots() {
    let grid = grid_from(&["#.#", "###"]);
    let (across, down) = extract_slots(&grid, &[], &[]);
    assert!(across.is_empty());
    assert!(down.is_empty());
}

#[test]
fn test_extraction_is_deterministic() {
    let grid = grid_from(&["..#..", ".....", "#...#", ".....", "..#.."]);
    let first = extract_slots(&grid, &[], &[]);
    let second = extract_slots(&grid, &[], &[]);
    assert_eq!(first, second);
}

#[test]
fn test_clues_assigned_positionally() {
    let grid = grid_from(&["...", "...", "..."]);
    let clues_across = vec![
        Clue::new("Feline".to_string(), "CAT".to_string()),
        Clue::new("Exist".to_string(), "ARE".to_string()),
    ];
    let (across, down) = extract_slots(&grid, &clues_across, &[]);

    assert_eq!(across[0].clue, "Feline");
    assert_eq!(across[0].answer, "CAT");
    assert_eq!(across[1].clue, "Exist");
    // Excess slots get empty clue/answer fields rather than failing
    assert_eq!(across[2].clue, "");
    assert_eq!(across[2].answer, "");
    for slot in &down {
        assert_eq!(slot.clue, "");
    }
}

#[test]
fn test_pattern_projection() {
    let grid = grid_from(&["C.T", "...", "..."]);
    let (across, _) = extract_slots(&grid, &[], &[]);

    let top_row = Pattern::from_grid(&grid, &across[0]).unwrap();
    assert_eq!(top_row.as_str(), "C?T");
    assert!(!top_row.is_complete());

    let middle_row = Pattern::from_grid(&grid, &across[1]).unwrap();
    assert_eq!(middle_row.as_str(), "???");
}

#[test]
fn test_projection_of_out_of_bounds_cell_is_unknown() {
    let grid = grid_from(&["AB", "CD"]);
    // Hand-built slot reaching past the grid edge
    let slot = Slot {
        id: SlotId { direction: Direction::Across, number: 1 },
        cells: vec![
            SlotCell { x: 0, y: 0, index: 0 },
            SlotCell { x: 1, y: 0, index: 1 },
            SlotCell { x: 2, y: 0, index: 2 },
        ],
        clue: String::new(),
        answer: String::new(),
    };
    let pattern = Pattern::from_grid(&grid, &slot).unwrap();
    assert_eq!(pattern.as_str(), "AB?");
}

#[test]
fn test_zero_length_slot_is_invariant_violation() {
    let grid = grid_from(&["..", ".."]);
    let slot = Slot {
        id: SlotId { direction: Direction::Down, number: 9 },
        cells: Vec::new(),
        clue: String::new(),
        answer: String::new(),
    };
    assert!(matches!(
        Pattern::from_grid(&grid, &slot),
        Err(FillError::SlotInvariant { number: 9, .. })
    ));
}

#[test]
fn test_render_round_trips_cell_kinds() {
    let grid = grid_from(&["A#.", "..."]);
    assert_eq!(grid.render(), "A#_\n___\n");
    assert_eq!(grid.unfilled_count(), 4);
    assert!(!grid.is_filled());
}
