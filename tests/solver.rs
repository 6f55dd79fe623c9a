//! Validates both solver modes: fill success, intersection agreement, word
//! uniqueness, iteration caps, and seeded reproducibility

use gridfill::dictionary::{Dictionary, Pattern};
use gridfill::io::input::parse_puzzle_text;
use gridfill::puzzle::{Grid, extract_slots};
use gridfill::solver::{SolverConfig, exhaustive, heuristic, verify_fill};

fn grid_from(lines: &[&str]) -> Grid {
    parse_puzzle_text(&lines.join("\n")).unwrap()
}

fn dictionary_of(words: &[&str]) -> Dictionary {
    Dictionary::build([words.to_vec()])
}

/// Every three-letter word over the given alphabet
fn all_triples(alphabet: &[char]) -> Vec<String> {
    let mut words = Vec::new();
    for &a in alphabet {
        for &b in alphabet {
            for &c in alphabet {
                words.push([a, b, c].iter().collect());
            }
        }
    }
    words
}

#[test]
fn test_exhaustive_fills_open_3x3() {
    // Rows CAT/ARE/TEN make the columns CAT/ARE/TEN as well, so this
    // dictionary admits a full solve
    let dict = dictionary_of(&["CAT", "ARE", "TEN", "DOG", "SKY"]);
    let grid = grid_from(&["...", "...", "..."]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    let report = exhaustive::solve(&grid, &across, &down, &dict, SolverConfig::default(), None)
        .unwrap();

    assert!(report.success);
    assert!(report.grid.is_filled());
    assert!(report.iterations > 0);

    // Every slot projects a complete pattern, and every intersection reads
    // the same letter under the across and the down projection
    for across_slot in &across {
        let across_pattern = Pattern::from_grid(&report.grid, across_slot).unwrap();
        assert!(across_pattern.is_complete());
        for down_slot in &down {
            let down_pattern = Pattern::from_grid(&report.grid, down_slot).unwrap();
            for a_cell in &across_slot.cells {
                for d_cell in &down_slot.cells {
                    if a_cell.x == d_cell.x && a_cell.y == d_cell.y {
                        assert_eq!(
                            across_pattern.as_str().chars().nth(a_cell.index),
                            down_pattern.as_str().chars().nth(d_cell.index)
                        );
                    }
                }
            }
        }
    }

    // The caller's grid is untouched
    assert_eq!(grid.unfilled_count(), 9);
}

#[test]
fn test_exhaustive_respects_prefilled_letters() {
    let dict = dictionary_of(&["CAT", "ARE", "TEN", "TAR", "RAT"]);
    let grid = grid_from(&["C..", "...", "..."]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    let report = exhaustive::solve(&grid, &across, &down, &dict, SolverConfig::default(), None)
        .unwrap();

    assert!(report.success);
    let top_row = Pattern::from_grid(&report.grid, &across[0]).unwrap();
    assert!(top_row.as_str().starts_with('C'));
    assert!(dict.is_valid(top_row.as_str()));
}

#[test]
fn test_heuristic_fills_disjoint_slots_with_unique_words() {
    // Two across slots with no intersections: alternation falls back to the
    // across queue once the empty down queue is exhausted
    let dict = dictionary_of(&["WORD", "GAME", "PLAY", "QUIZ"]);
    let grid = grid_from(&["....", "####", "...."]);
    let (across, down) = extract_slots(&grid, &[], &[]);
    assert_eq!(across.len(), 2);
    assert!(down.is_empty());

    let report = heuristic::solve(&grid, &across, &down, &dict, SolverConfig::default(), None)
        .unwrap();

    assert!(report.success);
    assert_eq!(report.filled_count, 2);

    let first = Pattern::from_grid(&report.grid, &across[0]).unwrap();
    let second = Pattern::from_grid(&report.grid, &across[1]).unwrap();
    assert!(first.is_complete());
    assert!(second.is_complete());
    // Heuristic mode never places the same word twice
    assert_ne!(first.as_str(), second.as_str());
    assert!(dict.is_valid(first.as_str()));
    assert!(dict.is_valid(second.as_str()));
}

#[test]
fn test_heuristic_fills_intersecting_grid() {
    // With every triple over {A,B,C} in the dictionary any placement is
    // locally consistent, so the search succeeds quickly while uniqueness
    // still forces distinct row and column words
    let words = all_triples(&['A', 'B', 'C']);
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let dict = dictionary_of(&refs);
    let grid = grid_from(&["...", "...", "..."]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    let report = heuristic::solve(&grid, &across, &down, &dict, SolverConfig::default(), None)
        .unwrap();

    assert!(report.success);
    assert!(report.grid.is_filled());

    let mut placed_words = Vec::new();
    for slot in across.iter().chain(&down) {
        let pattern = Pattern::from_grid(&report.grid, slot).unwrap();
        assert!(pattern.is_complete());
        placed_words.push(pattern.as_str().to_string());
    }
    // No two distinct slots hold the identical word
    let mut deduplicated = placed_words.clone();
    deduplicated.sort();
    deduplicated.dedup();
    assert_eq!(deduplicated.len(), placed_words.len());
}

#[test]
fn test_heuristic_is_reproducible_per_seed() {
    let words = all_triples(&['A', 'B', 'C']);
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let dict = dictionary_of(&refs);
    let grid = grid_from(&["...", "...", "..."]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    let config = SolverConfig::new(10_000, 7);
    let first = heuristic::solve(&grid, &across, &down, &dict, config, None).unwrap();
    let second = heuristic::solve(&grid, &across, &down, &dict, config, None).unwrap();

    assert_eq!(first.success, second.success);
    assert_eq!(first.iterations, second.iterations);
    assert_eq!(first.grid.render(), second.grid.render());
}

#[test]
fn test_iteration_cap_of_one_returns_cleanly() {
    // Unsolvable: the dictionary has no five-letter words at all
    let dict = dictionary_of(&["CAT", "DOG"]);
    let grid = grid_from(&[".....", ".....", ".....", ".....", "....."]);
    let (across, down) = extract_slots(&grid, &[], &[]);
    let config = SolverConfig::new(1, 42);

    let heuristic_report =
        heuristic::solve(&grid, &across, &down, &dict, config, None).unwrap();
    assert!(!heuristic_report.success);
    assert_eq!(heuristic_report.iterations, 1);
    assert_eq!(heuristic_report.filled_count, 0);

    let exhaustive_report =
        exhaustive::solve(&grid, &across, &down, &dict, config, None).unwrap();
    assert!(!exhaustive_report.success);
    assert_eq!(exhaustive_report.iterations, 1);
}

#[test]
fn test_exhaustion_is_not_an_error() {
    // No dictionary word ends in Z, so the bottom row can never be placed
    // and the search exhausts every row combination above it
    let dict = dictionary_of(&["ABC", "DEF"]);
    let grid = grid_from(&["...", "...", "..Z"]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    let report = exhaustive::solve(&grid, &across, &down, &dict, SolverConfig::default(), None)
        .unwrap();
    assert!(!report.success);
    assert!(report.iterations > 0);
}

#[test]
fn test_already_complete_grid_succeeds_immediately() {
    let dict = dictionary_of(&["CAT", "ARE", "TEN"]);
    let grid = grid_from(&["CAT", "ARE", "TEN"]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    let report = heuristic::solve(&grid, &across, &down, &dict, SolverConfig::default(), None)
        .unwrap();
    assert!(report.success);
    assert_eq!(report.filled_count, 0);

    let check = verify_fill(&report.grid, &across, &down, &dict).unwrap();
    assert!(check.is_clean());
}

#[test]
fn test_verify_fill_flags_problems() {
    let dict = dictionary_of(&["CAT", "ARE", "TEN"]);
    // Top row spells a non-dictionary word; bottom row is unfinished
    let grid = grid_from(&["XYZ", "ARE", "T.N"]);
    let (across, down) = extract_slots(&grid, &[], &[]);

    let check = verify_fill(&grid, &across, &down, &dict).unwrap();
    assert!(!check.is_clean());
    assert_eq!(check.unfilled_cells, 1);
    assert!(!check.incomplete_slots.is_empty());
    assert!(
        check
            .invalid_words
            .iter()
            .any(|(_, word)| word == "XYZ")
    );
}
