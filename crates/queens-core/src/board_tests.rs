//! Tests for board states and conflict checking.

use super::board::*;

#[test]
fn test_attacks_same_row() {
    assert!(attacks(0, 3, 5, 3));
}

#[test]
fn test_attacks_diagonal() {
    assert!(attacks(2, 1, 5, 4));
    assert!(attacks(2, 4, 5, 1));
}

#[test]
fn test_attacks_no_conflict() {
    assert!(!attacks(0, 0, 1, 2));
    assert!(!attacks(3, 7, 6, 0));
}

#[test]
fn test_attacks_is_symmetric() {
    for col_a in 0..BOARD_SIZE {
        for col_b in 0..BOARD_SIZE {
            if col_a == col_b {
                continue;
            }
            for row_a in 0..BOARD_SIZE as u8 {
                for row_b in 0..BOARD_SIZE as u8 {
                    assert_eq!(
                        attacks(col_a, row_a, col_b, row_b),
                        attacks(col_b, row_b, col_a, row_a),
                        "asymmetry at ({col_a},{row_a}) vs ({col_b},{row_b})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_placement_place_and_clear() {
    let mut placement = Placement::empty();
    assert!(!placement.is_complete());

    placement.place(2, 5);
    assert_eq!(placement.row(2), Some(5));

    placement.clear(2);
    assert_eq!(placement.row(2), None);
}

#[test]
fn test_placement_completion() {
    let mut placement = Placement::empty();
    for col in 0..BOARD_SIZE {
        placement.place(col, col as u8);
    }
    assert!(placement.is_complete());

    let board = placement.as_board().unwrap();
    assert_eq!(board.rows(), &[0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_is_consistent_against_assigned_columns() {
    let mut placement = Placement::empty();
    placement.place(0, 0);

    // Same row
    assert!(!is_consistent(&placement, 1, 0));
    // Diagonal
    assert!(!is_consistent(&placement, 1, 1));
    // Safe
    assert!(is_consistent(&placement, 1, 2));
}

#[test]
fn test_incomplete_placement_has_maximal_conflict_cost() {
    let mut placement = Placement::empty();
    placement.place(0, 0);
    assert_eq!(placement_conflicts(&placement), u32::MAX);
}

#[test]
fn test_complete_placement_conflict_count() {
    let mut placement = Placement::empty();
    for col in 0..BOARD_SIZE {
        placement.place(col, 0);
    }
    // All queens on one row: C(8, 2) conflicting pairs.
    assert_eq!(placement_conflicts(&placement), 28);
}

#[test]
fn test_known_solution_has_zero_conflicts() {
    let board = Board::new([0, 4, 7, 5, 2, 6, 1, 3]);
    assert_eq!(board.conflicts(), 0);
    assert!(board.is_solution());
}

#[test]
fn test_diagonal_board_conflicts() {
    let board = Board::new([0, 1, 2, 3, 4, 5, 6, 7]);
    // Main diagonal: every pair conflicts.
    assert_eq!(board.conflicts(), 28);
    assert!(!board.is_solution());
}

#[test]
fn test_board_display_renders_queens() {
    let board = Board::new([0, 4, 7, 5, 2, 6, 1, 3]);
    let rendered = board.to_string();
    assert_eq!(rendered.matches('Q').count(), BOARD_SIZE);
}
