//! Snapshot diffing
//!
//! Compares the pieces currently on the local board with a freshly parsed
//! snapshot and decides, cell by cell, which transition to play.
//!
//! | old piece | new code | starting | action                       |
//! |-----------|----------|----------|------------------------------|
//! | Black     | White    | any      | flip to White                |
//! | White     | Black    | any      | flip to Black                |
//! | present   | Empty    | false    | capture: clear now, spring   |
//! | present   | Empty    | true     | teardown: clear when done    |
//! | absent    | piece    | true     | insert                       |
//! | absent    | piece    | false    | nothing (move flow)          |
//!
//! `starting` separates the one-time scene setup, where every piece pops in
//! from nothing, from steady-state play, where changes come from a single
//! engine-validated move.

use super::grid::Grid;
use super::model::Cell;
use super::types::{CellCode, PieceColor, Position};
use crate::game::error::{SyncError, SyncResult};

/// Transition chosen for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffAction {
    /// Turn the piece over to this color
    Flip(PieceColor),
    /// Piece was captured: clear it immediately and spring the empty space
    Capture,
    /// Piece leaves during setup: keep it until the removal finishes
    Teardown,
    /// Piece of this color appears during setup
    Insert(PieceColor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellInstruction {
    pub position: Position,
    pub action: DiffAction,
}

/// Action for a single cell, `None` when nothing should play
pub fn diff_cell(old: Option<PieceColor>, new: CellCode, starting: bool) -> Option<DiffAction> {
    match (old, new) {
        (Some(PieceColor::Black), CellCode::White) => Some(DiffAction::Flip(PieceColor::White)),
        (Some(PieceColor::White), CellCode::Black) => Some(DiffAction::Flip(PieceColor::Black)),
        (Some(_), CellCode::Empty) if starting => Some(DiffAction::Teardown),
        (Some(_), CellCode::Empty) => Some(DiffAction::Capture),
        (None, CellCode::Black | CellCode::White) if starting => {
            new.piece_color().map(DiffAction::Insert)
        }
        _ => None,
    }
}

/// Instructions for every cell that changes, in row-major order
pub fn diff(
    current: &Grid<Cell>,
    snapshot: &Grid<CellCode>,
    starting: bool,
) -> SyncResult<Vec<CellInstruction>> {
    if current.dimensions() != snapshot.dimensions() {
        return Err(SyncError::DimensionMismatch {
            expected: current.dimensions(),
            found: snapshot.dimensions(),
        });
    }

    Ok(current
        .iter()
        .zip(snapshot.iter())
        .filter_map(|((position, cell), (_, code))| {
            diff_cell(cell.piece.map(|p| p.color), *code, starting)
                .map(|action| CellInstruction { position, action })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::snapshot::parse;
    use crate::game::board::types::Piece;

    fn board(text: &str) -> Grid<Cell> {
        parse(text).unwrap().map(|code| Cell {
            piece: code.piece_color().map(Piece::new),
        })
    }

    #[test]
    fn test_capture_in_steady_state() {
        //! [[1,0],[0,2]] -> [[1,0],[0,0]] removes exactly the white piece
        let current = board("[[1,0],[0,2]]");
        let next = parse("[[1,0],[0,0]]").unwrap();
        let instructions = diff(&current, &next, false).unwrap();
        assert_eq!(
            instructions,
            vec![CellInstruction {
                position: Position::new(1, 1),
                action: DiffAction::Capture,
            }]
        );
    }

    #[test]
    fn test_starting_inserts_every_piece() {
        let current = board("[[0,0],[0,0]]");
        let next = parse("[[1,1],[2,2]]").unwrap();
        let instructions = diff(&current, &next, true).unwrap();
        let actions: Vec<_> = instructions.iter().map(|i| (i.position, i.action)).collect();
        assert_eq!(
            actions,
            vec![
                (Position::new(0, 0), DiffAction::Insert(PieceColor::Black)),
                (Position::new(0, 1), DiffAction::Insert(PieceColor::Black)),
                (Position::new(1, 0), DiffAction::Insert(PieceColor::White)),
                (Position::new(1, 1), DiffAction::Insert(PieceColor::White)),
            ]
        );
    }

    #[test]
    fn test_appearing_piece_outside_starting_is_noop() {
        let current = board("[[0,0]]");
        let next = parse("[[1,2]]").unwrap();
        assert!(diff(&current, &next, false).unwrap().is_empty());
    }

    #[test]
    fn test_flips_apply_in_any_mode() {
        for starting in [false, true] {
            let current = board("[[1,2]]");
            let next = parse("[[2,1]]").unwrap();
            let actions: Vec<_> = diff(&current, &next, starting)
                .unwrap()
                .into_iter()
                .map(|i| i.action)
                .collect();
            assert_eq!(
                actions,
                vec![
                    DiffAction::Flip(PieceColor::White),
                    DiffAction::Flip(PieceColor::Black)
                ]
            );
        }
    }

    #[test]
    fn test_starting_removal_is_teardown() {
        let current = board("[[1]]");
        let next = parse("[[0]]").unwrap();
        assert_eq!(diff(&current, &next, true).unwrap()[0].action, DiffAction::Teardown);
    }

    #[test]
    fn test_special_codes_do_not_animate() {
        let current = board("[[1,0]]");
        let next = parse("[[-1,-2]]").unwrap();
        assert!(diff(&current, &next, false).unwrap().is_empty());
        assert!(diff(&current, &next, true).unwrap().is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let current = board("[[1,0],[0,2]]");
        let next = parse("[[1,0,0],[0,2,0]]").unwrap();
        assert_eq!(
            diff(&current, &next, false),
            Err(SyncError::DimensionMismatch {
                expected: (2, 2),
                found: (2, 3)
            })
        );
    }

    #[test]
    fn test_diff_is_deterministic() {
        let current = board("[[1,2,0],[0,1,2],[2,0,1]]");
        let next = parse("[[2,0,1],[1,0,0],[2,1,-4]]").unwrap();
        for starting in [false, true] {
            assert_eq!(diff(&current, &next, starting), diff(&current, &next, starting));
        }
    }
}
