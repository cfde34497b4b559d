//! Two-pick selection state machine
//!
//! `Empty -> PieceSelected(src) -> Empty`. Picking a piece always (re)selects
//! it, so a stale selection never has to be cancelled explicitly. Picking an
//! empty cell with a selection completes the move; without one it does nothing.

use crate::game::board::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    PieceSelected(Position),
}

/// Source and destination of a move the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
}

/// Result of feeding one pick into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    NoOp,
    SelectionUpdated(Position),
    MoveRequestReady(MoveRequest),
}

#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected(&self) -> Option<Position> {
        match self.state {
            SelectionState::PieceSelected(pos) => Some(pos),
            SelectionState::Empty => None,
        }
    }

    pub fn handle_pick(&mut self, position: Position, has_piece: bool) -> PickOutcome {
        match (self.state, has_piece) {
            (_, true) => {
                self.state = SelectionState::PieceSelected(position);
                PickOutcome::SelectionUpdated(position)
            }
            (SelectionState::PieceSelected(from), false) => {
                self.state = SelectionState::Empty;
                PickOutcome::MoveRequestReady(MoveRequest { from, to: position })
            }
            (SelectionState::Empty, false) => PickOutcome::NoOp,
        }
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Position = Position::new(0, 0);
    const B: Position = Position::new(2, 3);
    const C: Position = Position::new(4, 4);

    #[test]
    fn test_piece_then_empty_requests_move() {
        //! [pick(piece A), pick(empty B)] yields exactly one MoveRequest{A, B}
        let mut selection = SelectionController::new();
        assert_eq!(selection.handle_pick(A, true), PickOutcome::SelectionUpdated(A));
        assert_eq!(
            selection.handle_pick(B, false),
            PickOutcome::MoveRequestReady(MoveRequest { from: A, to: B })
        );
        assert_eq!(selection.state(), SelectionState::Empty);
    }

    #[test]
    fn test_second_piece_overrides_selection() {
        //! [pick(piece A), pick(piece C)] yields no request and selects C
        let mut selection = SelectionController::new();
        selection.handle_pick(A, true);
        assert_eq!(selection.handle_pick(C, true), PickOutcome::SelectionUpdated(C));
        assert_eq!(selection.state(), SelectionState::PieceSelected(C));
    }

    #[test]
    fn test_empty_pick_without_selection_is_noop() {
        let mut selection = SelectionController::new();
        assert_eq!(selection.handle_pick(B, false), PickOutcome::NoOp);
        assert_eq!(selection.state(), SelectionState::Empty);
    }

    #[test]
    fn test_cycle_restarts_after_request() {
        let mut selection = SelectionController::new();
        selection.handle_pick(A, true);
        selection.handle_pick(B, false);
        assert_eq!(selection.handle_pick(C, false), PickOutcome::NoOp);
    }

    #[test]
    fn test_reset() {
        let mut selection = SelectionController::new();
        selection.handle_pick(A, true);
        selection.reset();
        assert_eq!(selection.selected(), None);
    }
}
