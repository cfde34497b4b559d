//! Pick handling and new-game resets

use crate::game::board::PieceColor;
use crate::game::components::{BoardSpace, SpacePiece};
use crate::game::events::{CellPicked, MoveUnresolved, NewGame};
use crate::game::resources::{BoardSession, PendingMoveRequest, PickResult, TurnClock, TurnFlag};
use crate::game::systems::network_move::dispatch_move_request;
use crate::networking::EngineLink;
use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

/// Observer for clicks on a space or the piece resting on it
///
/// Both report the same cell; whether it holds a piece is read from the
/// session as drawn, so a piece still inserting counts as present.
pub fn on_board_click(
    click: On<Pointer<Click>>,
    spaces: Query<&BoardSpace>,
    pieces: Query<&SpacePiece>,
    session: Res<BoardSession>,
    mut picks: MessageWriter<CellPicked>,
) {
    if !matches!(click.event.button, PointerButton::Primary) {
        return;
    }
    let position = match spaces.get(click.entity) {
        Ok(space) => space.position,
        Err(_) => match pieces.get(click.entity) {
            Ok(piece) => piece.position,
            Err(_) => return,
        },
    };
    let cell_id = session.model().cells().pick_id(position);
    picks.write(CellPicked {
        cell_id,
        has_piece: session.pick_has_piece(cell_id),
    });
}

/// Feed pick messages into the session and dispatch any move request
pub fn handle_cell_picks(
    mut commands: Commands,
    mut picks: MessageReader<CellPicked>,
    mut session: ResMut<BoardSession>,
    link: Option<Res<EngineLink>>,
    mut unresolved: MessageWriter<MoveUnresolved>,
) {
    for pick in picks.read() {
        match session.pick(pick.cell_id, pick.has_piece) {
            PickResult::MoveRequested(outbound) => {
                dispatch_move_request(
                    &mut commands,
                    &mut session,
                    link.as_deref(),
                    outbound,
                    &mut unresolved,
                );
            }
            PickResult::Rejected(request) => {
                debug!(
                    "[INPUT] Move {} -> {} dropped while waiting for the engine",
                    request.from, request.to
                );
            }
            PickResult::Ignored | PickResult::NoOp | PickResult::Selected(_) => {}
        }
    }
}

/// Start over: drop transients, cancel the request, restart the clock
pub fn handle_new_game(
    mut commands: Commands,
    mut new_games: MessageReader<NewGame>,
    mut session: ResMut<BoardSession>,
    mut clock: ResMut<TurnClock>,
    flag: Res<TurnFlag>,
) {
    for new_game in new_games.read() {
        session.reset();
        commands.remove_resource::<PendingMoveRequest>();
        flag.set(PieceColor::Black);
        clock.restart();

        if let Some(text) = &new_game.starting {
            if let Err(e) = session.apply_snapshot(text, true) {
                warn!("[INPUT] Starting board rejected: {}", e);
            }
        }
        info!("[INPUT] New game");
    }
}
