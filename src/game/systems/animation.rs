//! Animation clock and turn countdown

use crate::game::events::{MoveConfirmed, TurnExpired};
use crate::game::resources::{BoardSession, TurnClock, TurnFlag};
use bevy::prelude::*;

/// Advance every board animation by the frame delta
pub fn tick_board_animations(time: Res<Time>, mut session: ResMut<BoardSession>) {
    let report = session.tick(time.delta());
    for orphan in &report.pruned {
        trace!("[ANIMATION] Orphan {:?} landed and pruned", orphan);
    }
}

/// Count the round down once the board is live; flip the turn on expiry
pub fn advance_turn_clock(
    time: Res<Time>,
    session: Res<BoardSession>,
    flag: Res<TurnFlag>,
    mut clock: ResMut<TurnClock>,
    mut expired: MessageWriter<TurnExpired>,
) {
    if !session.model().is_initialized() {
        return;
    }
    if let Some(next) = clock.advance(time.delta(), &flag) {
        info!("[TURN] Time is up, {:?} to play", next);
        expired.write(TurnExpired { next });
    }
}

/// A confirmed move hands the turn over and restarts the round
pub fn pass_turn_on_move(
    mut confirmed: MessageReader<MoveConfirmed>,
    flag: Res<TurnFlag>,
    mut clock: ResMut<TurnClock>,
) {
    for move_confirmed in confirmed.read() {
        let next = clock.pass_turn(move_confirmed.player, &flag);
        info!("[TURN] {:?} to play", next);
    }
}
