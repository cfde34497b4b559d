//! Engine round trips and incoming snapshots
//!
//! A move request runs on the IO task pool; the pending task is polled each
//! frame without blocking and its reply is handed back to the session under
//! the ticket it was issued with.

use crate::game::board::PieceColor;
use crate::game::error::{SyncError, SyncResult};
use crate::game::events::{MoveConfirmed, MoveUnresolved, SnapshotArrived};
use crate::game::protocol::{OutboundRequest, RequestTicket};
use crate::game::resources::{BoardSession, PendingMoveRequest, RequestCompletion};
use crate::networking::EngineLink;
use bevy::prelude::*;
use bevy::tasks::{block_on, IoTaskPool};
use futures_lite::future;

/// Hand `outbound` to the transport, or fail it at once when there is none
pub fn dispatch_move_request(
    commands: &mut Commands,
    session: &mut BoardSession,
    link: Option<&EngineLink>,
    outbound: OutboundRequest,
    unresolved: &mut MessageWriter<MoveUnresolved>,
) {
    let Some(link) = link else {
        let reply = Err(SyncError::transport("no engine transport configured"));
        report_completion(session, outbound.ticket, outbound.player, reply, None, unresolved);
        return;
    };

    info!("[NETWORK] Sending {}", outbound.text);
    let transport = link.0.clone();
    let text = outbound.text;

    // Blocking transports get their own thread so the pool stays responsive
    let task = IoTaskPool::get().spawn(async move {
        std::thread::spawn(move || transport.send(&text))
            .join()
            .unwrap_or_else(|_| Err(SyncError::transport("transport thread panicked")))
    });

    commands.insert_resource(PendingMoveRequest {
        ticket: outbound.ticket,
        player: outbound.player,
        task,
    });
}

/// Poll the outstanding request and apply its reply when it lands
pub fn poll_move_request(
    mut commands: Commands,
    pending: Option<ResMut<PendingMoveRequest>>,
    mut session: ResMut<BoardSession>,
    mut confirmed: MessageWriter<MoveConfirmed>,
    mut unresolved: MessageWriter<MoveUnresolved>,
) {
    let Some(mut pending) = pending else {
        return;
    };

    if !pending.task.is_finished() {
        return;
    }

    let reply = match block_on(future::poll_once(&mut pending.task)) {
        Some(reply) => {
            commands.remove_resource::<PendingMoveRequest>();
            reply
        }
        None => {
            warn!("[NETWORK] Task reported finished but result not available");
            return;
        }
    };

    report_completion(
        &mut session,
        pending.ticket,
        pending.player,
        reply,
        Some(&mut confirmed),
        &mut unresolved,
    );
}

fn report_completion(
    session: &mut BoardSession,
    ticket: RequestTicket,
    player: PieceColor,
    reply: SyncResult<String>,
    confirmed: Option<&mut MessageWriter<MoveConfirmed>>,
    unresolved: &mut MessageWriter<MoveUnresolved>,
) {
    match session.complete_request(ticket, reply) {
        Ok(RequestCompletion::Applied(outcome)) if outcome.changed => {
            info!(
                "[NETWORK] Move by {:?} confirmed, {} transitions",
                player,
                outcome.instructions.len()
            );
            if let Some(confirmed) = confirmed {
                confirmed.write(MoveConfirmed { player });
            }
        }
        Ok(RequestCompletion::Applied(_)) => {
            info!("[NETWORK] Engine kept the board as it was; move refused");
            unresolved.write(MoveUnresolved {
                reason: "engine left the board unchanged".to_string(),
            });
        }
        Ok(RequestCompletion::Stale) => {}
        Err(e) => {
            warn!("[NETWORK] Move unresolved: {}", e);
            unresolved.write(MoveUnresolved {
                reason: e.to_string(),
            });
        }
    }
}

/// Apply snapshots that arrive outside a move round trip
pub fn apply_incoming_snapshots(
    mut arrivals: MessageReader<SnapshotArrived>,
    mut session: ResMut<BoardSession>,
) {
    for arrival in arrivals.read() {
        if let Err(e) = session.apply_snapshot(&arrival.text, arrival.starting) {
            warn!("[SNAPSHOT] Ignored incoming board: {}", e);
        }
    }
}
