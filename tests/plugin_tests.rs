//! Board Sync Plugin Integration Tests
//!
//! Drives a headless App through the plugin's messages with a scripted engine:
//! - Move round trips over the task pool
//! - Missing transport
//! - Turn expiry
//! - Visual sync onto entities

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use morelli::core::BoardSettings;
use morelli::game::board::{PieceColor, Position};
use morelli::game::components::{BoardSpace, OrphanPiece, SpacePiece};
use morelli::game::events::{CellPicked, NewGame, SnapshotArrived};
use morelli::game::resources::{BoardSession, PendingMoveRequest, TurnFlag};
use morelli::game::SyncResult;
use morelli::networking::{EngineLink, EngineTransport};
use morelli::rendering::PieceAssets;
use morelli::BoardSyncPlugin;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Engine stand-in: records every request and answers with a fixed board
struct ScriptedEngine {
    reply: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl EngineTransport for ScriptedEngine {
    fn send(&self, request: &str) -> SyncResult<String> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.to_string());
        }
        Ok(self.reply.clone())
    }
}

/// Engine that holds its reply until the test releases it
struct GatedEngine {
    reply: String,
    release: Mutex<Receiver<()>>,
}

impl GatedEngine {
    fn new(reply: &str) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let engine = GatedEngine {
            reply: reply.to_string(),
            release: Mutex::new(rx),
        };
        (engine, tx)
    }
}

impl EngineTransport for GatedEngine {
    fn send(&self, _request: &str) -> SyncResult<String> {
        if let Ok(release) = self.release.lock() {
            let _ = release.recv();
        }
        Ok(self.reply.clone())
    }
}

fn test_app(settings: BoardSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(settings)
        .add_plugins(BoardSyncPlugin);
    app
}

fn small_board() -> BoardSettings {
    BoardSettings {
        rows: 2,
        cols: 2,
        ..Default::default()
    }
}

fn start(app: &mut App, board: &str) {
    app.world_mut().write_message(NewGame {
        starting: Some(board.to_string()),
    });
    // Let the setup animations play out
    for _ in 0..15 {
        app.update();
    }
}

fn pick(app: &mut App, cell_id: usize, has_piece: bool) {
    app.world_mut().write_message(CellPicked { cell_id, has_piece });
    app.update();
}

fn wait_for_reply(app: &mut App) {
    for _ in 0..400 {
        if !app.world().contains_resource::<PendingMoveRequest>() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
        app.update();
    }
    panic!("engine reply never arrived");
}

fn piece_color(app: &App, row: usize, col: usize) -> Option<PieceColor> {
    app.world()
        .resource::<BoardSession>()
        .model()
        .piece_at(Position::new(row, col))
        .map(|p| p.color)
}

// ============================================================================
// Move Round Trips
// ============================================================================

#[test]
fn test_move_round_trip_through_plugin() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut app = test_app(small_board());
    app.insert_resource(EngineLink::new(ScriptedEngine {
        reply: "[[0,0],[0,1]]".to_string(),
        seen: seen.clone(),
    }));
    start(&mut app, "[[1,0],[0,0]]");

    pick(&mut app, 1, true);
    pick(&mut app, 4, false);
    wait_for_reply(&mut app);

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        ["movePiece([[1,0],[0,0]],0,0,1,1,blackPlayer)".to_string()]
    );
    assert_eq!(
        app.world().resource::<TurnFlag>().current(),
        PieceColor::White,
        "a confirmed move passes the turn"
    );

    for _ in 0..15 {
        app.update();
    }
    let session = app.world().resource::<BoardSession>();
    assert!(session.model().orphans().is_empty(), "orphan landed and was pruned");
    assert_eq!(piece_color(&app, 1, 1), Some(PieceColor::Black));
    assert_eq!(piece_color(&app, 0, 0), None);
}

#[test]
fn test_round_expiry_during_move_still_passes_turn_to_opponent() {
    let settings = BoardSettings {
        round_secs: 2,
        ..small_board()
    };
    let mut app = test_app(settings);
    let (engine, release) = GatedEngine::new("[[0,0],[0,1]]");
    app.insert_resource(EngineLink::new(engine));
    start(&mut app, "[[1,0],[0,0]]");

    pick(&mut app, 1, true);
    pick(&mut app, 4, false);
    for _ in 0..20 {
        app.update();
    }
    assert!(app.world().contains_resource::<PendingMoveRequest>());
    assert_eq!(
        app.world().resource::<TurnFlag>().current(),
        PieceColor::White,
        "round ran out while the engine was thinking"
    );

    release.send(()).unwrap();
    wait_for_reply(&mut app);
    app.update();

    assert_eq!(piece_color(&app, 1, 1), Some(PieceColor::Black));
    assert_eq!(
        app.world().resource::<TurnFlag>().current(),
        PieceColor::White,
        "Black moved, so White plays next"
    );
}

#[test]
fn test_missing_transport_leaves_orphan_parked() {
    let mut app = test_app(small_board());
    start(&mut app, "[[1,0],[0,0]]");

    pick(&mut app, 1, true);
    pick(&mut app, 2, false);
    for _ in 0..15 {
        app.update();
    }

    let session = app.world().resource::<BoardSession>();
    assert!(!session.has_outstanding_request());
    assert_eq!(session.model().orphans().len(), 1, "unanswered orphan stays parked");
    assert_eq!(app.world().resource::<TurnFlag>().current(), PieceColor::Black);

    // A new game clears it
    start(&mut app, "[[1,0],[0,0]]");
    assert!(app.world().resource::<BoardSession>().model().orphans().is_empty());
    assert_eq!(piece_color(&app, 0, 0), Some(PieceColor::Black));
}

#[test]
fn test_malformed_incoming_snapshot_is_ignored() {
    let mut app = test_app(small_board());
    start(&mut app, "[[1,0],[0,2]]");

    app.world_mut().write_message(SnapshotArrived {
        text: "[[1,0],[0".to_string(),
        starting: false,
    });
    app.update();

    assert_eq!(piece_color(&app, 0, 0), Some(PieceColor::Black));
    assert_eq!(piece_color(&app, 1, 1), Some(PieceColor::White));
}

// ============================================================================
// Turn Clock
// ============================================================================

#[test]
fn test_round_expiry_passes_turn() {
    let settings = BoardSettings {
        round_secs: 1,
        ..small_board()
    };
    let mut app = test_app(settings);
    for _ in 0..30 {
        app.update();
    }
    assert_eq!(
        app.world().resource::<TurnFlag>().current(),
        PieceColor::Black,
        "clock waits for the first board"
    );

    start(&mut app, "[[1,0],[0,0]]");
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(app.world().resource::<TurnFlag>().current(), PieceColor::White);
}

// ============================================================================
// Visual Sync
// ============================================================================

#[test]
fn test_views_reach_entities() {
    let mut app = test_app(small_board());
    app.insert_resource(PieceAssets {
        mesh: Handle::default(),
        black: Handle::default(),
        white: Handle::default(),
    });
    let space = app
        .world_mut()
        .spawn((
            BoardSpace {
                position: Position::new(0, 0),
            },
            Transform::default(),
        ))
        .id();
    let piece = app
        .world_mut()
        .spawn((
            SpacePiece {
                position: Position::new(1, 1),
            },
            Transform::default(),
            Visibility::Hidden,
            MeshMaterial3d::<StandardMaterial>(Handle::default()),
        ))
        .id();

    start(&mut app, "[[1,0],[0,2]]");

    let layout = *app.world().resource::<BoardSession>().layout();
    assert_eq!(
        app.world().get::<Transform>(space).unwrap().translation,
        layout.cell_translation(Position::new(0, 0))
    );
    assert_eq!(
        app.world().get::<Visibility>(piece),
        Some(&Visibility::Inherited),
        "white piece at (1,1) is shown"
    );

    pick(&mut app, 1, true);
    pick(&mut app, 2, false);
    app.update();
    let mut orphans = app.world_mut().query::<&OrphanPiece>();
    assert_eq!(orphans.iter(app.world()).count(), 1);
}
