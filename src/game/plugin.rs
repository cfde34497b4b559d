//! Board-sync plugin
//!
//! Registers the session resources, messages and systems. The session is
//! built from [`BoardSettings`] when that resource is present at build time,
//! otherwise from defaults. Rendering is a separate plugin
//! ([`crate::rendering::BoardRenderPlugin`]); without it the visual systems
//! simply never run, which is how headless apps and tests use this plugin.
//!
//! The engine transport is an [`crate::networking::EngineLink`] resource the
//! app inserts; without one every move request fails as unresolved.

use super::events::*;
use super::resources::*;
use super::system_sets::BoardSystems;
use super::systems::*;
use crate::core::BoardSettings;
use crate::rendering::PieceAssets;
use bevy::prelude::*;

pub struct BoardSyncPlugin;

impl Plugin for BoardSyncPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<BoardSettings>()
            .cloned()
            .unwrap_or_default();

        info!(
            "[SESSION] Board sync {}x{}, engine at {}",
            settings.rows, settings.cols, settings.engine.base_url
        );

        let flag = TurnFlag::default();
        app.insert_resource(BoardSession::new(
            settings.layout(),
            settings.catalog(),
            flag.clone(),
        ))
        .insert_resource(flag)
        .insert_resource(TurnClock::new(settings.round()))
        .insert_resource(settings);

        app.add_message::<CellPicked>()
            .add_message::<SnapshotArrived>()
            .add_message::<MoveConfirmed>()
            .add_message::<MoveUnresolved>()
            .add_message::<TurnExpired>()
            .add_message::<NewGame>();

        // Input → Network → Animation → Visual
        app.configure_sets(
            Update,
            (
                BoardSystems::Input,
                BoardSystems::Network,
                BoardSystems::Animation,
                BoardSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (handle_new_game, handle_cell_picks)
                    .chain()
                    .in_set(BoardSystems::Input),
                (apply_incoming_snapshots, poll_move_request)
                    .chain()
                    .in_set(BoardSystems::Network),
                (pass_turn_on_move, tick_board_animations, advance_turn_clock)
                    .chain()
                    .in_set(BoardSystems::Animation),
                (sync_cell_visuals, sync_orphan_visuals)
                    .in_set(BoardSystems::Visual)
                    .run_if(resource_exists::<PieceAssets>),
            ),
        );
    }
}
