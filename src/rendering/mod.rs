//! Rendering module - the 3D board scene
//!
//! - `board` - space meshes, one per cell, with click observers
//! - `pieces` - the shared disc mesh and the two piece materials
//!
//! Transforms are not computed here. The visual systems in
//! [`crate::game::systems::visual`] copy them from the session every frame.

pub mod board;
pub mod pieces;

pub use board::*;
pub use pieces::*;

use bevy::prelude::*;

pub struct BoardRenderPlugin;

impl Plugin for BoardRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpaceAssets>()
            .init_resource::<PieceAssets>()
            .add_systems(Startup, (setup_scene, board::board::create_board));
    }
}

fn setup_scene(mut commands: Commands) {
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 4_000_000.0,
            range: 80.0,
            ..default()
        },
        Transform::from_xyz(8.0, 24.0, 8.0),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 30.0, 22.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
