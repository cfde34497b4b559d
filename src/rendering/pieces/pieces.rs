//! Piece meshes and materials
//!
//! Every Morelli piece is the same flat disc; only the material tells the
//! colours apart. Handles are created once and shared by the resting pieces
//! and by orphans.

use crate::game::board::PieceColor;
use bevy::prelude::*;

/// Disc radius and thickness, in world units
const PIECE_RADIUS: f32 = 0.8;
const PIECE_HEIGHT: f32 = 0.2;

#[derive(Resource, Debug, Clone)]
pub struct PieceAssets {
    pub mesh: Handle<Mesh>,
    pub black: Handle<StandardMaterial>,
    pub white: Handle<StandardMaterial>,
}

impl PieceAssets {
    pub fn material(&self, color: PieceColor) -> &Handle<StandardMaterial> {
        match color {
            PieceColor::Black => &self.black,
            PieceColor::White => &self.white,
        }
    }
}

impl FromWorld for PieceAssets {
    fn from_world(world: &mut World) -> Self {
        let mesh = world
            .resource_mut::<Assets<Mesh>>()
            .add(Cylinder::new(PIECE_RADIUS, PIECE_HEIGHT));
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        PieceAssets {
            mesh,
            black: materials.add(StandardMaterial {
                base_color: Color::srgb(0.08, 0.08, 0.08),
                perceptual_roughness: 0.4,
                ..default()
            }),
            white: materials.add(StandardMaterial {
                base_color: Color::srgb(0.92, 0.92, 0.9),
                perceptual_roughness: 0.4,
                ..default()
            }),
        }
    }
}
