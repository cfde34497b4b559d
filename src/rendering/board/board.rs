//! Board creation
//!
//! Spawns one space and one piece slot per cell in a single batch, each with
//! the click observer attached. Positions come from the session's views so the
//! first frame already matches the board model.

use crate::rendering::pieces::PieceAssets;
use crate::game::components::{BoardSpace, SpacePiece};
use crate::game::resources::BoardSession;
use crate::game::systems::input::on_board_click;
use crate::game::systems::visual::to_transform;
use bevy::picking::pointer::PointerInteraction;
use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct SpaceAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl FromWorld for SpaceAssets {
    fn from_world(world: &mut World) -> Self {
        let mesh = world
            .resource_mut::<Assets<Mesh>>()
            .add(Cuboid::new(2.0, 0.3, 2.0));
        let material = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color: Color::srgb(0.55, 0.38, 0.22),
                perceptual_roughness: 0.8,
                ..default()
            });
        SpaceAssets { mesh, material }
    }
}

pub(crate) fn create_board(
    mut commands: Commands,
    session: Res<BoardSession>,
    spaces: Res<SpaceAssets>,
    pieces: Res<PieceAssets>,
) {
    let views = session.cell_views();

    for view in &views {
        let name = format!("Space {}", view.position);
        commands
            .spawn((
                Mesh3d(spaces.mesh.clone()),
                MeshMaterial3d(spaces.material.clone()),
                to_transform(&view.transforms.space),
                PointerInteraction::default(),
                BoardSpace {
                    position: view.position,
                },
                Name::new(name),
            ))
            .observe(on_board_click);

        let (material, visibility) = match view.shown {
            Some(color) => (pieces.material(color).clone(), Visibility::Inherited),
            None => (pieces.black.clone(), Visibility::Hidden),
        };
        commands
            .spawn((
                Mesh3d(pieces.mesh.clone()),
                MeshMaterial3d(material),
                to_transform(&view.transforms.piece),
                visibility,
                SpacePiece {
                    position: view.position,
                },
                Name::new(format!("Piece {}", view.position)),
            ))
            .observe(on_board_click);
    }

    info!("[RENDER] Spawned {} board spaces", views.len());
}
