//! Visual sync - copies session views onto board entities

use crate::game::animation::LocalTransform;
use crate::game::board::OrphanId;
use crate::game::components::{BoardSpace, OrphanPiece, SpacePiece};
use crate::game::resources::BoardSession;
use crate::rendering::PieceAssets;
use bevy::prelude::*;
use std::collections::HashSet;

pub fn to_transform(local: &LocalTransform) -> Transform {
    Transform {
        translation: local.translation,
        rotation: local.rotation,
        scale: Vec3::splat(local.scale),
    }
}

/// Write space and piece transforms, piece visibility and colour
pub fn sync_cell_visuals(
    session: Res<BoardSession>,
    assets: Res<PieceAssets>,
    mut spaces: Query<(&BoardSpace, &mut Transform), Without<SpacePiece>>,
    mut pieces: Query<
        (
            &SpacePiece,
            &mut Transform,
            &mut Visibility,
            &mut MeshMaterial3d<StandardMaterial>,
        ),
        Without<BoardSpace>,
    >,
) {
    let views = session.cell_views();
    let cols = session.layout().cols;
    let view_at = |row: usize, col: usize| views.get(row * cols + col);

    for (space, mut transform) in spaces.iter_mut() {
        if let Some(view) = view_at(space.position.row, space.position.col) {
            *transform = to_transform(&view.transforms.space);
        }
    }

    for (piece, mut transform, mut visibility, mut material) in pieces.iter_mut() {
        let Some(view) = view_at(piece.position.row, piece.position.col) else {
            continue;
        };
        match view.shown {
            Some(color) => {
                *transform = to_transform(&view.transforms.piece);
                visibility.set_if_neq(Visibility::Inherited);
                let wanted = assets.material(color);
                if material.0 != *wanted {
                    material.0 = wanted.clone();
                }
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

/// Spawn, move and despawn orphan entities to match the session
pub fn sync_orphan_visuals(
    mut commands: Commands,
    session: Res<BoardSession>,
    assets: Res<PieceAssets>,
    mut orphans: Query<(Entity, &OrphanPiece, &mut Transform)>,
) {
    let views = session.orphan_views();
    let mut drawn: HashSet<OrphanId> = HashSet::new();

    for (entity, orphan, mut transform) in orphans.iter_mut() {
        match views.iter().find(|view| view.id == orphan.id) {
            Some(view) => {
                *transform = to_transform(&view.transform);
                drawn.insert(orphan.id);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for view in views.iter().filter(|view| !drawn.contains(&view.id)) {
        commands.spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material(view.color).clone()),
            to_transform(&view.transform),
            OrphanPiece { id: view.id },
            Name::new(format!("Orphan {}", view.id.0)),
        ));
    }
}
