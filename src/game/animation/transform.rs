//! Local transforms for animated cells and orphans
//!
//! This is the whole render contract: given a cell (or orphan) and the
//! progress of its animation, produce the translation, rotation and scale the
//! renderer should draw the board space and piece mesh with. Mesh geometry,
//! camera and lighting stay outside.

use super::kind::{AnimationKind, RemoveStyle};
use crate::game::board::Position;
use bevy::math::{Quat, Vec3};
use std::f32::consts::PI;

/// Height of the arc an orphan travels along
const DISPLACE_ARC_HEIGHT: f32 = 2.0;
/// How far a flipping piece rises while turning over
const FLIP_LIFT: f32 = 0.8;

/// Placement of board cells in local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    /// Distance between neighbouring cell centres
    pub spacing: f32,
    /// Height of a resting piece above its space
    pub piece_lift: f32,
}

impl BoardLayout {
    pub fn new(rows: usize, cols: usize, spacing: f32) -> Self {
        Self {
            rows,
            cols,
            spacing,
            piece_lift: 0.15,
        }
    }

    /// Centre of the space at `pos`, board centred on the origin
    pub fn cell_translation(&self, pos: Position) -> Vec3 {
        let half_cols = (self.cols.saturating_sub(1)) as f32 / 2.0;
        let half_rows = (self.rows.saturating_sub(1)) as f32 / 2.0;
        Vec3::new(
            (pos.col as f32 - half_cols) * self.spacing,
            0.0,
            (pos.row as f32 - half_rows) * self.spacing,
        )
    }

    pub fn piece_translation(&self, pos: Position) -> Vec3 {
        self.cell_translation(pos) + Vec3::Y * self.piece_lift
    }
}

/// Transform a renderer applies to one mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl LocalTransform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Space and piece transforms for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTransforms {
    pub space: LocalTransform,
    pub piece: LocalTransform,
}

/// Sine bump: 0 at both ends, 1 in the middle
fn bump(progress: f32) -> f32 {
    (PI * progress.clamp(0.0, 1.0)).sin()
}

impl CellTransforms {
    pub fn compute(
        layout: &BoardLayout,
        pos: Position,
        animation: Option<(&AnimationKind, f32)>,
    ) -> Self {
        let mut space = LocalTransform::at(layout.cell_translation(pos));
        let mut piece = LocalTransform::at(layout.piece_translation(pos));

        let Some((kind, t)) = animation else {
            return Self { space, piece };
        };

        match *kind {
            AnimationKind::Insert(_) => {
                piece.scale = t;
                piece.rotation = Quat::from_rotation_x(PI * (1.0 - t));
            }
            AnimationKind::Remove(RemoveStyle::Teardown) => {
                piece.scale = 1.0 - t;
                piece.rotation = Quat::from_rotation_x(PI * t);
            }
            AnimationKind::Remove(RemoveStyle::SpringOut { amplitude }) => {
                // Piece is already gone; only the space reacts
                space.translation.y += bump(t) * amplitude;
            }
            AnimationKind::Flip(_) => {
                piece.translation.y += bump(t) * FLIP_LIFT;
                piece.rotation = Quat::from_rotation_x(PI * t);
            }
            AnimationKind::Bounce { amplitude } => {
                let offset = bump(t) * amplitude;
                space.translation.y += offset;
                piece.translation.y += offset;
            }
            // Cells never carry a displacement; orphans use `orphan_transform`
            AnimationKind::Displace { .. } => {}
        }

        Self { space, piece }
    }
}

/// Transform of an orphan travelling from `from` to `to`
pub fn orphan_transform(
    layout: &BoardLayout,
    from: Position,
    to: Position,
    progress: f32,
) -> LocalTransform {
    let t = progress.clamp(0.0, 1.0);
    let start = layout.piece_translation(from);
    let end = layout.piece_translation(to);
    let mut translation = start.lerp(end, t);
    translation.y += bump(t) * DISPLACE_ARC_HEIGHT;
    LocalTransform::at(translation)
}
