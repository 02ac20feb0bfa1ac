//! Satval Bevy Plugin — a saturation/value plane as a Bevy UI widget.
//!
//! Bevy picking plays the gesture-recognition role for the core
//! [`SessionController`](satval_core::SessionController), and a `UiMaterial`
//! plus the thumb node play the rendering role.

pub mod events;
pub mod material;
pub mod plane;

use bevy::asset::embedded_asset;
use bevy::prelude::*;
use bevy::ui_render::prelude::UiMaterialPlugin;

pub use events::{SatValChanged, SatValTrigger};
pub use material::SatValPlaneMaterial;
pub use plane::{SatValPlane, SatValThumb, sat_val_plane};

/// Registers the plane material, the `SatValChanged` message, pointer
/// observers, and the visual sync systems.
pub struct SatValPlugin;

impl Plugin for SatValPlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "shaders/sat_val_plane.wgsl");
        app.add_plugins(UiMaterialPlugin::<SatValPlaneMaterial>::default())
            .add_message::<SatValChanged>()
            .add_systems(
                PostUpdate,
                (
                    plane::attach_plane_material,
                    plane::sync_plane_visuals.after(plane::attach_plane_material),
                ),
            );
        app.add_observer(plane::on_thumb_press)
            .add_observer(plane::on_thumb_click)
            .add_observer(plane::on_plane_press)
            .add_observer(plane::on_plane_click)
            .add_observer(plane::on_plane_drag_start)
            .add_observer(plane::on_plane_drag)
            .add_observer(plane::on_plane_drag_end)
            .add_observer(plane::on_plane_cancel);
    }
}
