//! UiMaterial drawing the saturation/value gradient for one hue.

use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;
use bevy::ui_render::prelude::UiMaterial;

#[derive(AsBindGroup, Asset, TypePath, Debug, Clone)]
pub struct SatValPlaneMaterial {
    /// Hue in degrees, `[0, 360)`.
    #[uniform(0)]
    pub hue: f32,
    /// Corner radius in pixels.
    #[uniform(0)]
    pub border_radius: f32,
    /// Field size in pixels, used for the corner mask.
    #[uniform(0)]
    pub width: f32,
    #[uniform(0)]
    pub height: f32,
}

impl Default for SatValPlaneMaterial {
    fn default() -> Self {
        Self {
            hue: 0.0,
            border_radius: 0.0,
            width: 200.0,
            height: 256.0,
        }
    }
}

impl UiMaterial for SatValPlaneMaterial {
    fn fragment_shader() -> ShaderRef {
        "embedded://satval_bevy/shaders/sat_val_plane.wgsl".into()
    }
}
