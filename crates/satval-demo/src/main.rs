//! Satval Demo — one saturation/value plane in a Bevy window.
//!
//! Every coordinate the plane emits is logged.

mod config;

use bevy::prelude::*;
use satval_bevy::{SatValChanged, SatValPlugin, SatValTrigger, sat_val_plane};
use satval_core::DragPhase;

use config::DemoConfig;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(SatValPlugin)
        .insert_resource(DemoConfig::from_env())
        .add_systems(Startup, spawn_picker)
        .add_systems(Update, log_changes)
        .run();
}

fn spawn_picker(mut commands: Commands, config: Res<DemoConfig>) {
    commands.spawn(Camera2d);
    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..Default::default()
        },
        BackgroundColor(Color::srgb(0.12, 0.12, 0.12)),
        children![sat_val_plane(&config.picker)],
    ));
    tracing::info!(?config.picker, "spawned saturation/value plane");
}

fn log_changes(mut changed: MessageReader<SatValChanged>) {
    for ev in changed.read() {
        let c = ev.coordinate;
        match ev.trigger {
            SatValTrigger::Press => {
                tracing::info!("press: s={:.3} v={:.3}", c.saturation, c.value);
            }
            SatValTrigger::Drag(DragPhase::End) => {
                tracing::info!("committed: s={:.3} v={:.3}", c.saturation, c.value);
            }
            SatValTrigger::Drag(DragPhase::Terminate) => {
                tracing::info!("drag abandoned at s={:.3} v={:.3}", c.saturation, c.value);
            }
            SatValTrigger::Drag(phase) => {
                tracing::debug!("{phase}: s={:.3} v={:.3}", c.saturation, c.value);
            }
        }
    }
}
