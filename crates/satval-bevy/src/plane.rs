//! Saturation/value plane widget.
//!
//! Layout mirrors the stock picker: an outer container one thumb-size larger
//! than the field on each axis, the gradient field centered inside it, and
//! the thumb absolutely positioned within the field.
//!
//! Clicking the field (press and release without dragging) jumps the thumb
//! to the pointer. Dragging from the field or the thumb moves it relative to
//! where the drag began, using the cumulative drag distance Bevy reports.

use bevy::picking::events::{Cancel, Click, Drag, DragEnd, DragStart, Pointer, Press};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy::ui::{
    ComputedNode, ComputedUiRenderTargetInfo, InteractionDisabled, UiGlobalTransform, UiScale,
};
use bevy::ui_render::prelude::MaterialNode;
use satval_core::{
    ColorCoordinate, DragEvent, FieldGeometry, GestureState, PickerConfig, PickerFrame, PickerSink,
    PressEvent, PressInput, SatValPicker, SinkResult, Vec2 as CoreVec2,
};

use crate::events::{SatValChanged, SatValTrigger};
use crate::material::SatValPlaneMaterial;

// ── Components ──────────────────────────────────────────────────────────────

/// Marker for the outer container.
#[derive(Component, Default)]
pub struct SatValPlaneContainer;

/// Marker for the draggable thumb.
#[derive(Component, Default)]
pub struct SatValThumb;

/// Buffers controller output until the observer can write it as messages.
#[derive(Debug, Default)]
pub struct PendingEmissions(Vec<(SatValTrigger, ColorCoordinate)>);

impl PickerSink for PendingEmissions {
    fn on_press(&mut self, event: &PressEvent) -> SinkResult {
        self.0.push((SatValTrigger::Press, event.coordinate));
        Ok(())
    }

    fn on_drag(&mut self, event: &DragEvent) -> SinkResult {
        self.0.push((SatValTrigger::Drag(event.phase), event.coordinate));
        Ok(())
    }
}

/// State of one plane, stored on the gradient field entity.
///
/// Wraps a [`SatValPicker`] that owns the current coordinate and hue and
/// caches the indicator colors. The plane adds the pointer bookkeeping the
/// picking backend needs on top.
#[derive(Component, Debug)]
pub struct SatValPlane {
    picker: SatValPicker<PendingEmissions>,
    /// Set by a primary press on the field, cleared once a drag starts.
    tap_armed: bool,
    /// Last gesture seen during a drag, replayed if the drag is cancelled.
    last_gesture: GestureState,
}

impl SatValPlane {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            picker: SatValPicker::new(config.clone()).with_sinks(PendingEmissions::default()),
            tap_armed: false,
            last_gesture: GestureState::default(),
        }
    }

    pub fn picker(&self) -> &SatValPicker<PendingEmissions> {
        &self.picker
    }

    pub fn current(&self) -> ColorCoordinate {
        self.picker.current()
    }

    pub fn hue(&self) -> f32 {
        self.picker.hue()
    }

    pub fn geometry(&self) -> FieldGeometry {
        self.picker.controller().geometry()
    }

    pub fn is_dragging(&self) -> bool {
        self.picker.controller().is_dragging()
    }

    /// Set the coordinate from outside the widget.
    pub fn set_coordinate(&mut self, coordinate: ColorCoordinate) {
        self.picker.set_coordinate(coordinate);
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.picker.set_hue(hue);
    }

    /// Render description for the current state.
    pub fn frame(&self) -> PickerFrame {
        self.picker.frame()
    }

    /// Pointer went down on the field; a click may follow.
    pub fn arm_tap(&mut self) {
        self.tap_armed = true;
    }

    /// Tap at a field-local position.
    ///
    /// Ignored unless the field was pressed and no drag started since.
    pub fn tap(&mut self, input: PressInput) -> Vec<(SatValTrigger, ColorCoordinate)> {
        if !std::mem::take(&mut self.tap_armed) {
            return Vec::new();
        }
        if let Err(e) = self.picker.press(input) {
            tracing::warn!("sat/val press failed: {e}");
        }
        self.take_emissions()
    }

    pub fn drag_start(&mut self, gesture: GestureState) -> Vec<(SatValTrigger, ColorCoordinate)> {
        self.tap_armed = false;
        self.last_gesture = gesture;
        if let Err(e) = self.picker.drag_start(gesture) {
            tracing::warn!("sat/val drag start failed: {e}");
        }
        self.take_emissions()
    }

    pub fn drag_move(&mut self, gesture: GestureState) -> Vec<(SatValTrigger, ColorCoordinate)> {
        self.last_gesture = gesture;
        if let Err(e) = self.picker.drag_move(gesture) {
            tracing::debug!("sat/val drag move ignored: {e}");
        }
        self.take_emissions()
    }

    pub fn drag_end(&mut self, gesture: GestureState) -> Vec<(SatValTrigger, ColorCoordinate)> {
        if let Err(e) = self.picker.drag_end(gesture) {
            tracing::debug!("sat/val drag end ignored: {e}");
        }
        self.last_gesture = GestureState::default();
        self.take_emissions()
    }

    /// Abandon a drag in progress. No-op when idle.
    pub fn cancel(&mut self) -> Vec<(SatValTrigger, ColorCoordinate)> {
        self.tap_armed = false;
        if !self.is_dragging() {
            return Vec::new();
        }
        let gesture = std::mem::take(&mut self.last_gesture);
        if let Err(e) = self.picker.drag_terminate(gesture) {
            tracing::warn!("sat/val drag terminate failed: {e}");
        }
        self.take_emissions()
    }

    fn take_emissions(&mut self) -> Vec<(SatValTrigger, ColorCoordinate)> {
        std::mem::take(&mut self.picker.controller_mut().sinks_mut().0)
    }
}

// ── Bundle ──────────────────────────────────────────────────────────────────

/// Spawn a saturation/value plane.
///
/// Emits [`SatValChanged`] messages for every tap and drag transition.
pub fn sat_val_plane(config: &PickerConfig) -> impl Bundle {
    let config = config.clone().sanitized();
    let slider = config.slider_size;
    (
        Node {
            display: Display::Flex,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            width: Val::Px(config.width + slider),
            height: Val::Px(config.height + slider),
            ..Default::default()
        },
        SatValPlaneContainer,
        children![(
            Node {
                width: Val::Px(config.width),
                height: Val::Px(config.height),
                ..Default::default()
            },
            SatValPlane::new(&config),
            children![(
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(slider),
                    height: Val::Px(slider),
                    border: UiRect::all(Val::Px(slider / 10.0)),
                    border_radius: BorderRadius::MAX,
                    ..Default::default()
                },
                SatValThumb,
                BorderColor::all(Color::WHITE),
                BackgroundColor(Color::WHITE),
            )],
        )],
    )
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn to_core(v: Vec2) -> CoreVec2 {
    CoreVec2::new(v.x, v.y)
}

/// Pointer position as a fraction of the node (0..1 inside, unclamped).
fn pointer_to_fraction(
    pointer_pos: Vec2,
    node: &ComputedNode,
    node_target: &ComputedUiRenderTargetInfo,
    transform: &UiGlobalTransform,
    ui_scale: f32,
) -> Option<Vec2> {
    let local_pos = transform
        .try_inverse()?
        .transform_point2(pointer_pos * node_target.scale_factor() / ui_scale);
    Some(local_pos / node.size() + Vec2::splat(0.5))
}

/// The plane entity for a pointer target: the field itself or a thumb's parent.
fn plane_for(target: Entity, q_thumb_parent: &Query<&ChildOf, With<SatValThumb>>) -> Entity {
    q_thumb_parent.get(target).map_or(target, |parent| parent.0)
}

fn write_changes(
    changed: &mut MessageWriter<SatValChanged>,
    source: Entity,
    emitted: Vec<(SatValTrigger, ColorCoordinate)>,
) {
    for (trigger, coordinate) in emitted {
        changed.write(SatValChanged {
            source,
            trigger,
            coordinate,
        });
    }
}

// ── Observers (pointer interaction) ─────────────────────────────────────────

/// Presses and clicks on the thumb must not jump it to the pointer.
pub(crate) fn on_thumb_press(
    mut press: On<Pointer<Press>>,
    q_thumbs: Query<(), With<SatValThumb>>,
) {
    if q_thumbs.contains(press.entity) {
        press.propagate(false);
    }
}

pub(crate) fn on_thumb_click(
    mut click: On<Pointer<Click>>,
    q_thumbs: Query<(), With<SatValThumb>>,
) {
    if q_thumbs.contains(click.entity) {
        click.propagate(false);
    }
}

pub(crate) fn on_plane_press(
    mut press: On<Pointer<Press>>,
    mut q_planes: Query<(&mut SatValPlane, Has<InteractionDisabled>)>,
) {
    let Ok((mut plane, disabled)) = q_planes.get_mut(press.entity) else {
        return;
    };
    press.propagate(false);
    if disabled || press.button != PointerButton::Primary {
        return;
    }
    plane.arm_tap();
}

pub(crate) fn on_plane_click(
    mut click: On<Pointer<Click>>,
    mut q_planes: Query<(
        &mut SatValPlane,
        &ComputedNode,
        &ComputedUiRenderTargetInfo,
        &UiGlobalTransform,
        Has<InteractionDisabled>,
    )>,
    ui_scale: Res<UiScale>,
    mut changed: MessageWriter<SatValChanged>,
) {
    if click.button != PointerButton::Primary {
        return;
    }
    let Ok((mut plane, node, node_target, transform, disabled)) = q_planes.get_mut(click.entity)
    else {
        return;
    };
    click.propagate(false);
    if disabled {
        return;
    }
    let pointer = click.pointer_location.position;
    let Some(fraction) = pointer_to_fraction(pointer, node, node_target, transform, ui_scale.0)
    else {
        return;
    };
    let input = PressInput {
        location: to_core(fraction) * plane.geometry().size(),
        page_location: Some(to_core(pointer)),
    };
    let emitted = plane.tap(input);
    write_changes(&mut changed, click.entity, emitted);
}

pub(crate) fn on_plane_drag_start(
    mut drag_start: On<Pointer<DragStart>>,
    q_thumb_parent: Query<&ChildOf, With<SatValThumb>>,
    mut q_planes: Query<(&mut SatValPlane, Has<InteractionDisabled>)>,
    mut changed: MessageWriter<SatValChanged>,
) {
    let source = plane_for(drag_start.entity, &q_thumb_parent);
    let Ok((mut plane, disabled)) = q_planes.get_mut(source) else {
        return;
    };
    drag_start.propagate(false);
    if disabled || drag_start.button != PointerButton::Primary {
        return;
    }
    let gesture = GestureState {
        position: to_core(drag_start.pointer_location.position),
        ..Default::default()
    };
    let emitted = plane.drag_start(gesture);
    write_changes(&mut changed, source, emitted);
}

pub(crate) fn on_plane_drag(
    mut drag: On<Pointer<Drag>>,
    q_thumb_parent: Query<&ChildOf, With<SatValThumb>>,
    mut q_planes: Query<&mut SatValPlane>,
    ui_scale: Res<UiScale>,
    mut changed: MessageWriter<SatValChanged>,
) {
    let source = plane_for(drag.entity, &q_thumb_parent);
    let Ok(mut plane) = q_planes.get_mut(source) else {
        return;
    };
    drag.propagate(false);
    if !plane.is_dragging() {
        return;
    }
    let gesture = GestureState {
        displacement: to_core(drag.distance / ui_scale.0),
        position: to_core(drag.pointer_location.position),
        velocity: CoreVec2::ZERO,
    };
    let emitted = plane.drag_move(gesture);
    write_changes(&mut changed, source, emitted);
}

pub(crate) fn on_plane_drag_end(
    mut drag_end: On<Pointer<DragEnd>>,
    q_thumb_parent: Query<&ChildOf, With<SatValThumb>>,
    mut q_planes: Query<&mut SatValPlane>,
    ui_scale: Res<UiScale>,
    mut changed: MessageWriter<SatValChanged>,
) {
    let source = plane_for(drag_end.entity, &q_thumb_parent);
    let Ok(mut plane) = q_planes.get_mut(source) else {
        return;
    };
    drag_end.propagate(false);
    if !plane.is_dragging() {
        return;
    }
    let gesture = GestureState {
        displacement: to_core(drag_end.distance / ui_scale.0),
        position: to_core(drag_end.pointer_location.position),
        velocity: CoreVec2::ZERO,
    };
    let emitted = plane.drag_end(gesture);
    write_changes(&mut changed, source, emitted);
}

pub(crate) fn on_plane_cancel(
    cancel: On<Pointer<Cancel>>,
    q_thumb_parent: Query<&ChildOf, With<SatValThumb>>,
    mut q_planes: Query<&mut SatValPlane>,
    mut changed: MessageWriter<SatValChanged>,
) {
    let source = plane_for(cancel.entity, &q_thumb_parent);
    let Ok(mut plane) = q_planes.get_mut(source) else {
        return;
    };
    let emitted = plane.cancel();
    write_changes(&mut changed, source, emitted);
}

// ── Systems ─────────────────────────────────────────────────────────────────

/// Lazily insert `MaterialNode<SatValPlaneMaterial>` on plane nodes.
pub(crate) fn attach_plane_material(
    q_planes: Query<(Entity, &SatValPlane), Without<MaterialNode<SatValPlaneMaterial>>>,
    mut materials: ResMut<Assets<SatValPlaneMaterial>>,
    mut commands: Commands,
) {
    for (entity, plane) in q_planes.iter() {
        let geometry = plane.geometry();
        let handle = materials.add(SatValPlaneMaterial {
            hue: plane.hue(),
            border_radius: plane.picker.config().border_radius,
            width: geometry.width,
            height: geometry.height,
        });
        commands.entity(entity).insert(MaterialNode(handle));
    }
}

/// Keeps the gradient hue and the thumb's position and fill in sync with
/// the plane's current coordinate.
pub(crate) fn sync_plane_visuals(
    q_planes: Query<
        (&SatValPlane, &Children, Option<&MaterialNode<SatValPlaneMaterial>>),
        Changed<SatValPlane>,
    >,
    mut q_thumbs: Query<(&mut Node, &mut BackgroundColor), With<SatValThumb>>,
    mut materials: ResMut<Assets<SatValPlaneMaterial>>,
) {
    for (plane, children, mat_node) in q_planes.iter() {
        if let Some(mat_node) = mat_node
            && materials
                .get(mat_node.id())
                .is_some_and(|mat| mat.hue != plane.hue())
            && let Some(mat) = materials.get_mut(mat_node.id())
        {
            mat.hue = plane.hue();
        }

        let frame = plane.frame();
        let indicator = &frame.indicator;
        let fill = match Srgba::hex(&indicator.fill) {
            Ok(color) => Color::Srgba(color),
            Err(e) => {
                tracing::warn!("indicator fill {:?} is not a hex color: {e}", indicator.fill);
                continue;
            }
        };
        let center = indicator.center_in_field();
        let half = indicator.size / 2.0;

        let children: &[Entity] = children;
        for &child in children {
            let Ok((mut node, mut background)) = q_thumbs.get_mut(child) else {
                continue;
            };
            node.left = Val::Px(center.x - half);
            node.top = Val::Px(center.y - half);
            background.0 = fill;
        }
    }
}
