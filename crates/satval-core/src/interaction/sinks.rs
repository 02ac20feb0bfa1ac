//! Event sinks.
//!
//! A sink is a capability set with one handler per event type. Every handler
//! is optional: an unsubscribed event is dropped without error. Handlers
//! return [`SinkResult`] and the session controller hands any failure back
//! to whoever dispatched the gesture.

use std::fmt;

use super::gesture::{DragEvent, DragPhase, PressEvent};

/// Error raised by a host-supplied handler.
pub type SinkError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type SinkResult = Result<(), SinkError>;

/// Receiver for picker events. All methods default to a no-op.
pub trait PickerSink {
    fn on_press(&mut self, _event: &PressEvent) -> SinkResult {
        Ok(())
    }

    fn on_drag_start(&mut self, _event: &DragEvent) -> SinkResult {
        Ok(())
    }

    fn on_drag_move(&mut self, _event: &DragEvent) -> SinkResult {
        Ok(())
    }

    fn on_drag_end(&mut self, _event: &DragEvent) -> SinkResult {
        Ok(())
    }

    fn on_drag_terminate(&mut self, _event: &DragEvent) -> SinkResult {
        Ok(())
    }

    /// Route a drag event to the handler for its phase.
    fn on_drag(&mut self, event: &DragEvent) -> SinkResult {
        match event.phase {
            DragPhase::Start => self.on_drag_start(event),
            DragPhase::Move => self.on_drag_move(event),
            DragPhase::End => self.on_drag_end(event),
            DragPhase::Terminate => self.on_drag_terminate(event),
        }
    }
}

/// Subscribes to nothing.
impl PickerSink for () {}

impl<T: PickerSink + ?Sized> PickerSink for &mut T {
    fn on_press(&mut self, event: &PressEvent) -> SinkResult {
        (**self).on_press(event)
    }

    fn on_drag_start(&mut self, event: &DragEvent) -> SinkResult {
        (**self).on_drag_start(event)
    }

    fn on_drag_move(&mut self, event: &DragEvent) -> SinkResult {
        (**self).on_drag_move(event)
    }

    fn on_drag_end(&mut self, event: &DragEvent) -> SinkResult {
        (**self).on_drag_end(event)
    }

    fn on_drag_terminate(&mut self, event: &DragEvent) -> SinkResult {
        (**self).on_drag_terminate(event)
    }

    fn on_drag(&mut self, event: &DragEvent) -> SinkResult {
        (**self).on_drag(event)
    }
}

type PressHandler = Box<dyn FnMut(&PressEvent) -> SinkResult>;
type DragHandler = Box<dyn FnMut(&DragEvent) -> SinkResult>;

/// Closure-backed sink with independently optional handler slots.
///
/// ```
/// use satval_core::PickerSinks;
///
/// let sinks = PickerSinks::new().with_drag_end(|event| {
///     println!("committed {:?}", event.coordinate);
///     Ok(())
/// });
/// assert!(sinks.is_subscribed_to_drag(satval_core::DragPhase::End));
/// assert!(!sinks.is_subscribed_to_press());
/// ```
#[derive(Default)]
pub struct PickerSinks {
    press: Option<PressHandler>,
    drag_start: Option<DragHandler>,
    drag_move: Option<DragHandler>,
    drag_end: Option<DragHandler>,
    drag_terminate: Option<DragHandler>,
}

impl PickerSinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_press(mut self, handler: impl FnMut(&PressEvent) -> SinkResult + 'static) -> Self {
        self.press = Some(Box::new(handler));
        self
    }

    pub fn with_drag_start(
        mut self,
        handler: impl FnMut(&DragEvent) -> SinkResult + 'static,
    ) -> Self {
        self.drag_start = Some(Box::new(handler));
        self
    }

    pub fn with_drag_move(
        mut self,
        handler: impl FnMut(&DragEvent) -> SinkResult + 'static,
    ) -> Self {
        self.drag_move = Some(Box::new(handler));
        self
    }

    pub fn with_drag_end(mut self, handler: impl FnMut(&DragEvent) -> SinkResult + 'static) -> Self {
        self.drag_end = Some(Box::new(handler));
        self
    }

    pub fn with_drag_terminate(
        mut self,
        handler: impl FnMut(&DragEvent) -> SinkResult + 'static,
    ) -> Self {
        self.drag_terminate = Some(Box::new(handler));
        self
    }

    pub fn is_subscribed_to_press(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_subscribed_to_drag(&self, phase: DragPhase) -> bool {
        match phase {
            DragPhase::Start => self.drag_start.is_some(),
            DragPhase::Move => self.drag_move.is_some(),
            DragPhase::End => self.drag_end.is_some(),
            DragPhase::Terminate => self.drag_terminate.is_some(),
        }
    }
}

fn call<E>(slot: &mut Option<Box<dyn FnMut(&E) -> SinkResult>>, event: &E) -> SinkResult {
    match slot.as_mut() {
        Some(handler) => handler(event),
        None => Ok(()),
    }
}

impl PickerSink for PickerSinks {
    fn on_press(&mut self, event: &PressEvent) -> SinkResult {
        call(&mut self.press, event)
    }

    fn on_drag_start(&mut self, event: &DragEvent) -> SinkResult {
        call(&mut self.drag_start, event)
    }

    fn on_drag_move(&mut self, event: &DragEvent) -> SinkResult {
        call(&mut self.drag_move, event)
    }

    fn on_drag_end(&mut self, event: &DragEvent) -> SinkResult {
        call(&mut self.drag_end, event)
    }

    fn on_drag_terminate(&mut self, event: &DragEvent) -> SinkResult {
        call(&mut self.drag_terminate, event)
    }
}

impl fmt::Debug for PickerSinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerSinks")
            .field("press", &self.press.is_some())
            .field("drag_start", &self.drag_start.is_some())
            .field("drag_move", &self.drag_move.is_some())
            .field("drag_end", &self.drag_end.is_some())
            .field("drag_terminate", &self.drag_terminate.is_some())
            .finish()
    }
}
