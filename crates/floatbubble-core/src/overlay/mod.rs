//! A floating bubble window: expand/collapse on click, drag and fling on gestures.

mod options;

pub use options::OverlayOption;

use std::time::Duration;

use tracing::{debug, trace};

use crate::bubble::{BubbleState, BubbleStateMachine, ClipMask, StateChange};
use crate::config::OverlayConfig;
use crate::error::{OverlayError, Result};
use crate::geometry::{BubbleGeometry, Point2D, WindowBounds};
use crate::host::{HostWindow, WindowHost};
use crate::input::{OverlayInput, PointerEvent};
use crate::motion::{DragController, ReleaseOutcome};
use crate::observe::{Observers, SubscriptionId};

/// Something observers of an overlay may care about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    /// The bubble entered a new lifecycle state
    StateChanged(StateChange),
    /// The window top-left moved to this point
    Moved(Point2D),
    /// A release turned into a fling of `ticks` steps
    FlingStarted { ticks: usize },
    /// The last fling step was applied
    FlingFinished,
}

/// A bubble state machine and a drag controller sharing one host window
#[derive(Debug)]
pub struct FloatingOverlay<W: HostWindow> {
    window: W,
    machine: BubbleStateMachine,
    drag: DragController,
    draggable: bool,
    observers: Observers<OverlayEvent>,
}

impl<W: HostWindow> FloatingOverlay<W> {
    /// Style `window` as a bubble and apply the configured options
    pub fn new(mut window: W, config: &OverlayConfig) -> Result<Self> {
        let geometry = config.validate()?;

        window.set_transparent_no_chrome();
        window.set_always_on_top(true);
        window.set_bounds(WindowBounds::square(
            config.bubble.origin,
            geometry.diameter(),
        ));

        let machine = BubbleStateMachine::new(geometry, config.transition.clone());
        machine.sync(&mut window);

        let mut overlay = Self {
            window,
            machine,
            drag: DragController::new(&config.motion),
            draggable: false,
            observers: Observers::new(),
        };
        for option in &config.options {
            option.apply(&mut overlay);
        }

        debug!(
            "Created overlay at ({:.0}, {:.0}) with diameter {}",
            config.bubble.origin.x,
            config.bubble.origin.y,
            geometry.diameter()
        );
        Ok(overlay)
    }

    /// Ask `host` for a window, then build the overlay on it
    pub fn create<H>(host: &mut H, config: &OverlayConfig) -> Result<Self>
    where
        H: WindowHost<Window = W>,
    {
        let geometry = config.validate()?;
        let bounds = WindowBounds::square(config.bubble.origin, geometry.diameter());
        let window = host
            .create_window(bounds)
            .map_err(|e| OverlayError::WindowCreation(e.to_string()))?;
        Self::new(window, config)
    }

    /// Route one host event. Returns whether it had any effect.
    pub fn handle_input(&mut self, input: OverlayInput) -> bool {
        match input {
            OverlayInput::Press(event) => self.on_press(&event),
            OverlayInput::Drag(event) => self.on_drag(&event),
            OverlayInput::Release(event) => self.on_release(&event),
            OverlayInput::Click(event) => self.on_click(&event),
            OverlayInput::FocusGained => false,
            OverlayInput::FocusLost => self.shrink(),
        }
    }

    /// Step the clip transition and any running fling by `dt`
    pub fn advance(&mut self, dt: Duration) {
        if let Some(change) = self.machine.advance(dt, &mut self.window) {
            self.observers.notify(&OverlayEvent::StateChanged(change));
        }

        let progress = self.drag.advance(dt, &mut self.window);
        if progress.steps > 0 {
            let origin = self.window.bounds().origin();
            self.observers.notify(&OverlayEvent::Moved(origin));
        }
        if progress.finished {
            self.observers.notify(&OverlayEvent::FlingFinished);
        }
    }

    /// Expand into the content panel. No-op unless shrunk.
    pub fn grow(&mut self) -> bool {
        let change = self.machine.grow(&mut self.window);
        self.publish(change)
    }

    /// Collapse into the badge. No-op unless expanded or expanding.
    pub fn shrink(&mut self) -> bool {
        let change = self.machine.shrink(&mut self.window);
        self.publish(change)
    }

    /// Move the window's top-left corner
    pub fn reposition(&mut self, origin: Point2D) {
        self.window.set_position(origin);
        self.observers.notify(&OverlayEvent::Moved(origin));
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&OverlayEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Enable or disable pointer gestures. Disabling stops a running fling.
    pub fn set_draggable(&mut self, draggable: bool) {
        if !draggable {
            self.drag.cancel_fling();
        }
        self.draggable = draggable;
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn state(&self) -> BubbleState {
        self.machine.state()
    }

    pub fn clip(&self) -> ClipMask {
        self.machine.clip()
    }

    pub fn geometry(&self) -> &BubbleGeometry {
        self.machine.geometry()
    }

    pub fn is_content_visible(&self) -> bool {
        self.machine.is_content_visible()
    }

    /// Screen position of the bubble's centre. It stays put across grow and shrink.
    pub fn center(&self) -> Point2D {
        self.window.bounds().center()
    }

    /// True while a transition or fling still needs frames
    pub fn is_animating(&self) -> bool {
        self.machine.is_animating() || self.drag.is_flinging()
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn into_window(self) -> W {
        self.window
    }

    fn hits_clip(&self, event: &PointerEvent) -> bool {
        self.machine
            .clip()
            .contains(&self.window.bounds(), event.local)
    }

    fn on_press(&mut self, event: &PointerEvent) -> bool {
        if !self.draggable || !self.hits_clip(event) {
            return false;
        }
        self.drag.on_press(event);
        true
    }

    fn on_drag(&mut self, event: &PointerEvent) -> bool {
        if !self.draggable {
            return false;
        }
        match self.drag.on_drag(event, &mut self.window) {
            Some(origin) => {
                self.observers.notify(&OverlayEvent::Moved(origin));
                true
            }
            None => false,
        }
    }

    fn on_release(&mut self, event: &PointerEvent) -> bool {
        if !self.draggable {
            return false;
        }
        match self.drag.on_release(event) {
            ReleaseOutcome::Ignored => false,
            ReleaseOutcome::Stopped => true,
            ReleaseOutcome::Flung { ticks } => {
                self.observers.notify(&OverlayEvent::FlingStarted { ticks });
                true
            }
        }
    }

    fn on_click(&mut self, event: &PointerEvent) -> bool {
        if self.drag.was_moved() {
            trace!("Swallowing click that ended a drag");
            return false;
        }
        if !self.hits_clip(event) {
            return false;
        }
        let change = self.machine.toggle(&mut self.window);
        self.publish(change)
    }

    fn publish(&mut self, change: Option<StateChange>) -> bool {
        match change {
            Some(change) => {
                self.observers.notify(&OverlayEvent::StateChanged(change));
                true
            }
            None => false,
        }
    }
}
