//! Grow/shrink state machine

use std::time::Duration;

use tracing::{debug, trace};

use super::{BubbleState, ClipMask};
use crate::animation::Tween;
use crate::config::TransitionConfig;
use crate::geometry::BubbleGeometry;
use crate::host::HostWindow;

/// A state transition that has just happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: BubbleState,
    pub to: BubbleState,
}

/// Clip interpolation between two masks, all fields driven by one progress value
#[derive(Debug, Clone)]
struct ClipTransition {
    from: ClipMask,
    to: ClipMask,
    progress: Tween,
}

impl ClipTransition {
    fn new(from: ClipMask, to: ClipMask, config: &TransitionConfig) -> Self {
        Self {
            from,
            to,
            progress: Tween::new(0.0, 1.0, config.duration()).with_easing(config.easing),
        }
    }

    fn step(&mut self, dt: Duration) -> ClipMask {
        self.progress.update(dt);
        if self.progress.is_complete() {
            self.to
        } else {
            self.from.lerp(&self.to, self.progress.value())
        }
    }
}

/// Owns the bubble's geometry, clip mask and content visibility across transitions.
///
/// Every operation takes the host window explicitly; nothing is written outside of the
/// calls below, so hosts can keep the window behind plain `&mut` access.
#[derive(Debug, Clone)]
pub struct BubbleStateMachine {
    geometry: BubbleGeometry,
    transition_config: TransitionConfig,
    state: BubbleState,
    clip: ClipMask,
    transition: Option<ClipTransition>,
}

impl BubbleStateMachine {
    pub fn new(geometry: BubbleGeometry, transition_config: TransitionConfig) -> Self {
        Self {
            clip: ClipMask::circle(geometry.diameter()),
            geometry,
            transition_config,
            state: BubbleState::Shrunk,
            transition: None,
        }
    }

    pub fn state(&self) -> BubbleState {
        self.state
    }

    pub fn clip(&self) -> ClipMask {
        self.clip
    }

    pub fn geometry(&self) -> &BubbleGeometry {
        &self.geometry
    }

    pub fn is_content_visible(&self) -> bool {
        self.state.is_content_visible()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Push the current clip and content visibility to a freshly styled window
    pub fn sync<W: HostWindow + ?Sized>(&self, window: &mut W) {
        window.set_clip(self.clip);
        window.set_content_visible(self.is_content_visible());
    }

    /// Expand the window around the bubble's centre and start morphing into the panel.
    ///
    /// Only valid from `Shrunk`; anything else is a no-op returning `None`.
    pub fn grow<W: HostWindow + ?Sized>(&mut self, window: &mut W) -> Option<StateChange> {
        if self.state != BubbleState::Shrunk {
            trace!("Ignoring grow while {:?}", self.state);
            return None;
        }

        window.set_bounds(self.geometry.expanded_bounds(window.bounds()));
        let target = ClipMask::rectangle(
            self.geometry.expanded_width(),
            self.geometry.expanded_height(),
        );
        self.transition = Some(ClipTransition::new(
            self.clip,
            target,
            &self.transition_config,
        ));
        window.set_clip(self.clip);

        Some(self.set_state(BubbleState::Expanding, window))
    }

    /// Hide the content and start morphing back into the circle.
    ///
    /// Valid from `Expanded` and `Expanding`; an in-flight grow is replaced and the
    /// shrink starts from wherever the clip currently is.
    pub fn shrink<W: HostWindow + ?Sized>(&mut self, window: &mut W) -> Option<StateChange> {
        if !matches!(self.state, BubbleState::Expanded | BubbleState::Expanding) {
            trace!("Ignoring shrink while {:?}", self.state);
            return None;
        }

        let target = ClipMask::circle(self.geometry.diameter());
        self.transition = Some(ClipTransition::new(
            self.clip,
            target,
            &self.transition_config,
        ));

        Some(self.set_state(BubbleState::Shrinking, window))
    }

    /// Click policy: grow when shrunk, shrink when expanded, ignore while transitioning
    pub fn toggle<W: HostWindow + ?Sized>(&mut self, window: &mut W) -> Option<StateChange> {
        match self.state {
            BubbleState::Shrunk => self.grow(window),
            BubbleState::Expanded => self.shrink(window),
            BubbleState::Expanding | BubbleState::Shrinking => {
                trace!("Ignoring click during {:?}", self.state);
                None
            }
        }
    }

    /// Step the active transition by `dt`, reaching the terminal state when it completes
    pub fn advance<W: HostWindow + ?Sized>(
        &mut self,
        dt: Duration,
        window: &mut W,
    ) -> Option<StateChange> {
        let transition = self.transition.as_mut()?;
        self.clip = transition.step(dt);
        window.set_clip(self.clip);

        if !transition.progress.is_complete() {
            return None;
        }
        self.transition = None;

        match self.state {
            BubbleState::Expanding => Some(self.set_state(BubbleState::Expanded, window)),
            BubbleState::Shrinking => {
                window.set_bounds(self.geometry.shrunk_bounds(window.bounds()));
                Some(self.set_state(BubbleState::Shrunk, window))
            }
            BubbleState::Shrunk | BubbleState::Expanded => None,
        }
    }

    fn set_state<W: HostWindow + ?Sized>(
        &mut self,
        next: BubbleState,
        window: &mut W,
    ) -> StateChange {
        let change = StateChange {
            from: self.state,
            to: next,
        };
        self.state = next;
        window.set_content_visible(next.is_content_visible());
        debug!("Bubble state {:?} -> {:?}", change.from, change.to);
        change
    }
}
