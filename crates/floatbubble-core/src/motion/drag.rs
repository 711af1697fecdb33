//! Press/drag/release handling for a draggable window

use std::time::Duration;

use tracing::{debug, trace};

use super::{FlingAnimation, FlingEstimator, MotionSampler};
use crate::config::MotionConfig;
use crate::geometry::{Point2D, Vector2D};
use crate::host::HostWindow;
use crate::input::PointerEvent;

/// What a release turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No press was being tracked
    Ignored,
    /// The window stays where it was dropped
    Stopped,
    /// A fling of `ticks` steps was started
    Flung { ticks: usize },
}

/// Result of one [`DragController::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlingProgress {
    /// Steps applied during this call
    pub steps: usize,
    /// The fling ran out during this call
    pub finished: bool,
}

/// Moves a window with the pointer and glides it on release
#[derive(Debug, Clone)]
pub struct DragController {
    sampler: MotionSampler,
    estimator: FlingEstimator,
    fling_tick: Duration,
    fling: Option<FlingAnimation>,
    pressed: bool,
}

impl DragController {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            sampler: MotionSampler::new(config),
            estimator: FlingEstimator::new(config),
            fling_tick: config.fling_tick(),
            fling: None,
            pressed: false,
        }
    }

    /// Begin tracking a gesture. Any running fling stops where it is.
    pub fn on_press(&mut self, event: &PointerEvent) {
        self.cancel_fling();
        self.sampler.on_press(event.screen, event.timestamp);
        self.pressed = true;
        trace!("Drag press at ({:.1}, {:.1})", event.screen.x, event.screen.y);
    }

    /// Centre the window on the pointer, returning the new origin.
    ///
    /// Drags that arrive without a tracked press are ignored.
    pub fn on_drag<W: HostWindow + ?Sized>(
        &mut self,
        event: &PointerEvent,
        window: &mut W,
    ) -> Option<Point2D> {
        if !self.pressed {
            trace!("Ignoring drag without press");
            return None;
        }

        self.sampler.on_drag(event.screen, event.timestamp);
        let bounds = window.bounds().centered_on(event.screen);
        window.set_position(bounds.origin());
        Some(bounds.origin())
    }

    /// End the gesture and decide between a plain stop and a fling
    pub fn on_release(&mut self, event: &PointerEvent) -> ReleaseOutcome {
        if !std::mem::take(&mut self.pressed) {
            return ReleaseOutcome::Ignored;
        }

        let Some(samples) = self.sampler.finish() else {
            return ReleaseOutcome::Ignored;
        };
        trace!(
            "Drag release at ({:.1}, {:.1})",
            event.screen.x,
            event.screen.y
        );

        match self.estimator.estimate(samples) {
            Some(plan) => {
                let ticks = plan.len();
                self.fling = Some(FlingAnimation::new(plan, self.fling_tick));
                debug!("Fling started with {} ticks", ticks);
                ReleaseOutcome::Flung { ticks }
            }
            None => ReleaseOutcome::Stopped,
        }
    }

    /// Run any pending fling ticks, translating the window by each step
    pub fn advance<W: HostWindow + ?Sized>(&mut self, dt: Duration, window: &mut W) -> FlingProgress {
        let Some(fling) = self.fling.as_mut() else {
            return FlingProgress::default();
        };

        let mut total = Vector2D::ZERO;
        let steps = fling.advance(dt, |step| {
            let bounds = window.bounds().translate(step);
            window.set_position(bounds.origin());
            total = total + step;
        });
        if steps > 0 {
            trace!("Fling moved window by ({:.2}, {:.2})", total.x, total.y);
        }

        let finished = fling.is_finished();
        if finished {
            self.fling = None;
            debug!("Fling finished");
        }
        FlingProgress { steps, finished }
    }

    /// True exactly once after any drag since the last query
    pub fn was_moved(&mut self) -> bool {
        self.sampler.was_moved()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.is_some()
    }

    /// Stop an in-flight fling without applying its remaining steps
    pub fn cancel_fling(&mut self) {
        if self.fling.take().is_some() {
            debug!("Fling cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WindowBounds;
    use crate::host::MemoryWindow;
    use std::time::Instant;

    fn pointer(x: f64, y: f64, at: Instant) -> PointerEvent {
        PointerEvent::new(Point2D::new(x, y), Point2D::new(25.0, 25.0), at)
    }

    fn setup() -> (DragController, MemoryWindow) {
        let controller = DragController::new(&MotionConfig::default());
        let window = MemoryWindow::new(WindowBounds::square(Point2D::new(75.0, 75.0), 50.0));
        (controller, window)
    }

    #[test]
    fn test_drag_centres_window_on_pointer() {
        let (mut drag, mut window) = setup();
        let t0 = Instant::now();

        drag.on_press(&pointer(100.0, 100.0, t0));
        let origin = drag
            .on_drag(&pointer(200.0, 150.0, t0 + Duration::from_millis(10)), &mut window)
            .unwrap();

        assert_eq!(origin, Point2D::new(175.0, 125.0));
        assert_eq!(window.bounds, WindowBounds::new(175.0, 125.0, 50.0, 50.0));
        assert!(drag.was_moved());
        assert!(!drag.was_moved());
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let (mut drag, mut window) = setup();
        assert!(drag.on_drag(&pointer(10.0, 10.0, Instant::now()), &mut window).is_none());
        assert!(window.bounds_history.is_empty());
        assert_eq!(
            drag.on_release(&pointer(10.0, 10.0, Instant::now())),
            ReleaseOutcome::Ignored
        );
    }

    #[test]
    fn test_slow_release_stops() {
        let (mut drag, mut window) = setup();
        let t0 = Instant::now();
        drag.on_press(&pointer(100.0, 100.0, t0));
        drag.on_drag(&pointer(105.0, 100.0, t0 + Duration::from_millis(60)), &mut window);

        assert_eq!(
            drag.on_release(&pointer(105.0, 100.0, t0 + Duration::from_millis(70))),
            ReleaseOutcome::Stopped
        );
        assert!(!drag.is_flinging());
        assert_eq!(drag.advance(Duration::from_secs(1), &mut window), FlingProgress::default());
    }

    #[test]
    fn test_fast_release_flings() {
        let (mut drag, mut window) = setup();
        let t0 = Instant::now();
        drag.on_press(&pointer(100.0, 100.0, t0));
        drag.on_drag(&pointer(130.0, 100.0, t0 + Duration::from_millis(60)), &mut window);
        let dropped = window.bounds;

        let outcome = drag.on_release(&pointer(130.0, 100.0, t0 + Duration::from_millis(70)));
        assert_eq!(outcome, ReleaseOutcome::Flung { ticks: 14 });
        assert!(drag.is_flinging());

        let first = drag.advance(Duration::from_millis(33), &mut window);
        assert_eq!(first, FlingProgress { steps: 1, finished: false });
        let expected = 30.0 * 14f64.sqrt() / 15.0;
        assert!((window.bounds.x - dropped.x - expected).abs() < 1e-9);
        assert_eq!(window.bounds.y, dropped.y);

        let rest = drag.advance(Duration::from_secs(1), &mut window);
        assert_eq!(rest, FlingProgress { steps: 13, finished: true });
        assert!(!drag.is_flinging());

        let total: f64 = (1..15).map(|i| 30.0 * f64::from(i).sqrt() / 15.0).sum();
        assert!((window.bounds.x - dropped.x - total).abs() < 1e-9);
    }

    #[test]
    fn test_creep_before_release_stops() {
        let (mut drag, mut window) = setup();
        let t0 = Instant::now();
        drag.on_press(&pointer(100.0, 100.0, t0));
        drag.on_drag(&pointer(130.0, 100.0, t0 + Duration::from_millis(60)), &mut window);
        drag.on_drag(&pointer(135.0, 100.0, t0 + Duration::from_millis(120)), &mut window);

        assert_eq!(
            drag.on_release(&pointer(135.0, 100.0, t0 + Duration::from_millis(130))),
            ReleaseOutcome::Stopped
        );
        assert!(!drag.is_flinging());
    }

    #[test]
    fn test_press_cancels_fling() {
        let (mut drag, mut window) = setup();
        let t0 = Instant::now();
        drag.on_press(&pointer(100.0, 100.0, t0));
        drag.on_drag(&pointer(140.0, 100.0, t0 + Duration::from_millis(60)), &mut window);
        drag.on_release(&pointer(140.0, 100.0, t0 + Duration::from_millis(70)));
        assert!(drag.is_flinging());

        drag.on_press(&pointer(140.0, 100.0, t0 + Duration::from_millis(80)));
        assert!(!drag.is_flinging());
        let before = window.bounds;
        drag.advance(Duration::from_secs(1), &mut window);
        assert_eq!(window.bounds, before);
    }
}
