//! Terminal mouse and focus events to overlay input

use std::time::Instant;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use floatbubble_core::{HostWindow, OverlayInput, Point2D, PointerEvent};

use crate::host::cell_center;

/// Translates crossterm events for one window.
///
/// Every left-button release is followed by a synthesized click; the overlay swallows the
/// click when the gesture was a drag.
#[derive(Debug, Default)]
pub struct InputTranslator {
    pressed: bool,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate<W: HostWindow>(
        &mut self,
        event: &Event,
        window: &W,
        now: Instant,
    ) -> Vec<OverlayInput> {
        match event {
            Event::Mouse(mouse) => self.translate_mouse(mouse, window, now),
            Event::FocusGained => vec![OverlayInput::FocusGained],
            Event::FocusLost => vec![OverlayInput::FocusLost],
            _ => Vec::new(),
        }
    }

    fn translate_mouse<W: HostWindow>(
        &mut self,
        mouse: &MouseEvent,
        window: &W,
        now: Instant,
    ) -> Vec<OverlayInput> {
        let screen = cell_center(mouse.column, mouse.row);
        let origin = window.bounds().origin();
        let local = Point2D::new(screen.x - origin.x, screen.y - origin.y);
        let pointer = PointerEvent::new(screen, local, now);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = true;
                vec![OverlayInput::Press(pointer)]
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => {
                vec![OverlayInput::Drag(pointer)]
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.pressed = false;
                vec![OverlayInput::Release(pointer), OverlayInput::Click(pointer)]
            }
            _ => Vec::new(),
        }
    }
}
