//! Async terminal loop driving one overlay

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use floatbubble_core::{
    FloatingOverlay, HostWindow, OverlayConfig, OverlayEvent, OverlayInput,
};
use futures::StreamExt;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::host::{TerminalHost, TerminalWindow};
use crate::input::InputTranslator;
use crate::render;

/// Whether the loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Raw mode, alternate screen, mouse capture and focus reporting for the guard's lifetime
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// A live bubble in the terminal
pub struct Simulator {
    overlay: FloatingOverlay<TerminalWindow>,
    translator: InputTranslator,
    frame_interval: Duration,
    content: Vec<String>,
    last_event: Rc<RefCell<String>>,
}

impl Simulator {
    pub fn new(config: &OverlayConfig) -> Result<Self> {
        let mut overlay = FloatingOverlay::create(&mut TerminalHost, config)
            .context("Failed to create bubble overlay")?;

        let last_event = Rc::new(RefCell::new(String::from("ready")));
        let sink = Rc::clone(&last_event);
        overlay.subscribe(move |event| {
            let text = describe(event);
            debug!("Overlay event: {}", text);
            *sink.borrow_mut() = text;
        });

        Ok(Self {
            overlay,
            translator: InputTranslator::new(),
            frame_interval: Duration::from_millis(16),
            content: default_content(),
            last_event,
        })
    }

    /// Set the frame clock period
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Replace the text shown inside the expanded panel
    pub fn with_content(mut self, content: Vec<String>) -> Self {
        self.content = content;
        self
    }

    pub fn overlay(&self) -> &FloatingOverlay<TerminalWindow> {
        &self.overlay
    }

    /// Run until the user quits
    pub async fn run(mut self) -> Result<()> {
        let _guard = TerminalGuard::enter().context("Failed to set up terminal")?;
        let mut stdout = io::stdout();
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();

        info!("Simulator started");
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = Instant::now();
                    self.overlay.advance(now.saturating_duration_since(last_frame));
                    last_frame = now;
                    self.render(&mut stdout)?;
                }
                maybe = events.next() => {
                    match maybe {
                        Some(Ok(event)) => {
                            if self.handle_event(&event, Instant::now()) == Control::Quit {
                                break;
                            }
                        }
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => break,
                    }
                }
            }
        }
        info!("Simulator stopped");
        Ok(())
    }

    /// Apply one terminal event to the overlay
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Control {
        if let Event::Key(key) = event {
            return self.handle_key(key);
        }

        let inputs = self
            .translator
            .translate(event, self.overlay.window(), now);
        for input in inputs {
            if let Some(pointer) = input.pointer() {
                debug!(
                    "Pointer at ({:.0}, {:.0}) -> {:?}",
                    pointer.screen.x,
                    pointer.screen.y,
                    self.overlay.state()
                );
            }
            self.overlay.handle_input(input);
        }
        Control::Continue
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            KeyCode::Char('f') => {
                self.overlay.handle_input(OverlayInput::FocusLost);
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    fn render<Out: Write>(&self, out: &mut Out) -> Result<()> {
        let (columns, rows) = terminal::size().context("Failed to query terminal size")?;
        let frame = render::rasterize(
            self.overlay.window(),
            &self.content,
            columns,
            rows.saturating_sub(1),
        );
        render::draw(out, &frame, &self.status_line()).context("Failed to draw frame")
    }

    fn status_line(&self) -> String {
        let origin = self.overlay.window().bounds().origin();
        let center = self.overlay.center();
        format!(
            " {:?} at ({:.0}, {:.0}), centre ({:.0}, {:.0}) | {} | drag: move, click: toggle, f: drop focus, q: quit",
            self.overlay.state(),
            origin.x,
            origin.y,
            center.x,
            center.y,
            self.last_event.borrow()
        )
    }
}

fn describe(event: &OverlayEvent) -> String {
    match event {
        OverlayEvent::StateChanged(change) => format!("{:?} -> {:?}", change.from, change.to),
        OverlayEvent::Moved(origin) => format!("moved to ({:.0}, {:.0})", origin.x, origin.y),
        OverlayEvent::FlingStarted { ticks } => format!("fling, {} ticks", ticks),
        OverlayEvent::FlingFinished => "fling done".to_string(),
    }
}

fn default_content() -> Vec<String> {
    vec![
        "floatbubble".to_string(),
        String::new(),
        "Click to collapse.".to_string(),
        "Press f to simulate focus loss.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    use floatbubble_core::BubbleState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        let mut sim = Simulator::new(&OverlayConfig::default()).unwrap();
        let now = Instant::now();
        assert_eq!(sim.handle_event(&key(KeyCode::Char('x')), now), Control::Continue);
        assert_eq!(sim.handle_event(&key(KeyCode::Char('q')), now), Control::Quit);
        assert_eq!(sim.handle_event(&key(KeyCode::Esc), now), Control::Quit);
    }

    #[test]
    fn test_mouse_click_grows_and_focus_key_shrinks() {
        let mut sim = Simulator::new(&OverlayConfig::default()).unwrap();
        let now = Instant::now();

        // Default bubble covers (96, 96)..(160, 160); cell (15, 7) is inside the circle
        sim.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 15, 7), now);
        sim.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 15, 7), now);
        assert_eq!(sim.overlay().state(), BubbleState::Expanding);
        assert_eq!(*sim.last_event.borrow(), "Shrunk -> Expanding");

        sim.handle_event(&key(KeyCode::Char('f')), now);
        assert_eq!(sim.overlay().state(), BubbleState::Shrinking);
    }

    #[test]
    fn test_status_line_mentions_state() {
        let sim = Simulator::new(&OverlayConfig::default()).unwrap();
        let status = sim.status_line();
        assert!(status.contains("Shrunk at (96, 96), centre (128, 128)"));
        assert!(status.contains("ready"));
    }
}
