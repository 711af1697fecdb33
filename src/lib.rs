//! floatbubble: a floating, self-collapsing overlay bubble
//!
//! Re-exports the host-agnostic core and the configuration loader:
//! - [`FloatingOverlay`] and everything it is built from
//! - [`settings`] for TOML config files, discovery and env overrides

pub use floatbubble_config as settings;
pub use floatbubble_core::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_overlay_from_config_file() {
        let config = settings::AppConfig::from_toml_str(
            r#"
[overlay.bubble]
diameter = 40.0
expanded_width = 200.0
expanded_height = 120.0
origin = { x = 10.0, y = 20.0 }

[overlay.transition]
duration_ms = 200
"#,
        )
        .unwrap();

        let mut host = MemoryHost::new();
        let mut overlay = FloatingOverlay::create(&mut host, &config.overlay).unwrap();
        assert_eq!(overlay.window().bounds, WindowBounds::new(10.0, 20.0, 40.0, 40.0));

        let centre = PointerEvent::new(
            Point2D::new(30.0, 40.0),
            Point2D::new(20.0, 20.0),
            Instant::now(),
        );
        assert!(overlay.handle_input(OverlayInput::Click(centre)));
        overlay.advance(Duration::from_millis(100));
        assert_eq!(overlay.state(), BubbleState::Expanding);
        overlay.advance(Duration::from_millis(100));
        assert_eq!(overlay.state(), BubbleState::Expanded);
        assert_eq!(overlay.window().bounds, WindowBounds::new(-70.0, -20.0, 200.0, 120.0));
    }
}
