//! Error types for overlay construction.

/// Errors raised while building an overlay from its configuration.
///
/// Runtime operations (grow, shrink, gestures) never fail; wrong-state calls are no-ops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OverlayError {
    #[error("Bubble diameter must be positive and finite, got {0}")]
    InvalidDiameter(f64),

    #[error("Expanded {axis} {expanded} is smaller than the bubble diameter {diameter}")]
    ExpandedSmallerThanDiameter {
        axis: &'static str,
        expanded: f64,
        diameter: f64,
    },

    #[error("Invalid motion setting: {0}")]
    InvalidMotion(String),

    #[error("Host window creation failed: {0}")]
    WindowCreation(String),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
