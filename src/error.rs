use thiserror::Error;

/// Contract violations detected before any shape is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("grid size must be at least 1, got {size}")]
    InvalidGridSize { size: usize },

    #[error("agent animation requires at least one move")]
    EmptyMoveSequence,
}
