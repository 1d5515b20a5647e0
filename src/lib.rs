//! Gridworld SVG — renders a classified square grid and an animated agent
//! route as a fixed-size SVG image.
//!
//! Pipeline: `engine::source::GridworldSource` (intent) → `engine::Engine`
//! (shapes and style records) → `renderer::Renderer` (SVG text).

pub mod config;
pub mod engine;
pub mod error;
pub mod preview;
pub mod renderer;
pub mod types;

pub use engine::board::Classifier;
pub use engine::coords::Move;
pub use engine::{Agent, Engine};
pub use error::SceneError;
pub use renderer::Renderer;
pub use types::SvgDocument;
