//! Engine — the scene composer.
//!
//! Turns a board size, an optional `Classifier`, an optional agent route and
//! extra CSS into an `SvgDocument` (shapes plus typed style records).
//!
//! The engine never produces SVG text and never touches the filesystem.

pub mod board;
pub mod coords;
pub mod path;
pub mod source;
pub mod style;

use tracing::debug;

use crate::error::SceneError;
use crate::types::{Shape, SvgDocument};
use board::{Board, Classifier};
use coords::Move;
use path::AgentPath;
use source::GridworldSource;

/// Emit the shapes an element contributes to the document.
pub trait Resolve {
    fn resolve(&self, shapes: &mut Vec<Shape>);
}

/// An agent's start cell (classification space) and its moves.
#[derive(Debug, Clone, Copy)]
pub struct Agent<'a> {
    pub start: (i32, i32),
    pub moves: &'a [Move],
}

pub struct Engine;

/// Upper bound on shapes reserved up front; larger boards grow the vector.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Background, `size²` cells and the agent marker, capped at `PREALLOC_LIMIT`.
fn shape_capacity(size: usize) -> usize {
    size.saturating_mul(size).saturating_add(2).min(PREALLOC_LIMIT)
}

impl Engine {
    /// Compose a scene from a parsed source file.
    pub fn compile(source: &GridworldSource) -> Result<SvgDocument, SceneError> {
        let agent = source.moves.as_deref().map(|moves| Agent {
            start: source.init_pos,
            moves,
        });
        let classifier = source.terrain.as_ref().map(|t| t as &dyn Classifier);
        Self::compose(source.size, classifier, agent, &source.extra_css)
    }

    /// Compose the board, the optional animated agent and the style sheet.
    ///
    /// All inputs are validated before any shape is built, so a call either
    /// returns a complete document or an error.
    pub fn compose(
        size: usize,
        classifier: Option<&dyn Classifier>,
        agent: Option<Agent<'_>>,
        extra_css: &str,
    ) -> Result<SvgDocument, SceneError> {
        if size == 0 {
            return Err(SceneError::InvalidGridSize { size });
        }
        let path = agent
            .map(|a| AgentPath::new(size, a.start, a.moves))
            .transpose()?;

        let board = Board::new(size, classifier);
        let mut shapes = Vec::with_capacity(shape_capacity(size));
        board.resolve(&mut shapes);

        let mut style = style::base_sheet();
        if let Some(path) = &path {
            path.resolve(&mut shapes);
            style.push_keyframes(path.keyframes_rule());
        }

        debug!(
            size,
            shapes = shapes.len(),
            keyframes = path.as_ref().map_or(0, |p| p.keyframes.len()),
            "composed gridworld scene"
        );

        Ok(SvgDocument {
            width: board.extent(),
            height: board.extent(),
            shapes,
            style,
            extra_css: extra_css.to_string(),
        })
    }
}
