//! Agent path animation.
//!
//! The agent is a circle placed at the visual center of its start cell.
//! Its motion is a CSS `@keyframes` block with one stop per move; each stop
//! translates the marker by the cumulative offset reached after that move,
//! relative to where the marker started.

use crate::error::SceneError;
use crate::types::{CircleShape, Length, Shape};

use super::Resolve;
use super::coords::{Move, cumulative_offsets, marker_center};
use super::style::{AGENT_CLASS, Declaration, KeyframeStop, KeyframesRule, MOVE_ANIMATION};

pub const MARKER_RADIUS: f64 = 0.3;

/// Start position used when a scene does not name one.
pub const DEFAULT_START: (i32, i32) = (2, 3);

/// Marker position after move `step` of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    pub step: usize,
    pub total: usize,
    pub dx: i32,
    pub dy: i32,
}

impl Keyframe {
    /// `(step + 1) / total`; the last keyframe is exactly 1.
    pub fn time_fraction(&self) -> f64 {
        (self.step + 1) as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        (self.step + 1) as f64 * 100.0 / self.total as f64
    }

    fn to_stop(self) -> KeyframeStop {
        KeyframeStop {
            percent: self.percent(),
            declarations: vec![Declaration::new(
                "transform",
                format!(
                    "translate({}, {})",
                    Length::Cm(self.dx as f64),
                    Length::Cm(self.dy as f64)
                ),
            )],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentPath {
    pub center: (f64, f64),
    pub keyframes: Vec<Keyframe>,
}

impl AgentPath {
    /// Build the marker and its keyframes for a board of size `n`.
    /// `start` is in classification space (y grows upward).
    pub fn new(n: usize, start: (i32, i32), moves: &[Move]) -> Result<Self, SceneError> {
        if moves.is_empty() {
            return Err(SceneError::EmptyMoveSequence);
        }

        let total = moves.len();
        let keyframes = cumulative_offsets(moves)
            .enumerate()
            .map(|(step, (dx, dy))| Keyframe { step, total, dx, dy })
            .collect();

        Ok(Self {
            center: marker_center(n, start),
            keyframes,
        })
    }

    /// The `@keyframes move` block driving the marker.
    pub fn keyframes_rule(&self) -> KeyframesRule {
        KeyframesRule {
            name: MOVE_ANIMATION.to_string(),
            stops: self.keyframes.iter().map(|k| k.to_stop()).collect(),
        }
    }
}

impl Resolve for AgentPath {
    fn resolve(&self, shapes: &mut Vec<Shape>) {
        let (cx, cy) = self.center;
        shapes.push(Shape::Circle(CircleShape {
            cx: Length::Cm(cx),
            cy: Length::Cm(cy),
            r: Length::Cm(MARKER_RADIUS),
            class: Some(AGENT_CLASS.to_string()),
        }));
    }
}
