//! Board rendering: one background rect plus one inset rect per cell.

use crate::types::{Length, RectShape, Shape};

use super::Resolve;
use super::coords::{CELL_SIZE, canvas_extent, cell_origin, flip_row};
use super::style::BACKGROUND_CLASS;

/// Assigns a terrain label to a cell in classification space, where y
/// grows upward. `None` means default styling.
pub trait Classifier {
    fn classify(&self, x: usize, y: usize) -> Option<String>;
}

impl<F, S> Classifier for F
where
    F: Fn(usize, usize) -> Option<S>,
    S: Into<String>,
{
    fn classify(&self, x: usize, y: usize) -> Option<String> {
        self(x, y).map(Into::into)
    }
}

/// An `n`×`n` board, optionally classified.
///
/// The size is not validated here; the scene composer rejects `n == 0`
/// before a board is built.
pub struct Board<'a> {
    pub size: usize,
    pub classifier: Option<&'a dyn Classifier>,
}

impl<'a> Board<'a> {
    pub fn new(size: usize, classifier: Option<&'a dyn Classifier>) -> Self {
        Self { size, classifier }
    }

    /// Physical edge length of the canvas.
    pub fn extent(&self) -> Length {
        Length::Cm(canvas_extent(self.size))
    }

    /// Class label of the cell drawn at column `x`, row `row` (row 0 on
    /// top). The classifier sees the row flipped into classification space.
    pub fn class_at(&self, x: usize, row: usize) -> Option<String> {
        let classifier = self.classifier?;
        classifier
            .classify(x, flip_row(self.size, row))
            .filter(|label| !label.is_empty())
    }
}

impl Resolve for Board<'_> {
    fn resolve(&self, shapes: &mut Vec<Shape>) {
        shapes.push(Shape::Rect(RectShape {
            x: None,
            y: None,
            width: Length::Percent(100.0),
            height: Length::Percent(100.0),
            class: Some(BACKGROUND_CLASS.to_string()),
        }));

        for x in 0..self.size {
            for row in 0..self.size {
                let (px, py) = cell_origin(x, row);
                shapes.push(Shape::Rect(RectShape {
                    x: Some(Length::Cm(px)),
                    y: Some(Length::Cm(py)),
                    width: Length::Cm(CELL_SIZE),
                    height: Length::Cm(CELL_SIZE),
                    class: self.class_at(x, row),
                }));
            }
        }
    }
}
