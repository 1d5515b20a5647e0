//! Shared boundary types for the gridworld renderer.
//!
//! This module defines the data contract between the engine and the
//! renderer: an `SvgDocument` holding positioned `Shape`s and a typed
//! `StyleSheet`. Nothing here knows how to print SVG text.

use std::fmt;

use crate::engine::style::StyleSheet;

/// Format a length value with at most four decimals and no trailing zeros.
pub fn format_number(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// ---------------------------------------------------------------------------
// Lengths
// ---------------------------------------------------------------------------

/// A physical length. Grid geometry is expressed in centimeters so the image
/// has a fixed real-world size regardless of viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Cm(f64),
    Percent(f64),
}

impl Length {
    /// Numeric value in centimeters, if this is an absolute length.
    pub fn as_cm(&self) -> Option<f64> {
        match self {
            Length::Cm(v) => Some(*v),
            Length::Percent(_) => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Cm(v) => write!(f, "{}cm", format_number(*v)),
            Length::Percent(v) => write!(f, "{}%", format_number(*v)),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine → Renderer boundary (in-memory only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: Option<Length>,
    pub y: Option<Length>,
    pub width: Length,
    pub height: Length,
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub cx: Length,
    pub cy: Length,
    pub r: Length,
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Circle(CircleShape),
}

impl Shape {
    pub fn class(&self) -> Option<&str> {
        match self {
            Shape::Rect(r) => r.class.as_deref(),
            Shape::Circle(c) => c.class.as_deref(),
        }
    }
}

/// A fully composed scene, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: Length,
    pub height: Length,
    pub shapes: Vec<Shape>,
    pub style: StyleSheet,
    /// Caller-supplied CSS appended verbatim after the generated rules.
    pub extra_css: String,
}

impl SvgDocument {
    pub fn rects(&self) -> impl Iterator<Item = &RectShape> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Rect(r) => Some(r),
            Shape::Circle(_) => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CircleShape> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Circle(c) => Some(c),
            Shape::Rect(_) => None,
        })
    }

    /// Full style text in emission order: base rules, generated keyframes,
    /// then the extra CSS.
    pub fn css(&self) -> String {
        let mut css = self.style.to_css();
        css.push_str(&self.extra_css);
        css
    }
}
