//! Coordinate mapping between grid cells and physical drawing units.
//!
//! One cell is one centimeter. Each cell rectangle is inset by
//! `CELL_INSET` from its unit square's top-left corner and is `CELL_SIZE`
//! wide, so grid lines stay visible between neighbouring filled cells.
//! Classification space has y pointing up; drawing space has row 0 at the
//! top. `flip_row` converts between the two.

use serde::{Deserialize, Serialize};

pub const CELL_INSET: f64 = 0.1;
pub const CELL_SIZE: f64 = 0.9;
/// Extra canvas padding beyond the last cell.
pub const CANVAS_PADDING: f64 = 0.05;
/// Distance from a unit square's corner to the visual center of its rect.
pub const CELL_CENTER: f64 = CELL_INSET + CELL_SIZE / 2.0;

/// One of the four unit moves on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    N,
    S,
    E,
    W,
}

impl Move {
    /// Drawing-space displacement of this move. North is up the screen,
    /// which is negative y.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::N => (0, -1),
            Move::S => (0, 1),
            Move::E => (1, 0),
            Move::W => (-1, 0),
        }
    }
}

/// Canvas edge length in centimeters for an `n`×`n` board.
pub fn canvas_extent(n: usize) -> f64 {
    n as f64 + CANVAS_PADDING
}

/// Map a drawing-space row to classification space, or back.
pub fn flip_row(n: usize, row: usize) -> usize {
    n - row - 1
}

/// Top-left corner of the rect drawn for cell `(x, y)` in drawing space.
pub fn cell_origin(x: usize, y: usize) -> (f64, f64) {
    (x as f64 + CELL_INSET, y as f64 + CELL_INSET)
}

/// Visual center of a cell given in classification space.
pub fn marker_center(n: usize, (x, y): (i32, i32)) -> (f64, f64) {
    let row = n as i64 - y as i64 - 1;
    (x as f64 + CELL_CENTER, row as f64 + CELL_CENTER)
}

/// Running prefix sum over the moves, one entry per move.
pub fn cumulative_offsets(moves: &[Move]) -> impl Iterator<Item = (i32, i32)> + '_ {
    moves.iter().scan((0, 0), |(dx, dy), m| {
        let (ax, ay) = m.delta();
        *dx += ax;
        *dy += ay;
        Some((*dx, *dy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_move_table() {
        assert_eq!(Move::N.delta(), (0, -1));
        assert_eq!(Move::S.delta(), (0, 1));
        assert_eq!(Move::E.delta(), (1, 0));
        assert_eq!(Move::W.delta(), (-1, 0));
    }

    #[test]
    fn test_cumulative_offsets_prefix_sum() {
        let offsets: Vec<_> = cumulative_offsets(&[Move::E, Move::N, Move::N]).collect();
        assert_eq!(offsets, vec![(1, 0), (1, -1), (1, -2)]);
    }

    #[test]
    fn test_cumulative_offsets_restartable() {
        let moves = [Move::W, Move::S];
        let first: Vec<_> = cumulative_offsets(&moves).collect();
        let second: Vec<_> = cumulative_offsets(&moves).collect();
        assert_eq!(first, second);
        assert_eq!(cumulative_offsets(&[]).count(), 0);
    }

    #[test]
    fn test_cell_origin_inset() {
        let (x, y) = cell_origin(3, 0);
        assert!(close(x, 3.1));
        assert!(close(y, 0.1));
    }

    #[test]
    fn test_marker_center_flips_row() {
        let (cx, cy) = marker_center(8, (2, 3));
        assert!(close(cx, 2.55));
        assert!(close(cy, 4.55));
    }

    #[test]
    fn test_flip_row() {
        assert_eq!(flip_row(8, 0), 7);
        assert_eq!(flip_row(8, 7), 0);
        assert_eq!(flip_row(1, 0), 0);
    }

    #[test]
    fn test_canvas_extent() {
        assert!(close(canvas_extent(1), 1.05));
        assert!(close(canvas_extent(8), 8.05));
    }
}
