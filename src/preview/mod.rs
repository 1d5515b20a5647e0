//! Preview — a colored terminal view of a board.
//!
//! Prints the board top row first, one colored block per cell. The agent's
//! start cell shows `@` and every cell its path reaches shows `·`. This is a
//! static dump to any writer; it does not take over the terminal.

use std::collections::HashSet;
use std::io::Write;

use anyhow::Result;
use crossterm::{queue, style};

use crate::engine::board::Board;
use crate::engine::coords::{Move, cumulative_offsets, flip_row};
use crate::engine::style::TerrainClass;

const START_GLYPH: char = '@';
const TRAIL_GLYPH: char = '·';

/// Cells (drawing space: column, row) the agent occupies after each move.
fn trail_cells(n: usize, start: (i32, i32), moves: &[Move]) -> HashSet<(i64, i64)> {
    let start_row = n as i64 - start.1 as i64 - 1;
    cumulative_offsets(moves)
        .map(|(dx, dy)| (start.0 as i64 + dx as i64, start_row + dy as i64))
        .collect()
}

pub fn print_board<W: Write>(
    out: &mut W,
    board: &Board<'_>,
    agent: Option<((i32, i32), &[Move])>,
    cell_width: u16,
) -> Result<()> {
    let n = board.size;
    let width = cell_width.max(1) as usize;
    let (start, trail) = match agent {
        Some((start, moves)) => {
            let row = n as i64 - start.1 as i64 - 1;
            (Some((start.0 as i64, row)), trail_cells(n, start, moves))
        }
        None => (None, HashSet::new()),
    };

    for row in 0..n {
        for x in 0..n {
            let class = board.class_at(x, row);
            let here = (x as i64, row as i64);
            let glyph = if start == Some(here) {
                START_GLYPH
            } else if trail.contains(&here) {
                TRAIL_GLYPH
            } else {
                ' '
            };
            let text: String = std::iter::once(glyph)
                .chain(std::iter::repeat_n(' ', width - 1))
                .collect();
            queue!(
                out,
                style::PrintStyledContent(style::StyledContent::new(
                    cell_style(class.as_deref()),
                    text
                ))
            )?;
        }
        queue!(out, style::ResetColor, style::Print(format!("  {}\n", flip_row(n, row))))?;
    }
    out.flush()?;
    Ok(())
}

fn cell_style(label: Option<&str>) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    cs.foreground_color = Some(style::Color::Black);
    if let Some(class) = label.and_then(TerrainClass::from_label) {
        let (r, g, b) = class.rgb();
        cs.background_color = Some(style::Color::Rgb { r, g, b });
    }
    cs
}
