//! Text rendering of the clipped window

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::host::{cell_center, TerminalWindow};

const FILL: char = '█';
const EDGE: char = '░';

/// Rasterize the window onto a `columns x rows` grid.
///
/// A cell is painted when its centre lies inside the clip. While content is visible the
/// clip is drawn as an outlined panel with `content` written inside it.
pub fn rasterize(
    window: &TerminalWindow,
    content: &[String],
    columns: u16,
    rows: u16,
) -> Vec<String> {
    let inside: Vec<Vec<bool>> = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| window.hit(cell_center(column, row)))
                .collect()
        })
        .collect();

    if !window.content_visible() {
        return inside
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&hit| if hit { FILL } else { ' ' })
                    .collect::<String>()
            })
            .collect();
    }

    let top = inside.iter().position(|row| row.contains(&true));
    let left = inside
        .iter()
        .filter_map(|row| row.iter().position(|&hit| hit))
        .min();
    let is_inside = |row: usize, column: usize| {
        inside
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    };

    let mut grid = Vec::with_capacity(inside.len());
    for (row, cells) in inside.iter().enumerate() {
        let mut line = String::with_capacity(cells.len());
        for (column, &hit) in cells.iter().enumerate() {
            if !hit {
                line.push(' ');
                continue;
            }
            let edge = row == 0
                || column == 0
                || !is_inside(row - 1, column)
                || !is_inside(row + 1, column)
                || !is_inside(row, column - 1)
                || !is_inside(row, column + 1);
            if edge {
                line.push(EDGE);
            } else {
                line.push(panel_char(content, top, left, row, column));
            }
        }
        grid.push(line);
    }
    grid
}

/// Content character for an inner panel cell, one cell of padding on each side
fn panel_char(
    content: &[String],
    top: Option<usize>,
    left: Option<usize>,
    row: usize,
    column: usize,
) -> char {
    let (Some(top), Some(left)) = (top, left) else {
        return ' ';
    };
    let (Some(line), Some(offset)) = (
        row.checked_sub(top + 1).and_then(|i| content.get(i)),
        column.checked_sub(left + 2),
    ) else {
        return ' ';
    };
    line.chars().nth(offset).unwrap_or(' ')
}

/// Write a rasterized frame with a status line below it
pub fn draw<Out: Write>(out: &mut Out, frame: &[String], status: &str) -> io::Result<()> {
    queue!(out, cursor::Hide)?;
    for (row, line) in frame.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16), Print(line))?;
    }
    queue!(
        out,
        cursor::MoveTo(0, frame.len() as u16),
        Clear(ClearType::CurrentLine),
        Print(status)
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatbubble_core::{ClipMask, HostWindow, Point2D, WindowBounds};

    #[test]
    fn test_shrunk_bubble_is_round() {
        let mut window = TerminalWindow::new(WindowBounds::square(Point2D::new(80.0, 80.0), 64.0));
        window.set_clip(ClipMask::circle(64.0));
        window.set_content_visible(false);

        let frame = rasterize(&window, &[], 30, 12);
        let cell = |row: usize, column: usize| frame[row].chars().nth(column).unwrap();
        assert_eq!(cell(7, 13), FILL);
        assert_eq!(cell(5, 10), ' ');
        assert_eq!(cell(0, 0), ' ');
    }

    #[test]
    fn test_expanded_panel_shows_content() {
        let window = TerminalWindow::new(WindowBounds::new(0.0, 0.0, 160.0, 96.0));
        let content = vec!["hello".to_string()];

        let frame = rasterize(&window, &content, 24, 8);
        assert_eq!(frame.len(), 8);
        assert!(frame[0].starts_with(EDGE));
        assert!(frame[1].contains("hello"));
        assert_eq!(frame[1].chars().nth(2), Some('h'));
        assert!(frame[7].trim().is_empty());
    }
}
