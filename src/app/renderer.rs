use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::maze::{CellState, Coord, Maze};

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }

    /// Check if the terminal can hold a grid of the given dimensions plus the status line.
    /// If not, display a message asking the user to resize and return Ok(false).
    pub fn check_size(&mut self, width: u16, height: u16) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        let needed_width = width.saturating_mul(CellState::CELL_WIDTH);
        let needed_height = height.saturating_add(1);
        if term_width >= needed_width && term_height >= needed_height {
            return Ok(true);
        }

        let msg = format!(
            "Terminal size is too small ({}x{}) for the grid dimensions ({}x{}) to display. Please resize the terminal.\r\n",
            term_width, term_height, width, height
        );
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            style::PrintStyledContent(
                "Press Esc to exit...\r\n"
                    .with(Color::Blue)
                    .attribute(Attribute::Bold)
            )
        )?;
        self.stdout.flush()?;
        Ok(false)
    }

    /// Redraw the whole maze.
    pub fn draw_maze(&mut self, maze: &Maze) -> std::io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for row in maze.cells().rows() {
            for cell in row {
                self.stdout.queue(style::Print(cell))?;
            }
            self.stdout.queue(style::Print("\r\n"))?;
        }
        self.stdout.flush()
    }

    /// Redraw a single processed cell and its neighbors.
    pub fn draw_step(&mut self, maze: &Maze, coord: Coord) -> std::io::Result<()> {
        let cells = maze.cells();
        for c in std::iter::once(coord).chain(cells.neighbors(coord)) {
            queue!(
                self.stdout,
                cursor::MoveTo(c.0 * CellState::CELL_WIDTH, c.1),
                style::Print(cells[c])
            )?;
        }
        self.stdout.flush()
    }

    /// Write the status line right below the maze, cut to the terminal width.
    pub fn draw_status(&mut self, maze: &Maze, status: &str) -> std::io::Result<()> {
        let (term_width, _) = terminal::size()?;
        let (line, _) = status.unicode_truncate(term_width as usize);
        queue!(
            self.stdout,
            cursor::MoveTo(0, maze.cells().height()),
            terminal::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(line.with(Color::Cyan).attribute(Attribute::Bold))
        )?;
        self.stdout.flush()
    }

    /// Move the cursor below the maze and status line.
    pub fn finish(&mut self, maze: &Maze) -> std::io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, maze.cells().height().saturating_add(1)),
            cursor::Show
        )?;
        self.stdout.flush()
    }
}
