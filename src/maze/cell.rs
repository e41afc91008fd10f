use crossterm::style::{Color, Stylize};

use std::fmt;

/// The state of a single cell of the maze grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Wall,
    /// An open cell that the solver has not discovered yet.
    Passage,
    /// The entrance at `(1, 0)`.
    Start,
    /// The exit at `(width - 2, height - 1)`.
    Goal,
    /// Discovered by the solver and waiting in the frontier.
    InQueue,
    /// Already processed by the solver.
    Visited,
}

impl CellState {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }

    /// Plain one-character form, used for text output.
    pub fn symbol(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Passage => ' ',
            CellState::Start => 'S',
            CellState::Goal => 'G',
            CellState::InQueue => 'o',
            CellState::Visited => '.',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            CellState::Wall => "⬜".with(Color::White),
            CellState::Passage => "  ".with(Color::Reset),
            CellState::Start => "🟩".with(Color::Green),
            CellState::Goal => "🟥".with(Color::Red),
            CellState::InQueue => "o ".with(Color::Yellow),
            CellState::Visited => "* ".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellState::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
