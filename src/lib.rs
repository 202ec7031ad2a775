use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use maze::{Maze, MazeBuilder};

pub mod maze;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize), // (expected number of columns, given number of columns)
    UnknownCellSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
    InvalidMazeTopology(TopologyIssue),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::UnknownCellSymbol {
                row,
                column,
                symbol,
            } => write!(
                f,
                "Unknown cell symbol({}) at row {}, column {}.",
                symbol, row, column
            ),
            Error::InvalidMazeTopology(issue) => write!(f, "Invalid maze topology: {}", issue),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyIssue {
    MultipleStart(Position, Position),
    MultipleEnd(Position, Position),
    MissingStart,
    MissingEnd,
}

impl Display for TopologyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyIssue::MultipleStart(last_pos, pos) => write!(
                f,
                "expect only one start cell, given two({}, {}).",
                last_pos, pos
            ),
            TopologyIssue::MultipleEnd(last_pos, pos) => write!(
                f,
                "expect only one end cell, given two({}, {}).",
                last_pos, pos
            ),
            TopologyIssue::MissingStart => write!(f, "no start cell in maze."),
            TopologyIssue::MissingEnd => write!(f, "no end cell in maze."),
        }
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    /// Coordinate of the hex neighbor in the given direction, None if it
    /// would fall off the top or left edge. The other two edges are bounded
    /// by the maze itself.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.deltas(self.r % 2 == 1);
        let r = self.r.checked_add_signed(dr)?;
        let c = self.c.checked_add_signed(dc)?;

        Some(Self::new(r, c))
    }
}

/// The six directions around a pointy-top hex cell, in scan order. The
/// opposite of the direction at index d sits at index (d + 3) % 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northwest,
    Northeast,
    East,
    Southeast,
    Southwest,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 6] = [
            Direction::Northwest,
            Direction::Northeast,
            Direction::East,
            Direction::Southeast,
            Direction::Southwest,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Northwest => Direction::Southeast,
            Direction::Northeast => Direction::Southwest,
            Direction::East => Direction::West,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
            Direction::West => Direction::East,
        }
    }

    // Row/column deltas in the odd-r offset layout, where odd rows are
    // shifted half a cell to the right.
    fn deltas(&self, odd_row: bool) -> (isize, isize) {
        if odd_row {
            match self {
                Direction::Northwest => (-1, 0),
                Direction::Northeast => (-1, 1),
                Direction::East => (0, 1),
                Direction::Southeast => (1, 1),
                Direction::Southwest => (1, 0),
                Direction::West => (0, -1),
            }
        } else {
            match self {
                Direction::Northwest => (-1, -1),
                Direction::Northeast => (-1, 0),
                Direction::East => (0, 1),
                Direction::Southeast => (1, 0),
                Direction::Southwest => (1, -1),
                Direction::West => (0, -1),
            }
        }
    }
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MazeBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build()?)
}
