use crate::{Direction, Error, Position, TopologyIssue};

pub mod solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Wall,
    Open,
    Start,
    End,
}

/// Visitation state of one cell over a traversal run. A cell moves
/// Unvisited -> OnStack -> Retired at most once; Finished is a
/// reporting-only mark put on the end cell after a path is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    OnStack,
    Retired,
    Finished,
}

#[derive(Debug)]
pub struct Cell {
    role: Role,
    visit: VisitState,
}

impl Cell {
    fn new(role: Role) -> Self {
        Self {
            role,
            visit: VisitState::Unvisited,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn visit(&self) -> VisitState {
        self.visit
    }

    pub(crate) fn is_candidate(&self) -> bool {
        self.role != Role::Wall && self.visit == VisitState::Unvisited
    }
}

/// Symbol table mapping maze text characters to cell roles. The default is
/// '#' for wall, '.' for open, 'S' for start and 'E' for end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub wall: char,
    pub open: char,
    pub start: char,
    pub end: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            wall: '#',
            open: '.',
            start: 'S',
            end: 'E',
        }
    }
}

impl Symbols {
    fn role_of(&self, c: char) -> Option<Role> {
        if c == self.wall {
            Some(Role::Wall)
        } else if c == self.open {
            Some(Role::Open)
        } else if c == self.start {
            Some(Role::Start)
        } else if c == self.end {
            Some(Role::End)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct Maze {
    cells: Vec<Cell>,
    neighbors: Vec<[Option<usize>; 6]>, // One slot per direction, in Direction scan order.
    row_n: usize,
    col_n: usize,
    start_ind: usize,
    end_ind: usize,
}

impl Maze {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn start_pos(&self) -> Position {
        self.position_of(self.start_ind)
    }

    pub fn end_pos(&self) -> Position {
        self.position_of(self.end_ind)
    }

    pub fn role(&self, pos: &Position) -> Option<Role> {
        self.index_of(pos).map(|ind| self.cells[ind].role)
    }

    pub fn visit_state(&self, pos: &Position) -> Option<VisitState> {
        self.index_of(pos).map(|ind| self.cells[ind].visit)
    }

    /// Position of the neighbor cell in the given direction, None at the
    /// maze border where that direction has no cell.
    pub fn neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        let ind = self.index_of(pos)?;

        self.neighbors[ind][dir as usize].map(|n_ind| self.position_of(n_ind))
    }

    pub(crate) fn cell(&self, ind: usize) -> &Cell {
        &self.cells[ind]
    }

    pub(crate) fn set_visit(&mut self, ind: usize, visit: VisitState) {
        self.cells[ind].visit = visit;
    }

    pub(crate) fn neighbor_slots(&self, ind: usize) -> &[Option<usize>; 6] {
        &self.neighbors[ind]
    }

    pub(crate) fn start_ind(&self) -> usize {
        self.start_ind
    }

    pub(crate) fn end_ind(&self) -> usize {
        self.end_ind
    }

    pub(crate) fn position_of(&self, ind: usize) -> Position {
        Position::new(ind / self.col_n, ind % self.col_n)
    }

    fn index_of(&self, pos: &Position) -> Option<usize> {
        if pos.r() < self.row_n && pos.c() < self.col_n {
            Some(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct MazeBuilder {
    symbols: Symbols,
    cells: Vec<Cell>,
    row_n: usize,
    col_n: Option<usize>,
    start_pos: Option<Position>,
    end_pos: Option<Position>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::with_symbols(Symbols::default())
    }

    pub fn with_symbols(symbols: Symbols) -> Self {
        Self {
            symbols,
            cells: Vec::new(),
            row_n: 0,
            col_n: None,
            start_pos: None,
            end_pos: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        for (ind, c) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, ind);
            let role = self
                .symbols
                .role_of(c)
                .ok_or(Error::UnknownCellSymbol {
                    row: self.row_n,
                    column: ind,
                    symbol: c,
                })?;
            match role {
                Role::Start => {
                    if let Some(last_pos) = self.start_pos.replace(pos.clone()) {
                        return Err(Error::InvalidMazeTopology(TopologyIssue::MultipleStart(
                            last_pos, pos,
                        )));
                    }
                }
                Role::End => {
                    if let Some(last_pos) = self.end_pos.replace(pos.clone()) {
                        return Err(Error::InvalidMazeTopology(TopologyIssue::MultipleEnd(
                            last_pos, pos,
                        )));
                    }
                }
                _ => {}
            }
            self.cells.push(Cell::new(role));
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Maze, Error> {
        let Some(start_pos) = self.start_pos else {
            return Err(Error::InvalidMazeTopology(TopologyIssue::MissingStart));
        };
        let Some(end_pos) = self.end_pos else {
            return Err(Error::InvalidMazeTopology(TopologyIssue::MissingEnd));
        };

        let row_n = self.row_n;
        let col_n = self.col_n.unwrap_or(0);
        let index_of = |pos: &Position| {
            if pos.r() < row_n && pos.c() < col_n {
                Some(pos.r() * col_n + pos.c())
            } else {
                None
            }
        };

        let mut neighbors = Vec::with_capacity(self.cells.len());
        for r in 0..row_n {
            for c in 0..col_n {
                let pos = Position::new(r, c);
                let mut slots = [None; 6];
                for (dir_ind, dir) in Direction::all_dirs().iter().enumerate() {
                    slots[dir_ind] = pos.neighbor(*dir).and_then(|n_pos| index_of(&n_pos));
                }
                neighbors.push(slots);
            }
        }

        Ok(Maze {
            cells: self.cells,
            neighbors,
            row_n,
            col_n,
            start_ind: index_of(&start_pos).unwrap(),
            end_ind: index_of(&end_pos).unwrap(),
        })
    }
}
