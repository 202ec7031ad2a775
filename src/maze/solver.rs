use std::fmt::Display;

use crate::Position;

use super::{Maze, Role, VisitState};

/// One primitive move of the traversal: extend the path by one cell, or
/// retreat from a dead end by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance,
    Backtrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Exhausted,
}

/// Final state of one traversal run: how it ended, how many primitive steps
/// (pushes and pops, the initial push included) it took, and the final
/// stack content from start up to the frontier.
#[derive(Debug)]
pub struct Traversal {
    outcome: Outcome,
    steps: usize,
    path: Vec<Position>,
}

impl Traversal {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }
}

// The DFS path from the start cell to the current frontier, top is the
// frontier. A cell enters the stack at most once per run.
#[derive(Debug)]
struct PathStack(Vec<usize>);

impl PathStack {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn push(&mut self, ind: usize) {
        self.0.push(ind);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    fn peek(&self) -> Option<usize> {
        self.0.last().copied()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_positions(self, maze: &Maze) -> Vec<Position> {
        self.0.iter().map(|ind| maze.position_of(*ind)).collect()
    }
}

pub fn solve(maze: &mut Maze) -> Traversal {
    solve_observed(maze, |_, _| {})
}

/// Iterative depth-first backtracking from the maze's start cell. Neighbors
/// are tried in fixed direction scan order, the first unvisited non-wall
/// one wins; a cell with no such neighbor is popped and retired. The
/// observer is called once per transition with the affected cell's
/// position. Exhausting the stack is a normal outcome, not an error.
pub fn solve_observed<F>(maze: &mut Maze, mut observer: F) -> Traversal
where
    F: FnMut(&Position, Transition),
{
    let start_ind = maze.start_ind();
    let mut stack = PathStack::new();
    stack.push(start_ind);
    maze.set_visit(start_ind, VisitState::OnStack);
    // The initial push counts as the first step.
    let mut steps = 1;

    while let Some(top_ind) = stack.peek() {
        if maze.cell(top_ind).role() == Role::End {
            break;
        }

        if let Some(next_ind) = first_candidate(maze, top_ind) {
            stack.push(next_ind);
            maze.set_visit(next_ind, VisitState::OnStack);
            steps += 1;
            observer(&maze.position_of(next_ind), Transition::Advance);
        } else {
            stack.pop();
            maze.set_visit(top_ind, VisitState::Retired);
            steps += 1;
            observer(&maze.position_of(top_ind), Transition::Backtrack);
        }
    }

    let outcome = if stack.is_empty() {
        Outcome::Exhausted
    } else {
        Outcome::Found
    };

    Traversal {
        outcome,
        steps,
        path: stack.into_positions(maze),
    }
}

fn first_candidate(maze: &Maze, from_ind: usize) -> Option<usize> {
    maze.neighbor_slots(from_ind)
        .iter()
        .flatten()
        .copied()
        .find(|ind| maze.cell(*ind).is_candidate())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub found: bool,
    pub steps: usize,
    pub path_len: usize,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Found: {}, number of steps: {}, tiles on final stack: {}",
            if self.found { "Yes" } else { "No" },
            self.steps,
            self.path_len
        )
    }
}

/// Condenses a finished traversal into the user-facing summary. Marks the
/// end cell Finished when the path reached it; topology is left untouched.
pub fn summarize(maze: &mut Maze, traversal: &Traversal) -> Report {
    let found = traversal.found();
    if found {
        maze.set_visit(maze.end_ind(), VisitState::Finished);
    }

    Report {
        found,
        steps: traversal.steps(),
        path_len: traversal.path().len(),
    }
}
