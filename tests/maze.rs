use hexmaze::{
    maze::{Maze, MazeBuilder, Role, Symbols},
    Direction, Error, Position, TopologyIssue,
};

fn build_maze(rows: &[&str]) -> Result<Maze, Error> {
    let mut builder = MazeBuilder::new();
    for row in rows {
        builder.add_row(row)?;
    }

    builder.build()
}

#[test]
fn adjacency_is_symmetric() {
    let maze = build_maze(&["S....", ".....", ".....", "....E"]).unwrap();
    for r in 0..maze.row_n() {
        for c in 0..maze.col_n() {
            let pos = Position::new(r, c);
            for dir in Direction::all_dirs() {
                if let Some(n_pos) = maze.neighbor(&pos, *dir) {
                    assert_eq!(
                        maze.neighbor(&n_pos, dir.opposite()),
                        Some(pos.clone()),
                        "asymmetric adjacency at {} toward {:?}",
                        pos,
                        dir
                    );
                }
            }
        }
    }
}

#[test]
fn neighbors_follow_odd_r_offsets() {
    let maze = build_maze(&["S....", ".....", ".....", "....E"]).unwrap();

    // Odd row: diagonals shift one column to the right.
    let odd_pos = Position::new(1, 2);
    assert_eq!(
        maze.neighbor(&odd_pos, Direction::Northwest),
        Some(Position::new(0, 2))
    );
    assert_eq!(
        maze.neighbor(&odd_pos, Direction::Northeast),
        Some(Position::new(0, 3))
    );
    assert_eq!(
        maze.neighbor(&odd_pos, Direction::East),
        Some(Position::new(1, 3))
    );
    assert_eq!(
        maze.neighbor(&odd_pos, Direction::Southeast),
        Some(Position::new(2, 3))
    );
    assert_eq!(
        maze.neighbor(&odd_pos, Direction::Southwest),
        Some(Position::new(2, 2))
    );
    assert_eq!(
        maze.neighbor(&odd_pos, Direction::West),
        Some(Position::new(1, 1))
    );

    // Even row: diagonals shift one column to the left.
    let even_pos = Position::new(2, 2);
    assert_eq!(
        maze.neighbor(&even_pos, Direction::Northwest),
        Some(Position::new(1, 1))
    );
    assert_eq!(
        maze.neighbor(&even_pos, Direction::Northeast),
        Some(Position::new(1, 2))
    );
    assert_eq!(
        maze.neighbor(&even_pos, Direction::Southeast),
        Some(Position::new(3, 2))
    );
    assert_eq!(
        maze.neighbor(&even_pos, Direction::Southwest),
        Some(Position::new(3, 1))
    );
}

#[test]
fn border_cells_have_no_neighbor_outside() {
    let maze = build_maze(&["S..", "...", "..E"]).unwrap();
    let corner = Position::new(0, 0);
    assert_eq!(maze.neighbor(&corner, Direction::Northwest), None);
    assert_eq!(maze.neighbor(&corner, Direction::Northeast), None);
    assert_eq!(maze.neighbor(&corner, Direction::West), None);
    assert_eq!(maze.neighbor(&corner, Direction::Southwest), None);
    assert_eq!(
        maze.neighbor(&corner, Direction::East),
        Some(Position::new(0, 1))
    );
}

#[test]
fn roles_and_endpoints_are_resolved() {
    let maze = build_maze(&["S.#", "...", "#.E"]).unwrap();
    assert_eq!(maze.start_pos(), Position::new(0, 0));
    assert_eq!(maze.end_pos(), Position::new(2, 2));
    assert_eq!(maze.role(&Position::new(0, 0)), Some(Role::Start));
    assert_eq!(maze.role(&Position::new(0, 2)), Some(Role::Wall));
    assert_eq!(maze.role(&Position::new(1, 1)), Some(Role::Open));
    assert_eq!(maze.role(&Position::new(2, 2)), Some(Role::End));
    assert_eq!(maze.role(&Position::new(3, 0)), None);
}

#[test]
fn unknown_symbol_is_rejected_with_location() {
    let err = build_maze(&["S.?", "...", "..E"]).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownCellSymbol {
            row: 0,
            column: 2,
            symbol: '?'
        }
    ));
}

#[test]
fn multiple_start_cells_are_rejected() {
    let err = build_maze(&["S..", "..S", "..E"]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMazeTopology(TopologyIssue::MultipleStart(_, _))
    ));
}

#[test]
fn multiple_end_cells_are_rejected() {
    let err = build_maze(&["S.E", "...", "..E"]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMazeTopology(TopologyIssue::MultipleEnd(_, _))
    ));
}

#[test]
fn missing_start_or_end_is_rejected() {
    let err = build_maze(&["...", "..E"]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMazeTopology(TopologyIssue::MissingStart)
    ));

    let err = build_maze(&["S..", "..."]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMazeTopology(TopologyIssue::MissingEnd)
    ));
}

#[test]
fn ragged_rows_are_rejected() {
    let err = build_maze(&["S..", "....", "..E"]).unwrap_err();
    assert!(matches!(err, Error::InconsistentRow(3, 4)));
}

#[test]
fn custom_symbol_table_is_honored() {
    let symbols = Symbols {
        wall: 'W',
        open: '.',
        start: 'S',
        end: 'E',
    };
    let mut builder = MazeBuilder::with_symbols(symbols);
    for row in ["S..", "W.W", "..E"] {
        builder.add_row(row).unwrap();
    }
    let maze = builder.build().unwrap();
    assert_eq!(maze.role(&Position::new(1, 0)), Some(Role::Wall));
    assert_eq!(maze.role(&Position::new(1, 1)), Some(Role::Open));
}
