use anyhow::{Context, Result};
use clap::Parser;
use hexmaze::{maze::solver, CLIArgs};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut maze = hexmaze::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;

    let traversal = solver::solve(&mut maze);
    let report = solver::summarize(&mut maze, &traversal);
    println!("{}", report);

    Ok(())
}
