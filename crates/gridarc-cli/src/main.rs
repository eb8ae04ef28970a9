//! Command-line front end for the gridarc Sudoku solver.
//!
//! Takes one positional 81-character puzzle string (`0` = blank cell) and
//! writes a single line to the output file: the solved board, a space, and
//! the `AC3` or `BTS` tag naming the stage that produced it.
//!
//! # Usage
//!
//! ```sh
//! gridarc 003020600900305001001806400008102900700000008006708200002609500800203009005010300
//! ```
//!
//! Override the destination file:
//!
//! ```sh
//! gridarc --output solved.txt <puzzle>
//! ```

use std::{fs, io, path::PathBuf, process};

use clap::Parser;
use gridarc_solver::SolveError;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The puzzle as 81 characters '0'-'9', row-major, '0' for blanks.
    puzzle: String,

    /// File the result line is written to.
    #[arg(short, long, value_name = "PATH", default_value = "output.txt")]
    output: PathBuf,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Solve(#[from] SolveError),
    #[display("failed to write result: {_0}")]
    Write(#[from] io::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let solution = gridarc_solver::solve(&args.puzzle)?;
    log::info!("solved with {}", solution.method);

    fs::write(&args.output, format!("{solution}\n"))?;
    Ok(())
}
