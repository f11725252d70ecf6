//! Command-line entry point for jobmatch.
//!
//! Draws a random worker/job cost matrix, squares it, solves the assignment
//! problem with the Hungarian method, and prints the matrices, the per-worker
//! assignment, the total cost, and the solver time.
//!
//! # Usage
//!
//! ```sh
//! jobmatch 4 10 1 100
//! jobmatch 7 3 1 100 --policy replicate-jobs --cost-rule matched-cell
//! RUST_LOG=debug jobmatch 4 10 1 100 --seed 7
//! ```

use std::process::ExitCode;

use clap::Parser as _;

use crate::args::Args;

mod app;
mod args;
mod report;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let problem = match args.problem() {
        Ok(Some(problem)) => problem,
        Ok(None) => {
            print!("{}", Args::usage());
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    match app::run(problem, &args.options()) {
        Ok(report) => {
            println!("{}", report.render(args.width));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
