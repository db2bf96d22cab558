//! Command-line Hungarian assignment solver.
//!
//! Reads a comma-separated cost matrix from a file, solves the
//! assignment problem, and prints the optimal matching. With
//! `--verbose`, traces every step of the algorithm.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use munkres::matrix::CostMatrix;
use munkres::solver::{Assignment, Solver};
use munkres::trace::{ConsoleTrace, NullTrace};

#[derive(Parser)]
#[command(name = "munkres")]
#[command(about = "Problem solving with Hungarian algorithm")]
#[command(version)]
struct Cli {
    #[arg(help = "File that contains the costs")]
    costs_file: PathBuf,
    #[arg(long, short, help = "Print detailed steps of the algorithm")]
    verbose: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let input = fs::read_to_string(&cli.costs_file)
        .with_context(|| format!("Failed to read costs file: {}", cli.costs_file.display()))?;
    let costs = CostMatrix::parse(&input)
        .with_context(|| format!("Failed to parse costs file: {}", cli.costs_file.display()))?;

    let mut solver = Solver::new(&costs);
    let assignment = if cli.verbose {
        let mut trace = ConsoleTrace::new(io::stdout().lock());
        trace.problem_header(&costs);
        solver.solve(&mut trace)
    } else {
        solver.solve(&mut NullTrace)
    };

    print_result(&costs, &assignment, cli.verbose);
    Ok(())
}

fn print_result(costs: &CostMatrix, assignment: &Assignment, verbose: bool) {
    if verbose {
        println!("=== Final Result ===");
    }
    for (worker, task) in assignment.pairs() {
        println!(
            "row {} -> col {} cost={}",
            worker,
            task,
            costs.cost(worker, task)
        );
    }
    println!("Total cost: {}", assignment.total_cost);
}
