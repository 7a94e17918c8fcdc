#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use clap::error::ErrorKind;
use clap::Parser;
use dpll_sat::sat::dimacs::parse_file;
use dpll_sat::sat::dpll::DpllSolver;
use dpll_sat::sat::solver::Solver;
use std::path::PathBuf;
use std::process::ExitCode;

/// Decides satisfiability of DIMACS CNF files.
#[derive(Parser, Debug)]
#[command(name = "dpll-sat", version, about = "A chronological-backtracking DPLL SAT solver")]
struct Cli {
    /// DIMACS .cnf files to solve, in order.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let wanted_output = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if wanted_output {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    let mut solver = DpllSolver::new();

    for path in &cli.files {
        let cnf = match parse_file(path) {
            Ok(cnf) => cnf,
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        };

        if solver.solve(&cnf) {
            println!("sat");
            let model = solver.model();
            println!("{model}");
            if cnf.eval(model) {
                println!("model validated");
            } else {
                println!("invalid model");
            }
        } else {
            println!("unsat");
        }
    }

    ExitCode::SUCCESS
}
