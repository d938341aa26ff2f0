use std::env;
use std::fs;
use std::process::ExitCode;

use dpllsat::Verdict;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let prog = args.first().map(String::as_str).unwrap_or("dpllsat");
        eprintln!("usage: {prog} <path-to-cnf>");
        return ExitCode::from(1);
    }

    let path = &args[1];
    let input = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: could not read {path}: {e}");
            return ExitCode::from(1);
        }
    };

    let mut solver = match dpllsat::Solver::from_dimacs(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: could not parse {path}: {e}");
            return ExitCode::from(1);
        }
    };

    println!("{path}");
    println!("| Vars: {} | Clauses: {} |", solver.num_vars(), solver.num_clauses());

    let verdict = solver.solve();
    let verdict_str = match verdict {
        Verdict::Sat => "SAT",
        Verdict::Unsat => "UNSAT",
        Verdict::Timeout => "TIMEOUT",
    };
    println!("Result: {verdict_str}");
    println!("CPU time used: {:.5}", solver.elapsed_cpu_time().as_secs_f64());

    ExitCode::from(0)
}
