use std::time::Duration;

use dpllsat::{Solver, Verdict};

fn clauses_of(input: &str) -> Vec<Vec<i32>> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('c') && !l.starts_with('p'))
        .map(|l| {
            l.split_whitespace()
                .map(|t| t.parse::<i32>().unwrap())
                .filter(|&n| n != 0)
                .collect()
        })
        .collect()
}

#[test]
fn sat_model_actually_satisfies_the_input_formula() {
    let input = "p cnf 3 3\n1 -2 0\n2 3 0\n-1 -3 0\n";
    let mut solver = Solver::from_dimacs(input).unwrap();
    assert_eq!(solver.solve(), Verdict::Sat);
    let model = solver.model();

    for clause in clauses_of(input) {
        let satisfied = clause.iter().any(|&lit| (lit > 0) == model.lit(lit.unsigned_abs()));
        assert!(satisfied, "clause {clause:?} not satisfied by model {:?}", model.as_vec());
    }
}

#[test]
fn deterministic_across_repeated_runs() {
    let input = "p cnf 4 4\n1 2 0\n-1 3 0\n-2 4 0\n-3 -4 0\n";

    let mut first = Solver::from_dimacs(input).unwrap();
    let v1 = first.solve();

    let mut second = Solver::from_dimacs(input).unwrap();
    let v2 = second.solve();

    assert_eq!(v1, v2);
    if v1 == Verdict::Sat {
        assert_eq!(first.model().as_vec(), second.model().as_vec());
    }
}

#[test]
fn a_near_zero_budget_always_times_out() {
    let input = "p cnf 1 1\n1 0\n";
    let mut solver = Solver::from_dimacs_with_budget(input, Duration::from_nanos(1)).unwrap();
    assert_eq!(solver.solve(), Verdict::Timeout);
}

#[test]
fn an_ample_budget_does_not_time_out_on_an_easy_instance() {
    let input = "p cnf 1 1\n1 0\n";
    let mut solver = Solver::from_dimacs_with_budget(input, Duration::from_secs(60)).unwrap();
    assert_eq!(solver.solve(), Verdict::Sat);
}

#[test]
fn duplicate_and_subsumed_clauses_do_not_change_satisfiability() {
    // clause 2 is a duplicate of clause 1, clause 3 is implied by clause 1.
    let with_redundancy = "p cnf 3 4\n1 2 3 0\n1 2 3 0\n1 2 0\n-1 -2 -3 0\n";
    let minimal = "p cnf 3 2\n1 2 0\n-1 -2 -3 0\n";

    let mut a = Solver::from_dimacs(with_redundancy).unwrap();
    let mut b = Solver::from_dimacs(minimal).unwrap();
    assert_eq!(a.solve(), b.solve());
}

#[test]
fn empty_clause_is_immediately_unsat() {
    let input = "p cnf 1 1\n0\n";
    let mut solver = Solver::from_dimacs(input).unwrap();
    assert_eq!(solver.solve(), Verdict::Unsat);
}

#[test]
fn cli_reports_parse_errors_for_malformed_input() {
    assert!(Solver::from_dimacs("not a dimacs file").is_err());
}
