use tracing::{debug, instrument};

use crate::data::Lit;
use crate::propagate::StepOutcome;
use crate::pure_literal;
use crate::trail::UndoEntry;
use crate::Solver;

/// The outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Sat,
    Unsat,
    Timeout,
}

pub(crate) fn dpll(solver: &mut Solver) -> Verdict {
    run(solver)
}

#[instrument(skip_all)]
fn run(solver: &mut Solver) -> Verdict {
    if solver.deadline.exceeded() {
        debug!("deadline exceeded");
        return Verdict::Timeout;
    }

    let checkpoint = solver.trail.checkpoint();

    if solver.propagate() == StepOutcome::Conflict {
        solver.rewind(checkpoint);
        return Verdict::Unsat;
    }

    if pure_literal::pure_literal_pass(solver) == StepOutcome::Conflict {
        solver.rewind(checkpoint);
        return Verdict::Unsat;
    }

    if !sweep_satisfaction(solver) {
        return Verdict::Unsat;
    }

    if all_clauses_satisfied(solver) {
        return Verdict::Sat;
    }

    let var = match solver.heuristic.pick(&solver.assignment) {
        Some(v) => v,
        None => return Verdict::Unsat,
    };
    debug!(var = var.get(), "branching");

    let checkpoint2 = solver.trail.checkpoint();
    solver.force_assign(Lit::negative(var));
    let r1 = run(solver);
    if r1 != Verdict::Unsat {
        return r1;
    }

    solver.rewind(checkpoint2);
    solver.force_assign(Lit::positive(var));
    let r2 = run(solver);
    if r2 == Verdict::Unsat {
        solver.rewind(checkpoint);
    }
    r2
}

/// Re-scans for clauses the watcher-triggered marking in `propagate`/
/// `pure_literal_pass` didn't catch satisfied, and flips their flags.
/// Returns `false` if some unsatisfied clause has no literal left that could
/// ever satisfy it.
fn sweep_satisfaction(solver: &mut Solver) -> bool {
    for id in solver.formula.ids() {
        if solver.formula.clause(id).is_satisfied() {
            continue;
        }
        let literals = solver.formula.clause(id).literals().to_vec();
        if literals.iter().any(|&lit| solver.assignment.is_lit_satisfied(lit)) {
            solver.formula.clause_mut(id).set_satisfied(true);
            solver.trail.log(UndoEntry::ClauseSatisfy(id));
        } else if literals.iter().all(|&lit| solver.assignment.is_lit_unsatisfied(lit)) {
            return false;
        }
    }
    true
}

fn all_clauses_satisfied(solver: &Solver) -> bool {
    solver.formula.clauses().iter().all(|c| c.is_satisfied())
}
