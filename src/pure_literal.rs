use crate::data::{Lit, Var};
use crate::propagate::StepOutcome;
use crate::trail::UndoEntry;
use crate::Solver;

/// Assigns every variable that, among currently unsatisfied clauses, occurs
/// in only one polarity, then marks clauses containing such a literal
/// satisfied. Never reports a conflict, but the driver still runs it between
/// propagation and branching because it can shrink the live clause set.
pub(crate) fn pure_literal_pass(solver: &mut Solver) -> StepOutcome {
    let n = solver.formula.num_vars() as usize;
    let mut seen_pos = vec![false; n + 1];
    let mut seen_neg = vec![false; n + 1];

    for clause in solver.formula.clauses() {
        if clause.is_satisfied() {
            continue;
        }
        for &lit in clause.literals() {
            if solver.assignment.is_lit_unassigned(lit) {
                if lit.is_pos() {
                    seen_pos[lit.var().index()] = true;
                } else {
                    seen_neg[lit.var().index()] = true;
                }
            }
        }
    }

    let mut pure = vec![false; n + 1];
    let mut any_pure = false;
    for i in 1..=n as u32 {
        let var = Var::new(i);
        if !solver.assignment.is_var_unassigned(var) {
            continue;
        }
        let lit = match (seen_pos[var.index()], seen_neg[var.index()]) {
            (true, false) => Some(Lit::positive(var)),
            (false, true) => Some(Lit::negative(var)),
            _ => None,
        };
        if let Some(lit) = lit {
            solver.assignment.assign(lit);
            solver.trail.log(UndoEntry::Assignment(var));
            pure[var.index()] = true;
            any_pure = true;
        }
    }

    if any_pure {
        for id in solver.formula.ids() {
            if solver.formula.clause(id).is_satisfied() {
                continue;
            }
            let is_pure_clause = solver
                .formula
                .clause(id)
                .literals()
                .iter()
                .any(|lit| pure[lit.var().index()]);
            if is_pure_clause {
                solver.formula.clause_mut(id).set_satisfied(true);
                solver.trail.log(UndoEntry::ClauseSatisfy(id));
            }
        }
    }

    StepOutcome::Ok
}
