use std::collections::HashSet;

use crate::formula::Formula;

/// Runs once, before watchers exist and before the heuristic is built.
/// Clause `i` is dropped if some other clause `j` has a literal set that is
/// a subset of `i`'s and is no larger than `i`.
pub(crate) fn subsume(formula: &mut Formula) {
    let sets: Vec<HashSet<i32>> = formula
        .clauses()
        .iter()
        .map(|c| c.literals().iter().map(|l| l.get()).collect())
        .collect();

    let n = sets.len();
    let mut removable = vec![false; n];

    for i in 0..n {
        if removable[i] {
            continue;
        }
        for j in 0..n {
            if i == j || removable[j] {
                continue;
            }
            if sets[i].len() >= sets[j].len() && sets[j].is_subset(&sets[i]) {
                removable[i] = true;
                break;
            }
        }
    }

    let mut idx = 0usize;
    formula.retain_clauses(move |_| {
        let keep = !removable[idx];
        idx += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Lit;
    use crate::formula::ClauseId;

    #[test]
    fn duplicate_clause_collapses_to_one() {
        let mut formula = Formula::new(2);
        formula.push_clause(vec![Lit::new(1), Lit::new(2)]);
        formula.push_clause(vec![Lit::new(1), Lit::new(2)]);
        subsume(&mut formula);
        assert_eq!(formula.num_clauses(), 1);
    }

    #[test]
    fn subset_clause_removes_the_superset() {
        let mut formula = Formula::new(3);
        formula.push_clause(vec![Lit::new(1), Lit::new(2), Lit::new(3)]);
        formula.push_clause(vec![Lit::new(1), Lit::new(2)]);
        subsume(&mut formula);
        assert_eq!(formula.num_clauses(), 1);
        assert_eq!(formula.clause(ClauseId::new(0)).len(), 2);
    }

    #[test]
    fn unrelated_clauses_all_survive() {
        let mut formula = Formula::new(3);
        formula.push_clause(vec![Lit::new(1), Lit::new(2)]);
        formula.push_clause(vec![Lit::new(2), Lit::new(3)]);
        subsume(&mut formula);
        assert_eq!(formula.num_clauses(), 2);
    }
}
