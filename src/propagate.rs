use std::collections::VecDeque;

use crate::data::Lit;
use crate::formula::ClauseId;
use crate::trail::UndoEntry;
use crate::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    Ok,
    Conflict,
}

impl Solver {
    /// Two-watched-literal unit propagation. Seeds a FIFO queue from every
    /// currently unsatisfied clause with exactly one unassigned literal and
    /// no satisfied literal, then drains it, forcing literals and relocating
    /// watches as needed.
    pub(crate) fn propagate(&mut self) -> StepOutcome {
        let mut queue: VecDeque<Lit> = VecDeque::new();

        for id in self.formula.ids() {
            let clause = self.formula.clause(id);
            if clause.is_satisfied() {
                continue;
            }
            if clause.len() == 0 {
                return StepOutcome::Conflict;
            }

            let mut satisfied = false;
            let mut unassigned_lit = None;
            let mut unassigned_count = 0;
            for &lit in clause.literals() {
                if self.assignment.is_lit_satisfied(lit) {
                    satisfied = true;
                    break;
                }
                if self.assignment.is_lit_unassigned(lit) {
                    unassigned_count += 1;
                    unassigned_lit = Some(lit);
                }
            }
            if !satisfied && unassigned_count == 1 {
                queue.push_back(unassigned_lit.unwrap());
            }
        }

        while let Some(l) = queue.pop_front() {
            if self.assignment.is_lit_unassigned(l) {
                self.force_assign(l);
            }

            let not_l = -l;
            let watching: Vec<ClauseId> = self.watchers.get(not_l).to_vec();

            for c in watching {
                if self.formula.clause(c).is_satisfied() {
                    continue;
                }

                match self.other_watch(c, not_l) {
                    None => {
                        // The only registered watcher of `c` is `not_l` itself:
                        // a clause of size 1.
                        if self.clause_all_falsified(c) {
                            return StepOutcome::Conflict;
                        }
                        queue.push_back(not_l);
                    }
                    Some(other) => {
                        if self.assignment.is_lit_satisfied(other) {
                            continue;
                        }
                        match self.relocation_candidate(c, not_l, other) {
                            Some(n) => {
                                self.watchers.remove(not_l, c, &mut self.trail);
                                self.watchers.add(n, c, &mut self.trail);
                            }
                            None => {
                                if self.assignment.is_lit_unassigned(other) {
                                    self.force_assign(other);
                                    queue.push_back(other);
                                } else {
                                    debug_assert!(self.assignment.is_lit_unsatisfied(other));
                                    return StepOutcome::Conflict;
                                }
                            }
                        }
                    }
                }
            }
        }

        StepOutcome::Ok
    }

    /// Forces `lit` true, logs the assignment, and marks every clause that
    /// is watching `lit` and not yet satisfied as satisfied.
    pub(crate) fn force_assign(&mut self, lit: Lit) {
        self.assignment.assign(lit);
        self.trail.log(UndoEntry::Assignment(lit.var()));

        let watching: Vec<ClauseId> = self.watchers.get(lit).to_vec();
        for c in watching {
            if !self.formula.clause(c).is_satisfied() {
                self.formula.clause_mut(c).set_satisfied(true);
                self.trail.log(UndoEntry::ClauseSatisfy(c));
            }
        }
    }

    /// Finds the literal of `clause` other than `not_l` that is currently
    /// registered as a watcher of `clause`, by scanning the clause and
    /// consulting each candidate's watcher list.
    fn other_watch(&self, clause: ClauseId, not_l: Lit) -> Option<Lit> {
        self.formula
            .clause(clause)
            .literals()
            .iter()
            .copied()
            .find(|&m| m != not_l && self.watchers.get(m).contains(&clause))
    }

    fn clause_all_falsified(&self, clause: ClauseId) -> bool {
        self.formula
            .clause(clause)
            .literals()
            .iter()
            .all(|&lit| self.assignment.is_lit_unsatisfied(lit))
    }

    /// Looks for a literal of `clause`, other than `not_l` and `other`, that
    /// is unassigned or already satisfies the clause — a new home for the
    /// watch currently held by `not_l`.
    fn relocation_candidate(&self, clause: ClauseId, not_l: Lit, other: Lit) -> Option<Lit> {
        self.formula
            .clause(clause)
            .literals()
            .iter()
            .copied()
            .find(|&n| {
                n != not_l
                    && n != other
                    && (self.assignment.is_lit_unassigned(n) || self.assignment.is_lit_satisfied(n))
            })
    }
}
