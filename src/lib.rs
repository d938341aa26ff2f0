//! A DPLL satisfiability solver: two-watched-literal unit propagation, pure
//! literal elimination, pairwise subsumption pre-processing and a static
//! occurrence-count branching order, over a flat clause store mutated in
//! place and unwound through an undo log.

mod assignment;
mod data;
mod deadline;
mod dimacs;
mod driver;
mod formula;
mod heuristic;
mod propagate;
mod pure_literal;
mod subsumption;
mod trail;
mod watch;

use std::error::Error;
use std::time::Duration;

use assignment::Assignment;
use deadline::{Deadline, DEFAULT_BUDGET};
use formula::Formula;
use heuristic::Heuristic;
use trail::{Checkpoint, Trail, UndoEntry};
use watch::WatcherIndex;

pub use data::{Lit, Var};
pub use dimacs::{Dimacs, DimacsError};
pub use driver::Verdict;

/// The search engine: a formula store, watcher index, assignment vector and
/// trail, mutated in place over the course of the DPLL recursion.
pub struct Solver {
    formula: Formula,
    assignment: Assignment,
    trail: Trail,
    watchers: WatcherIndex,
    heuristic: Heuristic,
    deadline: Deadline,
}

/// A satisfying assignment, one entry per variable in `1..=num_vars`, signed
/// the way DIMACS models are usually printed (`3` means true, `-3` false).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model(Vec<i32>);

impl Model {
    pub fn lit(&self, var: u32) -> bool {
        self.0[(var - 1) as usize] > 0
    }

    pub fn as_vec(&self) -> &[i32] {
        &self.0
    }
}

impl Solver {
    /// Builds a solver over `formula`, running subsumption and populating
    /// watchers and the branching heuristic, with a CPU-time budget of
    /// `budget` for the subsequent [`solve`](Solver::solve) call.
    pub fn new(mut formula: Formula, budget: Duration) -> Self {
        subsumption::subsume(&mut formula);

        let num_vars = formula.num_vars();
        let mut assignment = Assignment::new();
        let mut watchers = WatcherIndex::new();
        for i in 1..=num_vars {
            let v = Var::new(i);
            assignment.expand(v);
            watchers.expand(Lit::positive(v));
        }

        for id in formula.ids() {
            let literals = formula.clause(id).literals();
            if let Some(&first) = literals.first() {
                watchers.raw_add(first, id);
            }
            if literals.len() >= 2 {
                watchers.raw_add(literals[1], id);
            }
        }

        let heuristic = Heuristic::build(&formula);
        let deadline = Deadline::new(budget);

        Solver { formula, assignment, trail: Trail::new(), watchers, heuristic, deadline }
    }

    /// Parses `input` as DIMACS CNF and builds a solver with the default
    /// 3600-second CPU-time budget.
    pub fn from_dimacs(input: &str) -> Result<Self, Box<dyn Error>> {
        Self::from_dimacs_with_budget(input, DEFAULT_BUDGET)
    }

    /// Parses `input` as DIMACS CNF and builds a solver with an explicit
    /// CPU-time budget. Exists so tests and embedders can exercise the
    /// deadline without waiting an hour.
    pub fn from_dimacs_with_budget(input: &str, budget: Duration) -> Result<Self, Box<dyn Error>> {
        let formula = Dimacs::parse(input)?;
        Ok(Solver::new(formula, budget))
    }

    pub fn solve(&mut self) -> Verdict {
        driver::dpll(self)
    }

    pub fn num_vars(&self) -> u32 {
        self.formula.num_vars()
    }

    pub fn num_clauses(&self) -> usize {
        self.formula.num_clauses()
    }

    /// CPU time elapsed since construction, suitable for the CLI's
    /// "CPU time used" line.
    pub fn elapsed_cpu_time(&self) -> Duration {
        self.deadline.elapsed()
    }

    /// Reads off the current assignment as a [`Model`]. Only meaningful to
    /// call once [`solve`](Solver::solve) has returned [`Verdict::Sat`].
    pub fn model(&self) -> Model {
        Model(self.assignment.as_model(self.formula.num_vars()))
    }

    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint) {
        while self.trail.len() > checkpoint.position() {
            match self.trail.pop().unwrap() {
                UndoEntry::Assignment(v) => self.assignment.unassign(v),
                UndoEntry::ClauseSatisfy(c) => self.formula.clause_mut(c).set_satisfied(false),
                UndoEntry::WatchAdd(lit, c) => self.watchers.undo_add(lit, c),
                UndoEntry::WatchRemove(lit, c) => self.watchers.undo_remove(lit, c),
            }
        }
    }
}
