use crate::data::{Lit, LitVec};
use crate::formula::ClauseId;
use crate::trail::{Trail, UndoEntry};

/// For every signed literal, the clauses currently watching it. A clause of
/// size >= 2 is registered under exactly two of its own literals; a clause
/// of size 1 under its single literal; a clause of size 0 under none.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct WatcherIndex(LitVec<Vec<ClauseId>>);

impl WatcherIndex {
    pub fn new() -> Self {
        WatcherIndex(LitVec::new())
    }

    pub fn expand(&mut self, lit: Lit) {
        self.0.expand(lit, Vec::new());
        self.0.expand(-lit, Vec::new());
    }

    pub fn get(&self, lit: Lit) -> &[ClauseId] {
        &self.0[lit]
    }

    /// Registers `clause` under `lit` without logging. Used only to build
    /// the initial watcher lists, before the trail exists to undo anything.
    pub fn raw_add(&mut self, lit: Lit, clause: ClauseId) {
        self.0[lit].push(clause);
    }

    /// Registers `clause` under `lit`, logging the mutation for rewind.
    pub fn add(&mut self, lit: Lit, clause: ClauseId, trail: &mut Trail) {
        self.0[lit].push(clause);
        trail.log(UndoEntry::WatchAdd(lit, clause));
    }

    /// Removes the first occurrence of `clause` from `lit`'s list, logging
    /// the mutation for rewind.
    pub fn remove(&mut self, lit: Lit, clause: ClauseId, trail: &mut Trail) {
        let pos = self.0[lit]
            .iter()
            .position(|&c| c == clause)
            .expect("watcher list missing a clause it supposedly watches");
        self.0[lit].remove(pos);
        trail.log(UndoEntry::WatchRemove(lit, clause));
    }

    /// Undoes an `add`: drops the first occurrence, without logging.
    pub(crate) fn undo_add(&mut self, lit: Lit, clause: ClauseId) {
        let pos = self.0[lit]
            .iter()
            .position(|&c| c == clause)
            .expect("undoing a watch-add that never happened");
        self.0[lit].remove(pos);
    }

    /// Undoes a `remove`: appends the clause back, without logging.
    pub(crate) fn undo_remove(&mut self, lit: Lit, clause: ClauseId) {
        self.0[lit].push(clause);
    }
}
