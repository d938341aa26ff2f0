use crate::assignment::Assignment;
use crate::data::Var;
use crate::formula::Formula;

/// Static descending-occurrence-count branching order, computed once after
/// subsumption. Ties break by ascending variable id.
#[derive(Debug, Clone)]
pub(crate) struct Heuristic {
    order: Vec<Var>,
}

impl Heuristic {
    pub fn build(formula: &Formula) -> Self {
        let n = formula.num_vars() as usize;
        let mut counts = vec![0u32; n + 1];
        for clause in formula.clauses() {
            for &lit in clause.literals() {
                counts[lit.var().index()] += 1;
            }
        }

        let mut order: Vec<Var> = (1..=n as u32).map(Var::new).collect();
        order.sort_by(|&a, &b| {
            counts[a.index()]
                .cmp(&counts[b.index()])
                .reverse()
                .then(a.get().cmp(&b.get()))
        });

        Heuristic { order }
    }

    pub fn pick(&self, assignment: &Assignment) -> Option<Var> {
        self.order.iter().copied().find(|&v| assignment.is_var_unassigned(v))
    }
}
