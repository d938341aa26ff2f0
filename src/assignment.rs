use crate::data::{Lit, Var, VarVec};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum VarValue {
    Unassigned,
    False,
    True,
}

impl Default for VarValue {
    fn default() -> Self {
        VarValue::Unassigned
    }
}

/// The assignment vector: variable -> {unassigned, false, true}. Mutated
/// only through the trail.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Assignment(VarVec<VarValue>);

impl Assignment {
    pub fn new() -> Self {
        Assignment(VarVec::new())
    }

    pub fn expand(&mut self, v: Var) {
        self.0.expand(v, VarValue::Unassigned);
    }

    pub fn is_var_unassigned(&self, v: Var) -> bool {
        self.0[v] == VarValue::Unassigned
    }

    pub fn assign(&mut self, lit: Lit) {
        debug_assert!(self.is_var_unassigned(lit.var()));
        self.0[lit.var()] = if lit.is_pos() { VarValue::True } else { VarValue::False };
    }

    pub fn unassign(&mut self, v: Var) {
        self.0[v] = VarValue::Unassigned;
    }

    pub fn is_lit_satisfied(&self, lit: Lit) -> bool {
        match self.0[lit.var()] {
            VarValue::True => lit.is_pos(),
            VarValue::False => lit.is_neg(),
            VarValue::Unassigned => false,
        }
    }

    pub fn is_lit_unsatisfied(&self, lit: Lit) -> bool {
        match self.0[lit.var()] {
            VarValue::Unassigned => false,
            VarValue::True => lit.is_neg(),
            VarValue::False => lit.is_pos(),
        }
    }

    pub fn is_lit_unassigned(&self, lit: Lit) -> bool {
        self.is_var_unassigned(lit.var())
    }

    pub fn as_model(&self, num_vars: u32) -> Vec<i32> {
        (1..=num_vars)
            .map(|i| {
                let v = Var::new(i);
                let i = i as i32;
                match self.0[v] {
                    VarValue::True => i,
                    _ => -i,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_until_assigned() {
        let mut a = Assignment::new();
        let v = Var::new(1);
        a.expand(v);
        assert!(a.is_var_unassigned(v));
        a.assign(Lit::positive(v));
        assert!(!a.is_var_unassigned(v));
        assert!(a.is_lit_satisfied(Lit::positive(v)));
        assert!(a.is_lit_unsatisfied(Lit::negative(v)));
    }

    #[test]
    fn unassign_reverts_to_unassigned() {
        let mut a = Assignment::new();
        let v = Var::new(1);
        a.expand(v);
        a.assign(Lit::negative(v));
        a.unassign(v);
        assert!(a.is_var_unassigned(v));
        assert!(!a.is_lit_satisfied(Lit::positive(v)));
        assert!(!a.is_lit_unsatisfied(Lit::positive(v)));
    }
}
