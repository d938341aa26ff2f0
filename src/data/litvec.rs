use super::Lit;

/// Dense storage indexed by signed literal: one slot per (variable, polarity)
/// pair, with the two polarities of a variable placed next to each other.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LitVec<T>(Vec<T>);

impl<T> LitVec<T> {
    pub fn new() -> Self {
        LitVec(Vec::new())
    }
}

impl<T: Clone> LitVec<T> {
    /// Resize so that `l` is a valid index.
    pub fn expand(&mut self, l: Lit, val: T) {
        let len = lit_to_idx(l) + 1;
        if len >= self.0.len() {
            self.0.resize(len, val)
        }
    }
}

impl<T> Default for LitVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lit_to_idx(lit: Lit) -> usize {
    let i = lit.get();
    // There are no 0 or -0 literals, so the smallest magnitude is 1; subtract
    // two to keep the index zero-based.
    let idx = (i < 0) as i32 + 2 * i.abs() - 2;
    debug_assert!(idx >= 0);
    idx as usize
}

impl<T> std::ops::Index<Lit> for LitVec<T> {
    type Output = T;

    fn index(&self, index: Lit) -> &Self::Output {
        &self.0[lit_to_idx(index)]
    }
}

impl<T> std::ops::IndexMut<Lit> for LitVec<T> {
    fn index_mut(&mut self, index: Lit) -> &mut Self::Output {
        &mut self.0[lit_to_idx(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Lit;

    #[test]
    fn indices_interleave_polarities() {
        assert_eq!(lit_to_idx(Lit::new(1)), 0);
        assert_eq!(lit_to_idx(Lit::new(-1)), 1);
        assert_eq!(lit_to_idx(Lit::new(2)), 2);
        assert_eq!(lit_to_idx(Lit::new(-2)), 3);
    }

    #[test]
    fn expand_then_index() {
        let mut v: LitVec<i32> = LitVec::new();
        v.expand(Lit::new(3), 0);
        v[Lit::new(1)] = 7;
        v[Lit::new(-2)] = -4;
        assert_eq!(v[Lit::new(1)], 7);
        assert_eq!(v[Lit::new(-2)], -4);
    }
}
