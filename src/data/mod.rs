mod litvec;
mod var;
mod varvec;

pub use var::{Lit, Var};

pub(crate) use litvec::LitVec;
pub(crate) use varvec::VarVec;
