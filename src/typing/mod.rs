mod error;
mod resolve;
mod sig;
mod subst;

pub mod ty;
pub mod unify;

pub use error::*;
pub use resolve::*;
pub use sig::*;
pub use subst::*;
