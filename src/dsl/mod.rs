//! A small library of expression categories built on the core: integers,
//! numbers, homogeneous tuples, optionals and two-way choices.
//!
//! Each category is a module of constructor functions. Most of them go
//! through a signature-driven `ExprConstructor`; the ones whose result type
//! can't be inferred from the arguments (`Tuple::from_items`,
//! `Optional::none`, `Either::left`) take the type parameters explicitly and
//! build the node directly.
//!
//! Operation names are `Category.constructor`, so the directly built nodes
//! are named after the function that builds them (`Optional.none`,
//! `Either.left`, `Either.right`) rather than after a separate
//! expression-only helper. The two-way choice is called `Either` so that it
//! can't be confused with `Ty::Union`.

pub mod either;
pub mod integer;
pub mod number;
pub mod optional;
pub mod tuple;

use crate::typing::ty::Ty;

/// Shorthand for an unparameterized expression type such as `Integer`.
fn category(name: &str) -> Ty {
    Ty::expr(name, vec![])
}
