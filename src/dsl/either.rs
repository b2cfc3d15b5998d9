//! `Either[T, U]` holds a value of one of two types. Both sides are named
//! explicitly since only one of them can be inferred from the value.

use crate::{
    expr::{Expr, KwArgs, Operation, Value},
    typing::ty::{ExprTy, Ty},
};

pub const CATEGORY: &'static str = "Either";

pub fn ty(left: Ty, right: Ty) -> Ty {
    Ty::expr(CATEGORY, vec![left, right])
}

lazy_static! {
    static ref LEFT: Operation = Operation::new("Either.left");
    static ref RIGHT: Operation = Operation::new("Either.right");
}

fn build(op: &Operation, left_t: Ty, right_t: Ty, value: Value) -> Expr {
    Expr::new(
        ExprTy::new(CATEGORY, vec![left_t, right_t]),
        op.clone(),
        vec![value],
        KwArgs::new(),
    )
}

pub fn left<V: Into<Value>>(left_t: Ty, right_t: Ty, value: V) -> Expr {
    build(&LEFT, left_t, right_t, value.into())
}

pub fn right<V: Into<Value>>(left_t: Ty, right_t: Ty, value: V) -> Expr {
    build(&RIGHT, left_t, right_t, value.into())
}
