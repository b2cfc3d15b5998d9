use crate::{
    errors::ExprResult,
    expr::{make_expression_constructor, Expr, ExprConstructor},
    typing::{ty::Ty, Signature},
};

pub const CATEGORY: &'static str = "Integer";

pub fn ty() -> Ty {
    super::category(CATEGORY)
}

lazy_static! {
    static ref FROM_INT: ExprConstructor = make_expression_constructor(
        "Integer.from_int",
        Signature::new(ty()).param("i", Ty::int()),
    );
    static ref ADD: ExprConstructor = make_expression_constructor(
        "Integer.add",
        Signature::new(ty()).param("self", ty()).param("other", ty()),
    );
    static ref TO_INT: ExprConstructor = make_expression_constructor(
        "Integer.to_int",
        Signature::new(Ty::plain_or_literal(Ty::int())).param("self", ty()),
    );
}

pub fn from_int(i: i64) -> ExprResult<Expr> {
    FROM_INT.call_positional(args![i])
}

pub fn add(lhs: &Expr, rhs: &Expr) -> ExprResult<Expr> {
    ADD.call_positional(args![lhs, rhs])
}

/// The node evaluates to a plain `int`, so its type is `Literal[int]`.
pub fn to_int(e: &Expr) -> ExprResult<Expr> {
    TO_INT.call_positional(args![e])
}

/// The literal carried by an `Integer.from_int` node.
pub fn literal(e: &Expr) -> Option<i64> {
    if e.op().qualname() == FROM_INT.op().qualname() {
        e.args().first().and_then(|v| v.as_int())
    } else {
        None
    }
}
