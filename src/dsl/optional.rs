use crate::{
    errors::ExprResult,
    expr::{make_expression_constructor, Expr, ExprConstructor, KwArgs, Operation, Value},
    typing::{
        ty::{ExprTy, Ty},
        Signature,
    },
};

pub const CATEGORY: &'static str = "Optional";

pub fn ty(t: Ty) -> Ty {
    Ty::expr(CATEGORY, vec![t])
}

lazy_static! {
    static ref SOME: ExprConstructor = make_expression_constructor(
        "Optional.some",
        Signature::new(ty(Ty::var("T"))).param("value", Ty::var("T")),
    );
    static ref NONE: Operation = Operation::new("Optional.none");
}

pub fn some<V: Into<Value>>(value: V) -> ExprResult<Expr> {
    SOME.call_positional(vec![value.into()])
}

/// The empty optional of type `Optional[t]`.
pub fn none(t: Ty) -> Expr {
    Expr::new(
        ExprTy::new(CATEGORY, vec![t]),
        NONE.clone(),
        vec![],
        KwArgs::new(),
    )
}
