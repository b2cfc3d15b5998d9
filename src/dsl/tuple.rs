//! Homogeneous tuples, `Tuple[T]`.

use crate::{
    errors::ExprResult,
    expr::{make_expression_constructor, Expr, ExprConstructor, KwArgs, Operation, Value},
    typing::{
        ty::{ExprTy, Ty},
        Signature,
    },
};

pub const CATEGORY: &'static str = "Tuple";

pub fn ty(item: Ty) -> Ty {
    Ty::expr(CATEGORY, vec![item])
}

lazy_static! {
    static ref FROM_ITEMS: Operation = Operation::new("Tuple.from_items");
    static ref FROM_ITEMS_EXPR: ExprConstructor = make_expression_constructor(
        "Tuple.from_items_expr",
        Signature::new(ty(Ty::var("T"))).variadic("items", Ty::var("T")),
    );
    static ref GET: ExprConstructor = make_expression_constructor(
        "Tuple.get",
        Signature::new(Ty::var("T"))
            .param("self", ty(Ty::var("T")))
            .param("index", super::integer::ty()),
    );
}

/// A tuple of `items` typed `Tuple[item_type]`.
///
/// The item type is given explicitly so that empty tuples are typed too; the
/// items themselves are not checked against it.
pub fn from_items(item_type: Ty, items: Vec<Value>) -> Expr {
    Expr::new(
        ExprTy::new(CATEGORY, vec![item_type]),
        FROM_ITEMS.clone(),
        items,
        KwArgs::new(),
    )
}

/// Like `from_items`, with the item type inferred from the items. Fails if
/// there are no items or if their types disagree.
pub fn from_items_expr(items: Vec<Value>) -> ExprResult<Expr> {
    FROM_ITEMS_EXPR.call_positional(items)
}

pub fn get(tuple: &Expr, index: &Expr) -> ExprResult<Expr> {
    GET.call_positional(args![tuple, index])
}
