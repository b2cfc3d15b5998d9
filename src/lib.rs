#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod macros;

pub mod config;
pub mod dsl;
pub mod errors;
pub mod expr;
pub mod logger;
pub mod transform;
pub mod typing;

pub use errors::{ExprError, ExprErrorKind, ExprResult};
pub use expr::{
    build_expression, extract_expression_type, make_expression_constructor, ExprConstructor,
};
pub use expr::{Expr, KwArgs, Operation, Value};
pub use transform::{fold, fold_observed, replace, try_fold, FoldObserver, Replacer, Trace};
pub use typing::{
    ty::{ExprTy, Ty, TyVar},
    Resolver, Signature, TypeError, TypeResolver,
};
