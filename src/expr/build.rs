use crate::{
    errors::{ExprError, ExprResult},
    typing::{
        ty::{ExprTy, Ty},
        Resolver, Signature, TypeResolver,
    },
};

use super::{Expr, KwArgs, Operation, Value};

/// The expression type named by a declared return type.
///
/// Either the type is an expression type itself, or it is a union with
/// exactly one expression member (the "plain value or expression" pattern,
/// `int | Literal[int]`).
pub fn extract_expression_type(ty: &Ty) -> ExprResult<ExprTy> {
    match ty {
        Ty::Expr(e) => Ok(e.clone()),
        Ty::Union(members) => {
            let exprs = members.iter().filter_map(Ty::as_expr).collect::<Vec<_>>();
            if exprs.len() != 1 {
                return Err(ExprError::expression_type(format!(
                    "union must contain exactly one expression type, not {}: {}",
                    exprs.len(),
                    ty
                )));
            }
            Ok(exprs[0].clone())
        }
        _ => Err(ExprError::expression_type(format!(
            "`{}` is not an expression type",
            ty
        ))),
    }
}

/// Builds the node for `op(args, kwargs)` whose declared return type
/// resolved to `ret`. The expression type must be fully resolved.
pub fn build_expression(
    op: Operation,
    args: Vec<Value>,
    kwargs: KwArgs,
    ret: &Ty,
) -> ExprResult<Expr> {
    let ty = extract_expression_type(ret).map_err(|e| e.with_op(op.qualname()))?;
    if !ty.is_concrete() {
        return Err(
            ExprError::type_resolution(format!("result type `{}` is not concrete", ty))
                .with_op(op.qualname()),
        );
    }
    log::trace!("build {}: {}", op, ty);
    Ok(Expr::new(ty, op, args, kwargs))
}

/// Calling an `ExprConstructor` produces an expression node instead of
/// running anything: the declared signature is solved against the actual
/// arguments and the node is typed with the resulting return type.
#[derive(Clone, Debug)]
pub struct ExprConstructor<R = Resolver> {
    op: Operation,
    sig: Signature,
    resolver: R,
}

pub fn make_expression_constructor<S: AsRef<str>>(qualname: S, sig: Signature) -> ExprConstructor {
    ExprConstructor::new(Operation::new(qualname), sig)
}

impl ExprConstructor {
    pub fn new(op: Operation, sig: Signature) -> ExprConstructor {
        ExprConstructor {
            op,
            sig,
            resolver: Resolver,
        }
    }
}

impl<R: TypeResolver> ExprConstructor<R> {
    /// Replaces the resolver used to infer return types.
    pub fn with_resolver<T: TypeResolver>(self, resolver: T) -> ExprConstructor<T> {
        ExprConstructor {
            op: self.op,
            sig: self.sig,
            resolver,
        }
    }

    #[inline(always)]
    pub fn op(&self) -> &Operation {
        &self.op
    }

    pub fn call(&self, args: Vec<Value>, kwargs: KwArgs) -> ExprResult<Expr> {
        let ret = self
            .resolver
            .infer_return_type(&self.sig, &args, &kwargs)
            .map_err(|e| ExprError::from(e).with_op(self.op.qualname()))?;
        build_expression(self.op.clone(), args, kwargs, &ret)
    }

    pub fn call_positional(&self, args: Vec<Value>) -> ExprResult<Expr> {
        self.call(args, KwArgs::new())
    }
}
