use crate::expr::{KwArgs, Value};

use super::{error::TypeError, sig::Signature, ty::Ty, unify};

/// Type information the expression builder needs about values and calls.
///
/// Both methods have structural default implementations; a DSL can
/// override them to plug in its own notion of value types.
pub trait TypeResolver {
    /// The exact concrete type of `value`. Expression nodes resolve to
    /// their parametrized expression type.
    fn resolve_type(&self, value: &Value) -> Ty {
        value.ty()
    }

    /// Solves the signature's type variables against the actual arguments
    /// and returns the concrete return type.
    fn infer_return_type(
        &self,
        sig: &Signature,
        args: &[Value],
        kwargs: &KwArgs,
    ) -> Result<Ty, TypeError> {
        unify::infer_return_type(self, sig, args, kwargs)
    }
}

/// The structural resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolver;

impl TypeResolver for Resolver {}

#[cfg(test)]
mod tests {
    use crate::{
        expr::{Expr, Operation, Value},
        typing::{
            error::TypeErrorKind,
            sig::Signature,
            ty::{ExprTy, Ty, TyVar},
        },
    };

    use super::{Resolver, TypeResolver};

    fn integer(i: i64) -> Expr {
        Expr::new(
            ExprTy::con("Integer"),
            Operation::new("Integer.from_int"),
            args![i],
            kwargs! {},
        )
    }

    #[test]
    fn test_resolve_type() {
        let r = Resolver;
        assert_eq!(r.resolve_type(&Value::Int(1)), Ty::int());
        assert_eq!(r.resolve_type(&Value::from("s")), Ty::string());
        assert_eq!(r.resolve_type(&Value::None), Ty::none());
        assert_eq!(
            r.resolve_type(&Value::Type(Ty::int())),
            Ty::ty_type(Ty::int())
        );
        assert_eq!(
            r.resolve_type(&integer(1).into()),
            Ty::expr("Integer", vec![])
        );
    }

    #[test]
    fn test_infer_generic_return() {
        let sig =
            Signature::new(Ty::expr("Tuple", vec![Ty::var("T")])).variadic("items", Ty::var("T"));
        let ret = Resolver
            .infer_return_type(&sig, &args![integer(1), integer(2)], &kwargs! {})
            .unwrap();
        assert_eq!(ret, Ty::expr("Tuple", vec![Ty::expr("Integer", vec![])]));
    }

    #[test]
    fn test_infer_from_keyword_value() {
        let sig =
            Signature::new(Ty::expr("Optional", vec![Ty::var("T")])).param("value", Ty::var("T"));
        let ret = Resolver
            .infer_return_type(&sig, &args![], &kwargs! { value => integer(3) })
            .unwrap();
        assert_eq!(ret, Ty::expr("Optional", vec![Ty::expr("Integer", vec![])]));
    }

    #[test]
    fn test_infer_underdetermined() {
        let sig =
            Signature::new(Ty::expr("Tuple", vec![Ty::var("T")])).variadic("items", Ty::var("T"));
        let err = Resolver
            .infer_return_type(&sig, &args![], &kwargs! {})
            .unwrap_err();
        assert_eq!(err.kind, TypeErrorKind::UnsolvableTyVar(TyVar::new("T")));
    }

    #[test]
    fn test_infer_inconsistent_reports_param() {
        let sig =
            Signature::new(Ty::expr("Tuple", vec![Ty::var("T")])).variadic("items", Ty::var("T"));
        let err = Resolver
            .infer_return_type(&sig, &args![integer(1), 2i64], &kwargs! {})
            .unwrap_err();
        assert_eq!(err.param.as_deref(), Some("items"));
        assert_eq!(
            err.message(),
            "argument `items`: type variable `T` is bound to `Integer` but also to `int`"
        );
    }

    struct Opaque;

    impl TypeResolver for Opaque {
        fn resolve_type(&self, _: &Value) -> Ty {
            Ty::con("opaque")
        }
    }

    #[test]
    fn test_custom_resolver_feeds_inference() {
        let sig = Signature::new(Ty::expr("Box", vec![Ty::var("T")])).param("x", Ty::var("T"));
        let ret = Opaque
            .infer_return_type(&sig, &args![1i64], &kwargs! {})
            .unwrap();
        assert_eq!(ret, Ty::expr("Box", vec![Ty::con("opaque")]));
    }
}
