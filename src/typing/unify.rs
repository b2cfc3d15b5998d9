//! Matching of declared (possibly generic) types against the concrete
//! types of actual arguments.
//!
//! Matching is one-way: only variables on the declared side are bound, and
//! actual types are expected to be concrete.
use crate::expr::{KwArgs, Value};

use super::{
    error::TypeError,
    resolve::TypeResolver,
    sig::Signature,
    subst::{Subst, Substitutable},
    ty::{Ty, TyVar},
};

fn bind_var(var: &TyVar, actual: &Ty, subst: &mut Subst) -> Result<(), TypeError> {
    if let Some(bound) = subst.get(var) {
        if bound == actual {
            return Ok(());
        }
        return Err(TypeError::inconsistent(
            var.clone(),
            bound.clone(),
            actual.clone(),
        ));
    }

    if let Ty::Var(v) = actual {
        if v == var {
            // Trivial equality.
            return Ok(());
        }
    }

    if actual.free_vars().contains(&var) {
        return Err(TypeError::recursive_unify(var.clone(), actual.clone()));
    }

    subst.insert(var.clone(), actual.clone());
    Ok(())
}

/// Matches `declared` against `actual`, extending `subst` with the type
/// variables this solves.
///
/// On failure `subst` may hold partial bindings; callers that retry with an
/// alternative must work on a copy.
pub fn match_ty(declared: &Ty, actual: &Ty, subst: &mut Subst) -> Result<(), TypeError> {
    match (declared, actual) {
        (Ty::Var(v), _) => bind_var(v, actual, subst),

        (Ty::Any, _) => Ok(()),

        (Ty::Union(members), _) => match_union(declared, members, actual, subst),

        (Ty::Const(a), Ty::Const(b)) if a == b => Ok(()),

        (Ty::Type(a), Ty::Type(b)) => match_ty(a, b, subst),

        (Ty::Expr(a), Ty::Expr(b))
            if a.category == b.category && a.params.len() == b.params.len() =>
        {
            for (p, q) in a.params.iter().zip(b.params.iter()) {
                match_ty(p, q, subst)?;
            }
            Ok(())
        }

        _ => {
            let mut expected = declared.clone();
            expected.apply_subst(subst);
            Err(TypeError::mismatch(expected, actual.clone()))
        }
    }
}

// Structured members are tried before bare variables, so `T | Literal[T]`
// against `Literal[int]` solves `T = int` rather than `T = Literal[int]`.
fn match_union(
    declared: &Ty,
    members: &[Ty],
    actual: &Ty,
    subst: &mut Subst,
) -> Result<(), TypeError> {
    let (vars, structured): (Vec<&Ty>, Vec<&Ty>) = members.iter().partition(|m| m.is_tyvar());
    for member in structured.into_iter().chain(vars) {
        let mut attempt = subst.clone();
        if match_ty(member, actual, &mut attempt).is_ok() {
            *subst = attempt;
            return Ok(());
        }
    }

    let mut expected = declared.clone();
    expected.apply_subst(subst);
    Err(TypeError::mismatch(expected, actual.clone()))
}

/// Solves the signature's type variables from the actual arguments and
/// returns the declared return type with the solution substituted.
pub fn infer_return_type<R: TypeResolver + ?Sized>(
    resolver: &R,
    sig: &Signature,
    args: &[Value],
    kwargs: &KwArgs,
) -> Result<Ty, TypeError> {
    let mut subst = Subst::new();
    for (param, value) in sig.bind(args, kwargs)? {
        let actual = resolver.resolve_type(value);
        match_ty(&param.ty, &actual, &mut subst).map_err(|e| e.with_param(&param.name))?;
    }

    let mut ret = sig.ret.clone();
    ret.apply_subst(&subst);
    if let Some(v) = ret.free_vars().into_iter().next() {
        return Err(TypeError::tyvar(v.clone()));
    }

    log::debug!("infer {}: {} => {}", sig, subst, ret);
    Ok(ret)
}
