use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::subst::{Subst, Substitutable};

/// Category name of the literal wrapper, `Literal[T]`.
pub const LITERAL_CATEGORY: &'static str = "Literal";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TyVar(pub String);

impl TyVar {
    pub fn new<S: Into<String>>(s: S) -> TyVar {
        TyVar(s.into())
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for TyVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The type of an expression node: an expression category (`Integer`,
/// `Tuple`, `Literal`, ...) applied to its type parameters.
///
/// Two nodes of the same category but with different parameters, such as
/// `Tuple[Integer]` and `Tuple[Number]`, have different types.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExprTy {
    pub category: String,
    pub params: Vec<Ty>,
}

impl Display for ExprTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.category)
        } else {
            write!(f, "{}[{}]", self.category, self.params.iter().join(", "))
        }
    }
}

impl ExprTy {
    pub fn new<S: Into<String>>(category: S, params: Vec<Ty>) -> ExprTy {
        ExprTy {
            category: category.into(),
            params,
        }
    }

    /// Expression category without type parameters.
    #[inline(always)]
    pub fn con<S: Into<String>>(category: S) -> ExprTy {
        ExprTy::new(category, vec![])
    }

    /// `Literal[ty]`: an expression computing a plain value of type `ty`.
    pub fn literal(ty: Ty) -> ExprTy {
        ExprTy::new(LITERAL_CATEGORY, vec![ty])
    }

    pub fn is_literal(&self) -> bool {
        self.category == LITERAL_CATEGORY && self.params.len() == 1
    }

    pub fn is_concrete(&self) -> bool {
        self.params.iter().all(Ty::is_concrete)
    }
}

impl Substitutable for ExprTy {
    fn apply_subst(&mut self, subst: &Subst) {
        self.params.apply_subst(subst)
    }

    fn free_vars(&self) -> Vec<&TyVar> {
        self.params.free_vars()
    }
}

/// Structural type descriptor.
///
/// Host values (`int`, `bool`, ...) are constants, expression categories
/// are `Expr`, and `Type` is the type of an argument that is itself a type
/// (e.g. the item type handed to a tuple constructor).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ty {
    // Unsolved type variable in a declared signature.
    Var(TyVar),

    // Plain host value types.
    Const(String),

    // Expression categories with their parameters.
    Expr(ExprTy),

    // `type[T]`
    Type(Box<Ty>),

    // Any of the member types.
    Union(Vec<Ty>),

    // Accepts every value, never appears in a resolved type.
    Any,
}

impl Display for Ty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ty::Var(v) => write!(f, "{}", v),
            Ty::Const(s) => write!(f, "{}", s),
            Ty::Expr(e) => write!(f, "{}", e),
            Ty::Type(t) => write!(f, "type[{}]", t),
            Ty::Union(tys) => write!(f, "{}", tys.iter().join(" | ")),
            Ty::Any => write!(f, "any"),
        }
    }
}

impl From<ExprTy> for Ty {
    fn from(e: ExprTy) -> Ty {
        Ty::Expr(e)
    }
}

impl Ty {
    #[inline(always)]
    pub fn var<S: Into<String>>(s: S) -> Ty {
        Ty::Var(TyVar::new(s))
    }

    #[inline(always)]
    pub fn con<S: Into<String>>(s: S) -> Ty {
        Ty::Const(s.into())
    }

    #[inline(always)]
    pub fn int() -> Ty {
        Ty::con("int")
    }

    #[inline(always)]
    pub fn bool() -> Ty {
        Ty::con("bool")
    }

    #[inline(always)]
    pub fn string() -> Ty {
        Ty::con("str")
    }

    #[inline(always)]
    pub fn none() -> Ty {
        Ty::con("none")
    }

    pub fn expr<S: Into<String>>(category: S, params: Vec<Ty>) -> Ty {
        Ty::Expr(ExprTy::new(category, params))
    }

    pub fn ty_type(ty: Ty) -> Ty {
        Ty::Type(Box::new(ty))
    }

    pub fn literal(ty: Ty) -> Ty {
        Ty::Expr(ExprTy::literal(ty))
    }

    /// `ty | Literal[ty]`: either a plain value or an expression producing one.
    pub fn plain_or_literal(ty: Ty) -> Ty {
        let lit = Ty::literal(ty.clone());
        Ty::Union(vec![ty, lit])
    }

    pub fn is_expr(&self) -> bool {
        matches!(self, Ty::Expr(_))
    }

    pub fn is_tyvar(&self) -> bool {
        matches!(self, Ty::Var(_))
    }

    /// A type is concrete when neither a type variable nor `any` occurs
    /// in it.
    pub fn is_concrete(&self) -> bool {
        match self {
            Ty::Var(_) | Ty::Any => false,
            Ty::Const(_) => true,
            Ty::Expr(e) => e.is_concrete(),
            Ty::Type(t) => t.is_concrete(),
            Ty::Union(tys) => tys.iter().all(Ty::is_concrete),
        }
    }

    pub fn as_expr(&self) -> Option<&ExprTy> {
        match self {
            Ty::Expr(e) => Some(e),
            _ => None,
        }
    }
}

impl Substitutable for Ty {
    fn apply_subst(&mut self, subst: &Subst) {
        match self {
            Ty::Var(v) => {
                if let Some(t) = subst.get(v).cloned() {
                    *self = t;
                }
            }
            Ty::Expr(e) => e.apply_subst(subst),
            Ty::Type(t) => t.apply_subst(subst),
            Ty::Union(tys) => tys.apply_subst(subst),
            Ty::Const(_) | Ty::Any => {}
        }
    }

    fn free_vars(&self) -> Vec<&TyVar> {
        match self {
            Ty::Var(v) => vec![v],
            Ty::Expr(e) => e.free_vars(),
            Ty::Type(t) => t.free_vars(),
            Ty::Union(tys) => tys.free_vars(),
            Ty::Const(_) | Ty::Any => vec![],
        }
    }
}
