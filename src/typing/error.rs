use super::ty::{Ty, TyVar};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeErrorKind {
    Mismatch(Ty, Ty),
    Inconsistent(TyVar, Ty, Ty),
    UnsolvableTyVar(TyVar),
    RecursiveUnification(TyVar, Ty),
    TooManyArgs(usize, usize),
    MissingArg(String),
    UnknownKeyword(String),
    DuplicateArg(String),
}

/// Failure to bind or unify a call against a declared signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub param: Option<String>,
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TypeError {}

impl TypeError {
    fn from_kind(kind: TypeErrorKind) -> Self {
        Self { kind, param: None }
    }

    pub fn mismatch(expected: Ty, found: Ty) -> Self {
        Self::from_kind(TypeErrorKind::Mismatch(expected, found))
    }

    pub fn inconsistent(v: TyVar, bound: Ty, found: Ty) -> Self {
        Self::from_kind(TypeErrorKind::Inconsistent(v, bound, found))
    }

    pub fn tyvar(v: TyVar) -> Self {
        Self::from_kind(TypeErrorKind::UnsolvableTyVar(v))
    }

    pub fn recursive_unify(v: TyVar, ty: Ty) -> Self {
        Self::from_kind(TypeErrorKind::RecursiveUnification(v, ty))
    }

    pub fn too_many_args(expected: usize, found: usize) -> Self {
        Self::from_kind(TypeErrorKind::TooManyArgs(expected, found))
    }

    pub fn missing_arg<S: Into<String>>(name: S) -> Self {
        Self::from_kind(TypeErrorKind::MissingArg(name.into()))
    }

    pub fn unknown_keyword<S: Into<String>>(name: S) -> Self {
        Self::from_kind(TypeErrorKind::UnknownKeyword(name.into()))
    }

    pub fn duplicate_arg<S: Into<String>>(name: S) -> Self {
        Self::from_kind(TypeErrorKind::DuplicateArg(name.into()))
    }

    /// Attaches the parameter being matched, if none was recorded yet.
    pub fn with_param<S: Into<String>>(mut self, name: S) -> Self {
        if self.param.is_none() {
            self.param = Some(name.into());
        }
        self
    }

    pub fn message(&self) -> String {
        let msg = match &self.kind {
            TypeErrorKind::Mismatch(a, b) => {
                format!("type mismatch: expected `{}`, found `{}`", a, b)
            }
            TypeErrorKind::Inconsistent(v, a, b) => format!(
                "type variable `{}` is bound to `{}` but also to `{}`",
                v, a, b
            ),
            TypeErrorKind::UnsolvableTyVar(v) => format!("type variable `{}` cannot be solved", v),
            TypeErrorKind::RecursiveUnification(v, t) => {
                format!("recursive unification: {} and {}", v, t)
            }
            TypeErrorKind::TooManyArgs(expected, found) => format!(
                "expected at most {} positional arguments, but found {}",
                expected, found
            ),
            TypeErrorKind::MissingArg(name) => format!("missing argument `{}`", name),
            TypeErrorKind::UnknownKeyword(name) => {
                format!("unexpected keyword argument `{}`", name)
            }
            TypeErrorKind::DuplicateArg(name) => {
                format!("multiple values for argument `{}`", name)
            }
        };

        match &self.param {
            Some(p) => format!("argument `{}`: {}", p, msg),
            None => msg,
        }
    }
}
