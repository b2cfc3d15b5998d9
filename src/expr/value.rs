use std::fmt::Display;

use crate::typing::ty::Ty;

use super::Expr;

/// An argument of an expression node.
///
/// Equality and hashing are structural for every variant, so values (and
/// whole expression trees) can be used as map keys.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    Type(Ty),
    Expr(Expr),
}

impl Value {
    /// Concrete type of this value, as seen by the structural resolver.
    pub fn ty(&self) -> Ty {
        match self {
            Value::None => Ty::none(),
            Value::Bool(_) => Ty::bool(),
            Value::Int(_) => Ty::int(),
            Value::Str(_) => Ty::string(),
            Value::Type(t) => Ty::ty_type(t.clone()),
            Value::Expr(e) => Ty::Expr(e.ty().clone()),
        }
    }

    pub fn is_expr(&self) -> bool {
        matches!(self, Value::Expr(_))
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Value::Expr(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_expr(self) -> Option<Expr> {
        match self {
            Value::Expr(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
            Value::Type(t) => write!(f, "{}", t),
            Value::Expr(e) => write!(f, "{}", e),
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Type(t) => write!(f, "type[{}]", t),
            Value::Expr(e) => write!(f, "{:?}", e),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Ty> for Value {
    fn from(t: Ty) -> Self {
        Value::Type(t)
    }
}

impl From<Expr> for Value {
    fn from(e: Expr) -> Self {
        Value::Expr(e)
    }
}

impl From<&Expr> for Value {
    fn from(e: &Expr) -> Self {
        Value::Expr(e.clone())
    }
}
