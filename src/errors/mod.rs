use crate::typing::TypeError;

use colored::*;
use std::fmt;

pub type ExprResult<T = ()> = Result<T, ExprError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprErrorKind {
    /// The declared return type does not name exactly one expression type.
    ExpressionType,
    /// The call could not be bound or unified against its signature.
    TypeResolution,
}

impl fmt::Display for ExprErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExprErrorKind::ExpressionType => "expression type error",
                ExprErrorKind::TypeResolution => "type resolution error",
            }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExprError {
    pub msg: String,
    pub kind: ExprErrorKind,
    /// Qualified name of the operation being constructed, when known.
    pub op: Option<String>,
}

impl ExprError {
    pub fn expression_type<S: Into<String>>(msg: S) -> Self {
        ExprError {
            msg: msg.into(),
            kind: ExprErrorKind::ExpressionType,
            op: None,
        }
    }

    pub fn type_resolution<S: Into<String>>(msg: S) -> Self {
        ExprError {
            msg: msg.into(),
            kind: ExprErrorKind::TypeResolution,
            op: None,
        }
    }

    pub fn with_op<S: Into<String>>(mut self, op: S) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Prints the error to stderr.
    pub fn emit(&self) {
        let kind = format!("{}:", self.kind);
        eprintln!("{} {}", kind.bold().red(), self.msg.bold());
        if let Some(op) = &self.op {
            eprintln!(" {} {}", "-->".bold(), op);
        }
        eprintln!()
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            Some(op) => write!(f, "{}: {}: {}", self.kind, op, self.msg),
            None => write!(f, "{}: {}", self.kind, self.msg),
        }
    }
}

impl std::error::Error for ExprError {}

impl From<TypeError> for ExprError {
    fn from(err: TypeError) -> Self {
        ExprError {
            msg: err.message(),
            kind: ExprErrorKind::TypeResolution,
            op: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::typing::{ty::Ty, TypeError};

    use super::{ExprError, ExprErrorKind};

    #[test]
    fn test_from_type_error() {
        let err: ExprError = TypeError::mismatch(Ty::int(), Ty::string())
            .with_param("i")
            .into();
        assert_eq!(err.kind, ExprErrorKind::TypeResolution);
        assert_eq!(
            err.with_op("Integer.from_int").to_string(),
            "type resolution error: Integer.from_int: \
             argument `i`: type mismatch: expected `int`, found `str`"
        );
    }
}
