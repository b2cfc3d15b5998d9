use fnv::FnvHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::expr::{KwArgs, Value};

use super::{error::TypeError, ty::Ty};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// Passed by position or by keyword.
    Positional,
    /// Collects every remaining positional argument (`*items`).
    Variadic,
    /// Passed by keyword only.
    Keyword,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: Ty,
    pub kind: ParamKind,
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParamKind::Variadic => write!(f, "*{}: {}", self.name, self.ty),
            _ => write!(f, "{}: {}", self.name, self.ty),
        }
    }
}

/// Declared parameter and return types of an operation.
///
/// The types may mention type variables; they are solved per call from the
/// types of the actual arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub params: Vec<Param>,
    pub ret: Ty,
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) -> {}", self.params.iter().join(", "), self.ret)
    }
}

impl Signature {
    pub fn new(ret: Ty) -> Signature {
        Signature {
            params: vec![],
            ret,
        }
    }

    /// Adds a positional parameter. Once a variadic parameter is declared,
    /// further parameters can only be passed by keyword.
    pub fn param<S: Into<String>>(mut self, name: S, ty: Ty) -> Signature {
        let kind = if self.variadic_param().is_some() {
            ParamKind::Keyword
        } else {
            ParamKind::Positional
        };
        self.params.push(Param {
            name: name.into(),
            ty,
            kind,
        });
        self
    }

    pub fn variadic<S: Into<String>>(mut self, name: S, ty: Ty) -> Signature {
        debug_assert!(
            self.variadic_param().is_none(),
            "signature already has a variadic parameter"
        );
        self.params.push(Param {
            name: name.into(),
            ty,
            kind: ParamKind::Variadic,
        });
        self
    }

    pub fn keyword<S: Into<String>>(mut self, name: S, ty: Ty) -> Signature {
        self.params.push(Param {
            name: name.into(),
            ty,
            kind: ParamKind::Keyword,
        });
        self
    }

    pub fn variadic_param(&self) -> Option<&Param> {
        self.params.iter().find(|p| p.kind == ParamKind::Variadic)
    }

    /// Pairs each actual argument with the parameter it is passed to.
    ///
    /// Positional arguments come first, in order, followed by keyword
    /// arguments in insertion order.
    pub fn bind<'a>(
        &'a self,
        args: &'a [Value],
        kwargs: &'a KwArgs,
    ) -> Result<Vec<(&'a Param, &'a Value)>, TypeError> {
        let positional = self
            .params
            .iter()
            .filter(|p| p.kind == ParamKind::Positional)
            .collect::<Vec<_>>();
        let variadic = self.variadic_param();

        let mut bound = Vec::with_capacity(args.len() + kwargs.len());
        let mut filled = FnvHashSet::default();
        for (i, arg) in args.iter().enumerate() {
            if let Some(p) = positional.get(i) {
                filled.insert(p.name.as_str());
                bound.push((*p, arg));
            } else if let Some(v) = variadic {
                bound.push((v, arg));
            } else {
                return Err(TypeError::too_many_args(positional.len(), args.len()));
            }
        }

        for (name, value) in kwargs.iter() {
            let p = self
                .params
                .iter()
                .find(|p| p.name == name && p.kind != ParamKind::Variadic)
                .ok_or_else(|| TypeError::unknown_keyword(name))?;
            if !filled.insert(p.name.as_str()) {
                return Err(TypeError::duplicate_arg(name));
            }
            bound.push((p, value));
        }

        if let Some(p) = self
            .params
            .iter()
            .find(|p| p.kind != ParamKind::Variadic && !filled.contains(p.name.as_str()))
        {
            return Err(TypeError::missing_arg(p.name.as_str()));
        }

        Ok(bound)
    }
}
