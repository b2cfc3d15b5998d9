use std::{
    iter::FromIterator,
    ops::{Deref, DerefMut},
};

use fnv::FnvHashMap;
use itertools::Itertools;

use super::ty::{Ty, TyVar};

/// Solved type variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Subst(FnvHashMap<TyVar, Ty>);

impl Deref for Subst {
    type Target = FnvHashMap<TyVar, Ty>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Subst {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Subst {
    type Item = (TyVar, Ty);

    type IntoIter = std::collections::hash_map::IntoIter<TyVar, Ty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(TyVar, Ty)> for Subst {
    fn from_iter<T: IntoIterator<Item = (TyVar, Ty)>>(iter: T) -> Self {
        Subst(iter.into_iter().collect())
    }
}

impl std::fmt::Debug for Subst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .sorted_by(|a, b| a.0.cmp(b.0))
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            )
            .finish()
    }
}

impl std::fmt::Display for Subst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Subst {
    pub fn new() -> Subst {
        Subst(FnvHashMap::default())
    }
}

pub trait Substitutable {
    fn apply_subst(&mut self, subst: &Subst);

    fn free_vars(&self) -> Vec<&TyVar>;
}

impl<T: Substitutable> Substitutable for Vec<T> {
    fn apply_subst(&mut self, subst: &Subst) {
        for t in self.iter_mut() {
            t.apply_subst(subst);
        }
    }

    fn free_vars(&self) -> Vec<&TyVar> {
        self.iter().flat_map(|t| t.free_vars()).collect()
    }
}

impl<T: Substitutable> Substitutable for Box<T> {
    fn apply_subst(&mut self, subst: &Subst) {
        self.as_mut().apply_subst(subst)
    }

    fn free_vars(&self) -> Vec<&TyVar> {
        self.as_ref().free_vars()
    }
}

#[cfg(test)]
mod tests {
    use crate::typing::ty::{Ty, TyVar};

    use super::Subst;

    #[test]
    fn test_display_is_sorted() {
        let s = vec![(tvar!(U), Ty::expr("Integer", vec![])), (tvar!(T), Ty::int())]
            .into_iter()
            .collect::<Subst>();
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(&TyVar::new("U")), Some(&Ty::expr("Integer", vec![])));
        assert_eq!(s.to_string(), r#"{"T": "int", "U": "Integer"}"#);
    }
}
