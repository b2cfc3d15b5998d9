//! Bottom-up rewriting of expression trees.
//!
//! Every traversal here runs on an explicit work stack, so the depth of a
//! tree is bounded by memory rather than by the call stack. The input tree
//! is never modified; each rebuilt node is a fresh allocation.
use std::{
    collections::HashMap,
    convert::Infallible,
    hash::BuildHasher,
    iter::FromIterator,
};

use fnv::FnvHashMap;

use crate::expr::{Expr, KwArgs, Value};

/// Receives every transform application of an observed fold, in the order
/// the transform runs.
pub trait FoldObserver {
    fn on_transform(&mut self, before: &Value, after: &Value);
}

enum Task<'a> {
    Visit(&'a Value),
    Build(&'a Expr),
}

fn run<E, F>(
    root: &Value,
    mut transform: F,
    mut observer: Option<&mut dyn FoldObserver>,
) -> Result<Value, E>
where
    F: FnMut(Value) -> Result<Value, E>,
{
    let mut tasks = vec![Task::Visit(root)];
    let mut done: Vec<Value> = vec![];
    while let Some(task) = tasks.pop() {
        let input = match task {
            Task::Visit(Value::Expr(e)) => {
                tasks.push(Task::Build(e));
                let children = e.args().iter().chain(e.kwargs().values());
                tasks.extend(children.rev().map(Task::Visit));
                continue;
            }
            Task::Visit(leaf) => leaf.clone(),
            Task::Build(e) => {
                let mut args = done.split_off(done.len() - e.arity());
                let kw_values = args.split_off(e.args().len());
                let kwargs = e.kwargs().keys().zip(kw_values).collect::<KwArgs>();
                Value::Expr(e.with_args(args, kwargs))
            }
        };

        let output = match observer.as_mut() {
            Some(obs) => {
                let output = transform(input.clone())?;
                obs.on_transform(&input, &output);
                output
            }
            None => transform(input)?,
        };
        done.push(output);
    }

    match done.pop() {
        Some(v) => Ok(v),
        None => unreachable!("fold finished without a result"),
    }
}

/// Rebuilds `root` bottom-up, applying `transform` to every leaf and to
/// every rebuilt node after its children.
///
/// Rebuilt nodes keep their operation and result type; `transform` itself
/// may return anything.
pub fn fold<F>(mut transform: F, root: &Value) -> Value
where
    F: FnMut(Value) -> Value,
{
    match run(root, |v| Ok::<_, Infallible>(transform(v)), None) {
        Ok(v) => v,
        Err(e) => match e {},
    }
}

/// Like [`fold`], stopping at the first error returned by `transform`.
pub fn try_fold<E, F>(transform: F, root: &Value) -> Result<Value, E>
where
    F: FnMut(Value) -> Result<Value, E>,
{
    run(root, transform, None)
}

/// Like [`fold`], reporting each transform application to `observer`.
pub fn fold_observed<F>(mut transform: F, root: &Value, observer: &mut dyn FoldObserver) -> Value
where
    F: FnMut(Value) -> Value,
{
    match run(root, |v| Ok::<_, Infallible>(transform(v)), Some(observer)) {
        Ok(v) => v,
        Err(e) => match e {},
    }
}

/// Replaces every subtree or leaf equal to a key of `mapping` with the
/// mapped value.
///
/// Children are replaced before their parent is looked up, so a parent
/// matches on its already replaced form.
pub fn replace<S: BuildHasher>(mapping: &HashMap<Value, Value, S>, root: &Value) -> Value {
    fold(|v| mapping.get(&v).cloned().unwrap_or(v), root)
}

/// A reusable substitution of subexpressions.
#[derive(Clone, Debug, Default)]
pub struct Replacer {
    mapping: FnvHashMap<Value, Value>,
}

impl Replacer {
    pub fn new() -> Replacer {
        Replacer::default()
    }

    pub fn insert<K: Into<Value>, V: Into<Value>>(&mut self, from: K, to: V) -> Option<Value> {
        self.mapping.insert(from.into(), to.into())
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn replace(&self, root: &Value) -> Value {
        replace(&self.mapping, root)
    }

    pub fn replace_observed(&self, root: &Value, observer: &mut dyn FoldObserver) -> Value {
        fold_observed(
            |v| self.mapping.get(&v).cloned().unwrap_or(v),
            root,
            observer,
        )
    }
}

impl FromIterator<(Value, Value)> for Replacer {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Replacer {
            mapping: iter.into_iter().collect(),
        }
    }
}

/// Records the transform applications that changed a value.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    steps: Vec<(Value, Value)>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    pub fn steps(&self) -> &[(Value, Value)] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<(Value, Value)> {
        self.steps
    }
}

impl FoldObserver for Trace {
    fn on_transform(&mut self, before: &Value, after: &Value) {
        if before != after {
            log::trace!("rewrite {} => {}", before, after);
            self.steps.push((before.clone(), after.clone()));
        }
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (before, after)) in self.steps.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{} => {}", before, after)?;
        }
        Ok(())
    }
}
