mod build;
mod kwargs;
mod value;

pub use build::*;
pub use kwargs::*;
pub use value::*;

use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

use fnv::FnvHashSet;
use itertools::Itertools;
use xxhash_rust::xxh3::Xxh3;

use crate::typing::ty::ExprTy;

/// Identity of a symbolically represented operation, by qualified name
/// (`Integer.from_int`). Operations are never invoked.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operation(Arc<str>);

impl Operation {
    pub fn new<S: AsRef<str>>(qualname: S) -> Operation {
        Operation(Arc::from(qualname.as_ref()))
    }

    #[inline(always)]
    pub fn qualname(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct ExprData {
    ty: ExprTy,
    op: Operation,
    args: Vec<Value>,
    kwargs: KwArgs,
    // structural hash, consistent with `PartialEq for Expr`
    digest: u64,
}

impl ExprData {
    fn take_children(&mut self, stack: &mut Vec<Expr>) {
        let args = self.args.drain(..);
        let kwargs = self.kwargs.drain().map(|(_, v)| v);
        stack.extend(args.chain(kwargs).filter_map(Value::into_expr));
    }
}

// Dropping a long chain of uniquely owned nodes would otherwise recurse once
// per level.
impl Drop for ExprData {
    fn drop(&mut self) {
        let mut stack = vec![];
        self.take_children(&mut stack);
        while let Some(expr) = stack.pop() {
            if let Ok(mut data) = Arc::try_unwrap(expr.0) {
                data.take_children(&mut stack);
            }
        }
    }
}

/// An immutable application of an operation to arguments, typed by the
/// expression type it produces.
///
/// Cloning is cheap and shares the node. Equality is structural: same
/// operation, same result type, equal positional and keyword arguments.
#[derive(Clone)]
pub struct Expr(Arc<ExprData>);

impl Expr {
    pub fn new(ty: ExprTy, op: Operation, args: Vec<Value>, kwargs: KwArgs) -> Expr {
        let mut h = Xxh3::new();
        op.hash(&mut h);
        ty.hash(&mut h);
        args.hash(&mut h);
        kwargs.hash(&mut h);
        let digest = h.finish();

        Expr(Arc::new(ExprData {
            ty,
            op,
            args,
            kwargs,
            digest,
        }))
    }

    /// The result type of this node.
    #[inline(always)]
    pub fn ty(&self) -> &ExprTy {
        &self.0.ty
    }

    #[inline(always)]
    pub fn op(&self) -> &Operation {
        &self.0.op
    }

    #[inline(always)]
    pub fn args(&self) -> &[Value] {
        &self.0.args
    }

    #[inline(always)]
    pub fn kwargs(&self) -> &KwArgs {
        &self.0.kwargs
    }

    /// Number of direct children (positional plus keyword).
    pub fn arity(&self) -> usize {
        self.0.args.len() + self.0.kwargs.len()
    }

    /// A node of the same type and operation with different arguments.
    pub fn with_args(&self, args: Vec<Value>, kwargs: KwArgs) -> Expr {
        Expr::new(self.0.ty.clone(), self.0.op.clone(), args, kwargs)
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// `op(arg1, arg2, key=value)`. Recurses once per nesting level.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// `Type(op, [args], {kwargs})`. Recurses once per nesting level.
    pub fn to_debug_string(&self) -> String {
        format!("{:?}", self)
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Expr) -> bool {
        // Node pairs already compared or queued.
        let mut seen = FnvHashSet::default();
        let mut work = vec![(self, other)];
        while let Some((a, b)) = work.pop() {
            if a.ptr_eq(b) || !seen.insert((Arc::as_ptr(&a.0), Arc::as_ptr(&b.0))) {
                continue;
            }

            let (a, b) = (&*a.0, &*b.0);
            if a.digest != b.digest
                || a.op != b.op
                || a.ty != b.ty
                || a.args.len() != b.args.len()
                || a.kwargs.len() != b.kwargs.len()
            {
                return false;
            }

            let args = a.args.iter().zip(b.args.iter().map(Some));
            let kwargs = a.kwargs.iter().map(|(k, v)| (v, b.kwargs.get(k)));
            for (x, y) in args.chain(kwargs) {
                match (x, y) {
                    (Value::Expr(x), Some(Value::Expr(y))) => work.push((x, y)),
                    (x, Some(y)) if !x.is_expr() && x == y => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.digest)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self.args().iter().map(|a| a.to_string());
        let kwargs = self.kwargs().iter().map(|(k, v)| format!("{}={}", k, v));
        write!(f, "{}({})", self.op(), args.chain(kwargs).join(", "))
    }
}

impl std::fmt::Debug for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, [{}], {:?})",
            self.ty(),
            self.op(),
            self.args().iter().map(|a| format!("{:?}", a)).join(", "),
            self.kwargs()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::typing::ty::{ExprTy, Ty};

    use super::{Expr, KwArgs, Operation, Value};

    fn int_ty() -> ExprTy {
        ExprTy::con("Integer")
    }

    fn from_int(i: i64) -> Expr {
        Expr::new(int_ty(), Operation::new("Integer.from_int"), args![i], kwargs! {})
    }

    fn add(a: Expr, b: Expr) -> Expr {
        Expr::new(int_ty(), Operation::new("Integer.add"), args![a, b], kwargs! {})
    }

    #[test]
    fn test_construction_keeps_parts() {
        let e = Expr::new(
            int_ty(),
            Operation::new("Integer.from_int"),
            args![5],
            kwargs! { base => 10 },
        );
        assert_eq!(e.op(), &Operation::new("Integer.from_int"));
        assert_eq!(e.args(), &[Value::Int(5)][..]);
        assert_eq!(e.kwargs(), &kwargs! { base => 10 });
        assert_eq!(e.ty(), &int_ty());
        assert_eq!(e.arity(), 2);
    }

    #[test]
    fn test_display_string() {
        let e = Expr::new(
            int_ty(),
            Operation::new("Integer.add"),
            args![from_int(1), from_int(2)],
            kwargs! { checked => true },
        );
        assert_eq!(
            e.to_display_string(),
            "Integer.add(Integer.from_int(1), Integer.from_int(2), checked=true)"
        );
    }

    #[test]
    fn test_debug_string() {
        let e = Expr::new(
            ExprTy::new("Tuple", vec![Ty::Expr(int_ty())]),
            Operation::new("Tuple.from_items"),
            args![from_int(1), "x"],
            kwargs! { n => 2 },
        );
        assert_eq!(
            e.to_debug_string(),
            r#"Tuple[Integer](Tuple.from_items, [Integer(Integer.from_int, [1], {}), "x"], {n: 2})"#
        );
    }

    #[test]
    fn test_equality_law() {
        let a = add(from_int(1), from_int(2));
        assert_eq!(a, add(from_int(1), from_int(2)));

        // operation
        let other_op = Expr::new(
            int_ty(),
            Operation::new("Integer.sub"),
            args![from_int(1), from_int(2)],
            kwargs! {},
        );
        assert_ne!(a, other_op);

        // result type
        let other_ty = Expr::new(
            ExprTy::con("Number"),
            Operation::new("Integer.add"),
            args![from_int(1), from_int(2)],
            kwargs! {},
        );
        assert_ne!(a, other_ty);

        // args
        assert_ne!(a, add(from_int(1), from_int(3)));

        // kwargs
        assert_ne!(a, a.with_args(a.args().to_vec(), kwargs! { checked => true }));

        // never equal to a non-expression value
        assert_ne!(Value::from(from_int(1)), Value::Int(1));
    }

    #[test]
    fn test_parametrized_type_identity() {
        let items = args![from_int(1)];
        let ints = Expr::new(
            ExprTy::new("Tuple", vec![Ty::expr("Integer", vec![])]),
            Operation::new("Tuple.from_items"),
            items.clone(),
            KwArgs::new(),
        );
        let nums = Expr::new(
            ExprTy::new("Tuple", vec![Ty::expr("Number", vec![])]),
            Operation::new("Tuple.from_items"),
            items,
            KwArgs::new(),
        );
        assert_ne!(ints, nums);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(Value::from(add(from_int(1), from_int(2))));
        assert!(set.contains(&Value::from(add(from_int(1), from_int(2)))));
        assert!(!set.contains(&Value::from(add(from_int(2), from_int(1)))));

        let a = Expr::new(int_ty(), Operation::new("f"), args![], kwargs! { x => 1, y => 2 });
        let b = Expr::new(int_ty(), Operation::new("f"), args![], kwargs! { y => 2, x => 1 });
        assert_eq!(a, b);
        set.insert(Value::from(a));
        assert!(set.contains(&Value::from(b)));
    }

    #[test]
    fn test_shared_subtrees_compare_by_value() {
        let shared = from_int(7);
        let dag = add(shared.clone(), shared.clone());
        let tree = add(from_int(7), from_int(7));
        assert_eq!(dag, tree);
    }

    #[test]
    fn test_separately_built_dags_compare_in_linear_time() {
        // 2^64 paths to the leaves on each side.
        let build = |leaf: i64| {
            let mut e = from_int(leaf);
            for _ in 0..64 {
                e = add(e.clone(), e);
            }
            e
        };
        assert_eq!(build(1), build(1));
        assert_ne!(build(1), build(2));
    }

    #[test]
    fn test_deep_tree_eq_and_drop() {
        let build = || {
            let mut e = from_int(0);
            for i in 0..200_000 {
                e = add(e, from_int(i));
            }
            e
        };
        let a = build();
        let b = build();
        assert_eq!(a, b);
        drop(a);
        drop(b);
    }
}
