use std::collections::HashMap;

use metadsl::{
    args,
    dsl::{integer, optional, tuple},
    extract_expression_type, fold, kwargs, replace, Expr, ExprErrorKind, ExprTy, Operation, Ty,
    Value,
};

fn double_literals(v: Value) -> Value {
    match v.as_expr().and_then(integer::literal) {
        Some(i) => integer::from_int(i * 2).unwrap().into(),
        None => v,
    }
}

#[test]
fn test_double_tuple_items() {
    let (a, b, c) = (
        integer::from_int(1).unwrap(),
        integer::from_int(2).unwrap(),
        integer::from_int(3).unwrap(),
    );
    let t = tuple::from_items(integer::ty(), args![a.clone(), b.clone(), c.clone()]);
    assert_eq!(t.ty(), &ExprTy::new("Tuple", vec![integer::ty()]));
    assert_eq!(t.args(), &args![a, b, c][..]);

    let doubled = fold(double_literals, &t.clone().into());
    let doubled = doubled.as_expr().unwrap();
    assert_eq!(doubled.ty(), t.ty());
    assert_eq!(doubled.op(), t.op());
    assert_eq!(
        doubled.to_string(),
        "Tuple.from_items(Integer.from_int(2), Integer.from_int(4), Integer.from_int(6))"
    );
    assert_eq!(
        t.to_string(),
        "Tuple.from_items(Integer.from_int(1), Integer.from_int(2), Integer.from_int(3))"
    );
}

#[test]
fn test_equality_is_structural() {
    let build = || {
        Expr::new(
            ExprTy::con("Integer"),
            Operation::new("Integer.add"),
            args![integer::from_int(1).unwrap(), 2],
            kwargs! { checked => true },
        )
    };
    let (x, y) = (build(), build());
    assert!(!x.ptr_eq(&y));
    assert_eq!(x, y);

    let mut seen = HashMap::new();
    seen.insert(Value::from(x), "x");
    assert_eq!(seen.get(&Value::from(y)), Some(&"x"));
}

#[test]
fn test_replace_nested_optional() {
    let one = integer::from_int(1).unwrap();
    let opt = optional::some(integer::add(&one, &one).unwrap()).unwrap();

    let mut mapping = HashMap::new();
    mapping.insert(Value::from(&one), Value::from(integer::from_int(7).unwrap()));
    let out = replace(&mapping, &opt.clone().into());
    assert_eq!(
        out.to_string(),
        "Optional.some(Integer.add(Integer.from_int(7), Integer.from_int(7)))"
    );
    assert_eq!(out.as_expr().unwrap().ty(), opt.ty());
}

#[test]
fn test_extract_expression_type() {
    assert_eq!(
        extract_expression_type(&Ty::Union(vec![integer::ty(), Ty::int()])).unwrap(),
        ExprTy::con("Integer")
    );
    let err = extract_expression_type(&Ty::Union(vec![
        integer::ty(),
        Ty::expr("Number", vec![]),
    ]))
    .unwrap_err();
    assert_eq!(err.kind, ExprErrorKind::ExpressionType);
    assert!(extract_expression_type(&Ty::int()).is_err());
}
