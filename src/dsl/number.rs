use crate::{
    errors::ExprResult,
    expr::{make_expression_constructor, Expr, ExprConstructor},
    typing::{ty::Ty, Signature},
};

/// Floating point, integer or complex number.
pub const CATEGORY: &'static str = "Number";

pub fn ty() -> Ty {
    super::category(CATEGORY)
}

lazy_static! {
    static ref FROM_NUMBER: ExprConstructor = make_expression_constructor(
        "Number.from_number",
        Signature::new(ty()).param("i", Ty::int()),
    );
}

pub fn from_number(i: i64) -> ExprResult<Expr> {
    FROM_NUMBER.call_positional(args![i])
}

#[cfg(test)]
mod tests {
    use crate::dsl::integer;

    #[test]
    fn test_from_number_is_not_an_integer() {
        let n = super::from_number(1).unwrap();
        let i = integer::from_int(1).unwrap();
        assert_eq!(n.to_string(), "Number.from_number(1)");
        assert_ne!(n, i);
        assert_ne!(n.ty(), i.ty());
    }
}
