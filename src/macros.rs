#[cfg(test)]
macro_rules! str {
    ($s:expr) => {
        $s.to_string()
    };
}

/// Builds a type variable from a bare identifier: `tvar!(T)`.
#[macro_export]
macro_rules! tvar {
    ($name:ident) => {
        $crate::typing::ty::TyVar::new(stringify!($name))
    };
}

#[macro_export]
macro_rules! subst {
    () => {
        $crate::typing::Subst::new()
    };

    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut s = $crate::typing::Subst::new();
        $(s.insert($k, $v);)+
        s
    }};
}

/// Positional argument list, converting each item with `Value::from`.
#[macro_export]
macro_rules! args {
    () => {
        Vec::<$crate::expr::Value>::new()
    };

    ($($v:expr),+ $(,)?) => {
        vec![$($crate::expr::Value::from($v)),+]
    };
}

/// Keyword argument map in insertion order: `kwargs! { index => 0 }`.
#[macro_export]
macro_rules! kwargs {
    () => {
        $crate::expr::KwArgs::new()
    };

    ($($k:ident => $v:expr),+ $(,)?) => {{
        let mut kw = $crate::expr::KwArgs::new();
        $(kw.insert(stringify!($k), $crate::expr::Value::from($v));)+
        kw
    }};
}
