//! The `args!` and `apply!` macros.

/// Builds the argument list for one curry call.
///
/// Each element is either an expression, wrapped with
/// [`Argument::value`](crate::Argument::value), or the literal token `__`,
/// which becomes [`Argument::Placeholder`](crate::Argument::Placeholder).
/// The result is a `Vec<Argument>`.
///
/// Values are type-checked against the declared parameter types at the call,
/// so numeric literals need a suffix when the parameter is not `i32`/`f64`.
///
/// # Examples
///
/// ```
/// use gapcurry::{args, Argument};
///
/// let arguments = args![__, 25_u32, __];
/// assert_eq!(arguments.len(), 3);
/// assert!(arguments[0].is_placeholder());
/// assert!(!arguments[1].is_placeholder());
///
/// let none: Vec<Argument> = args![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    (@collect [$($built:expr),*]) => {{
        let arguments: ::std::vec::Vec<$crate::Argument> = ::std::vec![$($built),*];
        arguments
    }};

    (@collect [$($built:expr),*] __ $(, $($rest:tt)*)?) => {
        $crate::args!(@collect [$($built,)* $crate::Argument::Placeholder] $($($rest)*)?)
    };

    (@collect [$($built:expr),*] $head:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@collect [$($built,)* $crate::Argument::value($head)] $($($rest)*)?)
    };

    ($($arguments:tt)*) => {
        $crate::args!(@collect [] $($arguments)*)
    };
}

/// Calls a curry closure with an inline argument list.
///
/// `apply!(closure, a, __, c)` is `closure.call(args![a, __, c])`.
///
/// # Examples
///
/// ```
/// use gapcurry::{apply, curry};
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = apply!(curry(divide), __, 2.0).unwrap().partial().unwrap();
/// assert_eq!(apply!(half, 10.0).unwrap().complete(), Some(5.0));
/// ```
#[macro_export]
macro_rules! apply {
    ($closure:expr $(, $($arguments:tt)*)?) => {
        $closure.call($crate::args!($($($arguments)*)?))
    };
}

#[cfg(test)]
mod tests {
    use crate::Argument;
    use rstest::rstest;

    #[rstest]
    fn args_accepts_trailing_comma() {
        let arguments = args![1, __,];
        assert_eq!(arguments.len(), 2);
        assert!(arguments[1].is_placeholder());
    }

    #[rstest]
    fn args_wraps_expressions() {
        let name = String::from("Josh");
        let arguments = args![name.clone(), 2 + 3];
        match &arguments[..] {
            [Argument::Value(first), Argument::Value(second)] => {
                assert_eq!(first.downcast_ref::<String>(), Some(&name));
                assert_eq!(second.downcast_ref::<i32>(), Some(&5));
            }
            other => panic!("unexpected arguments: {other:?}"),
        }
    }

    #[rstest]
    fn args_all_placeholders() {
        let arguments = args![__, __, __];
        assert!(arguments.iter().all(Argument::is_placeholder));
    }
}
