//! The placeholder token that keeps a parameter position open.
//!
//! A call to a [`CurryClosure`](crate::CurryClosure) may pass the
//! placeholder in any position to mean "skip this parameter for now". The
//! position stays a gap and is offered again to the next call.
//!
//! There is exactly one placeholder: the unit struct [`Placeholder`], exported
//! as the constant [`__`]. Recognition is by type identity, never by
//! comparing contents.

use std::any::Any;

/// Marker that leaves a parameter position unfilled.
///
/// Users normally write `__` inside [`args!`](crate::args) or
/// [`apply!`](crate::apply), where it is matched as a literal token. Passing
/// the [`__`] constant through [`Argument::value`](crate::Argument::value)
/// has the same effect, because the value is recognised by its type.
///
/// # Examples
///
/// ```
/// use gapcurry::{args, curry};
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let subtract_from = curry(subtract).call(args![__, 10]).unwrap().partial().unwrap();
/// assert_eq!(subtract_from.call(args![25]).unwrap().complete(), Some(15));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Placeholder;

/// The placeholder constant.
///
/// Named `__` (double underscore) because `macro_rules!` cannot match a
/// single `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

/// Returns `true` iff `value` is the placeholder.
///
/// # Examples
///
/// ```
/// use gapcurry::{__, is_placeholder};
///
/// assert!(is_placeholder(&__));
/// assert!(!is_placeholder(&"__"));
/// assert!(!is_placeholder(&()));
/// ```
#[inline]
pub fn is_placeholder<T: Any>(value: &T) -> bool {
    (value as &dyn Any).is::<Placeholder>()
}
