//! Signature extraction for curry targets.
//!
//! Rust closures cannot be asked for their arity at runtime, so the
//! signature is read off the target's type instead. [`CurryTarget`] is
//! implemented for every `Fn(T1, .., Tn) -> R` up to a fixed maximum arity
//! (8, or 12 with the `wide-arity` feature), and for [`Variadic`] wrappers
//! around `Fn(T1, .., Tn, Vec<V>) -> R`. The marker type parameter keeps the
//! per-arity implementations from overlapping, so `curry(f)` picks the one
//! matching `f` without annotations.
//!
//! The static parameter types are kept as [`ParameterShape`]s and checked
//! against each value at the call that supplies it.

use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;

use crate::argument::Value;
use crate::error::CurryError;

/// Runtime record of one declared parameter type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterShape {
    #[cfg_attr(feature = "serde", serde(skip))]
    type_id: TypeId,
    type_name: &'static str,
}

impl ParameterShape {
    /// The shape of parameter type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// The declared type's name.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if `value` has this shape's type.
    pub fn admits(&self, value: &Value) -> bool {
        value.value_type_id() == self.type_id
    }

    pub(crate) fn check(&self, value: &Value, position: usize) -> Result<(), CurryError> {
        if self.admits(value) {
            Ok(())
        } else {
            Err(CurryError::ArgumentType {
                position,
                expected: self.type_name,
                found: value.type_name(),
            })
        }
    }
}

/// Arity and parameter shapes of a curry target, extracted once per
/// [`curry`](crate::curry) call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signature {
    parameters: Vec<ParameterShape>,
    rest: Option<ParameterShape>,
}

impl Signature {
    /// A signature with only fixed parameters.
    pub const fn fixed(parameters: Vec<ParameterShape>) -> Self {
        Self {
            parameters,
            rest: None,
        }
    }

    /// A signature whose fixed parameters are followed by a variadic tail of
    /// `rest` elements.
    pub const fn variadic(parameters: Vec<ParameterShape>, rest: ParameterShape) -> Self {
        Self {
            parameters,
            rest: Some(rest),
        }
    }

    /// Count of fixed positional parameters, excluding the variadic tail.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if the target accepts a variadic tail.
    pub const fn is_variadic(&self) -> bool {
        self.rest.is_some()
    }

    /// Shapes of the fixed parameters in declaration order.
    pub fn parameters(&self) -> &[ParameterShape] {
        &self.parameters
    }

    /// Shape of a fixed parameter.
    pub fn parameter(&self, position: usize) -> Option<&ParameterShape> {
        self.parameters.get(position)
    }

    /// Element shape of the variadic tail.
    pub const fn rest(&self) -> Option<&ParameterShape> {
        self.rest.as_ref()
    }
}

/// A function that can be curried.
///
/// Implemented for plain functions and closures taking up to 8 (or 12)
/// parameters, and for [`Variadic`] wrappers. Every parameter type must be
/// `Clone + Send + Sync + 'static`: bound values are shared between forked
/// closures and cloned out when the target finally runs.
///
/// The `Marker` parameter only disambiguates implementations; callers never
/// name it.
pub trait CurryTarget<Marker>: Send + Sync + 'static {
    /// Return type of the target.
    type Output: 'static;

    /// Extracts the target's signature.
    fn signature(&self) -> Signature;

    /// Runs the target with `bound` values for the fixed parameters, in
    /// declaration order, and `rest` for the variadic tail.
    ///
    /// # Errors
    ///
    /// [`CurryError::Unbound`] if `bound` is short, and
    /// [`CurryError::ArgumentType`] if a value does not have its declared type.
    fn invoke(&self, bound: Vec<Value>, rest: Vec<Value>) -> Result<Self::Output, CurryError>;
}

/// Wraps a function whose last parameter is a `Vec<V>` so that the vector
/// collects overflow arguments instead of being a fixed parameter.
///
/// Built with [`variadic`].
#[derive(Clone, Copy, Debug)]
pub struct Variadic<Function>(Function);

/// Marks `function`'s trailing `Vec<V>` parameter as a variadic tail.
///
/// # Examples
///
/// ```
/// use gapcurry::{args, curry, variadic};
///
/// fn sum(first: i32, rest: Vec<i32>) -> i32 {
///     first + rest.iter().sum::<i32>()
/// }
///
/// let curried = curry(variadic(sum));
/// assert_eq!(curried.arity(), 1);
/// assert_eq!(curried.call(args![1, 2, 3]).unwrap().complete(), Some(6));
/// ```
pub const fn variadic<Function>(function: Function) -> Variadic<Function> {
    Variadic(function)
}

/// Marker selecting the [`Variadic`] implementations of [`CurryTarget`].
#[doc(hidden)]
pub struct Rest<Parameters, Element>(PhantomData<fn() -> (Parameters, Element)>);

fn extract<T: Any + Clone + Send + Sync>(
    values: &mut impl Iterator<Item = Value>,
    position: usize,
) -> Result<T, CurryError> {
    let value = values.next().ok_or(CurryError::Unbound { position })?;
    value.take::<T>().map_err(|value| CurryError::ArgumentType {
        position,
        expected: type_name::<T>(),
        found: value.type_name(),
    })
}

fn extract_rest<T: Any + Clone + Send + Sync>(
    rest: Vec<Value>,
    arity: usize,
) -> Result<Vec<T>, CurryError> {
    let mut values = rest.into_iter();
    (arity..arity + values.len())
        .map(|position| extract::<T>(&mut values, position))
        .collect()
}

macro_rules! impl_curry_target {
    ($($parameter:ident),*) => {
        impl<Function, Return, $($parameter,)*> CurryTarget<($($parameter,)*)> for Function
        where
            Function: Fn($($parameter),*) -> Return + Send + Sync + 'static,
            Return: 'static,
            $($parameter: Any + Clone + Send + Sync,)*
        {
            type Output = Return;

            fn signature(&self) -> Signature {
                Signature::fixed(vec![$(ParameterShape::of::<$parameter>()),*])
            }

            #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
            fn invoke(&self, bound: Vec<Value>, _rest: Vec<Value>) -> Result<Return, CurryError> {
                let mut values = bound.into_iter();
                let mut position = 0;
                $(
                    let $parameter = extract::<$parameter>(&mut values, position)?;
                    position += 1;
                )*
                Ok((self)($($parameter),*))
            }
        }

        impl<Function, Return, $($parameter,)* Element> CurryTarget<Rest<($($parameter,)*), Element>>
            for Variadic<Function>
        where
            Function: Fn($($parameter,)* Vec<Element>) -> Return + Send + Sync + 'static,
            Return: 'static,
            $($parameter: Any + Clone + Send + Sync,)*
            Element: Any + Clone + Send + Sync,
        {
            type Output = Return;

            fn signature(&self) -> Signature {
                Signature::variadic(
                    vec![$(ParameterShape::of::<$parameter>()),*],
                    ParameterShape::of::<Element>(),
                )
            }

            #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
            fn invoke(&self, bound: Vec<Value>, rest: Vec<Value>) -> Result<Return, CurryError> {
                let mut values = bound.into_iter();
                let mut position = 0;
                $(
                    let $parameter = extract::<$parameter>(&mut values, position)?;
                    position += 1;
                )*
                let rest = extract_rest::<Element>(rest, position)?;
                Ok((self.0)($($parameter,)* rest))
            }
        }
    };
}

impl_curry_target!();
impl_curry_target!(T1);
impl_curry_target!(T1, T2);
impl_curry_target!(T1, T2, T3);
impl_curry_target!(T1, T2, T3, T4);
impl_curry_target!(T1, T2, T3, T4, T5);
impl_curry_target!(T1, T2, T3, T4, T5, T6);
impl_curry_target!(T1, T2, T3, T4, T5, T6, T7);
impl_curry_target!(T1, T2, T3, T4, T5, T6, T7, T8);

#[cfg(feature = "wide-arity")]
impl_curry_target!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
#[cfg(feature = "wide-arity")]
impl_curry_target!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
#[cfg(feature = "wide-arity")]
impl_curry_target!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
#[cfg(feature = "wide-arity")]
impl_curry_target!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
