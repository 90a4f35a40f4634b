//! Type-erased argument values.
//!
//! Curried targets have heterogeneous parameter lists, so the engine stores
//! bound values behind `Arc<dyn Any + Send + Sync>`. The concrete type is
//! recovered once, at the terminal call, by downcasting. Every bound value is
//! shared by all closures that forked from the step that bound it, so
//! extraction clones through [`Arc::unwrap_or_clone`].

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::placeholder::{Placeholder, is_placeholder};

/// A bound argument value of any `'static` type.
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wraps a concrete value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// The name of the wrapped value's type, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped value has type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the wrapped value if it has type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapcurry::Value;
    ///
    /// let value = Value::new(25_u32);
    /// assert_eq!(value.downcast_ref::<u32>(), Some(&25));
    /// assert_eq!(value.downcast_ref::<i32>(), None);
    /// ```
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub(crate) fn value_type_id(&self) -> std::any::TypeId {
        // Deref first: `Arc<dyn Any>` is itself `Any`.
        (*self.inner).type_id()
    }

    /// Extracts an owned `T`, cloning only when other closures still share
    /// the value. Returns the value back on a type mismatch.
    pub(crate) fn take<T: Any + Clone + Send + Sync>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        Arc::downcast::<T>(self.inner)
            .map(Arc::unwrap_or_clone)
            .map_err(|inner| Self { inner, type_name })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Value<{}>", self.type_name)
    }
}

/// One positional argument supplied to a curry call.
#[derive(Clone, Debug)]
pub enum Argument {
    /// A concrete value that fills the paired position.
    Value(Value),
    /// Leaves the paired position open.
    Placeholder,
}

impl Argument {
    /// Wraps a concrete value.
    ///
    /// The placeholder constant is recognised by type and becomes
    /// [`Argument::Placeholder`], so `Argument::value(__)` keeps its position
    /// open.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapcurry::{__, Argument};
    ///
    /// assert!(Argument::value(__).is_placeholder());
    /// assert!(!Argument::value(42).is_placeholder());
    /// ```
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        if is_placeholder(&value) {
            Self::Placeholder
        } else {
            Self::Value(Value::new(value))
        }
    }

    /// Returns `true` for [`Argument::Placeholder`].
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// The concrete value, or `None` for a placeholder. A wrapped
    /// [`Placeholder`] value counts as a placeholder too.
    pub(crate) fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) if !value.is::<Placeholder>() => Some(value),
            Self::Value(_) | Self::Placeholder => None,
        }
    }
}

impl From<Placeholder> for Argument {
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        if value.is::<Placeholder>() {
            Self::Placeholder
        } else {
            Self::Value(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::__;
    use rstest::rstest;

    #[rstest]
    fn take_returns_owned_value() {
        let value = Value::new(String::from("Josh"));
        assert_eq!(value.take::<String>().ok(), Some(String::from("Josh")));
    }

    #[rstest]
    fn take_clones_when_shared() {
        let value = Value::new(vec![1, 2, 3]);
        let shared = value.clone();
        assert_eq!(value.take::<Vec<i32>>().ok(), Some(vec![1, 2, 3]));
        assert_eq!(shared.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
    }

    #[rstest]
    fn take_mismatch_gives_value_back() {
        let value = Value::new(7_u8);
        let returned = value.take::<u16>().unwrap_err();
        assert_eq!(returned.type_name(), "u8");
        assert!(returned.is::<u8>());
    }

    #[rstest]
    fn type_id_reports_the_wrapped_type() {
        assert_eq!(
            Value::new(1_i64).value_type_id(),
            std::any::TypeId::of::<i64>()
        );
    }

    #[rstest]
    fn placeholder_conversions() {
        assert!(Argument::from(__).is_placeholder());
        assert!(Argument::value(__).is_placeholder());
        assert!(!Argument::from(Value::new(())).is_placeholder());
    }

    #[rstest]
    fn wrapped_placeholder_value_converts_to_placeholder() {
        assert!(Argument::from(Value::new(__)).is_placeholder());
        assert!(Argument::Value(Value::new(__)).into_value().is_none());
        assert!(Argument::value(3_u8).into_value().is_some());
    }
}
