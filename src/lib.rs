//! # gapcurry
//!
//! Placeholder-aware currying for Rust functions.
//!
//! ## Overview
//!
//! [`curry`] turns a function into a chain of closures. Each call binds some
//! of the remaining parameters; when none is left open the function runs and
//! its result is returned. Any argument position may be given the
//! placeholder `__` instead of a value, which keeps that parameter open for a
//! later call. Parameters can therefore be bound in any order across calls.
//!
//! - **Placeholder**: [`__`], [`Placeholder`], [`is_placeholder`]
//! - **Signatures**: [`CurryTarget`], [`Signature`], [`variadic`]
//! - **Gap resolution**: [`resolve`], [`CurryFrame`], [`ArgumentSlot`]
//! - **Engine**: [`curry`], [`CurryClosure`], [`Applied`]
//! - **Macros**: [`args!`], [`apply!`]
//!
//! ## Argument Types
//!
//! Parameter types are read off the target when it is curried and each value
//! is checked against its position when it is supplied. There is no implicit
//! numeric conversion, so an unsuffixed integer literal is an `i32` and an
//! unsuffixed float is an `f64`. Suffix literals bound to other numeric
//! parameters:
//!
//! ```rust
//! use gapcurry::prelude::*;
//!
//! fn describe(name: &'static str, age: u32) -> String {
//!     format!("{name} ({age})")
//! }
//!
//! let curried = curry(describe);
//! assert_eq!(
//!     apply!(curried, __, 25).unwrap_err(),
//!     CurryError::ArgumentType {
//!         position: 1,
//!         expected: "u32",
//!         found: "i32",
//!     }
//! );
//!
//! let aged = apply!(curried, __, 25_u32).unwrap().partial().unwrap();
//! assert_eq!(
//!     apply!(aged, "Josh").unwrap().complete().as_deref(),
//!     Some("Josh (25)")
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for [`Signature`] and [`ParameterShape`]
//! - `wide-arity`: targets with up to 12 fixed parameters (default: 8)
//!
//! ## Example
//!
//! ```rust
//! use gapcurry::prelude::*;
//!
//! fn greet(greeting: &'static str, name: &'static str, punctuation: char) -> String {
//!     format!("{greeting}, {name}{punctuation}")
//! }
//!
//! let curried = curry(greet);
//! let hello_someone = apply!(curried, "Hello", __, '!').unwrap().partial().unwrap();
//!
//! assert_eq!(hello_someone.remaining(), 1);
//! assert_eq!(
//!     apply!(hello_someone, "Alice").unwrap().complete().as_deref(),
//!     Some("Hello, Alice!")
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use gapcurry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        __, Applied, Argument, CurryClosure, CurryError, Placeholder, apply, args, curry, variadic,
    };
}

mod macros;

pub mod argument;
pub mod curry;
pub mod error;
pub mod frame;
pub mod placeholder;
pub mod resolver;
pub mod signature;

pub use argument::{Argument, Value};
pub use curry::{Applied, CurryClosure, curry};
pub use error::CurryError;
pub use frame::{ArgumentSlot, CurryFrame};
pub use placeholder::{__, Placeholder, is_placeholder};
pub use resolver::resolve;
pub use signature::{CurryTarget, ParameterShape, Signature, Variadic, variadic};
