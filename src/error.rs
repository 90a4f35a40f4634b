//! Errors raised by a curry call.
//!
//! Every variant is raised synchronously at the call that caused it, before
//! any successor closure exists; the closure that was called stays valid.
//! Errors produced by the target function itself are never converted into a
//! [`CurryError`]: a target returning `Result<T, E>` hands its `Err` back
//! inside [`Applied::Complete`](crate::Applied::Complete) untouched.

use thiserror::Error;

/// Error type for curry calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurryError {
    /// Arguments arrived with no open position to bind to and the target has
    /// no variadic tail.
    #[error(
        "target takes {arity} parameters and no variadic tail, \
         but {supplied} arguments were supplied for {open} open positions"
    )]
    ArityOverflow {
        /// Fixed arity of the target.
        arity: usize,
        /// Gaps that were open before the call.
        open: usize,
        /// Arguments supplied to the call, placeholders included.
        supplied: usize,
    },

    /// A concrete value does not have the type declared at its position.
    #[error("argument for position {position} has type `{found}`, expected `{expected}`")]
    ArgumentType {
        /// Declaration position, counting variadic tail elements after the
        /// fixed parameters.
        position: usize,
        /// Declared parameter type.
        expected: &'static str,
        /// Type of the supplied value.
        found: &'static str,
    },

    /// A placeholder fell beyond the open positions of a variadic target,
    /// where it has no position to keep open.
    #[error("placeholder at position {position} falls into the variadic tail")]
    MisplacedPlaceholder {
        /// Position the placeholder would have occupied in the tail.
        position: usize,
    },

    /// A [`CurryTarget`](crate::CurryTarget) was invoked without a value for
    /// one of its parameters.
    #[error("parameter {position} reached the target without a bound value")]
    Unbound {
        /// Declaration position of the missing value.
        position: usize,
    },
}
