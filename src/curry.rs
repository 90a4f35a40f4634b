//! The curry engine.
//!
//! [`curry`] extracts the target's signature once and returns the first
//! [`CurryClosure`] of a chain, with every position open. Each
//! [`CurryClosure::call`] runs the gap resolver and then either invokes the
//! target (no gap left) or returns a successor closure.
//!
//! Closures are persistent. Calling one never changes it, so the same
//! closure can be called again, or from several threads at once, to fork
//! independent continuations.
//!
//! # Examples
//!
//! ```
//! use gapcurry::{args, curry, variadic, Applied};
//!
//! fn log_user_data(name: &'static str, age: u32, married: bool, more: Vec<&'static str>) -> String {
//!     let status = if married { "Married" } else { "Single" };
//!     format!("{name} {age} {status} {}", more.join(" "))
//! }
//!
//! let curried = curry(variadic(log_user_data));
//! let with_age = curried.call(args![__, 25_u32, __]).unwrap().partial().unwrap();
//! let with_status = with_age.call(args![__, true]).unwrap().partial().unwrap();
//! let result = with_status.call(args!["Josh", "Gaming", "Hiking"]).unwrap();
//!
//! assert!(matches!(result, Applied::Complete(ref line) if line == "Josh 25 Married Gaming Hiking"));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::argument::{Argument, Value};
use crate::error::CurryError;
use crate::frame::CurryFrame;
use crate::resolver::resolve;
use crate::signature::{CurryTarget, Signature};

type Invoke<R> = dyn Fn(Vec<Value>, Vec<Value>) -> Result<R, CurryError> + Send + Sync;

/// The target function and its signature, shared by every closure of a chain.
struct Target<R> {
    signature: Signature,
    invoke: Box<Invoke<R>>,
}

/// Curries `function`.
///
/// The signature is extracted here, once, and shared by the whole chain.
/// Wrap the function in [`variadic`](crate::variadic) to treat a trailing
/// `Vec<V>` parameter as a variadic tail.
///
/// # Examples
///
/// ```
/// use gapcurry::{args, curry};
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried = curry(volume);
/// let flat = curried.call(args![__, __, 1.0]).unwrap().partial().unwrap();
/// assert_eq!(flat.call(args![2.0, 3.0]).unwrap().complete(), Some(6.0));
/// ```
pub fn curry<Function, Marker>(function: Function) -> CurryClosure<Function::Output>
where
    Function: CurryTarget<Marker>,
{
    let signature = function.signature();
    debug!(
        arity = signature.arity(),
        variadic = signature.is_variadic(),
        "curried target function"
    );
    let frame = CurryFrame::open(signature.arity());
    CurryClosure {
        target: Arc::new(Target {
            signature,
            invoke: Box::new(move |bound: Vec<Value>, rest: Vec<Value>| {
                function.invoke(bound, rest)
            }),
        }),
        frame,
    }
}

/// One step of a curry chain: an owned frame plus the shared target.
pub struct CurryClosure<R> {
    target: Arc<Target<R>>,
    frame: CurryFrame,
}

/// Outcome of a [`CurryClosure::call`].
#[derive(Debug)]
pub enum Applied<R> {
    /// Gaps remain; the chain continues with this closure.
    Partial(CurryClosure<R>),
    /// Every position was bound and the target returned this value.
    Complete(R),
}

impl<R> CurryClosure<R> {
    /// Supplies the next arguments.
    ///
    /// Arguments pair with the open positions in declaration order; see
    /// [`resolve`](crate::resolve). When no position is left open the target
    /// runs with the bound values in declaration order followed by the
    /// staged variadic tail, and its return value comes back as
    /// [`Applied::Complete`]. Otherwise a new closure comes back as
    /// [`Applied::Partial`]. `self` is unchanged either way.
    ///
    /// # Errors
    ///
    /// Any error from [`resolve`](crate::resolve). On error no successor
    /// exists and `self` can be called again.
    pub fn call<I>(&self, arguments: I) -> Result<Applied<R>, CurryError>
    where
        I: IntoIterator<Item = Argument>,
    {
        let frame = resolve(&self.frame, &self.target.signature, arguments)
            .inspect_err(|error| debug!(%error, frame = %self.frame, "curry call rejected"))?;

        if !frame.is_saturated() {
            return Ok(Applied::Partial(Self {
                target: Arc::clone(&self.target),
                frame,
            }));
        }

        let (bound, rest) = frame.into_arguments();
        debug!(
            arity = bound.len(),
            rest = rest.len(),
            "invoking curried target"
        );
        (self.target.invoke)(bound, rest).map(Applied::Complete)
    }

    /// Binds one concrete value to the leftmost open position.
    ///
    /// # Errors
    ///
    /// As [`call`](Self::call) with a single argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapcurry::curry;
    ///
    /// let add = curry(|first: i32, second: i32| first + second);
    /// let add_five = add.apply(5).unwrap().partial().unwrap();
    /// assert_eq!(add_five.apply(3).unwrap().complete(), Some(8));
    /// assert_eq!(add_five.apply(10).unwrap().complete(), Some(15));
    /// ```
    pub fn apply<T: Any + Send + Sync>(&self, value: T) -> Result<Applied<R>, CurryError> {
        self.call([Argument::value(value)])
    }

    /// The target's signature.
    pub fn signature(&self) -> &Signature {
        &self.target.signature
    }

    /// Fixed arity of the target.
    pub fn arity(&self) -> usize {
        self.target.signature.arity()
    }

    /// Returns `true` if the target accepts a variadic tail.
    pub fn is_variadic(&self) -> bool {
        self.target.signature.is_variadic()
    }

    /// The frame this closure owns.
    pub const fn frame(&self) -> &CurryFrame {
        &self.frame
    }

    /// Open positions, ascending.
    pub fn open_positions(&self) -> Vec<usize> {
        self.frame.open_positions().collect()
    }

    /// Number of open positions.
    pub fn remaining(&self) -> usize {
        self.frame.remaining()
    }

    /// Returns `true` if `position` is bound.
    pub fn is_filled(&self, position: usize) -> bool {
        self.frame.is_filled(position)
    }

    /// Number of variadic values staged for the terminal call.
    pub fn staged_rest_len(&self) -> usize {
        self.frame.tail().len()
    }

    /// Post-composes `function` with the target, keeping the bound state.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapcurry::{args, curry};
    ///
    /// let pair = curry(|left: i32, right: i32| (left, right));
    /// let swapped = pair.map(|(left, right)| (right, left));
    /// assert_eq!(swapped.call(args![1, 2]).unwrap().complete(), Some((2, 1)));
    /// ```
    pub fn map<U, F>(self, function: F) -> CurryClosure<U>
    where
        R: 'static,
        F: Fn(R) -> U + Send + Sync + 'static,
    {
        let inner = self.target;
        CurryClosure {
            target: Arc::new(Target {
                signature: inner.signature.clone(),
                invoke: Box::new(move |bound: Vec<Value>, rest: Vec<Value>| {
                    (inner.invoke)(bound, rest).map(&function)
                }),
            }),
            frame: self.frame,
        }
    }
}

impl<R> Clone for CurryClosure<R> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            frame: self.frame.clone(),
        }
    }
}

impl<R> fmt::Debug for CurryClosure<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CurryClosure")
            .field("arity", &self.arity())
            .field("variadic", &self.is_variadic())
            .field("frame", &format_args!("{}", self.frame))
            .finish()
    }
}

impl<R> Applied<R> {
    /// Returns `true` for [`Applied::Complete`].
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The target's return value, if the call was terminal.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Partial(_) => None,
        }
    }

    /// The successor closure, if the chain continues.
    pub fn partial(self) -> Option<CurryClosure<R>> {
        match self {
            Self::Partial(closure) => Some(closure),
            Self::Complete(_) => None,
        }
    }
}

static_assertions::assert_impl_all!(CurryClosure<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(CurryClosure<std::rc::Rc<i32>>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;

    fn add_three(first: i32, second: i32, third: i32) -> i32 {
        first + second + third
    }

    #[rstest]
    fn chain_terminates_when_last_gap_fills() {
        let curried = curry(add_three);
        let step = curried.call(args![1]).unwrap().partial().unwrap();
        let step = step.call(args![2]).unwrap().partial().unwrap();
        assert_eq!(step.call(args![3]).unwrap().complete(), Some(6));
    }

    #[rstest]
    fn failed_call_leaves_closure_usable() {
        let curried = curry(add_three);
        assert!(curried.call(args![1, 2, 3, 4]).is_err());
        assert_eq!(curried.remaining(), 3);
        assert_eq!(curried.call(args![1, 2, 3]).unwrap().complete(), Some(6));
    }

    #[rstest]
    fn nullary_target_runs_on_first_call() {
        let curried = curry(|| "done");
        assert_eq!(curried.arity(), 0);
        assert_eq!(curried.call(args![]).unwrap().complete(), Some("done"));
    }

    #[rstest]
    fn debug_shows_frame() {
        let step = curry(add_three)
            .call(args![__, 2])
            .unwrap()
            .partial()
            .unwrap();
        assert_eq!(
            format!("{step:?}"),
            "CurryClosure { arity: 3, variadic: false, frame: (_, i32, _) }"
        );
    }

    #[rstest]
    fn map_keeps_bound_positions() {
        let step = curry(add_three)
            .call(args![__, 10])
            .unwrap()
            .partial()
            .unwrap();
        let doubled = step.map(|sum| sum * 2);
        assert_eq!(doubled.open_positions(), vec![0, 2]);
        assert_eq!(doubled.call(args![1, 1]).unwrap().complete(), Some(24));
    }
}
