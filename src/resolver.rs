//! The gap resolver: merges one call's arguments into a frame.
//!
//! Arguments are paired left to right with the frame's open positions in
//! ascending declaration order. A concrete value fills its position; a
//! placeholder leaves it open. Open positions that no argument reaches stay
//! open. Arguments left over once every open position has been paired are
//! overflow: staged as the variadic tail when the target has one, an
//! [`ArityOverflow`](CurryError::ArityOverflow) otherwise.
//!
//! The input frame is never modified. The resolver either returns a complete
//! successor frame or an error, never a partially merged state.

use tracing::trace;

use crate::argument::Argument;
use crate::error::CurryError;
use crate::frame::CurryFrame;
use crate::signature::Signature;

/// Merges `arguments` into `frame` and returns the successor frame.
///
/// # Errors
///
/// - [`CurryError::ArityOverflow`] if more arguments than open positions
///   were supplied and the target is not variadic. This is decided from the
///   counts alone, before any value is type-checked.
/// - [`CurryError::ArgumentType`] if a value does not have the type declared
///   at the position it lands on. Positions are checked left to right and the
///   first mismatch is reported.
/// - [`CurryError::MisplacedPlaceholder`] if a placeholder falls into the
///   variadic tail.
///
/// # Examples
///
/// ```
/// use gapcurry::{args, resolve, CurryFrame, ParameterShape, Signature};
///
/// let signature = Signature::fixed(vec![ParameterShape::of::<i32>(); 3]);
/// let frame = CurryFrame::open(3);
///
/// let next = resolve(&frame, &signature, args![__, 25, __]).unwrap();
/// assert_eq!(next.open_positions().collect::<Vec<_>>(), vec![0, 2]);
///
/// let next = resolve(&next, &signature, args![__, 7]).unwrap();
/// assert_eq!(next.open_positions().collect::<Vec<_>>(), vec![0]);
/// ```
pub fn resolve<I>(
    frame: &CurryFrame,
    signature: &Signature,
    arguments: I,
) -> Result<CurryFrame, CurryError>
where
    I: IntoIterator<Item = Argument>,
{
    let arguments: Vec<Argument> = arguments.into_iter().collect();
    let open = frame.remaining();
    let supplied = arguments.len();

    trace!(
        open,
        supplied,
        overflow = supplied.saturating_sub(open),
        "resolving curry arguments"
    );

    if supplied > open && !signature.is_variadic() {
        return Err(CurryError::ArityOverflow {
            arity: signature.arity(),
            open,
            supplied,
        });
    }

    let mut next = frame.clone();
    let mut arguments = arguments.into_iter();

    for (position, argument) in frame.open_positions().zip(arguments.by_ref()) {
        if let Some(value) = argument.into_value() {
            if let Some(shape) = signature.parameter(position) {
                shape.check(&value, position)?;
            }
            next.fill(position, value);
        }
    }

    let Some(rest) = signature.rest() else {
        return Ok(next);
    };

    for argument in arguments {
        let position = signature.arity() + next.tail().len();
        let Some(value) = argument.into_value() else {
            return Err(CurryError::MisplacedPlaceholder { position });
        };
        rest.check(&value, position)?;
        next.stage(value);
    }

    Ok(next)
}
