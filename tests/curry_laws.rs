//! Property-based tests for currying laws.
//!
//! 1. **Fill-order independence**: binding the positions of a fixed-arity
//!    function in any order, across any number of calls, gives the same
//!    result as calling the function directly.
//! 2. **Monotonic filling**: a filled position keeps its value for the rest
//!    of the chain, and the set of filled positions only grows.
//! 3. **Immediate termination**: supplying every value in the first call
//!    behaves like a direct call.
//! 4. **Variadic overflow**: overflow values reach the tail in arrival order.

use gapcurry::prelude::*;
use gapcurry::{ArgumentSlot, CurryFrame};
use proptest::prelude::*;

fn quadruple(first: i64, second: i64, third: i64, fourth: i64) -> (i64, i64, i64, i64) {
    (first, second, third, fourth)
}

fn with_rest(first: i64, second: i64, rest: Vec<i64>) -> (i64, i64, Vec<i64>) {
    (first, second, rest)
}

/// Builds the arguments that bind exactly `targets` among `open`: values at
/// target positions, placeholders for the open positions skipped before the
/// last target.
fn arguments_for(open: &[usize], targets: &[usize], values: &[i64]) -> Vec<Argument> {
    let last = open
        .iter()
        .rposition(|position| targets.contains(position))
        .map_or(0, |index| index + 1);
    open[..last]
        .iter()
        .map(|position| {
            if targets.contains(position) {
                Argument::value(values[*position])
            } else {
                Argument::from(__)
            }
        })
        .collect()
}

fn bound_values(frame: &CurryFrame) -> Vec<Option<i64>> {
    frame
        .slots()
        .iter()
        .map(|slot| match slot {
            ArgumentSlot::Filled(value) => value.downcast_ref::<i64>().copied(),
            ArgumentSlot::Gap => None,
        })
        .collect()
}

fn fill_plan() -> impl Strategy<Value = (Vec<usize>, usize)> {
    (Just(vec![0_usize, 1, 2, 3]).prop_shuffle(), 1_usize..=4)
}

proptest! {
    #[test]
    fn prop_fill_order_independence(
        values in prop::collection::vec(any::<i64>(), 4),
        (order, chunk) in fill_plan(),
    ) {
        let mut closure = curry(quadruple);
        let mut result = None;
        let chunks: Vec<&[usize]> = order.chunks(chunk).collect();

        for (index, targets) in chunks.iter().enumerate() {
            let arguments = arguments_for(&closure.open_positions(), targets, &values);
            match closure.call(arguments).unwrap() {
                Applied::Partial(next) => {
                    prop_assert!(index + 1 < chunks.len());
                    closure = next;
                }
                Applied::Complete(output) => {
                    prop_assert_eq!(index + 1, chunks.len());
                    result = Some(output);
                }
            }
        }

        prop_assert_eq!(result, Some(quadruple(values[0], values[1], values[2], values[3])));
    }

    #[test]
    fn prop_filled_positions_are_never_rebound(
        values in prop::collection::vec(any::<i64>(), 4),
        (order, chunk) in fill_plan(),
        noise in any::<i64>(),
    ) {
        let mut closure = curry(quadruple);
        let mut previous = bound_values(closure.frame());

        for targets in order.chunks(chunk) {
            // Offer an extra value to every still-open position; it must only
            // land on open positions.
            let offered = closure.call(vec![Argument::value(noise)]).unwrap();
            if let Applied::Partial(with_noise) = offered {
                let noisy_values = bound_values(with_noise.frame());
                for (before, after) in previous.iter().zip(&noisy_values) {
                    if before.is_some() {
                        prop_assert_eq!(before, after);
                    }
                }
            }

            let arguments = arguments_for(&closure.open_positions(), targets, &values);
            match closure.call(arguments).unwrap() {
                Applied::Partial(next) => {
                    let current = bound_values(next.frame());
                    for (before, after) in previous.iter().zip(&current) {
                        if before.is_some() {
                            prop_assert_eq!(before, after);
                        }
                    }
                    prop_assert!(next.remaining() < closure.remaining());
                    previous = current;
                    closure = next;
                }
                Applied::Complete(_) => break,
            }
        }
    }

    #[test]
    fn prop_single_call_equals_direct_call(
        first in any::<i64>(),
        second in any::<i64>(),
        third in any::<i64>(),
        fourth in any::<i64>(),
    ) {
        let output = apply!(curry(quadruple), first, second, third, fourth)
            .unwrap()
            .complete();
        prop_assert_eq!(output, Some(quadruple(first, second, third, fourth)));
    }

    #[test]
    fn prop_overflow_keeps_arrival_order(
        first in any::<i64>(),
        second in any::<i64>(),
        early in prop::collection::vec(any::<i64>(), 0..4),
        late in prop::collection::vec(any::<i64>(), 0..4),
    ) {
        let closure = curry(variadic(with_rest));

        let mut arguments = vec![Argument::from(__), Argument::from(__)];
        arguments.extend(early.iter().copied().map(Argument::value));
        let step = closure.call(arguments).unwrap().partial().unwrap();
        prop_assert_eq!(step.staged_rest_len(), early.len());

        let mut arguments = vec![Argument::value(first), Argument::value(second)];
        arguments.extend(late.iter().copied().map(Argument::value));
        let output = step.call(arguments).unwrap().complete();

        let expected_rest: Vec<i64> = early.iter().chain(&late).copied().collect();
        prop_assert_eq!(output, Some((first, second, expected_rest)));
    }

    #[test]
    fn prop_fixed_overflow_always_errors(
        extra in prop::collection::vec(any::<i64>(), 1..4),
        filled in 0_usize..4,
    ) {
        let values = [1_i64, 2, 3, 4];
        let mut arguments: Vec<Argument> = values[..filled]
            .iter()
            .copied()
            .map(Argument::value)
            .collect();
        let closure = if filled == 0 {
            curry(quadruple)
        } else {
            curry(quadruple).call(arguments.drain(..)).unwrap().partial().unwrap()
        };

        let open = closure.remaining();
        let supplied: Vec<Argument> = (0..open)
            .map(|_| Argument::from(__))
            .chain(extra.iter().copied().map(Argument::value))
            .collect();
        let count = supplied.len();

        prop_assert_eq!(
            closure.call(supplied).unwrap_err(),
            CurryError::ArityOverflow { arity: 4, open, supplied: count }
        );
    }
}
