//! Curry frames: which parameter positions are bound at one step of a chain.

use std::fmt;

use smallvec::SmallVec;

use crate::argument::Value;

/// Positions stored inline before a frame spills to the heap.
const INLINE_SLOTS: usize = 8;

/// State of one declared parameter position.
#[derive(Clone, Debug)]
pub enum ArgumentSlot {
    /// Bound to a value; never reopened or overwritten afterwards.
    Filled(Value),
    /// Not bound yet.
    Gap,
}

impl ArgumentSlot {
    /// Returns `true` for [`ArgumentSlot::Gap`].
    pub const fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    /// The bound value, if any.
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Filled(value) => Some(value),
            Self::Gap => None,
        }
    }
}

/// Cumulative partial-application state: one slot per declared parameter,
/// indexed by declaration position, plus the staged variadic tail.
///
/// A frame is never changed once a closure owns it. Each call derives a new
/// frame, in which the set of filled positions is a superset of the old one.
#[derive(Clone, Debug)]
pub struct CurryFrame {
    slots: SmallVec<[ArgumentSlot; INLINE_SLOTS]>,
    tail: Vec<Value>,
}

impl CurryFrame {
    /// A frame for `arity` parameters, all open.
    pub fn open(arity: usize) -> Self {
        Self {
            slots: (0..arity).map(|_| ArgumentSlot::Gap).collect(),
            tail: Vec::new(),
        }
    }

    /// Slots in declaration order.
    pub fn slots(&self) -> &[ArgumentSlot] {
        &self.slots
    }

    /// Variadic values staged so far, in arrival order.
    pub fn tail(&self) -> &[Value] {
        &self.tail
    }

    /// Indices of the open positions, ascending.
    pub fn open_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_gap())
            .map(|(position, _)| position)
    }

    /// Number of open positions.
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_gap()).count()
    }

    /// Returns `true` once no position is open.
    pub fn is_saturated(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_gap())
    }

    /// Returns `true` if `position` exists and is bound.
    pub fn is_filled(&self, position: usize) -> bool {
        self.slots.get(position).is_some_and(|slot| !slot.is_gap())
    }

    /// Binds an open position. Positions that are already filled are left
    /// untouched.
    pub(crate) fn fill(&mut self, position: usize, value: Value) {
        if let Some(slot) = self.slots.get_mut(position)
            && slot.is_gap()
        {
            *slot = ArgumentSlot::Filled(value);
        }
    }

    pub(crate) fn stage(&mut self, value: Value) {
        self.tail.push(value);
    }

    /// Splits into bound values in declaration order and the variadic tail.
    /// Gaps are skipped, so an unsaturated frame yields a short list.
    pub(crate) fn into_arguments(self) -> (Vec<Value>, Vec<Value>) {
        let bound = self
            .slots
            .into_iter()
            .filter_map(|slot| match slot {
                ArgumentSlot::Filled(value) => Some(value),
                ArgumentSlot::Gap => None,
            })
            .collect();
        (bound, self.tail)
    }
}

impl fmt::Display for CurryFrame {
    /// Renders filled positions by type and gaps as `_`, e.g.
    /// `(_, u32, bool; +2)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("(")?;
        for (position, slot) in self.slots.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            match slot {
                ArgumentSlot::Filled(value) => formatter.write_str(value.type_name())?,
                ArgumentSlot::Gap => formatter.write_str("_")?,
            }
        }
        if !self.tail.is_empty() {
            write!(formatter, "; +{}", self.tail.len())?;
        }
        formatter.write_str(")")
    }
}
