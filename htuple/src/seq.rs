//! Conversions back and forth between flat type sequences like `(A, B, C)`, their corresponding
//! inductive lists like `(A, (B, (C, ())))`, and the slot lists which store them.
//!
//! Internally, this library uses inductive type-level lists, but presents an external interface in
//! terms of flat tuples, for readability. The traits here convert between the representations.
//!
//! At present, sequences up to length 32 are supported.

use crate::{error::ConversionError, slot::Slot, unary::*};

/// A flat type sequence `(T0, T1, ...)` which can be stored in a [`Tuple`](crate::Tuple).
pub trait Sequence: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self> + HasLength;

    /// The storage for this sequence: one [`Slot`] per position, with the last position
    /// outermost.
    type Slots;

    /// Move each value into the slot for its position.
    fn into_slots(self) -> Self::Slots;

    /// Move each value back out of its slot.
    fn from_slots(slots: Self::Slots) -> Self;
}

/// Convert an inductive list structure into its corresponding flat sequence.
pub trait List: Sized {
    /// The corresponding flat sequence.
    type AsTuple: Sequence<AsList = Self>;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Select the type at position `P` of a type-level list, by peeling off one leading element per
/// decrement of `P` until `P` reaches zero.
///
/// There is no impl for the empty list, so asking for a position at or beyond the length of the
/// list is a type error.
pub trait Element<P: Unary> {
    /// The type at position `P`.
    type Type;
}

impl<T, Ts> Element<Z> for (T, Ts) {
    type Type = T;
}

impl<P: Unary, T, Ts: Element<P>> Element<S<P>> for (T, Ts) {
    type Type = Ts::Type;
}

/// Build a flat sequence from a flat sequence of the same length whose elements each convert
/// [`Into`] the corresponding element of `Self`.
pub trait FromValues<Us>: Sized {
    /// Convert each value into its place.
    fn from_values(values: Us) -> Self;
}

/// Build a flat sequence from a flat sequence of the same length whose elements each convert
/// [`TryInto`](std::convert::TryInto) the corresponding element of `Self`.
pub trait TryFromValues<Us>: Sized {
    /// Convert each value into its place, in position order, stopping at the first failure.
    fn try_from_values(values: Us) -> Result<Self, ConversionError>;
}

htuple_macro::impl_sequences!(32);
