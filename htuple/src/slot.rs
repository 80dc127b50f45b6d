//! A single element of a tuple, tagged with its type-level position.

use std::{fmt, marker::PhantomData};

use crate::unary::Unary;

/// A single element of a [`Tuple`](crate::Tuple): one value of type `T`, held at the type-level
/// position `N`.
///
/// The position is part of the type, so two slots holding the same type at different positions
/// are distinct types and can never be confused for one another.
///
/// # Examples
///
/// ```
/// use htuple::{slot::Slot, unary::UnaryOf};
///
/// let mut slot: Slot<UnaryOf<2>, String> = Slot::convert("hello");
/// assert_eq!(slot.position(), 2);
///
/// slot.get_mut().push_str(", world");
/// assert_eq!(slot.get(), "hello, world");
/// assert_eq!(slot.into_inner(), "hello, world");
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy"),
    Default(bound = "T: Default"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    Hash(bound = "T: std::hash::Hash")
)]
#[repr(transparent)]
pub struct Slot<N, T> {
    value: T,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    position: PhantomData<fn() -> N>,
}

impl<N, T> Slot<N, T> {
    /// Wrap a value in a slot.
    pub const fn new(value: T) -> Self {
        Slot {
            value,
            position: PhantomData,
        }
    }

    /// Wrap any value convertible into `T` in a slot.
    pub fn convert<U: Into<T>>(value: U) -> Self {
        Slot::new(value.into())
    }

    /// A shared reference to the held value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// A mutable reference to the held value.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Take the held value out of the slot.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<N: Unary, T> Slot<N, T> {
    /// The position of this slot, as a `usize`.
    pub fn position(&self) -> usize {
        N::VALUE
    }
}

impl<N, T> From<T> for Slot<N, T> {
    fn from(value: T) -> Self {
        Slot::new(value)
    }
}

impl<N: Unary, T: fmt::Debug> fmt::Debug for Slot<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Slot")
            .field("position", &N::VALUE)
            .field("value", &self.value)
            .finish()
    }
}
