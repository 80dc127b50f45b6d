//! The storage underlying every [`Tuple`](crate::Tuple): a list of [`Slot`]s, one per position.
//!
//! A sequence `(A, B, C)` is stored as `(Slot<_2, C>, (Slot<_1, B>, (Slot<_0, A>, ())))`, where
//! `_i` is the unary number for `i`. Each slot carries its own position in its type, so positions
//! holding the same element type are still distinct, and selection of a position is resolved by
//! comparing the requested position against each slot's own, rather than by element type.
//!
//! The last position is outermost so that dropping the storage drops its elements in reverse
//! position order.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::ConversionError,
    seq::{FromValues, Sequence, TryFromValues},
    slot::Slot,
    unary::{Compare, Unary},
};

/// Selection marker: the requested position is the one held in the head slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Here;

/// Selection marker: the requested position is held somewhere in the rest of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct There;

/// Selection marker: the requested position is greater than any position in the list.
///
/// Nothing implements [`SelectAt`] for this marker, so selecting it is a type error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Beyond;

/// Where the head slot at position `N` sends a request for position `P`.
pub type Branch<N, P> = <(N, P) as Compare<Beyond, Here, There>>::Result;

/// Select the element at position `P` of a slot list.
///
/// # Examples
///
/// ```
/// use htuple::{seq::Sequence, storage::Select, unary::UnaryOf};
///
/// let mut slots = ('a', 'b', 'c').into_slots();
/// assert_eq!(*Select::<UnaryOf<0>>::select(&slots), 'a');
///
/// *Select::<UnaryOf<2>>::select_mut(&mut slots) = 'z';
/// assert_eq!(Select::<UnaryOf<2>>::take(slots), 'z');
/// ```
///
/// There is no slot at position 3 of a three-element list:
///
/// ```compile_fail
/// use htuple::{seq::Sequence, storage::Select, unary::UnaryOf};
///
/// let slots = ('a', 'b', 'c').into_slots();
/// let _ = Select::<UnaryOf<3>>::select(&slots);
/// ```
pub trait Select<P: Unary>: Sized {
    /// The type of the element at position `P`.
    type Output;

    /// A shared reference to the element at position `P`.
    fn select(&self) -> &Self::Output;

    /// A mutable reference to the element at position `P`.
    fn select_mut(&mut self) -> &mut Self::Output;

    /// Move the element at position `P` out, dropping every other element.
    fn take(self) -> Self::Output;
}

/// Select the element at position `P`, having already decided which way to go at the head of the
/// list. `B` is one of [`Here`], [`There`], or [`Beyond`].
pub trait SelectAt<P: Unary, B>: Sized {
    /// The type of the element at position `P`.
    type Output;

    /// A shared reference to the element at position `P`.
    fn select_at(&self) -> &Self::Output;

    /// A mutable reference to the element at position `P`.
    fn select_at_mut(&mut self) -> &mut Self::Output;

    /// Move the element at position `P` out, dropping every other element.
    fn take_at(self) -> Self::Output;
}

impl<P: Unary, N: Unary, T, Rest> SelectAt<P, Here> for (Slot<N, T>, Rest) {
    type Output = T;

    fn select_at(&self) -> &T {
        self.0.get()
    }

    fn select_at_mut(&mut self) -> &mut T {
        self.0.get_mut()
    }

    fn take_at(self) -> T {
        self.0.into_inner()
    }
}

impl<P: Unary, N: Unary, T, Rest: Select<P>> SelectAt<P, There> for (Slot<N, T>, Rest) {
    type Output = Rest::Output;

    fn select_at(&self) -> &Self::Output {
        self.1.select()
    }

    fn select_at_mut(&mut self) -> &mut Self::Output {
        self.1.select_mut()
    }

    fn take_at(self) -> Self::Output {
        self.1.take()
    }
}

impl<P: Unary, N: Unary, T, Rest> Select<P> for (Slot<N, T>, Rest)
where
    (N, P): Compare<Beyond, Here, There>,
    Self: SelectAt<P, Branch<N, P>>,
{
    type Output = <Self as SelectAt<P, Branch<N, P>>>::Output;

    fn select(&self) -> &Self::Output {
        <Self as SelectAt<P, Branch<N, P>>>::select_at(self)
    }

    fn select_mut(&mut self) -> &mut Self::Output {
        <Self as SelectAt<P, Branch<N, P>>>::select_at_mut(self)
    }

    fn take(self) -> Self::Output {
        <Self as SelectAt<P, Branch<N, P>>>::take_at(self)
    }
}

/// Structural equality of two slot lists of the same shape.
pub trait SlotsEq {
    /// Whether every pair of same-position elements is equal, checked in position order and
    /// stopping at the first unequal pair.
    fn slots_eq(&self, other: &Self) -> bool;
}

impl SlotsEq for () {
    fn slots_eq(&self, _: &()) -> bool {
        true
    }
}

impl<N, T: PartialEq, Rest: SlotsEq> SlotsEq for (Slot<N, T>, Rest) {
    fn slots_eq(&self, other: &Self) -> bool {
        // Lower positions are nested deeper
        self.1.slots_eq(&other.1) && self.0.get() == other.0.get()
    }
}

/// Hashing of a slot list, one element at a time in position order.
pub trait SlotsHash {
    /// Feed every element, in position order, into `state`.
    fn hash_slots<H: Hasher>(&self, state: &mut H);
}

impl SlotsHash for () {
    fn hash_slots<H: Hasher>(&self, _: &mut H) {}
}

impl<N, T: Hash, Rest: SlotsHash> SlotsHash for (Slot<N, T>, Rest) {
    fn hash_slots<H: Hasher>(&self, state: &mut H) {
        self.1.hash_slots(state);
        self.0.get().hash(state);
    }
}

/// Debug formatting of a slot list as a sequence of fields in position order.
pub trait SlotsDebug {
    /// Add every element, in position order, as a field of `f`.
    fn debug_slots(&self, f: &mut fmt::DebugTuple<'_, '_>);
}

impl SlotsDebug for () {
    fn debug_slots(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<N, T: fmt::Debug, Rest: SlotsDebug> SlotsDebug for (Slot<N, T>, Rest) {
    fn debug_slots(&self, f: &mut fmt::DebugTuple<'_, '_>) {
        self.1.debug_slots(f);
        let _ = f.field(self.0.get());
    }
}

/// The storage for the sequence `Ts`: one [`Slot`] per position.
///
/// Cloning, copying, and defaulting a `Storage` each act on every slot independently.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "Ts::Slots: Clone"),
    Copy(bound = "Ts::Slots: Copy"),
    Default(bound = "Ts::Slots: Default")
)]
pub struct Storage<Ts: Sequence> {
    slots: Ts::Slots,
}

impl<Ts: Sequence> Storage<Ts> {
    /// Store each value in the slot for its position.
    pub fn new(values: Ts) -> Self {
        Storage {
            slots: values.into_slots(),
        }
    }

    /// Store each value, converted into the type declared at its position.
    pub fn convert<Us>(values: Us) -> Self
    where
        Ts: FromValues<Us>,
    {
        Storage::new(Ts::from_values(values))
    }

    /// Store each value, converted into the type declared at its position, or fail with the
    /// lowest position whose conversion failed.
    pub fn try_convert<Us>(values: Us) -> Result<Self, ConversionError>
    where
        Ts: TryFromValues<Us>,
    {
        Ok(Storage::new(Ts::try_from_values(values)?))
    }

    /// Move every value back out of its slot.
    pub fn into_values(self) -> Ts {
        Ts::from_slots(self.slots)
    }

    /// The underlying slot list.
    pub fn slots(&self) -> &Ts::Slots {
        &self.slots
    }

    /// A shared reference to the element at position `P`.
    pub fn select<P: Unary>(&self) -> &<Ts::Slots as Select<P>>::Output
    where
        Ts::Slots: Select<P>,
    {
        self.slots.select()
    }

    /// A mutable reference to the element at position `P`.
    pub fn select_mut<P: Unary>(&mut self) -> &mut <Ts::Slots as Select<P>>::Output
    where
        Ts::Slots: Select<P>,
    {
        self.slots.select_mut()
    }

    /// Move the element at position `P` out, dropping every other element.
    pub fn take<P: Unary>(self) -> <Ts::Slots as Select<P>>::Output
    where
        Ts::Slots: Select<P>,
    {
        self.slots.take()
    }
}

impl<Ts: Sequence> PartialEq for Storage<Ts>
where
    Ts::Slots: SlotsEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.slots.slots_eq(&other.slots)
    }
}

impl<Ts: Sequence> Eq for Storage<Ts> where Ts::Slots: SlotsEq + Eq {}

impl<Ts: Sequence> Hash for Storage<Ts>
where
    Ts::Slots: SlotsHash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots.hash_slots(state)
    }
}

impl<Ts: Sequence> fmt::Debug for Storage<Ts>
where
    Ts::Slots: SlotsDebug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut fields = f.debug_tuple("Storage");
        self.slots.debug_slots(&mut fields);
        fields.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
    use std::cell::Cell;

    type Slots = <(u8, u8, &'static str) as Sequence>::Slots;

    #[test]
    fn branches() {
        assert_type_eq_all!(Branch<UnaryOf<2>, UnaryOf<0>>, There);
        assert_type_eq_all!(Branch<UnaryOf<2>, UnaryOf<2>>, Here);
        assert_type_eq_all!(Branch<UnaryOf<2>, UnaryOf<3>>, Beyond);
    }

    #[test]
    fn selection_is_by_position_not_type() {
        assert_type_eq_all!(<Slots as Select<UnaryOf<0>>>::Output, u8);
        assert_type_eq_all!(<Slots as Select<UnaryOf<1>>>::Output, u8);
        assert_type_eq_all!(<Slots as Select<UnaryOf<2>>>::Output, &'static str);
        assert_impl_all!(Slots: Select<UnaryOf<0>>, Select<UnaryOf<1>>, Select<UnaryOf<2>>);
        assert_not_impl_any!(Slots: Select<UnaryOf<3>>, Select<UnaryOf<4>>);
        assert_not_impl_any!((): Select<UnaryOf<0>>);
    }

    #[test]
    fn select_each_position() {
        let mut storage = Storage::new((1_u8, 2_u8, "three"));
        assert_eq!(*storage.select::<UnaryOf<0>>(), 1);
        assert_eq!(*storage.select::<UnaryOf<1>>(), 2);
        assert_eq!(*storage.select::<UnaryOf<2>>(), "three");

        *storage.select_mut::<UnaryOf<1>>() += 40;
        assert_eq!(storage.into_values(), (1, 42, "three"));
    }

    #[test]
    fn take_moves_out_one_element() {
        let storage = Storage::new((String::from("a"), String::from("b")));
        assert_eq!(storage.take::<UnaryOf<0>>(), "a");
    }

    #[test]
    fn convert_and_try_convert() {
        let storage: Storage<(u32, f64)> = Storage::convert((1_u8, 2_f32));
        assert_eq!(storage.into_values(), (1, 2.0));

        let error = Storage::<(u8, i8)>::try_convert((1_u16, 200_u16)).unwrap_err();
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn equality_checks_positions_in_order() {
        #[derive(Debug)]
        struct Counted<'a>(u8, &'a Cell<usize>);

        impl PartialEq for Counted<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.1.set(self.1.get() + 1);
                self.0 == other.0
            }
        }

        let count = Cell::new(0);
        let left = Storage::new((Counted(0, &count), Counted(1, &count), Counted(2, &count)));
        let right = Storage::new((Counted(9, &count), Counted(1, &count), Counted(2, &count)));
        assert!(left != right);
        assert_eq!(count.get(), 1);

        count.set(0);
        assert!(left == left);
        assert_eq!(count.get(), 3);
    }

    #[derive(Default)]
    struct Recorder(Vec<u8>);

    impl Hasher for Recorder {
        fn finish(&self) -> u64 {
            0
        }

        fn write(&mut self, bytes: &[u8]) {
            self.0.extend_from_slice(bytes);
        }
    }

    #[test]
    fn hashing_visits_positions_in_order() {
        let mut recorder = Recorder::default();
        Storage::new((1_u8, 2_u8, 3_u8)).hash(&mut recorder);
        assert_eq!(recorder.0, vec![1, 2, 3]);

        let mut recorder = Recorder::default();
        Storage::new(()).hash(&mut recorder);
        assert!(recorder.0.is_empty());
    }

    #[test]
    fn default_and_debug() {
        let storage: Storage<(u8, String, bool)> = Storage::default();
        assert_eq!(format!("{:?}", storage), r#"Storage(0, "", false)"#);
        assert_eq!(format!("{:?}", Storage::new(())), "Storage");
    }
}
