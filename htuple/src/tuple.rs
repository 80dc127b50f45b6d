use call_by::{Convention, Mut, Ref, Val};
use std::fmt;

use crate::{
    error::ConversionError,
    seq::{Element, FromValues, HasLength, Sequence, TryFromValues},
    storage::{Select, SlotsDebug, SlotsEq, SlotsHash, Storage},
    unary::{Number, ToUnary, Unary, UnaryOf},
};

/// The type of the element at position `I` of the sequence `Ts`, as found by [`Tuple::get`].
pub type ElementAt<Ts, const I: usize> = <<Ts as Sequence>::Slots as Select<UnaryOf<I>>>::Output;

/// The type declared at position `I` of the tuple type `T`.
///
/// # Examples
///
/// ```
/// use htuple::{Tuple, TupleElement};
/// use static_assertions::assert_type_eq_all;
///
/// type Point = Tuple<(i32, f64, char)>;
///
/// assert_type_eq_all!(TupleElement<0, Point>, i32);
/// assert_type_eq_all!(TupleElement<1, Point>, f64);
/// assert_type_eq_all!(TupleElement<2, Point>, char);
/// ```
///
/// There is no position 3 in a tuple of three elements:
///
/// ```compile_fail
/// use htuple::{Tuple, TupleElement};
///
/// let _: Option<TupleElement<3, Tuple<(i32, f64, char)>>> = None;
/// ```
pub type TupleElement<const I: usize, T> =
    <<<T as Shape>::Types as Sequence>::AsList as Element<UnaryOf<I>>>::Type;

/// The static shape of a tuple type: the sequence of its element types, and their number.
pub trait Shape {
    /// The flat sequence of element types.
    type Types: Sequence;

    /// The number of elements.
    const SIZE: usize;
}

/// The number of elements in the tuple type `T`.
///
/// # Examples
///
/// ```
/// use htuple::{tuple_size, Tuple};
///
/// assert_eq!(tuple_size::<Tuple<()>>(), 0);
/// assert_eq!(tuple_size::<Tuple<(String,)>>(), 1);
/// assert_eq!(tuple_size::<Tuple<(i32, f64, char)>>(), 3);
/// ```
pub const fn tuple_size<T: Shape>() -> usize {
    T::SIZE
}

/// A heterogeneous tuple of fixed size, holding one value of each type in the sequence `Ts`.
///
/// The sequence is written as an ordinary Rust tuple type: `Tuple<(i32, f64, char)>` holds an
/// `i32` at position 0, an `f64` at position 1, and a `char` at position 2. Positions are resolved
/// at compile time, so asking for a position which does not exist is a type error rather than a
/// runtime failure.
///
/// # Examples
///
/// ```
/// use htuple::prelude::*;
///
/// let mut t: Tuple<(i32, f64, char)> = Tuple::new((42, 3.5, 'a'));
/// assert_eq!(*t.get::<0>(), 42);
/// assert_eq!(*t.get::<1>(), 3.5);
/// assert_eq!(*t.get::<2>(), 'a');
///
/// *t.get_mut::<0>() += 1;
/// assert_eq!(t, make_tuple!(43, 3.5, 'a'));
/// ```
///
/// Construction must supply exactly one value per position:
///
/// ```compile_fail
/// use htuple::Tuple;
///
/// let t: Tuple<(i32, f64, char)> = Tuple::new((42, 3.5));
/// ```
///
/// Positions are checked against the length of the tuple:
///
/// ```compile_fail
/// use htuple::Tuple;
///
/// let t: Tuple<(i32, f64, char)> = Tuple::new((42, 3.5, 'a'));
/// let _ = t.get::<3>();
/// ```
///
/// Equality is available only when every element can be compared, but such a tuple can still be
/// constructed and used:
///
/// ```compile_fail
/// use htuple::Tuple;
///
/// struct Opaque;
///
/// let t = Tuple::new((1, Opaque));
/// let _ = t == Tuple::new((1, Opaque));
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = "Ts::Slots: Clone"),
    Copy(bound = "Ts::Slots: Copy"),
    Default(bound = "Ts::Slots: Default"),
    Hash(bound = "Ts::Slots: SlotsHash")
)]
pub struct Tuple<Ts: Sequence> {
    storage: Storage<Ts>,
}

impl<Ts: Sequence> Tuple<Ts> {
    /// The number of elements in this tuple type.
    pub const SIZE: usize = <<Ts::AsList as HasLength>::Length as Unary>::VALUE;

    /// Construct a tuple from exactly one value per position, in order.
    pub fn new(values: Ts) -> Self {
        Tuple {
            storage: Storage::new(values),
        }
    }

    /// Construct a tuple from one value per position, each converted [`Into`] the type declared at
    /// its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use htuple::Tuple;
    ///
    /// let t: Tuple<(u64, String)> = Tuple::convert((7_u8, "seven"));
    /// assert_eq!(t.get::<1>(), "seven");
    /// ```
    pub fn convert<Us>(values: Us) -> Self
    where
        Ts: FromValues<Us>,
    {
        Tuple {
            storage: Storage::convert(values),
        }
    }

    /// Construct a tuple from one value per position, each converted with
    /// [`TryInto`](std::convert::TryInto) into the type declared at its position.
    ///
    /// Values are converted in position order, and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] naming the lowest position whose value could not be
    /// converted.
    ///
    /// # Examples
    ///
    /// ```
    /// use htuple::Tuple;
    ///
    /// let ok: Tuple<(u8, i8)> = Tuple::try_convert((200_u32, -100_i32)).unwrap();
    /// assert_eq!(ok.into_inner(), (200, -100));
    ///
    /// let err = Tuple::<(u8, i8)>::try_convert((200_u32, 200_i32)).unwrap_err();
    /// assert_eq!(err.position(), 1);
    /// ```
    pub fn try_convert<Us>(values: Us) -> Result<Self, ConversionError>
    where
        Ts: TryFromValues<Us>,
    {
        Ok(Tuple {
            storage: Storage::try_convert(values)?,
        })
    }

    /// Unpack this tuple into the corresponding flat Rust tuple.
    pub fn into_inner(self) -> Ts {
        self.storage.into_values()
    }

    /// The number of elements in this tuple; the same as [`Tuple::SIZE`].
    pub fn size(&self) -> usize {
        Self::SIZE
    }

    /// A shared reference to the element at position `I`.
    pub fn get<const I: usize>(&self) -> &ElementAt<Ts, I>
    where
        Number<I>: ToUnary,
        Ts::Slots: Select<UnaryOf<I>>,
    {
        self.storage.select::<UnaryOf<I>>()
    }

    /// A mutable reference to the element at position `I`.
    pub fn get_mut<const I: usize>(&mut self) -> &mut ElementAt<Ts, I>
    where
        Number<I>: ToUnary,
        Ts::Slots: Select<UnaryOf<I>>,
    {
        self.storage.select_mut::<UnaryOf<I>>()
    }

    /// Move the element at position `I` out of this tuple, dropping all the others.
    pub fn take<const I: usize>(self) -> ElementAt<Ts, I>
    where
        Number<I>: ToUnary,
        Ts::Slots: Select<UnaryOf<I>>,
    {
        self.storage.take::<UnaryOf<I>>()
    }
}

impl<Ts: Sequence> Shape for Tuple<Ts> {
    type Types = Ts;
    const SIZE: usize = Tuple::<Ts>::SIZE;
}

impl<Ts: Sequence> From<Ts> for Tuple<Ts> {
    fn from(values: Ts) -> Self {
        Tuple::new(values)
    }
}

impl<Ts: Sequence> PartialEq for Tuple<Ts>
where
    Ts::Slots: SlotsEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<Ts: Sequence> Eq for Tuple<Ts> where Ts::Slots: SlotsEq + Eq {}

impl<Ts: Sequence> fmt::Debug for Tuple<Ts>
where
    Ts::Slots: SlotsDebug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut fields = f.debug_tuple("Tuple");
        self.storage.slots().debug_slots(&mut fields);
        fields.finish()
    }
}

/// Positional access to a tuple, by shared reference, by mutable reference, or by value.
///
/// This is what lets the free function [`get`] accept `&t`, `&mut t`, or `t` alike, returning a
/// `&T`, a `&mut T`, or a `T` respectively. The form of access is recorded as the calling
/// [`Convention`] ([`Ref`], [`Mut`], or [`Val`]) of the implementation.
pub trait Access<'a, const I: usize> {
    /// How the tuple is accessed.
    type Convention: Convention;

    /// The result of access: a reference to, or the value of, the element at position `I`.
    type Output;

    /// Access the element at position `I`.
    fn access(self) -> Self::Output;
}

impl<'a, Ts: Sequence, const I: usize> Access<'a, I> for &'a Tuple<Ts>
where
    Number<I>: ToUnary,
    Ts::Slots: Select<UnaryOf<I>>,
    ElementAt<Ts, I>: 'a,
{
    type Convention = Ref;
    type Output = &'a ElementAt<Ts, I>;

    fn access(self) -> Self::Output {
        self.get::<I>()
    }
}

impl<'a, Ts: Sequence, const I: usize> Access<'a, I> for &'a mut Tuple<Ts>
where
    Number<I>: ToUnary,
    Ts::Slots: Select<UnaryOf<I>>,
    ElementAt<Ts, I>: 'a,
{
    type Convention = Mut;
    type Output = &'a mut ElementAt<Ts, I>;

    fn access(self) -> Self::Output {
        self.get_mut::<I>()
    }
}

impl<'a, Ts: Sequence, const I: usize> Access<'a, I> for Tuple<Ts>
where
    Number<I>: ToUnary,
    Ts::Slots: Select<UnaryOf<I>>,
{
    type Convention = Val;
    type Output = ElementAt<Ts, I>;

    fn access(self) -> Self::Output {
        self.take::<I>()
    }
}

/// Get the element at position `I` of a tuple given by shared reference, by mutable reference, or
/// by value.
///
/// # Examples
///
/// ```
/// use htuple::{get, make_tuple};
///
/// let mut t = make_tuple!(1, String::from("two"));
///
/// assert_eq!(*get::<0, _>(&t), 1);
/// get::<1, _>(&mut t).push('!');
///
/// let two: String = get::<1, _>(t);
/// assert_eq!(two, "two!");
/// ```
pub fn get<'a, const I: usize, T>(tuple: T) -> T::Output
where
    T: Access<'a, I>,
{
    tuple.access()
}

/// Construct a tuple whose element types are the types of the given values, in order.
///
/// The [`make_tuple!`](macro@crate::make_tuple) macro does the same without the extra parentheses.
///
/// # Examples
///
/// ```
/// use htuple::{make_tuple, Tuple};
///
/// let t: Tuple<(i32, f64, char)> = make_tuple((10, 20.5, 'x'));
/// assert_eq!(t.size(), 3);
/// ```
pub fn make_tuple<Ts: Sequence>(values: Ts) -> Tuple<Ts> {
    Tuple::new(values)
}

/// Construct a [`Tuple`] whose element types are the types of the given expressions, in order.
///
/// Each value is moved into the tuple. A reference stays a reference: dereference or clone it
/// first to store an owned value.
///
/// # Examples
///
/// ```
/// use htuple::{make_tuple, Tuple};
///
/// let name = String::from("x");
/// let t = make_tuple!(10, 20.5, name.clone());
/// let _: &Tuple<(i32, f64, String)> = &t;
///
/// let empty = make_tuple!();
/// assert_eq!(empty, Tuple::new(()));
/// ```
#[macro_export]
macro_rules! make_tuple {
    ($($value:expr),* $(,)?) => {
        $crate::Tuple::new(($($value,)*))
    };
}
