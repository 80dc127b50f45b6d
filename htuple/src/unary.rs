//! The unary numbers, represented by zero [`Z`] and successor [`S`], used as type-level positions.

/// The number zero.
///
/// # Examples
///
/// ```
/// use htuple::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use htuple::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number for the constant `N`, so that `UnaryOf<2>` is `S<S<Z>>`.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A type-level position, whose value is available at runtime as [`Unary::VALUE`].
///
/// # Examples
///
/// ```
/// use htuple::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<2>>::VALUE, 2);
/// // ...
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The position as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Pick one of three types according to how the first of a pair of positions relates to the
/// second. Selection of a tuple element is driven by this comparison.
///
/// # Examples
///
/// ```
/// use htuple::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u32);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// The result of the comparison: `IfLess`, `IfEqual` or `IfGreater`, according to how the
    /// first number relates to the second.
    type Result;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

/// A position written as a `usize` constant, before conversion to its unary form.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

/// Conversion of a [`Number`] to the unary number with the same value.
///
/// Implemented for every `Number<N>` with `N` up to 64.
pub trait ToUnary {
    /// The unary number equal to `N`.
    type AsUnary: Unary;
}

htuple_macro::generate_unary_conversion_impls!(64);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Compare {}
    impl<N: Unary, M: Unary> Compare for (N, M) {}
}
