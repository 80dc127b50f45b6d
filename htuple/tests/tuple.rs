#![allow(clippy::approx_constant)]

use htuple::{prelude::*, seq::Sequence, storage::Select, unary::UnaryOf};
use static_assertions::assert_type_eq_all;
use std::{
    collections::HashSet,
    hash::{Hash, Hasher},
};

/// Swap the two elements of any pair, whatever their types.
fn swap<A, B>(pair: Tuple<(A, B)>) -> Tuple<(B, A)> {
    let (a, b) = pair.into_inner();
    make_tuple!(b, a)
}

/// Sum the first two positions of any tuple whose first two elements are `i64`.
fn sum_first_two<Ts>(tuple: &Tuple<Ts>) -> i64
where
    Ts: Sequence,
    Ts::Slots: Select<UnaryOf<0>, Output = i64> + Select<UnaryOf<1>, Output = i64>,
{
    *tuple.get::<0>() + *tuple.get::<1>()
}

#[test]
fn demonstration_scenario() {
    let t: Tuple<(i32, f64, char)> = Tuple::new((42, 3.14, 'a'));
    assert_eq!(*get::<0, _>(&t), 42);
    assert_eq!(*get::<1, _>(&t), 3.14);
    assert_eq!(*get::<2, _>(&t), 'a');
    assert_eq!(tuple_size::<Tuple<(i32, f64, char)>>(), 3);

    let t2 = make_tuple!(10, 20.5, 'x');
    assert!(t != t2);

    let t3 = make_tuple!(42, 3.14, 'a');
    assert!(t == t3);
}

#[test]
fn generic_over_element_types() {
    let swapped = swap(make_tuple!(1_u8, "one"));
    assert_eq!(swapped, make_tuple!("one", 1_u8));
    assert_type_eq_all!(TupleElement<0, Tuple<(&str, u8)>>, &str);
}

#[test]
fn generic_over_arity() {
    assert_eq!(sum_first_two(&make_tuple!(2_i64, 3_i64)), 5);
    assert_eq!(sum_first_two(&make_tuple!(2_i64, 3_i64, "ignored", ())), 5);
}

#[test]
fn duplicate_types_stay_distinct() {
    let mut t = make_tuple!(1_u8, 2_u8, 3_u8);
    *t.get_mut::<1>() = 20;
    assert_eq!(t.into_inner(), (1, 20, 3));
}

#[test]
fn changing_any_position_breaks_equality() {
    let base = make_tuple!(1_u8, String::from("b"), 'c', 4.0_f32);

    let mut changed = base.clone();
    *changed.get_mut::<0>() = 9;
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.get_mut::<1>().push('!');
    assert_ne!(base, changed);

    let mut changed = base.clone();
    *changed.get_mut::<2>() = 'z';
    assert_ne!(base, changed);

    let mut changed = base.clone();
    *changed.get_mut::<3>() = -4.0;
    assert_ne!(base, changed);

    assert_eq!(base, base.clone());
}

#[test]
fn hashing_agrees_with_equality() {
    let mut seen = HashSet::new();
    assert!(seen.insert(make_tuple!(1_u32, "one")));
    assert!(seen.insert(make_tuple!(2_u32, "two")));
    assert!(!seen.insert(make_tuple!(1_u32, "one")));
    assert_eq!(seen.len(), 2);
}

/// A hasher which keeps every byte written to it, in order.
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
fn hashing_is_in_position_order() {
    let mut recorder = Recorder::default();
    make_tuple!(1_u8, 2_u8, 3_u8).hash(&mut recorder);
    assert_eq!(recorder.0, vec![1, 2, 3]);

    let mut native = Recorder::default();
    (1_u8, 2_u8, 3_u8).hash(&mut native);
    assert_eq!(recorder.0, native.0);
}

#[test]
fn conversions() {
    let t: Tuple<(u64, String, f64)> = Tuple::convert((1_u8, "two", 3_u16));
    assert_eq!(t, Tuple::new((1, String::from("two"), 3.0)));

    let err = Tuple::<(u8, u8, u8)>::try_convert((1_i32, -2_i32, 300_i32)).unwrap_err();
    assert_eq!(err.position(), 1);
    assert_eq!(err.to_string(), "cannot convert element at position 1");
    assert!(std::error::Error::source(&err).is_some());

    let from: Tuple<(bool,)> = (true,).into();
    assert!(*from.get::<0>());
}

#[test]
fn empty_tuple() {
    let empty = make_tuple!();
    assert_eq!(empty.size(), 0);
    assert_eq!(empty, Tuple::default());
    assert_eq!(format!("{:?}", empty), "Tuple");
}
