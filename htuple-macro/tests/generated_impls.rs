#![recursion_limit = "256"]

use htuple::{seq::*, unary::*, Tuple, TupleElement};
use static_assertions::{assert_impl_all, assert_type_eq_all};

type Widest = (
    u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, char,
);

assert_impl_all!(Widest: Sequence, FromValues<Widest>);
assert_type_eq_all!(TupleElement<31, Tuple<Widest>>, char);
assert_type_eq_all!(<<Widest as Sequence>::AsList as HasLength>::Length, UnaryOf<32>);

assert_type_eq_all!(UnaryOf<64>, S<UnaryOf<63>>, <Number<64> as ToUnary>::AsUnary);
assert_type_eq_all!(<() as Sequence>::Slots, ());
assert_type_eq_all!(
    <(u8, char) as Sequence>::Slots,
    (htuple::slot::Slot<UnaryOf<1>, char>, (htuple::slot::Slot<UnaryOf<0>, u8>, ()))
);

#[test]
fn widest_tuple_round_trips() {
    let mut t: Tuple<Widest> = Tuple::default();
    *t.get_mut::<31>() = 'z';
    *t.get_mut::<0>() = 1;
    assert_eq!(Tuple::<Widest>::SIZE, 32);
    assert_eq!(*t.get::<31>(), 'z');
    assert_eq!(t.into_inner().0, 1);
}
