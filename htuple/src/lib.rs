/*!
Heterogeneous tuples of fixed size, with positions resolved at compile time.

A [`Tuple<(A, B, C)>`](Tuple) holds one value of each of its element types. Elements are reached
by position, and every position is checked against the tuple's type before the program runs:

- **construction** takes exactly one value per position ([`Tuple::new`], [`make_tuple!`]), or one
  convertible value per position ([`Tuple::convert`], [`Tuple::try_convert`]);
- **access** by position returns the element typed exactly as declared, by shared reference
  ([`Tuple::get`]), mutable reference ([`Tuple::get_mut`]), or value ([`Tuple::take`]), or through
  the free function [`get`] for any of the three;
- **introspection** gives the number of elements ([`tuple_size`]) and the type at a position
  ([`TupleElement`]) without constructing anything;
- **equality** compares two tuples of the same shape position by position.

```
use htuple::prelude::*;

let t: Tuple<(i32, f64, char)> = Tuple::new((42, 3.5, 'a'));
assert_eq!(*get::<0, _>(&t), 42);
assert_eq!(tuple_size::<Tuple<(i32, f64, char)>>(), 3);

let t2 = make_tuple!(10, 20.5, 'x');
assert!(t != t2);
assert!(t == make_tuple!(42, 3.5, 'a'));
```

## How it works

Positions are type-level unary numbers ([`unary`]). A flat sequence of element types is stored as
a list of [`Slot`](slot::Slot)s ([`storage`]), each of which carries its own position in its type,
so that two positions holding the same type never collide. The per-arity impls connecting flat Rust
tuples to these lists ([`seq`]) are generated for every arity up to 32.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod seq;
pub mod slot;
pub mod storage;
pub mod unary;

mod error;
mod tuple;

pub use error::ConversionError;
pub use tuple::{get, make_tuple, tuple_size, Access, ElementAt, Shape, Tuple, TupleElement};

/// The prelude module for quickly getting started with htuple.
///
/// This module is designed to be imported as `use htuple::prelude::*;`, which brings into scope
/// the tuple type, its constructors, and its positional accessors.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{get, make_tuple, tuple_size, Access, Shape, Tuple, TupleElement};
}
