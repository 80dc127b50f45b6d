use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// The element types from which test shapes are drawn, cycling so that every shape longer than a
/// handful of elements repeats some types at different positions.
const ELEMENTS: &[&str] = &["u8", "String", "char", "u8", "bool", "Vec<u8>", "char", "()"];

/// The largest arity for which tests are generated.
const MAX_ARITY: usize = 16;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for tuple shapes of every arity up to a bound. This makes it much
    // less likely that an error in the generated per-arity impls goes un-caught.

    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("valid_tuples.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    // Write out the test
    writeln!(f, "#[test]")?;
    writeln!(f, "fn all_tuple_shapes_valid() {{")?;
    for shape in (0..=MAX_ARITY).map(Shape::of_arity) {
        writeln!(f, "    {{")?;
        writeln!(f, "        type T = Tuple<{}>;", shape)?;
        writeln!(f, "        assert_eq!(tuple_size::<T>(), {});", shape.arity())?;
        if shape.arity() > 0 {
            writeln!(f, "        let t = T::default();")?;
        }
        for (i, element) in shape.elements.iter().enumerate() {
            writeln!(f, "        assert_type_eq_all!(TupleElement<{}, T>, {});", i, element)?;
            writeln!(
                f,
                "        assert_eq!(*t.get::<{}>(), <{}>::default());",
                i, element
            )?;
        }
        writeln!(f, "    }}")?;
    }
    writeln!(f, "}}")?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

/// A flat sequence of element types, written out as a Rust tuple type.
#[derive(Clone, Debug)]
pub struct Shape {
    elements: Vec<&'static str>,
}

impl Shape {
    pub fn of_arity(arity: usize) -> Shape {
        Shape {
            elements: ELEMENTS.iter().copied().cycle().take(arity).collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.elements.len()
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for element in &self.elements {
            write!(f, "{}, ", element)?;
        }
        write!(f, ")")
    }
}
