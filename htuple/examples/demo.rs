#![allow(clippy::approx_constant)]

use colored::*;
use htuple::prelude::*;
use structopt::StructOpt;

/// Build a couple of tuples, read them back by position, and compare them.
#[derive(Debug, Clone, StructOpt)]
struct Options {
    /// The integer at position 0 of the second tuple
    #[structopt(short, long, default_value = "10")]
    int: i32,
    /// The float at position 1 of the second tuple
    #[structopt(short, long, default_value = "20.5")]
    float: f64,
    /// The character at position 2 of the second tuple
    #[structopt(short, long, default_value = "x")]
    char: char,
}

fn main() {
    let options = Options::from_args();

    let t: Tuple<(i32, f64, char)> = Tuple::new((42, 3.14, 'a'));

    println!("{}", get::<0, _>(&t));
    println!("{}", get::<1, _>(&t));
    println!("{}", get::<2, _>(&t));
    println!(
        "{} {}",
        "size:".dimmed(),
        tuple_size::<Tuple<(i32, f64, char)>>()
    );

    let t2 = make_tuple!(options.int, options.float, options.char);
    if t == t2 {
        println!("{}", "t and t2 are equal".green());
    } else {
        println!("{}", "t and t2 are not equal".red());
    }
}
