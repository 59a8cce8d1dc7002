//! Passing containers into ordinary and generic functions.

use std::fmt::Debug;

use gv_value::Value;

/// An ordinary function over the native payload type: the container is
/// converted out at the call boundary, if a conversion path exists.
fn simple(x: f64) {
    println!("simple received {}", x);
}

/// A generic function takes the container itself; no decomposition happens.
fn simple_no_convert<T: Debug>(x: T) {
    println!("generic received {:?}", x);
}

fn main() {
    // A double-holding container converts to f64 without ceremony.
    simple(Value::from(3.14f64).to_native().unwrap());

    // A string cannot become a double; the failure names both sides.
    match Value::from("3.14").to_native::<f64>() {
        Ok(x) => simple(x),
        Err(err) => println!("caught: {}", err),
    }

    // The generic function just carries the container through.
    simple_no_convert(Value::from(3.14f64));
    simple_no_convert(Value::from(vec![1, 2, 3]));
}
