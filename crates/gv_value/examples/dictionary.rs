//! A parameter dictionary able to hold arbitrary member types under string
//! keys, the way a config file read-in would fill one.

use gv_value::{BinaryOp, Dict};

fn main() {
    let mut params = Dict::new();

    // Read in a flag, a double and an int.
    params.insert("verbose", true);
    params.insert("tolerance", 1.235f64);
    params.insert("iterations", 2);

    // Some parameters are computed out of two others...
    let product = params
        .get("iterations")
        .unwrap()
        .bin_op(BinaryOp::Mul, params.get("tolerance").unwrap().clone())
        .unwrap();
    params.insert("budget", product);

    // ...or out of an entry and a bare native number.
    let scaled = params
        .get("iterations")
        .unwrap()
        .bin_op(BinaryOp::Mul, 0.2f64)
        .unwrap();
    params.insert("step", scaled);

    // Log what we "read in". Entries without a textual form would need
    // extra care here; these are all printable members.
    let mut keys: Vec<_> = params.keys().cloned().collect();
    keys.sort();
    for key in keys {
        let value = params.get(&key).unwrap();
        println!("{}: {}", key, value.render().unwrap());
    }

    // Typed read-back.
    let budget: f64 = params.get_native("budget").unwrap().unwrap();
    println!("budget as double = {}", budget);
}
