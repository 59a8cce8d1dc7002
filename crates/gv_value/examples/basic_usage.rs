//! Tour of the container: construction, reassignment, operator forwarding,
//! and the failure mode for members without a given capability.

use gv_value::{BinaryOp, UnaryOp, Value};

fn main() {
    // Construction works from any member of the closed type set.
    let flag = Value::from(true);
    let mut count = Value::from(1);
    let pi = Value::from(3.141592653589793f64);
    let series = Value::from(vec![1.0f64, 2.0, 3.0, 4.0, 5.0]);
    let cell = Value::from(Box::new(2.5f64));

    // Reassignment with a different member type is ordinary assignment.
    let mut var = Value::from(vec![true, false]);
    println!("var holds {}", var.type_name());
    var = Value::from(1.41f64);
    println!("var now holds {}: {}", var.type_name(), var.render().unwrap());

    // Stream-out forwards to the held type's own representation.
    println!("flag  = {}", flag.render().unwrap());
    println!("pi    = {}", pi.render().unwrap());

    // Unary forwarding: negation, dereference, increment/decrement.
    println!("!flag = {}", flag.clone().unary_op(UnaryOp::Not).unwrap().render().unwrap());
    println!("*cell = {}", cell.clone().unary_op(UnaryOp::Deref).unwrap().render().unwrap());
    count.unary_op(UnaryOp::PreInc).unwrap();
    count.unary_op(UnaryOp::PostInc).unwrap();
    count.unary_op(UnaryOp::PreDec).unwrap();
    println!("count = {}", count.render().unwrap());

    // Binary forwarding rewraps the native result; mixed numeric operands
    // promote to the wider type.
    let product = count.bin_op(BinaryOp::Mul, pi.clone()).unwrap();
    println!("count * pi = {} ({})", product.render().unwrap(), product.type_name());
    let halved = product.bin_op(BinaryOp::Div, 2).unwrap();
    println!("halved     = {}", halved.render().unwrap());
    let ordered = count.bin_op(BinaryOp::Le, pi).unwrap();
    println!("count <= pi = {}", ordered.render().unwrap());

    // A member without the capability fails with a catchable error naming
    // the operator and the held type.
    match series.render() {
        Ok(text) => println!("series = {}", text),
        Err(err) => println!("caught: {}", err),
    }
    match series.bin_op(BinaryOp::Add, vec![1.0f64]) {
        Ok(sum) => println!("sum holds {}", sum.type_name()),
        Err(err) => println!("caught: {}", err),
    }
}
