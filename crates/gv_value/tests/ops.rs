//! Operator forwarding behavior: dispatch, promotion, failures.

use gv_value::{
    binary_result, supports_binary, BinaryOp, Complex32, Complex64, TypeTag, UnaryOp, Value,
    ValueError,
};

#[test]
fn bool_renders_as_text() {
    let v = Value::from(true);
    assert_eq!(v.render().unwrap(), "true");
    assert_eq!(Value::from(false).render().unwrap(), "false");
}

#[test]
fn prefix_increment_steps_the_held_int() {
    let mut v = Value::from(3);
    let out = v.unary_op(UnaryOp::PreInc).unwrap();
    assert_eq!(out, Value::Int(4));
    assert_eq!(v, Value::Int(4));
}

#[test]
fn postfix_increment_returns_the_prior_value() {
    let mut v = Value::from(3);
    let out = v.unary_op(UnaryOp::PostInc).unwrap();
    assert_eq!(out, Value::Int(3));
    assert_eq!(v, Value::Int(4));
}

#[test]
fn decrement_works_on_floats() {
    let mut v = Value::from(2.5f64);
    let out = v.unary_op(UnaryOp::PreDec).unwrap();
    assert_eq!(out, Value::Double(1.5));
    let out = v.unary_op(UnaryOp::PostDec).unwrap();
    assert_eq!(out, Value::Double(1.5));
    assert_eq!(v, Value::Double(0.5));
}

#[test]
fn increment_rejects_unsupported_members() {
    let mut v = Value::from("abc");
    let err = v.unary_op(UnaryOp::PreInc).unwrap_err();
    assert_eq!(
        err,
        ValueError::UnsupportedUnary {
            op: UnaryOp::PreInc,
            tag: TypeTag::Str,
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot invoke prefix operator++ on held type (string)"
    );
}

#[test]
fn not_follows_the_native_impls() {
    assert_eq!(
        Value::from(true).unary_op(UnaryOp::Not).unwrap(),
        Value::Bool(false)
    );
    // Bitwise on int, as the native impl defines it.
    assert_eq!(Value::from(3).unary_op(UnaryOp::Not).unwrap(), Value::Int(!3));
    let err = Value::from(1.5f64).unary_op(UnaryOp::Not).unwrap_err();
    assert!(matches!(
        err,
        ValueError::UnsupportedUnary {
            op: UnaryOp::Not,
            tag: TypeTag::Double,
        }
    ));
}

#[test]
fn deref_rewraps_the_pointee() {
    let mut v = Value::from(Box::new(2.25f64));
    assert_eq!(v.unary_op(UnaryOp::Deref).unwrap(), Value::Double(2.25));
    // The receiver still holds the reference cell.
    assert_eq!(v.tag(), TypeTag::Ref);

    let err = Value::from(1).unary_op(UnaryOp::Deref).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot invoke operator* on held type (int)"
    );
}

#[test]
fn mixed_arithmetic_promotes_to_the_wider_type() {
    let a = Value::from(2);
    let b = Value::from(0.5f64);
    assert_eq!(a.bin_op(BinaryOp::Mul, b).unwrap(), Value::Double(1.0));

    // bool operands promote integrally.
    let s = Value::from(true).bin_op(BinaryOp::Add, true).unwrap();
    assert_eq!(s, Value::Int(2));

    let c = Value::from(1).bin_op(BinaryOp::Add, Complex64::new(0.0, 1.0));
    assert_eq!(c.unwrap(), Value::Complex64(Complex64::new(1.0, 1.0)));
}

#[test]
fn native_operands_ride_the_same_path_as_containers() {
    let a = Value::from(2);
    assert_eq!(
        a.bin_op(BinaryOp::Mul, 0.5f64).unwrap(),
        Value::from(0.5f64).bin_op(BinaryOp::Mul, 2).unwrap()
    );
    assert_eq!(
        Value::from("ab").bin_op(BinaryOp::Add, "cd").unwrap(),
        Value::Str("abcd".to_string())
    );
}

#[test]
fn comparisons_rewrap_a_bool() {
    assert_eq!(
        Value::from(1).bin_op(BinaryOp::Lt, 2.5f64).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        Value::from("abc").bin_op(BinaryOp::Ge, "abd").unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        Value::from(vec![1, 2, 3]).bin_op(BinaryOp::Lt, vec![1, 3]).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn equality_errors_on_incomparable_members_instead_of_answering_false() {
    let err = Value::from(1).bin_op(BinaryOp::Eq, "1").unwrap_err();
    assert_eq!(
        err,
        ValueError::UnsupportedBinary {
            op: BinaryOp::Eq,
            lhs: TypeTag::Int,
            rhs: TypeTag::Str,
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot invoke operator== on held types (int and string)"
    );
}

#[test]
fn complex_equality_promotes_real_operands() {
    let c = Value::from(Complex64::new(2.0, 0.0));
    assert_eq!(c.bin_op(BinaryOp::Eq, 2.0f64).unwrap(), Value::Bool(true));
    assert_eq!(c.bin_op(BinaryOp::Ne, 3).unwrap(), Value::Bool(true));
    // ...but carries no ordering.
    let err = c.bin_op(BinaryOp::Lt, 2.0f64).unwrap_err();
    assert!(matches!(err, ValueError::UnsupportedBinary { op: BinaryOp::Lt, .. }));
}

#[test]
fn logical_operators_require_bool_operands() {
    assert_eq!(
        Value::from(true).bin_op(BinaryOp::And, false).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        Value::from(false).bin_op(BinaryOp::Or, true).unwrap(),
        Value::Bool(true)
    );
    // A numeric operand must be converted out explicitly first.
    let lhs = Value::from(1);
    let err = lhs.bin_op(BinaryOp::And, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot invoke operator&& on held types (int and bool)"
    );
    let as_bool: bool = lhs.to_native().unwrap();
    assert_eq!(
        Value::from(as_bool).bin_op(BinaryOp::And, true).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn integral_division_by_zero_is_an_error() {
    assert_eq!(
        Value::from(7).bin_op(BinaryOp::Div, 0).unwrap_err(),
        ValueError::DivisionByZero
    );
    assert_eq!(
        Value::from(7).bin_op(BinaryOp::Rem, 0).unwrap_err(),
        ValueError::DivisionByZero
    );
    // Float division keeps the native IEEE result.
    assert_eq!(
        Value::from(1.0f64).bin_op(BinaryOp::Div, 0.0f64).unwrap(),
        Value::Double(f64::INFINITY)
    );
}

#[test]
fn compound_assignment_stores_the_result_in_place() {
    let mut v = Value::from(10);
    v.bin_assign(BinaryOp::Sub, 3).unwrap();
    assert_eq!(v, Value::Int(7));
    v.bin_assign(BinaryOp::Mul, 0.5f64).unwrap();
    assert_eq!(v, Value::Double(3.5));

    let mut s = Value::from("ab");
    s.bin_assign(BinaryOp::Add, "cd").unwrap();
    assert_eq!(s, Value::Str("abcd".to_string()));

    let mut b = Value::from(true);
    b.bin_assign(BinaryOp::BitXor, true).unwrap();
    assert_eq!(b, Value::Bool(false));

    let mut bad = Value::from("ab");
    assert!(bad.bin_assign(BinaryOp::Sub, "cd").is_err());
    // A failed compound assignment leaves the receiver untouched.
    assert_eq!(bad, Value::Str("ab".to_string()));
}

#[test]
fn vectors_have_no_textual_representation() {
    let v = Value::from(vec![1.0f64, 2.0, 3.0]);
    let err = v.render().unwrap_err();
    assert_eq!(err, ValueError::Unprintable { tag: TypeTag::DoubleVec });
    assert_eq!(
        err.to_string(),
        "no textual representation for held type (vector<double>)"
    );
}

#[test]
fn print_forwards_through_the_unary_path() {
    let mut v = Value::from(2.5f64);
    assert_eq!(
        v.unary_op(UnaryOp::Print).unwrap(),
        Value::Str("2.5".to_string())
    );
    let mut vec = Value::from(vec![true, false]);
    assert!(matches!(
        vec.unary_op(UnaryOp::Print).unwrap_err(),
        ValueError::Unprintable { tag: TypeTag::BoolVec }
    ));
}

#[test]
fn reassignment_replaces_tag_and_payload_together() {
    let mut v = Value::from(vec![true, false]);
    assert_eq!(v.tag(), TypeTag::BoolVec);
    v = Value::from(1.41f64);
    assert_eq!(v.tag(), TypeTag::Double);
    assert_eq!(v.to_native::<f64>().unwrap(), 1.41);
    assert!(v.to_native::<Vec<bool>>().is_err());
}

/// One representative value per member of the closed set, with nonzero
/// payloads so division rows stay defined.
fn samples() -> Vec<Value> {
    vec![
        Value::from(true),
        Value::from(3),
        Value::from(1.5f32),
        Value::from(2.5f64),
        Value::from(Complex32::new(1.0, 2.0)),
        Value::from(Complex64::new(2.0, -1.0)),
        Value::from(vec![true, false]),
        Value::from(vec![1, 2]),
        Value::from(vec![1.0f32, 2.0]),
        Value::from(vec![1.0f64, 2.0]),
        Value::from(vec![Complex32::new(1.0, 0.0)]),
        Value::from(vec![Complex64::new(0.0, 1.0)]),
        Value::from("ab"),
        Value::from(Box::new(1.5f64)),
    ]
}

#[test]
fn dispatch_agrees_with_the_registry_for_every_pair() {
    let values = samples();
    for a in &values {
        for b in &values {
            for op in BinaryOp::ALL {
                let result = a.bin_op(op, b.clone());
                match binary_result(op, a.tag(), b.tag()) {
                    Some(expected) => {
                        let got = result.unwrap_or_else(|e| {
                            panic!("{} on ({}, {}): {}", op, a.type_name(), b.type_name(), e)
                        });
                        assert_eq!(got.tag(), expected);
                    }
                    None => {
                        assert_eq!(
                            result.unwrap_err(),
                            ValueError::UnsupportedBinary {
                                op,
                                lhs: a.tag(),
                                rhs: b.tag(),
                            }
                        );
                        assert!(!supports_binary(op, a.tag(), b.tag()));
                    }
                }
            }
        }
    }
}
