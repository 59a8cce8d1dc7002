//! Binary operator forwarding and compound assignment.
//!
//! The receiver is always a container; the right operand may be a container
//! or any bare payload type, which is wrapped into a temporary first. That
//! one rule is what makes `container op native` and `native op container`
//! ride the same path.

use gv_core::{binary_result, BinaryOp, TypeTag, ValueError};
use num_complex::{Complex32, Complex64};
use std::ops::{Add, Div, Mul, Sub};

use crate::Value;

impl Value {
    /// Forward a binary operator to the held type pair.
    ///
    /// The capability registry decides legality; the result is the native
    /// operation's own result type, rewrapped. Mixed numeric scalars promote
    /// along the rank lattice, comparisons produce a bool member, string
    /// addition concatenates.
    pub fn bin_op(&self, op: BinaryOp, rhs: impl Into<Value>) -> Result<Value, ValueError> {
        let rhs = rhs.into();
        let lt = self.tag();
        let rt = rhs.tag();
        let Some(out) = binary_result(op, lt, rt) else {
            return Err(ValueError::UnsupportedBinary { op, lhs: lt, rhs: rt });
        };

        match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                arith(op, self, &rhs, out)
            }
            BinaryOp::Rem => {
                let b = int_of(&rhs);
                if b == 0 {
                    return Err(ValueError::DivisionByZero);
                }
                Ok(Value::Int(int_of(self).wrapping_rem(b)))
            }
            BinaryOp::BitAnd | BinaryOp::BitXor | BinaryOp::BitOr => Ok(bitwise(op, self, &rhs)),
            BinaryOp::And | BinaryOp::Or => Ok(logical(op, self, &rhs)),
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => {
                Ok(Value::Bool(ordering(op, self, &rhs)))
            }
            BinaryOp::Eq | BinaryOp::Ne => {
                let eq = equality(self, &rhs, lt, rt);
                Ok(Value::Bool(if op == BinaryOp::Eq { eq } else { !eq }))
            }
        }
    }

    /// Compound assignment: same contract as [`Value::bin_op`], but the
    /// result replaces the receiver's payload in place.
    pub fn bin_assign(&mut self, op: BinaryOp, rhs: impl Into<Value>) -> Result<(), ValueError> {
        let rhs = rhs.into();
        // Fast path: string append without rebuilding the left operand.
        if op == BinaryOp::Add {
            if let (Value::Str(a), Value::Str(b)) = (&mut *self, &rhs) {
                a.push_str(b);
                return Ok(());
            }
        }
        *self = self.bin_op(op, rhs)?;
        Ok(())
    }
}

fn arith(op: BinaryOp, lhs: &Value, rhs: &Value, out: TypeTag) -> Result<Value, ValueError> {
    match out {
        TypeTag::Str => {
            let (Value::Str(a), Value::Str(b)) = (lhs, rhs) else {
                unreachable!()
            };
            let mut s = String::with_capacity(a.len() + b.len());
            s.push_str(a);
            s.push_str(b);
            Ok(Value::Str(s))
        }
        TypeTag::Int => {
            let (a, b) = (int_of(lhs), int_of(rhs));
            let n = match op {
                BinaryOp::Add => a.saturating_add(b),
                BinaryOp::Sub => a.saturating_sub(b),
                BinaryOp::Mul => a.saturating_mul(b),
                BinaryOp::Div => {
                    if b == 0 {
                        return Err(ValueError::DivisionByZero);
                    }
                    a.saturating_div(b)
                }
                _ => unreachable!(),
            };
            Ok(Value::Int(n))
        }
        TypeTag::Float => Ok(Value::Float(apply_num(
            op,
            real_f64(lhs) as f32,
            real_f64(rhs) as f32,
        ))),
        TypeTag::Double => Ok(Value::Double(apply_num(op, real_f64(lhs), real_f64(rhs)))),
        TypeTag::Complex32 => Ok(Value::Complex32(apply_num(op, c32_of(lhs), c32_of(rhs)))),
        TypeTag::Complex64 => Ok(Value::Complex64(apply_num(op, c64_of(lhs), c64_of(rhs)))),
        _ => unreachable!(),
    }
}

fn apply_num<T>(op: BinaryOp, a: T, b: T) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        _ => unreachable!(),
    }
}

fn bitwise(op: BinaryOp, lhs: &Value, rhs: &Value) -> Value {
    match (lhs, rhs) {
        (Value::Bool(a), Value::Bool(b)) => Value::Bool(match op {
            BinaryOp::BitAnd => a & b,
            BinaryOp::BitXor => a ^ b,
            BinaryOp::BitOr => a | b,
            _ => unreachable!(),
        }),
        (Value::Int(a), Value::Int(b)) => Value::Int(match op {
            BinaryOp::BitAnd => a & b,
            BinaryOp::BitXor => a ^ b,
            BinaryOp::BitOr => a | b,
            _ => unreachable!(),
        }),
        _ => unreachable!(),
    }
}

fn logical(op: BinaryOp, lhs: &Value, rhs: &Value) -> Value {
    let (Value::Bool(a), Value::Bool(b)) = (lhs, rhs) else {
        unreachable!()
    };
    Value::Bool(match op {
        BinaryOp::And => *a && *b,
        BinaryOp::Or => *a || *b,
        _ => unreachable!(),
    })
}

fn ordering(op: BinaryOp, lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => cmp_by(op, a, b),
        (Value::BoolVec(a), Value::BoolVec(b)) => cmp_by(op, a, b),
        (Value::IntVec(a), Value::IntVec(b)) => cmp_by(op, a, b),
        (Value::FloatVec(a), Value::FloatVec(b)) => cmp_by(op, a, b),
        (Value::DoubleVec(a), Value::DoubleVec(b)) => cmp_by(op, a, b),
        _ => {
            // Integer fast path, float promotion otherwise.
            if lhs.tag().is_integral() && rhs.tag().is_integral() {
                cmp_by(op, &int_of(lhs), &int_of(rhs))
            } else {
                cmp_by(op, &real_f64(lhs), &real_f64(rhs))
            }
        }
    }
}

fn cmp_by<T: PartialOrd + ?Sized>(op: BinaryOp, a: &T, b: &T) -> bool {
    match op {
        BinaryOp::Lt => a < b,
        BinaryOp::Gt => a > b,
        BinaryOp::Le => a <= b,
        BinaryOp::Ge => a >= b,
        _ => unreachable!(),
    }
}

fn equality(lhs: &Value, rhs: &Value, lt: TypeTag, rt: TypeTag) -> bool {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::BoolVec(a), Value::BoolVec(b)) => a == b,
        (Value::IntVec(a), Value::IntVec(b)) => a == b,
        (Value::FloatVec(a), Value::FloatVec(b)) => a == b,
        (Value::DoubleVec(a), Value::DoubleVec(b)) => a == b,
        (Value::Complex32Vec(a), Value::Complex32Vec(b)) => a == b,
        (Value::Complex64Vec(a), Value::Complex64Vec(b)) => a == b,
        // Pointee equality for reference cells.
        (Value::Ref(a), Value::Ref(b)) => a == b,
        _ => match lt.numeric_rank().zip(rt.numeric_rank()) {
            Some((a, b)) => match a.max(b) {
                0 | 1 => int_of(lhs) == int_of(rhs),
                2 | 3 => real_f64(lhs) == real_f64(rhs),
                4 => c32_of(lhs) == c32_of(rhs),
                _ => c64_of(lhs) == c64_of(rhs),
            },
            None => unreachable!(),
        },
    }
}

// Payload extraction at a known promotion level. Callers have already passed
// the capability check, so the active type is one of the expected members.

fn int_of(v: &Value) -> i32 {
    match v {
        Value::Bool(b) => *b as i32,
        Value::Int(i) => *i,
        _ => unreachable!(),
    }
}

fn real_f64(v: &Value) -> f64 {
    match v {
        Value::Bool(b) => (*b as i32) as f64,
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f as f64,
        Value::Double(d) => *d,
        _ => unreachable!(),
    }
}

fn c32_of(v: &Value) -> Complex32 {
    match v {
        Value::Complex32(c) => *c,
        _ => Complex32::new(real_f64(v) as f32, 0.0),
    }
}

fn c64_of(v: &Value) -> Complex64 {
    match v {
        Value::Complex64(c) => *c,
        Value::Complex32(c) => Complex64::new(c.re as f64, c.im as f64),
        _ => Complex64::new(real_f64(v), 0.0),
    }
}
