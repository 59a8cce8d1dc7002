//! Unary operator forwarding.

use gv_core::{supports_unary, UnaryOp, ValueError};

use crate::Value;

impl Value {
    /// Forward a unary operator to the held type.
    ///
    /// `Not`, `Deref` and `Print` leave the receiver untouched. The
    /// increment/decrement operators step the payload in place; the prefix
    /// forms return the stepped value rewrapped, the postfix forms the prior
    /// value. Legality is known per type ahead of time, but the active type
    /// is only known here, so an unsupported pairing fails at call time.
    pub fn unary_op(&mut self, op: UnaryOp) -> Result<Value, ValueError> {
        let tag = self.tag();
        if !supports_unary(op, tag) {
            return Err(match op {
                UnaryOp::Print => ValueError::Unprintable { tag },
                _ => ValueError::UnsupportedUnary { op, tag },
            });
        }

        match op {
            UnaryOp::Not => match self {
                Value::Bool(b) => Ok(Value::Bool(!*b)),
                Value::Int(i) => Ok(Value::Int(!*i)),
                _ => unreachable!(),
            },
            UnaryOp::Deref => match self {
                Value::Ref(p) => Ok(Value::Double(**p)),
                _ => unreachable!(),
            },
            UnaryOp::PreInc | UnaryOp::PostInc | UnaryOp::PreDec | UnaryOp::PostDec => {
                let before = self.clone();
                let step: i32 = match op {
                    UnaryOp::PreInc | UnaryOp::PostInc => 1,
                    _ => -1,
                };
                match self {
                    Value::Int(i) => *i = i.saturating_add(step),
                    Value::Float(f) => *f += step as f32,
                    Value::Double(d) => *d += step as f64,
                    _ => unreachable!(),
                }
                match op {
                    UnaryOp::PreInc | UnaryOp::PreDec => Ok(self.clone()),
                    _ => Ok(before),
                }
            }
            UnaryOp::Print => Ok(Value::Str(self.render()?)),
        }
    }
}
