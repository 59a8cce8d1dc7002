//! Capability registry: which operators are legal for which held type(s),
//! and what type the native operation produces.
//!
//! These are pure functions of tags with no stored state. Nothing here
//! touches a payload, so the registry can be consulted freely as a pre-check
//! before invoking an operator, instead of catching the failure afterwards.
//!
//! The registry reflects what the payload types natively support. The one
//! piece of policy is the numeric promotion lattice for mixed scalar
//! operands (see [`TypeTag::numeric_rank`]): the result of a mixed arithmetic
//! operation is the higher-ranked operand type, floored at `int` so that
//! bool operands promote integrally.

use crate::op::{BinaryOp, UnaryOp};
use crate::tag::TypeTag;

/// Result type of a unary operation, or `None` if the held type does not
/// support the operator.
pub fn unary_result(op: UnaryOp, t: TypeTag) -> Option<TypeTag> {
    match op {
        // Exactly where std::ops::Not exists in the set: logical on bool,
        // bitwise on int.
        UnaryOp::Not => match t {
            TypeTag::Bool => Some(TypeTag::Bool),
            TypeTag::Int => Some(TypeTag::Int),
            _ => None,
        },
        UnaryOp::Deref => match t {
            TypeTag::Ref => Some(TypeTag::Double),
            _ => None,
        },
        UnaryOp::PreInc | UnaryOp::PostInc | UnaryOp::PreDec | UnaryOp::PostDec => match t {
            TypeTag::Int | TypeTag::Float | TypeTag::Double => Some(t),
            _ => None,
        },
        UnaryOp::Print => {
            if printable(t) {
                Some(TypeTag::Str)
            } else {
                None
            }
        }
    }
}

/// Whether the held type supports the unary operator.
pub fn supports_unary(op: UnaryOp, t: TypeTag) -> bool {
    unary_result(op, t).is_some()
}

/// Result type of a binary operation, or `None` if the operand pair does not
/// support the operator.
pub fn binary_result(op: BinaryOp, lhs: TypeTag, rhs: TypeTag) -> Option<TypeTag> {
    match op {
        BinaryOp::Add => {
            if lhs == TypeTag::Str && rhs == TypeTag::Str {
                Some(TypeTag::Str)
            } else {
                promoted(lhs, rhs)
            }
        }
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => promoted(lhs, rhs),
        BinaryOp::Rem => {
            if lhs.is_integral() && rhs.is_integral() {
                Some(TypeTag::Int)
            } else {
                None
            }
        }
        // Native Rust bitwise impls: same-type only.
        BinaryOp::BitAnd | BinaryOp::BitXor | BinaryOp::BitOr => match (lhs, rhs) {
            (TypeTag::Bool, TypeTag::Bool) => Some(TypeTag::Bool),
            (TypeTag::Int, TypeTag::Int) => Some(TypeTag::Int),
            _ => None,
        },
        // Logical operators stay bool-only; non-bool operands must be
        // converted out explicitly first.
        BinaryOp::And | BinaryOp::Or => {
            if lhs == TypeTag::Bool && rhs == TypeTag::Bool {
                Some(TypeTag::Bool)
            } else {
                None
            }
        }
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => {
            let ordered = (lhs.is_real_scalar() && rhs.is_real_scalar())
                || (lhs == TypeTag::Str && rhs == TypeTag::Str)
                || (lhs == rhs && lhs.is_ordered_vector());
            if ordered { Some(TypeTag::Bool) } else { None }
        }
        BinaryOp::Eq | BinaryOp::Ne => {
            let comparable = promoted(lhs, rhs).is_some()
                || (lhs == TypeTag::Str && rhs == TypeTag::Str)
                || (lhs == rhs && lhs.is_vector())
                || (lhs == TypeTag::Ref && rhs == TypeTag::Ref);
            if comparable { Some(TypeTag::Bool) } else { None }
        }
    }
}

/// Whether the operand pair supports the binary operator.
pub fn supports_binary(op: BinaryOp, lhs: TypeTag, rhs: TypeTag) -> bool {
    binary_result(op, lhs, rhs).is_some()
}

/// Promoted result tag for a pair of numeric scalars.
fn promoted(lhs: TypeTag, rhs: TypeTag) -> Option<TypeTag> {
    let rank = lhs.numeric_rank()?.max(rhs.numeric_rank()?).max(1);
    Some(match rank {
        1 => TypeTag::Int,
        2 => TypeTag::Float,
        3 => TypeTag::Double,
        4 => TypeTag::Complex32,
        _ => TypeTag::Complex64,
    })
}

fn printable(t: TypeTag) -> bool {
    matches!(
        t,
        TypeTag::Bool
            | TypeTag::Int
            | TypeTag::Float
            | TypeTag::Double
            | TypeTag::Complex32
            | TypeTag::Complex64
            | TypeTag::Str
    )
}
