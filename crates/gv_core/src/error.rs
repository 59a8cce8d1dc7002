//! Error taxonomy for failed operator forwarding.

use std::fmt;

use crate::op::{BinaryOp, UnaryOp};
use crate::tag::TypeTag;

/// Failure raised when a forwarded operation is not supported by the held
/// type(s). Every variant names the attempted operator and the concrete
/// type descriptor(s) involved; callers catch these, the engine never
/// substitutes a default value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// The unary operator is not legal for the held type.
    UnsupportedUnary { op: UnaryOp, tag: TypeTag },
    /// The binary operator is not legal for the operand type pair.
    UnsupportedBinary {
        op: BinaryOp,
        lhs: TypeTag,
        rhs: TypeTag,
    },
    /// No implicit or constructible path from the held type to the target.
    Conversion { from: TypeTag, to: &'static str },
    /// The held type has no native textual representation.
    Unprintable { tag: TypeTag },
    /// Integral division or modulus with a zero divisor.
    DivisionByZero,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::UnsupportedUnary { op, tag } => {
                write!(f, "cannot invoke {} on held type ({})", op, tag.name())
            }
            ValueError::UnsupportedBinary { op, lhs, rhs } => {
                write!(
                    f,
                    "cannot invoke {} on held types ({} and {})",
                    op,
                    lhs.name(),
                    rhs.name()
                )
            }
            ValueError::Conversion { from, to } => {
                write!(
                    f,
                    "cannot convert held type ({}) to requested type ({})",
                    from.name(),
                    to
                )
            }
            ValueError::Unprintable { tag } => {
                write!(
                    f,
                    "no textual representation for held type ({})",
                    tag.name()
                )
            }
            ValueError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl std::error::Error for ValueError {}
