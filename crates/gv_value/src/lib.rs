//! Polymorphic value container.
//!
//! A [`Value`] holds exactly one instance from a fixed, closed set of types
//! and forwards every relevant operator to the held type's own operation,
//! when the held type actually supports it. Legality is decided by the
//! capability registry in `gv_core`; an unsupported invocation surfaces as a
//! [`ValueError`] naming the operator and the offending type(s), never as a
//! silent default.

mod binary;
mod convert;
mod dict;
mod render;
mod unary;
mod value;

pub use convert::FromValue;
pub use dict::{Dict, FastHashMap};
pub use value::Value;

// Re-export the core vocabulary so callers need only this crate.
pub use gv_core::{BinaryOp, TypeTag, UnaryOp, ValueError};
pub use gv_core::{binary_result, supports_binary, supports_unary, unary_result};

// Payload types for the complex members.
pub use num_complex::{Complex32, Complex64};
