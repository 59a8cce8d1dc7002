//! The container itself: one variant per member of the closed type set.

use gv_core::TypeTag;
use num_complex::{Complex32, Complex64};

/// A value holding exactly one instance from the closed type set.
///
/// The enum discriminant is the active type; assignment replaces tag and
/// payload together, so a container is never observed empty or holding two
/// values. Construction is only possible from the payload types below; any
/// other type is rejected at build time because no `From` impl exists.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Float(f32),
    Double(f64),
    Complex32(Complex32),
    Complex64(Complex64),
    BoolVec(Vec<bool>),
    IntVec(Vec<i32>),
    FloatVec(Vec<f32>),
    DoubleVec(Vec<f64>),
    Complex32Vec(Vec<Complex32>),
    Complex64Vec(Vec<Complex64>),
    Str(String),
    Ref(Box<f64>),
}

impl Value {
    /// Descriptor of the currently held type.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Double(_) => TypeTag::Double,
            Value::Complex32(_) => TypeTag::Complex32,
            Value::Complex64(_) => TypeTag::Complex64,
            Value::BoolVec(_) => TypeTag::BoolVec,
            Value::IntVec(_) => TypeTag::IntVec,
            Value::FloatVec(_) => TypeTag::FloatVec,
            Value::DoubleVec(_) => TypeTag::DoubleVec,
            Value::Complex32Vec(_) => TypeTag::Complex32Vec,
            Value::Complex64Vec(_) => TypeTag::Complex64Vec,
            Value::Str(_) => TypeTag::Str,
            Value::Ref(_) => TypeTag::Ref,
        }
    }

    /// Human-readable name of the held type.
    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<Complex32> for Value {
    fn from(c: Complex32) -> Self {
        Value::Complex32(c)
    }
}

impl From<Complex64> for Value {
    fn from(c: Complex64) -> Self {
        Value::Complex64(c)
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Value::BoolVec(v)
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Value::IntVec(v)
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::FloatVec(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::DoubleVec(v)
    }
}

impl From<Vec<Complex32>> for Value {
    fn from(v: Vec<Complex32>) -> Self {
        Value::Complex32Vec(v)
    }
}

impl From<Vec<Complex64>> for Value {
    fn from(v: Vec<Complex64>) -> Self {
        Value::Complex64Vec(v)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Box<f64>> for Value {
    fn from(p: Box<f64>) -> Self {
        Value::Ref(p)
    }
}
