//! Conversion out of the container into a plain native value.
//!
//! The target type does not have to be a member of the closed set; `i64`
//! below is exactly that case. Each target carries its own capability
//! predicate, the per-target reflection of `convertible(From, To)`.

use gv_core::{TypeTag, ValueError};
use num_complex::{Complex32, Complex64};

use crate::Value;

/// A native type the container can decompose into.
pub trait FromValue: Sized {
    /// Whether a container holding `tag` can produce a `Self`. Decidable
    /// without touching any payload.
    fn convertible_from(tag: TypeTag) -> bool;

    /// Extract a `Self` from the held payload, or fail with a conversion
    /// error naming both sides.
    fn from_value(value: &Value) -> Result<Self, ValueError>;

    /// Name used in diagnostics. Targets without an explicit name fall back
    /// to the compiler's non-portable type path.
    fn target_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Value {
    /// Convert the held value into a plain `T`, leaving the container
    /// untouched.
    pub fn to_native<T: FromValue>(&self) -> Result<T, ValueError> {
        T::from_value(self)
    }
}

fn conversion_error<T: FromValue>(value: &Value) -> ValueError {
    ValueError::Conversion {
        from: value.tag(),
        to: T::target_name(),
    }
}

impl FromValue for bool {
    fn convertible_from(tag: TypeTag) -> bool {
        tag.is_real_scalar()
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(i) => Ok(*i != 0),
            Value::Float(f) => Ok(*f != 0.0),
            Value::Double(d) => Ok(*d != 0.0),
            _ => Err(conversion_error::<bool>(value)),
        }
    }

    fn target_name() -> &'static str {
        "bool"
    }
}

impl FromValue for i32 {
    fn convertible_from(tag: TypeTag) -> bool {
        tag.is_real_scalar()
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(*b as i32),
            Value::Int(i) => Ok(*i),
            Value::Float(f) => Ok(*f as i32),
            Value::Double(d) => Ok(*d as i32),
            _ => Err(conversion_error::<i32>(value)),
        }
    }

    fn target_name() -> &'static str {
        "int"
    }
}

/// Out-of-set target: the closed set holds no 64-bit integer, but any real
/// scalar widens into one.
impl FromValue for i64 {
    fn convertible_from(tag: TypeTag) -> bool {
        tag.is_real_scalar()
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(*b as i64),
            Value::Int(i) => Ok(*i as i64),
            Value::Float(f) => Ok(*f as i64),
            Value::Double(d) => Ok(*d as i64),
            _ => Err(conversion_error::<i64>(value)),
        }
    }

    fn target_name() -> &'static str {
        "long"
    }
}

impl FromValue for f32 {
    fn convertible_from(tag: TypeTag) -> bool {
        tag.is_real_scalar()
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok((*b as i32) as f32),
            Value::Int(i) => Ok(*i as f32),
            Value::Float(f) => Ok(*f),
            Value::Double(d) => Ok(*d as f32),
            _ => Err(conversion_error::<f32>(value)),
        }
    }

    fn target_name() -> &'static str {
        "float"
    }
}

impl FromValue for f64 {
    fn convertible_from(tag: TypeTag) -> bool {
        tag.is_real_scalar()
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok((*b as i32) as f64),
            Value::Int(i) => Ok(*i as f64),
            Value::Float(f) => Ok(*f as f64),
            Value::Double(d) => Ok(*d),
            _ => Err(conversion_error::<f64>(value)),
        }
    }

    fn target_name() -> &'static str {
        "double"
    }
}

impl FromValue for Complex32 {
    fn convertible_from(tag: TypeTag) -> bool {
        tag.numeric_rank().is_some()
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Complex32(c) => Ok(*c),
            Value::Complex64(c) => Ok(Complex32::new(c.re as f32, c.im as f32)),
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Double(_) => {
                Ok(Complex32::new(f32::from_value(value)?, 0.0))
            }
            _ => Err(conversion_error::<Complex32>(value)),
        }
    }

    fn target_name() -> &'static str {
        "complex<float>"
    }
}

impl FromValue for Complex64 {
    fn convertible_from(tag: TypeTag) -> bool {
        tag.numeric_rank().is_some()
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Complex32(c) => Ok(Complex64::new(c.re as f64, c.im as f64)),
            Value::Complex64(c) => Ok(*c),
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Double(_) => {
                Ok(Complex64::new(f64::from_value(value)?, 0.0))
            }
            _ => Err(conversion_error::<Complex64>(value)),
        }
    }

    fn target_name() -> &'static str {
        "complex<double>"
    }
}

impl FromValue for String {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::Str
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            _ => Err(conversion_error::<String>(value)),
        }
    }

    fn target_name() -> &'static str {
        "string"
    }
}

impl FromValue for Box<f64> {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::Ref
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Ref(p) => Ok(p.clone()),
            _ => Err(conversion_error::<Box<f64>>(value)),
        }
    }

    fn target_name() -> &'static str {
        "ref<double>"
    }
}

// Vector targets convert only from the identical vector member: element
// types do not cross-convert.

impl FromValue for Vec<bool> {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::BoolVec
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::BoolVec(v) => Ok(v.clone()),
            _ => Err(conversion_error::<Vec<bool>>(value)),
        }
    }

    fn target_name() -> &'static str {
        "vector<bool>"
    }
}

impl FromValue for Vec<i32> {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::IntVec
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::IntVec(v) => Ok(v.clone()),
            _ => Err(conversion_error::<Vec<i32>>(value)),
        }
    }

    fn target_name() -> &'static str {
        "vector<int>"
    }
}

impl FromValue for Vec<f32> {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::FloatVec
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::FloatVec(v) => Ok(v.clone()),
            _ => Err(conversion_error::<Vec<f32>>(value)),
        }
    }

    fn target_name() -> &'static str {
        "vector<float>"
    }
}

impl FromValue for Vec<f64> {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::DoubleVec
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::DoubleVec(v) => Ok(v.clone()),
            _ => Err(conversion_error::<Vec<f64>>(value)),
        }
    }

    fn target_name() -> &'static str {
        "vector<double>"
    }
}

impl FromValue for Vec<Complex32> {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::Complex32Vec
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Complex32Vec(v) => Ok(v.clone()),
            _ => Err(conversion_error::<Vec<Complex32>>(value)),
        }
    }

    fn target_name() -> &'static str {
        "vector<complex<float>>"
    }
}

impl FromValue for Vec<Complex64> {
    fn convertible_from(tag: TypeTag) -> bool {
        tag == TypeTag::Complex64Vec
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Complex64Vec(v) => Ok(v.clone()),
            _ => Err(conversion_error::<Vec<Complex64>>(value)),
        }
    }

    fn target_name() -> &'static str {
        "vector<complex<double>>"
    }
}
