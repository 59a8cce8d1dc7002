//! Textual representation of the held value.

use gv_core::ValueError;

use crate::Value;

impl Value {
    /// Render the held value as text, the engine's stream-out operation.
    ///
    /// Types without a native textual form (vectors, reference cells) fail
    /// with an unprintable-type error rather than producing a partial
    /// rendering.
    pub fn render(&self) -> Result<String, ValueError> {
        match self {
            Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            Value::Int(i) => Ok(itoa::Buffer::new().format(*i).to_string()),
            Value::Float(f) => Ok(render_f32(*f)),
            Value::Double(d) => Ok(render_f64(*d)),
            Value::Complex32(c) => Ok(format!("({}, {})", render_f32(c.re), render_f32(c.im))),
            Value::Complex64(c) => Ok(format!("({}, {})", render_f64(c.re), render_f64(c.im))),
            Value::Str(s) => Ok(s.clone()),
            _ => Err(ValueError::Unprintable { tag: self.tag() }),
        }
    }
}

/// Whole-valued floats render without a fractional part, matching the
/// default stream formatting of the source types.
fn render_f64(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 9.0e18 {
        itoa::Buffer::new().format(f as i64).to_string()
    } else {
        ryu::Buffer::new().format(f).to_string()
    }
}

/// Shortest round-trip rendering at single precision, so a held `f32` never
/// picks up double-precision noise.
fn render_f32(f: f32) -> String {
    if f.fract() == 0.0 && f.abs() < 9.0e18 {
        itoa::Buffer::new().format(f as i64).to_string()
    } else {
        ryu::Buffer::new().format(f).to_string()
    }
}
