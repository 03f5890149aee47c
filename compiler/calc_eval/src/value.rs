//! Runtime value.
//!
//! The language has one runtime type: a double. Integer-valued and fractional
//! results share it, and comparison results are encoded as `1` and `0`.

use std::fmt;

/// One numeric result. Immutable once constructed.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Value {
    val: f64,
}

impl Value {
    /// Truth value produced by a comparison that holds.
    pub const TRUE: Value = Value { val: 1.0 };

    /// Truth value produced by a comparison that fails.
    pub const FALSE: Value = Value { val: 0.0 };

    /// Wrap a number verbatim (no rounding, no range check).
    #[inline]
    pub const fn new(val: f64) -> Self {
        Value { val }
    }

    #[inline]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// The numeric payload.
    #[inline]
    pub const fn val(self) -> f64 {
        self.val
    }

    /// Loose equality against a host number, used as a test oracle.
    ///
    /// Booleans coerce to `1`/`0`, so a comparison result equals `true` or
    /// `false`. NaN equals nothing, and `-0.0` equals `0.0`.
    pub fn equals(self, native: impl Into<Value>) -> bool {
        self.val == native.into().val
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::new(val)
    }
}

impl From<f32> for Value {
    fn from(val: f32) -> Self {
        Value::new(f64::from(val))
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::new(f64::from(val))
    }
}

impl From<u32> for Value {
    fn from(val: u32) -> Self {
        Value::new(f64::from(val))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stores_verbatim() {
        assert_eq!(Value::new(0.1 + 0.2).val(), 0.1 + 0.2);
        assert!(Value::new(f64::NAN).val().is_nan());
    }

    #[test]
    fn test_equals_numbers() {
        assert!(Value::new(7.0).equals(7));
        assert!(Value::new(1400.0).equals(1.4e3));
        assert!(!Value::new(7.0).equals(7.5));
        assert!(Value::new(-0.0).equals(0));
        assert!(!Value::new(f64::NAN).equals(f64::NAN));
    }

    #[test]
    fn test_equals_booleans() {
        assert!(Value::TRUE.equals(true));
        assert!(Value::FALSE.equals(false));
        assert!(Value::new(1.0).equals(true));
        assert!(!Value::new(2.0).equals(true));
        assert!(Value::from(true).equals(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::new(20.0).to_string(), "20");
        assert_eq!(Value::new(0.4).to_string(), "0.4");
        assert_eq!(Value::new(-1.5).to_string(), "-1.5");
        assert_eq!(Value::new(f64::INFINITY).to_string(), "inf");
    }
}
