//! Numeric Literal Normalization
//!
//! Every numeric literal form collapses to one `f64` domain:
//! - decimal integer: `123`
//! - float with optional exponent: `1.5`, `1.4e3`, `123.4e-3`, `2e8`
//! - octal: `0o77`, or a leading `0` followed by octal digits (`077`)
//! - hexadecimal: `0xFF`
//!
//! Octal and hex digits accumulate in a checked `u64`, so a literal that does
//! not fit in 64 bits is rejected rather than silently rounded.

/// Lexical form of a numeric literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralForm {
    Decimal,
    Float,
    Octal,
    Hex,
}

impl LiteralForm {
    /// Radix of the digits for this form.
    pub const fn radix(self) -> u32 {
        match self {
            LiteralForm::Decimal | LiteralForm::Float => 10,
            LiteralForm::Octal => 8,
            LiteralForm::Hex => 16,
        }
    }
}

/// A numeric literal that cannot be normalized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("empty numeric literal")]
    Empty,
    #[error("missing digits after `{prefix}` prefix")]
    MissingDigits { prefix: &'static str },
    #[error("invalid digit `{digit}` in base-{radix} literal")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("base-{radix} literal `{text}` does not fit in 64 bits")]
    Overflow { text: String, radix: u32 },
    #[error("malformed floating-point literal `{text}`")]
    MalformedFloat { text: String },
}

/// Determine the lexical form of `text` without validating every digit.
///
/// Returns `None` for text that cannot start any numeric literal.
pub fn classify_literal(text: &str) -> Option<LiteralForm> {
    let bytes = text.as_bytes();
    match bytes {
        [] => None,
        [b'0', b'x' | b'X', ..] => Some(LiteralForm::Hex),
        [b'0', b'o' | b'O', ..] => Some(LiteralForm::Octal),
        [first, ..] if !first.is_ascii_digit() => None,
        _ if bytes.iter().any(|b| matches!(b, b'.' | b'e' | b'E')) => Some(LiteralForm::Float),
        [b'0', _, ..] => Some(LiteralForm::Octal),
        _ => Some(LiteralForm::Decimal),
    }
}

/// Normalize a numeric literal to a double.
pub fn parse_number_literal(text: &str) -> Result<f64, LiteralError> {
    let Some(form) = classify_literal(text) else {
        return Err(match text.chars().next() {
            None => LiteralError::Empty,
            Some(digit) => LiteralError::InvalidDigit { digit, radix: 10 },
        });
    };

    match form {
        LiteralForm::Decimal => parse_decimal(text),
        LiteralForm::Float => parse_float(text),
        LiteralForm::Hex => parse_prefixed(text, "0x", form),
        LiteralForm::Octal if has_octal_prefix(text) => parse_prefixed(text, "0o", form),
        // Legacy octal: the leading `0` is the prefix
        LiteralForm::Octal => parse_radix_digits(&text[1..], form.radix()).map(to_f64),
    }
}

/// Only `0o`/`0O` is a prefix; any other letter is a bad legacy-octal digit.
fn has_octal_prefix(text: &str) -> bool {
    matches!(text.as_bytes().get(1), Some(b'o' | b'O'))
}

fn parse_prefixed(text: &str, prefix: &'static str, form: LiteralForm) -> Result<f64, LiteralError> {
    let digits = &text[prefix.len()..];
    if digits.is_empty() {
        return Err(LiteralError::MissingDigits { prefix });
    }
    parse_radix_digits(digits, form.radix()).map(to_f64)
}

fn parse_decimal(text: &str) -> Result<f64, LiteralError> {
    if let Some(digit) = text.chars().find(|c| !c.is_ascii_digit()) {
        return Err(LiteralError::InvalidDigit { digit, radix: 10 });
    }
    // All ASCII digits: the standard parser rounds correctly and cannot fail.
    text.parse().map_err(|_| LiteralError::MalformedFloat {
        text: text.to_string(),
    })
}

/// Accumulate digits of `radix` into a checked `u64`.
pub(crate) fn parse_radix_digits(digits: &str, radix: u32) -> Result<u64, LiteralError> {
    let mut result: u64 = 0;
    for c in digits.chars() {
        let digit = c
            .to_digit(radix)
            .ok_or(LiteralError::InvalidDigit { digit: c, radix })?;
        result = result
            .checked_mul(u64::from(radix))
            .and_then(|r| r.checked_add(u64::from(digit)))
            .ok_or_else(|| LiteralError::Overflow {
                text: digits.to_string(),
                radix,
            })?;
    }
    Ok(result)
}

/// Validate `digits [. digits] [(e|E) [+|-] digits]` before handing the text
/// to the standard parser, which would also accept `inf` and `nan`.
fn parse_float(text: &str) -> Result<f64, LiteralError> {
    let malformed = || LiteralError::MalformedFloat {
        text: text.to_string(),
    };

    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    if !is_digits(int_part) || frac_part.is_some_and(|frac| !is_digits(frac)) {
        return Err(malformed());
    }

    if let Some(exp) = exponent {
        let exp_digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if !is_digits(exp_digits) {
            return Err(malformed());
        }
    }

    text.parse().map_err(|_| malformed())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[expect(
    clippy::cast_precision_loss,
    reason = "literals share the f64 domain; values above 2^53 round like any double"
)]
fn to_f64(n: u64) -> f64 {
    n as f64
}
