use thiserror::Error;

/// The failure of a converter to interpret an option argument.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum ConversionError {
    /// The argument is not a number, has trailing characters, or does not fit the destination.
    #[error("invalid number \"{token}\"")]
    InvalidNumber { token: String },
}

impl ConversionError {
    fn invalid_number(token: &str) -> Self {
        ConversionError::InvalidNumber {
            token: token.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Literal {
    negative: bool,
    magnitude: u64,
}

/// Split off the radix prefix of an integer literal.
/// Base `0` detects the radix: `0x` is hexadecimal, a leading `0` is octal, anything else is decimal.
fn detect_radix(text: &str, base: u32) -> (u32, &str) {
    let hexadecimal = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"));

    match base {
        0 => match hexadecimal {
            Some(digits) => (16, digits),
            None if text.len() > 1 && text.starts_with('0') => (8, text),
            None => (10, text),
        },
        16 => (16, hexadecimal.unwrap_or(text)),
        _ => (base, text),
    }
}

// The C locale `isspace` set: no Unicode whitespace.
fn skip_space(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn parse_literal(token: &str, base: u32) -> Option<Literal> {
    // An empty argument (ex: `--num=`) converts nothing, and leaves nothing behind.
    if token.is_empty() {
        return Some(Literal {
            negative: false,
            magnitude: 0,
        });
    }

    let (negative, text) = split_sign(skip_space(token));
    let (radix, digits) = detect_radix(text, base);

    if digits.is_empty() {
        return None;
    }

    let mut magnitude: u64 = 0;

    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        magnitude = magnitude
            .checked_mul(radix as u64)?
            .checked_add(digit as u64)?;
    }

    Some(Literal {
        negative,
        magnitude,
    })
}

/// Parse a signed 32-bit integer in the given base (`0` auto-detects the radix).
pub(crate) fn parse_signed(token: &str, base: u32) -> Result<i32, ConversionError> {
    let Literal {
        negative,
        magnitude,
    } = parse_literal(token, base).ok_or_else(|| ConversionError::invalid_number(token))?;
    let value = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };

    i32::try_from(value).map_err(|_| ConversionError::invalid_number(token))
}

/// Parse an unsigned 32-bit integer in the given base (`0` auto-detects the radix).
/// A minus sign is only accepted on zero.
pub(crate) fn parse_unsigned(token: &str, base: u32) -> Result<u32, ConversionError> {
    let Literal {
        negative,
        magnitude,
    } = parse_literal(token, base).ok_or_else(|| ConversionError::invalid_number(token))?;

    if negative && magnitude != 0 {
        return Err(ConversionError::invalid_number(token));
    }

    u32::try_from(magnitude).map_err(|_| ConversionError::invalid_number(token))
}

/// Parse a floating point literal, decimal (`1.5e3`) or hexadecimal (`0x1.8p3`).
pub(crate) fn parse_double(token: &str) -> Result<f64, ConversionError> {
    if token.is_empty() {
        return Ok(0.0);
    }

    let text = skip_space(token);
    let (negative, unsigned) = split_sign(text);
    let hexadecimal = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"));

    let value = match hexadecimal {
        Some(digits) => parse_hex_double(digits),
        None => text.parse::<f64>().ok(),
    };

    match value {
        Some(value) if hexadecimal.is_some() && negative => Ok(-value),
        Some(value) => Ok(value),
        None => Err(ConversionError::invalid_number(token)),
    }
}

// Hex digits with an optional `.` fraction, then an optional binary exponent (`p-3`).
fn parse_hex_double(text: &str) -> Option<f64> {
    let (significand, exponent) = match text.find(|c: char| c == 'p' || c == 'P') {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    };
    let (whole, fraction) = match significand.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (significand, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut mantissa: u64 = 0;
    let mut scale: i64 = 0;

    for c in whole.chars() {
        let digit = c.to_digit(16)?;

        match mantissa.checked_mul(16) {
            Some(shifted) => mantissa = shifted + digit as u64,
            // Further digits only contribute to the magnitude.
            None => scale += 4,
        }
    }

    for c in fraction.chars() {
        let digit = c.to_digit(16)?;

        if let Some(shifted) = mantissa.checked_mul(16) {
            mantissa = shifted + digit as u64;
            scale -= 4;
        }
    }

    if let Some(exponent) = exponent {
        let (negative, digits) = split_sign(exponent);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Saturate: anything this large is already infinite or zero.
        let power = digits.parse::<i64>().unwrap_or(i64::MAX / 2);
        scale = if negative {
            scale.saturating_sub(power)
        } else {
            scale.saturating_add(power)
        };
    }

    if mantissa == 0 {
        return Some(0.0);
    }

    // Scaling in two steps keeps subnormal results from flushing to zero.
    let scale = scale.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    let half = scale / 2;
    Some(mantissa as f64 * 2f64.powi(half) * 2f64.powi(scale - half))
}
