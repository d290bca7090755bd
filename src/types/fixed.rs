// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The scaled-decimal codec: exact conversion between native floats and fixed-point integers.
//!
//! This module is the only sanctioned path by which a floating-point rate, percentage, or
//! increment enters the arithmetic core. A float is first rendered to its exact shortest
//! decimal-string representation, then parsed into an `i128` at a fixed internal scale of
//! 20 decimal digits. Multiplying a float directly against a minor-unit integer would
//! reintroduce binary rounding error (1.005 becomes 1.00499999...), which is precisely
//! what this two-step path avoids.

use crate::errors::MoneyError;

/// The number of decimal digits carried by the internal fixed-point scale.
pub const SCALED_PRECISION: u8 = 20;

/// The internal fixed-point scale factor (10^20).
pub const SCALED_SCALE: i128 = 100_000_000_000_000_000_000;

/// Returns 10^`exp` as an `i128`.
///
/// # Panics
///
/// Panics if `exp` exceeds 38, the largest power of ten representable in an `i128`.
#[must_use]
pub(crate) fn pow10(exp: u32) -> i128 {
    10_i128.pow(exp)
}

/// Renders `value` as its exact shortest decimal-string representation.
///
/// Zero maps to `"0"`. Rust's `Display` for `f64` always produces the shortest string
/// that round-trips to the same bit pattern, in fixed notation, so the output is an
/// exact decimal rendering of the binary value.
///
/// # Errors
///
/// Returns an error if `value` is NaN or infinite.
pub fn f64_to_decimal_str(value: f64) -> Result<String, MoneyError> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidNumber(value));
    }
    if value == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format!("{value}"))
}

/// Parses an optionally signed decimal string, optionally in exponential notation, into
/// an `i128` scaled to [`SCALED_PRECISION`] decimal digits.
///
/// Fractional digits beyond the internal precision are truncated (not rounded); shorter
/// fractions are zero-padded. A positive exponent multiplies the scaled value by the
/// stated power of ten; a negative exponent integer-divides (truncating toward zero).
///
/// # Errors
///
/// Returns an error if:
/// - The string is not a well-formed decimal number.
/// - The scaled magnitude overflows the internal 128-bit representation.
pub fn decimal_str_to_scaled(s: &str) -> Result<i128, MoneyError> {
    let invalid = || MoneyError::InvalidDecimal(s.to_string());
    let too_large = || MoneyError::ValueTooLarge(s.to_string());

    let trimmed = s.trim();
    let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
        Some(idx) => {
            let exp: i32 = trimmed[idx + 1..].parse().map_err(|_| invalid())?;
            (&trimmed[..idx], exp)
        }
        None => (trimmed, 0_i32),
    };

    let (negative, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let mut scaled: i128 = 0;
    for b in int_part.bytes() {
        scaled = scaled
            .checked_mul(10)
            .and_then(|v| v.checked_add(i128::from(b - b'0')))
            .ok_or_else(too_large)?;
    }
    scaled = scaled.checked_mul(SCALED_SCALE).ok_or_else(too_large)?;

    let keep = frac_part.len().min(SCALED_PRECISION as usize);
    let mut frac: i128 = 0;
    for b in frac_part.bytes().take(keep) {
        frac = frac * 10 + i128::from(b - b'0');
    }
    frac *= pow10((SCALED_PRECISION as usize - keep) as u32);
    scaled = scaled.checked_add(frac).ok_or_else(too_large)?;

    match exponent {
        0 => {}
        e if e > 0 => {
            if e > 38 {
                return Err(too_large());
            }
            scaled = scaled.checked_mul(pow10(e as u32)).ok_or_else(too_large)?;
        }
        e => {
            let shift = e.unsigned_abs();
            scaled = if shift > 38 { 0 } else { scaled / pow10(shift) };
        }
    }

    Ok(if negative { -scaled } else { scaled })
}

/// Converts a native float to the internal 20-digit scaled representation by way of its
/// exact decimal-string rendering.
///
/// # Errors
///
/// Returns an error if `value` is NaN or infinite, or if the scaled magnitude overflows
/// the internal 128-bit representation.
pub fn f64_to_scaled(value: f64) -> Result<i128, MoneyError> {
    let s = f64_to_decimal_str(value)?;
    decimal_str_to_scaled(&s)
}

/// Converts a scaled value back to a native float. Lossy past ~16 significant digits.
#[must_use]
pub fn scaled_to_f64(scaled: i128) -> f64 {
    (scaled as f64) / (SCALED_SCALE as f64)
}
