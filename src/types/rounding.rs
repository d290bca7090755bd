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

//! The rounding engine: projects scaled values down to a target integer granularity.
//!
//! All three entry points share the same sign-aware policy semantics. The default
//! half-away-from-zero tie rule sends a midpoint away from zero when the value is
//! non-negative and toward zero when it is negative; remainders strictly past the
//! midpoint always round away from zero regardless of sign.

use ethnum::i256;
use serde::{Deserialize, Serialize};

use crate::types::fixed::{SCALED_PRECISION, pow10};

/// The policy applied when a value must be reduced to a coarser granularity.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Round to the nearest neighbor; non-negative midpoint ties go away from zero.
    #[default]
    HalfAwayFromZero,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round toward zero.
    Truncate,
}

/// Rounds an internal 20-digit scaled value down to a minor-unit integer at the given
/// currency `precision`.
///
/// # Panics
///
/// Panics in debug builds if `precision` exceeds [`SCALED_PRECISION`]; the currency
/// constructor enforces this bound for all reachable inputs.
#[must_use]
pub fn round_scaled_to_minor(scaled: i128, precision: u8, mode: RoundingMode) -> i128 {
    debug_assert!(precision <= SCALED_PRECISION);
    let divisor = pow10(u32::from(SCALED_PRECISION - precision));
    let quotient = scaled / divisor;
    let remainder = scaled % divisor;
    if remainder == 0 {
        return quotient;
    }
    match mode {
        RoundingMode::Floor => {
            if scaled < 0 {
                quotient - 1
            } else {
                quotient
            }
        }
        RoundingMode::Ceil => {
            if scaled > 0 {
                quotient + 1
            } else {
                quotient
            }
        }
        RoundingMode::Truncate => quotient,
        RoundingMode::HalfAwayFromZero => {
            let twice = remainder.abs() * 2;
            if twice > divisor || (twice == divisor && scaled >= 0) {
                if scaled < 0 { quotient - 1 } else { quotient + 1 }
            } else {
                quotient
            }
        }
    }
}

/// Rounds a minor-unit integer to the nearest multiple of `step`, computed directly on
/// minor units with no re-entry through the internal scale.
///
/// # Panics
///
/// Panics in debug builds if `step` is not positive; callers validate increments before
/// reaching this function.
#[must_use]
pub fn round_to_step(minor: i128, step: i128, mode: RoundingMode) -> i128 {
    debug_assert!(step > 0);
    let remainder = minor % step;
    if remainder == 0 {
        return minor;
    }
    let base = minor - remainder;
    match mode {
        RoundingMode::Floor => {
            if remainder < 0 {
                base - step
            } else {
                base
            }
        }
        RoundingMode::Ceil => {
            if remainder > 0 {
                base + step
            } else {
                base
            }
        }
        RoundingMode::Truncate => base,
        RoundingMode::HalfAwayFromZero => {
            let twice = remainder.abs() * 2;
            if twice > step || (twice == step && minor >= 0) {
                if remainder < 0 { base - step } else { base + step }
            } else {
                base
            }
        }
    }
}

/// Returns 10^`exp` widened to 256 bits; supports the conversion shift range (0..=40),
/// which can exceed the largest power of ten an `i128` can hold.
#[must_use]
pub(crate) fn pow10_i256(exp: u32) -> i256 {
    if exp <= 38 {
        i256::from(pow10(exp))
    } else {
        i256::from(pow10(20)) * i256::from(pow10(exp - 20))
    }
}

/// Rounding division over widened 256-bit intermediates, used where a minor-unit amount
/// has been multiplied by a 20-digit scaled factor.
#[must_use]
pub(crate) fn div_rounded_i256(num: i256, divisor: i256, mode: RoundingMode) -> i256 {
    let quotient = num / divisor;
    let remainder = num % divisor;
    if remainder == i256::ZERO {
        return quotient;
    }
    match mode {
        RoundingMode::Floor => {
            if num < i256::ZERO {
                quotient - i256::ONE
            } else {
                quotient
            }
        }
        RoundingMode::Ceil => {
            if num > i256::ZERO {
                quotient + i256::ONE
            } else {
                quotient
            }
        }
        RoundingMode::Truncate => quotient,
        RoundingMode::HalfAwayFromZero => {
            let magnitude = if remainder < i256::ZERO {
                -remainder
            } else {
                remainder
            };
            let twice = magnitude * i256::from(2_i128);
            if twice > divisor || (twice == divisor && num >= i256::ZERO) {
                if num < i256::ZERO {
                    quotient - i256::ONE
                } else {
                    quotient + i256::ONE
                }
            } else {
                quotient
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;
    use crate::types::fixed::SCALED_SCALE;

    #[rstest]
    #[case("HALF_AWAY_FROM_ZERO", RoundingMode::HalfAwayFromZero)]
    #[case("floor", RoundingMode::Floor)]
    #[case("Ceil", RoundingMode::Ceil)]
    #[case("TRUNCATE", RoundingMode::Truncate)]
    fn test_mode_from_str(#[case] input: &str, #[case] expected: RoundingMode) {
        assert_eq!(RoundingMode::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_exact_value_ignores_mode() {
        let scaled = 12_345 * SCALED_SCALE / 100; // 123.45 at scale
        for mode in [
            RoundingMode::HalfAwayFromZero,
            RoundingMode::Floor,
            RoundingMode::Ceil,
            RoundingMode::Truncate,
        ] {
            assert_eq!(round_scaled_to_minor(scaled, 2, mode), 12_345);
        }
    }

    #[rstest]
    // 1.005 at 2 dp: midpoint rounds away from zero for non-negative values
    #[case(100_500_000_000_000_000_000, RoundingMode::HalfAwayFromZero, 101)]
    #[case(100_500_000_000_000_000_000, RoundingMode::Floor, 100)]
    #[case(100_500_000_000_000_000_000, RoundingMode::Ceil, 101)]
    #[case(100_500_000_000_000_000_000, RoundingMode::Truncate, 100)]
    // -1.005 at 2 dp: negative midpoint truncates toward zero under the default rule
    #[case(-100_500_000_000_000_000_000, RoundingMode::HalfAwayFromZero, -100)]
    #[case(-100_500_000_000_000_000_000, RoundingMode::Floor, -101)]
    #[case(-100_500_000_000_000_000_000, RoundingMode::Ceil, -100)]
    #[case(-100_500_000_000_000_000_000, RoundingMode::Truncate, -100)]
    // -1.006 at 2 dp: past the midpoint always rounds away from zero
    #[case(-100_600_000_000_000_000_000, RoundingMode::HalfAwayFromZero, -101)]
    #[case(-100_400_000_000_000_000_000, RoundingMode::HalfAwayFromZero, -100)]
    fn test_round_scaled_to_minor(
        #[case] scaled: i128,
        #[case] mode: RoundingMode,
        #[case] expected: i128,
    ) {
        assert_eq!(round_scaled_to_minor(scaled, 2, mode), expected);
    }

    #[rstest]
    fn test_round_scaled_full_precision_passthrough() {
        let scaled = 123_456_789;
        assert_eq!(
            round_scaled_to_minor(scaled, SCALED_PRECISION, RoundingMode::Floor),
            scaled
        );
    }

    #[rstest]
    // nickels: step = 5 minor units
    #[case(1_017, 5, RoundingMode::HalfAwayFromZero, 1_015)]
    #[case(1_018, 5, RoundingMode::HalfAwayFromZero, 1_020)]
    #[case(1_017, 5, RoundingMode::Floor, 1_015)]
    #[case(1_017, 5, RoundingMode::Ceil, 1_020)]
    #[case(1_017, 5, RoundingMode::Truncate, 1_015)]
    #[case(-1_017, 5, RoundingMode::Floor, -1_020)]
    #[case(-1_017, 5, RoundingMode::Ceil, -1_015)]
    #[case(-1_017, 5, RoundingMode::Truncate, -1_015)]
    #[case(-1_018, 5, RoundingMode::HalfAwayFromZero, -1_020)]
    // exact midpoints: away from zero only when non-negative
    #[case(25, 10, RoundingMode::HalfAwayFromZero, 30)]
    #[case(-25, 10, RoundingMode::HalfAwayFromZero, -20)]
    fn test_round_to_step(
        #[case] minor: i128,
        #[case] step: i128,
        #[case] mode: RoundingMode,
        #[case] expected: i128,
    ) {
        assert_eq!(round_to_step(minor, step, mode), expected);
    }

    #[rstest]
    fn test_round_to_step_idempotent() {
        for minor in [-1_017_i128, -25, 0, 13, 998] {
            let once = round_to_step(minor, 5, RoundingMode::HalfAwayFromZero);
            let twice = round_to_step(once, 5, RoundingMode::HalfAwayFromZero);
            assert_eq!(once, twice);
        }
    }

    #[rstest]
    fn test_div_rounded_i256_matches_i128_engine() {
        let divisor = i256::from(pow10(18));
        for scaled in [
            100_500_000_000_000_000_000_i128,
            -100_500_000_000_000_000_000,
            1,
            -1,
            0,
        ] {
            for mode in [
                RoundingMode::HalfAwayFromZero,
                RoundingMode::Floor,
                RoundingMode::Ceil,
                RoundingMode::Truncate,
            ] {
                let wide = div_rounded_i256(i256::from(scaled), divisor, mode);
                let narrow = round_scaled_to_minor(scaled, 2, mode);
                assert_eq!(wide, i256::from(narrow));
            }
        }
    }
}
