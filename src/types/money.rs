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

//! Represents an amount of money as an exact integer count of a currency's minor unit.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use ethnum::i256;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, ser::SerializeStruct};

use crate::{
    errors::{FAILED, MoneyError},
    types::{
        Currency,
        fixed::{SCALED_PRECISION, SCALED_SCALE, decimal_str_to_scaled, f64_to_scaled, pow10},
        rounding::{
            RoundingMode, div_rounded_i256, pow10_i256, round_scaled_to_minor, round_to_step,
        },
    },
};

/// The integer type carrying minor-unit amounts.
pub type MinorUnit = i128;

/// The maximum minor-unit amount (2^53 - 1, the double-precision safe-integer ceiling).
///
/// Amounts are bounded here rather than at the i128 hardware width so every value remains
/// exactly representable by JSON consumers whose native numeric type is a double.
pub const MINOR_UNIT_MAX: MinorUnit = 9_007_199_254_740_991;

/// The minimum minor-unit amount.
pub const MINOR_UNIT_MIN: MinorUnit = -9_007_199_254_740_991;

/// Represents an amount of money in a specified currency denomination.
///
/// The amount is an exact integer count of the currency's minor unit; no fractional minor
/// units are ever stored. Every producing operation returns a new instance and enforces
/// the [`MINOR_UNIT_MAX`] envelope.
#[derive(Clone, Copy, Eq)]
pub struct Money {
    /// The amount as an exact count of the currency's minor unit.
    pub minor: MinorUnit,
    /// The currency denomination associated with the monetary amount.
    pub currency: Currency,
}

/// Checks that two monies share an equivalent currency (code and precision).
///
/// # Errors
///
/// Returns an error naming both codes if the currencies are not equivalent.
#[inline(always)]
pub fn check_currency_match(lhs: &Money, rhs: &Money) -> Result<(), MoneyError> {
    if lhs.currency != rhs.currency {
        return Err(MoneyError::CurrencyMismatch {
            lhs: lhs.currency.code,
            rhs: rhs.currency.code,
        });
    }
    Ok(())
}

/// Checks that a produced minor-unit amount stays within the safe-integer envelope.
///
/// # Errors
///
/// Returns an error if `minor` exceeds [`MINOR_UNIT_MAX`] in magnitude.
#[inline(always)]
pub fn check_minor_in_range(minor: MinorUnit) -> Result<MinorUnit, MoneyError> {
    if !(MINOR_UNIT_MIN..=MINOR_UNIT_MAX).contains(&minor) {
        return Err(MoneyError::ResultTooLarge);
    }
    Ok(minor)
}

fn narrow_i256(value: i256) -> Result<i128, MoneyError> {
    if value > i256::from(i128::MAX) || value < i256::from(i128::MIN) {
        return Err(MoneyError::ResultTooLarge);
    }
    Ok(value.as_i128())
}

impl Money {
    /// Creates a new [`Money`] from a decimal amount, rounding half-away-from-zero to the
    /// currency's minor unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite or the amount exceeds the safe range.
    pub fn from_f64(value: f64, currency: Currency) -> Result<Self, MoneyError> {
        Self::from_f64_with(value, currency, RoundingMode::default())
    }

    /// Creates a new [`Money`] from a decimal amount under an explicit rounding policy.
    ///
    /// The value is routed through the exact decimal-string codec, never multiplied as a
    /// binary float against the currency scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite or the amount exceeds the safe range.
    pub fn from_f64_with(
        value: f64,
        currency: Currency,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidNumber(value));
        }
        // Fail fast on clearly-oversized inputs before entering the codec.
        if value.abs() > MINOR_UNIT_MAX as f64 {
            return Err(MoneyError::ValueTooLarge(value.to_string()));
        }
        let scaled = f64_to_scaled(value)?;
        let minor = round_scaled_to_minor(scaled, currency.precision, mode);
        if minor.abs() > MINOR_UNIT_MAX {
            return Err(MoneyError::ValueTooLarge(value.to_string()));
        }
        Ok(Self { minor, currency })
    }

    /// Creates a new [`Money`] from a decimal amount, requiring exact representability at
    /// the currency's precision: no rounding is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite, exceeds the safe range, or carries
    /// decimal digits below the currency's minor unit.
    pub fn from_f64_strict(value: f64, currency: Currency) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidNumber(value));
        }
        if value.abs() > MINOR_UNIT_MAX as f64 {
            return Err(MoneyError::ValueTooLarge(value.to_string()));
        }
        let scaled = f64_to_scaled(value)?;
        let divisor = pow10(u32::from(SCALED_PRECISION - currency.precision));
        if scaled % divisor != 0 {
            return Err(MoneyError::PrecisionLoss {
                value,
                precision: currency.precision,
            });
        }
        let minor = scaled / divisor;
        if minor.abs() > MINOR_UNIT_MAX {
            return Err(MoneyError::ValueTooLarge(value.to_string()));
        }
        Ok(Self { minor, currency })
    }

    /// Creates a new [`Money`] directly from a minor-unit count, with no rounding.
    ///
    /// The amount is assumed caller-validated; producing operations re-check the safe
    /// range on every derived value.
    #[must_use]
    pub const fn from_minor(minor: MinorUnit, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Creates a new [`Money`] with a value of zero in the given [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Returns the amount as a native float. Lossy past 2^53 minor units by construction,
    /// exact within the safe envelope.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        (self.minor as f64) / 10_f64.powi(i32::from(self.currency.precision))
    }

    /// Returns the raw minor-unit count.
    #[must_use]
    pub const fn as_minor(&self) -> MinorUnit {
        self.minor
    }

    /// Returns the amount as a `Decimal` at the currency's precision.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.minor, u32::from(self.currency.precision))
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.minor > 0
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.minor < 0
    }

    /// Adds two monies of equivalent currency.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch or if the result leaves the safe range.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MoneyError> {
        check_currency_match(self, rhs)?;
        let minor = self
            .minor
            .checked_add(rhs.minor)
            .ok_or(MoneyError::ResultTooLarge)?;
        Ok(Self {
            minor: check_minor_in_range(minor)?,
            currency: self.currency,
        })
    }

    /// Subtracts `rhs` from `self` for monies of equivalent currency.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch or if the result leaves the safe range.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MoneyError> {
        check_currency_match(self, rhs)?;
        let minor = self
            .minor
            .checked_sub(rhs.minor)
            .ok_or(MoneyError::ResultTooLarge)?;
        Ok(Self {
            minor: check_minor_in_range(minor)?,
            currency: self.currency,
        })
    }

    /// Folds a non-empty collection of monies into their total.
    ///
    /// # Errors
    ///
    /// Returns an error if `items` is empty, any element's currency differs from the
    /// first, or the total leaves the safe range.
    pub fn sum<'a, I>(items: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut iter = items.into_iter();
        let first = *iter.next().ok_or(MoneyError::EmptyInput)?;
        iter.try_fold(first, |acc, item| acc.try_add(item))
    }

    /// Compares two monies of equivalent currency.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, MoneyError> {
        check_currency_match(self, other)?;
        Ok(self.minor.cmp(&other.minor))
    }

    /// Checks two monies of equivalent currency for equal amounts.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch.
    pub fn try_eq(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    /// Returns `true` if `self` is strictly less than `other`.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch.
    pub fn try_lt(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// Returns `true` if `self` is less than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch.
    pub fn try_le(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }

    /// Returns `true` if `self` is strictly greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch.
    pub fn try_gt(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// Returns `true` if `self` is greater than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns an error on currency mismatch.
    pub fn try_ge(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? != Ordering::Less)
    }

    /// Splits the amount into `parts` shares that sum exactly to the original.
    ///
    /// The first `|remainder|` shares receive one extra minor unit carrying the
    /// remainder's sign; the rest receive the integer quotient.
    ///
    /// # Errors
    ///
    /// Returns an error if `parts` is less than one or exceeds the safe integer range.
    pub fn allocate(&self, parts: i64) -> Result<Vec<Self>, MoneyError> {
        if parts < 1 {
            return Err(MoneyError::InvalidCount(parts));
        }
        if i128::from(parts) > MINOR_UNIT_MAX {
            return Err(MoneyError::UnsafeCount(parts));
        }
        let n = i128::from(parts);
        let quotient = self.minor / n;
        let remainder = self.minor % n;
        let extra: i128 = if remainder < 0 { -1 } else { 1 };

        let mut shares = Vec::with_capacity(parts as usize);
        for idx in 0..n {
            let minor = if idx < remainder.abs() {
                quotient + extra
            } else {
                quotient
            };
            shares.push(Self {
                minor,
                currency: self.currency,
            });
        }
        Ok(shares)
    }

    /// Converts the amount to `target` currency at the given exchange rate, rounding
    /// half-away-from-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is non-finite, zero, or negative, or the result leaves
    /// the safe range.
    pub fn convert(&self, target: Currency, rate: f64) -> Result<Self, MoneyError> {
        self.convert_with(target, rate, RoundingMode::default())
    }

    /// Converts the amount to `target` currency under an explicit rounding policy.
    ///
    /// The rate enters through the exact decimal-string codec at 20-digit precision; the
    /// product is carried in 256 bits before rounding down to the target's minor unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is non-finite, zero, or negative, or the result leaves
    /// the safe range.
    pub fn convert_with(
        &self,
        target: Currency,
        rate: f64,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(MoneyError::InvalidRate(rate));
        }
        let rate_scaled = f64_to_scaled(rate)?;
        let num = i256::from(self.minor) * i256::from(rate_scaled);
        let shift = u32::from(SCALED_PRECISION) + u32::from(self.currency.precision)
            - u32::from(target.precision);
        let minor = narrow_i256(div_rounded_i256(num, pow10_i256(shift), mode))?;
        Ok(Self {
            minor: check_minor_in_range(minor)?,
            currency: target,
        })
    }

    /// Returns `percent` percent of the amount, rounded half-away-from-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not finite or the result leaves the safe range.
    pub fn percent_of(&self, percent: f64) -> Result<Self, MoneyError> {
        self.percent_of_with(percent, RoundingMode::default())
    }

    /// Returns `percent` percent of the amount under an explicit rounding policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not finite or the result leaves the safe range.
    pub fn percent_of_with(&self, percent: f64, mode: RoundingMode) -> Result<Self, MoneyError> {
        let factor = self.percent_factor(percent)?;
        let num = i256::from(self.minor) * factor;
        let divisor = i256::from(100_i128) * i256::from(SCALED_SCALE);
        let minor = narrow_i256(div_rounded_i256(num, divisor, mode))?;
        Ok(Self {
            minor: check_minor_in_range(minor)?,
            currency: self.currency,
        })
    }

    /// Increases the amount by `percent` percent, rounded half-away-from-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not finite or the result leaves the safe range.
    pub fn increment_by_percent(&self, percent: f64) -> Result<Self, MoneyError> {
        self.increment_by_percent_with(percent, RoundingMode::default())
    }

    /// Increases the amount by `percent` percent under an explicit rounding policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not finite or the result leaves the safe range.
    pub fn increment_by_percent_with(
        &self,
        percent: f64,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        self.scale_by_percent(percent, mode, true)
    }

    /// Decreases the amount by `percent` percent, rounded half-away-from-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not finite or the result leaves the safe range.
    pub fn decrement_by_percent(&self, percent: f64) -> Result<Self, MoneyError> {
        self.decrement_by_percent_with(percent, RoundingMode::default())
    }

    /// Decreases the amount by `percent` percent under an explicit rounding policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not finite or the result leaves the safe range.
    pub fn decrement_by_percent_with(
        &self,
        percent: f64,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        self.scale_by_percent(percent, mode, false)
    }

    fn percent_factor(&self, percent: f64) -> Result<i256, MoneyError> {
        if !percent.is_finite() {
            return Err(MoneyError::InvalidNumber(percent));
        }
        Ok(i256::from(f64_to_scaled(percent)?))
    }

    // amount * (100 ± percent) / 100, carried at 20-digit precision in 256 bits.
    fn scale_by_percent(
        &self,
        percent: f64,
        mode: RoundingMode,
        increase: bool,
    ) -> Result<Self, MoneyError> {
        let pct = self.percent_factor(percent)?;
        let hundred = i256::from(100_i128) * i256::from(SCALED_SCALE);
        let factor = if increase {
            hundred + pct
        } else {
            hundred - pct
        };
        let num = i256::from(self.minor) * factor;
        let minor = narrow_i256(div_rounded_i256(num, hundred, mode))?;
        Ok(Self {
            minor: check_minor_in_range(minor)?,
            currency: self.currency,
        })
    }

    /// Rounds the amount to the nearest multiple of `increment` (e.g. 0.05 for nickels)
    /// under the given policy, computed directly on minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if `increment` is non-finite, zero, or negative, is not an exact
    /// multiple of the currency's minor unit, or rounds to a zero minor-unit step.
    pub fn round_to(&self, increment: f64, mode: RoundingMode) -> Result<Self, MoneyError> {
        if !increment.is_finite() || increment <= 0.0 {
            return Err(MoneyError::InvalidIncrement(increment));
        }
        let inc_scaled = f64_to_scaled(increment)?;
        let divisor = pow10(u32::from(SCALED_PRECISION - self.currency.precision));
        if inc_scaled % divisor != 0 {
            return Err(MoneyError::IncrementNotRepresentable {
                increment,
                precision: self.currency.precision,
            });
        }
        let step = inc_scaled / divisor;
        if step == 0 {
            return Err(MoneyError::IncrementTooSmall(increment));
        }
        let minor = round_to_step(self.minor, step, mode);
        Ok(Self {
            minor: check_minor_in_range(minor)?,
            currency: self.currency,
        })
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(MoneyError::InvalidDecimal(value.to_string()));
        }
        let clean_amount = parts[0].replace('_', "");
        let currency = Currency::from_str(parts[1])?;
        let scaled = decimal_str_to_scaled(&clean_amount)?;
        let minor = round_scaled_to_minor(scaled, currency.precision, RoundingMode::default());
        if minor.abs() > MINOR_UNIT_MAX {
            return Err(MoneyError::ValueTooLarge(value.to_string()));
        }
        Ok(Self { minor, currency })
    }
}

impl<T: AsRef<str>> From<T> for Money {
    fn from(value: T) -> Self {
        Self::from_str(value.as_ref()).expect(FAILED)
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.minor.hash(state);
        self.currency.hash(state);
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.minor == other.minor && self.currency == other.currency
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        assert_eq!(
            self.currency, other.currency,
            "Currency mismatch: cannot compare {} with {}",
            self.currency.code, other.currency.code
        );
        self.minor.cmp(&other.minor)
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            minor: -self.minor,
            currency: self.currency,
        }
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs).expect(FAILED)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs).expect(FAILED)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.try_add(&other).expect(FAILED);
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = self.try_sub(&other).expect(FAILED);
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {})",
            stringify!(Money),
            self.as_decimal(),
            self.currency
        )
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_decimal(), self.currency)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("amount", &self.minor)?;
        state.serialize_field("currency", &self.currency)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MoneyJson {
            amount: MinorUnit,
            currency: String,
        }

        let json = MoneyJson::deserialize(deserializer)?;
        let currency = Currency::from_str(&json.currency).map_err(serde::de::Error::custom)?;
        Ok(Self::from_minor(json.amount, currency))
    }
}
