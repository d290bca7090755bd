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

//! Errors for monetary operations.
//!
//! Every failure is immediate and synchronous: operations either produce a new value or
//! return one of these variants, with no partial results and no silent coercion.

use ustr::Ustr;

/// The standard message for a failed correctness check on an infallible code path.
pub(crate) const FAILED: &str = "Condition check failed";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MoneyError {
    /// A currency definition had an empty code or an unsupported decimal-place count.
    #[error("Invalid currency definition: {0}")]
    InvalidCurrencyDefinition(String),
    /// The codec was given a NaN or infinite number.
    #[error("Invalid number: {0} is not finite")]
    InvalidNumber(f64),
    /// A decimal string could not be parsed.
    #[error("Invalid decimal string: '{0}'")]
    InvalidDecimal(String),
    /// A currency code was not found in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    /// An input magnitude exceeds the safe-integer envelope.
    #[error("Value '{0}' exceeds the safe monetary range")]
    ValueTooLarge(String),
    /// A produced amount exceeds the safe-integer envelope.
    #[error("Arithmetic result exceeds the safe monetary range")]
    ResultTooLarge,
    /// Strict construction could not represent the value exactly at the currency scale.
    #[error("Value {value} is not exactly representable at {precision} decimal places")]
    PrecisionLoss { value: f64, precision: u8 },
    /// Two operands did not share an equivalent currency.
    #[error("Currency mismatch: {lhs} vs {rhs}")]
    CurrencyMismatch { lhs: Ustr, rhs: Ustr },
    /// `sum` was called with no elements.
    #[error("Cannot sum an empty collection of monies")]
    EmptyInput,
    /// An allocation part-count was not a positive integer.
    #[error("Allocation count must be a positive integer, was {0}")]
    InvalidCount(i64),
    /// An allocation part-count exceeded the safe-integer envelope.
    #[error("Allocation count {0} exceeds the safe integer range")]
    UnsafeCount(i64),
    /// A conversion rate was non-finite, zero, or negative.
    #[error("Conversion rate must be positive and finite, was {0}")]
    InvalidRate(f64),
    /// A rounding increment was non-finite, zero, or negative.
    #[error("Rounding increment must be positive and finite, was {0}")]
    InvalidIncrement(f64),
    /// A rounding increment was not an exact multiple of the currency's minor unit.
    #[error("Increment {increment} is not representable at {precision} decimal places")]
    IncrementNotRepresentable { increment: f64, precision: u8 },
    /// A rounding increment rounded to a zero minor-unit step.
    #[error("Increment {0} rounds to a zero minor-unit step")]
    IncrementTooSmall(f64),
}
