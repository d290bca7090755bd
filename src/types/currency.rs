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

//! Represents a medium of exchange with a fixed minor-unit decimal precision.
//!
//! Two currency records are equivalent when both `code` and `precision` match; equivalence,
//! not identity, gates every cross-currency operation on [`Money`](crate::types::Money).

use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize, Serializer};
use ustr::Ustr;

use crate::{
    currencies::CURRENCY_MAP,
    errors::{FAILED, MoneyError},
    types::fixed::SCALED_PRECISION,
};

/// Represents a medium of exchange in a specified denomination with a fixed decimal
/// precision for its minor unit.
///
/// Handles up to [`SCALED_PRECISION`] decimals of precision.
#[derive(Clone, Copy, Eq)]
pub struct Currency {
    /// The currency code (e.g., "USD", "BTC").
    pub code: Ustr,
    /// The number of decimal places in the currency's minor unit.
    pub precision: u8,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is empty or contains whitespace.
    /// - `precision` exceeds [`SCALED_PRECISION`].
    pub fn new_checked<T: AsRef<str>>(code: T, precision: u8) -> Result<Self, MoneyError> {
        let code = code.as_ref();
        if code.is_empty() || code.chars().any(char::is_whitespace) {
            return Err(MoneyError::InvalidCurrencyDefinition(format!(
                "`code` must be non-empty with no whitespace, was '{code}'"
            )));
        }
        if precision > SCALED_PRECISION {
            return Err(MoneyError::InvalidCurrencyDefinition(format!(
                "`precision` exceeded maximum `SCALED_PRECISION` ({SCALED_PRECISION}), was {precision}"
            )));
        }
        Ok(Self {
            code: Ustr::from(code),
            precision,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    pub fn new<T: AsRef<str>>(code: T, precision: u8) -> Self {
        Self::new_checked(code, precision).expect(FAILED)
    }

    /// Registers the given `currency` in the global currency map.
    ///
    /// - If `overwrite` is `true`, any existing currency will be replaced.
    /// - If `overwrite` is `false` and the currency already exists, the operation is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if there is a failure acquiring the lock on the currency map.
    pub fn register(currency: Self, overwrite: bool) -> anyhow::Result<()> {
        let mut map = CURRENCY_MAP
            .lock()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if !overwrite && map.contains_key(currency.code.as_str()) {
            return Ok(());
        }

        log::debug!(
            "Registering currency {} (precision={})",
            currency.code,
            currency.precision
        );
        map.insert(currency.code.to_string(), currency);
        Ok(())
    }

    /// Attempts to resolve a [`Currency`] from the registry, returning `None` if not found.
    pub fn try_from_str(s: &str) -> Option<Self> {
        let map_guard = CURRENCY_MAP.lock().ok()?;
        map_guard.get(s).copied()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.precision == other.precision
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.precision.hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', precision={})",
            stringify!(Currency),
            self.code,
            self.precision,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s).ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let currency_str: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&currency_str).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_debug() {
        let currency = Currency::USD();
        assert_eq!(format!("{currency:?}"), "Currency(code='USD', precision=2)");
    }

    #[rstest]
    fn test_display() {
        let currency = Currency::USD();
        assert_eq!(format!("{currency}"), "USD");
    }

    #[rstest]
    #[case("")]
    #[case("US D")]
    fn test_invalid_currency_code(#[case] code: &str) {
        let result = Currency::new_checked(code, 2);
        assert!(matches!(
            result,
            Err(MoneyError::InvalidCurrencyDefinition(_))
        ));
    }

    #[rstest]
    fn test_invalid_precision() {
        let result = Currency::new_checked("USD", SCALED_PRECISION + 1);
        assert!(matches!(
            result,
            Err(MoneyError::InvalidCurrencyDefinition(_))
        ));
    }

    #[rstest]
    fn test_equivalence_is_code_and_precision() {
        let c1 = Currency::new("ABC", 2);
        let c2 = Currency::new("ABC", 2);
        let c3 = Currency::new("ABC", 8);
        assert_eq!(c1, c2);
        assert_ne!(c1, c3, "Same code, different precision must not be equal");
    }

    #[rstest]
    fn test_custom_currency_definition() {
        let usdh = Currency::new("USDH", 3);
        assert_eq!(usdh.code.as_str(), "USDH");
        assert_eq!(usdh.precision, 3);

        let xau = Currency::new("XAU", 4);
        assert_eq!(xau.precision, 4);
    }

    #[rstest]
    fn test_register_no_overwrite() {
        let currency = Currency::new("REG1", 2);
        Currency::register(currency, false).unwrap();

        let shadow = Currency::new("REG1", 5);
        Currency::register(shadow, false).unwrap();

        let found = Currency::try_from_str("REG1").unwrap();
        assert_eq!(found.precision, 2);
    }

    #[rstest]
    fn test_register_with_overwrite() {
        let currency = Currency::new("REG2", 2);
        Currency::register(currency, false).unwrap();

        let replacement = Currency::new("REG2", 5);
        Currency::register(replacement, true).unwrap();

        let found = Currency::try_from_str("REG2").unwrap();
        assert_eq!(found.precision, 5);
    }

    #[rstest]
    fn test_try_from_str_unknown() {
        assert!(Currency::try_from_str("NOPE").is_none());
        assert_eq!(
            Currency::from_str("NOPE"),
            Err(MoneyError::UnknownCurrency("NOPE".to_string()))
        );
    }

    #[rstest]
    fn test_builtin_catalog() {
        for (code, precision) in [
            ("USD", 2),
            ("EUR", 2),
            ("GBP", 2),
            ("CAD", 2),
            ("AUD", 2),
            ("ZAR", 2),
            ("AED", 2),
            ("JPY", 0),
            ("BTC", 8),
        ] {
            let currency = Currency::from_str(code).unwrap();
            assert_eq!(currency.precision, precision, "catalog entry {code}");
        }
    }

    #[rstest]
    fn test_serialization_deserialization() {
        let currency = Currency::USD();
        let serialized = serde_json::to_string(&currency).unwrap();
        assert_eq!(serialized, "\"USD\"");
        let deserialized: Currency = serde_json::from_str(&serialized).unwrap();
        assert_eq!(currency, deserialized);
    }
}
