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

//! Decimal-safe monetary values as exact minor-unit integers.
//!
//! The `exact-money` crate represents amounts of currency as exact integer counts of a
//! currency's minor unit (cents, satoshis, etc.) and provides arithmetic, comparison,
//! allocation, rounding, percentage, and conversion operations that are deterministic and
//! free of binary floating-point error:
//!
//! - Floating-point rates, percentages, and increments enter the numeric core only through
//!   an exact decimal-string intermediate, never by direct float multiplication.
//! - A 20-decimal-digit internal fixed-point scale holds realistic FX rates without
//!   truncation before rounding to the target currency.
//! - Four explicit rounding policies (half-away-from-zero, floor, ceiling, truncate).
//! - Remainder-fair allocation that conserves the source amount exactly.
//! - Every produced amount is checked against a safe-integer envelope (2^53 - 1) so
//!   results remain exactly representable by double-precision wire consumers.
//!
//! Money values are immutable and `Copy`; the library is pure, synchronous computation
//! with no shared mutable state beyond the global currency registry.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod currencies;
pub mod errors;
pub mod types;

pub use crate::{
    errors::MoneyError,
    types::{Currency, Money, RoundingMode},
};
