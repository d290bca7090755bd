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

//! Value types for the monetary domain model, including `Money` and `Currency`.

pub mod currency;
pub mod fixed;
pub mod money;
pub mod rounding;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

pub use currency::Currency;
pub use money::{MINOR_UNIT_MAX, MINOR_UNIT_MIN, MinorUnit, Money};
pub use rounding::RoundingMode;
