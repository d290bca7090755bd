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

use rstest::fixture;

use crate::types::{Currency, Money};

#[fixture]
pub fn stub_money_usd() -> Money {
    Money::from("1525000 USD")
}

#[fixture]
pub fn stub_money_jpy() -> Money {
    Money::from("150000 JPY")
}

#[fixture]
pub fn stub_money_btc() -> Money {
    Money::from("0.25 BTC")
}

#[fixture]
pub fn stub_currency_four_dp() -> Currency {
    Currency::new("XAU4", 4)
}
