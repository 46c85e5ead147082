// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-point money helpers.
//!
//! All amounts are `rust_decimal::Decimal`. Arithmetic is exact; rounding
//! to cents happens only when a value is presented.

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest difference between two amounts that still counts as balanced.
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Number of decimal places used when presenting money.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to cents, half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let mut rounded: Decimal = round_money(amount);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}

/// Sums an iterator of amounts.
#[must_use]
pub fn sum_money<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().fold(Decimal::ZERO, |acc, amount| acc + amount)
}

/// Returns whether two amounts are within `MONEY_TOLERANCE` of each other.
#[must_use]
pub fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= MONEY_TOLERANCE
}
