//! Monetary amounts in integer cents.

use super::ParseMoneyError;
use serde::{Deserialize, Serialize};
use std::{fmt, iter::Sum, str::FromStr};

const CENTS_PER_UNIT: i64 = 100;

/// A signed amount of money stored as cents.
///
/// Arithmetic saturates rather than wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(CENTS_PER_UNIT))
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` for amounts above zero.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` for amounts below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, saturating at the numeric bounds.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtracts `other`, saturating at the numeric bounds.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "splitting cents into units and remainder is exact"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT.unsigned_abs();
        write!(f, "{sign}{}.{:02}", magnitude / per_unit, magnitude % per_unit)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses a decimal amount such as `12`, `12.5`, or `-0.99`.
    ///
    /// Either `.` or `,` separates the cents. At most two fractional digits
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoneyError(s.to_owned());
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = digits
            .split_once(['.', ','])
            .unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }
        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())?.saturating_mul(10),
            _ => fraction.parse().map_err(|_| invalid())?,
        };
        let magnitude = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|value| value.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { magnitude.saturating_neg() } else { magnitude }))
    }
}
