//! Value objects: equality by value, not identity.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build a
/// new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative amount of money in the smallest currency unit (cents).
///
/// Arithmetic saturates instead of wrapping; the catalogue never gets near
/// `u64::MAX` cents but a typo in a price must not turn a total negative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}.{:02}", self.0 / 100, self.0 % 100);
        f.pad(&text)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `"10"`, `"10.5"`, `"10.50"` or `"10,50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomainError::validation(format!("'{s}' is not a valid amount"));

        if s.starts_with('-') {
            return Err(DomainError::validation("amount must not be negative"));
        }

        let (units, fraction) = match s.split_once(['.', ',']) {
            Some((units, fraction)) => (units, fraction),
            None => (s, ""),
        };

        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !units.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(DomainError::validation(
                "amount must have at most two decimal places",
            ));
        }

        let units: u64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| invalid())?
        };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .map(Money)
            .ok_or_else(|| DomainError::validation("amount is too large"))
    }
}
