//! # Price Types
//!
//! Decimal money and tax rate types for the order form.
//! Amounts keep full precision; rounding to cents happens only when rendered.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Number of decimal places shown for a dollar amount
pub const DISPLAY_DECIMALS: u32 = 2;

/// Rounding applied at render time (round half up)
pub const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// A dollar amount held at full decimal precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal dollar amount
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from cents (e.g., `from_cents(1298)` is $12.98)
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Zero dollars
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The unrounded amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Amount rounded to cents
    pub fn rounded(&self) -> Self {
        Self(self.0.round_dp_with_strategy(DISPLAY_DECIMALS, DISPLAY_ROUNDING))
    }

    /// Rounded amount without currency symbol (e.g., "14.98")
    pub fn to_plain_string(&self) -> String {
        format!("{:.2}", self.rounded().0)
    }

    /// Format for display (e.g., "$14.98")
    pub fn display(&self) -> String {
        format!("${}", self.to_plain_string())
    }

    /// Fixed-width receipt column: `$` followed by the amount right-aligned in six characters
    pub fn column(&self) -> String {
        format!("${:>6}", self.to_plain_string())
    }

    /// Price of `count` units at this unit price
    pub fn times(&self, count: usize) -> Self {
        Self(self.0 * Decimal::from(count as u64))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 += rhs.0;
    }
}

impl Mul<TaxRate> for Price {
    type Output = Price;

    fn mul(self, rate: TaxRate) -> Price {
        Price(self.0 * rate.0)
    }
}

/// Sales tax rate as a decimal fraction (0.07 = 7%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Create a rate from basis points (700 bps = 7%)
    pub fn from_bps(bps: u32) -> Self {
        Self(Decimal::new(i64::from(bps), 4))
    }

    /// Create a rate from a decimal fraction
    pub const fn new(fraction: Decimal) -> Self {
        Self(fraction)
    }

    /// The rate as a fraction
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// The rate as a percentage (7 for 0.07)
    pub fn percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}
