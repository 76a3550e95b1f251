use crate::error::LoanError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary value kept at full decimal precision.
///
/// Rounding to cents only happens at the presentation boundary, so schedule
/// invariants can be checked against the raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds half away from zero to whole cents.
    pub fn to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    pub fn non_negative(self) -> Self {
        Self(self.0.max(Decimal::ZERO))
    }
}

/// `$` prefix, thousands separators, two decimals, half away from zero.
/// Amounts that round to zero never show a sign.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.to_cents().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        write!(f, "{sign}${}.{cents}", group_thousands(whole))
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A borrowed amount. Always strictly positive, so only `new` builds one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Principal(Decimal);

impl Principal {
    pub fn new(value: Decimal) -> Result<Self, LoanError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LoanError::Validation(
                "Principal must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Principal> for Money {
    fn from(principal: Principal) -> Self {
        Self(principal.0)
    }
}

/// Nominal yearly interest rate as a fraction (0.165 is 16.5%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AnnualRate(Decimal);

impl AnnualRate {
    pub fn new(value: Decimal) -> Result<Self, LoanError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(LoanError::InvalidRate { rate: value })
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Yearly rate divided by twelve, no compounding adjustment.
    pub fn monthly(&self) -> Decimal {
        self.0 / Decimal::from(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let m1 = Money::new(dec!(10.0));
        let m2 = Money::new(dec!(5.0));
        assert_eq!(m1 + m2, Money::new(dec!(15.0)));
        assert_eq!(m1 - m2, Money::new(dec!(5.0)));

        let total: Money = [m1, m2, m2].into_iter().sum();
        assert_eq!(total, Money::new(dec!(20.0)));
    }

    #[test]
    fn test_money_to_cents_rounds_half_away_from_zero() {
        assert_eq!(Money::new(dec!(1.005)).to_cents(), Money::new(dec!(1.01)));
        assert_eq!(Money::new(dec!(-1.005)).to_cents(), Money::new(dec!(-1.01)));
        assert_eq!(Money::new(dec!(1.004)).to_cents(), Money::new(dec!(1.00)));
    }

    #[test]
    fn test_money_non_negative() {
        assert_eq!(Money::new(dec!(-0.0001)).non_negative(), Money::ZERO);
        assert_eq!(Money::new(dec!(3)).non_negative(), Money::new(dec!(3)));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::new(dec!(7.5)).to_string(), "$7.50");
        assert_eq!(Money::new(dec!(999.999)).to_string(), "$1,000.00");
        assert_eq!(Money::new(dec!(1234567.891)).to_string(), "$1,234,567.89");
        assert_eq!(Money::new(dec!(-1234.5)).to_string(), "-$1,234.50");
        assert_eq!(Money::new(dec!(-0.004)).to_string(), "$0.00");
    }

    #[test]
    fn test_principal_validation() {
        assert!(Principal::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Principal::new(dec!(0.0)),
            Err(LoanError::Validation(_))
        ));
        assert!(matches!(
            Principal::new(dec!(-1.0)),
            Err(LoanError::Validation(_))
        ));
    }

    #[test]
    fn test_annual_rate_validation() {
        assert!(AnnualRate::new(dec!(0)).is_ok());
        assert_eq!(AnnualRate::new(dec!(0.21)).unwrap().monthly(), dec!(0.0175));
        assert!(matches!(
            AnnualRate::new(dec!(-0.01)),
            Err(LoanError::InvalidRate { .. })
        ));
    }
}
