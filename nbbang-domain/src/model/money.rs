use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Amount in the smallest currency unit (1 won).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,
    #[error("amount '{0}' is not a whole number")]
    Malformed(String),
}

impl Money {
    pub const ZERO: Self = Self(0);

    /// Largest price a single item may carry (ten billion won).
    ///
    /// Keeps every sum over the items of a meal, and over a group's history, far inside
    /// `i64`.
    pub const MAX_PRICE: Self = Self(10_000_000_000);

    pub const fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub const fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Sum that reports overflow instead of wrapping.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.checked_add(amount))
    }

    /// Equal share of `self` among `count` consumers, rounded to the nearest unit
    /// with halves going up.
    ///
    /// Returns `None` for `count == 0`. The shares are not reconciled: `share * count`
    /// may differ from `self` by up to `count / 2` units.
    pub fn split_evenly(self, count: usize) -> Option<Money> {
        if count == 0 {
            return None;
        }
        let share = Decimal::from(self.0).checked_div(Decimal::from(count as u64))?;
        share
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
    }

    /// Parses a price typed into the meal form.
    ///
    /// Accepts ASCII digits, optionally grouped by `,` in threes, and an all-zero
    /// fractional part (`"12,000"`, `"8000.0"`). Signs, other fractions, misplaced
    /// separators and anything else are rejected.
    pub fn parse_input(input: &str) -> Result<Money, MoneyParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let malformed = || MoneyParseError::Malformed(trimmed.to_string());
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (trimmed, None),
        };
        if let Some(fraction) = fraction
            && (fraction.is_empty() || !fraction.chars().all(|c| c == '0'))
        {
            return Err(malformed());
        }
        if whole.contains(',') && !is_grouped_in_threes(whole) {
            return Err(malformed());
        }

        let digits: String = whole.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        digits.parse::<i64>().map(Money).map_err(|_| malformed())
    }

    /// ko-KR style grouping: `12000` displays as `12,000`.
    pub fn grouped(self) -> Grouped {
        Grouped(self)
    }
}

/// `1,234,567`: a lead group of one to three digits, then groups of exactly three.
fn is_grouped_in_threes(whole: &str) -> bool {
    let mut groups = whole.split(',');
    let lead_ok = groups
        .next()
        .is_some_and(|lead| (1..=3).contains(&lead.len()));
    lead_ok && groups.all(|group| group.len() == 3)
}

pub struct Grouped(Money);

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.amount();
        if value < 0 {
            f.write_str("-")?;
        }
        let digits = value.unsigned_abs().to_string();
        let head = digits.len() % 3;
        for (idx, c) in digits.chars().enumerate() {
            if idx > 0 && (idx + 3 - head) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::even(30_000, 3, 10_000)]
    #[case::third_rounds_down(10_000, 3, 3_333)]
    #[case::two_thirds_rounds_up(20_000, 3, 6_667)]
    #[case::half_rounds_up(5, 2, 3)]
    #[case::quarter_half_rounds_up(10, 4, 3)]
    #[case::below_half(1, 4, 0)]
    #[case::single_consumer(8_000, 1, 8_000)]
    fn split_evenly_rounds_half_up(#[case] price: i64, #[case] count: usize, #[case] share: i64) {
        assert_eq!(
            Money::from_i64(price).split_evenly(count),
            Some(Money::from_i64(share))
        );
    }

    #[test]
    fn split_evenly_rejects_zero_consumers() {
        assert_eq!(Money::from_i64(1_000).split_evenly(0), None);
    }

    #[rstest]
    #[case::plain("8000", 8_000)]
    #[case::padded("  12000 ", 12_000)]
    #[case::grouped("12,000", 12_000)]
    #[case::grouped_millions("1,234,567", 1_234_567)]
    #[case::zero_fraction("8000.00", 8_000)]
    #[case::zero("0", 0)]
    fn parse_input_accepts(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(Money::parse_input(input), Ok(Money::from_i64(expected)));
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::negative("-100")]
    #[case::fraction("99.5")]
    #[case::dangling_dot("100.")]
    #[case::leading_comma(",100")]
    #[case::double_comma("1,,000")]
    #[case::short_groups("1,0,0")]
    #[case::two_digit_group("12,00")]
    #[case::long_lead("1234,567")]
    #[case::trailing_comma("1,000,")]
    #[case::overflow("99999999999999999999")]
    fn parse_input_rejects_malformed(#[case] input: &str) {
        assert!(matches!(
            Money::parse_input(input),
            Err(MoneyParseError::Malformed(_))
        ));
    }

    #[test]
    fn parse_input_rejects_blank() {
        assert_eq!(Money::parse_input("   "), Err(MoneyParseError::Empty));
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(12_000, "12,000")]
    #[case(1_234_567, "1,234,567")]
    #[case(-30_000, "-30,000")]
    fn grouped_display(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(Money::from_i64(value).grouped().to_string(), expected);
    }

    #[test]
    fn checked_sum_reports_overflow() {
        let max = Money::from_i64(i64::MAX);
        assert_eq!(Money::checked_sum([max, Money::from_i64(1)]), None);
        assert_eq!(
            Money::checked_sum([Money::MAX_PRICE, Money::MAX_PRICE]),
            Some(Money::from_i64(20_000_000_000))
        );
        assert_eq!(Money::checked_sum([]), Some(Money::ZERO));
    }

    #[test]
    fn sums_over_references() {
        let amounts = [Money::from_i64(1), Money::from_i64(2), Money::from_i64(3)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::from_i64(6));
    }
}
