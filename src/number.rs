//! Wrapper type for sequence elements that behave either as an integer or a decimal.
//!
//! Lets mixed numeric sequences flow through `sum`, `product`, `min`, `max` and `sort`, with
//! integer arithmetic promoted to decimal as soon as a decimal is involved.

use std::cmp::Ordering;
use std::iter::Product;
use std::iter::Sum;
use std::ops::Add;
use std::ops::Mul;

pub use rust_decimal::Decimal;

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Decimal(Decimal),
}

impl Number {
    fn as_decimal(&self) -> Decimal {
        match self {
            Self::Integer(i) => Decimal::from(*i),
            Self::Decimal(d) => *d,
        }
    }

    /// Compares numeric values only, so `Integer(5)` and `Decimal(5.0)` come out equal.
    fn value_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l.cmp(r),
            _ => self.as_decimal().cmp(&other.as_decimal()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Integer(..) => 0,
            Self::Decimal(..) => 1,
        }
    }

    /// Applies an operation that stays integral while both operands are integers and the result
    /// fits in an `i64`. Otherwise the operation is redone on exact decimal operands.
    fn promoting(
        self,
        other: Self,
        int_op: fn(i64, i64) -> Option<i64>,
        dec_op: fn(Decimal, Decimal) -> Decimal,
    ) -> Self {
        if let (Self::Integer(l), Self::Integer(r)) = (self, other) {
            if let Some(n) = int_op(l, r) { return Self::Integer(n) }
        }

        Self::Decimal(dec_op(self.as_decimal(), other.as_decimal()))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by numerical value. Equal values order integers before decimals, so that
/// `Integer(5)` and `Decimal(5.0)` are distinct under both `Eq` and `Ord`.
impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value_cmp(other).then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Decimal> for Number {
    fn from(n: Decimal) -> Self {
        Self::Decimal(n)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Integer(i) => std::fmt::Display::fmt(i, f),
            Self::Decimal(d) => std::fmt::Display::fmt(d, f),
        }
    }
}

/// Integer sums that overflow `i64` continue as decimals instead of wrapping.
/// Results beyond the range of `Decimal` panic, as `Decimal`'s own operators do.
impl Add for Number {
    type Output = Number;

    fn add(self, other: Self) -> Self::Output {
        self.promoting(other, i64::checked_add, <Decimal as Add>::add)
    }
}

/// Integer products that overflow `i64` continue as decimals instead of wrapping.
/// Results beyond the range of `Decimal` panic, as `Decimal`'s own operators do.
impl Mul for Number {
    type Output = Number;

    fn mul(self, other: Self) -> Self::Output {
        self.promoting(other, i64::checked_mul, <Decimal as Mul>::mul)
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::Integer(0), Add::add)
    }
}

impl<'n> Sum<&'n Number> for Number {
    fn sum<I: Iterator<Item = &'n Number>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Number {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::Integer(1), Mul::mul)
    }
}

impl<'n> Product<&'n Number> for Number {
    fn product<I: Iterator<Item = &'n Number>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rust_decimal_macros::dec;

    use crate::chain_iter::wrap;
    use crate::error::Error;

    #[test]
    fn number_value_cmp() {
        for l in -3..=3 {
            let li = Number::Integer(l);
            let ld = Number::Decimal(l.into());

            for r in -3..=3 {
                let ri = Number::Integer(r);
                let rd = Number::Decimal(r.into());

                let expected = l.cmp(&r);

                assert_eq!(expected, li.value_cmp(&ri));
                assert_eq!(expected, li.value_cmp(&rd));
                assert_eq!(expected, ld.value_cmp(&ri));
                assert_eq!(expected, ld.value_cmp(&rd));
            }

            let lower_d = Number::Decimal(Decimal::from(l) - dec!(0.5));
            let upper_d = Number::Decimal(Decimal::from(l) + dec!(0.5));

            assert_eq!(Ordering::Greater, li.value_cmp(&lower_d));
            assert_eq!(Ordering::Less, li.value_cmp(&upper_d));
            assert_eq!(Ordering::Less, ld.value_cmp(&upper_d));
        }
    }

    #[test]
    fn number_ord() {
        // Equal values are still distinct, integers first.
        assert_eq!(Ordering::Less, Number::Integer(5).cmp(&Number::Decimal(dec!(5.0))));
        assert_eq!(Ordering::Greater, Number::Decimal(dec!(5.0)).cmp(&Number::Integer(5)));
        assert_eq!(Ordering::Equal, Number::Decimal(dec!(5.0)).cmp(&Number::Decimal(dec!(5.00))));
        assert_ne!(Number::Integer(5), Number::Decimal(dec!(5.0)));

        let expected = vec![
            Number::Decimal(dec!(-2.5)),
            Number::Integer(-2),
            Number::Decimal(dec!(-2)),
            Number::Decimal(dec!(-1.5)),
            Number::Integer(-1),
            Number::Decimal(dec!(-0.5)),
            Number::Integer(0),
            Number::Decimal(dec!(0.5)),
            Number::Integer(1),
            Number::Decimal(dec!(1)),
            Number::Decimal(dec!(1.5)),
            Number::Integer(2),
            Number::Decimal(dec!(2.5)),
        ];

        let mut shuffled = expected.clone();
        shuffled.shuffle(&mut rand::thread_rng());

        assert_eq!(expected, wrap(shuffled).sort());
    }

    #[test]
    fn number_arithmetic() {
        for l in -3..=3 {
            for r in -3..=3 {
                let li = Number::Integer(l);
                let ld = Number::Decimal(l.into());
                let ri = Number::Integer(r);
                let rd = Number::Decimal(r.into());

                assert_eq!(Number::Integer(l + r), li + ri);
                assert_eq!(Number::Decimal(Decimal::from(l + r)), li + rd);
                assert_eq!(Number::Decimal(Decimal::from(l + r)), ld + ri);

                assert_eq!(Number::Integer(l * r), li * ri);
                assert_eq!(Number::Decimal(Decimal::from(l * r)), ld * rd);
            }
        }

        assert_eq!(Number::Decimal(dec!(5.76)), Number::Decimal(dec!(3.2)) * Number::Decimal(dec!(1.8)));
        assert_eq!(Number::Decimal(dec!(-1.4)), Number::Decimal(dec!(-3.2)) + Number::Integer(1) + Number::Decimal(dec!(0.8)));
    }

    #[test]
    fn number_overflow_promotes() {
        let max = Number::Integer(i64::MAX);
        let min = Number::Integer(i64::MIN);

        assert_eq!(Number::Decimal(Decimal::from(i64::MAX) + dec!(1)), max + Number::Integer(1));
        assert_eq!(Number::Decimal(Decimal::from(i64::MIN) - dec!(1)), min + Number::Integer(-1));
        assert_eq!(Number::Decimal(Decimal::from(i64::MAX) * dec!(2)), max * Number::Integer(2));
        assert_eq!(Number::Decimal(-Decimal::from(i64::MIN)), min * Number::Integer(-1));

        // Staying in range keeps the integer form.
        assert_eq!(Number::Integer(i64::MAX), Number::Integer(i64::MAX - 1) + Number::Integer(1));

        let total = wrap(vec![Number::Integer(i64::MAX), Number::Integer(1)]).sum();
        assert_eq!(Number::Decimal(Decimal::from(i64::MAX) + dec!(1)), total);

        // Once promoted, the running total stays exact.
        let total = wrap(vec![Number::Integer(i64::MAX), Number::Integer(1), Number::Integer(-2)]).sum();
        assert_eq!(Number::Decimal(Decimal::from(i64::MAX - 1)), total);

        let produced = wrap(vec![Number::Integer(i64::MAX), Number::Integer(3)]).product();
        assert_eq!(Number::Decimal(Decimal::from(i64::MAX) * dec!(3)), produced);
    }

    #[test]
    fn number_sum_product() {
        let ints = vec![Number::Integer(1), Number::Integer(2), Number::Integer(3)];
        assert_eq!(Number::Integer(6), wrap(ints.clone()).sum());
        assert_eq!(Number::Integer(6), wrap(ints.clone()).product());
        assert_eq!(Number::Integer(6), wrap(&ints).map(|n| *n).sum());
        assert_eq!(Number::Integer(6), ints.iter().sum::<Number>());

        // A single decimal promotes the whole result.
        let mixed = vec![Number::Integer(1), Number::Decimal(dec!(2.5)), Number::Integer(3)];
        assert_eq!(Number::Decimal(dec!(6.5)), wrap(mixed.clone()).sum());
        assert_eq!(Number::Decimal(dec!(7.5)), wrap(mixed.clone()).product());
        assert_eq!(Number::Decimal(dec!(7.5)), mixed.iter().product::<Number>());

        assert_eq!(Number::Integer(0), wrap(Vec::<Number>::new()).sum());
        assert_eq!(Number::Integer(1), wrap(Vec::<Number>::new()).product());
    }

    #[test]
    fn number_min_max() {
        let mixed = vec![Number::Integer(2), Number::Decimal(dec!(-0.5)), Number::Decimal(dec!(2.75)), Number::Integer(-1)];

        assert_eq!(Ok(Number::Integer(-1)), wrap(mixed.clone()).min());
        assert_eq!(Ok(Number::Decimal(dec!(2.75))), wrap(mixed.clone()).max());
        assert_eq!(Err(Error::EmptySequence), wrap(Vec::<Number>::new()).min());

        // Equal values order integers first, so the decimal is the larger.
        let tied = vec![Number::Decimal(dec!(1)), Number::Integer(1)];
        assert_eq!(Ok(Number::Integer(1)), wrap(tied.clone()).min());
        assert_eq!(Ok(Number::Decimal(dec!(1))), wrap(tied).max());
    }

    #[test]
    fn number_serde() {
        let produced: Vec<Number> = serde_json::from_str("[1, 2.5, -3]").unwrap();
        let expected = vec![Number::Integer(1), Number::Decimal(dec!(2.5)), Number::Integer(-3)];
        assert_eq!(expected, produced);

        assert_eq!(Number::Decimal(dec!(0.5)), wrap(produced).sum());

        assert_eq!("7", serde_json::to_string(&Number::Integer(7)).unwrap());
        assert_eq!("1.5", serde_json::to_string(&Number::Decimal(dec!(1.5))).unwrap());
    }

    #[test]
    fn number_display() {
        let rendered = wrap(vec![Number::Integer(1), Number::Decimal(dec!(2.5))]).join(" + ");
        assert_eq!("1 + 2.5", rendered);
    }
}
