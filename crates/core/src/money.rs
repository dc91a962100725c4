//! Fixed two-decimal currency value.
//!
//! Prices are held in the smallest currency unit (cents) as an `i64`, never
//! as floating point. On the wire a `Money` is a fixed two-decimal string
//! (`"50.00"`); deserialization also accepts plain JSON numbers so hand
//! written inputs like `160` or `50.0` round-trip into cents.

use core::fmt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Monetary amount in cents.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Divide an amount across `units` equal parts, rounding half-up to the
    /// nearest cent. Returns `None` for a non-positive unit count; the caller
    /// decides how to report that.
    pub fn checked_div_units(self, units: i64) -> Option<Money> {
        if units <= 0 {
            return None;
        }
        let cents = (self.0 as i128 * 2 + units as i128) / (units as i128 * 2);
        Some(Money(cents as i64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl core::ops::Mul<i64> for Money {
    type Output = Money;

    fn mul(self, qty: i64) -> Money {
        Money(self.0 * qty)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a monetary amount as a number or a decimal string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(v * 100))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                Ok(Money(v as i64 * 100))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Ok(Money((v * 100.0).round() as i64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                let parsed: f64 = v
                    .trim()
                    .parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))?;
                Ok(Money((parsed * 100.0).round() as i64))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}
