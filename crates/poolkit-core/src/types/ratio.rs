//! # Human Price Ratios
//!
//! A `HumanRatio` states how many whole units of one token equal one whole unit
//! of the other. It is held as an exact rational so inversion and decimal
//! scaling never lose precision.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Zero};

use crate::errors::{CoreResult, PoolKitError};

/// Largest decimal exponent accepted when parsing a ratio
pub const MAX_RATIO_EXPONENT: i64 = 512;

/// Exact positive rational `numer / denom`, kept in lowest terms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HumanRatio {
    numer: BigUint,
    denom: BigUint,
}

impl HumanRatio {
    /// Create a ratio from a numerator and denominator
    pub fn new(numer: BigUint, denom: BigUint) -> CoreResult<Self> {
        if numer.is_zero() {
            return Err(PoolKitError::invalid_ratio("ratio must be positive"));
        }
        if denom.is_zero() {
            return Err(PoolKitError::invalid_ratio("denominator must be non-zero"));
        }
        let gcd = numer.gcd(&denom);
        Ok(Self {
            numer: numer / &gcd,
            denom: denom / &gcd,
        })
    }

    /// Whole-number ratio
    pub fn from_integer(value: u64) -> CoreResult<Self> {
        Self::new(BigUint::from(value), BigUint::one())
    }

    /// Exact conversion from an arbitrary-precision decimal
    pub fn from_decimal(value: &BigDecimal) -> CoreResult<Self> {
        let (digits, exponent) = value.as_bigint_and_exponent();
        if digits.sign() != Sign::Plus {
            return Err(PoolKitError::invalid_ratio(format!(
                "ratio must be positive, got {}",
                value
            )));
        }
        if exponent.abs() > MAX_RATIO_EXPONENT {
            return Err(PoolKitError::invalid_ratio(format!(
                "ratio exponent out of range: {}",
                value
            )));
        }
        let digits = digits.magnitude().clone();
        // value = digits * 10^(-exponent)
        let scale = BigUint::from(10u32).pow(exponent.unsigned_abs() as u32);
        if exponent >= 0 {
            Self::new(digits, scale)
        } else {
            Self::new(digits * scale, BigUint::one())
        }
    }

    /// Conversion from a binary float.
    ///
    /// The float's exact binary value is kept (0.1 is not exactly one tenth),
    /// so string input is preferred for configured prices.
    pub fn from_f64(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(PoolKitError::invalid_ratio(format!(
                "ratio must be finite, got {}",
                value
            )));
        }
        if value <= 0.0 {
            return Err(PoolKitError::invalid_ratio(format!(
                "ratio must be positive, got {}",
                value
            )));
        }
        let decimal = BigDecimal::from_f64(value)
            .ok_or_else(|| PoolKitError::invalid_ratio(format!("unrepresentable ratio {}", value)))?;
        Self::from_decimal(&decimal)
    }

    pub fn numer(&self) -> &BigUint {
        &self.numer
    }

    pub fn denom(&self) -> &BigUint {
        &self.denom
    }

    /// The same price stated from the other token's side
    pub fn inverse(&self) -> Self {
        Self {
            numer: self.denom.clone(),
            denom: self.numer.clone(),
        }
    }

    /// Decimal approximation, for display
    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.numer.clone()), 0)
            / BigDecimal::new(BigInt::from(self.denom.clone()), 0)
    }
}

fn parse_decimal(s: &str) -> CoreResult<BigDecimal> {
    BigDecimal::from_str(s.trim())
        .map_err(|_| PoolKitError::invalid_ratio(format!("'{}' is not a number", s.trim())))
}

impl FromStr for HumanRatio {
    type Err = PoolKitError;

    /// Accepts decimals (`4000`, `0.00025`, `1e-9`) and fractions (`1/3`)
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.split_once('/') {
            Some((numer, denom)) => {
                let numer = HumanRatio::from_decimal(&parse_decimal(numer)?)?;
                let denom = HumanRatio::from_decimal(&parse_decimal(denom)?)?;
                HumanRatio::new(
                    numer.numer * denom.denom,
                    numer.denom * denom.numer,
                )
            }
            None => HumanRatio::from_decimal(&parse_decimal(s)?),
        }
    }
}

impl fmt::Display for HumanRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(s: &str) -> HumanRatio {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(ratio("4000"), HumanRatio::from_integer(4000).unwrap());
        assert_eq!(ratio("0.00025").to_string(), "1/4000");
        assert_eq!(ratio("1e-9").to_string(), "1/1000000000");
        assert_eq!(ratio("2.50").to_string(), "5/2");
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(ratio("1/3").to_string(), "1/3");
        assert_eq!(ratio("0.5/0.25").to_string(), "2");
    }

    #[test]
    fn test_rejects_non_positive_and_garbage() {
        for input in ["0", "-1", "0.0", "abc", "", "NaN", "inf", "1/0"] {
            let err = input.parse::<HumanRatio>().unwrap_err();
            assert!(
                matches!(err, PoolKitError::InvalidRatio(_)),
                "expected InvalidRatio for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_floats() {
        assert!(HumanRatio::from_f64(f64::NAN).is_err());
        assert!(HumanRatio::from_f64(f64::INFINITY).is_err());
        assert!(HumanRatio::from_f64(0.0).is_err());
        assert!(HumanRatio::from_f64(-2.0).is_err());
        assert_eq!(HumanRatio::from_f64(0.5).unwrap().to_string(), "1/2");
    }

    #[test]
    fn test_inverse() {
        let r = ratio("4000");
        assert_eq!(r.inverse().to_string(), "1/4000");
        assert_eq!(r.inverse().inverse(), r);
    }

    #[test]
    fn test_exponent_guard() {
        assert!("1e-100000".parse::<HumanRatio>().is_err());
    }
}
