//! Division, curried on the divisor: `divided_by(x)(y) == y / x`.
//!
//! Fixing a zero divisor fails with [`Error::DivideByZero`]. A [`Divisor`]
//! is already known to be non-zero, so dividers built from one cannot fail.
//! Quotients truncate toward zero and `i32::MIN / -1` wraps.

use super::Unary;
use crate::constants::numbers::{ONE, THREE, TWO};
use crate::errors::{Error, Result};
use crate::functional::curry;
use std::fmt;
use std::num::NonZeroI32;

/// A non-zero divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Divisor(NonZeroI32);

impl Divisor {
    pub const ONE: Divisor = Divisor::from_const(ONE);
    pub const TWO: Divisor = Divisor::from_const(TWO);
    pub const THREE: Divisor = Divisor::from_const(THREE);

    const fn from_const(value: i32) -> Self {
        match NonZeroI32::new(value) {
            Some(value) => Divisor(value),
            None => panic!("divisor constant must be non-zero"),
        }
    }

    /// Create a divisor, rejecting zero
    pub fn new(value: i32) -> Result<Self> {
        NonZeroI32::new(value)
            .map(Divisor)
            .ok_or_else(Error::divide_by_zero)
    }

    pub fn get(self) -> i32 {
        self.0.get()
    }

    /// The curried divider for this divisor
    pub fn divider(self) -> Unary {
        curried()(self)
    }
}

impl TryFrom<i32> for Divisor {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn curried() -> impl Fn(Divisor) -> Unary {
    curry(|divisor: Divisor, dividend: i32| dividend.wrapping_div(divisor.get()))
}

/// `dividend / divisor`
pub fn divide(divisor: i32, dividend: i32) -> Result<i32> {
    let divisor = Divisor::new(divisor).map_err(|_| Error::divide_by_zero_with(dividend))?;
    Ok(divisor.divider()(dividend))
}

pub fn divided_by(divisor: i32) -> Result<Unary> {
    Ok(Divisor::new(divisor)?.divider())
}

pub fn by_one(dividend: i32) -> i32 {
    Divisor::ONE.divider()(dividend)
}

pub fn by_two(dividend: i32) -> i32 {
    Divisor::TWO.divider()(dividend)
}

pub fn by_three(dividend: i32) -> i32 {
    Divisor::THREE.divider()(dividend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_wrappers_truncate() {
        assert_eq!(by_one(5), 5);
        assert_eq!(by_two(5), 2);
        assert_eq!(by_three(5), 1);
        assert_eq!(by_two(-5), -2);
    }

    #[test]
    fn test_divided_by_zero_fails() {
        let err = divided_by(0).err().unwrap();
        assert!(matches!(err, Error::DivideByZero { dividend: None }));
        assert!(Divisor::new(0).is_err());
        assert!(Divisor::try_from(0).is_err());
    }

    #[test]
    fn test_divide_reports_the_dividend() {
        let err = divide(0, 9).unwrap_err();
        assert!(matches!(err, Error::DivideByZero { dividend: Some(9) }));
        assert_eq!(divide(3, 9).unwrap(), 3);
    }

    #[test]
    fn test_divide_wraps_on_overflow() {
        assert_eq!(divide(-1, i32::MIN).unwrap(), i32::MIN);
    }

    #[test]
    fn test_divisor_constants() {
        assert_eq!(Divisor::ONE.get(), 1);
        assert_eq!(Divisor::THREE.to_string(), "3");
        assert_eq!(Divisor::new(-4).unwrap().get(), -4);
    }
}
