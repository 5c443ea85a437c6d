//! Functional validation helpers backing the smart constructors

use super::types::{Error, Result};
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Functional validation utilities
pub struct Validate;

impl Validate {
    /// Validate that a string has at least one non-whitespace character
    pub fn not_blank<'a>(value: &'a str, parameter: &str, message: &str) -> Result<&'a str> {
        if value.trim().is_empty() {
            debug!(parameter, "rejected blank value");
            Err(Error::invalid_argument(parameter, message))
        } else {
            Ok(value)
        }
    }

    /// Validate that a value lies within an inclusive range
    pub fn in_range<T>(
        value: T,
        range: &RangeInclusive<T>,
        parameter: &str,
        message: &str,
    ) -> Result<T>
    where
        T: PartialOrd + fmt::Display + Copy,
    {
        if range.contains(&value) {
            Ok(value)
        } else {
            debug!(parameter, %value, "rejected value outside of range");
            Err(Error::out_of_range(parameter, message))
        }
    }

    /// Validate that a string matches a pattern
    pub fn matches<'a>(
        value: &'a str,
        pattern: &Regex,
        parameter: &str,
        message: &str,
    ) -> Result<&'a str> {
        if pattern.is_match(value) {
            Ok(value)
        } else {
            debug!(parameter, "rejected value not matching pattern");
            Err(Error::invalid_argument(parameter, message))
        }
    }
}
