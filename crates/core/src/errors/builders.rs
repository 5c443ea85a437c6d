//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an out of range error
    #[must_use]
    pub fn out_of_range(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Error::OutOfRange {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a divide by zero error raised while fixing the divisor
    #[must_use]
    pub fn divide_by_zero() -> Self {
        Error::DivideByZero { dividend: None }
    }

    /// Create a divide by zero error for a known dividend
    #[must_use]
    pub fn divide_by_zero_with(dividend: i32) -> Self {
        Error::DivideByZero {
            dividend: Some(dividend),
        }
    }
}
