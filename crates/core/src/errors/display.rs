//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { parameter, message }
            | Error::OutOfRange { parameter, message } => {
                write!(f, "{message} (Parameter '{parameter}')")
            }
            Error::DivideByZero { dividend } => match dividend {
                Some(dividend) => write!(f, "attempted to divide {dividend} by zero"),
                None => write!(f, "attempted to divide by zero"),
            },
            Error::Io { source } => {
                write!(f, "failed to write output: {source}")
            }
        }
    }
}
