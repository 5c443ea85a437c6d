//! Core error type definitions

/// Result type alias for fnlab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fnlab operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was missing, blank or malformed
    InvalidArgument { parameter: String, message: String },

    /// A numeric argument fell outside its accepted bounds
    OutOfRange { parameter: String, message: String },

    /// A curried divider was fixed to zero
    DivideByZero { dividend: Option<i32> },

    /// Writing the report failed
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Name of the rejected parameter, if the error refers to one
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Error::InvalidArgument { parameter, .. } | Error::OutOfRange { parameter, .. } => {
                Some(parameter)
            }
            Error::DivideByZero { .. } | Error::Io { .. } => None,
        }
    }
}
