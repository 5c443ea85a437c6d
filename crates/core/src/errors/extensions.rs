//! Extension traits for error handling

use super::types::{Error, Result};
use std::io::Write;

/// Extension trait for catching validation failures at the call site
pub trait ResultExt<T> {
    /// Write the error message to `out` and yield `None` instead of failing.
    ///
    /// I/O errors are not caught: they mean the sink itself is broken.
    fn or_report(self, out: &mut dyn Write) -> Result<Option<T>>;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_report(self, out: &mut dyn Write) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(Error::Io { source }) => Err(Error::Io { source }),
            Err(error) => {
                writeln!(out, "{error}")?;
                Ok(None)
            }
        }
    }
}
