//! Error types, validation helpers and result extensions for fnlab

mod builders;
mod conversions;
mod display;
mod extensions;
mod types;
mod validate;

pub use extensions::*;
pub use types::{Error, Result};
pub use validate::Validate;
