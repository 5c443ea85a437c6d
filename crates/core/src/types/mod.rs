//! Validated domain types and extension traits

pub mod email;
pub mod extensions;
pub mod generic;
pub mod person;

pub use email::Email;
pub use extensions::DaysLived;
pub use generic::Generic;
pub use person::Person;
