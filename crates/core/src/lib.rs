//! Core library for `fnlab`: curried arithmetic, functional combinators and
//! validated domain types.
//!
//! ## Key Components
//!
//! - **`math`**: the four arithmetic operations, each with a binary form, a
//!   curried form fixing the first operand, and three convenience wrappers.
//! - **`functional`**: generic combinators (`curry`, composition, `Pipe`),
//!   multicast handler lists and lazy evaluation helpers.
//! - **`types`**: smart-constructed newtypes (`Person`, `Email`), the
//!   `Generic<T>` wrapper and the `DaysLived` extension trait.
//! - **`errors`**: the `Error` enum and `Result` alias shared by everything above.
//! - **`constants`**: numeric constants and the report separator.

pub mod constants;
pub mod errors;
pub mod functional;
pub mod math;
pub mod types;

#[cfg(test)]
mod testing;

pub use self::{
    errors::{Error, Result, ResultExt, Validate},
    math::{Binary, Operation, Unary},
    types::{DaysLived, Email, Generic, Person},
};
