//! Curried arithmetic.
//!
//! Every operation comes in three shapes: a binary function taking the fixed
//! operand first, a curried function fixing that operand and returning a
//! [`Unary`], and three convenience wrappers fixing it to 1, 2 and 3. For all
//! operations `by(a)(b) == binary(a, b)`.
//!
//! Arithmetic wraps on overflow instead of panicking.

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod subtraction;

use crate::errors::Result;
use std::fmt;

pub use addition::{add, plus, plus_one, plus_three, plus_two};
pub use division::{by_one, by_three, by_two, divide, divided_by, Divisor};
pub use multiplication::{double, multiply, multiply_by, single, triple};
pub use subtraction::{minus, minus_one, minus_three, minus_two, subtract};

/// A function of one integer, produced by fixing one operand of a [`Binary`]
pub type Unary = Box<dyn Fn(i32) -> i32>;

/// A two-argument integer operation
pub type Binary = fn(i32, i32) -> i32;

/// The four arithmetic operations behind a uniform interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Multiply,
    Divide,
    Subtract,
    Add,
}

impl Operation {
    /// All operations, in report order
    pub const ALL: [Operation; 4] = [
        Operation::Multiply,
        Operation::Divide,
        Operation::Subtract,
        Operation::Add,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
            Operation::Subtract => "Subtract",
            Operation::Add => "Add",
        }
    }

    /// Apply the binary form, `fixed` being the operand the curried form fixes
    pub fn apply(self, fixed: i32, operand: i32) -> Result<i32> {
        Ok(self.by(fixed)?(operand))
    }

    /// Curried form fixing the first operand
    pub fn by(self, fixed: i32) -> Result<Unary> {
        match self {
            Operation::Multiply => Ok(multiply_by(fixed)),
            Operation::Divide => divided_by(fixed),
            Operation::Subtract => Ok(minus(fixed)),
            Operation::Add => Ok(plus(fixed)),
        }
    }

    /// The three convenience wrappers (fixed to 1, 2 and 3) applied to `operand`
    pub fn samples(self, operand: i32) -> [i32; 3] {
        match self {
            Operation::Multiply => [single(operand), double(operand), triple(operand)],
            Operation::Divide => [by_one(operand), by_two(operand), by_three(operand)],
            Operation::Subtract => [
                minus_one(operand),
                minus_two(operand),
                minus_three(operand),
            ],
            Operation::Add => [plus_one(operand), plus_two(operand), plus_three(operand)],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
