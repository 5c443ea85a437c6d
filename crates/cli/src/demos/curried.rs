//! Curried functions, partial application and composition

use fnlab_core::constants::numbers::{FIVE, ONE, THREE, TWO};
use fnlab_core::functional::{curry, flip, forward_compose};
use fnlab_core::math::{multiply_by, plus, subtract, Divisor};
use fnlab_core::{pipeline, Result};
use std::io::Write;

pub fn run(out: &mut dyn Write) -> Result<()> {
    let greeter = curry(|greeting: &'static str, name: &'static str| format!("{greeting} {name}"));
    let sum = curry(|lhs: i32, rhs: i32| lhs + rhs);

    writeln!(out, "{}", greeter("Hello")("World"))?;
    writeln!(out, "{}", sum(5)(18))?;

    let add_three_then_double = forward_compose(plus(THREE), multiply_by(TWO));
    writeln!(out, "{}", add_three_then_double(FIVE))?;

    let halved_successor = pipeline!(FIVE, plus(ONE), Divisor::TWO.divider()).into_inner();
    writeln!(out, "{halved_successor}")?;

    // `subtract` takes the subtrahend first; flipped it reads minuend first
    let minuend_first = flip(subtract);
    writeln!(out, "{}", minuend_first(FIVE, TWO))?;

    Ok(())
}
