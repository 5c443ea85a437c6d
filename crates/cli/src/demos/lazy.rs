//! Deferred evaluation with thunks, memoized values and iterators

use fnlab_core::functional::lazy::{defer_choice, numbers, window, Lazy};
use fnlab_core::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::io::Write;
use tracing::debug;

pub const LEFT: i32 = 23;
pub const RIGHT: i32 = 42;

// Fixed so the report is reproducible
const COIN_SEED: u64 = 0x5EED;

pub fn run(out: &mut dyn Write) -> Result<()> {
    laziness_with_functions(out)?;
    laziness_with_memoization(out)?;
    laziness_with_iterators(out)
}

fn laziness_with_functions(out: &mut dyn Write) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(COIN_SEED);
    let left_expression = || LEFT;
    let right_expression = || RIGHT;
    let mut lazy_executed =
        defer_choice(move || rng.gen_bool(0.5), left_expression, right_expression);

    debug!("choice built, nothing evaluated yet");
    writeln!(out, "{}", lazy_executed())?;
    Ok(())
}

fn laziness_with_memoization(out: &mut dyn Write) -> Result<()> {
    let evaluations = Cell::new(0);
    let answer = Lazy::new(|| {
        evaluations.set(evaluations.get() + 1);
        LEFT + RIGHT
    });

    writeln!(out, "{}", *answer)?;
    writeln!(out, "{}", *answer)?;
    writeln!(out, "evaluated {} time(s)", evaluations.get())?;
    Ok(())
}

fn laziness_with_iterators(out: &mut dyn Write) -> Result<()> {
    let skip_four_take_four = window(numbers(), 4, 4);

    debug!("window built, nothing pulled yet");
    for number in skip_four_take_four {
        writeln!(out, "{number}")?;
    }
    Ok(())
}
