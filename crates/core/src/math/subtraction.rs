//! Subtraction, curried on the subtrahend: `minus(x)(y) == y - x`

use super::Unary;
use crate::constants::numbers::{ONE, THREE, TWO};
use crate::functional::curry;

fn curried() -> impl Fn(i32) -> Unary {
    curry(|subtrahend: i32, minuend: i32| minuend.wrapping_sub(subtrahend))
}

/// `minuend - subtrahend`
pub fn subtract(subtrahend: i32, minuend: i32) -> i32 {
    curried()(subtrahend)(minuend)
}

pub fn minus(subtrahend: i32) -> Unary {
    curried()(subtrahend)
}

pub fn minus_one(minuend: i32) -> i32 {
    minus(ONE)(minuend)
}

pub fn minus_two(minuend: i32) -> i32 {
    minus(TWO)(minuend)
}

pub fn minus_three(minuend: i32) -> i32 {
    minus(THREE)(minuend)
}
