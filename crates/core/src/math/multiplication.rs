//! Multiplication, curried on the multiplicand

use super::Unary;
use crate::constants::numbers::{ONE, THREE, TWO};
use crate::functional::curry;

fn curried() -> impl Fn(i32) -> Unary {
    curry(|multiplicand: i32, multiplier: i32| multiplicand.wrapping_mul(multiplier))
}

pub fn multiply(multiplicand: i32, multiplier: i32) -> i32 {
    curried()(multiplicand)(multiplier)
}

pub fn multiply_by(multiplicand: i32) -> Unary {
    curried()(multiplicand)
}

pub fn single(multiplier: i32) -> i32 {
    multiply_by(ONE)(multiplier)
}

pub fn double(multiplier: i32) -> i32 {
    multiply_by(TWO)(multiplier)
}

pub fn triple(multiplier: i32) -> i32 {
    multiply_by(THREE)(multiplier)
}
