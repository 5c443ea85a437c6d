//! Addition, curried on the augend

use super::Unary;
use crate::constants::numbers::{ONE, THREE, TWO};
use crate::functional::curry;

fn curried() -> impl Fn(i32) -> Unary {
    curry(|augend: i32, addend: i32| augend.wrapping_add(addend))
}

pub fn add(augend: i32, addend: i32) -> i32 {
    curried()(augend)(addend)
}

pub fn plus(augend: i32) -> Unary {
    curried()(augend)
}

pub fn plus_one(addend: i32) -> i32 {
    plus(ONE)(addend)
}

pub fn plus_two(addend: i32) -> i32 {
    plus(TWO)(addend)
}

pub fn plus_three(addend: i32) -> i32 {
    plus(THREE)(addend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_wrappers() {
        assert_eq!(plus_one(5), 6);
        assert_eq!(plus_two(5), 7);
        assert_eq!(plus_three(5), 8);
        assert_eq!(plus_one(-1), 0);
    }

    #[test]
    fn test_add_wraps_on_overflow() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(plus(i32::MIN)(-1), i32::MAX);
    }
}
