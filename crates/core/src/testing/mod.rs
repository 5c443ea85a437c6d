//! Property-based tests for the curried arithmetic and the smart constructors

use crate::constants::AGE_RANGE;
use crate::errors::Error;
use crate::functional::{forward_compose, uncurry, Pipe};
use crate::math::{self, Binary, Operation};
use crate::types::{Email, Person};
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::string::string_regex;

    /// Any operation
    pub fn operation() -> impl Strategy<Value = Operation> {
        prop::sample::select(Operation::ALL.to_vec())
    }

    /// Names with at least one visible character
    pub fn valid_name() -> impl Strategy<Value = String> {
        string_regex("[A-Za-z][A-Za-z .'-]{0,31}").unwrap()
    }

    /// Names made only of whitespace, or nothing at all
    pub fn blank_name() -> impl Strategy<Value = String> {
        string_regex("[ \t\n]{0,8}").unwrap()
    }

    /// Ages outside the accepted range
    pub fn invalid_age() -> impl Strategy<Value = i32> {
        prop_oneof![i32::MIN..*AGE_RANGE.start(), (*AGE_RANGE.end() + 1)..=i32::MAX]
    }

    /// Addresses the email pattern accepts
    pub fn valid_email() -> impl Strategy<Value = String> {
        string_regex("[a-z0-9]{1,10}(\\.[a-z0-9]{1,5})?@[a-z0-9]{1,10}\\.[a-z]{2,4}").unwrap()
    }
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use proptest::proptest;

    /// Binary forms of the total operations
    const TOTAL: [(Binary, fn(i32) -> crate::math::Unary); 3] = [
        (math::add, math::plus),
        (math::subtract, math::minus),
        (math::multiply, math::multiply_by),
    ];

    proptest! {
        /// Test that currying the addition agrees with wrapping addition
        #[test]
        fn curried_add_matches_addition(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(math::plus(a)(b), a.wrapping_add(b));
        }

        /// Test that the subtrahend is the fixed operand
        #[test]
        fn curried_subtract_matches_subtraction(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(math::minus(a)(b), b.wrapping_sub(a));
        }

        #[test]
        fn curried_multiply_matches_multiplication(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(math::multiply_by(a)(b), a.wrapping_mul(b));
        }

        /// Test that the divisor is the fixed operand
        #[test]
        fn curried_divide_matches_division(
            a in any::<i32>().prop_filter("non-zero divisor", |a| *a != 0),
            b in any::<i32>(),
        ) {
            let divider = math::divided_by(a).unwrap();
            prop_assert_eq!(divider(b), b.wrapping_div(a));
            prop_assert_eq!(math::divide(a, b).unwrap(), divider(b));
        }

        /// Test that every curried form agrees with its binary form
        #[test]
        fn curried_form_agrees_with_binary_form(a in any::<i32>(), b in any::<i32>()) {
            for (binary, curried) in TOTAL {
                prop_assert_eq!(curried(a)(b), binary(a, b));
            }
        }

        /// Test that uncurrying gives back the binary form
        #[test]
        fn uncurry_restores_binary_form(
            operation in operation(),
            a in 1i32..1000,
            b in any::<i32>(),
        ) {
            let binary = uncurry(|fixed: i32| operation.by(fixed).unwrap());
            prop_assert_eq!(binary(a, b), operation.apply(a, b).unwrap());
        }

        /// Test that a zero divisor always fails
        #[test]
        fn zero_divisor_always_fails(b in any::<i32>()) {
            let is_divide_by_zero = matches!(math::divide(0, b), Err(Error::DivideByZero { .. }));
            prop_assert!(is_divide_by_zero);
            prop_assert!(math::divided_by(0).is_err());
        }

        /// Test that composing curried operations equals applying them in sequence
        #[test]
        fn curried_operations_compose(x in -10_000i32..10_000) {
            let composed = forward_compose(math::plus(3), math::multiply_by(2));
            let piped = Pipe::new(x).pipe(math::plus(3)).pipe(math::multiply_by(2)).into_inner();
            prop_assert_eq!(composed(x), (x + 3) * 2);
            prop_assert_eq!(piped, composed(x));
        }

        /// Test that valid people always construct and display both fields
        #[test]
        fn valid_people_always_succeed(name in valid_name(), age in AGE_RANGE) {
            let person = Person::new(name.clone(), age).unwrap();
            let rendered = person.to_string();
            prop_assert!(rendered.contains(&name));
            prop_assert!(rendered.contains(&age.to_string()));
        }

        /// Test that blank names always fail as invalid arguments
        #[test]
        fn blank_names_always_fail(name in blank_name(), age in AGE_RANGE) {
            let result = Person::new(name, age);
            let is_invalid_argument = matches!(result, Err(Error::InvalidArgument { .. }));
            prop_assert!(is_invalid_argument);
        }

        /// Test that ages outside the range always fail as out of range
        #[test]
        fn invalid_ages_always_fail(name in valid_name(), age in invalid_age()) {
            let is_out_of_range = matches!(Person::new(name, age), Err(Error::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
        }

        /// Test that email validation is consistent and equality follows the text
        #[test]
        fn valid_emails_compare_by_value(address in valid_email()) {
            let first = Email::new(address.clone()).unwrap();
            let second = Email::new(address.clone()).unwrap();
            prop_assert_eq!(first.as_str(), address.as_str());
            prop_assert_eq!(first, second);
        }
    }
}
