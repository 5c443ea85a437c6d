//! Shared constants for the arithmetic wrappers, the validated types and the
//! report layout.

use std::ops::RangeInclusive;

/// Operands of the convenience wrappers and the sample report
pub mod numbers {
    pub const ONE: i32 = 1;
    pub const TWO: i32 = 2;
    pub const THREE: i32 = 3;
    pub const FIVE: i32 = 5;
}

/// Report separators
pub mod separators {
    /// Forty dashes, printed on each side of a registry label
    pub const DASHES: &str = "----------------------------------------";
}

/// Accepted ages for [`crate::Person`], inclusive on both ends.
pub const AGE_RANGE: RangeInclusive<i32> = 0..=120;

/// Days per year used by [`crate::DaysLived`]
pub const DAYS_PER_YEAR: u32 = 365;

/// Email address pattern, matched case-insensitively
pub const EMAIL_PATTERN: &str = r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$";
