//! Extension traits adding behaviour to types from the outside

use super::Person;
use crate::constants::DAYS_PER_YEAR;

/// Approximate number of days lived, counting 365 days per year
pub trait DaysLived {
    fn days_lived(&self) -> u32;
}

impl DaysLived for u8 {
    fn days_lived(&self) -> u32 {
        u32::from(*self) * DAYS_PER_YEAR
    }
}

impl DaysLived for Person {
    fn days_lived(&self) -> u32 {
        self.age().days_lived()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_lived_agree_for_person_and_age() {
        let person = Person::new("George", 30).unwrap();
        assert_eq!(person.days_lived(), 10_950);
        assert_eq!(person.age().days_lived(), person.days_lived());
    }

    #[test]
    fn test_days_lived_bounds() {
        assert_eq!(0_u8.days_lived(), 0);
        assert_eq!(120_u8.days_lived(), 43_800);
        assert_eq!(u8::MAX.days_lived(), 93_075);
    }
}
