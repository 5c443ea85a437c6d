//! A wrapper over any value that reports its type alongside it

use std::any;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Generic<T> {
    value: T,
}

impl<T> Generic<T> {
    pub fn create(value: T) -> Self {
        Generic { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Fully qualified name of the wrapped type
    pub fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Display> Display for Generic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.value, self.type_name())
    }
}
