//! A person built through a smart constructor.
//!
//! [`Person::new`] checks every field before an instance exists, so any
//! `Person` in hand has a non-blank name and an age within
//! [`AGE_RANGE`](crate::constants::AGE_RANGE). Deserialization runs the same
//! checks.

use crate::constants::AGE_RANGE;
use crate::errors::{Error, Result, Validate};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

const NAME_MESSAGE: &str = "Name can't be null, empty or white spaces";
const AGE_MESSAGE: &str = "Age is not in valid range";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    name: String,
    age: u8,
}

/// Unvalidated wire shape of a [`Person`]
#[derive(Serialize, Deserialize)]
struct PersonRecord {
    name: String,
    age: i32,
}

impl Person {
    /// Create a new Person with validation
    pub fn new(name: impl Into<String>, age: i32) -> Result<Self> {
        let name = name.into();
        Validate::not_blank(&name, "name", NAME_MESSAGE)?;
        let age = Validate::in_range(age, &AGE_RANGE, "age", AGE_MESSAGE)?;
        let age = u8::try_from(age).map_err(|_| Error::out_of_range("age", AGE_MESSAGE))?;
        Ok(Person { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "My name is {} and I am {} years old",
            self.name, self.age
        )
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = Error;

    fn try_from(record: PersonRecord) -> Result<Self> {
        Person::new(record.name, record.age)
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        PersonRecord {
            name: person.name,
            age: i32::from(person.age),
        }
    }
}
