//! An email address newtype, the cure for passing addresses around as bare
//! strings.

use crate::constants::EMAIL_PATTERN;
use crate::errors::{Error, Result, Validate};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("email pattern is a valid regex")
});

/// A validated email address, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new Email with validation
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        Validate::not_blank(&value, "email", "Email address cannot be empty")?;
        Validate::matches(&value, &EMAIL_REGEX, "email", "Invalid Email address format")?;
        Ok(Email(value))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for Email {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Email {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
