//! Validation before construction: an invalid `Person` never exists

use fnlab_core::{Person, Result, ResultExt};
use std::io::Write;

pub fn run(out: &mut dyn Write) -> Result<()> {
    happy_path(out)?;
    invalid_name(out)?;
    invalid_age(out)
}

fn happy_path(out: &mut dyn Write) -> Result<()> {
    if let Some(person) = Person::new("George", 30).or_report(out)? {
        writeln!(
            out,
            "Valid person data so all goes well and we can print: {person}"
        )?;
    }
    Ok(())
}

fn invalid_name(out: &mut dyn Write) -> Result<()> {
    Person::new("", 30).or_report(out)?;
    Ok(())
}

fn invalid_age(out: &mut dyn Write) -> Result<()> {
    Person::new("George", -1).or_report(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::render;

    #[test]
    fn test_errors_are_printed_not_propagated() {
        let expected = "\
Valid person data so all goes well and we can print: My name is George and I am 30 years old
Name can't be null, empty or white spaces (Parameter 'name')
Age is not in valid range (Parameter 'age')
";
        assert_eq!(render(run), expected);
    }
}
