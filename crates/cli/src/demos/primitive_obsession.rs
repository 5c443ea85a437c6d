//! Email addresses as a validated type instead of bare strings

use fnlab_core::{Email, Result, ResultExt};
use std::io::Write;

pub fn run(out: &mut dyn Write) -> Result<()> {
    happy_path(out)?;
    invalid_email(out)?;
    empty_email(out)
}

fn happy_path(out: &mut dyn Write) -> Result<()> {
    let (Some(one), Some(two), Some(three)) = (
        Email::new("test1@test.com").or_report(out)?,
        Email::new("test2@test.com").or_report(out)?,
        Email::new("test1@test.com").or_report(out)?,
    ) else {
        return Ok(());
    };

    writeln!(out, "{one} == {two} ? {}", one == two)?;
    writeln!(out, "{one} == {three} ? {}", one == three)?;

    if let Some(parsed) = "test4@test.com".parse::<Email>().or_report(out)? {
        let raw: String = parsed.into();
        writeln!(out, "{raw} converts back to a plain String")?;
    }
    Ok(())
}

fn invalid_email(out: &mut dyn Write) -> Result<()> {
    Email::new("test1@test").or_report(out)?;
    Ok(())
}

fn empty_email(out: &mut dyn Write) -> Result<()> {
    Email::new("").or_report(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::render;

    #[test]
    fn test_output() {
        let expected = "\
test1@test.com == test2@test.com ? false
test1@test.com == test1@test.com ? true
test4@test.com converts back to a plain String
Invalid Email address format (Parameter 'email')
Email address cannot be empty (Parameter 'email')
";
        assert_eq!(render(run), expected);
    }
}
