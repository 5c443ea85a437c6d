//! One wrapper type over many value types

use chrono::NaiveDate;
use fnlab_core::{Generic, Person, Result};
use std::io::Write;
use tracing::debug;

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut samples = vec![
        Generic::create(42).to_string(),
        Generic::create(42_i64).to_string(),
        Generic::create(42.5_f32).to_string(),
        Generic::create(42_f64).to_string(),
        Generic::create(false).to_string(),
    ];
    let date = NaiveDate::from_ymd_opt(2019, 3, 14);
    samples.extend(date.map(|date| Generic::create(date).to_string()));
    samples.extend([
        Generic::create(0x42_u8).to_string(),
        Generic::create('A').to_string(),
        Generic::create("George").to_string(),
        Generic::create(7.5_f32 + 35_i64 as f32).to_string(),
    ]);

    for sample in samples {
        writeln!(out, "{sample}")?;
    }

    let doubler = Generic::create(|x: i32| x + x);
    writeln!(
        out,
        "{} applied to 21 gives {}",
        doubler.type_name(),
        (doubler.value())(21)
    )?;

    // Returns nothing; its only effect is the debug event
    let announcer = Generic::create(|x: i32, y: i32| debug!(x, y, "announced"));
    (announcer.value())(4, 2);
    writeln!(out, "{} called with 4 and 2", announcer.type_name())?;

    let person = Generic::create(Person::new("George", 30)?);
    writeln!(out, "{person}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::render;

    #[test]
    fn test_output() {
        let output = render(run);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "42 - i32");
        assert_eq!(lines[3], "42 - f64");
        assert!(lines[5].starts_with("2019-03-14 - chrono::"));
        assert_eq!(lines[6], "66 - u8");
        assert_eq!(lines[8], "George - &str");
        assert_eq!(lines[9], "42.5 - f32");
        assert!(lines[10].contains("{{closure}} applied to 21 gives 42"));
    }

    #[test]
    fn test_two_argument_closure_and_struct_samples() {
        let output = render(run);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[11].contains("{{closure}} called with 4 and 2"), "{}", lines[11]);
        assert_eq!(
            lines[12],
            "My name is George and I am 30 years old - fnlab_core::types::person::Person"
        );
    }
}
