//! Behaviour added to `Person` and to a bare age through a trait

use fnlab_core::{DaysLived, Person, Result, ResultExt};
use std::io::Write;

pub fn run(out: &mut dyn Write) -> Result<()> {
    if let Some(person) = Person::new("George", 30).or_report(out)? {
        writeln!(out, "{person}")?;
        writeln!(out, "Days lived from person object {}", person.days_lived())?;
        writeln!(
            out,
            "Days lived from Age property {}",
            person.age().days_lived()
        )?;
    }
    Ok(())
}
