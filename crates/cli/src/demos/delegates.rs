//! Combining handlers into one callable.
//!
//! The console handler writes to the report; the debug handler emits a
//! `debug` event, visible with `-v`.

use fnlab_core::functional::Multicast;
use fnlab_core::Result;
use std::cell::RefCell;
use std::io::Write;
use tracing::debug;

type Sink<'a> = RefCell<&'a mut dyn Write>;

pub fn run(out: &mut dyn Write) -> Result<()> {
    let out = RefCell::new(out);
    run_void_handlers(&out)?;
    run_response_handlers(&out)
}

fn run_void_handlers(out: &Sink<'_>) -> Result<()> {
    let console = Multicast::single(|message: &str| console_logger(out, message));
    let debug = Multicast::single(|message: &str| debug_logger(message));
    let all = console.clone() + debug.clone();

    console.try_invoke("This goes to the console")?;
    debug.try_invoke("This goes to the debug")?;

    // Every handler runs before any failure is reported
    let outcomes = all.invoke_all("this goes to all");
    debug!(handlers = outcomes.len(), "combined handlers invoked");
    outcomes.into_iter().collect()
}

fn run_response_handlers(out: &Sink<'_>) -> Result<()> {
    let console = Multicast::single(|message: &str| console_logger_with_response(out, message));
    let debug = Multicast::single(|message: &str| debug_logger_with_response(message));
    let all = console.clone() + debug.clone();

    let console_response = console.try_invoke("This goes to the console")?;
    let debug_response = debug.try_invoke("This goes to the debug")?;
    let last_response = all.try_invoke("this goes to all")?;

    let mut out = out.borrow_mut();
    for (name, response) in [
        ("Console", console_response),
        ("Debug", debug_response),
        ("Combined", last_response),
    ] {
        writeln!(out, "{name} response: {}", response.unwrap_or("none"))?;
    }
    Ok(())
}

fn console_logger(out: &Sink<'_>, message: &str) -> Result<()> {
    writeln!(out.borrow_mut(), "{message}")?;
    Ok(())
}

fn debug_logger(message: &str) -> Result<()> {
    debug!("{message}");
    Ok(())
}

fn console_logger_with_response(out: &Sink<'_>, message: &str) -> Result<&'static str> {
    console_logger(out, message)?;
    Ok("Logged to console")
}

fn debug_logger_with_response(message: &str) -> Result<&'static str> {
    debug_logger(message)?;
    Ok("Logged to debug")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::render;

    #[test]
    fn test_only_console_handlers_reach_the_report() {
        let expected = "\
This goes to the console
this goes to all
This goes to the console
this goes to all
Console response: Logged to console
Debug response: Logged to debug
Combined response: Logged to debug
";
        assert_eq!(render(run), expected);
    }

    #[test]
    fn test_combined_handlers_all_run_when_one_fails() {
        let mut report = Vec::new();
        let out: Sink<'_> = RefCell::new(&mut report);
        let failing = Multicast::single(|_: &str| -> Result<()> {
            Err(fnlab_core::Error::invalid_argument("message", "rejected"))
        });
        let all = failing + Multicast::single(|message: &str| console_logger(&out, message));

        let outcomes = all.invoke_all("still logged");
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_err());
        assert!(outcomes[1].is_ok());
        drop(all);
        assert_eq!(String::from_utf8(report).unwrap(), "still logged\n");
    }
}
