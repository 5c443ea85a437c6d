//! Insertion-ordered registry of labelled demonstrations.
//!
//! Running the registry prints, for every entry in insertion order, a
//! separator framed by the label followed by the entry's output.

use fnlab_core::constants::separators::DASHES;
use fnlab_core::Result;
use indexmap::IndexMap;
use std::fmt;
use std::io::Write;
use tracing::{debug, info_span};

/// A demonstration writing its output to the given sink
pub type Procedure = Box<dyn Fn(&mut dyn Write) -> Result<()>>;

pub enum Entry {
    /// Precomputed results, printed one per line
    Values(Vec<i32>),
    /// A procedure run when the registry runs
    Procedure(Procedure),
}

impl Entry {
    pub fn procedure<F>(procedure: F) -> Self
    where
        F: Fn(&mut dyn Write) -> Result<()> + 'static,
    {
        Entry::Procedure(Box::new(procedure))
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            Entry::Values(values) => {
                for value in values {
                    writeln!(out, "{value}")?;
                }
                Ok(())
            }
            Entry::Procedure(procedure) => procedure(out),
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Values(values) => f.debug_tuple("Values").field(values).finish(),
            Entry::Procedure(_) => f.write_str("Procedure"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("unknown demo label(s): {}", .0.join(", "))]
    UnknownLabels(Vec<String>),
}

/// Separator line framing a label
pub fn separator(label: &str) -> String {
    format!("{DASHES} {label} {DASHES}")
}

#[derive(Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry; an existing label keeps its position and gets the new entry
    pub fn insert(&mut self, label: impl Into<String>, entry: Entry) -> &mut Self {
        self.entries.insert(label.into(), entry);
        self
    }

    pub fn values(
        &mut self,
        label: impl Into<String>,
        values: impl IntoIterator<Item = i32>,
    ) -> &mut Self {
        self.insert(label, Entry::Values(values.into_iter().collect()))
    }

    pub fn procedure<F>(&mut self, label: impl Into<String>, procedure: F) -> &mut Self
    where
        F: Fn(&mut dyn Write) -> Result<()> + 'static,
    {
        self.insert(label, Entry::procedure(procedure))
    }

    pub fn get(&self, label: &str) -> Option<&Entry> {
        self.entries.get(label)
    }

    /// Labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the entries whose label matches one of `labels`, ignoring
    /// ASCII case. Registry order is preserved.
    pub fn select<S: AsRef<str>>(mut self, labels: &[S]) -> std::result::Result<Self, SelectError> {
        let unknown: Vec<String> = labels
            .iter()
            .map(AsRef::as_ref)
            .filter(|wanted| {
                !self.labels().any(|label| label.eq_ignore_ascii_case(wanted))
            })
            .map(str::to_string)
            .collect();
        if !unknown.is_empty() {
            return Err(SelectError::UnknownLabels(unknown));
        }

        self.entries.retain(|label, _| {
            labels
                .iter()
                .any(|wanted| label.eq_ignore_ascii_case(wanted.as_ref()))
        });
        Ok(self)
    }

    /// Run every entry in insertion order
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        for (label, entry) in &self.entries {
            let _span = info_span!("demo", %label).entered();
            debug!("running demo");

            writeln!(out, "{}", separator(label))?;
            entry.run(out)?;
        }
        out.flush()?;
        Ok(())
    }
}
