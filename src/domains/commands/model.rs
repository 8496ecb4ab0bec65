//! The command model shared by both warrior families.
//!
//! Taskwarrior and Timewarrior have positional grammars: configuration
//! overrides come first, then filters, then the subcommand, then its
//! arguments. [`WarriorCommand`] keeps those groups apart until the final
//! argument vector is assembled so the order cannot be mixed up by a handler.

/// Split a caller-supplied string into whitespace-separated terms.
///
/// Splitting is purely whitespace based: quotes are not interpreted, so
/// `description:'new text'` becomes two terms.
pub fn split_terms(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// A single invocation of a warrior command line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarriorCommand {
    /// Fixed configuration overrides (e.g. `rc.confirmation=off`).
    pub overrides: Vec<String>,

    /// Selector terms identifying the records to act on.
    pub filters: Vec<String>,

    /// The subcommand keyword. Empty means "omit".
    pub operation: String,

    /// Payload terms for the subcommand.
    pub modifications: Vec<String>,
}

impl WarriorCommand {
    /// Create a command with the given overrides and operation.
    pub fn new(overrides: Vec<String>, operation: impl Into<String>) -> Self {
        Self {
            overrides,
            operation: operation.into(),
            ..Default::default()
        }
    }

    /// Create a raw pass-through command.
    ///
    /// The first term of `command_line` becomes the operation and the rest
    /// become modifications. An empty line leaves only the overrides, which
    /// the external tool is expected to reject on its own.
    pub fn raw(overrides: Vec<String>, command_line: &str) -> Self {
        let mut terms = split_terms(command_line).into_iter();
        let operation = terms.next().unwrap_or_default();

        Self {
            overrides,
            filters: Vec::new(),
            operation,
            modifications: terms.collect(),
        }
    }

    /// Append a single filter term, kept verbatim (even when empty).
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Append several filter terms.
    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filters.extend(filters);
        self
    }

    /// Append a single modification term, kept verbatim as one argument.
    pub fn with_modification(mut self, modification: impl Into<String>) -> Self {
        self.modifications.push(modification.into());
        self
    }

    /// Append several modification terms.
    pub fn with_modifications<I>(mut self, modifications: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.modifications.extend(modifications);
        self
    }

    /// Assemble the final argument vector:
    /// overrides, filters, operation, modifications.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(
            self.overrides.len() + self.filters.len() + 1 + self.modifications.len(),
        );
        args.extend(self.overrides.iter().cloned());
        args.extend(self.filters.iter().cloned());
        if !self.operation.is_empty() {
            args.push(self.operation.clone());
        }
        args.extend(self.modifications.iter().cloned());
        args
    }
}
