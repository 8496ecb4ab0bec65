//! Prompt templates.
//!
//! Templates use a small placeholder syntax:
//! - `{{name}}` is replaced with the argument value, or nothing when unset
//! - `{{#if name}}...{{/if}}` keeps the block only when `name` is non-empty
//! - `{{#if name}}...{{else}}...{{/if}}` picks one of two blocks
//!
//! Conditionals do not nest.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE: &str = "{{else}}";
const END_IF: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template text.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let selected = select_blocks(&self.template, arguments)?;
        substitute(&selected, arguments)
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|value| !value.is_empty())
}

/// Resolve every conditional block, leaving plain placeholders in place.
fn select_blocks(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + IF_OPEN.len()..];

        let name_end = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template("unclosed {{#if}} tag"))?;
        let name = after_open[..name_end].trim();
        let body_and_rest = &after_open[name_end + 2..];

        let body_end = body_and_rest
            .find(END_IF)
            .ok_or_else(|| PromptError::template(format!("missing {{{{/if}}}} for '{}'", name)))?;
        let body = &body_and_rest[..body_end];

        let (then_block, else_block) = body.split_once(ELSE).unwrap_or((body, ""));
        output.push_str(if is_set(arguments, name) {
            then_block
        } else {
            else_block
        });

        rest = &body_and_rest[body_end + END_IF.len()..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Replace `{{name}}` placeholders; unknown names render as nothing.
fn substitute(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let end = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template("unclosed placeholder"))?;
        let name = after_open[..end].trim();
        if let Some(value) = arguments.get(name) {
            output.push_str(value);
        }

        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    Ok(output)
}
