//! Parameter structs shared by several tools.
//!
//! Every field is free text. Fields are resolved leniently: a missing field
//! or a value of the wrong JSON type becomes an empty string instead of a
//! protocol error, leaving validation to the warrior binaries.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a string field, mapping any non-string value to `""`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => value,
        _ => String::new(),
    })
}

/// Tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// A task identified by UUID (or ID).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RecordParams {
    /// UUID of the task.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub uuid: String,
}

/// A task plus one piece of free text, passed as a single argument.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RecordTextParams {
    /// UUID of the task.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub uuid: String,

    /// The text, kept as one argument even when it contains spaces.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub text: String,
}

/// A new task entry.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct EntryParams {
    /// Task description.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub description: String,

    /// Attributes like 'project:Home due:2pm +next'.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub metadata: String,
}

/// A filter expression selecting tasks.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct FilterParams {
    /// Filter expression (e.g. 'project:Work +PENDING').
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub filter: String,
}

/// A raw command line for pass-through tools.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RawParams {
    /// Full command arguments; the first word is the subcommand.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub command: String,
}

/// A Timewarrior interval range.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RangeParams {
    /// Time range like ':week' or ':day'.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub range: String,
}

/// Timewarrior tags.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TagsParams {
    /// Space-separated tags for the time entry.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub tags: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let params: RecordTextParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.uuid, "");
        assert_eq!(params.text, "");
    }

    #[test]
    fn test_wrong_types_default_to_empty() {
        let params: EntryParams =
            serde_json::from_value(json!({ "description": 42, "metadata": ["x"] })).unwrap();
        assert_eq!(params.description, "");
        assert_eq!(params.metadata, "");

        let params: RecordParams = serde_json::from_value(json!({ "uuid": null })).unwrap();
        assert_eq!(params.uuid, "");
    }

    #[test]
    fn test_strings_pass_through() {
        let params: RecordTextParams =
            serde_json::from_value(json!({ "uuid": "abc", "text": " two  words " })).unwrap();
        assert_eq!(params.uuid, "abc");
        assert_eq!(params.text, " two  words ");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let params: NoParams = serde_json::from_value(json!({ "extra": true })).unwrap();
        let _ = params;
    }
}
