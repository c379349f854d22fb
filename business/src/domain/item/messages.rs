use std::collections::HashMap;

use super::validation::{ErrorTarget, ValidationError};

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("required.item.itemName", "Item name is required."),
    ("range.item.price", "Price must be between {0} and {1}."),
    ("max.item.quantity", "Quantity must not exceed {0}."),
    (
        "totalPriceMin",
        "Price * quantity must be at least {0}. Current value = {1}",
    ),
    ("required", "This field is required."),
    ("range", "Value must be between {0} and {1}."),
    ("max", "Value must not exceed {0}."),
    ("typeMismatch.item.price", "Price must be a number."),
    ("typeMismatch.item.quantity", "Quantity must be a number."),
    ("typeMismatch", "{0} must be a number."),
];

/// Message codes tried for an error, most specific first.
///
/// Field errors resolve to `code.object.field`, `code.field`, `code`.
/// Object errors resolve to `code.object`, `code`.
pub fn resolve_message_codes(error: &ValidationError) -> Vec<String> {
    match &error.target {
        ErrorTarget::Field(field) => vec![
            format!("{}.{}.{}", error.code, error.object_name, field),
            format!("{}.{}", error.code, field),
            error.code.clone(),
        ],
        ErrorTarget::Object => vec![
            format!("{}.{}", error.code, error.object_name),
            error.code.clone(),
        ],
    }
}

/// Message catalog keyed by message code.
#[derive(Debug, Clone)]
pub struct MessageSource {
    messages: HashMap<String, String>,
}

impl Default for MessageSource {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(code, template)| (code.to_string(), template.to_string()))
                .collect(),
        }
    }
}

impl MessageSource {
    /// Parses `key=value` lines. Blank lines and lines starting with `#` or
    /// `!` are skipped, as are lines without a `=`.
    pub fn from_properties(content: &str) -> Self {
        let messages = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { messages }
    }

    /// Overlays `other` on top of this catalog.
    pub fn merge(mut self, other: MessageSource) -> Self {
        self.messages.extend(other.messages);
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Renders the message for an error, falling back to its bare code.
    pub fn message_for(&self, error: &ValidationError) -> String {
        resolve_message_codes(error)
            .iter()
            .find_map(|code| self.messages.get(code))
            .map(|template| interpolate(template, error))
            .unwrap_or_else(|| error.code.clone())
    }
}

fn interpolate(template: &str, error: &ValidationError) -> String {
    error
        .arguments
        .iter()
        .enumerate()
        .fold(template.to_string(), |message, (index, argument)| {
            message.replace(&format!("{{{}}}", index), &argument.to_string())
        })
}
