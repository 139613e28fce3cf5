use super::issue::{Issue, IssueField};

/// Parses the literal forms of the `open` flag used by query filters.
///
/// Only `"true"` and `"false"` are recognised; anything else is `None`.
pub fn parse_open_literal(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// A single query constraint. A query applies all of its filters as a
/// conjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueFilter {
    /// Exact match on the issue id.
    Id(String),
    /// `None` means the filter value was not a boolean literal and matches
    /// nothing.
    Open(Option<bool>),
    /// Case-insensitive exact match on a string-coerced field.
    Text { field: IssueField, value: String },
    /// A key that names no issue field. Matches nothing.
    Unknown { key: String, value: String },
}

impl IssueFilter {
    pub fn parse(key: &str, value: &str) -> Self {
        match IssueField::from_str(key) {
            Some(IssueField::Id) => Self::Id(value.to_string()),
            Some(IssueField::Open) => Self::Open(parse_open_literal(value)),
            Some(field) => Self::Text {
                field,
                value: value.to_string(),
            },
            None => Self::Unknown {
                key: key.to_string(),
                value: value.to_string(),
            },
        }
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            Self::Id(id) => issue.id.to_string() == *id,
            Self::Open(Some(open)) => issue.open == *open,
            Self::Open(None) => false,
            Self::Text { field, value } => {
                issue.field_text(*field).to_lowercase() == value.to_lowercase()
            }
            Self::Unknown { .. } => false,
        }
    }
}
