use serde_json::Value;

use super::issue::{Issue, IssueField};

/// A field value as supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    Text(String),
    Bool(bool),
}

impl PatchValue {
    /// Converts a JSON value. `null` is treated as absent; non-string scalars
    /// and compound values keep their JSON text.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::String(s) => Some(Self::Text(s)),
            other => Some(Self::Text(other.to_string())),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Bool(b) => b.to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

/// Coerces an `open` update value: boolean `true` or the text `"true"` opens
/// the issue, anything else closes it.
pub fn coerce_open(value: &PatchValue) -> bool {
    match value {
        PatchValue::Bool(b) => *b,
        PatchValue::Text(s) => s == "true",
    }
}

/// The effective changes of an update request.
///
/// Empty-string values are dropped as "no change requested". Keys outside the
/// updatable set are counted but never applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuePatch {
    changes: Vec<(IssueField, PatchValue)>,
    ignored: Vec<String>,
}

impl IssuePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, PatchValue)>,
        K: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |patch, (key, value)| patch.with(key, value))
    }

    pub fn with(mut self, key: impl Into<String>, value: PatchValue) -> Self {
        if value.is_blank() {
            return self;
        }
        let key = key.into();
        match IssueField::from_str(&key).filter(IssueField::is_updatable) {
            Some(field) => {
                self.changes.retain(|(existing, _)| *existing != field);
                self.changes.push((field, value));
            }
            None => self.ignored.push(key),
        }
        self
    }

    /// True when the request named no non-empty field at all.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.ignored.is_empty()
    }

    /// True when at least one change will be applied.
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    pub(crate) fn apply_to(&self, issue: &mut Issue) {
        for (field, value) in &self.changes {
            match field {
                IssueField::Open => issue.open = coerce_open(value),
                IssueField::IssueTitle => issue.issue_title = value.clone().into_text(),
                IssueField::IssueText => issue.issue_text = value.clone().into_text(),
                IssueField::CreatedBy => issue.created_by = value.clone().into_text(),
                IssueField::AssignedTo => issue.assigned_to = value.clone().into_text(),
                IssueField::StatusText => issue.status_text = value.clone().into_text(),
                IssueField::Id | IssueField::CreatedOn | IssueField::UpdatedOn => {}
            }
        }
    }
}
