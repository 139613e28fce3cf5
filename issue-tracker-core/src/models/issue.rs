use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub open: bool,
}

impl Issue {
    /// The value of `field` coerced to its string form.
    pub fn field_text(&self, field: IssueField) -> String {
        match field {
            IssueField::Id => self.id.to_string(),
            IssueField::IssueTitle => self.issue_title.clone(),
            IssueField::IssueText => self.issue_text.clone(),
            IssueField::CreatedBy => self.created_by.clone(),
            IssueField::AssignedTo => self.assigned_to.clone(),
            IssueField::StatusText => self.status_text.clone(),
            IssueField::CreatedOn => wire_timestamp(&self.created_on),
            IssueField::UpdatedOn => wire_timestamp(&self.updated_on),
            IssueField::Open => self.open.to_string(),
        }
    }
}

fn wire_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    #[serde(rename = "_id")]
    Id,
    IssueTitle,
    IssueText,
    CreatedBy,
    AssignedTo,
    StatusText,
    CreatedOn,
    UpdatedOn,
    Open,
}

impl IssueField {
    pub const UPDATABLE: [IssueField; 6] = [
        Self::IssueTitle,
        Self::IssueText,
        Self::CreatedBy,
        Self::AssignedTo,
        Self::StatusText,
        Self::Open,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "_id",
            Self::IssueTitle => "issue_title",
            Self::IssueText => "issue_text",
            Self::CreatedBy => "created_by",
            Self::AssignedTo => "assigned_to",
            Self::StatusText => "status_text",
            Self::CreatedOn => "created_on",
            Self::UpdatedOn => "updated_on",
            Self::Open => "open",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "_id" => Some(Self::Id),
            "issue_title" => Some(Self::IssueTitle),
            "issue_text" => Some(Self::IssueText),
            "created_by" => Some(Self::CreatedBy),
            "assigned_to" => Some(Self::AssignedTo),
            "status_text" => Some(Self::StatusText),
            "created_on" => Some(Self::CreatedOn),
            "updated_on" => Some(Self::UpdatedOn),
            "open" => Some(Self::Open),
            _ => None,
        }
    }

    /// Whether an update request may change this field.
    pub fn is_updatable(&self) -> bool {
        Self::UPDATABLE.contains(self)
    }
}

/// Input for creating an issue.
///
/// Required fields are optional here so that a request missing them can be
/// rejected by the store rather than by deserialization. An empty string
/// counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIssue {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

impl NewIssue {
    pub fn new(
        issue_title: impl Into<String>,
        issue_text: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            issue_title: Some(issue_title.into()),
            issue_text: Some(issue_text.into()),
            created_by: Some(created_by.into()),
            ..Default::default()
        }
    }

    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn status_text(mut self, status: impl Into<String>) -> Self {
        self.status_text = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Issue {
        let now = Utc::now();
        Issue {
            id: Uuid::new_v4(),
            issue_title: "Bug in login".into(),
            issue_text: "Button does nothing".into(),
            created_by: "John Doe".into(),
            assigned_to: String::new(),
            status_text: String::new(),
            created_on: now,
            updated_on: now,
            open: true,
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in [
            IssueField::Id,
            IssueField::IssueTitle,
            IssueField::CreatedOn,
            IssueField::UpdatedOn,
            IssueField::Open,
        ] {
            assert_eq!(IssueField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(IssueField::from_str("id"), None);
    }

    #[test]
    fn only_user_fields_are_updatable() {
        assert!(IssueField::StatusText.is_updatable());
        assert!(IssueField::Open.is_updatable());
        assert!(!IssueField::Id.is_updatable());
        assert!(!IssueField::CreatedOn.is_updatable());
        assert!(!IssueField::UpdatedOn.is_updatable());
    }

    #[test]
    fn serializes_id_as_underscore_id() {
        let issue = sample();
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["_id"], issue.id.to_string());
        assert!(json.get("id").is_none());
        assert_eq!(json["open"], true);
    }

    #[test]
    fn field_text_matches_wire_form() {
        let issue = sample();
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(issue.field_text(IssueField::Open), "true");
        assert_eq!(
            issue.field_text(IssueField::CreatedOn),
            json["created_on"].as_str().unwrap()
        );
    }
}
