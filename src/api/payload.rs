use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use issue_tracker_core::models::{IssuePatch, NewIssue, PatchValue};
use serde_json::{Map, Value};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A request body read as loose key/value fields.
///
/// JSON objects and url-encoded forms are both accepted. A missing or
/// unreadable body becomes an empty payload so that validation, not
/// extraction, decides the response.
#[derive(Debug, Clone, Default)]
pub struct Payload(pub Map<String, Value>);

impl Payload {
    /// Removes `key` and returns it as text. `null` counts as absent.
    pub fn take_text(&mut self, key: &str) -> Option<String> {
        self.0
            .remove(key)
            .and_then(PatchValue::from_json)
            .map(PatchValue::into_text)
    }

    /// Removes and returns the `_id` field.
    pub fn take_id(&mut self) -> Option<String> {
        self.take_text("_id")
    }

    pub fn into_new_issue(mut self) -> NewIssue {
        NewIssue {
            issue_title: self.take_text("issue_title"),
            issue_text: self.take_text("issue_text"),
            created_by: self.take_text("created_by"),
            assigned_to: self.take_text("assigned_to"),
            status_text: self.take_text("status_text"),
        }
    }

    pub fn into_patch(self) -> IssuePatch {
        IssuePatch::from_pairs(
            self.0
                .into_iter()
                .filter_map(|(key, value)| PatchValue::from_json(value).map(|v| (key, v))),
        )
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            return match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(pairs)) => Ok(Self(
                    pairs
                        .into_iter()
                        .map(|(key, value)| (key, Value::String(value)))
                        .collect(),
                )),
                Err(rejection) => {
                    tracing::debug!("Ignoring unreadable form body: {}", rejection);
                    Ok(Self::default())
                }
            };
        }

        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                tracing::debug!("Ignoring unreadable body: {}", rejection);
                return Ok(Self::default());
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Map<String, Value>>(&bytes) {
            Ok(fields) => Ok(Self(fields)),
            Err(e) => {
                tracing::debug!("Ignoring malformed JSON body: {}", e);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(fields) => Payload(fields),
            _ => panic!("payload must be an object"),
        }
    }

    #[test]
    fn new_issue_takes_known_fields() {
        let input = payload(json!({
            "issue_title": "Title",
            "issue_text": "Text",
            "created_by": "me",
            "assigned_to": null,
            "extra": "ignored"
        }))
        .into_new_issue();

        assert_eq!(input.issue_title.as_deref(), Some("Title"));
        assert_eq!(input.created_by.as_deref(), Some("me"));
        assert_eq!(input.assigned_to, None);
        assert_eq!(input.status_text, None);
    }

    #[test]
    fn id_is_removed_before_building_patch() {
        let mut body = payload(json!({ "_id": "abc", "open": false }));
        assert_eq!(body.take_id().as_deref(), Some("abc"));

        let patch = body.into_patch();
        assert!(patch.has_changes());
        assert!(patch.ignored_keys().is_empty());
    }

    #[test]
    fn numeric_ids_are_read_as_text() {
        let mut body = payload(json!({ "_id": 17 }));
        assert_eq!(body.take_id().as_deref(), Some("17"));
    }

    #[test]
    fn null_fields_do_not_count_as_updates() {
        let patch = payload(json!({ "status_text": null })).into_patch();
        assert!(patch.is_empty());
    }
}
