use axum::{
    response::{IntoResponse, Response},
    Json,
};
use issue_tracker_core::StoreError;
use serde::Serialize;

/// Body of every mutating response. Failures are reported in the body only;
/// the status code is always 200.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome {
    Success {
        result: &'static str,
        #[serde(rename = "_id")]
        id: String,
    },
    Failure {
        error: String,
        #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
}

impl Outcome {
    pub fn updated(id: impl Into<String>) -> Self {
        Self::Success {
            result: "successfully updated",
            id: id.into(),
        }
    }

    pub fn deleted(id: impl Into<String>) -> Self {
        Self::Success {
            result: "successfully deleted",
            id: id.into(),
        }
    }

    /// Builds the failure body for `err`, echoing `id` when the error kind
    /// carries it.
    pub fn failed(err: &StoreError, id: Option<String>) -> Self {
        Self::Failure {
            error: err.to_string(),
            id: id.filter(|_| err.echoes_id()),
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
