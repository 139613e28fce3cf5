//! Handlers for `/api/issues/{project}`.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use issue_tracker_core::{models::IssueFilter, IssueStore};

use super::payload::Payload;
use super::response::Outcome;

/// Create an issue
pub async fn create_issue(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    payload: Payload,
) -> Response {
    match store.create(&project, payload.into_new_issue()) {
        Ok(issue) => Json(issue).into_response(),
        Err(e) => Outcome::failed(&e, None).into_response(),
    }
}

/// List issues, filtered by query string
pub async fn list_issues(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!("Ignoring malformed query string: {}", rejection);
            Vec::new()
        }
    };
    let filters: Vec<IssueFilter> = pairs
        .iter()
        .map(|(key, value)| IssueFilter::parse(key, value))
        .collect();

    Json(store.query(&project, &filters)).into_response()
}

/// Update fields of an issue
pub async fn update_issue(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    mut payload: Payload,
) -> Outcome {
    let id = payload.take_id();
    let patch = payload.into_patch();

    match store.update(&project, id.as_deref(), &patch) {
        Ok(updated) => Outcome::updated(updated.to_string()),
        Err(e) => Outcome::failed(&e, id),
    }
}

/// Delete an issue
pub async fn delete_issue(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    mut payload: Payload,
) -> Outcome {
    let id = payload.take_id();

    match store.delete(&project, id.as_deref()) {
        Ok(deleted) => Outcome::deleted(deleted.to_string()),
        Err(e) => Outcome::failed(&e, id),
    }
}
