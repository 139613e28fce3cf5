//! The in-memory issue store.
//!
//! Issues live in per-project collections keyed by the project name. A
//! project comes into existence with its first issue and is never removed.
//! Nothing is persisted: the store lives exactly as long as its last handle.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Action, Result, StoreError};
use crate::models::{Issue, IssueFilter, IssuePatch, NewIssue};

type Projects = HashMap<String, Vec<Issue>>;

/// Cheaply cloneable handle to a shared set of projects.
///
/// All mutations hold the write lock for their whole duration, so readers see
/// a record either before or after an update, never in between.
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    projects: Arc<RwLock<Projects>>,
}

impl IssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Projects> {
        self.projects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Projects> {
        self.projects.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, project: &str, input: NewIssue) -> Result<Issue> {
        let (Some(issue_title), Some(issue_text), Some(created_by)) = (
            required(input.issue_title),
            required(input.issue_text),
            required(input.created_by),
        ) else {
            debug!(project, "rejecting issue with missing required fields");
            return Err(StoreError::MissingRequiredFields);
        };

        let now = Utc::now();
        let issue = Issue {
            id: Uuid::new_v4(),
            issue_title,
            issue_text,
            created_by,
            assigned_to: input.assigned_to.unwrap_or_default(),
            status_text: input.status_text.unwrap_or_default(),
            created_on: now,
            updated_on: now,
            open: true,
        };

        self.write()
            .entry(project.to_string())
            .or_default()
            .push(issue.clone());
        info!(project, id = %issue.id, "created issue");

        Ok(issue)
    }

    /// Returns the issues of `project` matching every filter, in creation
    /// order. Unknown projects yield an empty list.
    pub fn query(&self, project: &str, filters: &[IssueFilter]) -> Vec<Issue> {
        let projects = self.read();
        let Some(issues) = projects.get(project) else {
            debug!(project, "query on unknown project");
            return Vec::new();
        };

        let matched: Vec<Issue> = issues
            .iter()
            .filter(|issue| filters.iter().all(|filter| filter.matches(issue)))
            .cloned()
            .collect();
        debug!(
            project,
            filters = filters.len(),
            matched = matched.len(),
            "queried issues"
        );
        matched
    }

    pub fn get(&self, project: &str, id: &str) -> Option<Issue> {
        self.read()
            .get(project)?
            .iter()
            .find(|issue| issue.id.to_string() == id)
            .cloned()
    }

    /// Applies `patch` to one issue and refreshes its `updated_on`. Returns
    /// the id of the updated issue.
    pub fn update(&self, project: &str, id: Option<&str>, patch: &IssuePatch) -> Result<Uuid> {
        let id = required_id(id)?;
        if patch.is_empty() {
            debug!(project, id, "update without fields");
            return Err(StoreError::NoUpdateFields);
        }

        let mut projects = self.write();
        let issue = projects
            .get_mut(project)
            .and_then(|issues| issues.iter_mut().find(|issue| issue.id.to_string() == id))
            .ok_or(StoreError::ProjectOrIssueNotFound {
                action: Action::Update,
            })?;

        if !patch.has_changes() {
            debug!(project, id, ignored = ?patch.ignored_keys(), "update names no updatable field");
            return Err(StoreError::NoUpdateFields);
        }

        patch.apply_to(issue);
        // Clock steps backwards must not break created_on <= updated_on.
        issue.updated_on = Utc::now().max(issue.updated_on);
        info!(project, id, open = issue.open, "updated issue");

        Ok(issue.id)
    }

    pub fn delete(&self, project: &str, id: Option<&str>) -> Result<Uuid> {
        let id = required_id(id)?;
        let not_found = StoreError::ProjectOrIssueNotFound {
            action: Action::Delete,
        };

        let mut projects = self.write();
        let issues = projects.get_mut(project).ok_or(not_found.clone())?;
        let index = issues
            .iter()
            .position(|issue| issue.id.to_string() == id)
            .ok_or(not_found)?;

        let removed = issues.remove(index);
        info!(project, id, "deleted issue");

        Ok(removed.id)
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn required_id(id: Option<&str>) -> Result<&str> {
    id.filter(|id| !id.is_empty()).ok_or(StoreError::MissingId)
}
