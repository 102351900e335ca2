//! The `Todo` entity and its status state machine
//!
//! `Todo` owns its business rules: status moves only through `complete` and
//! `uncomplete`, and title updates reject blank input. Every successful
//! mutation refreshes `updated_at`; a failed mutation leaves the entity
//! untouched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::TodoId;

/// Status of a todo.
///
/// Two states, both re-enterable. Transitions happen only through
/// `Todo::complete` and `Todo::uncomplete`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Open and actionable
    #[default]
    Pending,

    /// Finished; may be reopened
    Completed,
}

impl TodoStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Get status as a simple string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo item.
///
/// Fields are private; state changes only through the methods below, which
/// enforce the business rules and keep `updated_at` honest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    /// Unique identifier, immutable after construction
    id: TodoId,

    /// Display title, stored trimmed
    title: String,

    /// Free-form description, stored trimmed, may be empty
    description: String,

    /// Current status
    status: TodoStatus,

    /// When this todo was created
    created_at: DateTime<Utc>,

    /// Refreshed on every successful mutation
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new pending todo with both timestamps set to now.
    ///
    /// Title and description are stored trimmed but NOT validated: a
    /// blank-titled todo is representable and `complete` is the guard that
    /// later refuses it.
    pub fn new(id: TodoId, title: &str, description: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            status: TodoStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rehydrate a todo from previously stored fields.
    ///
    /// Every field is taken verbatim - no trimming, no validation. This is
    /// the path for storage adapters and test fixtures that need exact
    /// timestamps.
    pub fn from_parts(
        id: TodoId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TodoStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// True when `complete` would succeed: status pending and a non-blank
    /// title.
    pub fn can_be_completed(&self) -> bool {
        self.status.is_pending() && !self.title.trim().is_empty()
    }

    /// True when `uncomplete` would succeed: status completed.
    pub fn can_be_uncompleted(&self) -> bool {
        self.status.is_completed()
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Transition pending -> completed and refresh `updated_at`.
    ///
    /// Fails when the todo is already completed or its title is blank.
    pub fn complete(&mut self) -> DomainResult<()> {
        if !self.can_be_completed() {
            let reason = if self.status.is_completed() {
                "todo is already completed".to_string()
            } else {
                "cannot complete a todo with a blank title".to_string()
            };
            return Err(DomainError::RuleViolation(reason));
        }

        self.status = TodoStatus::Completed;
        self.touch();
        Ok(())
    }

    /// Transition completed -> pending and refresh `updated_at`.
    ///
    /// Strict counterpart of `complete`: fails unless the todo is currently
    /// completed.
    pub fn uncomplete(&mut self) -> DomainResult<()> {
        if !self.can_be_uncompleted() {
            return Err(DomainError::RuleViolation(format!(
                "todo is not completed (status {})",
                self.status
            )));
        }

        self.status = TodoStatus::Pending;
        self.touch();
        Ok(())
    }

    /// Replace the title with the trimmed input and refresh `updated_at`.
    ///
    /// Fails when the trimmed input is empty; on failure neither `title`
    /// nor `updated_at` changes.
    pub fn update_title(&mut self, new_title: &str) -> DomainResult<()> {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "title cannot be empty or whitespace-only".to_string(),
            ));
        }

        self.title = trimmed.to_string();
        self.touch();
        Ok(())
    }

    /// Replace the description with the trimmed input (empty allowed) and
    /// refresh `updated_at`. Never fails.
    pub fn update_description(&mut self, new_description: &str) {
        self.description = new_description.trim().to_string();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
