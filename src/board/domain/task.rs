//! Task records displayed on the board.

use super::{BoardDomainError, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Well-formed task content produced by the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: String,
}

impl NewTask {
    /// Creates task content with the given title and an empty description.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: String::new(),
        })
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A task placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from validated content, stamping it with the clock's
    /// current time and a fresh identifier derived from that time.
    #[must_use]
    pub fn create(content: NewTask, clock: &impl Clock) -> Self {
        let created_at = clock.utc();
        Self::from_parts(TaskId::for_creation_at(created_at), content, created_at)
    }

    /// Assembles a task from an existing identifier and creation timestamp.
    #[must_use]
    pub fn from_parts(id: TaskId, content: NewTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: content.title,
            description: content.description,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the calendar day the task was created on (UTC).
    #[must_use]
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
