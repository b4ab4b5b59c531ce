//! Identifier types for the board domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{NoContext, Timestamp, Uuid};

/// Unique identifier for a task on the board.
///
/// Identifiers are UUID v7 values: the leading bits carry the creation
/// timestamp and the remainder is random, so tasks created within the same
/// millisecond still receive distinct identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a task identifier for a task created at `created_at`.
    ///
    /// Timestamps before the Unix epoch are encoded as the epoch itself; the
    /// random component keeps such identifiers unique.
    #[must_use]
    pub fn for_creation_at(created_at: DateTime<Utc>) -> Self {
        let seconds = u64::try_from(created_at.timestamp()).unwrap_or_default();
        let timestamp =
            Timestamp::from_unix(NoContext, seconds, created_at.timestamp_subsec_nanos());
        Self(Uuid::new_v7(timestamp))
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a task identifier from its hyphenated string form.
    ///
    /// Returns `None` when `raw` is not a UUID.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
