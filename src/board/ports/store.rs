//! Store port holding the single current board.

use crate::board::domain::Board;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Monotonic counter identifying which board a snapshot was taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(u64);

impl Revision {
    /// Revision of a freshly created, empty board.
    pub const INITIAL: Self = Self(0);

    /// Creates a revision from a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the revision that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Immutable view of the current board and the revision it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    board: Board,
    revision: Revision,
}

impl BoardSnapshot {
    /// Pairs a board with its revision.
    #[must_use]
    pub const fn new(board: Board, revision: Revision) -> Self {
        Self { board, revision }
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the revision the board was read at.
    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    /// Consumes the snapshot, returning the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Single-writer cell holding the authoritative board.
///
/// Implementations must make [`BoardStore::replace`] atomic: a reader either
/// sees the board before the replace or the board after it, never a mix.
#[cfg_attr(test, mockall::automock)]
pub trait BoardStore: Send + Sync {
    /// Returns the current board together with its revision.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store cannot be read.
    fn snapshot(&self) -> BoardStoreResult<BoardSnapshot>;

    /// Installs `next` as the current board if the store is still at
    /// `expected`, returning the new revision.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::RevisionConflict`] when another transition
    /// was installed after `expected` was read; the store is left unchanged.
    fn replace(&self, expected: Revision, next: Board) -> BoardStoreResult<Revision>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// The board changed between reading it and replacing it.
    #[error("board revision conflict: expected {expected}, found {actual}")]
    RevisionConflict {
        /// Revision the caller computed its transition against.
        expected: Revision,
        /// Revision currently held by the store.
        actual: Revision,
    },

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
