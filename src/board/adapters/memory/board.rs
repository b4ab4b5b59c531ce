//! In-memory board store.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::Board,
    ports::{BoardSnapshot, BoardStore, BoardStoreError, BoardStoreResult, Revision},
};

/// Thread-safe in-memory board store.
///
/// Cloning the store shares the underlying cell.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    board: Board,
    revision: Revision,
}

impl InMemoryBoardStore {
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `board` at the initial revision.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState {
                board,
                revision: Revision::INITIAL,
            })),
        }
    }
}

impl BoardStore for InMemoryBoardStore {
    fn snapshot(&self) -> BoardStoreResult<BoardSnapshot> {
        let state = self.state.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(BoardSnapshot::new(state.board.clone(), state.revision))
    }

    fn replace(&self, expected: Revision, next: Board) -> BoardStoreResult<Revision> {
        let mut state = self.state.write().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.revision != expected {
            return Err(BoardStoreError::RevisionConflict {
                expected,
                actual: state.revision,
            });
        }
        state.board = next;
        state.revision = expected.next();
        Ok(state.revision)
    }
}
