//! Domain model for the weekly task board.
//!
//! The board domain models tasks, the three fixed stages, the board
//! aggregate, canonical drag gestures, and the reorder engine while keeping
//! storage and gesture-library concerns outside the domain boundary.

mod board;
mod error;
mod gesture;
mod ids;
mod reorder;
mod stage;
mod task;

pub use board::{Board, StageCounts, TaskLocation};
pub use error::{BoardDomainError, ParseStageError, Staleness};
pub use gesture::{DragGesture, DropTarget};
pub use ids::TaskId;
pub use reorder::{Transition, compute_next_board};
pub use stage::Stage;
pub use task::{NewTask, Task, TaskTitle};
