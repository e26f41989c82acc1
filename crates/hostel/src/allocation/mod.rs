//! Student room allocation.
//!
//! The [`RosterStore`] owns the student and room collections as immutable
//! snapshots. The [`AllocationEngine`] is the only writer: it validates a
//! registration or assignment against the current snapshot and, when every
//! check passes, swaps in the next one. Views and HTTP routes read snapshots
//! and never hold state of their own.

pub mod domain;
pub mod engine;
pub mod layout;
pub mod roster;
pub mod router;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{Room, RoomAssignment, RoomNumber, Student, StudentId};
pub use engine::{add_student, assign_room, AddStudentError, AllocationEngine, AssignRoomError};
pub use layout::{HostelLayout, RoomSeed, SeedError};
pub use roster::{InvariantViolation, RosterSnapshot};
pub use router::{allocation_router, AddStudentForm, AssignRoomForm};
pub use store::RosterStore;
pub use views::{
    RoomOption, RoomOverviewEntry, RosterView, StudentListEntry, StudentOption,
    EMPTY_STUDENT_LIST,
};
