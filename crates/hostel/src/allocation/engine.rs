use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{RoomAssignment, RoomNumber, Student, StudentId};
use super::roster::RosterSnapshot;
use super::store::RosterStore;

/// Rejections from registering a student. Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddStudentError {
    #[error("Student Name and ID cannot be empty.")]
    EmptyField,
    #[error("Student with this ID already exists.")]
    DuplicateId(StudentId),
}

/// Rejections from assigning a student to a room. Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignRoomError {
    #[error("Please select both a student and a room.")]
    MissingSelection,
    #[error("Student not found.")]
    StudentNotFound(String),
    #[error("Room not found.")]
    RoomNotFound(String),
    #[error("Student {student_name} is already assigned to room {room}.")]
    AlreadyAssigned {
        student_name: String,
        room: RoomNumber,
    },
    #[error("Room {room} is full.")]
    RoomFull { room: RoomNumber },
}

/// Registers a new, unassigned student at the end of the roster.
///
/// Blank checks trim whitespace but the stored name and id keep it.
pub fn add_student(
    roster: &RosterSnapshot,
    name: &str,
    id: &str,
) -> Result<RosterSnapshot, AddStudentError> {
    if name.trim().is_empty() || id.trim().is_empty() {
        return Err(AddStudentError::EmptyField);
    }
    if roster.find_student(id).is_some() {
        return Err(AddStudentError::DuplicateId(StudentId(id.to_string())));
    }

    let mut next = roster.clone();
    next.students.push(Student {
        id: StudentId(id.to_string()),
        name: name.to_string(),
        assignment: RoomAssignment::Unassigned,
    });
    next.revision += 1;
    Ok(next)
}

/// Moves a student into `room_number`, vacating their previous room first.
///
/// Capacity is judged on the target room as it stands before the move.
pub fn assign_room(
    roster: &RosterSnapshot,
    student_id: &str,
    room_number: &str,
) -> Result<RosterSnapshot, AssignRoomError> {
    if student_id.is_empty() || room_number.is_empty() {
        return Err(AssignRoomError::MissingSelection);
    }

    let student_index = roster
        .students
        .iter()
        .position(|student| student.id.as_str() == student_id)
        .ok_or_else(|| AssignRoomError::StudentNotFound(student_id.to_string()))?;
    let target_index = roster
        .rooms
        .iter()
        .position(|room| room.number.as_str() == room_number)
        .ok_or_else(|| AssignRoomError::RoomNotFound(room_number.to_string()))?;

    let student = &roster.students[student_index];
    let target = &roster.rooms[target_index];

    if student.assignment.room() == Some(&target.number) {
        return Err(AssignRoomError::AlreadyAssigned {
            student_name: student.name.clone(),
            room: target.number.clone(),
        });
    }
    if target.is_full() {
        return Err(AssignRoomError::RoomFull {
            room: target.number.clone(),
        });
    }

    let mut next = roster.clone();
    if let RoomAssignment::AssignedTo(previous) = &student.assignment {
        if let Some(room) = next.rooms.iter_mut().find(|room| &room.number == previous) {
            room.current_occupants
                .retain(|occupant| occupant != &student.id);
        }
    }
    next.students[student_index].assignment = RoomAssignment::AssignedTo(target.number.clone());
    next.rooms[target_index]
        .current_occupants
        .push(student.id.clone());
    next.revision += 1;
    Ok(next)
}

/// Applies the two roster operations to a shared store.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    store: Arc<RosterStore>,
}

impl AllocationEngine {
    pub fn new(store: Arc<RosterStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<RosterStore> {
        &self.store
    }

    pub fn snapshot(&self) -> Arc<RosterSnapshot> {
        self.store.snapshot()
    }

    pub fn add_student(&self, name: &str, id: &str) -> Result<(), AddStudentError> {
        match self.store.apply(|roster| add_student(roster, name, id)) {
            Ok(snapshot) => {
                info!(
                    student_id = id,
                    revision = snapshot.revision(),
                    "student registered"
                );
                audit(&snapshot);
                Ok(())
            }
            Err(err) => {
                debug!(student_id = id, error = %err, "student registration rejected");
                Err(err)
            }
        }
    }

    pub fn assign_room(&self, student_id: &str, room_number: &str) -> Result<(), AssignRoomError> {
        match self
            .store
            .apply(|roster| assign_room(roster, student_id, room_number))
        {
            Ok(snapshot) => {
                info!(
                    student_id,
                    room_number,
                    revision = snapshot.revision(),
                    "student assigned to room"
                );
                audit(&snapshot);
                Ok(())
            }
            Err(err) => {
                debug!(student_id, room_number, error = %err, "room assignment rejected");
                Err(err)
            }
        }
    }
}

fn audit(snapshot: &RosterSnapshot) {
    if let Err(violation) = snapshot.check_invariants() {
        warn!(%violation, revision = snapshot.revision(), "roster invariants violated");
    }
}
