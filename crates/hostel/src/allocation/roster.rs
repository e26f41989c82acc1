use std::collections::HashSet;

use serde::Serialize;

use super::domain::{Room, RoomAssignment, RoomNumber, Student, StudentId};
use super::layout::{HostelLayout, SeedError};

/// Immutable copy of both collections. Every accepted operation produces a
/// new snapshot with the revision bumped by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSnapshot {
    pub(super) revision: u64,
    pub(super) students: Vec<Student>,
    pub(super) rooms: Vec<Room>,
}

impl RosterSnapshot {
    /// Revision 0: every seeded room empty, no students.
    pub fn seeded(layout: &HostelLayout) -> Result<Self, SeedError> {
        let mut seen = HashSet::new();
        let mut rooms = Vec::with_capacity(layout.room_seeds().len());

        for seed in layout.room_seeds() {
            let number = RoomNumber(seed.number.to_string());
            if seed.capacity == 0 {
                return Err(SeedError::ZeroCapacity(number));
            }
            if !seen.insert(seed.number) {
                return Err(SeedError::DuplicateRoom(number));
            }
            rooms.push(Room {
                number,
                capacity: seed.capacity,
                current_occupants: Vec::new(),
            });
        }

        Ok(Self {
            revision: 0,
            students: Vec::new(),
            rooms,
        })
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Students in registration order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Rooms in layout order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id.as_str() == id)
    }

    pub fn find_room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number.as_str() == number)
    }

    pub fn list_unassigned(&self) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|student| !student.assignment.is_assigned())
            .collect()
    }

    pub fn list_assigned(&self) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|student| student.assignment.is_assigned())
            .collect()
    }

    /// Verifies id uniqueness, room uniqueness, capacity, and that every
    /// student's room reference agrees with exactly one occupant list.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut student_ids = HashSet::new();
        for student in &self.students {
            if !student_ids.insert(&student.id) {
                return Err(InvariantViolation::DuplicateStudentId(student.id.clone()));
            }
        }

        let mut room_numbers = HashSet::new();
        for room in &self.rooms {
            if !room_numbers.insert(&room.number) {
                return Err(InvariantViolation::DuplicateRoomNumber(room.number.clone()));
            }
            if room.occupancy() > room.capacity as usize {
                return Err(InvariantViolation::OverCapacity {
                    room: room.number.clone(),
                    occupants: room.occupancy(),
                    capacity: room.capacity,
                });
            }

            let mut occupants = HashSet::new();
            for occupant in &room.current_occupants {
                let housed_here = self.find_student(occupant.as_str()).is_some_and(|student| {
                    student.assignment.room() == Some(&room.number)
                });
                if !occupants.insert(occupant) || !housed_here {
                    return Err(InvariantViolation::StrayOccupant {
                        student: occupant.clone(),
                        room: room.number.clone(),
                    });
                }
            }
        }

        for student in &self.students {
            if let RoomAssignment::AssignedTo(number) = &student.assignment {
                let listed = self
                    .find_room(number.as_str())
                    .is_some_and(|room| room.houses(&student.id));
                if !listed {
                    return Err(InvariantViolation::DanglingAssignment {
                        student: student.id.clone(),
                        room: number.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// A broken roster consistency rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("student id {0} is registered more than once")]
    DuplicateStudentId(StudentId),
    #[error("room {0} appears more than once")]
    DuplicateRoomNumber(RoomNumber),
    #[error("room {room} holds {occupants} occupants but only has space for {capacity}")]
    OverCapacity {
        room: RoomNumber,
        occupants: usize,
        capacity: u32,
    },
    #[error("room {room} lists {student} without a matching room reference")]
    StrayOccupant { student: StudentId, room: RoomNumber },
    #[error("student {student} references room {room} but is not among its occupants")]
    DanglingAssignment { student: StudentId, room: RoomNumber },
}
