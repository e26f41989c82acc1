use serde::Serialize;

use super::domain::{Room, RoomNumber, Student, StudentId};
use super::roster::RosterSnapshot;

pub const EMPTY_STUDENT_LIST: &str = "No students registered yet.";

#[derive(Debug, Clone, Serialize)]
pub struct StudentListEntry {
    pub id: StudentId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<RoomNumber>,
    pub assignment_label: String,
    pub assigned: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomOverviewEntry {
    pub number: RoomNumber,
    pub capacity: u32,
    pub occupied: usize,
    pub full: bool,
    pub occupancy_label: String,
    pub occupant_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentOption {
    pub value: StudentId,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomOption {
    pub value: RoomNumber,
    pub label: String,
    pub disabled: bool,
}

/// Everything the front desk page renders from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    pub revision: u64,
    pub students: Vec<StudentListEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub rooms: Vec<RoomOverviewEntry>,
    pub student_options: Vec<StudentOption>,
    pub room_options: Vec<RoomOption>,
}

impl StudentListEntry {
    fn from_student(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            room_number: student.assignment.room().cloned(),
            assignment_label: student.assignment.label(),
            assigned: student.assignment.is_assigned(),
        }
    }
}

impl RosterSnapshot {
    pub fn student_list(&self) -> Vec<StudentListEntry> {
        self.students()
            .iter()
            .map(StudentListEntry::from_student)
            .collect()
    }

    pub fn room_overview(&self) -> Vec<RoomOverviewEntry> {
        self.rooms()
            .iter()
            .map(|room| {
                let occupant_names = self.occupant_names(room);
                let mut occupancy_label =
                    format!("Occupancy: {} / {}", room.occupancy(), room.capacity);
                if !occupant_names.is_empty() {
                    occupancy_label.push_str(&format!(" ({})", occupant_names.join(", ")));
                }

                RoomOverviewEntry {
                    number: room.number.clone(),
                    capacity: room.capacity,
                    occupied: room.occupancy(),
                    full: room.is_full(),
                    occupancy_label,
                    occupant_names,
                }
            })
            .collect()
    }

    /// Unassigned students first, then assigned ones, each in registration order.
    pub fn student_options(&self) -> Vec<StudentOption> {
        let unassigned = self.list_unassigned().into_iter().map(|student| StudentOption {
            value: student.id.clone(),
            label: format!("{} ({})", student.name, student.id),
        });
        let assigned = self.list_assigned().into_iter().map(|student| {
            let room = student
                .assignment
                .room()
                .map(RoomNumber::as_str)
                .unwrap_or_default();
            StudentOption {
                value: student.id.clone(),
                label: format!("{} ({}) (Currently in {})", student.name, student.id, room),
            }
        });

        unassigned.chain(assigned).collect()
    }

    pub fn room_options(&self) -> Vec<RoomOption> {
        self.rooms()
            .iter()
            .map(|room| {
                let mut label = format!(
                    "Room {} (Capacity: {}, Occupied: {})",
                    room.number,
                    room.capacity,
                    room.occupancy()
                );
                if room.is_full() {
                    label.push_str(" (Full)");
                }
                RoomOption {
                    value: room.number.clone(),
                    label,
                    disabled: room.is_full(),
                }
            })
            .collect()
    }

    pub fn view(&self) -> RosterView {
        RosterView {
            revision: self.revision(),
            students: self.student_list(),
            empty_message: self.students().is_empty().then_some(EMPTY_STUDENT_LIST),
            rooms: self.room_overview(),
            student_options: self.student_options(),
            room_options: self.room_options(),
        }
    }

    // Unknown ids fall back to the raw id.
    fn occupant_names(&self, room: &Room) -> Vec<String> {
        room.current_occupants
            .iter()
            .map(|id| {
                self.find_student(id.as_str())
                    .map(|student| student.name.clone())
                    .unwrap_or_else(|| id.to_string())
            })
            .collect()
    }
}
