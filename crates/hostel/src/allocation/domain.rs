use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier a student registers with at the front desk (e.g. `GH001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Door number of a room (e.g. `101`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub String);

impl RoomNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a student currently sleeps. There is no transition back to `Unassigned`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "room", rename_all = "snake_case")]
pub enum RoomAssignment {
    Unassigned,
    AssignedTo(RoomNumber),
}

impl RoomAssignment {
    pub fn room(&self) -> Option<&RoomNumber> {
        match self {
            Self::Unassigned => None,
            Self::AssignedTo(room) => Some(room),
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::AssignedTo(_))
    }

    pub fn label(&self) -> String {
        match self {
            Self::Unassigned => "Unassigned".to_string(),
            Self::AssignedTo(room) => format!("Room: {room}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    /// Stored exactly as submitted; only the emptiness check trims it.
    pub name: String,
    pub assignment: RoomAssignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    pub capacity: u32,
    /// Occupant ids in the order they moved in.
    pub current_occupants: Vec<StudentId>,
}

impl Room {
    pub fn occupancy(&self) -> usize {
        self.current_occupants.len()
    }

    pub fn is_full(&self) -> bool {
        self.occupancy() >= self.capacity as usize
    }

    pub fn houses(&self, id: &StudentId) -> bool {
        self.current_occupants.contains(id)
    }
}
