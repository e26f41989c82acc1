use super::domain::RoomNumber;

/// Room number and capacity used to seed the roster at startup.
#[derive(Debug, Clone)]
pub struct RoomSeed {
    pub number: &'static str,
    pub capacity: u32,
}

/// The fixed set of rooms a roster is created with.
#[derive(Debug)]
pub struct HostelLayout {
    rooms: Vec<RoomSeed>,
}

impl HostelLayout {
    /// The four rooms of the girls' hostel wing.
    pub fn standard() -> Self {
        Self {
            rooms: standard_room_seeds(),
        }
    }

    pub fn from_seeds(rooms: Vec<RoomSeed>) -> Self {
        Self { rooms }
    }

    pub fn room_seeds(&self) -> &[RoomSeed] {
        &self.rooms
    }

    pub fn total_capacity(&self) -> u32 {
        self.rooms.iter().map(|seed| seed.capacity).sum()
    }
}

fn standard_room_seeds() -> Vec<RoomSeed> {
    vec![
        RoomSeed {
            number: "101",
            capacity: 2,
        },
        RoomSeed {
            number: "102",
            capacity: 3,
        },
        RoomSeed {
            number: "103",
            capacity: 2,
        },
        RoomSeed {
            number: "201",
            capacity: 4,
        },
    ]
}

/// Reasons a layout cannot seed a roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("room {0} appears more than once in the layout")]
    DuplicateRoom(RoomNumber),
    #[error("room {0} must hold at least one student")]
    ZeroCapacity(RoomNumber),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_four_rooms_in_order() {
        let layout = HostelLayout::standard();
        let numbers: Vec<_> = layout.room_seeds().iter().map(|seed| seed.number).collect();
        assert_eq!(numbers, ["101", "102", "103", "201"]);
        assert_eq!(layout.total_capacity(), 11);
    }
}
