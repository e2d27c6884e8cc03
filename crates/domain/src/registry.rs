//! Room registry: owns the set of rooms and their occupancy state.

use common::{GuestId, RoomNumber};
use serde::{Deserialize, Serialize};

use crate::room::Room;

/// Owns every [`Room`] record and answers occupancy queries for the other
/// components.
///
/// Rooms are kept in insertion order and looked up by linear scan; the
/// registry stays small enough that an index would not pay for itself.
/// Duplicate room numbers are accepted; lookups resolve to the first match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new vacant room.
    pub fn add(&mut self, number: RoomNumber, room_type: impl Into<String>) {
        self.rooms.push(Room::new(number, room_type));
    }

    /// Finds a room by number.
    pub fn find(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    /// Finds a room by number for mutation.
    pub fn find_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number() == number)
    }

    /// Returns all rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns true if the guest is the current occupant of some room.
    pub fn is_checked_in(&self, guest_id: GuestId) -> bool {
        self.rooms
            .iter()
            .any(|room| room.occupant() == Some(guest_id))
    }
}
