//! Room entity and its occupancy state machine.

use common::{GuestId, RoomNumber};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when transitioning a room's occupancy.
#[derive(Debug, Error)]
pub enum RoomError {
    /// The room already has an occupant.
    #[error("Room {room_number} is already booked")]
    AlreadyBooked { room_number: RoomNumber },

    /// The room is vacant, so there is nothing to check out.
    #[error("Room {room_number} is not booked")]
    NotBooked { room_number: RoomNumber },
}

/// Occupancy state of a room.
///
/// State transitions:
/// ```text
/// Vacant ──book──► Occupied ──checkout──► Vacant
/// ```
///
/// `book` on an occupied room and `checkout` on a vacant room are rejected
/// without a state change. Folding the booked flag and the occupant
/// identifier into one enum makes "occupant is set iff the room is booked"
/// hold structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Occupancy {
    /// No current occupant.
    #[default]
    Vacant,

    /// Occupied by the guest with this identifier.
    Occupied(GuestId),
}

impl Occupancy {
    /// Returns the occupant's guest ID, if any.
    pub fn occupant(&self) -> Option<GuestId> {
        match self {
            Occupancy::Vacant => None,
            Occupancy::Occupied(guest_id) => Some(*guest_id),
        }
    }

    /// Returns true if the room is occupied.
    pub fn is_booked(&self) -> bool {
        matches!(self, Occupancy::Occupied(_))
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occupancy::Vacant => write!(f, "Available"),
            Occupancy::Occupied(_) => write!(f, "Booked"),
        }
    }
}

/// A room record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    room_type: String,
    occupancy: Occupancy,
}

impl Room {
    /// Creates a new vacant room.
    pub fn new(number: RoomNumber, room_type: impl Into<String>) -> Self {
        Self {
            number,
            room_type: room_type.into(),
            occupancy: Occupancy::Vacant,
        }
    }

    /// Returns the room number.
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    /// Returns the room-type label.
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Returns the occupancy state.
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Returns the current occupant's guest ID, if any.
    pub fn occupant(&self) -> Option<GuestId> {
        self.occupancy.occupant()
    }

    /// Returns true if the room is occupied.
    pub fn is_booked(&self) -> bool {
        self.occupancy.is_booked()
    }

    /// Books the room for a guest.
    ///
    /// Fails with [`RoomError::AlreadyBooked`] if the room is occupied,
    /// leaving the state unchanged.
    pub fn book(&mut self, guest_id: GuestId) -> Result<(), RoomError> {
        if self.is_booked() {
            return Err(RoomError::AlreadyBooked {
                room_number: self.number,
            });
        }

        self.occupancy = Occupancy::Occupied(guest_id);
        Ok(())
    }

    /// Checks the current occupant out, returning the room to vacant.
    ///
    /// Fails with [`RoomError::NotBooked`] if the room is vacant.
    pub fn checkout(&mut self) -> Result<(), RoomError> {
        if !self.is_booked() {
            return Err(RoomError::NotBooked {
                room_number: self.number,
            });
        }

        self.occupancy = Occupancy::Vacant;
        Ok(())
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} ({}): {}",
            self.number, self.room_type, self.occupancy
        )
    }
}
