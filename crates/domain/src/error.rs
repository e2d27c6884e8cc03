//! Domain error types.

use common::{EmployeeId, GuestId, RoomNumber};
use thiserror::Error;

use crate::room::RoomError;

/// Errors that can occur during directory operations.
///
/// Every variant is a recoverable, caller-visible condition. The core never
/// catches its own errors; each failure is returned to the caller, and the
/// presentation layer is the single point where they are reported.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No room with the given number exists in the registry.
    #[error("Room {room_number} not found")]
    RoomNotFound { room_number: RoomNumber },

    /// A room-level state error (already booked, not booked).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// No employee with the given ID exists on the roster.
    #[error("Employee {employee_id} not found")]
    EmployeeNotFound { employee_id: EmployeeId },

    /// The guest is not the current occupant of any booked room.
    #[error("Guest {guest_id} is not checked in to any room")]
    GuestNotCheckedIn { guest_id: GuestId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_id() {
        let err = DomainError::RoomNotFound {
            room_number: RoomNumber::new(101),
        };
        assert_eq!(err.to_string(), "Room 101 not found");

        let err = DomainError::EmployeeNotFound {
            employee_id: EmployeeId::new(3),
        };
        assert_eq!(err.to_string(), "Employee 3 not found");

        let err = DomainError::GuestNotCheckedIn {
            guest_id: GuestId::new(7),
        };
        assert_eq!(err.to_string(), "Guest 7 is not checked in to any room");
    }

    #[test]
    fn room_errors_pass_through_unchanged() {
        let err = DomainError::from(RoomError::AlreadyBooked {
            room_number: RoomNumber::new(101),
        });
        assert_eq!(err.to_string(), "Room 101 is already booked");
    }
}
