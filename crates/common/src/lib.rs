//! Shared identifier types used across the frontdesk workspace.

pub mod types;

pub use types::{EmployeeId, GuestId, OrderId, ReservationId, RoomNumber};
