//! Records core for a small lodging establishment.
//!
//! This crate tracks rooms, staff, reservations, and ancillary orders and
//! enforces their consistency rules:
//! - a room cannot be double-booked;
//! - a reservation is only recorded together with its room transitioning
//!   from vacant to occupied;
//! - an order must belong to a guest currently occupying some room.
//!
//! The [`Directory`] aggregate composes the component collections and is
//! the single entry point for the presentation layer. Everything lives in
//! memory; persistence and concurrent access are out of scope, and callers
//! are expected to issue one operation at a time.

pub mod directory;
pub mod error;
pub mod ledger;
pub mod money;
pub mod orders;
pub mod person;
pub mod registry;
pub mod room;

pub use directory::Directory;
pub use error::DomainError;
pub use ledger::{Reservation, ReservationLedger};
pub use money::Money;
pub use orders::{Order, OrderBook};
pub use person::{Employee, Guest};
pub use registry::RoomRegistry;
pub use room::{Occupancy, Room, RoomError};
