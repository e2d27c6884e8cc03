//! Reservation ledger: couples guests to rooms for a stay.

use common::{GuestId, ReservationId, RoomNumber};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::person::Guest;
use crate::registry::RoomRegistry;

/// A recorded stay: one guest, one room, a duration in whole days.
///
/// Reservations reference their room by number rather than holding a
/// reference into the registry, so a ledger entry stays valid whatever
/// later happens to the room. A reservation is only ever constructed by
/// [`ReservationLedger::reserve`] together with the room transitioning
/// from vacant to occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    guest: Guest,
    room_number: RoomNumber,
    duration_days: u32,
}

impl Reservation {
    pub(crate) fn new(guest: Guest, room_number: RoomNumber, duration_days: u32) -> Self {
        Self {
            id: ReservationId::new(),
            guest,
            room_number,
            duration_days,
        }
    }

    /// Returns the ledger entry's identifier.
    pub fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the guest recorded for this stay.
    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    /// Returns the reserved room's number.
    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    /// Returns the stay duration in whole days.
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} in room {} for {} days",
            self.guest, self.room_number, self.duration_days
        )
    }
}

/// Append-only collection of [`Reservation`] records.
///
/// Entries are never modified or pruned; checkout mutates the room but
/// leaves the matching entry in place as history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationLedger {
    entries: Vec<Reservation>,
}

impl ReservationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a room for a guest and records the stay.
    ///
    /// Fails with [`DomainError::RoomNotFound`] if no room carries the
    /// number, and propagates [`RoomError::AlreadyBooked`] from the
    /// registry. On failure nothing is recorded: the entry is only
    /// appended after the room transition succeeds, so the booking and
    /// the ledger entry appear together or not at all.
    ///
    /// The duration is recorded as given; zero is accepted.
    ///
    /// [`RoomError::AlreadyBooked`]: crate::room::RoomError::AlreadyBooked
    pub fn reserve(
        &mut self,
        registry: &mut RoomRegistry,
        guest: Guest,
        room_number: RoomNumber,
        duration_days: u32,
    ) -> Result<Reservation, DomainError> {
        let room = registry
            .find_mut(room_number)
            .ok_or(DomainError::RoomNotFound { room_number })?;

        room.book(guest.id())?;

        let reservation = Reservation::new(guest, room_number, duration_days);
        self.entries.push(reservation.clone());
        Ok(reservation)
    }

    /// Checks the occupant of a room out.
    ///
    /// Fails with [`DomainError::RoomNotFound`] if no room carries the
    /// number, and propagates [`RoomError::NotBooked`] from the registry.
    /// The matching ledger entry, if any, is left untouched.
    ///
    /// [`RoomError::NotBooked`]: crate::room::RoomError::NotBooked
    pub fn checkout(
        &self,
        registry: &mut RoomRegistry,
        room_number: RoomNumber,
    ) -> Result<(), DomainError> {
        let room = registry
            .find_mut(room_number)
            .ok_or(DomainError::RoomNotFound { room_number })?;

        room.checkout()?;
        Ok(())
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[Reservation] {
        &self.entries
    }

    /// Returns the most recent entry recorded for a guest, if any.
    pub fn latest_for_guest(&self, guest_id: GuestId) -> Option<&Reservation> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.guest().id() == guest_id)
    }
}
