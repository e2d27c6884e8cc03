//! Directory aggregate: the operation surface for the presentation layer.

use common::{EmployeeId, GuestId, RoomNumber};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ledger::{Reservation, ReservationLedger};
use crate::money::Money;
use crate::orders::{Order, OrderBook};
use crate::person::{Employee, Guest};
use crate::registry::RoomRegistry;
use crate::room::Room;

/// Top-level aggregate composing the room registry, reservation ledger,
/// order book, and staff roster.
///
/// A request enters here, cross-entity invariants are validated against the
/// registry, and the mutation is delegated to the owning component. Every
/// mutating operation either fully succeeds or leaves all collections
/// unchanged.
///
/// The directory assumes a single logical caller issuing one operation at a
/// time; embedders exposing it as a service must serialize access
/// externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    name: String,
    registry: RoomRegistry,
    ledger: ReservationLedger,
    order_book: OrderBook,
    employees: Vec<Employee>,
}

impl Directory {
    /// Creates an empty directory for an establishment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: RoomRegistry::new(),
            ledger: ReservationLedger::new(),
            order_book: OrderBook::new(),
            employees: Vec::new(),
        }
    }

    /// Returns the establishment's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a new vacant room.
    #[tracing::instrument(skip(self))]
    pub fn add_room(&mut self, number: RoomNumber, room_type: String) {
        self.registry.add(number, room_type);
    }

    /// Adds a staff member to the roster.
    #[tracing::instrument(skip(self))]
    pub fn add_employee(&mut self, name: String, age: u32, id: EmployeeId, position: String) {
        self.employees.push(Employee::new(id, name, age, position));
    }

    /// Reserves a room for a guest, recording the stay in the ledger.
    ///
    /// The guest record is built from the given details; the identifier is
    /// what ties it to later orders and occupancy.
    #[tracing::instrument(skip(self))]
    pub fn make_reservation(
        &mut self,
        name: String,
        age: u32,
        guest_id: GuestId,
        room_number: RoomNumber,
        duration_days: u32,
    ) -> Result<Reservation, DomainError> {
        let guest = Guest::new(guest_id, name, age);
        let reservation =
            self.ledger
                .reserve(&mut self.registry, guest, room_number, duration_days)?;

        metrics::counter!("directory_reservations_total").increment(1);
        Ok(reservation)
    }

    /// Checks the occupant of a room out.
    #[tracing::instrument(skip(self))]
    pub fn checkout_room(&mut self, room_number: RoomNumber) -> Result<(), DomainError> {
        self.ledger.checkout(&mut self.registry, room_number)?;

        metrics::counter!("directory_checkouts_total").increment(1);
        Ok(())
    }

    /// Changes a staff member's position.
    #[tracing::instrument(skip(self))]
    pub fn update_employee_position(
        &mut self,
        id: EmployeeId,
        position: String,
    ) -> Result<(), DomainError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|employee| employee.id() == id)
            .ok_or(DomainError::EmployeeNotFound { employee_id: id })?;

        employee.set_position(position);
        Ok(())
    }

    /// Places a food or service order for a checked-in guest.
    ///
    /// The guest snapshot attached to the order is taken from the guest's
    /// most recent reservation; a guest occupying a room always has one.
    #[tracing::instrument(skip(self))]
    pub fn place_order(
        &mut self,
        guest_id: GuestId,
        item: String,
        quantity: u32,
        unit_price: Money,
    ) -> Result<(), DomainError> {
        let guest = self
            .ledger
            .latest_for_guest(guest_id)
            .map(|reservation| reservation.guest().clone())
            .ok_or(DomainError::GuestNotCheckedIn { guest_id })?;

        self.order_book
            .place(&self.registry, guest, item, quantity, unit_price)?;

        metrics::counter!("directory_orders_total").increment(1);
        Ok(())
    }

    /// Returns all rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        self.registry.rooms()
    }

    /// Returns the staff roster in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns all reservation ledger entries in insertion order.
    pub fn reservations(&self) -> &[Reservation] {
        self.ledger.entries()
    }

    /// Returns all orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        self.order_book.orders()
    }
}
