//! Ancillary order book: food and service orders placed by checked-in guests.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::money::Money;
use crate::person::Guest;
use crate::registry::RoomRegistry;

/// A food or service order.
///
/// The order keeps a snapshot of the guest as they were when it was placed.
/// The checked-in invariant is enforced at creation only; an order remains
/// on the books after its guest checks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    guest: Guest,
    item: String,
    quantity: u32,
    unit_price: Money,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(guest: Guest, item: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            id: OrderId::new(),
            guest,
            item: item.into(),
            quantity,
            unit_price,
            placed_at: Utc::now(),
        }
    }

    /// Returns the order's identifier.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the guest snapshot taken when the order was placed.
    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    /// Returns the ordered item's label.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Returns the ordered quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the price per unit.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the total price (quantity times unit price).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    /// Returns when the order was placed.
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x{} at {} for {}",
            self.item, self.quantity, self.unit_price, self.guest
        )
    }
}

/// Append-only collection of [`Order`] records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Creates an empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an order for a guest.
    ///
    /// Scans the registry and fails with [`DomainError::GuestNotCheckedIn`]
    /// unless some occupied room's occupant matches the guest's identifier.
    /// On success the order is appended to the book.
    ///
    /// Quantity and price are recorded as given; zero is accepted.
    pub fn place(
        &mut self,
        registry: &RoomRegistry,
        guest: Guest,
        item: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Result<(), DomainError> {
        if !registry.is_checked_in(guest.id()) {
            return Err(DomainError::GuestNotCheckedIn {
                guest_id: guest.id(),
            });
        }

        self.orders.push(Order::new(guest, item, quantity, unit_price));
        Ok(())
    }

    /// Returns all orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}
