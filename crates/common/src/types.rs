use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a guest.
///
/// Guest numbers are assigned by the front desk operator, so this wraps a
/// plain integer rather than a generated UUID. The number is the identity
/// key: two `Guest` values carrying the same `GuestId` refer to the same
/// person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(u32);

impl GuestId {
    /// Creates a guest ID from an operator-assigned number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for GuestId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<GuestId> for u32 {
    fn from(id: GuestId) -> Self {
        id.0
    }
}

/// Unique identifier for a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Creates an employee ID from an operator-assigned number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmployeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<EmployeeId> for u32 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

/// A room number.
///
/// Room numbers are the stable lookup key for rooms; reservations refer to
/// their room through this key instead of holding a reference into the
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Creates a room number.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the underlying number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<RoomNumber> for u32 {
    fn from(number: RoomNumber) -> Self {
        number.0
    }
}

/// Unique identifier for a reservation ledger entry.
///
/// Generated internally when an entry is recorded, unlike the
/// operator-assigned numbers above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Creates a new random reservation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a reservation ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an ancillary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random order ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an order ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
