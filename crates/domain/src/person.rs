//! Guest and staff records.
//!
//! The entity set is fixed, so guests and employees are separate concrete
//! types sharing a `Display` contract rather than trait objects behind a
//! common base.

use common::{EmployeeId, GuestId};
use serde::{Deserialize, Serialize};

/// A guest of the establishment.
///
/// Guests are immutable value records; the [`GuestId`] is the identity key,
/// and several `Guest` values carrying the same ID may exist across
/// reservations and orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    id: GuestId,
    name: String,
    age: u32,
}

impl Guest {
    /// Creates a new guest record.
    pub fn new(id: GuestId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Returns the guest's identifier.
    pub fn id(&self) -> GuestId {
        self.id
    }

    /// Returns the guest's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the guest's age.
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl std::fmt::Display for Guest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Guest {}: {}, age {}", self.id, self.name, self.age)
    }
}

/// A staff member.
///
/// Unlike guests, the position field is mutable: staff get promoted or
/// reassigned while keeping their identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    age: u32,
    position: String,
}

impl Employee {
    /// Creates a new employee record.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        age: u32,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            position: position.into(),
        }
    }

    /// Returns the employee's identifier.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns the employee's current position.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Replaces the employee's position.
    pub fn set_position(&mut self, position: impl Into<String>) {
        self.position = position.into();
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Employee {}: {}, age {}, {}",
            self.id, self.name, self.age, self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_accessors() {
        let guest = Guest::new(GuestId::new(7), "Alice", 34);
        assert_eq!(guest.id(), GuestId::new(7));
        assert_eq!(guest.name(), "Alice");
        assert_eq!(guest.age(), 34);
    }

    #[test]
    fn guests_with_same_id_are_equal_by_value() {
        let a = Guest::new(GuestId::new(7), "Alice", 34);
        let b = Guest::new(GuestId::new(7), "Alice", 34);
        assert_eq!(a, b);
    }

    #[test]
    fn employee_position_is_mutable() {
        let mut employee = Employee::new(EmployeeId::new(1), "Bob", 45, "Porter");
        assert_eq!(employee.position(), "Porter");

        employee.set_position("Concierge");
        assert_eq!(employee.position(), "Concierge");
        assert_eq!(employee.id(), EmployeeId::new(1));
    }

    #[test]
    fn display_includes_identity() {
        let guest = Guest::new(GuestId::new(7), "Alice", 34);
        assert_eq!(guest.to_string(), "Guest 7: Alice, age 34");

        let employee = Employee::new(EmployeeId::new(1), "Bob", 45, "Porter");
        assert_eq!(employee.to_string(), "Employee 1: Bob, age 45, Porter");
    }

    #[test]
    fn guest_serialization_roundtrip() {
        let guest = Guest::new(GuestId::new(7), "Alice", 34);
        let json = serde_json::to_string(&guest).unwrap();
        let back: Guest = serde_json::from_str(&json).unwrap();
        assert_eq!(guest, back);
    }
}
