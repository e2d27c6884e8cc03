//! Integration tests for the directory aggregate.
//!
//! These exercise full operator sequences through the public surface and
//! pin down the cross-entity invariants: occupancy consistency, atomic
//! failure, and append-only history.

use common::{EmployeeId, GuestId, RoomNumber};
use domain::{Directory, DomainError, Money, RoomError};

fn directory_with_rooms() -> Directory {
    let mut directory = Directory::new("The Pines");
    directory.add_room(RoomNumber::new(101), "Deluxe".into());
    directory.add_room(RoomNumber::new(102), "Standard".into());
    directory
}

fn occupancy_is_consistent(directory: &Directory) -> bool {
    directory
        .rooms()
        .iter()
        .all(|room| room.is_booked() == room.occupant().is_some())
}

mod booking {
    use super::*;

    #[test]
    fn double_booking_fails_and_leaves_registry_and_ledger_unchanged() {
        let mut directory = directory_with_rooms();
        directory
            .make_reservation("Alice".into(), 34, GuestId::new(7), RoomNumber::new(101), 3)
            .unwrap();

        let result = directory.make_reservation(
            "Bob".into(),
            41,
            GuestId::new(8),
            RoomNumber::new(101),
            1,
        );

        assert!(matches!(
            result,
            Err(DomainError::Room(RoomError::AlreadyBooked { .. }))
        ));
        assert_eq!(directory.reservations().len(), 1);
        assert_eq!(directory.rooms()[0].occupant(), Some(GuestId::new(7)));
        assert!(occupancy_is_consistent(&directory));
    }

    #[test]
    fn reservation_for_unknown_room_fails() {
        let mut directory = directory_with_rooms();

        let result = directory.make_reservation(
            "Alice".into(),
            34,
            GuestId::new(7),
            RoomNumber::new(999),
            3,
        );

        assert!(matches!(result, Err(DomainError::RoomNotFound { .. })));
        assert!(directory.reservations().is_empty());
    }

    #[test]
    fn checkout_of_vacant_room_fails_and_appends_nothing() {
        let mut directory = directory_with_rooms();

        let result = directory.checkout_room(RoomNumber::new(101));
        assert!(matches!(
            result,
            Err(DomainError::Room(RoomError::NotBooked { .. }))
        ));
        assert!(directory.reservations().is_empty());
        assert!(occupancy_is_consistent(&directory));
    }

    #[test]
    fn checkout_of_unknown_room_fails() {
        let mut directory = directory_with_rooms();
        let result = directory.checkout_room(RoomNumber::new(999));
        assert!(matches!(result, Err(DomainError::RoomNotFound { .. })));
    }

    #[test]
    fn room_can_be_rebooked_after_checkout_with_history_kept() {
        let mut directory = directory_with_rooms();

        directory
            .make_reservation("Alice".into(), 34, GuestId::new(7), RoomNumber::new(101), 3)
            .unwrap();
        directory.checkout_room(RoomNumber::new(101)).unwrap();
        directory
            .make_reservation("Bob".into(), 41, GuestId::new(8), RoomNumber::new(101), 1)
            .unwrap();

        let guests: Vec<_> = directory
            .reservations()
            .iter()
            .map(|entry| entry.guest().id())
            .collect();
        assert_eq!(guests, vec![GuestId::new(7), GuestId::new(8)]);
        assert_eq!(directory.rooms()[0].occupant(), Some(GuestId::new(8)));
        assert!(occupancy_is_consistent(&directory));
    }

    #[test]
    fn booked_room_state_follows_the_full_scenario() {
        // addRoom(101) -> reserve(7) ok -> reserve(8) already booked
        // -> checkout ok -> reserve(8) ok
        let mut directory = Directory::new("The Pines");
        directory.add_room(RoomNumber::new(101), "Deluxe".into());

        directory
            .make_reservation("Alice".into(), 34, GuestId::new(7), RoomNumber::new(101), 3)
            .unwrap();

        let blocked = directory.make_reservation(
            "Bob".into(),
            41,
            GuestId::new(8),
            RoomNumber::new(101),
            1,
        );
        assert!(matches!(
            blocked,
            Err(DomainError::Room(RoomError::AlreadyBooked { .. }))
        ));

        directory.checkout_room(RoomNumber::new(101)).unwrap();

        directory
            .make_reservation("Bob".into(), 41, GuestId::new(8), RoomNumber::new(101), 1)
            .unwrap();
        assert_eq!(directory.reservations().len(), 2);
    }
}

mod orders {
    use super::*;

    #[test]
    fn order_before_any_reservation_fails_then_succeeds_after_check_in() {
        let mut directory = directory_with_rooms();

        let early =
            directory.place_order(GuestId::new(7), "Coffee".into(), 2, Money::from_units(150));
        assert!(matches!(
            early,
            Err(DomainError::GuestNotCheckedIn { guest_id }) if guest_id == GuestId::new(7)
        ));
        assert!(directory.orders().is_empty());

        directory
            .make_reservation("Alice".into(), 34, GuestId::new(7), RoomNumber::new(101), 3)
            .unwrap();

        directory
            .place_order(GuestId::new(7), "Coffee".into(), 2, Money::from_units(150))
            .unwrap();

        assert_eq!(directory.orders().len(), 1);
        assert_eq!(directory.orders()[0].item(), "Coffee");
    }

    #[test]
    fn orders_list_in_insertion_order() {
        let mut directory = directory_with_rooms();
        directory
            .make_reservation("Alice".into(), 34, GuestId::new(7), RoomNumber::new(101), 3)
            .unwrap();
        directory
            .make_reservation("Bob".into(), 41, GuestId::new(8), RoomNumber::new(102), 2)
            .unwrap();

        directory
            .place_order(GuestId::new(7), "Coffee".into(), 2, Money::from_units(150))
            .unwrap();
        directory
            .place_order(GuestId::new(8), "Sandwich".into(), 1, Money::from_units(250))
            .unwrap();
        directory
            .place_order(GuestId::new(7), "Tea".into(), 1, Money::from_units(80))
            .unwrap();

        let items: Vec<_> = directory.orders().iter().map(|o| o.item()).collect();
        assert_eq!(items, vec!["Coffee", "Sandwich", "Tea"]);
    }

    #[test]
    fn order_placed_while_checked_in_survives_checkout() {
        let mut directory = directory_with_rooms();
        directory
            .make_reservation("Alice".into(), 34, GuestId::new(7), RoomNumber::new(101), 3)
            .unwrap();
        directory
            .place_order(GuestId::new(7), "Coffee".into(), 2, Money::from_units(150))
            .unwrap();

        directory.checkout_room(RoomNumber::new(101)).unwrap();

        assert_eq!(directory.orders().len(), 1);
        assert_eq!(directory.orders()[0].guest().id(), GuestId::new(7));
    }
}

mod staff {
    use super::*;

    #[test]
    fn position_update_for_missing_employee_leaves_roster_unchanged() {
        let mut directory = Directory::new("The Pines");
        directory.add_employee("Bob".into(), 45, EmployeeId::new(1), "Porter".into());

        let result = directory.update_employee_position(EmployeeId::new(9), "Manager".into());
        assert!(matches!(result, Err(DomainError::EmployeeNotFound { .. })));

        assert_eq!(directory.employees().len(), 1);
        assert_eq!(directory.employees()[0].position(), "Porter");
    }

    #[test]
    fn position_update_applies_to_the_matching_employee_only() {
        let mut directory = Directory::new("The Pines");
        directory.add_employee("Bob".into(), 45, EmployeeId::new(1), "Porter".into());
        directory.add_employee("Carol".into(), 38, EmployeeId::new(2), "Chef".into());

        directory
            .update_employee_position(EmployeeId::new(1), "Concierge".into())
            .unwrap();

        assert_eq!(directory.employees()[0].position(), "Concierge");
        assert_eq!(directory.employees()[1].position(), "Chef");
    }
}

mod invariants {
    use super::*;

    #[test]
    fn occupancy_stays_consistent_across_a_long_sequence() {
        let mut directory = directory_with_rooms();
        directory.add_room(RoomNumber::new(103), "Suite".into());

        directory
            .make_reservation("Alice".into(), 34, GuestId::new(7), RoomNumber::new(101), 3)
            .unwrap();
        assert!(occupancy_is_consistent(&directory));

        directory
            .make_reservation("Bob".into(), 41, GuestId::new(8), RoomNumber::new(103), 5)
            .unwrap();
        assert!(occupancy_is_consistent(&directory));

        directory.checkout_room(RoomNumber::new(101)).unwrap();
        assert!(occupancy_is_consistent(&directory));

        let _ = directory.checkout_room(RoomNumber::new(101));
        assert!(occupancy_is_consistent(&directory));

        directory
            .make_reservation("Dan".into(), 29, GuestId::new(9), RoomNumber::new(101), 2)
            .unwrap();
        assert!(occupancy_is_consistent(&directory));
    }
}
