//! Interactive menu loop.
//!
//! Every core operation is fallible from here: domain errors are shown to
//! the operator verbatim and the loop continues. Only exhausted input ends
//! the session.

use std::io;

use anyhow::Result;
use common::{EmployeeId, GuestId, RoomNumber};
use domain::Directory;

use crate::{input, render};

enum Flow {
    Continue,
    Exit,
}

/// Runs the menu loop until the operator exits or stdin is exhausted.
pub fn run(directory: &mut Directory) -> Result<()> {
    loop {
        render::menu(directory.name());
        match step(directory) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            Err(err) => {
                if let Some(io_err) = err.downcast_ref::<io::Error>() {
                    if io_err.kind() == io::ErrorKind::UnexpectedEof {
                        return Ok(());
                    }
                    return Err(err);
                }
                render::error(&format!("An unknown error occurred: {err}"));
            }
        }
    }
}

fn step(directory: &mut Directory) -> Result<Flow> {
    match input::number("Enter your choice: ")? {
        1 => {
            let number = input::number("Enter room number: ")?;
            let room_type = input::text("Enter room type: ")?;
            directory.add_room(RoomNumber::new(number), room_type);
            render::success("Room added.");
        }
        2 => {
            let name = input::text("Enter employee name: ")?;
            let age = input::number("Enter employee age: ")?;
            let id = input::number("Enter employee ID: ")?;
            let position = input::text("Enter employee position: ")?;
            directory.add_employee(name, age, EmployeeId::new(id), position);
            render::success("Employee added.");
        }
        3 => {
            let name = input::text("Enter guest name: ")?;
            let age = input::number("Enter guest age: ")?;
            let guest_id = input::number("Enter guest ID: ")?;
            let number = input::number("Enter room number: ")?;
            let duration = input::number("Enter duration of stay (days): ")?;

            match directory.make_reservation(
                name,
                age,
                GuestId::new(guest_id),
                RoomNumber::new(number),
                duration,
            ) {
                Ok(_) => render::success("Reservation successful!"),
                Err(err) => render::error(&err.to_string()),
            }
        }
        4 => {
            let number = input::number("Enter room number: ")?;
            match directory.checkout_room(RoomNumber::new(number)) {
                Ok(()) => render::success("Room checked out successfully!"),
                Err(err) => render::error(&err.to_string()),
            }
        }
        5 => {
            let id = input::number("Enter employee ID: ")?;
            let position = input::text("Enter new position: ")?;
            match directory.update_employee_position(EmployeeId::new(id), position) {
                Ok(()) => render::success("Employee position updated successfully!"),
                Err(err) => render::error(&err.to_string()),
            }
        }
        6 => {
            let guest_id = input::number("Enter guest ID: ")?;
            let item = input::text("Enter food item: ")?;
            let quantity = input::number("Enter quantity: ")?;
            let price = input::amount("Enter price: ")?;
            match directory.place_order(GuestId::new(guest_id), item, quantity, price) {
                Ok(()) => render::success("Food order placed successfully!"),
                Err(err) => render::error(&err.to_string()),
            }
        }
        7 => render::everything(directory),
        8 => render::rooms(directory),
        9 => render::employees(directory),
        10 => render::reservations(directory),
        11 => render::orders(directory),
        12 => return Ok(Flow::Exit),
        _ => render::error("Invalid choice. Please try again."),
    }

    Ok(Flow::Continue)
}
