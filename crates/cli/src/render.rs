//! Console rendering: menu, listings, and colored status lines.
//!
//! All formatting lives here; the core returns structured records and
//! error values, and this module decides how they look on screen.

use colored::Colorize;
use domain::Directory;

/// Prints a success line in green.
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Prints an error line in red.
pub fn error(msg: &str) {
    println!("{}", msg.red());
}

fn header(title: &str) {
    println!("\n{title}:");
}

/// Prints the main menu.
pub fn menu(name: &str) {
    let rule = "-".repeat(37);
    println!("\n{rule}");
    // Pad before coloring: ANSI escapes would throw the width off.
    println!("|  {}|", format!("{name:<33}").bold());
    println!("{rule}");
    println!("1. Add Room");
    println!("2. Add Employee");
    println!("3. Make Reservation");
    println!("4. Checkout Room");
    println!("5. Update Employee Position");
    println!("6. Add Food Order");
    println!("7. Display Everything");
    println!("8. Display Rooms");
    println!("9. Display Employees");
    println!("10. Display Reservations");
    println!("11. Display Food Orders");
    println!("12. Exit");
}

/// Prints the room list.
pub fn rooms(directory: &Directory) {
    header("Rooms");
    for room in directory.rooms() {
        println!("  {room}");
    }
}

/// Prints the staff roster.
pub fn employees(directory: &Directory) {
    header("Employees");
    for employee in directory.employees() {
        println!("  {employee}");
    }
}

/// Prints the reservation ledger.
pub fn reservations(directory: &Directory) {
    header("Reservations");
    for reservation in directory.reservations() {
        println!("  {reservation}");
    }
}

/// Prints the order book, including when each order was placed.
pub fn orders(directory: &Directory) {
    header("Food Orders");
    for order in directory.orders() {
        println!(
            "  {order}, total {} on {}",
            order.total_price(),
            order.placed_at().format("%d-%m-%Y %H:%M:%S")
        );
    }
}

/// Prints every collection under the establishment's name.
pub fn everything(directory: &Directory) {
    println!("\n{}", directory.name().bold());
    rooms(directory);
    employees(directory);
    reservations(directory);
    orders(directory);
}
