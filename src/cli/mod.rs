pub mod command;
pub mod run;

pub use self::run::run_app;

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::domain::Contact;
use crate::errors::AppError;

// Fixed cosmetic delay so output stays readable before the next screen clear.
const READ_PAUSE: Duration = Duration::from_secs(2);

// OUTPUT FUNCTIONS
pub fn show_menu() {
    println!("\n--- MAIN MENU ---\n");
    println!("1 - Show all contacts");
    println!("2 - Search contact");
    println!("3 - Add new contact");
    println!("4 - Edit contact");
    println!("5 - Delete contact");
    println!("6 - Export contacts to CSV");
    println!("7 - Import contacts from CSV");
    println!("0 - Exit program");
}

pub fn display_contact(contact: &Contact) -> String {
    let output = format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        contact.name, contact.phone, contact.email, contact.address
    );
    output
}

pub fn pause() {
    thread::sleep(READ_PAUSE);
}

pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    // read_line reports a closed stdin as zero bytes, not an error.
    if bytes == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        )));
    }

    Ok(input.trim().to_string())
}

pub fn prompt(label: &str) -> Result<String, AppError> {
    print!("{}: ", label);
    io::stdout().flush()?;
    get_input()
}

pub fn get_contact_details() -> Result<(String, String, String), AppError> {
    let phone = prompt("Phone")?;
    let email = prompt("E-mail")?;
    let address = prompt("Address")?;

    Ok((phone, email, address))
}
