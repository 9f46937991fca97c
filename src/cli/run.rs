use std::io::ErrorKind;
use std::path::Path;

use crate::prelude::{
    AppError, Contact, ContactBook, CsvStore, cli,
    command::{self, Command},
};
use crate::store::file::{self, DATABASE_PATH};

pub fn run_app() -> Result<(), AppError> {
    let mut book = ContactBook::new(Box::new(CsvStore::new(DATABASE_PATH)));

    println!("\n\n--- CONTACT BOOK ---");

    // Silent fresh start when the database file is not there yet.
    if Path::new(DATABASE_PATH).exists() {
        match book.load() {
            Ok(count) => println!("\n{} contacts loaded...", count),
            Err(e) => eprintln!("{}", e),
        }
    }

    'menu: loop {
        cli::show_menu();

        let action = match cli::prompt("\nChoose an option (number)") {
            Ok(input) => input,
            // Stdin is gone; nothing left to serve.
            Err(AppError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => break 'menu,
            Err(e) => {
                eprintln!("{}", e);
                continue 'menu;
            }
        };

        let command = match command::get_command(&action) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue 'menu;
            }
        };

        match command {
            Command::Exit => {
                println!("\nGoodbye!");
                break 'menu;
            }
            Command::ListContacts => list_contacts(&book),
            Command::SearchContact => report(search_contact(&book)),
            Command::AddContact => report(add_contact(&mut book)),
            Command::EditContact => report(edit_contact(&mut book)),
            Command::DeleteContact => report(delete_contact(&mut book)),
            Command::ExportContacts => report(export_contacts(&book)),
            Command::ImportContacts => report(import_contacts(&mut book)),
        }
    }

    Ok(())
}

// Every operation error becomes a console notice here; the menu loop never
// terminates on one.
fn report(result: Result<(), AppError>) {
    if let Err(e) = result {
        eprintln!("{}", e);
    }
}

fn list_contacts(book: &ContactBook) {
    if book.contact_list().is_empty() {
        println!("\nContact list is empty!");
        return;
    }

    cli::clear_screen();

    for contact in book.contact_list() {
        println!("\n{}", cli::display_contact(contact));
    }

    cli::pause();
}

fn search_contact(book: &ContactBook) -> Result<(), AppError> {
    println!("\nPlease enter the contact name you wish to find");
    let name = cli::prompt("\nName")?;

    match book.get(&name) {
        Some(contact) => println!("\n{}", cli::display_contact(contact)),
        None => eprintln!("{}", AppError::NotFound(format!("Contact \"{}\"", name))),
    }

    Ok(())
}

fn add_contact(book: &mut ContactBook) -> Result<(), AppError> {
    println!("\nAdding a new contact!");
    let name = cli::prompt("\nContact Name")?;

    if book.contains(&name) {
        cli::clear_screen();
        println!("\nThis contact already exists!");
        cli::pause();
        return Ok(());
    }

    let (phone, email, address) = cli::get_contact_details()?;
    save_contact(book, Contact::new(name, phone, email, address))?;

    cli::pause();
    cli::clear_screen();
    Ok(())
}

fn edit_contact(book: &mut ContactBook) -> Result<(), AppError> {
    let name = cli::prompt("\nContact Name to edit")?;

    if !book.contains(&name) {
        println!("\nThis contact does not exist!");
        cli::pause();
        cli::clear_screen();
        return Ok(());
    }

    println!("\nEditing contact details!");
    let (phone, email, address) = cli::get_contact_details()?;
    save_contact(book, Contact::new(name, phone, email, address))?;

    cli::pause();
    cli::clear_screen();
    Ok(())
}

fn delete_contact(book: &mut ContactBook) -> Result<(), AppError> {
    let name = cli::prompt("\nName of the contact to DELETE")?;

    book.delete(&name)?;
    println!("\nContact \"{}\" deleted successfully!", name);
    Ok(())
}

fn export_contacts(book: &ContactBook) -> Result<(), AppError> {
    let path = cli::prompt("\nEnter the filename for export (e.g. backup.csv)")?;

    let count = book.export_to(Path::new(&path))?;

    cli::clear_screen();
    println!("Successfully exported {} contacts to {}.", count, path);
    Ok(())
}

fn import_contacts(book: &mut ContactBook) -> Result<(), AppError> {
    let path = cli::prompt("\nEnter the filename to import from")?;

    // Each row takes the same save path as add/edit, so a later duplicate
    // name overwrites an earlier one.
    for contact in file::read_contacts(Path::new(&path))? {
        save_contact(book, contact)?;
    }

    Ok(())
}

// Shared by add, edit, and import. The store persists before the
// confirmation is printed.
fn save_contact(book: &mut ContactBook, contact: Contact) -> Result<(), AppError> {
    let name = contact.name.clone();
    book.upsert(contact)?;
    println!("\nContact \"{}\" saved successfully!", name);
    Ok(())
}
