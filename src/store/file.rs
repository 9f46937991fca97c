use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::domain::Contact;
use crate::errors::AppError;
use crate::store::ContactStore;

/// Default persistence target, auto-loaded at startup and rewritten after
/// every mutation.
pub const DATABASE_PATH: &str = "./database.csv";

/// Flat-file backend over `name;phone;email;address` rows, one per line,
/// no header, no quoting or escaping. A field value containing `;` or a
/// newline corrupts its row boundary; callers must keep those out of fields.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvStore { path: path.into() }
    }
}

impl ContactStore for CsvStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A missing database file is a fresh start, not an error.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        read_contacts(&self.path)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        write_contacts(&self.path, contacts)?;
        Ok(())
    }
}

/// Reads every well-formed row from `path`. Rows that do not split into
/// exactly four `;`-separated fields are skipped without being reported.
pub fn read_contacts(path: &Path) -> Result<Vec<Contact>, AppError> {
    if !path.exists() {
        return Err(AppError::NotFound(format!("File {}", path.display())));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)?;

    let mut contacts = Vec::new();

    for result in reader.records() {
        let record = result?;

        if record.len() != 4 {
            continue;
        }

        contacts.push(record.deserialize(None)?);
    }

    Ok(contacts)
}

/// Overwrites `path` with one row per contact, returning the record count.
pub fn write_contacts(path: &Path, contacts: &[Contact]) -> Result<u64, AppError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_path(path)?;

    let mut counter: u64 = 0;

    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    Ok(counter)
}
