use std::path::Path;

use crate::domain::Contact;
use crate::errors::AppError;
use crate::store::{ContactStore, file};

/// The in-memory record store. Contacts are kept in insertion order and
/// looked up by exact name; every mutation rewrites the backing store so the
/// persisted file mirrors memory.
pub struct ContactBook {
    mem: Vec<Contact>,
    store: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        ContactBook {
            mem: Vec::new(),
            store,
        }
    }

    /// Replaces memory with the backing store's contents and reports how many
    /// records came back.
    pub fn load(&mut self) -> Result<usize, AppError> {
        self.mem = self.store.load()?;
        Ok(self.mem.len())
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.mem.iter().find(|cont| cont.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert-or-overwrite keyed by name. An existing contact keeps its
    /// position in the list; a new one is appended.
    pub fn upsert(&mut self, contact: Contact) -> Result<(), AppError> {
        if let Some(index) = self.mem.iter().position(|cont| cont.name == contact.name) {
            self.mem[index] = contact;
        } else {
            self.mem.push(contact);
        }

        self.store.save(&self.mem)
    }

    pub fn delete(&mut self, name: &str) -> Result<(), AppError> {
        let index = self
            .mem
            .iter()
            .position(|cont| cont.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Contact \"{}\"", name)))?;

        self.mem.remove(index);
        self.store.save(&self.mem)
    }

    /// Writes the full store to an arbitrary path, returning the record count.
    pub fn export_to(&self, path: &Path) -> Result<u64, AppError> {
        file::write_contacts(path, &self.mem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::file::CsvStore;
    use tempfile::TempDir;

    fn book_in(dir: &TempDir) -> ContactBook {
        ContactBook::new(Box::new(CsvStore::new(dir.path().join("database.csv"))))
    }

    fn alice() -> Contact {
        Contact::new(
            "Alice".to_string(),
            "555-1111".to_string(),
            "a@x.com".to_string(),
            "1 Main St".to_string(),
        )
    }

    fn bob() -> Contact {
        Contact::new(
            "Bob".to_string(),
            "555-2222".to_string(),
            "b@x.com".to_string(),
            "2 Oak Ave".to_string(),
        )
    }

    #[test]
    fn upsert_is_idempotent() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let mut book = book_in(&dir);

        book.upsert(alice())?;
        book.upsert(alice())?;

        assert_eq!(book.contact_list(), &[alice()]);
        Ok(())
    }

    #[test]
    fn upsert_overwrites_in_place() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let mut book = book_in(&dir);

        book.upsert(alice())?;
        book.upsert(bob())?;

        let mut updated = alice();
        updated.phone = "555-9999".to_string();
        book.upsert(updated.clone())?;

        // Alice keeps her slot ahead of Bob.
        assert_eq!(book.contact_list(), &[updated, bob()]);
        Ok(())
    }

    #[test]
    fn delete_then_get_reports_absent() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let mut book = book_in(&dir);

        book.upsert(alice())?;
        book.delete("Alice")?;

        assert!(book.get("Alice").is_none());
        assert!(book.contact_list().is_empty());
        Ok(())
    }

    #[test]
    fn delete_absent_is_not_found_and_leaves_store_unchanged() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let mut book = book_in(&dir);

        book.upsert(alice())?;

        let err = book.delete("Bob").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(book.contact_list(), &[alice()]);
        Ok(())
    }

    #[test]
    fn mutations_mirror_into_the_backing_file() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let mut book = book_in(&dir);

        book.upsert(alice())?;
        book.upsert(bob())?;
        book.delete("Alice")?;

        // A second book over the same file sees exactly the surviving state.
        let mut reloaded = book_in(&dir);
        assert_eq!(reloaded.load()?, 1);
        assert_eq!(reloaded.contact_list(), &[bob()]);
        Ok(())
    }

    #[test]
    fn load_on_missing_file_starts_empty() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let mut book = book_in(&dir);

        assert_eq!(book.load()?, 0);
        assert!(book.contact_list().is_empty());
        Ok(())
    }
}
