pub use crate::cli::{self, command, run_app};
pub use crate::domain::{Contact, ContactBook};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, file::CsvStore};
