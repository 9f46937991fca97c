use crate::errors::AppError;

/// Menu actions reachable from the main loop, one per option token.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    ListContacts,
    SearchContact,
    AddContact,
    EditContact,
    DeleteContact,
    ExportContacts,
    ImportContacts,
}

pub fn get_command(action: &str) -> Result<Command, AppError> {
    match action {
        "0" => Ok(Command::Exit),
        "1" => Ok(Command::ListContacts),
        "2" => Ok(Command::SearchContact),
        "3" => Ok(Command::AddContact),
        "4" => Ok(Command::EditContact),
        "5" => Ok(Command::DeleteContact),
        "6" => Ok(Command::ExportContacts),
        "7" => Ok(Command::ImportContacts),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}
