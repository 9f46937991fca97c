use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Csv(csv::Error),
    NotFound(String),
    ParseCommand(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "CSV read/write failed: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact \"Alice\"".to_string());

        assert_eq!(format!("{}", err), "Contact \"Alice\" Not found");
    }

    #[test]
    fn confirm_parse_command_message() {
        let err = AppError::ParseCommand("9".to_string());

        assert_eq!(format!("{}", err), "Unrecognized command: '9'");
    }

    #[test]
    fn io_error_converts_through_question_mark() {
        fn fails() -> Result<(), AppError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(format!("{}", err).contains("I/O error while accessing"));
    }
}
