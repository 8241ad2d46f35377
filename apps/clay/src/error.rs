//! CLI error handling

use std::fmt;

use clay_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration or descriptor error
    Clay(clay_errors::Error),
    /// The descriptor assembled into an invalid record
    Invalid { problems: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Clay(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Invalid { problems: 1 } => write!(f, "1 problem found"),
            CliError::Invalid { problems } => write!(f, "{problems} problems found"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Clay(e) => Some(e),
            CliError::Invalid { .. } => None,
        }
    }
}

impl From<clay_errors::Error> for CliError {
    fn from(e: clay_errors::Error) -> Self {
        CliError::Clay(e)
    }
}
