use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotGranted {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // Raised after every listener has been notified, when one or more of them failed.
    // The book that triggered the notification stays in the catalog under book_id.
    Notification {
        message: String,
        book_id: String,
        failed_listeners: usize,
    },
    Io {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_granted(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::NotGranted { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn notification(message: &str, book_id: &str, failed_listeners: usize) -> LibraryError {
        LibraryError::Notification { message: message.to_string(), book_id: book_id.to_string(), failed_listeners }
    }

    pub fn io(message: &str) -> LibraryError {
        LibraryError::Io { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(
            format!("io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotGranted { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Notification { message, failed_listeners, .. } => {
                write!(f, "{} ({} failed)", message, failed_listeners)
            }
            LibraryError::Io { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// PatronTier separates guests, who can only browse, from members who can borrow.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum PatronTier {
    Guest,
    Subscriber,
}

impl TryFrom<&str> for PatronTier {
    type Error = LibraryError;

    fn try_from(s: &str) -> LibraryResult<Self> {
        match s {
            "Guest" => Ok(PatronTier::Guest),
            "Subscriber" => Ok(PatronTier::Subscriber),
            other => Err(LibraryError::validation(
                format!("unknown patron tier {}", other).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for PatronTier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PatronTier::Guest => write!(f, "Guest"),
            PatronTier::Subscriber => write!(f, "Subscriber"),
        }
    }
}
