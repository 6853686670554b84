use thiserror::Error;

/// Core error types for DataWhisper
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Share composer precondition failed
    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    /// Sign-in was refused
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Upload could not be submitted
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
}

/// Preconditions checked by the share composer before acting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("{0} is already in your contacts")]
    ContactExists(String),

    #[error("no visualizations selected")]
    NoVisualizations,

    #[error("no recipients selected")]
    NoRecipients,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("'{0}' is not a CSV file")]
    NotCsv(String),

    #[error("no file selected")]
    NoFileSelected,
}

/// A user-facing title and description for an error or a success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl ShareError {
    /// Translates the error into the message shown to the user
    pub fn notice(&self) -> Notice {
        match self {
            Self::InvalidEmail(_) => {
                Notice::new("Invalid email", "Please enter a valid email address.")
            }
            Self::ContactExists(_) => Notice::new(
                "Contact exists",
                "This email is already in your contacts list.",
            ),
            Self::NoVisualizations => Notice::new(
                "No visualizations selected",
                "Please select at least one visualization to share.",
            ),
            Self::NoRecipients => Notice::new(
                "No recipients selected",
                "Please select at least one recipient.",
            ),
        }
    }
}

impl Error {
    /// Translates any error into the message shown to the user
    pub fn notice(&self) -> Notice {
        match self {
            Self::Share(e) => e.notice(),
            Self::Auth(AuthError::InvalidCredentials) => Notice::new(
                "Login failed",
                format!(
                    "Invalid credentials. Try {} / {}",
                    crate::core::seed::DEMO_EMAIL,
                    crate::core::seed::DEMO_PASSWORD
                ),
            ),
            Self::Upload(UploadError::NotCsv(_)) => {
                Notice::new("Invalid file type", "Please upload a CSV file.")
            }
            Self::Upload(UploadError::NoFileSelected) => {
                Notice::new("No file selected", "Please select a CSV file to upload.")
            }
            Self::Io(e) => Notice::new("I/O error", e.to_string()),
            Self::Serialization(e) => Notice::new("Invalid data", e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
