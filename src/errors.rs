use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum CredVaultError {
    // --- Engine errors ---
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("An entry named '{0}' with the same password already exists")]
    DuplicateEntry(String),

    #[error("Entry '{0}' not found")]
    NotFound(String),

    #[error("Authentication denied; password does not match this entry")]
    AuthenticationDenied,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // --- Vault data errors ---
    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Confirmation for '{0}' expired; run the command again")]
    ConfirmationExpired(String),

    #[error("Audit error: {0}")]
    AuditError(String),
}

/// Payload-free discriminant of [`CredVaultError`], for callers that
/// render a message per failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    DuplicateEntry,
    NotFound,
    AuthenticationDenied,
    StorageUnavailable,
    InvalidVaultFormat,
    Config,
    Io,
    Command,
}

impl CredVaultError {
    /// Which failure kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateEntry(_) => ErrorKind::DuplicateEntry,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AuthenticationDenied => ErrorKind::AuthenticationDenied,
            Self::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            Self::InvalidVaultFormat(_) => ErrorKind::InvalidVaultFormat,
            Self::ConfigError(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::CommandFailed(_)
            | Self::UserCancelled
            | Self::ConfirmationExpired(_)
            | Self::AuditError(_) => ErrorKind::Command,
        }
    }

    /// Wrap a backing-store failure.
    pub(crate) fn storage(op: &str, err: &std::io::Error) -> Self {
        Self::StorageUnavailable(format!("{op}: {err}"))
    }
}

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, CredVaultError>;
