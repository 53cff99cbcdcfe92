use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("shared target '{target}' is already borrowed")]
    AlreadyBorrowed { target: &'static str },

    // A previous holder panicked while it had exclusive access.
    #[error("shared target '{target}' is poisoned")]
    Poisoned { target: &'static str },
}
