/// Application-level errors
///
/// Parse failures and unknown-game lookups are deliberately NOT errors:
/// they surface as validity flags and fallback defaults the caller checks.
/// Only catalog construction and console I/O reach this enum.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
