use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write the seeded opt-in file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to serialize the seeded opt-in users.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
