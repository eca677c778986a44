//! Validation errors raised before any turn is run

/// Error types for race setup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RaceError {
    #[error("Car name must not be blank")]
    BlankName,

    #[error("Car name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("Duplicate car name: {0}")]
    DuplicateName(String),

    #[error("At least one car is required")]
    EmptyParticipants,

    #[error("Invalid game count '{0}': must be a positive integer")]
    InvalidCount(String),
}

pub type Result<T> = std::result::Result<T, RaceError>;
