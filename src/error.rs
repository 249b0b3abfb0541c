use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid length '{0}': must be a positive integer")]
    InvalidLength(String),

    #[error("Length {0} is too large to allocate")]
    LengthTooLarge(u64),

    #[error("No character class selected: choose at least one of letters, digits or symbols")]
    NoCharacterClassSelected,

    #[error("Input error: {0}")]
    Input(String),
}

impl From<std::io::Error> for PasswordError {
    fn from(e: std::io::Error) -> Self {
        PasswordError::Input(e.to_string())
    }
}
