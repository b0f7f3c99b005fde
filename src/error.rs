use thiserror::Error;

/// Reasons a piece of user input is not accepted as a number or menu choice
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no number was entered")]
    Empty,

    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),

    #[error("{value} is smaller than the minimum of {minimum}")]
    BelowMinimum { value: String, minimum: u64 },

    #[error("'{0}' does not fit in 64 bits")]
    TooLarge(String),

    #[error("'{0}' is not a menu option")]
    UnknownOption(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed while waiting for a {expected}")]
    InputClosed { expected: &'static str },
}

pub type Result<T> = std::result::Result<T, AppError>;
