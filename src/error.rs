use scope_path::DecodeError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Decode(DecodeError),
    Other(String),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Decode(error) => write!(formatter, "{}", error),
            Self::Other(message) => write!(formatter, "{}", message),
        }
    }
}

impl From<Box<dyn Error>> for ApplicationError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<DecodeError> for ApplicationError {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}
