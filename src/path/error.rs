use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// A serialized path ending in an odd run of escape markers, which leaves the
/// last marker with nothing to escape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    input: String,
    offset: usize,
}

impl DecodeError {
    pub fn new(input: impl Into<String>, offset: usize) -> Self {
        Self {
            input: input.into(),
            offset,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the offending escape marker.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Error for DecodeError {}

impl Display for DecodeError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "malformed path encoding \"{}\": invalid escape sequence at byte {}",
            self.input, self.offset
        )
    }
}
