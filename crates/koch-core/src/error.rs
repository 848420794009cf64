use std::fmt;

/// A startup depth argument that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDepthError {
    /// The argument as given on the command line.
    pub input: String,
}

impl ParseDepthError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

impl fmt::Display for ParseDepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "argument {:?} can't be converted to an integer", self.input)
    }
}

impl std::error::Error for ParseDepthError {}
