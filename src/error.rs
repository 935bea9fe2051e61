//! Error type for the writer-based greeter operations

use thiserror::Error;

/// Errors returned by operations that write greetings to an output stream.
///
/// Formatting a greeting never fails; only the write can.
#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("failed to write greeting: {0}")]
    Output(#[from] std::io::Error),
}

impl GreeterError {
    /// True when the reader on the other end of the stream went away (e.g. `greeter | head -1`)
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            GreeterError::Output(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_broken_pipe_detection() {
        let err = GreeterError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.is_broken_pipe());

        let err = GreeterError::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_display_includes_source() {
        let err = GreeterError::from(io::Error::new(io::ErrorKind::Other, "stream gone"));
        assert_eq!(err.to_string(), "failed to write greeting: stream gone");
    }
}
