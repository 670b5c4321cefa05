use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("Class {0} is not registered")]
    UnknownClass(String),

    #[error("Method {method} not found for class {class}")]
    UnknownMethod { class: String, method: String },

    #[error("Class {0} inherits from itself")]
    CyclicBases(String),
}

impl Error {
    /// The reader of our output went away (e.g. `animals | head -1`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(error) if error.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Exit status the binary should report for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(..) if self.is_broken_pipe() => 0,
            Error::Io(..) => 2,
            Error::UnknownClass(..) | Error::UnknownMethod { .. } | Error::CyclicBases(..) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let error = Error::UnknownClass("project::Cow".into());
        assert_eq!(error.to_string(), "Class project::Cow is not registered");
        assert_eq!(error.exit_code(), 1);

        let error = Error::UnknownMethod {
            class: "project::Dog".into(),
            method: "bark".into(),
        };
        assert_eq!(
            error.to_string(),
            "Method bark not found for class project::Dog"
        );
    }

    #[test]
    fn cyclic_message() {
        let error = Error::CyclicBases("project::Ping".into());
        assert_eq!(error.to_string(), "Class project::Ping inherits from itself");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn from_io() {
        let error: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(error, Error::Io(..)));
        assert!(!error.is_broken_pipe());
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn broken_pipe_exits_cleanly() {
        let error: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(error.is_broken_pipe());
        assert_eq!(error.exit_code(), 0);
    }
}
