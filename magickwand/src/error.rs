use std::ffi::NulError;

use crate::types::{ExceptionType, Severity, UnknownValue};

pub type ResultKind<T> = std::result::Result<T, ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    operation: Option<&'static str>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.kind.to_string())?;

        if let Some(operation) = self.operation {
            f.write_str(" (in ")?;
            f.write_str(operation)?;
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl Error {
    pub fn from_kind(kind: ErrorKind) -> Self {
        Error {
            kind,
            operation: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Name of the native entry point that reported the error
    pub fn operation(&self) -> Option<&'static str> {
        self.operation
    }

    /// The native exception, if the error was reported by the native library
    pub fn exception(&self) -> Option<&Exception> {
        match &self.kind {
            ErrorKind::Native(exception) => Some(exception),
            _ => None,
        }
    }

    /// Severity of the native exception
    pub fn severity(&self) -> Option<Severity> {
        self.exception().and_then(Exception::severity)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

pub trait ResultExt<T> {
    fn err_operation(self, operation: &'static str) -> Result<T>;
    fn err_no_context(self) -> Result<T>;
}

impl<T> ResultExt<T> for ResultKind<T> {
    fn err_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|kind| Error {
            kind,
            operation: Some(operation),
        })
    }

    fn err_no_context(self) -> Result<T> {
        self.map_err(Error::from_kind)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("{0}")]
    Native(Exception),
    #[error("Native call did not return a handle")]
    NullHandle,
    #[error("Native call failed without reporting an exception")]
    OperationFailed,
    #[error("String can not be passed to the native library: {0}")]
    InteriorNul(#[from] NulError),
    #[error("{0}")]
    UnknownValue(#[from] UnknownValue),
    #[error("Resource limit {limit} for {resource} was refused")]
    ResourceLimit { resource: String, limit: u64 },
}

/// Exception recorded by the native library on a handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    exception_type: ExceptionType,
    message: String,
}

impl Exception {
    pub fn new(exception_type: ExceptionType, message: String) -> Self {
        Self {
            exception_type,
            message,
        }
    }

    pub fn exception_type(&self) -> ExceptionType {
        self.exception_type
    }

    pub fn severity(&self) -> Option<Severity> {
        self.exception_type.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Exception {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity() {
            Some(severity) => write!(f, "{severity} {}: {}", self.exception_type, self.message),
            None => write!(f, "{}: {}", self.exception_type, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_operation() {
        let exception = Exception::new(ExceptionType::WAND_ERROR, "ContainsNoImages".into());
        let err = Err::<(), _>(ErrorKind::Native(exception))
            .err_operation("MagickBlurImage")
            .unwrap_err();

        assert_eq!(err.severity(), Some(Severity::Error));
        assert_eq!(err.operation(), Some("MagickBlurImage"));
        assert_eq!(
            err.to_string(),
            "error WandError (470): ContainsNoImages (in MagickBlurImage)"
        );
    }

    #[test]
    fn interior_nul() {
        let nul = std::ffi::CString::new("a\0b").unwrap_err();
        let err = Error::from(ErrorKind::from(nul));

        assert!(err.exception().is_none());
        assert!(err.severity().is_none());
    }
}
