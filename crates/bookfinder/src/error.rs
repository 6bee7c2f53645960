pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when searching the catalog.
///
/// The kind is kept for logging; callers showing a message to a user are expected to treat every
/// failed search the same way.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be sent or the catalog answered with a non-success status.
    Request,
    /// The response body is not a valid catalog response.
    Decode,
    /// The input given by the user cannot be used, such as an unknown filter name.
    InvalidInput,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Request => "catalog request failed",
            Self::Decode => "catalog response could not be read",
            Self::InvalidInput => "invalid input",
        })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, " ({cause})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::InvalidInput, "Unknown filter 'x'");
        assert_eq!("invalid input: Unknown filter 'x'", err.to_string());
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn wrapped_error_is_the_source() {
        let inner = Error::new(ErrorKind::Request, "Network error");
        let err = Error::wrap(ErrorKind::Decode, inner);

        assert_eq!(
            "catalog response could not be read (catalog request failed: Network error)",
            err.to_string()
        );
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(ErrorKind::Decode, err.kind());
    }
}
