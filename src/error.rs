use std::fmt;

/// Error type for the I/O edges of the crate.
///
/// Track construction, flag decoding and the packed counter are total and
/// never produce one of these; only reading fix batches and writing exports do.
#[derive(Debug)]
pub enum LiveTrackError {
    /// I/O errors
    Io(std::io::Error),
    /// JSON (de)serialization errors
    #[cfg(feature = "json")]
    Json(serde_json::Error),
    /// CSV writer errors
    #[cfg(feature = "csv")]
    Csv(csv::Error),
    /// Input batch could not be interpreted
    InvalidInput(String),
    /// Export format error
    Export(String),
}

impl fmt::Display for LiveTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveTrackError::Io(err) => write!(f, "I/O error: {}", err),
            #[cfg(feature = "json")]
            LiveTrackError::Json(err) => write!(f, "JSON error: {}", err),
            #[cfg(feature = "csv")]
            LiveTrackError::Csv(err) => write!(f, "CSV error: {}", err),
            LiveTrackError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            LiveTrackError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for LiveTrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LiveTrackError::Io(err) => Some(err),
            #[cfg(feature = "json")]
            LiveTrackError::Json(err) => Some(err),
            #[cfg(feature = "csv")]
            LiveTrackError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LiveTrackError {
    fn from(err: std::io::Error) -> Self {
        LiveTrackError::Io(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for LiveTrackError {
    fn from(err: serde_json::Error) -> Self {
        LiveTrackError::Json(err)
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for LiveTrackError {
    fn from(err: csv::Error) -> Self {
        LiveTrackError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, LiveTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = LiveTrackError::InvalidInput("expected an array".to_string());
        assert_eq!(err.to_string(), "Invalid input: expected an array");
    }

    #[test]
    fn test_io_error_has_source() {
        let err: LiveTrackError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
