use std::fmt;

/// Errors from reading or writing the high score file.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error other than a missing file (permission denied, disk full, ...)
    Io(std::io::Error),
    /// The file exists but does not hold a high score record.
    Decode(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Decode(_) => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bitcode::Error> for SaveError {
    fn from(e: bitcode::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_error_display_io() {
        let err = SaveError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_decode() {
        let err = SaveError::Decode("truncated".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Decoding error"), "got: {msg}");
    }

    #[test]
    fn test_save_error_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "test");
        let err: SaveError = io_err.into();
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&SaveError::Decode(String::new())).is_none());
    }
}
