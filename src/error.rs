use std::fmt;

/// Custom error types for GPX report generation
#[derive(Debug)]
pub enum GpxError {
    /// I/O errors
    Io(std::io::Error),
    /// XML syntax errors reported by the reader
    Xml(String),
    /// Structurally invalid GPX document
    MalformedDocument(String),
    /// CSV rendering error
    Export(String),
}

impl fmt::Display for GpxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpxError::Io(err) => write!(f, "I/O error: {}", err),
            GpxError::Xml(msg) => write!(f, "XML error: {}", msg),
            GpxError::MalformedDocument(msg) => write!(f, "Malformed document: {}", msg),
            GpxError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for GpxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpxError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GpxError {
    fn from(err: std::io::Error) -> Self {
        GpxError::Io(err)
    }
}

impl From<quick_xml::Error> for GpxError {
    fn from(err: quick_xml::Error) -> Self {
        GpxError::Xml(err.to_string())
    }
}

impl From<csv::Error> for GpxError {
    fn from(err: csv::Error) -> Self {
        GpxError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GpxError>;
