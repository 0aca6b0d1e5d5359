//! File-backed record source: JSON and TOML.

use std::{fmt, io, path::Path};

use tracing::{debug, instrument};

use clientcheck_core::{
    application::{ApplicationError, ports::RecordSource},
    domain::ClientRecord,
    error::CoreResult,
};

/// Serialisation format of a record file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Toml,
}

impl RecordFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse a record from `content` in this format.
    pub fn parse(self, content: &str) -> Result<ClientRecord, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Toml => "toml",
        })
    }
}

/// Production record source reading one record per file with `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRecordSource;

impl FileRecordSource {
    /// Create a new file record source.
    pub fn new() -> Self {
        Self
    }
}

impl RecordSource for FileRecordSource {
    #[instrument(skip(self))]
    fn load(&self, location: &str) -> CoreResult<ClientRecord> {
        let path = Path::new(location);

        let format = RecordFormat::from_path(path).ok_or_else(|| {
            ApplicationError::UnsupportedFormat {
                location: location.to_owned(),
                format: path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            }
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| map_io_error(location, e))?;
        debug!(%format, bytes = content.len(), "Read client record");

        let record = format
            .parse(&content)
            .map_err(|reason| ApplicationError::Malformed {
                location: location.to_owned(),
                reason,
            })?;

        Ok(record)
    }
}

fn map_io_error(location: &str, e: io::Error) -> clientcheck_core::error::CoreError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::RecordNotFound {
            location: location.to_owned(),
        },
        _ => ApplicationError::SourceFailed {
            location: location.to_owned(),
            reason: format!("Failed to read file: {}", e),
        },
    }
    .into()
}
