//! Document adapters for the [`FieldSource`] port.

mod interpret;
pub mod json;
pub mod toml;

pub use json::JsonDocument;
pub use self::toml::TomlDocument;

use std::{fmt, path::Path, str::FromStr};

use tracing::debug;

use micromap_core::{
    application::{ApplicationError, DocumentMapper, FieldSource, MappingPlan},
    domain::Record,
    error::{MicromapError, MicromapResult},
};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> MicromapResult<Self> {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return Err(ApplicationError::MissingExtension {
                path: path.to_path_buf(),
            }
            .into());
        };

        extension.parse()
    }

    /// Parse `text` in this format.
    pub fn parse(self, text: &str) -> MicromapResult<Box<dyn FieldSource>> {
        Ok(match self {
            Self::Json => Box::new(JsonDocument::parse(text)?),
            Self::Toml => Box::new(TomlDocument::parse(text)?),
        })
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = MicromapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ApplicationError::UnsupportedFormat {
                extension: other.to_string(),
            }
            .into()),
        }
    }
}

/// Load a document, picking the adapter from the file extension.
pub fn load_document(path: impl AsRef<Path>) -> MicromapResult<Box<dyn FieldSource>> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    debug!(%format, path = %path.display(), "Loading document");

    Ok(match format {
        DocumentFormat::Json => Box::new(JsonDocument::from_path(path)?),
        DocumentFormat::Toml => Box::new(TomlDocument::from_path(path)?),
    })
}

/// Parse `json` and write its values into `destination`.
pub fn map_json<D: Record>(json: &str, destination: &mut D) -> MicromapResult<MappingPlan> {
    let document = JsonDocument::parse(json)?;
    DocumentMapper::new(&document, destination).execute()
}

/// Load the document at `path` and write its values into `destination`.
pub fn map_document<D: Record>(
    path: impl AsRef<Path>,
    destination: &mut D,
) -> MicromapResult<MappingPlan> {
    let document = load_document(path)?;
    DocumentMapper::new(&document, destination).execute()
}
