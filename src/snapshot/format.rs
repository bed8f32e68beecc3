//! Document format detection and reading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, fs};

/// Serialized document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    pub(crate) fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Read a document, mapping IO failures onto file errors
pub(crate) fn read_document(path: &Path) -> Result<(String, DocumentFormat)> {
    if !path.is_file() {
        return Err(fs::not_found(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
    Ok((content, DocumentFormat::from_path(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a")), DocumentFormat::Yaml);
    }

    #[test]
    fn test_read_missing_document() {
        let err = read_document(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, crate::error::PkgrefError::FileNotFound { .. }));
    }
}
