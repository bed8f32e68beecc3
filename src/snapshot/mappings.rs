//! Type database loaded from a mappings document
//!
//! ```yaml
//! types:
//!   - name: Actor
//!     super: Object
//!   - name: Object
//!   - name: HeroStats
//!     super: TableRowBase
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::format::{DocumentFormat, read_document};
use crate::error::{Result, snapshot::mappings_parse_failed};
use crate::package::{TypeDescriptor, TypeOracle};

/// Type descriptors keyed by type name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MappingsDocument", into = "MappingsDocument")]
pub struct TypeMappings {
    types: HashMap<String, TypeDescriptor>,
}

#[derive(Serialize, Deserialize)]
struct MappingsDocument {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

impl From<MappingsDocument> for TypeMappings {
    fn from(document: MappingsDocument) -> Self {
        document.types.into_iter().collect()
    }
}

impl From<TypeMappings> for MappingsDocument {
    fn from(mappings: TypeMappings) -> Self {
        let mut types: Vec<TypeDescriptor> = mappings.types.into_values().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Self { types }
    }
}

impl FromIterator<TypeDescriptor> for TypeMappings {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        Self {
            types: iter
                .into_iter()
                .map(|descriptor| (descriptor.name.clone(), descriptor))
                .collect(),
        }
    }
}

impl TypeMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Load mappings from a YAML or JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (content, format) = read_document(path)?;
        format
            .parse(&content)
            .map_err(|reason| mappings_parse_failed(path.display().to_string(), reason))
    }

    /// # Errors
    ///
    /// Returns an error if the document is not valid mappings YAML.
    pub fn from_yaml(content: &str) -> Result<Self> {
        DocumentFormat::Yaml
            .parse(content)
            .map_err(|reason| mappings_parse_failed("<yaml>", reason))
    }

    /// # Errors
    ///
    /// Returns an error if the document is not valid mappings JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        DocumentFormat::Json
            .parse(content)
            .map_err(|reason| mappings_parse_failed("<json>", reason))
    }
}

impl TypeOracle for TypeMappings {
    fn lookup(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }
}
