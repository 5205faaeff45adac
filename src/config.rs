//! Optional TOML configuration for extending the keyword vocabularies.
//!
//! The core needs no configuration; a `.testmap.toml` only appends to the
//! built-in type-keyword sets. A missing default config file reads as the
//! empty config, while an explicitly requested file must exist.

use crate::core::errors::{Error, Result};
use crate::suggestion::signals::TypeVocabulary;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".testmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestmapConfig {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Extra numeric type names, e.g. `["Decimal", "Int64"]`.
    #[serde(default)]
    pub numeric_keywords: Vec<String>,
    /// Extra collection type names, e.g. `["Dictionary"]`.
    #[serde(default)]
    pub collection_keywords: Vec<String>,
    /// Extra failure markers for return clauses.
    #[serde(default)]
    pub failable_keywords: Vec<String>,
}

impl TestmapConfig {
    /// Load configuration. `Some(path)` must point at a readable file;
    /// `None` falls back to `.testmap.toml` in the working directory, and
    /// defaults when that is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| Error::read_input(path, e))?;
        let config: Self = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the effective vocabulary: defaults plus configured extensions.
    pub fn vocabulary(&self) -> TypeVocabulary {
        let mut vocab = TypeVocabulary::default();
        vocab.extend_numeric(self.vocabulary.numeric_keywords.iter().cloned());
        vocab.extend_collections(self.vocabulary.collection_keywords.iter().cloned());
        vocab.extend_failable(self.vocabulary.failable_keywords.iter().cloned());
        vocab
    }
}
