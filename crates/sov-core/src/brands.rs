use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// The brand the report is written for. At most one per file.
    Primary,
    Competitor,
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relationship::Primary => write!(f, "primary"),
            Relationship::Competitor => write!(f, "competitor"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    #[serde(default = "default_relationship")]
    pub relationship: Relationship,
    pub notes: Option<String>,
}

fn default_relationship() -> Relationship {
    Relationship::Competitor
}

impl BrandConfig {
    /// Case-folded identifier used for substring matching against result text.
    ///
    /// Matching is containment, not word matching: `"lg"` also matches
    /// `"bulgaria"`. That coarseness is part of how mentions are counted.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandConfig>,
}

impl BrandsFile {
    /// Identifiers of every tracked brand, in file order.
    #[must_use]
    pub fn tracked(&self) -> Vec<String> {
        self.brands.iter().map(BrandConfig::identifier).collect()
    }

    /// Identifier of the brand marked `relationship: primary`, if any.
    #[must_use]
    pub fn primary(&self) -> Option<String> {
        self.brands
            .iter()
            .find(|b| b.relationship == Relationship::Primary)
            .map(BrandConfig::identifier)
    }
}

/// Load and validate the brands configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    if brands_file.brands.is_empty() {
        return Err(ConfigError::Validation(
            "at least one brand must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let mut primary: Option<&str> = None;

    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        if !seen.insert(brand.identifier()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }

        if brand.relationship == Relationship::Primary {
            if let Some(existing) = primary {
                return Err(ConfigError::Validation(format!(
                    "only one primary brand is allowed; found '{existing}' and '{}'",
                    brand.name
                )));
            }
            primary = Some(&brand.name);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
