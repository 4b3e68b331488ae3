//! The model catalog: public aliases mapped to upstream model identifiers.
//!
//! Callers select a model by a short alias; the relay only ever sends the
//! resolved upstream identifier to the provider. The table is fixed at
//! construction and validated so the default alias is always resolvable.

use thiserror::Error;

/// Alias used when a request does not name a model.
pub const DEFAULT_MODEL_ALIAS: &str = "stable-diffusion-xl";

/// Built-in alias table.
const BUILTIN_MODELS: &[(&str, &str)] = &[
    ("flux", "black-forest-labs/FLUX.1-dev"),
    ("stable-diffusion-xl", "stabilityai/stable-diffusion-xl-base-1.0"),
];

/// Errors from catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no entries.
    #[error("Model catalog is empty")]
    Empty,

    /// An alias appears more than once.
    #[error("Duplicate model alias: {alias}")]
    DuplicateAlias {
        /// The repeated alias
        alias: String,
    },

    /// The default alias does not resolve to any entry.
    #[error("Default model alias '{alias}' is not in the catalog")]
    UnknownDefault {
        /// The alias that failed to resolve
        alias: String,
    },
}

/// Fixed mapping from public model aliases to upstream model identifiers.
///
/// Entries keep their insertion order so the UI can render a stable model
/// selector. Every catalog has a default alias that is guaranteed to be
/// present in the table.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: Vec<(String, String)>,
    default_alias: String,
}

impl ModelCatalog {
    /// Build a catalog from alias/identifier pairs.
    pub fn new<A, M>(
        entries: impl IntoIterator<Item = (A, M)>,
        default_alias: impl Into<String>,
    ) -> Result<Self, CatalogError>
    where
        A: Into<String>,
        M: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(alias, id)| (alias.into(), id.into()))
            .collect();

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, (alias, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == alias) {
                return Err(CatalogError::DuplicateAlias {
                    alias: alias.clone(),
                });
            }
        }

        let catalog = Self {
            entries,
            default_alias: default_alias.into(),
        };

        if catalog.resolve(&catalog.default_alias).is_none() {
            return Err(CatalogError::UnknownDefault {
                alias: catalog.default_alias,
            });
        }

        Ok(catalog)
    }

    /// The built-in catalog of supported models.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_MODELS.iter().copied(), DEFAULT_MODEL_ALIAS)
            .expect("built-in catalog is valid")
    }

    /// Replace the default alias, keeping the table unchanged.
    pub fn with_default_alias(self, alias: impl Into<String>) -> Result<Self, CatalogError> {
        Self::new(self.entries, alias)
    }

    /// Resolve an alias to its upstream model identifier.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == alias)
            .map(|(_, id)| id.as_str())
    }

    /// The alias used when a request names no model.
    pub fn default_alias(&self) -> &str {
        &self.default_alias
    }

    /// Iterate entries as `(alias, upstream identifier)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, id)| (alias.as_str(), id.as_str()))
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries. Always false for valid catalogs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
