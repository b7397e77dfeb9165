//! Ordered list of node endpoints with round-robin rotation.
//!
//! The list is read from a JSON document of the form
//! `{"nodes": ["http://node1", "http://node2"]}`.

use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or rotating a provider list.
#[derive(Debug, Error)]
pub enum ProviderListError {
    #[error("Providers file path cannot be empty")]
    EmptyPath,

    #[error("Failed to read providers file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON format in providers file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No HTTP providers available")]
    Empty,
}

/// Node endpoints plus the index of the one currently in use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderList {
    urls: Vec<String>,
    index: usize,
}

impl ProviderList {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls, index: 0 }
    }

    /// Load providers from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderListError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ProviderListError::EmptyPath);
        }
        let content = fs::read_to_string(path)?;
        let list = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), count = list.len(), "Loaded RPC providers");
        Ok(list)
    }

    /// Parse providers from JSON text.
    ///
    /// A document without a `nodes` array yields an empty list, and
    /// non-string entries are skipped.
    pub fn from_json_str(content: &str) -> Result<Self, ProviderListError> {
        let doc: Value = serde_json::from_str(content)?;
        let urls = doc
            .get("nodes")
            .and_then(Value::as_array)
            .map(|nodes| {
                nodes
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self::new(urls))
    }

    /// URL currently selected, if any.
    pub fn current(&self) -> Option<&str> {
        self.urls.get(self.index).map(String::as_str)
    }

    /// Switch to the next provider, wrapping around at the end.
    pub fn advance(&mut self) -> Result<&str, ProviderListError> {
        if self.urls.is_empty() {
            return Err(ProviderListError::Empty);
        }
        self.index = (self.index + 1) % self.urls.len();
        Ok(&self.urls[self.index])
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
