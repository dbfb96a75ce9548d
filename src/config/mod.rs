use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::tags::Tags;

/// A catalog file: tagged products plus optional named queries.
#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub queries: HashMap<String, Vec<String>>,
}

impl CatalogConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .with_context(|| format!("Config: Failed to read catalog {:?}", path))?;
        settings
            .try_deserialize()
            .with_context(|| format!("Config: Invalid catalog {:?}", path))
    }

    /// Names of the stored queries, sorted.
    pub fn query_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.queries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Tags,
}
