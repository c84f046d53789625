//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Directory
    /// Posts directory, relative to the site base directory
    pub posts_dir: String,

    // URL
    /// Prefix joined with a post slug to form its permalink
    pub permalink_prefix: String,

    // Writing
    pub words_per_minute: usize,
    pub render_drafts: bool,

    // Home page
    pub recent_posts: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            author: String::new(),
            url: "http://localhost".to_string(),

            posts_dir: "posts".to_string(),

            permalink_prefix: "/blog".to_string(),

            words_per_minute: 200,
            render_drafts: false,

            recent_posts: 5,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
