//! folio: markdown post loader for a personal website
//!
//! Reads a directory of markdown posts with YAML front-matter, renders them
//! to HTML and derives the excerpt, reading time and relative date that the
//! site's listings show.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Posts directory
    pub posts_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Load every published post, newest first
    pub async fn load_posts(&self) -> Result<Vec<content::Post>, content::ContentError> {
        content::ContentLoader::new(self).load_posts().await
    }

    /// Load published posts carrying `tag`, newest first
    pub async fn posts_tagged(
        &self,
        tag: &str,
    ) -> Result<Vec<content::Post>, content::ContentError> {
        let posts = self.load_posts().await?;
        Ok(helpers::filter_by_tag(&posts, tag)
            .into_iter()
            .cloned()
            .collect())
    }
}
