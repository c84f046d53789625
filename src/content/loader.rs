//! Content loader - loads posts from the posts directory

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use super::error::{ContentError, Result};
use super::post::{permalink, slug_from_file_name};
use super::{FrontMatter, MarkdownRenderer, Post};
use crate::config::SiteConfig;
use crate::helpers::{parse_date_string, reading_time, relative_date};
use crate::Site;

/// Settings that shape every post of a load
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub permalink_prefix: String,
    pub words_per_minute: usize,
    pub include_drafts: bool,
}

impl LoadOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            permalink_prefix: config.permalink_prefix.clone(),
            words_per_minute: config.words_per_minute,
            include_drafts: config.render_drafts,
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Loads posts from a single directory
pub struct ContentLoader {
    posts_dir: PathBuf,
    options: Arc<LoadOptions>,
}

impl ContentLoader {
    /// Create a loader for a site's posts directory
    pub fn new(site: &Site) -> Self {
        Self::with_options(&site.posts_dir, LoadOptions::from_config(&site.config))
    }

    /// Create a loader for an explicit directory
    pub fn with_options<P: AsRef<Path>>(posts_dir: P, options: LoadOptions) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            options: Arc::new(options),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Every post file in the directory, without recursion.
    /// Hidden entries and anything that is not a file are skipped.
    pub async fn post_files(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.posts_dir;

        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| ContentError::io(dir, e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ContentError::io(dir, e))?
        {
            let path = entry.path();
            if is_hidden(&path) {
                tracing::debug!("Skipping hidden entry {:?}", path);
                continue;
            }
            let metadata = tokio::fs::metadata(&path)
                .await
                .map_err(|e| ContentError::io(&path, e))?;
            if !metadata.is_file() {
                tracing::debug!("Skipping non-file entry {:?}", path);
                continue;
            }
            files.push(path);
        }

        Ok(files)
    }

    /// Load all posts, newest first.
    ///
    /// Every file is read concurrently. The first failure aborts the
    /// remaining reads and is returned; there are no partial results.
    pub async fn load_posts(&self) -> Result<Vec<Post>> {
        let start = std::time::Instant::now();

        let mut tasks = JoinSet::new();
        for path in self.post_files().await? {
            let options = Arc::clone(&self.options);
            tasks.spawn(async move { read_post(&path, &options).await });
        }

        let mut posts = Vec::with_capacity(tasks.len());
        // Returning early drops the set, which aborts the outstanding reads
        while let Some(joined) = tasks.join_next().await {
            posts.push(joined??);
        }

        let total = posts.len();
        if !self.options.include_drafts {
            posts.retain(|post| !post.draft);
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.post_date.cmp(&a.post_date));

        tracing::info!(
            "Loaded {} posts ({} drafts skipped) from {:?} in {:?}",
            posts.len(),
            total - posts.len(),
            self.posts_dir,
            start.elapsed()
        );

        Ok(posts)
    }

    /// Load a single post by slug, ignoring its draft flag.
    ///
    /// The slug is matched against the same file listing `load_posts` uses.
    pub async fn load_post(&self, slug: &str) -> Result<Post> {
        let path = self
            .post_files()
            .await?
            .into_iter()
            .find(|path| file_slug(path) == slug);

        match path {
            Some(path) => read_post(&path, &self.options).await,
            None => Err(ContentError::io(
                self.posts_dir.join(slug),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no post with this slug"),
            )),
        }
    }
}

/// Read one post file and derive everything a listing needs
pub async fn read_post(path: &Path, options: &LoadOptions) -> Result<Post> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ContentError::io(path, e))?;

    let post = build_post(path, &content, options, &Local::now())?;
    tracing::debug!("Loaded post {:?} ({})", post.slug, post.reading_time);

    Ok(post)
}

/// Build a post from file content, relative dates measured against `now`
pub fn build_post(
    path: &Path,
    content: &str,
    options: &LoadOptions,
    now: &DateTime<Local>,
) -> Result<Post> {
    let (fm, body) = FrontMatter::parse(content).map_err(|source| ContentError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    let title = fm
        .title()
        .ok_or_else(|| ContentError::MissingTitle {
            path: path.to_path_buf(),
        })?
        .to_string();

    let slug = file_slug(path);

    let post_date = fm.post_date.unwrap_or_default();
    let relative = if post_date.trim().is_empty() {
        String::new()
    } else {
        match parse_date_string(&post_date) {
            Some(date) => relative_date(&date, now),
            None => {
                tracing::warn!("Unrecognized postDate {:?} in {:?}", post_date, path);
                String::new()
            }
        }
    };

    let renderer = MarkdownRenderer::new();

    Ok(Post {
        title,
        author: fm.author,
        permalink: permalink(&options.permalink_prefix, &slug),
        slug,
        post_date,
        draft: fm.draft,
        tags: fm.tags,
        html: renderer.render(body),
        excerpt: renderer.excerpt(body),
        reading_time: reading_time(body, options.words_per_minute),
        relative_date: relative,
        source: path.to_path_buf(),
    })
}

fn file_slug(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    slug_from_file_name(&file_name).to_string()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
