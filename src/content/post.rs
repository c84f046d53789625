//! Post model

use serde::Serialize;
use std::path::PathBuf;

/// A published post, built once per load and read-only afterwards
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post title
    pub title: String,

    /// Author from the front-matter
    pub author: Option<String>,

    /// Publication date as written in the front-matter
    pub post_date: String,

    /// Whether the post is a draft
    pub draft: bool,

    /// Post tags, in front-matter order
    pub tags: Vec<String>,

    /// File name without the markdown extension
    pub slug: String,

    /// URL path of the post
    pub permalink: String,

    /// Rendered HTML content
    pub html: String,

    /// Inner HTML of the first paragraph
    pub excerpt: String,

    /// Estimate like "3 min read"
    pub reading_time: String,

    /// Post date relative to load time, like "2 years ago"
    pub relative_date: String,

    /// Source file path
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    /// Whether the post carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Strip a markdown extension from a file name
pub fn slug_from_file_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(".md")
        .or_else(|| file_name.strip_suffix(".markdown"))
        .unwrap_or(file_name)
}

/// Join the permalink prefix and a slug with exactly one slash
pub fn permalink(prefix: &str, slug: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), slug)
}

#[cfg(test)]
pub(crate) fn sample(slug: &str, post_date: &str, tags: &[&str]) -> Post {
    Post {
        title: slug.to_uppercase(),
        author: None,
        post_date: post_date.to_string(),
        draft: false,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        slug: slug.to_string(),
        permalink: permalink("/blog", slug),
        html: String::new(),
        excerpt: String::new(),
        reading_time: "1 min read".to_string(),
        relative_date: String::new(),
        source: PathBuf::from(format!("{slug}.md")),
    }
}
