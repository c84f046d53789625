//! Listing helpers over a loaded, newest-first post list

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::Post;

/// A tag with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub name: String,
    pub count: usize,
    /// URL path of the tag listing page
    pub path: String,
}

/// Posts carrying `tag`, keeping list order
pub fn filter_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.has_tag(tag)).collect()
}

/// The `amount` newest posts (homepage listing)
pub fn recent(posts: &[Post], amount: usize) -> &[Post] {
    &posts[..amount.min(posts.len())]
}

/// Every tag with its post count, in order of first appearance
pub fn tag_index(posts: &[Post], permalink_prefix: &str) -> Vec<TagEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let prefix = permalink_prefix.trim_end_matches('/');
    counts
        .into_iter()
        .map(|(name, count)| TagEntry {
            name: name.to_string(),
            count,
            path: format!("{}/tags/{}", prefix, slug::slugify(name)),
        })
        .collect()
}
