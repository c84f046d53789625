//! List posts and tags

use anyhow::Result;
use std::fmt::Write;

use crate::content::Post;
use crate::helpers::{recent, tag_index, TagEntry};
use crate::Site;

/// List published posts, optionally only those carrying `tag`
pub async fn posts(site: &Site, tag: Option<&str>, limit: Option<usize>, json: bool) -> Result<()> {
    let posts = match tag {
        Some(tag) => site.posts_tagged(tag).await?,
        None => site.load_posts().await?,
    };
    let posts = match limit {
        Some(limit) => recent(&posts, limit),
        None => &posts[..],
    };

    print!("{}", format_posts(posts, json)?);
    Ok(())
}

/// List tags with their post counts
pub async fn tags(site: &Site, json: bool) -> Result<()> {
    let posts = site.load_posts().await?;
    let tags = tag_index(&posts, &site.config.permalink_prefix);

    print!("{}", format_tags(&tags, json)?);
    Ok(())
}

pub fn format_posts(posts: &[Post], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(posts)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        writeln!(
            out,
            "  {} - {} [{}] ({}, {})",
            post.post_date, post.title, post.permalink, post.relative_date, post.reading_time
        )?;
        if !post.tags.is_empty() {
            writeln!(out, "      tags: {}", post.tags.join(", "))?;
        }
    }
    Ok(out)
}

pub fn format_tags(tags: &[TagEntry], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(tags)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "Tags ({}):", tags.len())?;
    for tag in tags {
        writeln!(out, "  {} ({}) {}", tag.name, tag.count, tag.path)?;
    }
    Ok(out)
}
