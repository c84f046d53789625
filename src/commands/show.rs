//! Show a single post

use anyhow::Result;
use std::fmt::Write;

use crate::content::{ContentLoader, Post};
use crate::Site;

/// Print one post by slug. Drafts can be shown too.
pub async fn run(site: &Site, slug: &str, json: bool) -> Result<()> {
    let post = ContentLoader::new(site).load_post(slug).await?;
    print!("{}", format_post(&post, json)?);
    Ok(())
}

pub fn format_post(post: &Post, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(post)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "{}", post.title)?;
    if let Some(author) = &post.author {
        writeln!(out, "by {}", author)?;
    }
    writeln!(
        out,
        "{} ({}) - {}",
        post.post_date, post.relative_date, post.reading_time
    )?;
    if post.draft {
        writeln!(out, "[draft]")?;
    }
    writeln!(out, "{}", post.permalink)?;
    writeln!(out)?;
    write!(out, "{}", post.html)?;
    Ok(out)
}
