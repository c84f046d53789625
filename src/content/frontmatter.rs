//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Tags come either as a comma-separated string or as a list of strings.
/// Every tag is trimmed and blank tags are dropped.
fn comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct CommaSeparated;

    impl<'de> Visitor<'de> for CommaSeparated {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(split_tags(value))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut tags = Vec::new();
            while let Some(item) = seq.next_element::<serde_yaml::Value>()? {
                let item = match item {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => continue,
                    other => {
                        return Err(de::Error::custom(format!(
                            "tag must be a scalar, found {:?}",
                            other
                        )))
                    }
                };
                let item = item.trim();
                if !item.is_empty() {
                    tags.push(item.to_string());
                }
            }
            Ok(tags)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(CommaSeparated)
}

/// Split a raw `tags` value on commas, keeping order
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Attributes from the YAML header of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "postDate")]
    pub post_date: Option<String>,
    #[serde(deserialize_with = "comma_separated")]
    pub tags: Vec<String>,
    pub draft: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content without a `---` delimited header yields default attributes
    /// and the whole text as body.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.trim_start_matches('\u{feff}');

        let Some((header, body)) = split_header(content) else {
            return Ok((FrontMatter::default(), content));
        };

        if header.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(header)?;
        Ok((fm, body))
    }

    /// The title, if present and not blank
    pub fn title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

/// Split `---\n<yaml>\n---\n<body>` into header and body
fn split_header(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
author: Jane
postDate: 2024-01-15
tags: rust, web ,notes
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title(), Some("Hello World"));
        assert_eq!(fm.author.as_deref(), Some("Jane"));
        assert_eq!(fm.post_date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.tags, vec!["rust", "web", "notes"]);
        assert!(!fm.draft);
        assert!(remaining.contains("This is the content."));
        assert!(!remaining.contains("title:"));
    }

    #[test]
    fn test_tags_keep_order() {
        let (fm, _) = FrontMatter::parse("---\ntitle: T\ntags: a,b,c\n---\n").unwrap();
        assert_eq!(fm.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tags_as_list() {
        let content = "---\ntitle: T\ntags:\n  - rust\n  - ' cli '\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["rust", "cli"]);
    }

    #[test]
    fn test_scalar_tags_are_stringified() {
        let (fm, _) = FrontMatter::parse("---\ntitle: T\ntags: 2020\n---\nbody\n").unwrap();
        assert_eq!(fm.tags, vec!["2020"]);

        let (fm, _) = FrontMatter::parse("---\ntitle: T\ntags: true\n---\nbody\n").unwrap();
        assert_eq!(fm.tags, vec!["true"]);

        let content = "---\ntitle: T\ntags:\n  - 2020\n  - 1.5\n  - rust\n  - ~\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["2020", "1.5", "rust"]);
    }

    #[test]
    fn test_nested_tag_list_is_rejected() {
        let content = "---\ntitle: T\ntags:\n  - [a, b]\n---\nbody\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_missing_tags_are_empty() {
        let (fm, _) = FrontMatter::parse("---\ntitle: T\n---\nbody\n").unwrap();
        assert!(fm.tags.is_empty());

        let (fm, _) = FrontMatter::parse("---\ntitle: T\ntags: ''\n---\nbody\n").unwrap();
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_draft_flag_and_extra() {
        let content = "---\ntitle: T\ndraft: true\ncover: img.png\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.draft);
        assert_eq!(
            fm.extra.get("cover").and_then(|v| v.as_str()),
            Some("img.png")
        );
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\nNo header here.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title(), None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unclosed_header_is_body() {
        let content = "---\ntitle: Never closed\n\nText.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title(), None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_blank_title() {
        let (fm, _) = FrontMatter::parse("---\ntitle: '   '\n---\nbody\n").unwrap();
        assert_eq!(fm.title(), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody.\r\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title(), Some("Windows"));
        assert_eq!(remaining, "Body.\r\n");
    }

    #[test]
    fn test_malformed_yaml() {
        let content = "---\ntitle: [unclosed\n---\nbody\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_horizontal_rule_later_in_body() {
        let content = "---\ntitle: Rules\n---\nAbove\n\n---\n\nBelow\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title(), Some("Rules"));
        assert!(remaining.contains("Above"));
        assert!(remaining.contains("Below"));
    }
}
