//! Markdown rendering and excerpt extraction

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Commonmark renderer for post bodies
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer with plain commonmark rules
    pub fn new() -> Self {
        Self {
            options: Options::empty(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);

        html_output
    }

    /// Inner HTML of the first paragraph, without the wrapping `<p>` tags.
    ///
    /// Works on the event stream rather than the rendered string. A raw
    /// HTML block holding a `<p>` element counts as a paragraph too.
    pub fn excerpt(&self, markdown: &str) -> String {
        let mut events: Vec<Event> = Vec::new();
        let mut in_paragraph = false;
        let mut html_block: Option<String> = None;

        for event in Parser::new_ext(markdown, self.options) {
            match event {
                Event::Start(Tag::Paragraph) => in_paragraph = true,
                // paragraphs never nest
                Event::End(TagEnd::Paragraph) if in_paragraph => break,
                event if in_paragraph => events.push(event),
                Event::Start(Tag::HtmlBlock) => html_block = Some(String::new()),
                Event::Html(text) => {
                    if let Some(block) = html_block.as_mut() {
                        block.push_str(&text);
                    }
                }
                Event::End(TagEnd::HtmlBlock) => {
                    if let Some(block) = html_block.take() {
                        if let Some(inner) = html_paragraph(&block) {
                            return inner.to_string();
                        }
                    }
                }
                _ => {}
            }
        }

        let mut excerpt = String::new();
        html::push_html(&mut excerpt, events.into_iter());

        excerpt
    }
}

/// Inner HTML of the first `<p>` element in a raw HTML block
fn html_paragraph(block: &str) -> Option<&str> {
    let mut search = 0;
    let open = loop {
        let pos = search + block[search..].find("<p")?;
        let after = &block[pos + 2..];
        // skip `<pre>`, `<param>` and friends
        if after.starts_with(|c: char| c == '>' || c.is_ascii_whitespace()) {
            break pos + 2;
        }
        search = pos + 2;
    };

    let rest = &block[open..];
    let inner = &rest[rest.find('>')? + 1..];
    let close = inner.find("</p>")?;
    Some(inner[..close].trim())
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
