//! Reading time estimate

/// Number of whitespace-separated words in a text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate like "3 min read". Never reports less than one minute.
pub fn reading_time(text: &str, words_per_minute: usize) -> String {
    let words = word_count(text);
    let minutes = words.div_ceil(words_per_minute.max(1)).max(1);
    format!("{} min read", minutes)
}
