//! Query normalization and stopword filtering

/// Common function words carrying no topical signal
const STOPWORDS: [&str; 38] = [
    "the", "and", "or", "in", "of", "to", "a", "is", "it", "for", "on", "at", "by", "an", "be",
    "as", "are", "this", "that", "with", "but", "from", "they", "he", "she", "we", "you", "not",
    "was", "were", "can", "will", "would", "could", "should", "there", "their", "then",
];

/// Lowercase, strip everything that is not an ASCII letter, split on
/// whitespace. Shared by the keyword extractor and the chunk scorer so both
/// sides normalize identically.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Extract the keyword sequence from a free-text query.
///
/// Duplicates are kept in query order; the exact-match score compounds per
/// repetition, and deduplicating here would change ranking outcomes.
pub fn extract_keywords(query: &str) -> Vec<String> {
    tokenize(query)
        .into_iter()
        .filter(|token| !STOPWORDS.contains(&token.as_str()))
        .collect()
}
