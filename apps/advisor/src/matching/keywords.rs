//! Keyword extraction and the bidirectional containment test used by every matcher.
//!
//! Matching is lexical: a short keyword contained in a longer one counts as a hit
//! ("data" matches "database"). This is permissive and produces false positives.

/// Words that carry no matching signal. Checked after the length filter.
const STOP_WORDS: &[&str] = &["with", "from", "that", "this", "will", "have", "about"];

/// Tokens of this many chars or fewer are discarded.
const MIN_KEYWORD_LEN: usize = 3;

/// Extracts lowercase keyword tokens from free text.
///
/// Pipeline, in order:
/// 1. lowercase
/// 2. drop every char that is neither a word char (`[A-Za-z0-9_]`) nor whitespace
/// 3. split on single spaces
/// 4. drop tokens of 3 chars or fewer
/// 5. drop stop words
///
/// Duplicates are kept; callers only test membership.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    cleaned
        .split(' ')
        .filter(|token| token.chars().count() > MIN_KEYWORD_LEN)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// True if any keyword on either side contains a keyword from the other side.
pub fn keywords_overlap<A, B>(left: &[A], right: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    left.iter().any(|l| {
        right
            .iter()
            .any(|r| contains_either_way(l.as_ref(), r.as_ref()))
    })
}

/// Returns true if `item_text` (a feature or benefit) addresses the named challenge.
pub fn addresses(item_text: &str, challenge_name: &str) -> bool {
    let item_keywords = extract_keywords(item_text);
    let challenge_keywords = extract_keywords(challenge_name);
    keywords_overlap(&challenge_keywords, &item_keywords)
}

/// Bidirectional substring containment.
pub(crate) fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
