//! Fuzzy path matcher
//!
//! Scores a single candidate path against a query with one greedy
//! left-to-right subsequence walk. Matching is case-insensitive and works on
//! Unicode scalar values, so every position is a `char` index into the path.
//!
//! The walk never backtracks: the first occurrence of each query character is
//! consumed. A path that only contains the query through a later alignment is
//! rejected, and the score reflects the greedy alignment rather than the best
//! possible one.

/// Score for every matched character
pub const MATCH_SCORE: i64 = 100;

/// Bonus when a match directly follows the previous match
pub const CONSECUTIVE_BONUS: i64 = 70;

/// Bonus when a match directly follows one of [`SEPARATORS`]
pub const SEPARATOR_BONUS: i64 = 80;

/// Bonus when an upper-case path character is matched mid-segment
pub const CASE_TRANSITION_BONUS: i64 = 80;

/// Bonus when the first match lands in the file name
pub const FILENAME_BONUS: i64 = 50;

/// Characters that start a new word inside a path
pub const SEPARATORS: [char; 4] = ['/', '.', '_', '-'];

/// Outcome of matching one path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Higher is better; only meaningful relative to other matches
    pub score: i64,
    /// Char indices into the path, one per query char, strictly increasing
    pub positions: Vec<usize>,
}

/// Reusable matcher holding scratch buffers between calls
#[derive(Debug, Default)]
pub struct FuzzyMatcher {
    path_buf: Vec<char>,
    query_buf: Vec<char>,
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match `query` against `path`, returning the score and matched positions
    pub fn match_path(&mut self, query: &str, path: &str) -> Option<FuzzyMatch> {
        self.path_buf.clear();
        self.path_buf.extend(path.chars());
        self.query_buf.clear();
        self.query_buf.extend(query.chars());

        score_chars(&self.query_buf, &self.path_buf)
    }

    /// Match a pattern against a path, returning score if matched
    pub fn score(&mut self, query: &str, path: &str) -> Option<i64> {
        self.match_path(query, path).map(|m| m.score)
    }

    /// Check if query matches path
    pub fn matches(&mut self, query: &str, path: &str) -> bool {
        self.match_path(query, path).is_some()
    }
}

/// One-shot convenience wrapper around [`FuzzyMatcher::match_path`]
pub fn fuzzy_match(query: &str, path: &str) -> Option<FuzzyMatch> {
    FuzzyMatcher::new().match_path(query, path)
}

fn score_chars(query: &[char], path: &[char]) -> Option<FuzzyMatch> {
    let mut positions = Vec::with_capacity(query.len());
    let mut score: i64 = 0;
    let mut query_index = 0;
    let mut path_index = 0;
    let mut last_match: Option<usize> = None;

    while path_index < path.len() && query_index < query.len() {
        let current = path[path_index];

        if chars_eq_ignore_case(current, query[query_index]) {
            positions.push(path_index);
            score += MATCH_SCORE;

            if let Some(last) = last_match {
                if path_index == last + 1 {
                    score += CONSECUTIVE_BONUS;
                }
                if SEPARATORS.contains(&path[path_index - 1]) {
                    score += SEPARATOR_BONUS;
                }
            }

            if current.is_uppercase() && path_index > 0 && path[path_index - 1] != '/' {
                score += CASE_TRANSITION_BONUS;
            }

            last_match = Some(path_index);
            query_index += 1;
        }

        path_index += 1;
    }

    if query_index != query.len() {
        return None;
    }

    score -= path.len() as i64;

    if let Some(&first) = positions.first() {
        let in_file_name = match path.iter().rposition(|&c| c == '/') {
            Some(last_slash) => first > last_slash,
            None => true,
        };
        if in_file_name {
            score += FILENAME_BONUS;
        }
    }

    Some(FuzzyMatch { score, positions })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
