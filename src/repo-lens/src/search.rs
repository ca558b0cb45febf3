//! Ranking a candidate set against a query

use rayon::prelude::*;
use tracing::debug;

use crate::matcher::FuzzyMatcher;

/// Default number of results shown by the quick-open list
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Candidate count at which scoring fans out across threads
pub const PARALLEL_THRESHOLD: usize = 4096;

/// A ranked candidate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathMatch {
    /// The candidate, unmodified
    pub path: String,
    pub score: i64,
    /// Char indices into `path` consumed by the query
    pub positions: Vec<usize>,
    /// Index of the candidate in the input slice
    pub candidate_index: usize,
}

/// Score every candidate, drop non-matches and return the best `max_results`
/// by descending score. Equal scores keep their input order.
pub fn search<S>(query: &str, candidates: &[S], max_results: usize) -> Vec<PathMatch>
where
    S: AsRef<str> + Sync,
{
    let mut matches: Vec<PathMatch> = if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .enumerate()
            .map_init(FuzzyMatcher::new, |matcher, (idx, path)| {
                score_candidate(matcher, query, idx, path.as_ref())
            })
            .flatten()
            .collect()
    } else {
        let mut matcher = FuzzyMatcher::new();
        candidates
            .iter()
            .enumerate()
            .filter_map(|(idx, path)| score_candidate(&mut matcher, query, idx, path.as_ref()))
            .collect()
    };

    debug!(
        query,
        candidates = candidates.len(),
        matched = matches.len(),
        "ranked candidates"
    );

    // stable: ties stay in input order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(max_results);
    matches
}

fn score_candidate(
    matcher: &mut FuzzyMatcher,
    query: &str,
    idx: usize,
    path: &str,
) -> Option<PathMatch> {
    matcher.match_path(query, path).map(|m| PathMatch {
        path: path.to_string(),
        score: m.score,
        positions: m.positions,
        candidate_index: idx,
    })
}
