//! Column matching
//!
//! Scores every column header against a field vocabulary and picks the best.
//!
//! ## Scoring
//! 1. +1.0 for every candidate token contained in the normalized header
//! 2. +0.4 x the best fuzzy similarity against any candidate
//! 3. +0.25 if a primary hint is contained, +0.10 if a secondary hint is contained

use crate::normalize::normalize_header;
use crate::vocabulary::Vocabulary;

/// Minimum score for a column to be accepted
pub const MIN_MATCH_SCORE: f64 = 0.6;

const CONTAINMENT_WEIGHT: f64 = 1.0;
const FUZZY_WEIGHT: f64 = 0.4;
const PRIMARY_HINT_BONUS: f64 = 0.25;
const SECONDARY_HINT_BONUS: f64 = 0.10;

/// Winning column and its score
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMatch {
    pub column: String,
    pub score: f64,
}

/// Score a single header against a vocabulary
pub fn score_column(column: &str, vocabulary: &Vocabulary) -> f64 {
    let normalized = normalize_header(column);

    let containment = vocabulary
        .candidates
        .iter()
        .filter(|cand| normalized.contains(*cand))
        .count() as f64
        * CONTAINMENT_WEIGHT;

    let fuzzy = vocabulary
        .candidates
        .iter()
        .map(|cand| similarity_ratio(&normalized, cand))
        .fold(0.0_f64, f64::max);

    let mut score = containment + FUZZY_WEIGHT * fuzzy;

    if vocabulary.primary_hints.iter().any(|h| normalized.contains(h)) {
        score += PRIMARY_HINT_BONUS;
    }
    if vocabulary.secondary_hints.iter().any(|h| normalized.contains(h)) {
        score += SECONDARY_HINT_BONUS;
    }

    score
}

/// Pick the best matching column, or `None` when nothing clears the floor.
///
/// Ties go to the first column in input order.
pub fn best_match_column<S: AsRef<str>>(
    columns: &[S],
    vocabulary: &Vocabulary,
) -> Option<ColumnMatch> {
    let mut best: Option<ColumnMatch> = None;

    for column in columns {
        let column = column.as_ref();
        let score = score_column(column, vocabulary);
        tracing::trace!(column, score, "column score");

        let better = best.as_ref().map(|b| score > b.score).unwrap_or(true);
        if better {
            best = Some(ColumnMatch {
                column: column.to_string(),
                score,
            });
        }
    }

    best.filter(|b| b.score >= MIN_MATCH_SCORE)
}

/// Similarity ratio in [0, 1] (Ratcliff/Obershelp: 2*M / T).
///
/// M is the number of characters in matching blocks found by repeatedly
/// taking the longest common substring and recursing on both sides of it.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();

    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            queue.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common block in a[alo..ahi] x b[blo..bhi]; earliest in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run length ending at (i - 1, j) for the previous row
    let mut prev = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        let mut current = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = prev[j - blo] + 1;
                current[j - blo + 1] = k;
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        prev = current;
    }

    (best_i, best_j, best_size)
}
