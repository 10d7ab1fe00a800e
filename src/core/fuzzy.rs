//! Fuzzy relevance scoring of a search query against a branch name.
//!
//! Each query character is matched to the leftmost occurrence in the candidate
//! that its own previous match has not consumed yet. The matched positions then
//! earn points for staying in order, for running contiguously and for landing
//! on the first few characters of the candidate.

use std::collections::HashMap;

/// Only the first three candidate positions earn a prefix bonus
const MAX_PREFIX_INDEX: f64 = 3.0;
/// Upper bound of the prefix bonus a full query can collect
const MAX_TOTAL_PREFIX_BONUS: f64 = 2.0;
const MIN_SCORE: f64 = 1.0;

/// Position in `candidate` (in chars) for every char of `query`, `None` when
/// the char has no occurrence left.
///
/// Repeated query chars resume after their own previous match, so
/// `"aaa"` against `"aba"` gives `[0, 2, -]`. A failed lookup resets that
/// char's resume point to the start of the candidate.
fn find_unique_indexes(query: &str, candidate: &str) -> Vec<Option<usize>> {
    let target: Vec<char> = candidate.chars().collect();
    let mut resume_at: HashMap<char, usize> = HashMap::new();

    query
        .chars()
        .map(|ch| {
            let from = resume_at.get(&ch).copied().unwrap_or(0);
            let found = target
                .iter()
                .skip(from)
                .position(|&c| c == ch)
                .map(|offset| from + offset);

            resume_at.insert(ch, found.map_or(0, |index| index + 1));
            found
        })
        .collect()
}

/// Relevance of `candidate` for `query`, normalised to `0.0..=1.0`.
///
/// A candidate sharing no character with a non-empty query scores `0.0` so
/// that it can be filtered out. Otherwise the base term keeps the score
/// above zero even when every match is out of order.
pub fn fuzzy_score(query: &str, candidate: &str) -> f64 {
    let matched: Vec<usize> = find_unique_indexes(query, candidate)
        .into_iter()
        .flatten()
        .collect();

    if matched.is_empty() && !query.is_empty() {
        return 0.0;
    }

    let query_len = query.chars().count() as f64;
    // 1 + 2 + ... + n for the continuity run plus the bonus and base allowances
    let max_score = query_len * (query_len + 1.0) / 2.0 + MAX_TOTAL_PREFIX_BONUS + MIN_SCORE;

    let mut score = MIN_SCORE;
    let mut continuity = 1.0;

    for (i, &index) in matched.iter().enumerate() {
        let distance = if i == 0 {
            0
        } else {
            index as i64 - matched[i - 1] as i64
        };
        let order_multiplier = if distance < 0 { 0.0 } else { 1.0 };
        let prefix_bonus = ((MAX_PREFIX_INDEX - index as f64) / MAX_PREFIX_INDEX).max(0.0);

        continuity = if distance == 1 { continuity + 1.0 } else { 1.0 };

        score += (continuity + prefix_bonus) * order_multiplier;
    }

    score / max_score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unique_indexes_for_repeated_chars() {
        assert_eq!(
            find_unique_indexes("aaa", "aba"),
            vec![Some(0), Some(2), None]
        );
    }

    #[test]
    fn test_unique_indexes_are_tracked_per_char() {
        // 'b' starts from the beginning even though 'a' matched further right
        assert_eq!(
            find_unique_indexes("ab", "bxa"),
            vec![Some(2), Some(0)]
        );
    }

    #[test]
    fn test_failed_lookup_resets_resume_point() {
        assert_eq!(
            find_unique_indexes("aaaa", "aba"),
            vec![Some(0), Some(2), None, Some(0)]
        );
    }

    #[test]
    fn test_exact_prefix_match_is_maximal() {
        assert!(approx_eq(fuzzy_score("abc", "abc"), 1.0));
        assert!(approx_eq(fuzzy_score("abc", "abcdef"), 1.0));
        assert!(approx_eq(fuzzy_score("main", "main"), 1.0));
    }

    #[test]
    fn test_self_match_beats_other_candidates() {
        let query = "feat";
        let own = fuzzy_score(query, query);
        for candidate in ["xfeat", "f-e-a-t", "taef", "feature", "release"] {
            assert!(own >= fuzzy_score(query, candidate), "{candidate}");
        }
    }

    #[test]
    fn test_shifted_match_scores_lower() {
        // indexes 1,2,3: 1 + (1 + 2/3) + (2 + 1/3) + (3 + 0) = 8 out of 9
        assert!(approx_eq(fuzzy_score("abc", "xabcyz"), 8.0 / 9.0));
    }

    #[test]
    fn test_ranking_scenario() {
        let first = fuzzy_score("abc", "abcdef");
        let second = fuzzy_score("abc", "xabcyz");
        let third = fuzzy_score("abc", "zzz");
        assert!(first > second);
        assert!(second > third);
        assert_eq!(third, 0.0);
    }

    #[test]
    fn test_out_of_order_never_negative() {
        let score = fuzzy_score("cba", "abc");
        assert!(score > 0.0);
        // only the first match counts, the two backwards steps add nothing
        assert!(approx_eq(score, (1.0 + 1.0 + 1.0 / 3.0) / 9.0));
    }

    #[test]
    fn test_partial_match_keeps_base_term() {
        let score = fuzzy_score("xyzq", "q");
        assert!(score > 0.0);
        assert!(score < fuzzy_score("q", "q"));
    }

    #[test]
    fn test_dropped_chars_create_adjacency() {
        // 'z' is dropped, so 'a' and 'b' look contiguous
        // 1 + (1 + 1) + (2 + 2/3) out of 3 * 4 / 2 + 3
        assert!(approx_eq(fuzzy_score("azb", "ab"), 17.0 / 27.0));
    }

    #[test]
    fn test_empty_query() {
        assert!(approx_eq(fuzzy_score("", "anything"), 1.0 / 3.0));
    }
}
