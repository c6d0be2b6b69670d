//! Approximate in-order substring scoring for interactive list filtering.
//!
//! A query matches a candidate when its characters appear in the candidate
//! in order, ignoring case and spaces. Consecutive hits grow the score
//! triangularly, every skipped candidate character costs one point, and
//! whatever is left of the candidate after the last hit is subtracted at
//! the end. Leading misses are only charged per skip during the scan.
//!
//! Scores rank candidates for a single query; they are not comparable
//! across queries.

use std::iter::Peekable;

/// Scores `query` against `candidate`.
///
/// Returns `None` when the query is not an in-order subsequence of the
/// candidate. Higher scores are better matches.
///
/// ```
/// use lume_core::fuzzy_match;
///
/// assert_eq!(fuzzy_match("abc", ""), Some(-3));
/// assert_eq!(fuzzy_match("abc", "xyz"), None);
/// assert!(fuzzy_match("hello", "he") > fuzzy_match("hello", "ho"));
/// ```
#[must_use]
pub fn fuzzy_match(candidate: &str, query: &str) -> Option<i64> {
    let mut cand = candidate.chars().peekable();
    let mut pat = query.chars().peekable();
    let mut score: i64 = 0;
    let mut run: i64 = 0;

    while cand.peek().is_some() && pat.peek().is_some() {
        skip_spaces(&mut cand);
        skip_spaces(&mut pat);
        let (Some(&c), Some(&p)) = (cand.peek(), pat.peek()) else {
            break;
        };
        if same_ignoring_case(c, p) {
            score += run;
            run += 1;
            let _ = pat.next();
        } else {
            score -= 1;
            run = 0;
        }
        let _ = cand.next();
    }

    if pat.peek().is_some() {
        return None;
    }
    let trailing = i64::try_from(cand.count()).unwrap_or(i64::MAX);
    Some(score.saturating_sub(trailing))
}

fn skip_spaces(chars: &mut Peekable<impl Iterator<Item = char>>) {
    while chars.next_if_eq(&' ').is_some() {}
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// A candidate that matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    /// Position of the candidate in the input.
    pub index: usize,
    /// The candidate text.
    pub candidate: &'a str,
    /// Its score for the query.
    pub score: i64,
}

/// Scores every candidate and returns the matches, best first.
///
/// Candidates with equal scores keep their input order.
pub fn rank<'a, I>(candidates: I, query: &str) -> Vec<Ranked<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked: Vec<Ranked<'a>> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            fuzzy_match(candidate, query).map(|score| Ranked {
                index,
                candidate,
                score,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_penalizes_whole_candidate() {
        assert_eq!(fuzzy_match("abc", ""), Some(-3));
        assert_eq!(fuzzy_match("", ""), Some(0));
    }

    #[test]
    fn exact_match_scores_triangular_run() {
        assert_eq!(fuzzy_match("abc", "abc"), Some(3));
        assert_eq!(fuzzy_match("abcd", "abcd"), Some(6));
    }

    #[test]
    fn prefix_run_then_trailing_penalty() {
        // run 0 + 1, minus "llo"
        assert_eq!(fuzzy_match("hello", "he"), Some(-2));
    }

    #[test]
    fn scattered_hits_score_lower_than_runs() {
        // h, skip e l l (-3), o: 0 - 3 + 0
        assert_eq!(fuzzy_match("hello", "ho"), Some(-3));
        assert!(fuzzy_match("hello", "he") > fuzzy_match("hello", "ho"));
        assert!(fuzzy_match("hello world", "hw") <= fuzzy_match("hello world", "he"));
    }

    #[test]
    fn missing_query_characters_are_no_match() {
        assert_eq!(fuzzy_match("abc", "xyz"), None);
        assert_eq!(fuzzy_match("abc", "abcd"), None);
        assert_eq!(fuzzy_match("", "a"), None);
        assert_eq!(fuzzy_match("cba", "abc"), None);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(fuzzy_match("ABC", "abc"), fuzzy_match("abc", "abc"));
        assert_eq!(fuzzy_match("abc", "ABC"), Some(3));
        assert_eq!(fuzzy_match("ÉCOLE", "école"), fuzzy_match("école", "école"));
    }

    #[test]
    fn spaces_are_transparent() {
        assert_eq!(fuzzy_match("a b c", "abc"), fuzzy_match("abc", "abc"));
        assert_eq!(fuzzy_match("abc", "a b c"), Some(3));
        assert_eq!(fuzzy_match("  abc", "abc"), Some(3));
    }

    #[test]
    fn leading_misses_cost_one_each() {
        assert_eq!(fuzzy_match("xxabc", "abc"), Some(1));
    }

    #[test]
    fn trailing_spaces_count_as_leftover() {
        assert_eq!(fuzzy_match("abc  ", "abc"), Some(1));
    }

    #[test]
    fn candidate_ending_in_spaces_cannot_satisfy_query() {
        assert_eq!(fuzzy_match("a  ", "ab"), None);
    }

    #[test]
    fn query_of_only_spaces_behaves_like_empty() {
        assert_eq!(fuzzy_match("abc", "   "), fuzzy_match("abc", ""));
    }

    #[test]
    fn rank_orders_best_first_and_keeps_ties_stable() {
        let candidates = ["open file", "close", "oxf", "of", "xof"];
        let ranked = rank(candidates, "of");
        let names: Vec<&str> = ranked.iter().map(|r| r.candidate).collect();
        assert_eq!(names, vec!["of", "xof", "oxf", "open file"]);
        assert_eq!(ranked[0].index, 3);
        assert_eq!(ranked[3].score, -6);

        let tied = rank(["zab", "yab"], "ab");
        assert_eq!(tied[0].index, 0);
        assert_eq!(tied[1].index, 1);
        assert_eq!(tied[0].score, tied[1].score);
    }

    #[test]
    fn rank_drops_non_matches() {
        assert!(rank(["abc", "def"], "z").is_empty());
    }
}
