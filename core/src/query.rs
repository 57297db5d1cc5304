//! Positional AND queries: every token must occur, and consecutive query
//! tokens must occupy consecutive positions in the document.

use crate::index::TermIndex;
use crate::term::{Posting, Postings};
use crate::Position;
use std::cmp::Ordering;

/// doc_id -> ascending positions of the last token of each phrase hit.
pub type Matches = Postings;

/// Resolve `query_tokens` against the index.
///
/// A single token yields that term's postings unchanged. Any token missing
/// from the index makes the whole result empty. Otherwise terms are folded
/// left to right, each step keeping only positions that directly follow a
/// hit of the previous step.
pub fn resolve<S: AsRef<str>>(query_tokens: &[S], index: &TermIndex) -> Matches {
    let found: Vec<&Postings> = query_tokens
        .iter()
        .filter_map(|token| index.get(token.as_ref()))
        .map(|term| term.postings())
        .collect();

    if found.len() != query_tokens.len() {
        tracing::debug!(wanted = query_tokens.len(), found = found.len(), "query token missing from index");
        return Matches::new();
    }

    let matches = match found.split_first() {
        None => Matches::new(),
        Some((first, [])) => (*first).clone(),
        Some((first, rest)) => {
            let mut acc = (*first).clone();
            for postings in rest {
                acc = intersect(&acc, postings);
                if acc.is_empty() {
                    break;
                }
            }
            acc
        }
    };
    tracing::debug!(tokens = query_tokens.len(), documents = matches.len(), "resolved query");
    matches
}

/// Merge two postings maps by document, keeping documents with at least one
/// adjacency hit.
pub fn intersect(left: &Postings, right: &Postings) -> Postings {
    let mut out = Postings::new();
    let mut l = left.iter().peekable();
    let mut r = right.iter().peekable();
    while let (Some((ld, lp)), Some((rd, rp))) = (l.peek().copied(), r.peek().copied()) {
        match ld.cmp(rd) {
            Ordering::Less => { l.next(); }
            Ordering::Greater => { r.next(); }
            Ordering::Equal => {
                let hits = adjacent_positions(lp, rp);
                if !hits.is_empty() {
                    out.insert(*ld, hits);
                }
                l.next();
                r.next();
            }
        }
    }
    out
}

/// Positions in `right` that sit exactly one after a position in `left`.
pub fn adjacent_positions(left: &[Position], right: &[Position]) -> Posting {
    let mut hits = Posting::new();
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if right[j] == left[i] + 1 {
            hits.push(right[j]);
            i += 1;
            j += 1;
        } else if left[i] < right[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_merge() {
        assert_eq!(adjacent_positions(&[1, 5, 9], &[2, 7, 10]), vec![2, 10]);
        assert_eq!(adjacent_positions(&[3], &[1, 2, 3]), Vec::<Position>::new());
        assert_eq!(adjacent_positions(&[], &[1]), Vec::<Position>::new());
    }

    #[test]
    fn identical_positions_never_adjacent() {
        assert!(adjacent_positions(&[1, 3, 5], &[1, 3, 5]).is_empty());
        assert_eq!(adjacent_positions(&[1, 2, 5], &[1, 2, 5]), vec![2]);
    }

    #[test]
    fn intersect_drops_documents_without_hits() {
        let left: Postings = [(0, vec![1]), (1, vec![4]), (3, vec![1])].into_iter().collect();
        let right: Postings = [(1, vec![5]), (2, vec![2]), (3, vec![7])].into_iter().collect();
        let out = intersect(&left, &right);
        assert_eq!(out.len(), 1);
        assert_eq!(out.get(&1), Some(&vec![5]));
    }
}
