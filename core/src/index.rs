use crate::error::{Result, SearchError};
use crate::term::{Postings, Term};
use crate::{DocId, Position};
use std::collections::BTreeMap;

/// Sorted collection of terms built once over a fixed document collection.
#[derive(Debug, Clone)]
pub struct TermIndex {
    terms: Vec<Term>,
    num_docs: u32,
}

impl TermIndex {
    /// Build the index from per-document token sequences. The slice index is
    /// the document id, so ids are dense by construction.
    pub fn build<S: AsRef<str>>(documents: &[Vec<S>]) -> Result<Self> {
        if documents.is_empty() {
            return Err(SearchError::EmptyCollection);
        }
        let num_docs = documents.len() as u32;

        // Single pass per document; BTreeMap keeps tokens sorted and, since
        // documents and positions are visited in order, postings ascend.
        let mut raw: BTreeMap<&str, Postings> = BTreeMap::new();
        for (doc_id, tokens) in documents.iter().enumerate() {
            for (offset, token) in tokens.iter().enumerate() {
                let position = offset as Position + 1;
                raw.entry(token.as_ref())
                    .or_default()
                    .entry(doc_id as DocId)
                    .or_default()
                    .push(position);
            }
            tracing::debug!(doc_id, tokens = tokens.len(), "indexed document");
        }

        let mut terms = Vec::with_capacity(raw.len());
        for (token, postings) in raw {
            let term = Term::new(token, postings, num_docs)?;
            if cfg!(debug_assertions) {
                term.validate(num_docs)?;
            }
            terms.push(term);
        }

        tracing::info!(num_docs, num_terms = terms.len(), "built term index");
        Ok(Self { terms, num_docs })
    }

    /// Binary search for `token`; `None` when it is not in the vocabulary.
    pub fn search(&self, token: &str) -> Option<usize> {
        self.terms.binary_search_by(|t| t.token().cmp(token)).ok()
    }

    pub fn get(&self, token: &str) -> Option<&Term> {
        self.search(token).map(|i| &self.terms[i])
    }

    /// Terms in ascending token order.
    pub fn terms(&self) -> &[Term] { &self.terms }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Re-check every structural invariant of the built index.
    pub fn validate(&self) -> Result<()> {
        for term in &self.terms {
            term.validate(self.num_docs)?;
        }
        if let Some(pair) = self.terms.windows(2).find(|w| w[0].token() >= w[1].token()) {
            return Err(SearchError::malformed(pair[1].token(), "terms not strictly sorted"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&'static str]]) -> Vec<Vec<&'static str>> {
        raw.iter().map(|d| d.to_vec()).collect()
    }

    #[test]
    fn builds_sorted_positional_postings() {
        let index = TermIndex::build(&docs(&[&["cat", "sat", "cat"], &["dog", "cat"]])).unwrap();
        let tokens: Vec<&str> = index.terms().iter().map(|t| t.token()).collect();
        assert_eq!(tokens, vec!["cat", "dog", "sat"]);

        let cat = index.get("cat").unwrap();
        assert_eq!(cat.posting(0), Some(&vec![1, 3]));
        assert_eq!(cat.posting(1), Some(&vec![2]));
        assert_eq!(cat.document_frequency(), 2);
        assert!(index.validate().is_ok());
    }

    #[test]
    fn empty_collection_is_rejected() {
        let empty: Vec<Vec<String>> = Vec::new();
        assert_eq!(TermIndex::build(&empty).unwrap_err(), SearchError::EmptyCollection);
    }

    #[test]
    fn documents_without_tokens_still_count() {
        let index = TermIndex::build(&docs(&[&["cat"], &[], &[]])).unwrap();
        assert_eq!(index.num_docs(), 3);
        let cat = index.get("cat").unwrap();
        assert!((cat.inverse_document_frequency() - 3f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn search_uses_byte_order() {
        let index = TermIndex::build(&docs(&[&["b", "B", "a", "é", "ab"]])).unwrap();
        for term in index.terms() {
            assert_eq!(index.search(term.token()).map(|i| index.terms()[i].token()), Some(term.token()));
        }
        assert_eq!(index.search("c"), None);
        assert_eq!(index.search(""), None);
        assert_eq!(index.terms()[0].token(), "B");
    }
}
