use crate::error::{Result, SearchError};
use crate::{DocId, Position};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Ascending 1-based positions of one term within one document.
pub type Posting = Vec<Position>;

/// doc_id -> posting, only for documents containing the term. Keys ascend.
pub type Postings = BTreeMap<DocId, Posting>;

/// A distinct token with its positional postings and precomputed IDF.
///
/// Identity and ordering are defined by the token alone.
#[derive(Debug, Clone, Serialize)]
pub struct Term {
    token: String,
    postings: Postings,
    idf: f64,
}

impl Term {
    /// Builds a term and computes its IDF against `num_docs`.
    pub fn new(token: impl Into<String>, postings: Postings, num_docs: u32) -> Result<Self> {
        let token = token.into();
        if num_docs == 0 {
            return Err(SearchError::EmptyCollection);
        }
        if postings.is_empty() {
            return Err(SearchError::malformed(token, "term has no postings"));
        }
        let idf = (num_docs as f64 / postings.len() as f64).log10();
        Ok(Self { token, postings, idf })
    }

    pub fn token(&self) -> &str { &self.token }

    pub fn postings(&self) -> &Postings { &self.postings }

    pub fn posting(&self, doc_id: DocId) -> Option<&Posting> { self.postings.get(&doc_id) }

    /// Document ids containing the term, ascending.
    pub fn documents(&self) -> impl Iterator<Item = DocId> + '_ { self.postings.keys().copied() }

    /// Number of documents containing the term (DF).
    pub fn document_frequency(&self) -> u32 { self.postings.len() as u32 }

    /// log10(N / DF), fixed at construction.
    pub fn inverse_document_frequency(&self) -> f64 { self.idf }

    /// Raw occurrence count in `doc_id`, 0 if absent.
    pub fn term_frequency(&self, doc_id: DocId) -> u32 {
        self.postings.get(&doc_id).map_or(0, |p| p.len() as u32)
    }

    /// Occurrences across the whole collection.
    pub fn total_frequency(&self) -> u64 {
        self.postings.values().map(|p| p.len() as u64).sum()
    }

    /// `1 + log10(tf)`, or 0 when the term is absent from the document.
    pub fn term_frequency_weight(&self, doc_id: DocId) -> f64 {
        match self.term_frequency(doc_id) {
            0 => 0.0,
            tf => 1.0 + (tf as f64).log10(),
        }
    }

    pub fn tf_idf(&self, doc_id: DocId) -> f64 {
        self.term_frequency_weight(doc_id) * self.idf
    }

    /// Checks the structural invariants of the postings.
    pub fn validate(&self, num_docs: u32) -> Result<()> {
        if self.postings.is_empty() {
            return Err(SearchError::malformed(&self.token, "term has no postings"));
        }
        for (&doc_id, posting) in &self.postings {
            if doc_id >= num_docs {
                return Err(SearchError::malformed(
                    &self.token,
                    format!("document {doc_id} outside collection of {num_docs}"),
                ));
            }
            if posting.is_empty() {
                return Err(SearchError::malformed(&self.token, format!("empty posting for document {doc_id}")));
            }
            if posting[0] == 0 {
                return Err(SearchError::malformed(&self.token, format!("zero position in document {doc_id}")));
            }
            if posting.windows(2).any(|w| w[0] >= w[1]) {
                return Err(SearchError::malformed(
                    &self.token,
                    format!("positions not strictly ascending in document {doc_id}"),
                ));
            }
        }
        Ok(())
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool { self.token == other.token }
}

impl Eq for Term {}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering { self.token.cmp(&other.token) }
}
