//! TF-IDF weighting and cosine-similarity ranking.
//!
//! Documents are normalized by the length of their full-vocabulary TF-IDF
//! vector; the dot product only covers the query's dimensions.

use crate::error::{Result, SearchError};
use crate::index::TermIndex;
use crate::DocId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-document Euclidean norm of the TF-IDF vector, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLengths {
    lengths: Vec<f64>,
}

impl DocumentLengths {
    pub fn compute(index: &TermIndex) -> Self {
        let mut sums = vec![0.0f64; index.num_docs() as usize];
        // Only documents in a term's postings have non-zero tf-idf.
        for term in index.terms() {
            for doc_id in term.documents() {
                let w = term.tf_idf(doc_id);
                sums[doc_id as usize] += w * w;
            }
        }
        let lengths: Vec<f64> = sums.into_iter().map(f64::sqrt).collect();
        tracing::debug!(documents = lengths.len(), "computed document lengths");
        Self { lengths }
    }

    pub fn get(&self, doc_id: DocId) -> f64 {
        self.lengths.get(doc_id as usize).copied().unwrap_or(0.0)
    }

    pub fn as_slice(&self) -> &[f64] { &self.lengths }
}

/// Query-side statistics for one distinct token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryTermWeight {
    pub term_frequency: u32,
    pub term_frequency_weight: f64,
    pub inverse_document_frequency: f64,
    pub document_frequency: u32,
    pub tf_idf: f64,
    pub normalized_weight: f64,
}

/// Distinct query tokens with their weights, keyed by token.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryVector {
    pub terms: BTreeMap<String, QueryTermWeight>,
    pub length: f64,
}

impl QueryVector {
    /// Build the L2-normalized query vector. Duplicate tokens collapse into
    /// one entry with term frequency 1.
    pub fn build<S: AsRef<str>>(query_tokens: &[S], index: &TermIndex) -> Result<Self> {
        let num_docs = index.num_docs() as f64;
        let mut terms = BTreeMap::new();
        for token in query_tokens {
            let token = token.as_ref();
            if terms.contains_key(token) {
                continue;
            }
            let term = index
                .get(token)
                .ok_or_else(|| SearchError::UnknownQueryTerm(token.to_string()))?;
            let df = term.document_frequency();
            let tf_weight = 1.0;
            terms.insert(
                token.to_string(),
                QueryTermWeight {
                    term_frequency: 1,
                    term_frequency_weight: tf_weight,
                    inverse_document_frequency: term.inverse_document_frequency(),
                    document_frequency: df,
                    tf_idf: tf_weight * (num_docs / df as f64).log10(),
                    normalized_weight: 0.0,
                },
            );
        }

        let length = terms.values().map(|w| w.tf_idf * w.tf_idf).sum::<f64>().sqrt();
        if length > 0.0 {
            for w in terms.values_mut() {
                w.normalized_weight = w.tf_idf / length;
            }
        }
        Ok(Self { terms, length })
    }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

/// Sum over query terms of `normalized_weight * tf_idf(term, doc) / doc_length`.
/// A zero-length document scores 0.
pub fn cosine_similarity(doc_id: DocId, query: &QueryVector, index: &TermIndex, doc_length: f64) -> Result<f64> {
    if doc_length == 0.0 {
        return Ok(0.0);
    }
    let mut score = 0.0;
    for (token, weight) in &query.terms {
        let term = index
            .get(token)
            .ok_or_else(|| SearchError::UnknownQueryTerm(token.clone()))?;
        score += weight.normalized_weight * (term.tf_idf(doc_id) / doc_length);
    }
    Ok(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
}

/// Score every document; descending by score, ties by ascending doc id.
pub fn rank(query: &QueryVector, index: &TermIndex, lengths: &DocumentLengths) -> Result<Vec<ScoredDoc>> {
    let mut scored = Vec::with_capacity(index.num_docs() as usize);
    for doc_id in 0..index.num_docs() {
        let score = cosine_similarity(doc_id, query, index, lengths.get(doc_id))?;
        scored.push(ScoredDoc { doc_id, score });
    }
    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
    tracing::debug!(query_terms = query.terms.len(), documents = scored.len(), "ranked documents");
    Ok(scored)
}

/// Build the query vector for `query_tokens` and rank every document.
pub fn rank_query<S: AsRef<str>>(query_tokens: &[S], index: &TermIndex, lengths: &DocumentLengths) -> Result<Vec<ScoredDoc>> {
    let query = QueryVector::build(query_tokens, index)?;
    rank(&query, index, lengths)
}
