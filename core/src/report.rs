use crate::index::TermIndex;
use crate::{DocId, Position};
use serde::Serialize;

/// Per-document statistics of one term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocTermStats {
    pub doc_id: DocId,
    pub term_frequency: u32,
    pub term_frequency_weight: f64,
    pub tf_idf: f64,
    pub positions: Vec<Position>,
}

/// One row of the term table: global statistics plus every containing document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRow {
    pub token: String,
    pub document_frequency: u32,
    pub inverse_document_frequency: f64,
    pub total_frequency: u64,
    pub documents: Vec<DocTermStats>,
}

pub fn term_table(index: &TermIndex) -> Vec<TermRow> {
    index
        .terms()
        .iter()
        .map(|term| TermRow {
            token: term.token().to_string(),
            document_frequency: term.document_frequency(),
            inverse_document_frequency: term.inverse_document_frequency(),
            total_frequency: term.total_frequency(),
            documents: term
                .postings()
                .iter()
                .map(|(&doc_id, positions)| DocTermStats {
                    doc_id,
                    term_frequency: positions.len() as u32,
                    term_frequency_weight: term.term_frequency_weight(doc_id),
                    tf_idf: term.tf_idf(doc_id),
                    positions: positions.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Dense term x document TF-IDF matrix, one row per term in token order.
pub fn tf_idf_matrix(index: &TermIndex) -> Vec<(String, Vec<f64>)> {
    index
        .terms()
        .iter()
        .map(|term| {
            let row: Vec<f64> = (0..index.num_docs()).map(|doc_id| term.tf_idf(doc_id)).collect();
            (term.token().to_string(), row)
        })
        .collect()
}
