//! In-memory positional inverted index with phrase-style AND queries and
//! TF-IDF / cosine-similarity ranking.

pub mod error;
pub mod index;
pub mod query;
pub mod report;
pub mod scoring;
pub mod term;
pub mod tokenizer;

/// Dense, zero-based document identifier.
pub type DocId = u32;

/// 1-based token position within a document.
pub type Position = u32;

pub use error::{Result, SearchError};
pub use index::TermIndex;
pub use query::{resolve, Matches};
pub use scoring::{DocumentLengths, QueryTermWeight, QueryVector, ScoredDoc};
pub use term::{Posting, Term};
pub use tokenizer::{tokenize, TokenizerConfig};
