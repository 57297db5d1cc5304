use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The index was asked to build over zero documents; IDF is undefined.
    #[error("cannot build an index over an empty document collection")]
    EmptyCollection,

    /// A query token has no term in the index but scoring needs one.
    #[error("query term not in index: {0:?}")]
    UnknownQueryTerm(String),

    /// A posting or term broke a structural invariant. Indicates a build bug.
    #[error("malformed postings for term {token:?}: {reason}")]
    MalformedPostings { token: String, reason: String },
}

impl SearchError {
    pub fn malformed<T: Into<String>, R: Into<String>>(token: T, reason: R) -> Self {
        SearchError::MalformedPostings { token: token.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
