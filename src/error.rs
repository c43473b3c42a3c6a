use thiserror::Error;

/// Failures at the page-fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: the request never produced a usable
    /// response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote service answered but flagged the request itself as
    /// invalid (missing page, bad parameters, ...).
    #[error("MediaWiki error {code}: {info}")]
    Remote { code: String, info: String },

    /// The remote answered with a shape we cannot interpret.
    #[error("malformed MediaWiki response: {0}")]
    Malformed(String),
}

/// Everything that can terminate a traversal session. None of these are
/// recovered internally; each one ends the session immediately.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The start page, or a page the remote resolved it to, is not a
    /// mainspace article.
    #[error("invalid page name '{0}'")]
    InvalidPageName(String),

    #[error("MediaWiki error {code}: {info}")]
    Remote { code: String, info: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed MediaWiki response: {0}")]
    Malformed(String),

    /// A candidate next page was already recorded as a link source.
    #[error("loop detected")]
    LoopDetected,

    /// Whole-page escalation still produced no qualifying link.
    #[error("no valid link found in page '{0}'")]
    LinkNotFound(String),
}

impl From<FetchError> for TraceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Network(e) => TraceError::Network(e.to_string()),
            FetchError::Remote { code, info } => TraceError::Remote { code, info },
            FetchError::Malformed(info) => TraceError::Malformed(info),
        }
    }
}
