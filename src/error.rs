use uuid::Uuid;

/// Failure raised by the retrieval collaborator boundary.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("retrieval service base URL is not configured")]
    Config,
    #[error("retrieval service timed out after {0}s")]
    Timeout(u64),
    #[error("failed to reach retrieval service")]
    Network(#[source] reqwest::Error),
    #[error("retrieval service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("failed to decode retrieval payload")]
    Decode(#[source] reqwest::Error),
}

/// Which pipeline stage failed. Serialized as a stable kind code so callers
/// can branch on it without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SemanticAnalysisFailed,
    RetrievalFailed,
    ClusteringFailed,
    FormattingFailed,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::SemanticAnalysisFailed => "SEMANTIC_ANALYSIS_FAILED",
            ErrorKind::RetrievalFailed => "RETRIEVAL_FAILED",
            ErrorKind::ClusteringFailed => "CLUSTERING_FAILED",
            ErrorKind::FormattingFailed => "FORMATTING_FAILED",
        }
    }
}

/// Top-level pipeline failure: a kind code, the per-request correlation id,
/// and the wrapped cause. The cause is logged server-side and never sent to
/// the caller.
#[derive(Debug, thiserror::Error)]
#[error("{} [{correlation_id}]", kind.code())]
pub struct PipelineError {
    pub kind: ErrorKind,
    pub correlation_id: Uuid,
    #[source]
    pub cause: anyhow::Error,
}

impl PipelineError {
    pub fn new(kind: ErrorKind, correlation_id: Uuid, cause: impl Into<anyhow::Error>) -> Self {
        Self {
            kind,
            correlation_id,
            cause: cause.into(),
        }
    }
}
