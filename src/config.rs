use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Lexicon source files
    pub lexicon: LexiconConfig,
    /// Retrieval collaborator configuration
    pub retrieval: RetrievalConfig,
}

/// Paths to the two file-based lexicon sources. Either file may be absent;
/// loading continues with whatever sources are available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Newline-delimited JSON of per-document descriptors with lemma lists
    pub metadata_path: PathBuf,
    /// Plain-text classical corpus (Amarakosha-style synonym runs)
    pub corpus_path: PathBuf,
}

/// Configuration for the hosted search/answer service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Full endpoint URL for the search/answer call.
    /// If None, every query fails with a config error.
    pub base_url: Option<String>,
    /// Bearer token for the service
    pub api_key: Option<String>,
    /// Ask the service to include citations in its answer
    pub include_citations: bool,
    /// Preamble sent in the answer-generation prompt spec
    pub preamble: String,
    /// Request timeout in seconds (capped at 30)
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9400".to_string(),
            lexicon: LexiconConfig::default(),
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            metadata_path: PathBuf::from("./data/document_lemmas.ndjson"),
            corpus_path: PathBuf::from("./data/amarakosha.txt"),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            include_citations: true,
            preamble: "Answer using only the retrieved scripture passages.".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("SHASTRA_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(path) = std::env::var("SHASTRA_LEXICON_METADATA") {
            config.lexicon.metadata_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("SHASTRA_LEXICON_CORPUS") {
            config.lexicon.corpus_path = PathBuf::from(path);
        }
        if let Ok(url) = std::env::var("RETRIEVAL_BASE_URL") {
            config.retrieval.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("RETRIEVAL_API_KEY") {
            config.retrieval.api_key = Some(key);
        }
        if let Ok(val) = std::env::var("RETRIEVAL_INCLUDE_CITATIONS") {
            if let Ok(v) = val.parse() {
                config.retrieval.include_citations = v;
            }
        }
        if let Ok(val) = std::env::var("RETRIEVAL_PREAMBLE") {
            config.retrieval.preamble = val;
        }
        if let Ok(val) = std::env::var("RETRIEVAL_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.retrieval.timeout_secs = v.min(30); // Cap at 30s
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_is_30s() {
        let config = RetrievalConfig::default();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_default_has_no_endpoint() {
        let config = Config::default();
        assert!(config.retrieval.base_url.is_none());
        assert!(config.retrieval.include_citations);
    }
}
