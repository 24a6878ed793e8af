use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Semantic summary of a question: the themes, concepts, and entities the
/// expansion and scoring stages key off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemanticAnalysis {
    pub themes: Vec<String>,
    pub concepts: Vec<String>,
    pub entities: Vec<String>,
}

/// A theme tag carried by a verse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub confidence: f32,
    pub source: ThemeSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSource {
    /// Matched a theme/concept from the semantic analysis
    Semantic,
    /// Matched the fixed domain term table
    DomainLookup,
    /// Attached to a canonical fallback verse
    Canonical,
}

/// Envelope metadata for a verse: where it came from and whether the request
/// that produced it was a targeted query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseMetadata {
    pub uri: Option<String>,
    pub collection: Option<String>,
    pub verse_number: Option<usize>,
    pub targeted_query: bool,
    /// Set when a targeted query matched this verse's collection
    pub target_store: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRanking {
    /// Position of the source line within its result blob
    pub position: usize,
    /// Raw score assigned at extraction time
    pub score: f32,
    /// Bonus earned by containing top expansion terms
    pub expansion_boost: f32,
}

/// One structured retrieval result record. Not necessarily a literal poetic
/// verse; any scored line of retrieved scripture text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: String,
    pub reference: String,
    pub text: String,
    pub translation: String,
    pub interpretation: String,
    /// Nominally in [0,1]; targeted-store boosts can push it above 1.0
    pub relevance: f32,
    pub themes: Vec<Theme>,
    pub metadata: VerseMetadata,
    pub ranking: VerseRanking,
}

/// A theme group of surviving verses. Relevance is the max of its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub theme: String,
    pub relevance: f32,
    pub verses: Vec<Verse>,
}

// ─── Request / response ──────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    #[serde(default)]
    pub context: QueryContext,
    #[serde(default)]
    pub options: QueryOptions,
}

/// Caller-supplied semantic context. Any field present here overrides the
/// built-in keyword analysis for that field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryContext {
    pub themes: Option<Vec<String>>,
    pub concepts: Option<Vec<String>>,
    pub entities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    /// Include the expanded-query summary in the response metadata
    #[serde(default)]
    pub include_expansion: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub question: String,
    pub clusters: Vec<Cluster>,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub total_clusters: usize,
    pub total_verses: usize,
    pub processing_time_ms: u64,
    pub correlation_id: Uuid,
    pub collection_time: DateTime<Utc>,
    pub collector_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansion: Option<ExpansionSummary>,
}

/// Compact view of what the expander did, returned only when the caller asks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionSummary {
    pub expansion_count: usize,
    pub is_targeted: bool,
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_source_serializes_to_snake_case() {
        let json = serde_json::to_value(ThemeSource::DomainLookup).unwrap();
        assert_eq!(json, "domain_lookup");
    }

    #[test]
    fn test_query_request_defaults() {
        let req: QueryRequest =
            serde_json::from_str(r#"{"question": "what is dharma"}"#).unwrap();
        assert_eq!(req.question, "what is dharma");
        assert!(req.context.themes.is_none());
        assert!(!req.options.include_expansion);
    }

    #[test]
    fn test_verse_round_trips_camel_case() {
        let verse = Verse {
            id: "gita-2-47-0".to_string(),
            reference: "2.47".to_string(),
            text: "karmaṇy evādhikāras te".to_string(),
            translation: String::new(),
            interpretation: String::new(),
            relevance: 0.7,
            themes: vec![],
            metadata: VerseMetadata::default(),
            ranking: VerseRanking::default(),
        };
        let json = serde_json::to_value(&verse).unwrap();
        assert!(json.get("targetStore").is_none()); // nested under metadata
        assert!(json["metadata"].get("targetedQuery").is_some());
        let back: Verse = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, verse.id);
    }
}
