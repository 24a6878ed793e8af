//! Relevance scoring: keyword overlap against the semantic summary, and mean
//! cosine similarity over the fixed term-embedding table.

pub mod embedding;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SemanticAnalysis;
pub use embedding::{cosine_similarity, EmbeddingTable};

/// Base score every candidate text starts from.
const OVERLAP_BASE: f32 = 0.5;
/// Added per matching theme or concept.
const OVERLAP_STEP: f32 = 0.2;
/// Returned when either side yields no Sanskrit-like terms.
const NO_TERMS_FLOOR: f32 = 0.05;
/// Mean similarities below this clamp to zero.
const SIMILARITY_FLOOR: f32 = 0.1;

/// Words carrying IAST diacritics are treated as Sanskrit.
static IAST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[A-Za-zāīūṛṝḷḹṃḥśṣṭḍṇṅñ]*[āīūṛṝḷḹṃḥśṣṭḍṇṅñ][A-Za-zāīūṛṝḷḹṃḥśṣṭḍṇṅñ]*",
    )
    .unwrap()
});

/// ASCII-transliterated core terms count as Sanskrit too.
static KNOWN_TERM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(dharma|karma|moksha|mukti|atman|brahman|jiva|maya|samsara|bhakti|jnana|yoga|vedanta|guru|mantra|dhyana|ahimsa|satya|shanti|prana|vairagya|tapas|upanishad|veda|gita)\b",
    )
    .unwrap()
});

/// Keyword-overlap score: base 0.5, +0.2 per semantic theme found as a
/// substring of the text, +0.2 per matching concept, capped at 1.0.
pub fn keyword_overlap(text: &str, semantics: &SemanticAnalysis) -> f32 {
    let lower = text.to_lowercase();
    let mut score = OVERLAP_BASE;

    for theme in &semantics.themes {
        if lower.contains(&theme.to_lowercase()) {
            score += OVERLAP_STEP;
        }
    }
    for concept in &semantics.concepts {
        if lower.contains(&concept.to_lowercase()) {
            score += OVERLAP_STEP;
        }
    }

    score.min(1.0)
}

/// Extract Sanskrit-like terms from free text: IAST-diacritic words plus
/// known transliterated core terms, lowercased and deduplicated.
pub fn extract_sanskrit_terms(text: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for m in IAST_RE.find_iter(text).chain(KNOWN_TERM_RE.find_iter(text)) {
        let term = m.as_str().to_lowercase();
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Vector-similarity score between a query and a candidate text.
///
/// Both sides are reduced to their Sanskrit-like terms; the score is the
/// arithmetic mean of cosine similarity over every query-term × text-term
/// pair present in the embedding table. No terms on either side scores the
/// fixed floor 0.05; no resolvable pairs scores 0; means below 0.1 clamp to
/// 0; the result never exceeds 1.0.
pub fn vector_similarity(table: &EmbeddingTable, query: &str, text: &str) -> f32 {
    let query_terms = extract_sanskrit_terms(query);
    let text_terms = extract_sanskrit_terms(text);

    if query_terms.is_empty() || text_terms.is_empty() {
        return NO_TERMS_FLOOR;
    }

    let mut total = 0.0f32;
    let mut pairs = 0usize;

    for q in &query_terms {
        let Some(qv) = table.get(q) else { continue };
        for t in &text_terms {
            let Some(tv) = table.get(t) else { continue };
            total += cosine_similarity(qv, tv);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return 0.0;
    }

    let mean = total / pairs as f32;
    if mean < SIMILARITY_FLOOR {
        0.0
    } else {
        mean.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semantics(themes: &[&str], concepts: &[&str]) -> SemanticAnalysis {
        SemanticAnalysis {
            themes: themes.iter().map(|s| s.to_string()).collect(),
            concepts: concepts.iter().map(|s| s.to_string()).collect(),
            entities: vec![],
        }
    }

    #[test]
    fn test_overlap_base_score() {
        let score = keyword_overlap("some unrelated text", &semantics(&[], &[]));
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_overlap_theme_and_concept_add_up() {
        let score = keyword_overlap(
            "a verse about karma and attachment",
            &semantics(&["karma"], &["attachment"]),
        );
        assert!((score - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_overlap_clamped_at_one() {
        let score = keyword_overlap(
            "karma dharma moksha attachment desire",
            &semantics(&["karma", "dharma", "moksha"], &["attachment", "desire"]),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_overlap_is_case_insensitive() {
        let score = keyword_overlap("KARMA yoga", &semantics(&["Karma"], &[]));
        assert!((score - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_extract_iast_terms() {
        let terms = extract_sanskrit_terms("karmaṇy evādhikāras te mā phaleṣu");
        assert!(terms.contains(&"karmaṇy".to_string()));
        assert!(terms.contains(&"phaleṣu".to_string()));
        // plain English word with no diacritic and not in the known list
        assert!(!terms.contains(&"te".to_string()));
    }

    #[test]
    fn test_extract_known_transliterated_terms() {
        let terms = extract_sanskrit_terms("what is dharma and karma");
        assert_eq!(terms, vec!["dharma".to_string(), "karma".to_string()]);
    }

    #[test]
    fn test_extract_deduplicates() {
        let terms = extract_sanskrit_terms("karma karma karma");
        assert_eq!(terms.len(), 1);
    }

    #[test]
    fn test_similarity_no_terms_floor() {
        let table = EmbeddingTable::bundled().unwrap();
        assert_eq!(vector_similarity(&table, "hello world", "dharma text"), 0.05);
        assert_eq!(vector_similarity(&table, "dharma", "plain english"), 0.05);
    }

    #[test]
    fn test_similarity_no_table_pairs_is_zero() {
        // Both sides have Sanskrit-like terms, none in the table
        let table = EmbeddingTable::from_json(r#"{}"#).unwrap();
        assert_eq!(vector_similarity(&table, "dharma", "karma"), 0.0);
    }

    #[test]
    fn test_similarity_identical_term_scores_high() {
        let table = EmbeddingTable::bundled().unwrap();
        let score = vector_similarity(&table, "what is dharma", "dharma is the way");
        assert!((score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_similarity_clamped_to_floor() {
        // Two near-orthogonal vectors: mean below 0.1 must clamp to 0
        let table = EmbeddingTable::from_json(
            r#"{"dharma": [1.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0],
                "maya":   [0.0,1.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0]}"#,
        )
        .unwrap();
        assert_eq!(vector_similarity(&table, "dharma", "maya"), 0.0);
    }
}
