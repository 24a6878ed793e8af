//! Lightweight keyword-based semantic analysis of a question.
//!
//! The hosted answer backend performs its own deep analysis; this module only
//! needs to surface enough themes/concepts/entities to drive expansion and
//! scoring. Caller-supplied context always wins over the keyword tables.

use once_cell::sync::Lazy;

use crate::models::{QueryContext, SemanticAnalysis};

/// Fixed domain term → theme table, shared with verse theme tagging.
pub static DOMAIN_THEMES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("dharma", "Dharma & Duty"),
        ("duty", "Dharma & Duty"),
        ("righteousness", "Dharma & Duty"),
        ("karma", "Karma & Action"),
        ("action", "Karma & Action"),
        ("moksha", "Liberation"),
        ("liberation", "Liberation"),
        ("mukti", "Liberation"),
        ("atman", "Self & Consciousness"),
        ("self", "Self & Consciousness"),
        ("soul", "Self & Consciousness"),
        ("consciousness", "Self & Consciousness"),
        ("brahman", "The Absolute"),
        ("absolute", "The Absolute"),
        ("meditation", "Meditation & Practice"),
        ("dhyana", "Meditation & Practice"),
        ("yoga", "Meditation & Practice"),
        ("bhakti", "Devotion"),
        ("devotion", "Devotion"),
        ("jnana", "Knowledge & Wisdom"),
        ("knowledge", "Knowledge & Wisdom"),
        ("wisdom", "Knowledge & Wisdom"),
        ("maya", "Maya & Illusion"),
        ("illusion", "Maya & Illusion"),
        ("death", "Death & Rebirth"),
        ("rebirth", "Death & Rebirth"),
        ("samsara", "Death & Rebirth"),
        ("peace", "Peace"),
        ("shanti", "Peace"),
        ("suffering", "Suffering & Detachment"),
        ("detachment", "Suffering & Detachment"),
    ]
});

/// Concept keywords: broader notions than themes, matched the same way.
static CONCEPT_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "truth", "mind", "desire", "fear", "attachment", "renunciation",
        "discipline", "silence", "purpose", "happiness", "ignorance", "ego",
    ]
});

/// Known scripture names surfaced as entities.
static ENTITY_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "gita", "upanishad", "upanishads", "veda", "vedas", "brahma sutra",
        "mahabharata", "ramayana", "yoga sutra", "amarakosha",
    ]
});

/// Derive a semantic summary from the question, honoring any context the
/// caller supplied.
pub fn analyze(question: &str, context: &QueryContext) -> SemanticAnalysis {
    let lower = question.to_lowercase();

    let themes = context.themes.clone().unwrap_or_else(|| {
        let mut themes: Vec<String> = Vec::new();
        for (term, theme) in DOMAIN_THEMES.iter() {
            if lower.contains(term) && !themes.iter().any(|t| t == theme) {
                themes.push((*theme).to_string());
            }
        }
        themes
    });

    let concepts = context.concepts.clone().unwrap_or_else(|| {
        CONCEPT_KEYWORDS
            .iter()
            .filter(|c| lower.contains(**c))
            .map(|c| (*c).to_string())
            .collect()
    });

    let entities = context.entities.clone().unwrap_or_else(|| {
        ENTITY_NAMES
            .iter()
            .filter(|e| lower.contains(**e))
            .map(|e| (*e).to_string())
            .collect()
    });

    SemanticAnalysis {
        themes,
        concepts,
        entities,
    }
}
