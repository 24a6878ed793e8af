//! Verse extraction: turn the raw retrieval payload into structured,
//! scored [`Verse`] records.
//!
//! Each payload shape gets its own parser. The nested step structure carries
//! search results whose `content`/`text` blobs are split into candidate
//! lines; legacy results instead carry `snippetInfo` entries with Devanagari
//! mixed into the snippet text. Flat answer text is scanned for repeating
//! `**Verse:**` markers. When nothing parses, a small canonical set stands in
//! so the caller never sees an empty result for an on-domain question.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::expand::domain::TARGETED_STORE;
use crate::expand::ExpandedQuery;
use crate::models::{SemanticAnalysis, Theme, ThemeSource, Verse, VerseMetadata, VerseRanking};
use crate::retrieval::{PayloadShape, RawPayload};
use crate::scoring::{keyword_overlap, vector_similarity, EmbeddingTable};
use crate::semantics::DOMAIN_THEMES;

/// Lines shorter than this are noise, not verses.
const MIN_LINE_CHARS: usize = 5;
/// Bonus per top expansion term found in the verse text.
const BOOST_PER_TERM: f32 = 0.02;
const MAX_EXPANSION_BOOST: f32 = 0.1;
/// Only the strongest expansion terms count toward the boost.
const BOOST_TERM_WINDOW: usize = 10;
/// Base relevance assigned to canonical fallback verses.
const FALLBACK_RELEVANCE: f32 = 0.5;

const VERSE_MARKER: &str = "**Verse:**";

/// Leading `(1.2.3)` or `1.2.3` style reference on a line.
static LEADING_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(?(\d+(?:\.\d+){1,2})\)?[.:\s]*").unwrap());

/// Any dotted numeric reference inside a snippet.
static ANY_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+){1,2}").unwrap());

/// A run of Devanagari text, including danda punctuation.
static DEVANAGARI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{0900}-\u{097F}][\u{0900}-\u{097F}\s।॥]*").unwrap());

struct ExtractCtx<'a> {
    semantics: &'a SemanticAnalysis,
    expanded: &'a ExpandedQuery,
    embeddings: &'a EmbeddingTable,
}

/// Parse the payload into verses, falling back to the canonical set when
/// nothing parsable comes back.
pub fn extract_verses(
    payload: &RawPayload,
    semantics: &SemanticAnalysis,
    expanded: &ExpandedQuery,
    embeddings: &EmbeddingTable,
) -> Vec<Verse> {
    let ctx = ExtractCtx {
        semantics,
        expanded,
        embeddings,
    };

    let verses = match payload.classify() {
        PayloadShape::Steps(steps) => from_steps(steps, &ctx),
        PayloadShape::AnswerText(text) => from_answer_text(text, &ctx),
        PayloadShape::Empty => Vec::new(),
    };

    if verses.is_empty() {
        tracing::warn!("No verses extracted from payload, serving canonical fallback");
        return fallback_verses(semantics);
    }

    tracing::debug!("Extracted {} verses from payload", verses.len());
    verses
}

// ─── Steps shape ─────────────────────────────────────────

fn from_steps(steps: &[Value], ctx: &ExtractCtx) -> Vec<Verse> {
    let mut verses = Vec::new();

    for step in steps {
        let Some(actions) = step.get("actions").and_then(Value::as_array) else {
            continue;
        };
        for action in actions {
            let Some(results) = action
                .get("observation")
                .and_then(|o| o.get("searchResults"))
                .and_then(Value::as_array)
            else {
                continue;
            };
            for result in results {
                verses.extend(from_search_result(result, ctx));
            }
        }
    }

    verses
}

fn from_search_result(result: &Value, ctx: &ExtractCtx) -> Vec<Verse> {
    let title = result
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("result");
    let uri = result
        .get("uri")
        .or_else(|| result.get("link"))
        .and_then(Value::as_str);

    let blob = result
        .get("content")
        .or_else(|| result.get("text"))
        .and_then(Value::as_str);

    if let Some(blob) = blob {
        return blob
            .lines()
            .enumerate()
            .filter_map(|(i, line)| verse_from_line(line, i, title, uri, ctx))
            .collect();
    }

    // Legacy result: snippetInfo entries with Devanagari inline
    if let Some(snippets) = result.get("snippetInfo").and_then(Value::as_array) {
        return snippets
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let snippet = item.get("snippet").and_then(Value::as_str)?;
                verse_from_snippet(snippet, i, title, uri, ctx)
            })
            .collect();
    }

    Vec::new()
}

fn verse_from_line(
    line: &str,
    index: usize,
    title: &str,
    uri: Option<&str>,
    ctx: &ExtractCtx,
) -> Option<Verse> {
    let trimmed = line.trim();
    if trimmed.chars().count() < MIN_LINE_CHARS {
        return None;
    }

    let (reference, text) = match LEADING_REF_RE.captures(trimmed) {
        Some(caps) => {
            let rest = trimmed[caps.get(0).map_or(0, |m| m.end())..].trim();
            // A bare reference with no text behind it is not a verse
            if rest.chars().count() < MIN_LINE_CHARS {
                return None;
            }
            (caps[1].to_string(), rest.to_string())
        }
        None => (format!("{title} #{}", index + 1), trimmed.to_string()),
    };

    Some(build_verse(
        text,
        String::new(),
        reference,
        index,
        title,
        uri,
        ctx,
    ))
}

fn verse_from_snippet(
    snippet: &str,
    index: usize,
    title: &str,
    uri: Option<&str>,
    ctx: &ExtractCtx,
) -> Option<Verse> {
    let trimmed = snippet.trim();
    if trimmed.chars().count() < MIN_LINE_CHARS {
        return None;
    }

    let sanskrit = DEVANAGARI_RE
        .find(trimmed)
        .map(|m| m.as_str().trim().to_string());
    let reference = ANY_REF_RE
        .find(trimmed)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| format!("{title} #{}", index + 1));
    let translation = DEVANAGARI_RE.replace_all(trimmed, " ");
    let translation = translation.split_whitespace().collect::<Vec<_>>().join(" ");

    let text = sanskrit.unwrap_or_else(|| trimmed.to_string());
    Some(build_verse(
        text,
        translation,
        reference,
        index,
        title,
        uri,
        ctx,
    ))
}

// ─── Answer-text shape ───────────────────────────────────

fn from_answer_text(text: &str, ctx: &ExtractCtx) -> Vec<Verse> {
    if text.contains(VERSE_MARKER) {
        return text
            .split(VERSE_MARKER)
            .skip(1)
            .enumerate()
            .filter_map(|(i, segment)| verse_from_line(segment.trim(), i, "answer", None, ctx))
            .collect();
    }

    // No markers: treat each substantive line as a candidate
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| verse_from_line(line, i, "answer", None, ctx))
        .collect()
}

// ─── Shared construction ─────────────────────────────────

fn build_verse(
    text: String,
    translation: String,
    reference: String,
    index: usize,
    title: &str,
    uri: Option<&str>,
    ctx: &ExtractCtx,
) -> Verse {
    let source = uri.unwrap_or(title);
    let collection = detect_collection(source);

    let overlap = keyword_overlap(&text, ctx.semantics);
    let similarity = vector_similarity(ctx.embeddings, &ctx.expanded.original_query, &text);
    let relevance = overlap.max(similarity);

    let boost = expansion_boost(&text, ctx.expanded);
    let themes = tag_themes(&text, ctx.semantics);
    let targeted = ctx.expanded.is_targeted;
    let target_store = (targeted && collection.as_deref() == Some(TARGETED_STORE))
        .then(|| TARGETED_STORE.to_string());

    Verse {
        id: format!("{}-{index}", slug(title)),
        metadata: VerseMetadata {
            uri: uri.map(str::to_string),
            collection,
            verse_number: verse_number(&reference),
            targeted_query: targeted,
            target_store,
        },
        reference,
        text,
        translation,
        interpretation: String::new(),
        relevance,
        themes,
        ranking: VerseRanking {
            position: index,
            score: relevance,
            expansion_boost: boost,
        },
    }
}

/// Theme tags for a verse: semantic-analysis themes whose trigger words
/// appear in the text, then fixed domain terms, first hit per theme wins.
fn tag_themes(text: &str, semantics: &SemanticAnalysis) -> Vec<Theme> {
    let lower = text.to_lowercase();
    let mut themes: Vec<Theme> = Vec::new();

    for name in &semantics.themes {
        if lower.contains(&name.to_lowercase()) && !themes.iter().any(|t| t.name == *name) {
            themes.push(Theme {
                name: name.clone(),
                confidence: 0.9,
                source: ThemeSource::Semantic,
            });
        }
    }
    for (term, theme) in DOMAIN_THEMES.iter() {
        if lower.contains(term) && !themes.iter().any(|t| t.name == *theme) {
            themes.push(Theme {
                name: (*theme).to_string(),
                confidence: 0.7,
                source: ThemeSource::DomainLookup,
            });
        }
    }

    themes
}

fn expansion_boost(text: &str, expanded: &ExpandedQuery) -> f32 {
    let lower = text.to_lowercase();
    let hits = expanded
        .expansion_terms
        .iter()
        .take(BOOST_TERM_WINDOW)
        .filter(|term| lower.contains(&term.to_lowercase()))
        .count();
    (hits as f32 * BOOST_PER_TERM).min(MAX_EXPANSION_BOOST)
}

fn detect_collection(source: &str) -> Option<String> {
    let lower = source.to_lowercase();
    if lower.contains("upanishad") {
        Some("upanishads".to_string())
    } else if lower.contains("gita") {
        Some("bhagavad-gita".to_string())
    } else if lower.contains("veda") {
        Some("vedas".to_string())
    } else if lower.contains("brahma") {
        Some("brahma-sutras".to_string())
    } else {
        None
    }
}

fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        out.push_str("result");
    }
    out
}

/// Last segment of a dotted numeric reference, when there is one.
fn verse_number(reference: &str) -> Option<usize> {
    let m = ANY_REF_RE.find(reference)?;
    m.as_str().rsplit('.').next()?.parse().ok()
}

// ─── Canonical fallback ──────────────────────────────────

struct CanonicalVerse {
    reference: &'static str,
    text: &'static str,
    translation: &'static str,
    interpretation: &'static str,
    themes: &'static [&'static str],
}

static CANONICAL_VERSES: Lazy<Vec<CanonicalVerse>> = Lazy::new(|| {
    vec![
        CanonicalVerse {
            reference: "Bhagavad Gita 2.47",
            text: "karmaṇy evādhikāras te mā phaleṣu kadācana",
            translation: "You have a right to action alone, never to its fruits.",
            interpretation: "Act without attachment to outcomes.",
            themes: &["Karma & Action", "Suffering & Detachment"],
        },
        CanonicalVerse {
            reference: "Bhagavad Gita 4.7",
            text: "yadā yadā hi dharmasya glānir bhavati bhārata",
            translation: "Whenever righteousness declines, O Bharata, I manifest myself.",
            interpretation: "Dharma is restored whenever it decays.",
            themes: &["Dharma & Duty"],
        },
        CanonicalVerse {
            reference: "Katha Upanishad 1.2.23",
            text: "nāyam ātmā pravacanena labhyo na medhayā na bahunā śrutena",
            translation: "The Self is not attained through discourse, intellect, or much learning.",
            interpretation: "Self-knowledge comes by direct realization, not study alone.",
            themes: &["Self & Consciousness", "Knowledge & Wisdom"],
        },
        CanonicalVerse {
            reference: "Chandogya Upanishad 6.8.7",
            text: "tat tvam asi",
            translation: "That thou art.",
            interpretation: "The individual self is not other than the Absolute.",
            themes: &["The Absolute", "Self & Consciousness"],
        },
        CanonicalVerse {
            reference: "Isha Upanishad 1",
            text: "īśāvāsyam idaṃ sarvaṃ yat kiñca jagatyāṃ jagat",
            translation: "All this, whatever moves in this moving world, is pervaded by the Lord.",
            interpretation: "Renounce possessiveness and enjoy what is given.",
            themes: &["The Absolute", "Suffering & Detachment"],
        },
        CanonicalVerse {
            reference: "Brihadaranyaka Upanishad 1.3.28",
            text: "asato mā sad gamaya, tamaso mā jyotir gamaya",
            translation: "Lead me from the unreal to the real, from darkness to light.",
            interpretation: "A prayer for passage from ignorance to liberation.",
            themes: &["Liberation", "Knowledge & Wisdom"],
        },
    ]
});

/// Fixed canonical verses, filtered to those whose theme set intersects the
/// analysis's themes or concepts (with a concept named in the translation
/// also counting). An empty analysis keeps the full set.
pub fn fallback_verses(semantics: &SemanticAnalysis) -> Vec<Verse> {
    let unfiltered = semantics.themes.is_empty() && semantics.concepts.is_empty();

    CANONICAL_VERSES
        .iter()
        .enumerate()
        .filter(|(_, canonical)| unfiltered || matches_semantics(canonical, semantics))
        .map(|(i, canonical)| Verse {
            id: format!("canonical-{}", slug(canonical.reference)),
            reference: canonical.reference.to_string(),
            text: canonical.text.to_string(),
            translation: canonical.translation.to_string(),
            interpretation: canonical.interpretation.to_string(),
            relevance: FALLBACK_RELEVANCE,
            themes: canonical
                .themes
                .iter()
                .map(|name| Theme {
                    name: (*name).to_string(),
                    confidence: 1.0,
                    source: ThemeSource::Canonical,
                })
                .collect(),
            metadata: VerseMetadata {
                uri: None,
                collection: detect_collection(canonical.reference),
                verse_number: None,
                targeted_query: false,
                target_store: None,
            },
            ranking: VerseRanking {
                position: i,
                score: FALLBACK_RELEVANCE,
                expansion_boost: 0.0,
            },
        })
        .collect()
}

fn matches_semantics(canonical: &CanonicalVerse, semantics: &SemanticAnalysis) -> bool {
    // Both the analysis themes and its concepts count against the verse's
    // fixed theme set
    let theme_hit = canonical.themes.iter().any(|t| {
        semantics.themes.iter().any(|s| s.eq_ignore_ascii_case(t))
            || semantics.concepts.iter().any(|c| c.eq_ignore_ascii_case(t))
    });
    if theme_hit {
        return true;
    }
    let lower = canonical.translation.to_lowercase();
    semantics
        .concepts
        .iter()
        .any(|c| lower.contains(&c.to_lowercase()))
}
