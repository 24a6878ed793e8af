//! Classical-corpus source: a plain-text synonym lexicon in the Amarakosha
//! layout.
//!
//! After a fixed 45-line header, content is organized as:
//! - section headers `## <name> <number> ##`
//! - verse references `(<book>.<chapter>.<verse>) <text>` which open a new
//!   term-collection run
//! - continuation lines belonging to the most recent verse reference
//!
//! Within a run, a token containing a colon starts a new (term, synonyms)
//! pair; the text before the colon is the term, and the pending pair is
//! flushed first. Plain tokens accumulate as synonyms for the current term.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::{Lexicon, LexiconEntry, LexiconSource};

/// Fixed header/metadata lines to skip before content starts.
const HEADER_LINES: usize = 45;
/// Valid synonyms kept per term.
const MAX_SYNONYMS: usize = 18;
/// Base relevance assigned to every corpus entry.
const BASE_RELEVANCE: f32 = 0.8;

/// Particles that never count as synonyms.
const STOPLIST: [&str; 7] = ["ca", "vā", "tu", "hi", "iti", "eva", "api"];

static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s*(.+?)(?:\s+(\d+))?\s*##").unwrap());
static VERSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\((\d+)\.(\d+)\.(\d+)\)\s*(.*)").unwrap());

/// One in-flight (term, synonyms) pair.
struct Run {
    term: Option<String>,
    synonyms: Vec<String>,
}

/// Load the corpus file into the lexicon. Returns the number of inserted
/// entries. Terms already present (from any source) are left untouched.
pub fn load_corpus(path: &Path, lexicon: &mut Lexicon) -> Result<usize> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;

    let mut inserted = 0usize;
    let mut section: Option<String> = None;
    let mut verse_ref: Option<String> = None;
    let mut collecting = false;
    let mut run = Run {
        term: None,
        synonyms: Vec::new(),
    };

    for line in data.lines().skip(HEADER_LINES) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = SECTION_RE.captures(line) {
            flush(&mut run, &section, &verse_ref, lexicon, &mut inserted);
            section = Some(caps[1].trim().to_string());
            verse_ref = None;
            collecting = false;
            continue;
        }

        if let Some(caps) = VERSE_RE.captures(line) {
            flush(&mut run, &section, &verse_ref, lexicon, &mut inserted);
            verse_ref = Some(format!("{}.{}.{}", &caps[1], &caps[2], &caps[3]));
            collecting = true;
            consume_tokens(&caps[4], &mut run, &section, &verse_ref, lexicon, &mut inserted);
            continue;
        }

        if collecting {
            consume_tokens(line, &mut run, &section, &verse_ref, lexicon, &mut inserted);
        }
    }

    flush(&mut run, &section, &verse_ref, lexicon, &mut inserted);
    Ok(inserted)
}

fn consume_tokens(
    text: &str,
    run: &mut Run,
    section: &Option<String>,
    verse_ref: &Option<String>,
    lexicon: &mut Lexicon,
    inserted: &mut usize,
) {
    for token in text.split_whitespace() {
        if let Some(idx) = token.find(':') {
            flush(run, section, verse_ref, lexicon, inserted);
            let term = token[..idx].trim();
            run.term = if term.is_empty() {
                None
            } else {
                Some(term.to_string())
            };
        } else if token.chars().count() > 1 && !STOPLIST.contains(&token) {
            run.synonyms.push(token.to_string());
        }
    }
}

/// Flush the pending pair into the lexicon: first occurrence of a term wins,
/// synonyms are filtered and capped, and the pair is dropped entirely when it
/// accumulated no synonyms at all.
fn flush(
    run: &mut Run,
    section: &Option<String>,
    verse_ref: &Option<String>,
    lexicon: &mut Lexicon,
    inserted: &mut usize,
) {
    let synonyms = std::mem::take(&mut run.synonyms);
    let Some(term) = run.term.take() else {
        return;
    };
    if synonyms.is_empty() {
        return;
    }

    let valid: Vec<String> = synonyms
        .into_iter()
        .filter(|s| !s.contains('(') && !s.contains(')') && s.chars().count() > 1)
        .take(MAX_SYNONYMS)
        .collect();

    let entry = LexiconEntry {
        frequency: valid.len() as u32,
        expansions: valid,
        section: section.clone(),
        verse_reference: verse_ref.clone(),
        relevance_base: Some(BASE_RELEVANCE),
        source: LexiconSource::Corpus,
    };

    if lexicon.insert_if_absent(&term, entry) {
        *inserted += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn with_header(body: &str) -> String {
        let mut text = String::new();
        for i in 0..HEADER_LINES {
            text.push_str(&format!("header {i}\n"));
        }
        text.push_str(body);
        text
    }

    fn load_from(body: &str) -> (Lexicon, usize) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(with_header(body).as_bytes()).unwrap();
        drop(f);

        let mut lexicon = Lexicon::empty();
        let inserted = load_corpus(&path, &mut lexicon).unwrap();
        (lexicon, inserted)
    }

    #[test]
    fn test_header_lines_are_skipped() {
        // A verse line hidden inside the header must not produce entries
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        let mut text = String::new();
        text.push_str("(9.9.9) ghost: phantom spectre\n");
        for i in 0..(HEADER_LINES - 1) {
            text.push_str(&format!("header {i}\n"));
        }
        text.push_str("## varga 1 ##\n(1.1.1) svar: heaven paradise\n");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(text.as_bytes())
            .unwrap();

        let mut lexicon = Lexicon::empty();
        load_corpus(&path, &mut lexicon).unwrap();
        assert!(lexicon.get("ghost").is_none());
        assert!(lexicon.get("svar").is_some());
    }

    #[test]
    fn test_colon_token_flushes_previous_pair() {
        let (lexicon, inserted) =
            load_from("## varga 1 ##\n(1.1.1) svar: heaven paradise dharmah: duty law\n");
        assert_eq!(inserted, 2);
        assert_eq!(
            lexicon.get("svar").unwrap().expansions,
            vec!["heaven".to_string(), "paradise".to_string()]
        );
        assert_eq!(
            lexicon.get("dharmah").unwrap().expansions,
            vec!["duty".to_string(), "law".to_string()]
        );
    }

    #[test]
    fn test_continuation_lines_extend_the_run() {
        let (lexicon, _) =
            load_from("## varga 1 ##\n(1.1.1) svar: heaven\nparadise firmament\n");
        assert_eq!(
            lexicon.get("svar").unwrap().expansions,
            vec![
                "heaven".to_string(),
                "paradise".to_string(),
                "firmament".to_string()
            ]
        );
    }

    #[test]
    fn test_stoplist_and_short_tokens_excluded() {
        let (lexicon, _) = load_from(
            "## varga 1 ##\n(1.1.1) svar: heaven ca vā tu hi iti eva api x loka\n",
        );
        assert_eq!(
            lexicon.get("svar").unwrap().expansions,
            vec!["heaven".to_string(), "loka".to_string()]
        );
    }

    #[test]
    fn test_parenthesized_synonyms_filtered_on_flush() {
        let (lexicon, _) =
            load_from("## varga 1 ##\n(1.1.1) svar: heaven (skt) para(dise loka\n");
        let entry = lexicon.get("svar").unwrap();
        assert_eq!(
            entry.expansions,
            vec!["heaven".to_string(), "loka".to_string()]
        );
        assert_eq!(entry.frequency, 2);
    }

    #[test]
    fn test_synonym_cap_at_18() {
        let synonyms: Vec<String> = (0..25).map(|i| format!("syn{i:02}")).collect();
        let body = format!("## varga 1 ##\n(1.1.1) big: {}\n", synonyms.join(" "));
        let (lexicon, _) = load_from(&body);
        let entry = lexicon.get("big").unwrap();
        assert_eq!(entry.expansions.len(), MAX_SYNONYMS);
        assert_eq!(entry.frequency, MAX_SYNONYMS as u32);
        assert_eq!(entry.expansions[0], "syn00");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let (lexicon, inserted) = load_from(
            "## varga 1 ##\n(1.1.1) svar: heaven\n(1.1.2) svar: underworld\n",
        );
        assert_eq!(inserted, 1);
        assert_eq!(
            lexicon.get("svar").unwrap().expansions,
            vec!["heaven".to_string()]
        );
    }

    #[test]
    fn test_pair_without_synonyms_is_dropped() {
        let (lexicon, inserted) = load_from("## varga 1 ##\n(1.1.1) lonely: next: duty law\n");
        assert!(lexicon.get("lonely").is_none());
        assert_eq!(inserted, 1);
        assert!(lexicon.get("next").is_some());
    }

    #[test]
    fn test_section_and_verse_metadata_recorded() {
        let (lexicon, _) = load_from("## svargavarga 1 ##\n(1.2.3) svar: heaven\n");
        let entry = lexicon.get("svar").unwrap();
        assert_eq!(entry.section.as_deref(), Some("svargavarga"));
        assert_eq!(entry.verse_reference.as_deref(), Some("1.2.3"));
        assert_eq!(entry.relevance_base, Some(BASE_RELEVANCE));
    }

    #[test]
    fn test_section_header_stops_collection() {
        let (lexicon, _) = load_from(
            "## varga 1 ##\n(1.1.1) svar: heaven\n## varga 2 ##\nstray tokens here\n",
        );
        // Tokens after the new section header (before any verse line) are ignored
        assert_eq!(lexicon.len(), 1);
        assert_eq!(
            lexicon.get("svar").unwrap().expansions,
            vec!["heaven".to_string()]
        );
    }
}
