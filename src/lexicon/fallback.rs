//! Hardcoded fallback table of core Sanskrit terms.
//!
//! Merged last and unconditionally: a fallback list replaces any same-key
//! entry from the file-based sources (replacement, not list merge), so the
//! curated expansions for these core terms are always the ones served.

use once_cell::sync::Lazy;

use super::{Lexicon, LexiconEntry, LexiconSource};

pub static FALLBACK_TERMS: Lazy<Vec<(&'static str, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            "dharma",
            &["duty", "righteousness", "law", "virtue", "moral order", "sacred duty", "cosmic order"][..],
        ),
        (
            "karma",
            &["action", "deed", "work", "consequence", "cause and effect", "fruit of action"][..],
        ),
        (
            "moksha",
            &["liberation", "release", "freedom", "emancipation", "mukti", "final beatitude"][..],
        ),
        (
            "atman",
            &["self", "soul", "inner self", "spirit", "true self", "consciousness", "essence"][..],
        ),
        (
            "brahman",
            &["absolute", "ultimate reality", "supreme being", "godhead", "the infinite", "cosmic spirit"][..],
        ),
        (
            "jiva",
            &["soul", "individual self", "living being", "embodied self", "creature"][..],
        ),
        (
            "maya",
            &["illusion", "appearance", "magic", "cosmic illusion", "veil", "unreality"][..],
        ),
        (
            "samsara",
            &["rebirth", "cycle of birth and death", "transmigration", "worldly existence", "wheel of life"][..],
        ),
        (
            "bhakti",
            &["devotion", "worship", "love of god", "surrender", "adoration", "faith"][..],
        ),
        (
            "jnana",
            &["knowledge", "wisdom", "insight", "understanding", "realization", "gnosis"][..],
        ),
        (
            "yoga",
            &["union", "discipline", "practice", "path", "meditation", "yoking", "spiritual practice"][..],
        ),
        (
            "vedanta",
            &["end of the vedas", "upanishadic teaching", "nondualism", "philosophy", "advaita"][..],
        ),
        (
            "guru",
            &["teacher", "master", "guide", "preceptor", "spiritual teacher", "acharya"][..],
        ),
        (
            "mantra",
            &["sacred utterance", "chant", "hymn", "incantation", "sacred formula"][..],
        ),
        (
            "dhyana",
            &["meditation", "contemplation", "absorption", "concentration", "mindfulness"][..],
        ),
        (
            "ahimsa",
            &["non-violence", "harmlessness", "non-injury", "compassion", "gentleness"][..],
        ),
        (
            "satya",
            &["truth", "truthfulness", "reality", "honesty", "veracity"][..],
        ),
        (
            "shanti",
            &["peace", "tranquility", "calm", "stillness", "serenity", "quietude"][..],
        ),
        (
            "prana",
            &["breath", "life force", "vital energy", "spirit", "vitality"][..],
        ),
        (
            "vairagya",
            &["detachment", "dispassion", "renunciation", "non-attachment", "indifference to worldly things"][..],
        ),
        (
            "tapas",
            &["austerity", "penance", "discipline", "spiritual heat", "ascetic practice"][..],
        ),
    ]
});

/// Merge the fallback table into the lexicon, replacing same-key entries.
/// Returns the number of terms merged.
pub fn merge_fallback(lexicon: &mut Lexicon) -> usize {
    for (term, expansions) in FALLBACK_TERMS.iter() {
        lexicon.insert(
            term,
            LexiconEntry {
                expansions: expansions.iter().map(|s| s.to_string()).collect(),
                section: None,
                verse_reference: None,
                frequency: expansions.len() as u32,
                relevance_base: None,
                source: LexiconSource::Fallback,
            },
        );
    }
    FALLBACK_TERMS.len()
}
