//! Domain cross-reference tables used by the final expansion pass, plus
//! targeted-query detection.
//!
//! These are independent of the general lexicon: curated English-concept →
//! Sanskrit-term lists that fire whenever the concept appears anywhere in the
//! query string.

use once_cell::sync::Lazy;

/// Substring that flags a query as targeted at the Upanishad collection.
pub const TARGETED_TRIGGER: &str = "upanishad";

/// Collection name that targeted queries boost.
pub const TARGETED_STORE: &str = "upanishads";

/// Marker token appended to the expanded query on the targeted round.
pub const TARGETED_MARKER: &str = "upanishadic";

/// Fixed trailing retrieval-hint phrase appended to every search text.
pub const RETRIEVAL_HINTS: &str = "verse sloka scripture sacred text teaching wisdom";

pub static CROSS_REFERENCE: Lazy<Vec<(&'static str, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            "meditation",
            &["dhyana", "dharana", "samadhi", "pratyahara", "ekagrata"][..],
        ),
        (
            "consciousness",
            &["chit", "chaitanya", "purusha", "sakshi", "turiya"][..],
        ),
        ("soul", &["atman", "jiva", "jivatman", "dehin"][..]),
        (
            "liberation",
            &["moksha", "mukti", "kaivalya", "nirvana", "apavarga"][..],
        ),
        ("suffering", &["duhkha", "klesha", "tapa", "shoka"][..]),
        ("devotion", &["bhakti", "sharanagati", "prapatti", "upasana"][..]),
        ("duty", &["dharma", "svadharma", "kartavya", "rita"][..]),
        ("death", &["mrityu", "yama", "antaka", "deha-tyaga"][..]),
        ("mind", &["manas", "citta", "buddhi", "antahkarana", "ahamkara"][..]),
        ("truth", &["satya", "rita", "tattva", "paramartha"][..]),
        ("peace", &["shanti", "prashanti", "sama", "upashama"][..]),
        (
            "creation",
            &["srishti", "prakriti", "hiranyagarbha", "brahmanda"][..],
        ),
    ]
});

/// Generic Upanishad-domain terms added unconditionally on targeted queries.
pub static TARGETED_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "upanishad", "vedanta", "brahman", "atman", "aranyaka", "brahmana",
        "samhita", "shruti", "mahavakya", "turiya", "om", "pranava", "prajna",
        "ananda", "chit", "sat", "isha", "kena", "katha", "mundaka",
    ]
});

/// A targeted query names the trigger collection anywhere in its text.
pub fn is_targeted(query: &str) -> bool {
    query.to_lowercase().contains(TARGETED_TRIGGER)
}
