//! Adaptive relevance filtering of extracted verses.
//!
//! A fixed descending threshold schedule is walked until enough verses
//! survive. Targeted queries get a flat boost against verses from the target
//! collection before each threshold check. If every attempt leaves the set
//! empty, a rescue pass re-admits the best of the original pool above a
//! fixed floor.

use crate::models::Verse;

/// Thresholds tried in order until enough verses survive.
const THRESHOLD_SCHEDULE: [f32; 3] = [0.10, 0.07, 0.04];
/// Stop relaxing once this many verses survive.
const MIN_SURVIVORS: usize = 3;
/// Hard cap on the filtered set.
const MAX_RESULTS: usize = 5;
/// Added to target-collection verses on targeted queries.
const TARGETED_BOOST: f32 = 0.10;
/// Rescue pass floor; verses below this stay dropped even then.
const RESCUE_FLOOR: f32 = 0.05;

/// Result of a filter run, with enough detail to log what happened.
#[derive(Debug)]
pub struct FilterOutcome {
    pub verses: Vec<Verse>,
    /// Thresholds tried (1-based count)
    pub attempts: usize,
    /// The threshold that produced the final set, when one did
    pub final_threshold: Option<f32>,
    pub dropped: usize,
    pub rescued: bool,
}

/// Composite score used only for the final top-5 truncation: relevance plus
/// the expansion boost, plus the targeted-collection bonus when it applies.
fn composite(verse: &Verse) -> f32 {
    let mut score = verse.relevance + verse.ranking.expansion_boost;
    if verse.metadata.target_store.is_some() {
        score += TARGETED_BOOST;
    }
    score
}

/// Walk the threshold schedule over the verse pool. Each attempt starts from
/// the original pool, applies the targeted boost in place, then drops verses
/// whose relevance is below the threshold; the expansion boost never keeps a
/// verse past a threshold, it only reorders the final truncation.
pub fn filter_verses(pool: Vec<Verse>, targeted: bool) -> FilterOutcome {
    let total = pool.len();
    let mut attempts = 0;
    let mut final_threshold = None;
    let mut survivors: Vec<Verse> = Vec::new();

    for threshold in THRESHOLD_SCHEDULE {
        attempts += 1;

        let mut pass: Vec<Verse> = pool.to_vec();
        if targeted {
            // Boost in place so the drop and the response agree on relevance
            for verse in &mut pass {
                if verse.metadata.target_store.is_some() {
                    verse.relevance += TARGETED_BOOST;
                }
            }
        }
        pass.retain(|v| v.relevance >= threshold);

        if pass.len() >= MIN_SURVIVORS || threshold == THRESHOLD_SCHEDULE[2] {
            if !pass.is_empty() {
                pass.sort_by(|a, b| {
                    b.relevance
                        .partial_cmp(&a.relevance)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                survivors = pass;
                final_threshold = Some(threshold);
            }
            break;
        }
    }

    let rescued = survivors.is_empty() && !pool.is_empty();
    if rescued {
        tracing::warn!("All {total} verses fell below every threshold, rescuing best");
        survivors = rescue(&pool);
    }

    sort_by_composite(&mut survivors);
    survivors.truncate(MAX_RESULTS);

    let dropped = total - survivors.len();
    tracing::debug!(
        "Filter kept {}/{total} verses after {attempts} attempt(s), threshold {:?}",
        survivors.len(),
        final_threshold
    );

    FilterOutcome {
        verses: survivors,
        attempts,
        final_threshold,
        dropped,
        rescued,
    }
}

/// Best of the original pool, deduplicated by reference, above the rescue
/// floor.
fn rescue(pool: &[Verse]) -> Vec<Verse> {
    let mut candidates: Vec<Verse> = pool
        .iter()
        .filter(|v| v.relevance >= RESCUE_FLOOR)
        .cloned()
        .collect();
    sort_by_composite(&mut candidates);

    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for verse in candidates {
        if seen.contains(&verse.reference) {
            continue;
        }
        seen.push(verse.reference.clone());
        out.push(verse);
        if out.len() == MAX_RESULTS {
            break;
        }
    }
    out
}

fn sort_by_composite(verses: &mut [Verse]) {
    verses.sort_by(|a, b| {
        composite(b)
            .partial_cmp(&composite(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
