//! Duplicate detection for the reference library
//!
//! Scores pairs of references on normalized title, author, year, journal
//! and DOI, then groups everything above a configurable threshold. Import
//! never deduplicates on its own; this module is the explicit operation
//! behind the duplicate check.

mod normalization;
mod similarity;

pub use normalization::{normalize_author, normalize_doi, normalize_title};
pub use similarity::{similarity, DuplicateMatch};

use crate::reference::Reference;
use std::collections::HashSet;

/// Configuration for duplicate detection
#[derive(Debug, Clone)]
pub struct DedupConfig {
    /// Minimum similarity score for two references to be grouped (0.0 - 1.0)
    pub threshold: f64,
    /// Years this far apart still earn a partial year bonus
    pub year_tolerance: i32,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            threshold: 0.85,
            year_tolerance: 1,
        }
    }
}

/// A group of references judged to be the same work
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub reference_ids: Vec<String>,
    /// Highest pairwise score inside the group
    pub confidence: f64,
}

/// Find groups of likely duplicates.
///
/// Greedy single pass: the first unprocessed reference seeds a group and
/// every later reference scoring at or above the threshold against the
/// seed joins it. Singleton groups are dropped.
pub fn find_duplicate_groups(
    references: &[Reference],
    config: &DedupConfig,
) -> Vec<DuplicateGroup> {
    let mut groups = Vec::new();
    let mut processed: HashSet<usize> = HashSet::new();

    for i in 0..references.len() {
        if processed.contains(&i) {
            continue;
        }

        let mut member_ids = vec![references[i].id.clone()];
        let mut confidence = config.threshold;

        for j in (i + 1)..references.len() {
            if processed.contains(&j) {
                continue;
            }

            let result = similarity(&references[i], &references[j], config);
            if result.score >= config.threshold {
                member_ids.push(references[j].id.clone());
                processed.insert(j);
                if result.score > confidence {
                    confidence = result.score;
                }
            }
        }

        if member_ids.len() > 1 {
            groups.push(DuplicateGroup {
                reference_ids: member_ids,
                confidence,
            });
        }

        processed.insert(i);
    }

    groups
}

/// Flag duplicates in place and return how many were flagged.
///
/// Within each group the earliest-created reference stays unflagged and
/// every other member gets `is_duplicate = true`. Stale flags from earlier
/// runs are cleared first, so the operation is repeatable.
pub fn mark_duplicates(references: &mut [Reference], config: &DedupConfig) -> usize {
    let groups = find_duplicate_groups(references, config);

    let mut flag: HashSet<String> = HashSet::new();

    for group in &groups {
        let original = group
            .reference_ids
            .iter()
            .filter_map(|id| references.iter().find(|r| &r.id == id))
            .min_by(|a, b| a.created_at.cmp(&b.created_at))
            .map(|r| r.id.clone());

        for id in &group.reference_ids {
            if Some(id) != original.as_ref() {
                flag.insert(id.clone());
            }
        }
    }

    let mut flagged = 0;
    for reference in references.iter_mut() {
        let should_flag = flag.contains(&reference.id);
        if should_flag {
            flagged += 1;
        }
        if reference.is_duplicate != should_flag {
            reference.is_duplicate = should_flag;
            reference.touch();
        }
    }

    flagged
}
