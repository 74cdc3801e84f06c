//! Library search, filtering and sorting

use crate::reference::{Reference, VerificationStatus};

/// Which column to sort the library by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Author,
    Year,
    CreatedAt,
    QualityScore,
    CitationCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Search criteria for the library view
///
/// An empty filter matches everything. Text matching is a
/// case-insensitive substring search over title, author, citation key
/// and journal; tag matching requires every listed tag.
#[derive(Debug, Clone, Default)]
pub struct ReferenceFilter {
    pub text: String,
    pub tags: Vec<String>,
    pub status: Option<VerificationStatus>,
}

impl ReferenceFilter {
    pub fn matches(&self, reference: &Reference) -> bool {
        self.matches_text(reference)
            && self.matches_tags(reference)
            && self.matches_status(reference)
    }

    /// Borrowing view of the references the filter keeps
    pub fn apply<'a>(&self, references: &'a [Reference]) -> Vec<&'a Reference> {
        references.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches_text(&self, reference: &Reference) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        reference.title.to_lowercase().contains(&needle)
            || reference.author.to_lowercase().contains(&needle)
            || reference.cite_key.to_lowercase().contains(&needle)
            || reference
                .journal
                .as_deref()
                .is_some_and(|j| j.to_lowercase().contains(&needle))
    }

    fn matches_tags(&self, reference: &Reference) -> bool {
        self.tags.iter().all(|wanted| {
            reference
                .tags
                .iter()
                .any(|have| have.eq_ignore_ascii_case(wanted))
        })
    }

    fn matches_status(&self, reference: &Reference) -> bool {
        self.status
            .map_or(true, |status| reference.verification_status == status)
    }
}

/// Stable in-place sort of the library view
pub fn sort_references(references: &mut [Reference], field: SortField, direction: SortDirection) {
    references.sort_by(|a, b| {
        let ordering = match field {
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
            SortField::Year => a
                .numeric_year()
                .unwrap_or(0)
                .cmp(&b.numeric_year().unwrap_or(0)),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::QualityScore => a
                .quality_score
                .unwrap_or(0)
                .cmp(&b.quality_score.unwrap_or(0)),
            SortField::CitationCount => a
                .citation_count
                .unwrap_or(0)
                .cmp(&b.citation_count.unwrap_or(0)),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
