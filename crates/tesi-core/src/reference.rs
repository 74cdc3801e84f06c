//! The reference domain model
//!
//! A [`Reference`] is one row of the user's library, flat and
//! whole-record: updates replace the entire record rather than diffing
//! individual fields.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder title for imported entries missing a TITLE field
pub const NO_TITLE: &str = "No Title";
/// Placeholder author for imported entries missing an AUTHOR field
pub const NO_AUTHOR: &str = "No Author";
/// Placeholder year for imported entries missing a YEAR field
pub const NO_YEAR: &str = "No Year";

/// Verification state of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    #[default]
    Unverified,
    Flagged,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Unverified => "unverified",
            Self::Flagged => "flagged",
        }
    }
}

/// A bibliographic reference
///
/// `year` is a string so the `No Year` placeholder can live alongside
/// real years; callers that need a numeric year parse it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub cite_key: String,
    /// Canonical lowercase BibTeX type (`article`, `book`, ...)
    pub entry_type: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
    pub publisher: Option<String>,
    pub address: Option<String>,
    pub edition: Option<String>,
    pub month: Option<String>,
    pub note: Option<String>,
    pub institution: Option<String>,
    pub organization: Option<String>,
    pub school: Option<String>,
    pub chapter: Option<String>,
    pub series: Option<String>,
    pub editor: Option<String>,
    pub howpublished: Option<String>,
    pub booktitle: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// RFC 3339 timestamp of the last whole-record update
    pub updated_at: String,
    pub access_date: Option<String>,
    pub quality_score: Option<u8>,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub is_duplicate: bool,
    pub citation_count: Option<u32>,
}

impl Reference {
    /// Create a reference with a fresh id and timestamps
    pub fn new(
        cite_key: impl Into<String>,
        entry_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            cite_key: cite_key.into(),
            entry_type: entry_type.into(),
            title: title.into(),
            author: String::new(),
            year: String::new(),
            journal: None,
            volume: None,
            number: None,
            pages: None,
            doi: None,
            url: None,
            publisher: None,
            address: None,
            edition: None,
            month: None,
            note: None,
            institution: None,
            organization: None,
            school: None,
            chapter: None,
            series: None,
            editor: None,
            howpublished: None,
            booktitle: None,
            tags: Vec::new(),
            created_at: now.clone(),
            updated_at: now.clone(),
            access_date: Some(now),
            quality_score: None,
            verification_status: VerificationStatus::Unverified,
            is_duplicate: false,
            citation_count: None,
        }
    }

    /// Refresh the updated timestamp; call on every whole-record replace
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Year parsed as a number, `None` for placeholders and ranges
    pub fn numeric_year(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    /// True when the title is the import placeholder
    pub fn has_placeholder_title(&self) -> bool {
        self.title == NO_TITLE
    }

    /// True when the author is the import placeholder
    pub fn has_placeholder_author(&self) -> bool {
        self.author == NO_AUTHOR
    }

    /// True when the year is the import placeholder
    pub fn has_placeholder_year(&self) -> bool {
        self.year == NO_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reference_gets_id_and_timestamps() {
        let reference = Reference::new("smith2024", "article", "Test Title");
        assert!(!reference.id.is_empty());
        assert!(!reference.created_at.is_empty());
        assert_eq!(reference.created_at, reference.updated_at);
        assert_eq!(reference.verification_status, VerificationStatus::Unverified);
        assert!(!reference.is_duplicate);
        assert_eq!(reference.quality_score, None);
    }

    #[test]
    fn fresh_references_have_distinct_ids() {
        let a = Reference::new("k", "article", "T");
        let b = Reference::new("k", "article", "T");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn numeric_year_rejects_placeholder() {
        let mut reference = Reference::new("k", "article", "T");
        reference.year = "2021".to_string();
        assert_eq!(reference.numeric_year(), Some(2021));

        reference.year = NO_YEAR.to_string();
        assert_eq!(reference.numeric_year(), None);
        assert!(reference.has_placeholder_year());
    }

    #[test]
    fn serializes_with_snake_case_columns() {
        let mut reference = Reference::new("smith2024", "article", "Test");
        reference.quality_score = Some(85);
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["cite_key"], "smith2024");
        assert_eq!(json["entry_type"], "article");
        assert_eq!(json["quality_score"], 85);
        assert_eq!(json["verification_status"], "unverified");
    }
}
