//! Validation for references

use serde::{Deserialize, Serialize};

use crate::reference::{Reference, NO_AUTHOR, NO_YEAR};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation problem on one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationIssue {
    fn new(field: &str, message: &str, severity: ValidationSeverity) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

/// Validate a reference and return its issues
pub fn validate(reference: &Reference) -> Vec<ValidationIssue> {
    use ValidationSeverity::{Error, Warning};

    let mut issues = Vec::new();

    // Required fields
    if reference.cite_key.is_empty() {
        issues.push(ValidationIssue::new(
            "cite_key",
            "Citation key is required",
            Error,
        ));
    }

    if reference.title.is_empty() {
        issues.push(ValidationIssue::new("title", "Title is required", Error));
    } else if reference.has_placeholder_title() {
        issues.push(ValidationIssue::new(
            "title",
            "Title is the import placeholder",
            Warning,
        ));
    }

    if reference.entry_type.is_empty() {
        issues.push(ValidationIssue::new(
            "entry_type",
            "Entry type is required",
            Error,
        ));
    }

    // Recommended fields; placeholders count as missing
    if reference.author.is_empty() || reference.author == NO_AUTHOR {
        issues.push(ValidationIssue::new(
            "author",
            "Author is recommended",
            Warning,
        ));
    }

    if reference.year.is_empty() || reference.year == NO_YEAR {
        issues.push(ValidationIssue::new("year", "Year is recommended", Warning));
    } else if reference.numeric_year().is_none() {
        issues.push(ValidationIssue::new(
            "year",
            "Year is not a number",
            Warning,
        ));
    }

    // Entry-type specific venue checks
    match reference.entry_type.to_lowercase().as_str() {
        "article" => {
            if reference.journal.is_none() {
                issues.push(ValidationIssue::new(
                    "journal",
                    "Journal is required for article entries",
                    Warning,
                ));
            }
        }
        "inproceedings" | "conference" => {
            if reference.booktitle.is_none() {
                issues.push(ValidationIssue::new(
                    "booktitle",
                    "Booktitle is required for conference entries",
                    Warning,
                ));
            }
        }
        "book" | "inbook" => {
            if reference.publisher.is_none() {
                issues.push(ValidationIssue::new(
                    "publisher",
                    "Publisher is recommended for book entries",
                    Warning,
                ));
            }
        }
        "phdthesis" | "mastersthesis" => {
            if reference.school.is_none() {
                issues.push(ValidationIssue::new(
                    "school",
                    "School is required for thesis entries",
                    Warning,
                ));
            }
        }
        "techreport" => {
            if reference.institution.is_none() {
                issues.push(ValidationIssue::new(
                    "institution",
                    "Institution is recommended for report entries",
                    Warning,
                ));
            }
        }
        _ => {}
    }

    if let Some(ref doi) = reference.doi {
        if !doi.starts_with("10.") {
            issues.push(ValidationIssue::new(
                "doi",
                "DOI should start with '10.'",
                Warning,
            ));
        }
    }

    issues
}

/// Check that a reference has no Error-severity issues
pub fn is_valid(reference: &Reference) -> bool {
    validate(reference)
        .iter()
        .all(|issue| issue.severity != ValidationSeverity::Error)
}
