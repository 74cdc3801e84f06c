//! BibTeX import pipeline
//!
//! Turns .bib file content into fresh [`Reference`] records. Entries
//! missing core fields get the literal placeholders (`No Title`,
//! `No Author`, `No Year`) rather than being rejected. Import never
//! deduplicates: importing the same file twice doubles the collection,
//! and the duplicate check is a separate operation.

use thiserror::Error;

use tesi_bibtex::{Entry, ParseOutcome};

use crate::reference::{Reference, NO_AUTHOR, NO_TITLE, NO_YEAR};
use crate::validation::{validate, ValidationSeverity};

/// Import failure; either way no references are constructed
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Parse error: {message}")]
    Parse { message: String },
    #[error("Empty input")]
    EmptyInput,
}

/// Result of a successful import
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub references: Vec<Reference>,
    /// Validation warnings on individual records
    pub warnings: Vec<String>,
    /// Recoverable parse problems, one per skipped entry
    pub errors: Vec<String>,
}

/// Import BibTeX content as new references.
///
/// All-or-none: an unparseable file produces an error and zero records.
/// Individually malformed entries inside an otherwise good file are
/// skipped and reported through [`ImportOutcome::errors`].
pub fn import_bibtex(content: &str) -> Result<ImportOutcome, ImportError> {
    if content.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let parsed: ParseOutcome = tesi_bibtex::parse(content).map_err(|e| ImportError::Parse {
        message: e.to_string(),
    })?;

    let mut references = Vec::new();
    let mut warnings = Vec::new();

    for entry in &parsed.entries {
        let reference = entry_to_reference(entry);

        for issue in validate(&reference) {
            if matches!(issue.severity, ValidationSeverity::Warning) {
                warnings.push(format!(
                    "{}: {} - {}",
                    reference.cite_key, issue.field, issue.message
                ));
            }
        }

        references.push(reference);
    }

    let errors = parsed
        .issues
        .iter()
        .map(|issue| format!("Line {}: {}", issue.line, issue.message))
        .collect();

    Ok(ImportOutcome {
        references,
        warnings,
        errors,
    })
}

/// Map a parsed entry onto a fresh reference with import defaults
fn entry_to_reference(entry: &Entry) -> Reference {
    let title = non_empty(entry.title()).unwrap_or_else(|| NO_TITLE.to_string());

    let mut reference = Reference::new(&entry.cite_key, entry.entry_type.as_str(), title);
    reference.author = non_empty(entry.author()).unwrap_or_else(|| NO_AUTHOR.to_string());
    reference.year = non_empty(entry.year()).unwrap_or_else(|| NO_YEAR.to_string());

    reference.journal = field(entry, "journal");
    reference.volume = field(entry, "volume");
    reference.number = field(entry, "number");
    reference.pages = field(entry, "pages");
    reference.doi = field(entry, "doi");
    reference.url = field(entry, "url");
    reference.publisher = field(entry, "publisher");
    reference.address = field(entry, "address");
    reference.edition = field(entry, "edition");
    reference.month = field(entry, "month");
    reference.note = field(entry, "note");
    reference.institution = field(entry, "institution");
    reference.organization = field(entry, "organization");
    reference.school = field(entry, "school");
    reference.chapter = field(entry, "chapter");
    reference.series = field(entry, "series");
    reference.editor = field(entry, "editor");
    reference.howpublished = field(entry, "howpublished");
    reference.booktitle = field(entry, "booktitle");

    reference
}

fn field(entry: &Entry, key: &str) -> Option<String> {
    non_empty(entry.field(key))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::VerificationStatus;

    #[test]
    fn imports_complete_entry_with_all_fields() {
        let input = r#"
@article{bandura1997,
    author = {Bandura, Albert},
    title = {Self-Efficacy: The Exercise of Control},
    year = {1997},
    journal = {W.H. Freeman},
    volume = {1},
    pages = {1--604},
    doi = {10.1891/0889-8391.13.2.158},
}
"#;
        let outcome = import_bibtex(input).unwrap();
        assert_eq!(outcome.references.len(), 1);

        let reference = &outcome.references[0];
        assert_eq!(reference.cite_key, "bandura1997");
        assert_eq!(reference.entry_type, "article");
        assert_eq!(reference.title, "Self-Efficacy: The Exercise of Control");
        assert_eq!(reference.author, "Bandura, Albert");
        assert_eq!(reference.year, "1997");
        assert_eq!(reference.volume.as_deref(), Some("1"));
        assert_eq!(reference.doi.as_deref(), Some("10.1891/0889-8391.13.2.158"));
        assert_eq!(reference.verification_status, VerificationStatus::Unverified);
        assert_eq!(reference.quality_score, None);
        assert!(!reference.is_duplicate);
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let outcome = import_bibtex("@misc{mystery2020, note = {found on a flash drive}, }").unwrap();
        let reference = &outcome.references[0];
        assert_eq!(reference.title, NO_TITLE);
        assert_eq!(reference.author, NO_AUTHOR);
        assert_eq!(reference.year, NO_YEAR);
        assert_eq!(reference.note.as_deref(), Some("found on a flash drive"));
    }

    #[test]
    fn placeholder_defaults_produce_warnings() {
        let outcome = import_bibtex("@misc{bare2020, }").unwrap();
        assert!(!outcome.warnings.is_empty());
        assert!(outcome.warnings.iter().any(|w| w.starts_with("bare2020:")));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(import_bibtex(""), Err(ImportError::EmptyInput)));
        assert!(matches!(import_bibtex("  \n\t "), Err(ImportError::EmptyInput)));
    }

    #[test]
    fn unparseable_input_constructs_nothing() {
        let result = import_bibtex("@article{broken");
        assert!(matches!(result, Err(ImportError::Parse { .. })));
    }

    #[test]
    fn recoverable_damage_is_reported_not_fatal() {
        let input = r#"
@article{fine1, title = {Kept}, }
@article{broken
@article{fine2, title = {Also Kept}, }
"#;
        let outcome = import_bibtex(input).unwrap();
        assert_eq!(outcome.references.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("Line "));
    }

    #[test]
    fn reimport_creates_new_records() {
        let input = "@article{dup2021, title = {Same File}, author = {Twice, Imported}, year = {2021}, }";
        let first = import_bibtex(input).unwrap();
        let second = import_bibtex(input).unwrap();

        assert_eq!(first.references.len(), 1);
        assert_eq!(second.references.len(), 1);
        assert_ne!(first.references[0].id, second.references[0].id);
        assert_eq!(first.references[0].cite_key, second.references[0].cite_key);
    }

    #[test]
    fn unknown_entry_type_canonicalizes_to_misc() {
        let outcome = import_bibtex("@webpage{site2024, title = {A Site}, }").unwrap();
        assert_eq!(outcome.references[0].entry_type, "misc");
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let outcome = import_bibtex("@misc{blank2020, title = { }, }").unwrap();
        assert_eq!(outcome.references[0].title, NO_TITLE);
    }
}
