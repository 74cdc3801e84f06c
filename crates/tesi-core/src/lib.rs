//! Reference management core for the tesi thesis assistant
//!
//! Everything between the .bib file and the backend row lives here:
//! - BibTeX import with placeholder defaults for incomplete entries
//! - BibTeX and CSV export
//! - Fuzzy duplicate detection (normalized title + author + year)
//! - Deterministic metadata verification scoring
//! - Citation formatting in the common academic styles
//! - The literature review matrix
//! - An in-memory reference store with search, filtering and sorting
//!
//! Network and persistence concerns are out of scope; `tesi-backend`
//! mirrors the store through the database service.

pub mod citation;
pub mod dedup;
pub mod export;
pub mod filter;
pub mod import;
pub mod matrix;
pub mod reference;
pub mod store;
pub mod text;
pub mod validation;
pub mod verify;

pub use citation::{format_citation, CitationStyle};
pub use dedup::{find_duplicate_groups, mark_duplicates, DedupConfig, DuplicateGroup};
pub use export::{export_bibtex, export_selection, ExportOptions, ExportPayload};
pub use filter::{sort_references, ReferenceFilter, SortDirection, SortField};
pub use import::{import_bibtex, ImportError, ImportOutcome};
pub use matrix::{MatrixEntry, ReadingStatus};
pub use reference::{Reference, VerificationStatus, NO_AUTHOR, NO_TITLE, NO_YEAR};
pub use store::{ReferenceStore, StoreError};
pub use validation::{validate, ValidationIssue, ValidationSeverity};
pub use verify::{assess, verify_all, VerificationReport};
