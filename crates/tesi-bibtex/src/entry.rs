//! BibTeX entry data structures

use serde::{Deserialize, Serialize};

/// BibTeX entry type
///
/// Covers the twelve classic BibTeX types. Anything else parses as
/// `Unknown` and is canonicalized to `misc` on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Article,
    Book,
    Booklet,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    Misc,
    PhdThesis,
    Proceedings,
    TechReport,
    Unpublished,
    Unknown,
}

impl EntryType {
    /// Parse an entry type from a string (case-insensitive).
    /// `conference` is accepted as an alias for `inproceedings`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "booklet" => Self::Booklet,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "inproceedings" | "conference" => Self::InProceedings,
            "manual" => Self::Manual,
            "mastersthesis" => Self::MastersThesis,
            "misc" => Self::Misc,
            "phdthesis" => Self::PhdThesis,
            "proceedings" => Self::Proceedings,
            "techreport" => Self::TechReport,
            "unpublished" => Self::Unpublished,
            _ => Self::Unknown,
        }
    }

    /// Canonical lowercase name for output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::Booklet => "booklet",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Manual => "manual",
            Self::MastersThesis => "mastersthesis",
            Self::Misc => "misc",
            Self::PhdThesis => "phdthesis",
            Self::Proceedings => "proceedings",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
            Self::Unknown => "misc",
        }
    }

    /// True for the thesis types (mastersthesis, phdthesis)
    pub fn is_thesis(&self) -> bool {
        matches!(self, Self::MastersThesis | Self::PhdThesis)
    }
}

/// A single BibTeX field (key-value pair)
///
/// Key case is preserved as written; lookups through [`Entry::field`]
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: String,
}

/// A parsed BibTeX entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub cite_key: String,
    pub entry_type: EntryType,
    pub fields: Vec<Field>,
    /// Original source text of the entry, kept for round-trip fidelity
    pub raw: Option<String>,
}

impl Entry {
    pub fn new(cite_key: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type,
            fields: Vec::new(),
            raw: None,
        }
    }

    /// Append a field, preserving insertion order
    pub fn push_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push(Field {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Look up a field value by key (case-insensitive)
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key))
            .map(|f| f.value.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.field("author")
    }

    pub fn year(&self) -> Option<&str> {
        self.field("year")
    }

    pub fn doi(&self) -> Option<&str> {
        self.field("doi")
    }

    pub fn journal(&self) -> Option<&str> {
        self.field("journal")
    }
}
