//! Literature review matrix
//!
//! A matrix entry is one source under review: the bibliographic core
//! plus the synthesis columns (purpose, framework, methods, findings)
//! a literature review tracks. Entries can be seeded from library
//! references and exported as CSV.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::reference::Reference;

/// Download name for the CSV export
pub const CSV_FILENAME: &str = "literature-review-matrix.csv";

/// Reading progress of one source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    #[default]
    ToRead,
    InProgress,
    Completed,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToRead => "to-read",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV buffer was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One row of the literature review matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub id: String,
    /// Library record this entry was seeded from, if any
    pub reference_id: Option<String>,
    pub author: String,
    pub title: String,
    pub year: String,
    pub purpose: String,
    pub framework: String,
    pub methods: String,
    pub results: String,
    pub conclusions: String,
    pub relevance: String,
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// 1-5 star rating
    pub rating: Option<u8>,
    #[serde(default)]
    pub status: ReadingStatus,
    pub source_type: String,
    pub doi: Option<String>,
    pub url: Option<String>,
    pub pages: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub methodology: String,
    pub sample_size: Option<u32>,
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub research_gaps: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    pub thematic_category: Option<String>,
    pub quality_score: Option<u8>,
}

impl MatrixEntry {
    /// Seed a matrix row from a library reference
    ///
    /// Synthesis columns the reference cannot answer get the standing
    /// placeholders so reviewers can see at a glance what still needs
    /// reading.
    pub fn from_reference(reference: &Reference) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            reference_id: Some(reference.id.clone()),
            author: reference.author.clone(),
            title: reference.title.clone(),
            year: reference.year.clone(),
            purpose: String::new(),
            framework: "N/A".to_string(),
            methods: "Not specified".to_string(),
            results: String::new(),
            conclusions: "Not specified".to_string(),
            relevance: "To be determined".to_string(),
            notes: "Added from reference library".to_string(),
            tags: reference.tags.clone(),
            rating: None,
            status: ReadingStatus::ToRead,
            source_type: source_label(&reference.entry_type).to_string(),
            doi: reference.doi.clone(),
            url: reference.url.clone(),
            pages: reference.pages.clone(),
            publisher: reference.publisher.clone(),
            keywords: reference.tags.clone(),
            methodology: "Not specified".to_string(),
            sample_size: None,
            ai_summary: None,
            research_gaps: Vec::new(),
            strengths: Vec::new(),
            limitations: Vec::new(),
            thematic_category: None,
            quality_score: reference.quality_score,
        }
    }
}

/// Matrix source-type label for a BibTeX entry type
fn source_label(entry_type: &str) -> &'static str {
    match entry_type {
        "article" => "journal",
        "book" | "inbook" | "incollection" | "booklet" => "book",
        "inproceedings" | "conference" | "proceedings" => "conference",
        "phdthesis" | "mastersthesis" => "thesis",
        _ => "other",
    }
}

/// Render the matrix as CSV with the full 28-column layout
pub fn to_csv(entries: &[MatrixEntry]) -> Result<String, MatrixError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "ID",
        "Author",
        "Title",
        "Year",
        "Purpose",
        "Framework",
        "Methods",
        "Results",
        "Conclusions",
        "Relevance",
        "Notes",
        "Tags",
        "Rating",
        "Status",
        "Source Type",
        "DOI",
        "URL",
        "Pages",
        "Publisher",
        "Keywords",
        "Methodology",
        "Sample Size",
        "AI Summary",
        "Research Gaps",
        "Strengths",
        "Limitations",
        "Thematic Category",
        "Quality Score",
    ])?;

    for entry in entries {
        let tags = entry.tags.join("; ");
        let keywords = entry.keywords.join("; ");
        let gaps = entry.research_gaps.join("; ");
        let strengths = entry.strengths.join("; ");
        let limitations = entry.limitations.join("; ");
        let rating = number_cell(entry.rating);
        let sample_size = number_cell(entry.sample_size);
        let quality_score = number_cell(entry.quality_score);

        writer.write_record([
            entry.id.as_str(),
            entry.author.as_str(),
            entry.title.as_str(),
            entry.year.as_str(),
            entry.purpose.as_str(),
            entry.framework.as_str(),
            entry.methods.as_str(),
            entry.results.as_str(),
            entry.conclusions.as_str(),
            entry.relevance.as_str(),
            entry.notes.as_str(),
            tags.as_str(),
            rating.as_str(),
            entry.status.as_str(),
            entry.source_type.as_str(),
            entry.doi.as_deref().unwrap_or(""),
            entry.url.as_deref().unwrap_or(""),
            entry.pages.as_deref().unwrap_or(""),
            entry.publisher.as_deref().unwrap_or(""),
            keywords.as_str(),
            entry.methodology.as_str(),
            sample_size.as_str(),
            entry.ai_summary.as_deref().unwrap_or(""),
            gaps.as_str(),
            strengths.as_str(),
            limitations.as_str(),
            entry.thematic_category.as_deref().unwrap_or(""),
            quality_score.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn number_cell<N: ToString>(value: Option<N>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
