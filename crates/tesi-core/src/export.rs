//! BibTeX export pipeline
//!
//! Serializes references back to a .bib document. Field keys are written
//! uppercase by default, matching the files the app has always produced;
//! empty optional fields are omitted. With nothing to export the pipeline
//! returns `None` and no file is produced.

use chrono::Local;

use tesi_bibtex::{format_entries, Entry, EntryType};

use crate::reference::Reference;

/// Options controlling the exported document
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Write field keys uppercase (`TITLE = {...}`)
    pub uppercase_keys: bool,
    /// Append tags as a KEYWORDS field
    pub include_tags: bool,
    /// Sort fields alphabetically instead of canonical order
    pub sort_fields: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            uppercase_keys: true,
            include_tags: false,
            sort_fields: false,
        }
    }
}

/// A ready-to-save export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    /// Date-stamped download name, `references-YYYY-MM-DD.bib`
    pub filename: String,
    pub content: String,
}

/// Export the whole collection. `None` when there is nothing to export.
pub fn export_bibtex(references: &[Reference], options: &ExportOptions) -> Option<ExportPayload> {
    if references.is_empty() {
        return None;
    }

    let entries: Vec<Entry> = references
        .iter()
        .map(|r| reference_to_entry(r, options))
        .collect();

    let mut content = format_entries(&entries);
    content.push('\n');

    Some(ExportPayload {
        filename: export_filename(),
        content,
    })
}

/// Export the selected subset, in collection order.
///
/// An empty selection exports the whole collection; a selection that
/// matches no record exports nothing.
pub fn export_selection(
    references: &[Reference],
    selected_ids: &[String],
    options: &ExportOptions,
) -> Option<ExportPayload> {
    if selected_ids.is_empty() {
        return export_bibtex(references, options);
    }

    let subset: Vec<Reference> = references
        .iter()
        .filter(|r| selected_ids.contains(&r.id))
        .cloned()
        .collect();

    export_bibtex(&subset, options)
}

fn export_filename() -> String {
    format!("references-{}.bib", Local::now().format("%Y-%m-%d"))
}

/// Build the output entry: title, author and year always (placeholders
/// included), optional fields only when present and non-empty.
fn reference_to_entry(reference: &Reference, options: &ExportOptions) -> Entry {
    let mut entry = Entry::new(
        &reference.cite_key,
        EntryType::from_str(&reference.entry_type),
    );

    let mut push = |key: &str, value: &str| {
        if value.is_empty() {
            return;
        }
        let key = if options.uppercase_keys {
            key.to_uppercase()
        } else {
            key.to_string()
        };
        entry.push_field(key, value);
    };

    push("title", &reference.title);
    push("author", &reference.author);
    push("year", &reference.year);

    let optional: [(&str, &Option<String>); 19] = [
        ("journal", &reference.journal),
        ("volume", &reference.volume),
        ("number", &reference.number),
        ("pages", &reference.pages),
        ("doi", &reference.doi),
        ("url", &reference.url),
        ("publisher", &reference.publisher),
        ("address", &reference.address),
        ("edition", &reference.edition),
        ("month", &reference.month),
        ("note", &reference.note),
        ("institution", &reference.institution),
        ("organization", &reference.organization),
        ("school", &reference.school),
        ("chapter", &reference.chapter),
        ("series", &reference.series),
        ("editor", &reference.editor),
        ("howpublished", &reference.howpublished),
        ("booktitle", &reference.booktitle),
    ];

    for (key, value) in optional {
        if let Some(value) = value {
            push(key, value);
        }
    }

    if options.include_tags && !reference.tags.is_empty() {
        push("keywords", &reference.tags.join(", "));
    }

    if options.sort_fields {
        entry.fields.sort_by(|a, b| a.key.cmp(&b.key));
    }

    entry
}
