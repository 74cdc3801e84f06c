//! BibTeX formatting
//!
//! Turns [`Entry`] values back into BibTeX text. Field keys are written
//! as the caller stored them; every value is braced, numeric years
//! included, matching the files the exporter has always produced.

use crate::entry::Entry;

/// Format a single entry as a BibTeX block
pub fn format_entry(entry: &Entry) -> String {
    let mut out = String::new();

    out.push('@');
    out.push_str(entry.entry_type.as_str());
    out.push('{');
    out.push_str(&entry.cite_key);
    out.push_str(",\n");

    for field in &entry.fields {
        out.push_str("  ");
        out.push_str(&field.key);
        out.push_str(" = {");
        out.push_str(&field.value);
        out.push_str("},\n");
    }

    out.push('}');
    out
}

/// Format entries as a BibTeX document, blocks separated by a blank line
pub fn format_entries(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryType;
    use crate::parser::parse;

    fn sample() -> Entry {
        let mut entry = Entry::new("freire1970", EntryType::Book);
        entry.push_field("AUTHOR", "Freire, Paulo");
        entry.push_field("TITLE", "Pedagogy of the Oppressed");
        entry.push_field("YEAR", "1970");
        entry.push_field("PUBLISHER", "Continuum");
        entry
    }

    #[test]
    fn formats_entry_as_braced_block() {
        let formatted = format_entry(&sample());
        insta::assert_snapshot!(formatted, @r###"
        @book{freire1970,
          AUTHOR = {Freire, Paulo},
          TITLE = {Pedagogy of the Oppressed},
          YEAR = {1970},
          PUBLISHER = {Continuum},
        }
        "###);
    }

    #[test]
    fn joins_entries_with_blank_line() {
        let mut second = Entry::new("dewey1938", EntryType::Book);
        second.push_field("TITLE", "Experience and Education");

        let document = format_entries(&[sample(), second]);
        assert!(document.contains("}\n\n@book{dewey1938,"));
    }

    #[test]
    fn placeholder_year_round_trips_as_text() {
        let mut entry = Entry::new("anon", EntryType::Misc);
        entry.push_field("YEAR", "No Year");
        assert!(format_entry(&entry).contains("YEAR = {No Year},"));
    }

    #[test]
    fn round_trip_preserves_key_type_and_fields() {
        let formatted = format_entry(&sample());
        let reparsed = parse(&formatted).unwrap();
        assert_eq!(reparsed.entries.len(), 1);

        let entry = &reparsed.entries[0];
        assert_eq!(entry.cite_key, "freire1970");
        assert_eq!(entry.entry_type, EntryType::Book);
        assert_eq!(entry.title(), Some("Pedagogy of the Oppressed"));
        assert_eq!(entry.author(), Some("Freire, Paulo"));
        assert_eq!(entry.year(), Some("1970"));
    }
}
