//! Import and export integration tests
//!
//! Exercises the whole file cycle: .bib text in, references out, and
//! back again through the exporter the download path uses.

mod common;

use std::collections::HashSet;
use std::io::Write;

use common::fixtures::load_bibtex_fixture;
use tempfile::NamedTempFile;
use tesi_core::{
    export_bibtex, export_selection, import_bibtex, ExportOptions, ImportError, ReferenceStore,
    NO_AUTHOR, NO_TITLE, NO_YEAR,
};

// === Import ===

#[test]
fn import_reads_a_complete_library() {
    let outcome = import_bibtex(&load_bibtex_fixture("library.bib")).unwrap();
    assert_eq!(outcome.references.len(), 3);
    assert!(outcome.errors.is_empty());

    let mezirow = &outcome.references[0];
    assert_eq!(mezirow.cite_key, "mezirow1991");
    assert_eq!(mezirow.title, "Transformative Dimensions of Adult Learning");
    assert_eq!(mezirow.author, "Mezirow, Jack");
    assert_eq!(mezirow.year, "1991");
    assert_eq!(mezirow.doi.as_deref(), Some("10.1177/074171369104100401"));

    let freire = &outcome.references[1];
    assert_eq!(freire.entry_type, "book");
    assert_eq!(freire.publisher.as_deref(), Some("Herder and Herder"));
}

#[test]
fn import_defaults_missing_fields_to_placeholders() {
    let outcome = import_bibtex(&load_bibtex_fixture("incomplete.bib")).unwrap();

    let fragment = &outcome.references[0];
    assert_eq!(fragment.title, NO_TITLE);
    assert_eq!(fragment.author, NO_AUTHOR);
    assert_eq!(fragment.year, NO_YEAR);

    let vygotsky = &outcome.references[1];
    assert_eq!(vygotsky.title, "Thought and Language");
    assert_eq!(vygotsky.year, NO_YEAR);
}

#[test]
fn import_recovers_around_a_damaged_entry() {
    let outcome = import_bibtex(&load_bibtex_fixture("malformed.bib")).unwrap();

    let keys: Vec<&str> = outcome
        .references
        .iter()
        .map(|r| r.cite_key.as_str())
        .collect();
    assert_eq!(keys, vec!["dewey1938", "bruner1966"]);

    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("malformed entry"));
}

#[test]
fn unparseable_input_imports_nothing() {
    match import_bibtex("@article{oops") {
        Err(ImportError::Parse { .. }) => {}
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn empty_input_is_rejected_before_parsing() {
    assert!(matches!(import_bibtex("   \n\t"), Err(ImportError::EmptyInput)));
}

#[test]
fn importing_the_same_file_twice_doubles_the_library() {
    let input = load_bibtex_fixture("library.bib");
    let mut store = ReferenceStore::new();

    store.insert_many(import_bibtex(&input).unwrap().references);
    assert_eq!(store.len(), 3);

    store.insert_many(import_bibtex(&input).unwrap().references);
    assert_eq!(store.len(), 6);

    let ids: HashSet<&str> = store.list().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 6);
}

// === Round Trips ===

#[test]
fn export_then_import_preserves_title_author_year() {
    let original = import_bibtex(&load_bibtex_fixture("library.bib"))
        .unwrap()
        .references;
    let payload = export_bibtex(&original, &ExportOptions::default()).unwrap();
    let reimported = import_bibtex(&payload.content).unwrap().references;

    assert_eq!(original.len(), reimported.len());
    for (before, after) in original.iter().zip(&reimported) {
        assert_eq!(before.cite_key, after.cite_key);
        assert_eq!(before.title, after.title);
        assert_eq!(before.author, after.author);
        assert_eq!(before.year, after.year);
    }
}

#[test]
fn exported_file_survives_a_disk_round_trip() {
    let references = import_bibtex(&load_bibtex_fixture("incomplete.bib"))
        .unwrap()
        .references;
    let payload = export_bibtex(&references, &ExportOptions::default()).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(payload.content.as_bytes()).unwrap();
    file.flush().unwrap();

    let reloaded = std::fs::read_to_string(file.path()).unwrap();
    let reimported = import_bibtex(&reloaded).unwrap().references;
    assert_eq!(reimported.len(), 2);
    assert_eq!(reimported[0].title, NO_TITLE);
    assert_eq!(reimported[0].year, NO_YEAR);
}

// === Export ===

#[test]
fn exporting_zero_references_produces_no_file() {
    assert!(export_bibtex(&[], &ExportOptions::default()).is_none());
}

#[test]
fn export_filename_is_dated() {
    let references = import_bibtex(&load_bibtex_fixture("library.bib"))
        .unwrap()
        .references;
    let payload = export_bibtex(&references, &ExportOptions::default()).unwrap();

    assert!(payload.filename.starts_with("references-"));
    assert!(payload.filename.ends_with(".bib"));
    assert_eq!(payload.filename.len(), "references-2026-08-23.bib".len());
}

#[test]
fn export_writes_uppercase_braced_fields() {
    let references = import_bibtex(&load_bibtex_fixture("library.bib"))
        .unwrap()
        .references;
    let freire: Vec<_> = references
        .into_iter()
        .filter(|r| r.cite_key == "freire1970")
        .collect();
    let payload = export_bibtex(&freire, &ExportOptions::default()).unwrap();

    insta::assert_snapshot!(payload.content, @r###"
    @book{freire1970,
      TITLE = {Pedagogy of the Oppressed},
      AUTHOR = {Freire, Paulo},
      YEAR = {1970},
      PUBLISHER = {Herder and Herder},
      ADDRESS = {New York},
    }
    "###);
}

#[test]
fn blocks_are_separated_by_a_blank_line() {
    let references = import_bibtex(&load_bibtex_fixture("library.bib"))
        .unwrap()
        .references;
    let payload = export_bibtex(&references, &ExportOptions::default()).unwrap();

    assert_eq!(payload.content.matches("\n\n@").count(), 2);
}

#[test]
fn selection_export_only_includes_chosen_records() {
    let references = import_bibtex(&load_bibtex_fixture("library.bib"))
        .unwrap()
        .references;
    let selected = vec![references[1].id.clone()];
    let payload = export_selection(&references, &selected, &ExportOptions::default()).unwrap();

    assert!(payload.content.contains("freire1970"));
    assert!(!payload.content.contains("mezirow1991"));
    assert!(!payload.content.contains("knowles1984"));
}

#[test]
fn empty_selection_exports_the_whole_library() {
    let references = import_bibtex(&load_bibtex_fixture("library.bib"))
        .unwrap()
        .references;
    let payload = export_selection(&references, &[], &ExportOptions::default()).unwrap();

    assert!(payload.content.contains("mezirow1991"));
    assert!(payload.content.contains("freire1970"));
    assert!(payload.content.contains("knowles1984"));
}

#[test]
fn stale_selection_exports_nothing() {
    let references = import_bibtex(&load_bibtex_fixture("library.bib"))
        .unwrap()
        .references;
    let stale = vec!["deleted-id".to_string()];
    assert!(export_selection(&references, &stale, &ExportOptions::default()).is_none());
}
