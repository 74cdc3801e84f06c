//! In-memory reference store
//!
//! Insertion-ordered collection of [`Reference`] records. Updates are
//! whole-record: [`ReferenceStore::replace`] swaps the entire stored
//! record for the caller's copy rather than patching fields.

use thiserror::Error;

use crate::reference::Reference;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no reference with id {0}")]
    NotFound(String),
}

/// The user's reference library
#[derive(Debug, Default, Clone)]
pub struct ReferenceStore {
    references: Vec<Reference>,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Append one reference
    pub fn insert(&mut self, reference: Reference) {
        self.references.push(reference);
    }

    /// Append a batch, returning how many were added
    pub fn insert_many(&mut self, references: impl IntoIterator<Item = Reference>) -> usize {
        let before = self.references.len();
        self.references.extend(references);
        self.references.len() - before
    }

    pub fn get(&self, id: &str) -> Option<&Reference> {
        self.references.iter().find(|r| r.id == id)
    }

    /// Replace the stored record with the caller's copy
    ///
    /// The incoming record keeps its position in the library and gets a
    /// fresh `updated_at`.
    pub fn replace(&mut self, mut reference: Reference) -> Result<(), StoreError> {
        let slot = self
            .references
            .iter_mut()
            .find(|r| r.id == reference.id)
            .ok_or_else(|| StoreError::NotFound(reference.id.clone()))?;
        reference.touch();
        *slot = reference;
        Ok(())
    }

    /// Remove and return the record with the given id
    pub fn remove(&mut self, id: &str) -> Result<Reference, StoreError> {
        let index = self
            .references
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.references.remove(index))
    }

    pub fn list(&self) -> &[Reference] {
        &self.references
    }

    /// Mutable view for batch passes like verification and dedup
    pub fn list_mut(&mut self) -> &mut [Reference] {
        &mut self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(title: &str) -> Reference {
        Reference::new("key", "article", title)
    }

    #[test]
    fn insert_many_reports_the_batch_size() {
        let mut store = ReferenceStore::new();
        assert!(store.is_empty());

        let added = store.insert_many(vec![named("First"), named("Second")]);
        assert_eq!(added, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_swaps_the_whole_record_in_place() {
        let mut store = ReferenceStore::new();
        store.insert(named("Alpha"));
        store.insert(named("Beta"));

        let mut updated = store.list()[0].clone();
        updated.title = "Alpha, Revised".to_string();
        updated.author = "New, Author".to_string();
        store.replace(updated).unwrap();

        let stored = &store.list()[0];
        assert_eq!(stored.title, "Alpha, Revised");
        assert_eq!(stored.author, "New, Author");
        assert!(stored.updated_at >= stored.created_at);
        assert_eq!(store.list()[1].title, "Beta");
    }

    #[test]
    fn replace_unknown_id_is_an_error() {
        let mut store = ReferenceStore::new();
        let stray = named("Nowhere");
        let err = store.replace(stray.clone()).unwrap_err();
        assert_eq!(err, StoreError::NotFound(stray.id));
    }

    #[test]
    fn remove_returns_the_record() {
        let mut store = ReferenceStore::new();
        store.insert(named("Transient"));
        let id = store.list()[0].id.clone();

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.title, "Transient");
        assert!(store.is_empty());
        assert!(store.remove(&id).is_err());
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = ReferenceStore::new();
        store.insert(named("Findable"));
        let id = store.list()[0].id.clone();

        assert_eq!(store.get(&id).map(|r| r.title.as_str()), Some("Findable"));
        assert!(store.get("missing").is_none());
    }
}
