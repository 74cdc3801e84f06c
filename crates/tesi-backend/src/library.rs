//! Backend-first reference library
//!
//! A [`RemoteLibrary`] keeps the user's references in an in-memory store
//! mirrored behind the hosted database. Every mutation goes to the backend
//! first; only once the write succeeds is the local store touched. A
//! failed write is logged and abandoned, leaving memory exactly as it was.

use tracing::warn;

use tesi_core::{Reference, ReferenceStore};

use crate::client::{BackendClient, SelectQuery, TABLE_REFERENCES};
use crate::error::BackendError;
use crate::session::Session;

pub struct RemoteLibrary {
    client: BackendClient,
    session: Session,
    store: ReferenceStore,
}

impl RemoteLibrary {
    pub fn new(client: BackendClient, session: Session) -> Self {
        Self {
            client,
            session,
            store: ReferenceStore::new(),
        }
    }

    /// Local snapshot of the user's references.
    pub fn references(&self) -> &[Reference] {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<&Reference> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Re-fetch the user's rows, newest first, replacing the local snapshot.
    pub async fn refresh(&mut self) -> Result<usize, BackendError> {
        let query = SelectQuery::new()
            .eq("user_id", &self.session.user_id)
            .order("created_at", false);
        let rows: Vec<Reference> = self.client.select(TABLE_REFERENCES, &query).await?;
        let mut store = ReferenceStore::new();
        let count = store.insert_many(rows);
        self.store = store;
        Ok(count)
    }

    /// Persist new references, then add them to the local snapshot.
    ///
    /// Used by the import pipeline: a parsed batch lands in one insert, so
    /// a backend failure admits none of it.
    pub async fn add_all(&mut self, references: Vec<Reference>) -> Result<usize, BackendError> {
        if references.is_empty() {
            return Ok(0);
        }
        match self.client.insert(TABLE_REFERENCES, &references).await {
            Ok(stored) => Ok(self.store.insert_many(stored)),
            Err(e) => {
                warn!(error = %e, "insert failed, library unchanged");
                Err(e)
            }
        }
    }

    /// Replace one reference wholesale, backend first.
    pub async fn save(&mut self, mut reference: Reference) -> Result<(), BackendError> {
        reference.touch();
        if let Err(e) = self
            .client
            .update(TABLE_REFERENCES, &reference.id, &reference)
            .await
        {
            warn!(error = %e, id = %reference.id, "update failed, library unchanged");
            return Err(e);
        }
        if self.store.get(&reference.id).is_some() {
            let _ = self.store.replace(reference);
        } else {
            // refresh raced a delete; re-adopt the row we just wrote
            self.store.insert(reference);
        }
        Ok(())
    }

    /// Delete one reference, backend first.
    pub async fn remove(&mut self, id: &str) -> Result<(), BackendError> {
        if let Err(e) = self.client.delete(TABLE_REFERENCES, id).await {
            warn!(error = %e, id, "delete failed, library unchanged");
            return Err(e);
        }
        let _ = self.store.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    #[test]
    fn new_library_starts_empty() {
        let client = BackendClient::new(BackendConfig::new("http://localhost:54321", "key"));
        let library = RemoteLibrary::new(client, Session::new("user-1"));
        assert!(library.is_empty());
        assert_eq!(library.len(), 0);
        assert!(library.references().is_empty());
        assert!(library.get("missing").is_none());
    }
}
