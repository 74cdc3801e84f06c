//! HTTP client for the hosted database
//!
//! The API is PostgREST-shaped: a table name becomes the path, filters
//! become `column=op.value` query parameters and the service key rides in
//! the `apikey` and `Authorization` headers. Request building and response
//! decoding are kept apart so the decoding half can be tested on captured
//! payloads without a network.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::BackendConfig;
use crate::error::BackendError;

pub const TABLE_REFERENCES: &str = "references";
pub const TABLE_DOCUMENTS: &str = "documents";
pub const TABLE_THESIS_DOCUMENTS: &str = "thesis_documents";
pub const TABLE_MESSAGES: &str = "advisor_student_messages";

/// A select with filters, ordering and an optional row limit.
///
/// Filters compose by conjunction; `or` adds one explicit disjunction of
/// `column.op.value` terms, mirroring the API's own syntax.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    limit: Option<u32>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// `column > value` (timestamps compare as RFC 3339 strings)
    pub fn gt(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("gt.{value}")));
        self
    }

    /// `column IN (values)`
    pub fn in_list(mut self, column: &str, values: &[&str]) -> Self {
        self.filters
            .push((column.to_string(), format!("in.({})", values.join(","))));
        self
    }

    /// Disjunction of raw terms, e.g. `sender_id.eq.u1,recipient_id.eq.u1`.
    pub fn or(mut self, terms: &str) -> Self {
        self.filters.push(("or".to_string(), format!("({terms})")));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(self.filters.iter().cloned());
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{column}.{direction}")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Typed CRUD calls against the hosted database.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.config.base_url, function)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, BackendError> {
        let response = request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::RequestFailed {
                message: e.to_string(),
            })?;

        if !(200..300).contains(&status) {
            return Err(BackendError::Api {
                status,
                message: api_message(&body),
            });
        }

        Ok(body)
    }

    /// Fetch the rows matching the query.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<T>, BackendError> {
        debug!(table, "select");
        let request = self
            .client
            .get(self.table_url(table))
            .query(&query.query_params());
        let body = self.send(request).await?;
        decode_rows(&body)
    }

    /// Insert rows in one call; returns them as stored.
    pub async fn insert<T>(&self, table: &str, rows: &[T]) -> Result<Vec<T>, BackendError>
    where
        T: Serialize + DeserializeOwned,
    {
        debug!(table, count = rows.len(), "insert");
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(rows);
        let body = self.send(request).await?;
        decode_rows(&body)
    }

    /// Replace the row with the given id wholesale.
    pub async fn update<T>(&self, table: &str, id: &str, row: &T) -> Result<Vec<T>, BackendError>
    where
        T: Serialize + DeserializeOwned,
    {
        debug!(table, id, "update");
        let request = self
            .client
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(row);
        let body = self.send(request).await?;
        decode_rows(&body)
    }

    /// Insert rows, replacing any whose primary key already exists.
    pub async fn upsert<T>(&self, table: &str, rows: &[T]) -> Result<Vec<T>, BackendError>
    where
        T: Serialize + DeserializeOwned,
    {
        debug!(table, count = rows.len(), "upsert");
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(rows);
        let body = self.send(request).await?;
        decode_rows(&body)
    }

    /// Delete the row with the given id.
    pub async fn delete(&self, table: &str, id: &str) -> Result<(), BackendError> {
        debug!(table, id, "delete");
        let request = self
            .client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))]);
        self.send(request).await?;
        Ok(())
    }

    /// Call a stored function with JSON arguments.
    pub async fn rpc(&self, function: &str, args: &Value) -> Result<Value, BackendError> {
        debug!(function, "rpc");
        let request = self.client.post(self.rpc_url(function)).json(args);
        let body = self.send(request).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| BackendError::Decode {
            message: e.to_string(),
        })
    }
}

/// Decode a JSON array of rows.
pub fn decode_rows<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, BackendError> {
    serde_json::from_str(json).map_err(|e| BackendError::Decode {
        message: e.to_string(),
    })
}

/// Pull the message the API puts in an error body, falling back to the
/// raw body when it is not the usual JSON shape.
fn api_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}
