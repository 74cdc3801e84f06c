//! tesi-backend: Hosted database client for the tesi thesis assistant
//!
//! This crate wraps the PostgREST-style HTTP API the app stores its data in:
//! - Typed CRUD calls (select / insert / update / upsert / delete / rpc)
//! - Row types for the tables the app touches
//! - A backend-first reference library mirroring the in-memory store
//! - Timer-driven pollers for the advisor review queue and message feed
//!
//! Every operation receives the signed-in user through an explicit
//! [`Session`] value; there is no ambient authentication state.

pub mod client;
pub mod config;
pub mod error;
pub mod library;
pub mod poll;
pub mod rows;
pub mod session;

pub use client::{
    BackendClient, SelectQuery, TABLE_DOCUMENTS, TABLE_MESSAGES, TABLE_REFERENCES,
    TABLE_THESIS_DOCUMENTS,
};
pub use config::BackendConfig;
pub use error::BackendError;
pub use library::RemoteLibrary;
pub use poll::{MessageFeed, PollHandle, SubmissionPoller, POLL_INTERVAL};
pub use rows::{AdvisorMessage, DocumentSubmission, ReviewStatus};
pub use session::Session;
