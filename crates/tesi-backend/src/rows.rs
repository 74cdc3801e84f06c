//! Row types for the tables the client reads and writes
//!
//! Column names follow the hosted schema, so these derive straight
//! serde round-trips with no renaming except where Rust casing differs.

use serde::{Deserialize, Serialize};

/// One direct message between an advisor and a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorMessage {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

impl AdvisorMessage {
    /// The conversation partner from this user's point of view.
    pub fn other_party<'a>(&'a self, user_id: &str) -> &'a str {
        if self.sender_id == user_id {
            &self.recipient_id
        } else {
            &self.sender_id
        }
    }
}

/// Review state of a document in the advisor workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Draft,
    Submitted,
    AwaitingExternalReview,
    NeedsRevision,
    Approved,
    Reviewed,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Draft => "draft",
            ReviewStatus::Submitted => "submitted",
            ReviewStatus::AwaitingExternalReview => "awaiting_external_review",
            ReviewStatus::NeedsRevision => "needs_revision",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Reviewed => "reviewed",
        }
    }
}

/// A document row as the advisor review queue sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSubmission {
    pub id: String,
    pub title: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub review_status: ReviewStatus,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl DocumentSubmission {
    /// Timestamp shown in the review queue. Resubmitted documents carry
    /// their latest update, fresh ones their creation time.
    pub fn submitted_at(&self) -> &str {
        self.updated_at.as_deref().unwrap_or(&self.created_at)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    pub fn is_pending(&self) -> bool {
        self.review_status == ReviewStatus::Submitted
    }
}
