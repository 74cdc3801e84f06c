//! Timer-driven pollers for the advisor views
//!
//! The hosted API offers no push channel here, so the review queue and the
//! message feed refresh on a fixed cadence. Each poller runs as one spawned
//! task; a failed tick is logged and the next one runs as scheduled. The
//! task stops when its [`PollHandle`] is dropped, which is how a view tears
//! its poller down on unmount.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::client::{BackendClient, SelectQuery, TABLE_DOCUMENTS, TABLE_MESSAGES};
use crate::error::BackendError;
use crate::rows::{AdvisorMessage, DocumentSubmission};
use crate::session::Session;

/// Default refresh cadence for both pollers.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Owns the spawned polling task; dropping it stops the poller.
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stop the poller now. Dropping the handle does the same.
    pub fn stop(self) {}

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Re-fetches the pending review queue for a set of students.
///
/// The first tick fires immediately, so the view fills before the first
/// interval elapses. Snapshots arrive on the channel after every
/// successful fetch, newest submission first.
pub struct SubmissionPoller {
    client: BackendClient,
    student_ids: Vec<String>,
    interval: Duration,
}

impl SubmissionPoller {
    pub fn new(client: BackendClient, student_ids: Vec<String>) -> Self {
        Self {
            client,
            student_ids,
            interval: POLL_INTERVAL,
        }
    }

    /// Override the default 5 s cadence.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn spawn(self) -> (mpsc::Receiver<Vec<DocumentSubmission>>, PollHandle) {
        let (tx, rx) = mpsc::channel(8);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                match self.fetch().await {
                    Ok(submissions) => {
                        if tx.send(submissions).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!(error = %e, "submission poll failed"),
                }
            }
        });
        (rx, PollHandle { task })
    }

    async fn fetch(&self) -> Result<Vec<DocumentSubmission>, BackendError> {
        let ids: Vec<&str> = self.student_ids.iter().map(String::as_str).collect();
        let query = SelectQuery::new()
            .in_list("user_id", &ids)
            .eq("review_status", "submitted")
            .order("updated_at", false);
        self.client.select(TABLE_DOCUMENTS, &query).await
    }
}

/// Message-insert events for one user, rendered as a since-cursor poll.
///
/// The first tick delivers the existing conversation in created_at order;
/// later ticks deliver only rows created after the newest one seen. Every
/// message where the user is sender or recipient comes through.
pub struct MessageFeed {
    client: BackendClient,
    session: Session,
    interval: Duration,
}

impl MessageFeed {
    pub fn new(client: BackendClient, session: Session) -> Self {
        Self {
            client,
            session,
            interval: POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn spawn(self) -> (mpsc::Receiver<AdvisorMessage>, PollHandle) {
        let (tx, rx) = mpsc::channel(32);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            let mut cursor: Option<String> = None;
            loop {
                ticker.tick().await;
                match self.fetch_after(cursor.as_deref()).await {
                    Ok(messages) => {
                        for message in messages {
                            cursor = Some(message.created_at.clone());
                            if tx.send(message).await.is_err() {
                                return;
                            }
                        }
                    }
                    Err(e) => warn!(error = %e, "message poll failed"),
                }
            }
        });
        (rx, PollHandle { task })
    }

    async fn fetch_after(&self, cursor: Option<&str>) -> Result<Vec<AdvisorMessage>, BackendError> {
        let user = &self.session.user_id;
        let mut query = SelectQuery::new()
            .or(&format!("sender_id.eq.{user},recipient_id.eq.{user}"))
            .order("created_at", true);
        if let Some(after) = cursor {
            query = query.gt("created_at", after);
        }
        self.client.select(TABLE_MESSAGES, &query).await
    }
}
