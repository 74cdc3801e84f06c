//! Explicit session context
//!
//! The signed-in user is threaded through every call site as a value
//! instead of being read from a process-wide singleton. Construction takes
//! whatever the auth layer produced; this crate never inspects tokens.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
