//! tesi-llm: LLM completion client for the tesi thesis assistant
//!
//! A thin wrapper over an OpenAI-compatible chat-completions endpoint:
//! - Request/response types for the wire body
//! - A client that POSTs one request and returns the answer text
//! - Best-effort recovery when the model answers in prose instead of the
//!   JSON shape a prompt asked for
//! - Prompt builders for the literature review matrix
//!
//! There is no retry or backoff. A failed call surfaces its error message
//! and the caller decides what to show.

pub mod client;
pub mod error;
pub mod fallback;
pub mod prompts;
pub mod types;

pub use client::{parse_completion, CompletionClient, DEFAULT_MODEL};
pub use error::LlmError;
pub use fallback::{extract_json_block, json_or_fallback, parse_analysis, SourceAnalysis};
pub use prompts::{analysis_prompt, parse_gap_list, synthesis_prompt};
pub use types::{ChatMessage, ChatRole, CompletionRequest, CompletionResponse};
