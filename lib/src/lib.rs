//! Core pipeline for the Courier email tool server.
//!
//! The flow behind a `send_email` tool call lives here end to end: request
//! validation (`email`), attachment encoding (`attachment`), provider payload
//! construction and dispatch (`resend`), with the per-call credential pulled
//! from inbound headers (`credential`). The `template` module answers
//! `email-template://` resource lookups and shares no state with the send
//! path. The transport that routes tool calls to this crate is the server
//! binary's concern.

pub mod api;
pub mod attachment;
pub mod config;
pub mod credential;
pub mod email;
pub mod error;
pub mod resend;
pub mod template;

pub use error::Error;
