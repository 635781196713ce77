//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the single REST call the client makes: contact submission.

pub mod api;
