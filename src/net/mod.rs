//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and implements the session store's identity
//! seam; `types` defines the request/response schema.

pub mod api;
pub mod types;
