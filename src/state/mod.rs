//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` bridges the session store into Leptos context; `nav` derives the
//! navigation menu from a session snapshot.

pub mod auth;
pub mod nav;
