//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Guard components wrap route content; the navbar and spinner are shared
//! chrome used across pages.

pub mod loading_spinner;
pub mod navbar;
pub mod route_guard;
