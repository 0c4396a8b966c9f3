//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell and shared table chrome while
//! reading session state from Leptos context.

pub mod layout;
pub mod page_header;
pub mod status_badge;
