//! Static mock records backing the dashboard list pages.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one record type, its closed status/category enums, and a
//! `const` slice of sample rows. Pages only read these; there is no create,
//! edit or delete path yet.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

pub mod dashboard;
pub mod meetings;
pub mod mentors;
pub mod settings;
pub mod statistics;
pub mod students;
pub mod tasks;

/// Badge palette shared by status columns across pages. Each modifier is
/// defined in `client/style/main.css`.
pub(crate) const BADGE_GREEN: &str = "status-badge--green";
pub(crate) const BADGE_RED: &str = "status-badge--red";
pub(crate) const BADGE_BLUE: &str = "status-badge--blue";
pub(crate) const BADGE_GRAY: &str = "status-badge--gray";
pub(crate) const BADGE_YELLOW: &str = "status-badge--yellow";
