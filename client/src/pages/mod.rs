//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Row data comes from `data`.

pub mod dashboard;
pub mod login;
pub mod meetings;
pub mod mentors;
pub mod settings;
pub mod statistics;
pub mod students;
pub mod tasks;
