//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only shared state is the login session; list pages read static data
//! directly from `data`.

pub mod session;
