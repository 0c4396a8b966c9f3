//! Network layer for the client.
//!
//! ARCHITECTURE
//! ============
//! `api` holds the login transports that plug into the core session
//! container. Nothing else in the dashboard talks to a server yet.

pub mod api;
