//! Networking layer: endpoint configuration, payload types, and the
//! HTTP client for the external classification service.

pub mod api;
pub mod types;
