//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`predict`, `toast`, `ui`) so individual
//! components can depend on small focused models. The structs here are
//! plain data wrapped in `RwSignal` contexts by the app shell, which
//! keeps every transition natively unit-testable.

pub mod predict;
pub mod toast;
pub mod ui;
