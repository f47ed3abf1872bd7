//! Page-level components composed by the router.

pub mod home;
