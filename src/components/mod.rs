//! UI components for the breed-recognition page.

pub mod results_panel;
pub mod theme_toggle;
pub mod toast_host;
pub mod upload_panel;
