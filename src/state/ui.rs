#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme preference.
///
/// `dark_mode` mirrors what `util::dark_mode` has applied to the
/// document; the stored preference is loaded on mount.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
