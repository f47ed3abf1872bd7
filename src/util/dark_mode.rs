//! Theme persistence and application.
//!
//! The preference is stored in `localStorage` as `"dark"` or `"light"`
//! and applied as a `dark` class on the `<html>` element so the
//! stylesheet can switch palettes. Requires a browser environment.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "breedlens-theme";

/// Read the stored theme preference.
///
/// Returns `true` for dark mode. With no stored preference, falls back
/// to the system `prefers-color-scheme` setting.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(theme)) = storage.get_item(STORAGE_KEY) {
                return theme == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let _ = if dark {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
