//! Floating light/dark theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Theme toggle button pinned to the top corner of the page.
///
/// On mount the stored preference is applied to the document; clicks
/// flip the theme and persist the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Apply the persisted preference once the page is interactive.
    Effect::new(move |_| {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let on_click = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    view! {
        <button class="theme-toggle" title="Toggle theme" on:click=on_click>
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
