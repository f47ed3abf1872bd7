//! Home page composing the breed-recognition flow.

use leptos::prelude::*;

use crate::components::results_panel::ResultsPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast_host::ToastHost;
use crate::components::upload_panel::UploadPanel;

/// Single page of the app: hero banner, upload and results cards,
/// theme toggle, and the toast overlay.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <ThemeToggle/>

            <header class="hero">
                <h1>"Cattle & Buffalo Breed Recognition"</h1>
                <p>"Identify Indian indigenous cattle and buffalo breeds with precision AI technology"</p>
            </header>

            <main class="home-page__grid">
                <UploadPanel/>
                <ResultsPanel/>
            </main>

            <footer class="home-page__footer">
                <p>
                    "Developed for "
                    <span class="home-page__footer-brand">"Bharat Pashudhan App"</span>
                    " | Amaravati, AP"
                </p>
                <p class="home-page__footer-note">
                    "Supporting Indian livestock farmers with AI-powered breed recognition"
                </p>
            </footer>

            <ToastHost/>
        </div>
    }
}
