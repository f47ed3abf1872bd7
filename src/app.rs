//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::PredictorConfig;
use crate::pages::home::HomePage;
use crate::state::predict::{PredictState, SelectedFile};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// `PredictorConfig` is provided here so deployments (and tests) can
/// swap the classification endpoint by providing their own value higher
/// in the tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. The
    // file holder uses local storage: the browser file handle is not
    // `Send`, and it is only ever touched from event handlers.
    let predict = RwSignal::new(PredictState::default());
    let selected = RwSignal::new_local(SelectedFile::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(predict);
    provide_context(selected);
    provide_context(ui);
    provide_context(toasts);
    provide_context(PredictorConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/breedlens.css"/>
        <Title text="Cattle & Buffalo Breed Recognition"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
