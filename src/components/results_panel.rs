//! Results panel rendering exactly one of the four prediction views.

use leptos::prelude::*;

use crate::state::predict::{PredictState, ResultView, SelectedFile};

/// Results card: idle prompt, progress, error, or the identified breed.
///
/// Pure function of [`PredictState`]; the only action it owns is the
/// full reset offered from the Success and Error views.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let predict = expect_context::<RwSignal<PredictState>>();
    let selected = expect_context::<RwSignal<SelectedFile, LocalStorage>>();

    let on_reset = move |_| {
        predict.update(PredictState::reset);
        selected.update(SelectedFile::clear);
    };

    view! {
        <section class="card results-panel">
            <header class="card__header">
                <h2>"Results"</h2>
                <p>"AI prediction results with confidence score"</p>
            </header>

            {move || match predict.get().view() {
                ResultView::Loading => {
                    view! {
                        <div class="results-panel__loading">
                            <div class="spinner"></div>
                            <p>"Analyzing image..."</p>
                            <p class="results-panel__hint">"This may take a few moments"</p>
                        </div>
                    }
                        .into_any()
                }
                ResultView::Error => {
                    let message = predict.get().error.unwrap_or_default();
                    view! {
                        <div class="results-panel__error">
                            <h3>"Prediction Failed"</h3>
                            <div class="results-panel__field">
                                <h4>"Error"</h4>
                                <p class="results-panel__error-message">{message}</p>
                            </div>
                            <button class="btn btn--outline" on:click=on_reset>
                                "Try Another Image"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                ResultView::Success => {
                    let outcome = predict.get().prediction.unwrap_or_default();
                    view! {
                        <div class="results-panel__success">
                            <h3>"Breed Identified!"</h3>
                            <div class="results-panel__field">
                                <h4>"Predicted Breed"</h4>
                                <p class="results-panel__breed">{outcome.breed}</p>
                            </div>
                            <div class="results-panel__field">
                                <h4>"Confidence Score"</h4>
                                <p class="results-panel__confidence">{outcome.confidence}</p>
                            </div>
                            <button class="btn btn--outline" on:click=on_reset>
                                "Analyze Another Image"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                ResultView::Idle => {
                    view! {
                        <div class="results-panel__idle">
                            <p>"Upload an image to see prediction results"</p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
