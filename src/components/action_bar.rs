use leptos::prelude::*;

use crate::models::Decision;

/// Button controls mirroring the swipe outcomes: sick, undo, healthy.
#[component]
pub fn ActionBar(
    #[prop(into)] on_decide: Callback<Decision>,
    #[prop(into)] on_undo: Callback<()>,
    /// Undo is disabled while the decision log is empty.
    #[prop(into)]
    undo_disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="action-bar">
            <button
                class="action-btn action-btn-sick"
                title="Mark sick"
                on:click=move |_| on_decide.run(Decision::Sick)
            >
                "\u{2717}"
            </button>

            <button
                class="action-btn action-btn-undo"
                title="Undo last review"
                on:click=move |_| on_undo.run(())
                disabled=move || undo_disabled.get()
            >
                "\u{21BA}"
            </button>

            <button
                class="action-btn action-btn-healthy"
                title="Mark healthy"
                on:click=move |_| on_decide.run(Decision::Healthy)
            >
                "\u{2713}"
            </button>
        </div>
    }
}
