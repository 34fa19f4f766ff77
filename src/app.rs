use leptos::prelude::*;

use crate::pages::review::ReviewPage;
use crate::theme::{apply_theme, load_theme, store_theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(load_theme());
    provide_context(ThemeContext { theme, set_theme });

    // Apply to the DOM and persist whenever the preference changes
    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(t);
        store_theme(t);
    });

    view! {
        <div class="app-layout">
            <ReviewPage />
        </div>
    }
}
