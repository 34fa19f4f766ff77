use leptos::prelude::*;

use crate::session::ReviewSession;
use crate::theme::ThemeContext;

/// App header: title, live session counters, theme toggle.
#[component]
pub fn Header(session: RwSignal<ReviewSession>) -> impl IntoView {
    let theme_ctx = use_context::<ThemeContext>();

    let remaining = move || session.with(|s| s.remaining());
    let healthy = move || session.with(|s| s.healthy_count());
    let sick = move || session.with(|s| s.sick_count());

    view! {
        <header class="app-header">
            <div class="header-inner">
                <div class="header-brand">
                    <div class="header-logo">"\u{2695}"</div>
                    <div>
                        <h1 class="header-title">"Scan Review"</h1>
                        <p class="header-subtitle">"Quick PET/CT Classification"</p>
                    </div>
                </div>

                <div class="header-stats">
                    <div class="stat">
                        <span class="stat-label">"Remaining"</span>
                        <span class="stat-value stat-remaining">{remaining}</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"Healthy"</span>
                        <span class="stat-value stat-healthy">{healthy}</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"Sick"</span>
                        <span class="stat-value stat-sick">{sick}</span>
                    </div>

                    {theme_ctx.map(|ctx| {
                        view! {
                            <button
                                class="btn btn-theme"
                                title="Cycle theme"
                                on:click=move |_| {
                                    ctx.set_theme.set(ctx.theme.get().next());
                                }
                            >
                                {move || ctx.theme.get().as_str()}
                            </button>
                        }
                    })}
                </div>
            </div>
        </header>
    }
}
