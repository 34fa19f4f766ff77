use leptos::prelude::*;

use crate::session::SessionSummary;

/// Shown in place of a card once every scan has been reviewed.
#[component]
pub fn CompletionCard(summary: SessionSummary) -> impl IntoView {
    view! {
        <div class="scan-card completion-card">
            <div class="completion-icon">"\u{2713}"</div>
            <h2 class="completion-title">"All Done!"</h2>
            <p class="completion-subtitle">"You've reviewed all scans."</p>

            <div class="completion-totals">
                <div class="total-row">
                    <span class="total-label">"Total Reviewed:"</span>
                    <span class="total-value">{summary.reviewed}</span>
                </div>
                <div class="total-row">
                    <span class="total-label">"Healthy:"</span>
                    <span class="total-value total-healthy">{summary.healthy}</span>
                </div>
                <div class="total-row">
                    <span class="total-label">"Sick:"</span>
                    <span class="total-value total-sick">{summary.sick}</span>
                </div>
            </div>
        </div>
    }
}
