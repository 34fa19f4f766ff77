//! Strip of the most recent review decisions, newest first.

use leptos::prelude::*;

use crate::models::Decision;
use crate::session::ReviewSession;

#[component]
pub fn RecentReviews(
    session: RwSignal<ReviewSession>,
    /// How many decisions to show, newest first.
    #[prop(default = 5)]
    limit: usize,
) -> impl IntoView {
    view! {
        <div class="recent-reviews">
            <style>{include_str!("recent_reviews.css")}</style>
            <h3 class="recent-title">"Recent Reviews"</h3>
            <div class="recent-list">
                {move || {
                    session.with(|s| {
                        s.recent_reviews(limit)
                            .map(|review| {
                                let decision = review.decision;
                                let icon = match decision {
                                    Decision::Healthy => "\u{2713}",
                                    Decision::Sick => "\u{2717}",
                                };
                                view! {
                                    <div class=format!(
                                        "recent-item recent-{}",
                                        match decision {
                                            Decision::Healthy => "healthy",
                                            Decision::Sick => "sick",
                                        },
                                    )>
                                        <span class="recent-icon">{icon}</span>
                                        <span class="recent-patient">{review.patient_name.clone()}</span>
                                        <span class="recent-time">
                                            {review.timestamp.format("%H:%M:%S").to_string()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}
