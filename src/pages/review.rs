//! The review screen.
//!
//! Owns the session state and wires the swipe card, button controls, and
//! recent-decision strip to it. All mutations go through the session
//! signal in response to a single user event at a time.

use leptos::prelude::*;

use crate::components::action_bar::ActionBar;
use crate::components::completion_card::CompletionCard;
use crate::components::header::Header;
use crate::components::recent_reviews::RecentReviews;
use crate::components::scan_card::ScanCard;
use crate::data::default_scans;
use crate::gesture::SwipeDirection;
use crate::models::Decision;
use crate::session::ReviewSession;

#[component]
pub fn ReviewPage() -> impl IntoView {
    let session = RwSignal::new(ReviewSession::new(default_scans()));

    let on_swipe = Callback::new(move |direction: SwipeDirection| {
        session.update(|s| {
            if s.record_swipe(direction).is_none() {
                web_sys::console::warn_1(&"swipe ignored: review queue exhausted".into());
            }
        });
    });

    let on_decide = Callback::new(move |decision: Decision| {
        session.update(|s| {
            if s.record(decision).is_none() {
                web_sys::console::warn_1(&"decision ignored: review queue exhausted".into());
            }
        });
    });

    let on_undo = Callback::new(move |_: ()| {
        session.update(|s| {
            s.undo();
        });
    });

    let undo_disabled = Signal::derive(move || session.with(|s| s.reviews().is_empty()));

    view! {
        <div class="page review-page">
            <Header session=session />

            <main class="review-main">
                <div class="card-stack">
                    {move || {
                        let current = session.with(|s| s.current_scan().cloned());
                        match current {
                            Some(scan) => {
                                let has_next = session.with(|s| s.next_scan().is_some());
                                view! {
                                    <div class="card-slot">
                                        {has_next
                                            .then(|| {
                                                view! { <div class="scan-card scan-card-behind"></div> }
                                            })}
                                        <ScanCard scan=scan on_swipe=on_swipe />
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                let summary = session.with(|s| s.summary());
                                view! { <CompletionCard summary=summary /> }.into_any()
                            }
                        }
                    }}
                </div>

                {move || {
                    (!session.with(|s| s.is_complete()))
                        .then(|| {
                            view! {
                                <ActionBar
                                    on_decide=on_decide
                                    on_undo=on_undo
                                    undo_disabled=undo_disabled
                                />
                            }
                        })
                }}
            </main>

            {move || {
                session
                    .with(|s| !s.reviews().is_empty())
                    .then(|| view! { <RecentReviews session=session /> })
            }}
        </div>
    }
}
