//! Swipeable scan card.
//!
//! Tracks a horizontal pointer drag on the card, feeds the offset through
//! the gesture mapping for live rotation and badge feedback, and commits a
//! decision when a release lands past the threshold. A committed card
//! animates off-screen and reports its direction once the exit transition
//! finishes; a sub-threshold release springs the card back to center.

use leptos::html::Div;
use leptos::prelude::*;

use crate::gesture::{self, SwipeDirection};
use crate::models::Scan;

#[component]
pub fn ScanCard(scan: Scan, #[prop(into)] on_swipe: Callback<SwipeDirection>) -> impl IntoView {
    let card_el = NodeRef::<Div>::new();
    // Pointer x at which the drag started; None while not dragging.
    let (drag_origin, set_drag_origin) = signal::<Option<f64>>(None);
    let (offset, set_offset) = signal(0.0_f64);
    let (exit, set_exit) = signal::<Option<SwipeDirection>>(None);

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if exit.get().is_some() {
            return;
        }
        ev.prevent_default();
        if let Some(el) = card_el.get() {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
        set_drag_origin.set(Some(ev.client_x() as f64 - offset.get()));
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if let Some(origin) = drag_origin.get() {
            set_offset.set(ev.client_x() as f64 - origin);
        }
    };

    let on_pointer_up = move |ev: web_sys::PointerEvent| {
        if drag_origin.get().is_none() {
            return;
        }
        set_drag_origin.set(None);
        if let Some(el) = card_el.get() {
            let _ = el.release_pointer_capture(ev.pointer_id());
        }
        match gesture::commit_direction(offset.get()) {
            Some(direction) => set_exit.set(Some(direction)),
            None => set_offset.set(0.0),
        }
    };

    // The decision is reported once the exit transform lands, so the next
    // card mounts centered instead of replacing a card mid-flight.
    let on_transition_end = move |ev: web_sys::TransitionEvent| {
        if ev.property_name() != "transform" {
            return;
        }
        if let Some(direction) = exit.get() {
            on_swipe.run(direction);
        }
    };

    // Effective x: the live drag offset, or the exit target once committed.
    let card_x = move || match exit.get() {
        Some(direction) => gesture::exit_offset(direction),
        None => offset.get(),
    };

    let card_style = move || {
        let x = card_x();
        let transition = if drag_origin.get().is_some() {
            "none"
        } else {
            "transform 0.3s cubic-bezier(0.22, 1, 0.36, 1), opacity 0.3s ease"
        };
        format!(
            "transform: translateX({x:.1}px) rotate({:.2}deg); opacity: {:.2}; transition: {transition};",
            gesture::rotation_deg(x),
            gesture::card_opacity(x),
        )
    };

    let sick_opacity = move || format!("{:.2}", gesture::badge_opacity(card_x(), SwipeDirection::Left));
    let healthy_opacity =
        move || format!("{:.2}", gesture::badge_opacity(card_x(), SwipeDirection::Right));

    view! {
        <div
            node_ref=card_el
            class="scan-card"
            class:scan-card-dragging=move || drag_origin.get().is_some()
            style=card_style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:transitionend=on_transition_end
        >
            <div class="swipe-badge swipe-badge-sick" style:opacity=sick_opacity>
                <span class="swipe-badge-icon">"\u{2717}"</span>
                <span>"SICK"</span>
            </div>
            <div class="swipe-badge swipe-badge-healthy" style:opacity=healthy_opacity>
                <span class="swipe-badge-icon">"\u{2713}"</span>
                <span>"HEALTHY"</span>
            </div>

            <div class="scan-image-wrap">
                <img
                    class="scan-image"
                    src=scan.image_url.clone()
                    alt=format!("{} scan", scan.scan_type)
                    draggable="false"
                />
                <span class="scan-type-tag">{scan.scan_type.clone()}</span>
            </div>

            <div class="scan-details">
                <div class="scan-identity">
                    <h2 class="patient-name">{scan.patient_name.clone()}</h2>
                    <p class="patient-id">{format!("Patient ID: {}", scan.patient_id)}</p>
                </div>

                <div class="detail-grid">
                    <div class="detail-cell">
                        <span class="detail-label">"Age"</span>
                        <span class="detail-value">{format!("{} years", scan.age)}</span>
                    </div>
                    <div class="detail-cell">
                        <span class="detail-label">"Gender"</span>
                        <span class="detail-value">{scan.gender.clone()}</span>
                    </div>
                    <div class="detail-cell">
                        <span class="detail-label">"Body Part"</span>
                        <span class="detail-value">{scan.body_part.clone()}</span>
                    </div>
                    <div class="detail-cell">
                        <span class="detail-label">"Scan Date"</span>
                        <span class="detail-value">{scan.scan_date_display()}</span>
                    </div>
                </div>

                <p class="swipe-hint">"\u{2190} Swipe to classify \u{2192}"</p>
            </div>
        </div>
    }
}
