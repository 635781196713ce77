//! Hover/focus tooltip marker.

use leptos::prelude::*;

/// Small "i" marker that reveals `text` while hovered or focused.
#[component]
pub fn InfoTip(text: &'static str) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <span
            class="info-tip"
            tabindex="0"
            aria-label=text
            on:mouseenter=move |_| visible.set(true)
            on:mouseleave=move |_| visible.set(false)
            on:focus=move |_| visible.set(true)
            on:blur=move |_| visible.set(false)
        >
            <span class="info-tip__marker" aria-hidden="true">"i"</span>
            <Show when=move || visible.get()>
                <span class="info-tip__bubble" role="tooltip">{text}</span>
            </Show>
        </span>
    }
}
