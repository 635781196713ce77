//! Design mode switch.
//!
//! DESIGN
//! ======
//! This is the control that writes the mode store: one segment per mode
//! calls `set`, and the cycle button calls `toggle`. Every other component
//! only reads.

use leptos::prelude::*;

use crate::components::info_tip::InfoTip;
use crate::state::mode::{Mode, use_mode};

const HELP: &str = "Switch between UI-focused design (aesthetic-driven), UX-focused design \
                    (user-centered) and a balanced blend. Notice the differences in typography, \
                    spacing, colors and interactive elements.";

#[component]
pub fn ModeToggle() -> impl IntoView {
    let mode = use_mode();
    let next_label = move || format!("Switch to {} mode", mode.get().next().label());

    view! {
        <div class="mode-toggle" role="group" aria-label="Design mode">
            {Mode::ALL
                .into_iter()
                .map(|m| {
                    let active = move || mode.get() == m;
                    view! {
                        <button
                            type="button"
                            class="mode-toggle__segment"
                            class:mode-toggle__segment--active=active
                            aria-pressed=move || if active() { "true" } else { "false" }
                            on:click=move |_| mode.set(m)
                        >
                            {m.label()}
                        </button>
                    }
                })
                .collect_view()}
            <button
                type="button"
                class="mode-toggle__cycle"
                title=next_label
                aria-label=next_label
                on:click=move |_| mode.toggle()
            >
                "↻"
            </button>
            <InfoTip text=HELP/>
        </div>
    }
}
