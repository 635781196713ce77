//! Proficiency bar for one skill.

#[cfg(test)]
#[path = "skill_bar_test.rs"]
mod skill_bar_test;

use leptos::prelude::*;

use crate::state::mode::use_mode;
use crate::util::mode_theme::theme;

/// Inline style for the filled part of the bar. Percentages above 100 are
/// clamped.
fn fill_style(percentage: u8, radius_px: u8) -> String {
    format!("width: {}%; border-radius: {radius_px}px", percentage.min(100))
}

#[component]
pub fn SkillBar(name: &'static str, percentage: u8, description: &'static str) -> impl IntoView {
    let mode = use_mode();
    let radius = move || theme(mode.get()).skill_bar_radius_px;

    view! {
        <div class="skill-bar">
            <div class="skill-bar__label">
                <span class="skill-bar__name">{name}</span>
                <span class="skill-bar__value">{format!("{}%", percentage.min(100))}</span>
            </div>
            <div
                class="skill-bar__track"
                role="progressbar"
                aria-label=name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=percentage.min(100).to_string()
                style=move || format!("border-radius: {}px", radius())
            >
                <div class="skill-bar__fill" style=move || fill_style(percentage, radius())></div>
            </div>
            <p class="skill-bar__description">{description}</p>
        </div>
    }
}
