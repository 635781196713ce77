//! Skills and tools.

use leptos::prelude::*;

use crate::components::skill_bar::SkillBar;
use crate::content::{SKILLS, TOOLS};
use crate::state::mode::use_mode;
use crate::util::mode_theme::theme;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let mode = use_mode();
    let t = move || theme(mode.get());

    view! {
        <section class=move || format!("section skills {}", t().panel_class) id="skills">
            <div class="container">
                <header class="section__header">
                    <h2 class="section__title">{move || t().skills.title}</h2>
                    <p class="section__subtitle">{move || t().skills.subtitle}</p>
                </header>
                <div class="skills__bars">
                    {SKILLS
                        .into_iter()
                        .map(|s| view! { <SkillBar name=s.name percentage=s.percentage description=s.description/> })
                        .collect_view()}
                </div>
                <h3 class="skills__tools-title">"Tools"</h3>
                <ul class="skills__tools">
                    {TOOLS.into_iter().map(|tool| view! { <li class="chip">{tool}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}
