//! Project gallery.

use leptos::prelude::*;

use crate::components::info_tip::InfoTip;
use crate::components::project_card::ProjectCard;
use crate::content::PROJECTS;
use crate::state::mode::use_mode;
use crate::util::mode_theme::theme;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let mode = use_mode();
    let t = move || theme(mode.get());

    view! {
        <section class=move || format!("section projects {}", t().panel_class) id="projects">
            <div class="container">
                <header class="section__header">
                    <h2 class="section__title">{move || t().projects.title}</h2>
                    <p class="section__subtitle">
                        {move || t().projects.subtitle}
                        <InfoTip text="Project cards show role, period and technologies in UX and Balanced modes."/>
                    </p>
                </header>
                <div class="project-grid">
                    {PROJECTS.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
