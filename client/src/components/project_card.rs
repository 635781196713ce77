//! Card for one portfolio project.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::content::Project;
use crate::state::mode::use_mode;
use crate::util::mode_theme::theme;

/// Inline style carrying the hover lift into CSS.
fn lift_style(lift_px: u8) -> String {
    format!("--hover-lift: -{lift_px}px")
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let mode = use_mode();
    let t = move || theme(mode.get());
    let technologies = project.technologies;

    view! {
        <article class=move || format!("project-card {}", t().project_card_class) style=move || lift_style(t().hover_lift_px)>
            <header class="project-card__header">
                <h3 class="project-card__title">{project.title}</h3>
                <Show when=move || t().project_details>
                    <span class="project-card__period">{project.period}</span>
                </Show>
            </header>
            <Show when=move || t().project_details>
                <p class="project-card__role">{project.role}</p>
            </Show>
            <p class="project-card__description">{project.description}</p>
            <Show when=move || t().project_details>
                <ul class="project-card__tech">
                    {technologies.iter().map(|tech| view! { <li class="chip">{*tech}</li> }).collect_view()}
                </ul>
            </Show>
            {project.link.map(|href| {
                view! {
                    <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">
                        "View project"
                    </a>
                }
            })}
        </article>
    }
}
