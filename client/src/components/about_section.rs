//! About section: education, experience and the design philosophy cards.

use leptos::prelude::*;

use crate::content::{EDUCATION, EXPERIENCE, PROFILE};
use crate::state::mode::use_mode;
use crate::util::mode_theme::{PHILOSOPHIES, theme};

#[component]
pub fn AboutSection() -> impl IntoView {
    let mode = use_mode();
    let t = move || theme(mode.get());

    let education = EDUCATION
        .into_iter()
        .map(|e| {
            view! {
                <li class="timeline__item">
                    <h4 class="timeline__title">{e.degree}</h4>
                    <p class="timeline__meta">{e.school}" · "{e.period}</p>
                </li>
            }
        })
        .collect_view();

    let experience = EXPERIENCE
        .into_iter()
        .map(|x| {
            view! {
                <li class="timeline__item">
                    <h4 class="timeline__title">{x.role}</h4>
                    <p class="timeline__meta">{x.company}" · "{x.period}</p>
                    <ul class="timeline__highlights">
                        {x.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                    </ul>
                </li>
            }
        })
        .collect_view();

    let philosophies = PHILOSOPHIES
        .into_iter()
        .map(|p| {
            view! {
                <article class="philosophy-card" class:philosophy-card--active=move || mode.get() == p.mode>
                    <h4 class="philosophy-card__title">{p.title}</h4>
                    <p class="philosophy-card__summary">{p.summary}</p>
                    <ul class="philosophy-card__features">
                        {p.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                    </ul>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class=move || format!("section about {}", t().panel_class) id="about">
            <div class="container">
                <header class="section__header">
                    <h2 class="section__title">{move || t().about.title}</h2>
                    <p class="section__subtitle">{move || t().about.subtitle}</p>
                </header>
                <p class="about__intro">
                    <strong>{PROFILE.name}</strong>", "{PROFILE.title}
                </p>
                <div class="about__columns">
                    <div class="about__column">
                        <h3 class="about__heading">{move || t().education_title}</h3>
                        <ul class="timeline">{education}</ul>
                    </div>
                    <div class="about__column">
                        <h3 class="about__heading">{move || t().experience_title}</h3>
                        <ul class="timeline">{experience}</ul>
                    </div>
                </div>
                <h3 class="about__heading">{move || t().philosophy_title}</h3>
                <div class="philosophy-grid">{philosophies}</div>
            </div>
        </section>
    }
}
