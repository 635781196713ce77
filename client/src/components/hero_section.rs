//! Landing hero.

use leptos::prelude::*;

use crate::components::info_tip::InfoTip;
use crate::state::mode::use_mode;
use crate::util::mode_theme::theme;

const MODES_HINT: &str = "This portfolio has three modes: UI-focused, UX-focused and Balanced. \
                          Switch between them to see the difference!";

#[component]
pub fn HeroSection() -> impl IntoView {
    let mode = use_mode();
    let t = move || theme(mode.get());
    let button_class = move || t().button_class;

    view! {
        <section class="section hero" id="home">
            <div class="container hero__layout">
                <div class="hero__text">
                    <h1 class="hero__title">
                        "Design that "
                        <span class="hero__accent hero__accent--primary">"communicates"</span>
                        " & "
                        <span class="hero__accent hero__accent--secondary">"connects"</span>
                    </h1>
                    <p class="hero__subtitle">{move || t().hero.subtitle}</p>
                    <Show when=move || t().decorative>
                        <p class="hero__callout">
                            {MODES_HINT}
                            <InfoTip text="Use the switch in the header, or the button in the footer."/>
                        </p>
                    </Show>
                    <div class="hero__actions">
                        <a href="#projects" class=button_class>"View Projects"</a>
                        <a href="#contact" class=move || format!("{} btn--outline", button_class())>"Get in Touch"</a>
                    </div>
                </div>
                <figure class="hero__figure" class:hero__figure--decorated=move || t().decorative>
                    <div class="hero__illustration" role="img" aria-label="Design comparison illustration"></div>
                    <figcaption class="hero__badge">{move || format!("Viewing: {} mode", mode.get().label())}</figcaption>
                </figure>
            </div>
        </section>
    }
}
