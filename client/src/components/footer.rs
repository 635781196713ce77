//! Site footer with per-mode copy and a mode switch button.

use leptos::prelude::*;

use crate::state::mode::use_mode;
use crate::util::mode_theme::theme;
use crate::util::page::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let mode = use_mode();
    let t = move || theme(mode.get());
    let year = RwSignal::new(current_year());

    // Refresh from the browser clock once hydrated.
    Effect::new(move || year.set(current_year()));

    view! {
        <footer class="site-footer">
            <div class="container site-footer__columns">
                <div class="site-footer__column">
                    <h3 class="site-footer__title">"Design Portfolio"</h3>
                    <p class="site-footer__text">{move || t().footer_blurb}</p>
                </div>
                <div class="site-footer__column">
                    <h3 class="site-footer__title">"Quick Links"</h3>
                    <ul class="site-footer__links">
                        <li><a href="#about">"About"</a></li>
                        <li><a href="#projects">"Projects"</a></li>
                        <li><a href="#skills">"Skills"</a></li>
                        <li><a href="#contact">"Contact"</a></li>
                    </ul>
                </div>
                <div class="site-footer__column">
                    <h3 class="site-footer__title">"Design Modes"</h3>
                    <p class="site-footer__text">{move || t().footer_current}</p>
                    <button type="button" class="site-footer__switch" on:click=move |_| mode.toggle()>
                        {move || format!("Switch to {} Mode", mode.get().next().label())}
                    </button>
                </div>
            </div>
            <p class="site-footer__copyright">
                {move || format!("© {} Design Portfolio. All rights reserved.", year.get())}
            </p>
        </footer>
    }
}
