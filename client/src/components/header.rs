//! Sticky site header with section navigation and the mode switch.

use leptos::prelude::*;

use crate::components::mode_toggle::ModeToggle;
use crate::state::mode::use_mode;
use crate::util::mode_theme::theme;

/// In-page anchors, in display order.
const NAV: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let mode = use_mode();
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::page::{scroll_offset, scrolled_past_threshold};
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(scrolled_past_threshold(scroll_offset()));
        });
        on_cleanup(move || handle.remove());
    }

    let nav_class = move || format!("site-nav {}", theme(mode.get()).nav_class);
    let nav_links = move || {
        NAV.into_iter()
            .map(|(href, label)| {
                view! {
                    <li>
                        <a href=href class="nav-link" on:click=move |_| menu_open.set(false)>
                            {label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header" class:site-header--scrolled=move || scrolled.get()>
            <div class="container site-header__bar">
                <a href="/" class="site-header__logo">
                    <span class="site-header__logo-primary">"Design"</span>
                    <span class="site-header__logo-secondary">"Portfolio"</span>
                </a>
                <button
                    type="button"
                    class="site-header__menu-button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <nav class=nav_class>
                    <ul class="site-nav__list">{nav_links}</ul>
                </nav>
                <div class="site-header__toggle">
                    <ModeToggle/>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="site-header__mobile">
                    <nav class=nav_class>
                        <ul class="site-nav__list site-nav__list--stacked">{nav_links}</ul>
                    </nav>
                    <ModeToggle/>
                </div>
            </Show>
        </header>
    }
}
