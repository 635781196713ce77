//! Root application component with routing and the mode provider.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::mode::{ModeProvider, use_mode};
use crate::util::mode_theme::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Mounts the one `ModeProvider` for the session and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Design Portfolio"/>
        <Meta name="description" content="A portfolio rendered three ways: UI-focused, UX-focused and balanced."/>

        <ModeProvider>
            <ModeRoot>
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                    </Routes>
                </Router>
            </ModeRoot>
        </ModeProvider>
    }
}

/// Wrapper carrying the active mode's root class so stylesheets can restyle
/// the whole page from one selector.
#[component]
fn ModeRoot(children: Children) -> impl IntoView {
    let mode = use_mode();
    view! {
        <div
            class=move || format!("app-root {}", theme(mode.get()).root_class)
            class:app-root--high-contrast=move || mode.state().is_ux_mode()
        >
            {children()}
        </div>
    }
}
