//! Design mode store and provider.
//!
//! DESIGN
//! ======
//! One `ModeStore` is created by [`ModeProvider`] when the app mounts and
//! lives for the rest of the session. It is never persisted. Consumers reach
//! it through [`use_mode`], which hands back a [`ModeHandle`]: the provided
//! store, or a detached stand-in fixed at [`Mode::Ui`] when a component is
//! rendered outside the provider. The stand-in logs and ignores writes.
//!
//! Writes go through `RwSignal::update`, so every reactive reader sees the
//! new mode before the next browser event is handled.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const NO_PROVIDER: &str = "No ModeProvider found";

/// Active design philosophy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Aesthetic-driven presentation.
    #[default]
    Ui = 0,
    /// Task- and clarity-driven presentation.
    Ux = 1,
    /// Middle ground between the two.
    Balanced = 2,
}

impl Mode {
    /// Toggle cycle order.
    pub const ALL: [Self; 3] = [Self::Ui, Self::Ux, Self::Balanced];

    /// Successor in the cycle `ui -> ux -> balanced -> ui`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Ui => Self::Ux,
            Self::Ux => Self::Balanced,
            Self::Balanced => Self::Ui,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Ux => "ux",
            Self::Balanced => "balanced",
        }
    }

    /// Short human label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ui => "UI",
            Self::Ux => "UX",
            Self::Balanced => "Balanced",
        }
    }

    /// Position in [`Mode::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MODE STATE
// =============================================================================

/// Current mode plus the operations on it. The per-mode flags are derived
/// on every read, so exactly one of them is true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeState {
    mode: Mode,
}

impl ModeState {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    #[must_use]
    pub fn is_ui_mode(&self) -> bool {
        self.mode == Mode::Ui
    }

    #[must_use]
    pub fn is_ux_mode(&self) -> bool {
        self.mode == Mode::Ux
    }

    #[must_use]
    pub fn is_balanced_mode(&self) -> bool {
        self.mode == Mode::Balanced
    }
}

// =============================================================================
// STORE + PROVIDER
// =============================================================================

/// Application-scoped reactive mode store.
#[derive(Clone, Copy, Debug)]
pub struct ModeStore(RwSignal<ModeState>);

impl ModeStore {
    #[must_use]
    pub fn new(initial: Mode) -> Self {
        Self(RwSignal::new(ModeState::new(initial)))
    }

    /// Tracked read of the current state.
    #[must_use]
    pub fn state(self) -> ModeState {
        self.0.get()
    }

    #[must_use]
    pub fn get(self) -> Mode {
        self.0.with(ModeState::mode)
    }

    pub fn set(self, mode: Mode) {
        self.0.update(|s| s.set_mode(mode));
    }

    pub fn toggle(self) {
        self.0.update(ModeState::toggle_mode);
    }
}

/// What a consumer gets from [`use_mode`].
#[derive(Clone, Copy, Debug)]
pub enum ModeHandle {
    Provided(ModeStore),
    /// No provider in scope: mode fixed at `Ui`, writes ignored.
    Detached,
}

impl ModeHandle {
    #[must_use]
    pub fn state(self) -> ModeState {
        match self {
            Self::Provided(store) => store.state(),
            Self::Detached => ModeState::default(),
        }
    }

    #[must_use]
    pub fn get(self) -> Mode {
        match self {
            Self::Provided(store) => store.get(),
            Self::Detached => Mode::Ui,
        }
    }

    pub fn set(self, mode: Mode) {
        match self {
            Self::Provided(store) => store.set(mode),
            Self::Detached => leptos::logging::warn!("{NO_PROVIDER}: ignoring set_mode({mode})"),
        }
    }

    pub fn toggle(self) {
        match self {
            Self::Provided(store) => store.toggle(),
            Self::Detached => leptos::logging::warn!("{NO_PROVIDER}: ignoring toggle_mode"),
        }
    }

    #[cfg(test)]
    fn is_detached(self) -> bool {
        matches!(self, Self::Detached)
    }
}

/// Look up the session's mode store.
pub fn use_mode() -> ModeHandle {
    if let Some(store) = use_context::<ModeStore>() {
        ModeHandle::Provided(store)
    } else {
        leptos::logging::warn!("{NO_PROVIDER}: falling back to UI mode");
        ModeHandle::Detached
    }
}

/// Create the session's mode store and make it available to `children`.
#[component]
pub fn ModeProvider(#[prop(optional)] initial: Mode, children: Children) -> impl IntoView {
    provide_context(ModeStore::new(initial));
    children()
}
