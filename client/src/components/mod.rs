//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections. Each reads the design mode from
//! context once and looks its presentation up in `util::mode_theme`; only
//! `mode_toggle` and the footer switch write the mode.

pub mod about_section;
pub mod contact_section;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod info_tip;
pub mod mode_toggle;
pub mod project_card;
pub mod projects_section;
pub mod skill_bar;
pub mod skills_section;
