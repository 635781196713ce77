//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mode_theme` keeps every per-mode presentation difference in one table so
//! components branch on data instead of on the mode itself. `page` isolates
//! browser-only lookups behind SSR-safe fallbacks.

pub mod mode_theme;
pub mod page;
