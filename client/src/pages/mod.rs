//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is one page; `home` composes the sections from `components`.

pub mod home;
