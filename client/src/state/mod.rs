//! Client-side reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mode` is the one application-scoped store, provided at the root by
//! `ModeProvider`. `contact_form` is local to the contact section.

pub mod contact_form;
pub mod mode;
