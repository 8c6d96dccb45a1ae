//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render and forward user input; state transitions stay in
//! `state` so they can be tested without a DOM.

pub mod password_strength_meter;
pub mod recaptcha;
pub mod route_guard;
