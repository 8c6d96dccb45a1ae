//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `signup` holds the pure form model and reducer; `signup_controller`
//! sequences it against the authentication collaborator outside a reactive
//! runtime.

pub mod signup;
pub mod signup_controller;
