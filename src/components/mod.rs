//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render records and forms while reading/writing shared state
//! from Leptos context providers. Decisions live in `state`; components only
//! bind inputs and render.

pub mod donation_card;
pub mod nav;
pub mod notification_tray;
pub mod request_card;
pub mod request_form;
