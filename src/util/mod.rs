//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the view-models stay testable natively.

pub mod auth;
pub mod clock;
pub mod dialog;
pub mod storage;
