//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod donations;
pub mod login;
pub mod profile;
pub mod register;
pub mod requests;
pub mod verify_email;
