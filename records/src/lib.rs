//! Shared domain model for the blood bank client.
//!
//! This crate owns the REST wire representation (users, blood requests,
//! donation records, dashboard statistics), the client-side form validation
//! rules, and the derivation of which workflow actions a viewer may take on a
//! record. It has no browser dependencies so every rule is testable natively.
//!
//! The server is authoritative for every status transition; nothing here
//! mutates a status; it only reads one.

pub mod blood;
pub mod donation;
pub mod request;
pub mod stats;
pub mod user;
pub mod validate;
pub mod workflow;

pub use blood::{BloodGroup, ParseEnumError, Urgency};
pub use donation::{DonationRecord, DonationRole, DonationStatus};
pub use request::{BloodRequest, NewBloodRequest, RequestFilter, RequestStatus};
pub use stats::{DashboardStats, DashboardSummary};
pub use user::{
    AcceptResponse, Credentials, LoginRequest, LoginResponse, MessageResponse, Profile, RefreshRequest,
    RefreshResponse, RegisterRequest, User, UserId, VerifyEmailResponse,
};
pub use validate::FieldErrors;
pub use workflow::{DonationAction, RequestAction, Viewer};
