//! Networking layer: credential persistence, transport and REST endpoints.
//!
//! DESIGN
//! ======
//! `token_store` owns persisted credentials, `transport` moves bytes, `http`
//! runs the bearer/refresh protocol over them and `api` names each endpoint.
//! Pages only ever see `ApiClient` methods and `ApiError`.

pub mod api;
pub mod error;
pub mod http;
pub mod token_store;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

use crate::util::storage::BrowserStorage;

/// The client the browser build wires into context.
pub type BrowserClient = http::ApiClient<transport::BrowserTransport, BrowserStorage>;
