//! Authenticated REST client with one-shot token refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected call goes through `ApiClient::send`. The client reads the
//! access token from the `TokenStore` before each attempt, so a token rotated
//! by another caller is picked up on the retry without extra plumbing.
//!
//! REFRESH PROTOCOL
//! ================
//! 1. A 401 on the first attempt pauses the call and runs `refresh_access`.
//! 2. With no refresh token, or when the refresh exchange fails for any
//!    reason, the store is cleared, the session-expired hook fires and the
//!    caller sees `ApiError::Unauthorized`.
//! 3. Otherwise the new access token is stored and the call is resubmitted
//!    once. A 401 on that retry is returned as-is.
//!
//! Concurrent 401s share one refresh: callers queue on `refresh_lock`, and a
//! caller that finds the stored token already differs from the one that
//! failed reuses it.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::lock::Mutex;
use records::{MessageResponse, RefreshRequest, RefreshResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::token_store::TokenStore;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::config::ClientConfig;
use crate::util::storage::KeyValueStore;

pub const REFRESH_PATH: &str = "token/refresh/";

type ExpiredHook = Rc<dyn Fn()>;

/// Which try of one logical request is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attempt {
    First,
    Retried,
}

struct Inner<T, S> {
    transport: T,
    store: TokenStore<S>,
    config: ClientConfig,
    refresh_lock: Mutex<()>,
    on_expired: RefCell<Option<ExpiredHook>>,
}

/// Cheap handle; clones share transport, store and refresh lock.
pub struct ApiClient<T, S> {
    inner: Rc<Inner<T, S>>,
}

impl<T, S> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, store: TokenStore<S>, config: ClientConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                transport,
                store,
                config,
                refresh_lock: Mutex::new(()),
                on_expired: RefCell::new(None),
            }),
        }
    }

    /// Install the callback run after a terminal refresh failure, once the
    /// store has been cleared. Replaces any previous hook.
    pub fn on_session_expired(&self, hook: impl Fn() + 'static) {
        *self.inner.on_expired.borrow_mut() = Some(Rc::new(hook));
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.inner.store
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Send a protected request, running the refresh protocol on 401.
    ///
    /// # Errors
    ///
    /// Any non-2xx status mapped through [`ApiError::from_status`], or the
    /// transport failure.
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<HttpResponse, ApiError> {
        let url = self.inner.config.url(path);
        let mut attempt = Attempt::First;
        loop {
            let bearer = self.inner.store.access_token();
            let request = HttpRequest { method, url: url.clone(), body: body.clone(), bearer: bearer.clone() };
            let response = self.inner.transport.send(&request).await?;
            if response.status != 401 {
                return check_status(response);
            }
            match attempt {
                Attempt::First => {
                    log::debug!("http: 401 from {url}, refreshing access token");
                    self.refresh_access(bearer.as_deref()).await?;
                    attempt = Attempt::Retried;
                }
                Attempt::Retried => {
                    log::warn!("http: {url} still unauthorized after refresh");
                    return Err(ApiError::Unauthorized);
                }
            }
        }
    }

    /// Send a request to an endpoint that needs no credentials: no bearer
    /// header, and a 401 is an ordinary rejection rather than an expiry.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::send`], except 401 maps to [`ApiError::Rejected`].
    pub async fn send_public(&self, method: Method, path: &str, body: Option<Value>) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest { method, url: self.inner.config.url(path), body, bearer: None };
        let response = self.inner.transport.send(&request).await?;
        if response.status == 401 {
            return Err(match ApiError::from_status(400, &response.body) {
                ApiError::Rejected { message, .. } => ApiError::Rejected { status: 401, message },
                other => other,
            });
        }
        check_status(response)
    }

    /// Obtain a usable access token after `failed` was rejected.
    async fn refresh_access(&self, failed: Option<&str>) -> Result<(), ApiError> {
        let _guard = self.inner.refresh_lock.lock().await;
        let store = &self.inner.store;

        if let Some(current) = store.access_token() {
            if failed != Some(current.as_str()) {
                log::debug!("http: access token already rotated, reusing");
                return Ok(());
            }
        }

        let Some(refresh) = store.refresh_token() else {
            log::info!("http: no refresh token, ending session");
            self.expire();
            return Err(ApiError::Unauthorized);
        };

        match self.exchange_refresh(refresh).await {
            Ok(access) => {
                store.replace_access(&access);
                Ok(())
            }
            Err(err) => {
                log::warn!("http: token refresh failed: {err}");
                self.expire();
                Err(ApiError::Unauthorized)
            }
        }
    }

    async fn exchange_refresh(&self, refresh: String) -> Result<String, ApiError> {
        let body = encode(&RefreshRequest { refresh })?;
        let request = HttpRequest {
            method: Method::Post,
            url: self.inner.config.url(REFRESH_PATH),
            body: Some(body),
            bearer: None,
        };
        let response = check_status(self.inner.transport.send(&request).await?)?;
        let decoded: RefreshResponse = response.json().map_err(ApiError::Decode)?;
        if decoded.access.is_empty() {
            return Err(ApiError::Decode("refresh response carried an empty access token".to_owned()));
        }
        Ok(decoded.access)
    }

    /// Terminal session failure: wipe credentials and notify the UI. Callers
    /// queued behind the one that already ended the session find the store
    /// empty and stay quiet.
    fn expire(&self) {
        let store = &self.inner.store;
        let had_session = store.access_token().is_some() || store.refresh_token().is_some();
        store.clear();
        if !had_session {
            log::debug!("http: session already ended");
            return;
        }
        let hook = self.inner.on_expired.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    // =========================================================================
    // TYPED HELPERS
    // =========================================================================

    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::Get, path, None).await?.json().map_err(ApiError::Decode)
    }

    pub(crate) async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.send(Method::Post, path, Some(encode(body)?)).await?.json().map_err(ApiError::Decode)
    }

    pub(crate) async fn put_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.send(Method::Put, path, Some(encode(body)?)).await?.json().map_err(ApiError::Decode)
    }

    /// POST with no body to a workflow action endpoint. A blank success body
    /// reads as an empty message.
    pub(crate) async fn post_action(&self, path: &str) -> Result<MessageResponse, ApiError> {
        let response = self.send(Method::Post, path, None).await?;
        if response.body.trim().is_empty() {
            return Ok(MessageResponse::default());
        }
        response.json().map_err(ApiError::Decode)
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_status(response.status, &response.body))
    }
}

pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}
