//! Scripted transport for driving `ApiClient` natively.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use super::http::ApiClient;
use super::token_store::TokenStore;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::util::storage::MemoryStorage;

pub type TestClient = ApiClient<ScriptedTransport, MemoryStorage>;

/// Replies from a fixed queue in order and records every request.
///
/// Each send yields to the executor once after taking its reply, so two
/// calls joined together interleave the way two fetches would.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    log: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.log.borrow_mut().push(request.clone());
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {}", request.url));
        YieldNow(false).await;
        reply
    }
}

struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Client over `transport` with a fresh in-memory store. The store handle is
/// returned so tests can seed and inspect it.
pub fn client(transport: ScriptedTransport) -> (TestClient, TokenStore<MemoryStorage>) {
    client_on(transport, MemoryStorage::new())
}

/// As [`client`], over caller-owned storage.
pub fn client_on(transport: ScriptedTransport, storage: MemoryStorage) -> (TestClient, TokenStore<MemoryStorage>) {
    let store = TokenStore::new(storage);
    let client = ApiClient::new(transport, store.clone(), ClientConfig::default());
    (client, store)
}

pub fn seed_session(store: &TokenStore<MemoryStorage>, access: &str, refresh: &str) {
    let credentials = records::Credentials { access: access.to_owned(), refresh: refresh.to_owned() };
    let user = records::User { id: 1, username: "donor".to_owned(), email: "donor@example.com".to_owned() };
    store.save(&credentials, &user);
}
