//! Scripted transports for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Replays queued responses in order and records every request sent.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
        self
    }

    pub(crate) fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn sent_json(&self, index: usize) -> serde_json::Value {
        let sent = self.sent.borrow();
        let body = sent[index].body.as_deref().unwrap_or("null");
        serde_json::from_str(body).unwrap()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

type Parked = oneshot::Sender<Result<HttpResponse, TransportError>>;

/// Holds every request open until the test resolves it, so several calls can
/// be in flight at once and complete in any order.
#[derive(Clone, Default)]
pub(crate) struct GatedTransport {
    parked: Rc<RefCell<Vec<Option<Parked>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl GatedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Requests sent and not yet resolved.
    pub(crate) fn in_flight(&self) -> usize {
        self.parked.borrow().iter().filter(|p| p.is_some()).count()
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    /// Complete the `index`-th request sent (in send order).
    pub(crate) fn resolve(&self, index: usize, status: u16, body: serde_json::Value) {
        let sender = self.parked.borrow_mut()[index].take().expect("request already resolved");
        let _ = sender.send(Ok(HttpResponse { status, body: body.to_string() }));
    }
}

impl HttpTransport for GatedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (tx, rx) = oneshot::channel();
        self.sent.borrow_mut().push(request);
        self.parked.borrow_mut().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(TransportError("request dropped".to_owned())))
    }
}
