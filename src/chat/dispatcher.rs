use serde::Serialize;
use tracing::{debug, warn};

use super::fallback::FallbackKind;
use super::message::Role;
use super::store::ConversationStore;
use crate::api::{ApiError, ChatBackend, ChatRequest, ChatResponse};

/// Identifies one dispatched request so a late answer can be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A turn that has been recorded locally and must now go over the wire
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub request: ChatRequest,
}

/// Why a send was refused before anything happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Nothing but whitespace
    Empty,
    /// A previous turn has not resolved yet
    InFlight,
}

/// What a call to [`Dispatcher::send`] ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "kind", rename_all = "snake_case")]
pub enum SendOutcome {
    Rejected(RejectReason),
    Replied,
    Fallback(FallbackKind),
}

/// Externally observable dispatcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Sending,
}

/// Runs one request/response cycle at a time against a [`ChatBackend`].
///
/// The cycle is split in two so a UI can keep drawing while the request is
/// outstanding: [`begin`](Self::begin) records the user's turn and hands out
/// the request, [`complete`](Self::complete) folds the answer back in.
/// [`send`](Self::send) chains both for callers that can simply await.
///
/// Failures never escape. They are logged and replaced by a fixed
/// assistant message picked by [`FallbackKind`].
#[derive(Debug, Default)]
pub struct Dispatcher {
    store: ConversationStore,
    in_flight: Option<Ticket>,
    next_ticket: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue an existing backend session
    pub fn with_session(session_id: &str) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.store.capture_session(session_id);
        dispatcher
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn state(&self) -> DispatchState {
        if self.in_flight.is_some() {
            DispatchState::Sending
        } else {
            DispatchState::Idle
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Record the user's turn and produce the request to send.
    ///
    /// Nothing is recorded when the utterance is blank or another request
    /// is still outstanding.
    pub fn begin(&mut self, utterance: &str) -> Result<PendingRequest, RejectReason> {
        if utterance.trim().is_empty() {
            return Err(RejectReason::Empty);
        }
        if self.in_flight.is_some() {
            debug!("Dropping chat input while a request is in flight");
            return Err(RejectReason::InFlight);
        }

        self.store.append_message(Role::User, utterance);

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);

        Ok(PendingRequest {
            ticket,
            request: ChatRequest {
                message: utterance.to_string(),
                session_id: self.store.session_id().map(str::to_string),
            },
        })
    }

    /// Fold the result of `ticket`'s request into the conversation.
    ///
    /// Returns `None` without touching anything when `ticket` is not the
    /// request currently in flight (it was abandoned).
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<ChatResponse, ApiError>,
    ) -> Option<SendOutcome> {
        if self.in_flight != Some(ticket) {
            debug!("Ignoring reply for abandoned request {:?}", ticket);
            return None;
        }
        self.in_flight = None;
        Some(self.fold(outcome))
    }

    /// Forget the outstanding request so its answer will be ignored
    pub fn abandon(&mut self) -> Option<Ticket> {
        self.in_flight.take()
    }

    /// Send one utterance and wait for the turn to settle
    pub async fn send<B>(&mut self, backend: &B, utterance: &str) -> SendOutcome
    where
        B: ChatBackend + ?Sized,
    {
        let pending = match self.begin(utterance) {
            Ok(pending) => pending,
            Err(reason) => return SendOutcome::Rejected(reason),
        };

        let outcome = backend.send_chat(&pending.request).await;
        self.in_flight = None;
        self.fold(outcome)
    }

    fn fold(&mut self, outcome: Result<ChatResponse, ApiError>) -> SendOutcome {
        match outcome {
            Ok(reply) => {
                self.store.capture_session(&reply.session_id);
                self.store.append_message(Role::Assistant, reply.response);
                SendOutcome::Replied
            }
            Err(err) => {
                let kind = FallbackKind::classify(&err);
                warn!("Chat error ({:?}): {}", kind, err);
                self.store.append_message(Role::Assistant, kind.message());
                SendOutcome::Fallback(kind)
            }
        }
    }
}
