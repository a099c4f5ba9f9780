use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;
use tracing::info;

use super::dispatcher::{Dispatcher, PendingRequest, RejectReason, SendOutcome, Ticket};
use super::store::ConversationStore;
use crate::api::{ApiError, ChatBackend, ChatResponse};

type Delivery = (Ticket, Result<ChatResponse, ApiError>);

/// One chat pane: its conversation, input line and visibility.
///
/// Requests run on a spawned task and report back over a channel, so the
/// owner stays free to redraw. Call [`poll`](Self::poll) from the UI loop
/// (or [`settle`](Self::settle) to wait) to fold answers in.
pub struct ChatWidget {
    dispatcher: Dispatcher,
    backend: Arc<dyn ChatBackend>,
    input: String,
    open: bool,
    discard_on_close: bool,
    task: Option<AbortHandle>,
    tx: UnboundedSender<Delivery>,
    rx: UnboundedReceiver<Delivery>,
}

impl ChatWidget {
    pub fn new(backend: Arc<dyn ChatBackend>, discard_on_close: bool) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            dispatcher: Dispatcher::new(),
            backend,
            input: String::new(),
            open: false,
            discard_on_close,
            task: None,
            tx,
            rx,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        self.dispatcher.store()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the pane. Under the discard policy an outstanding request is
    /// aborted and its answer will never be recorded.
    pub fn close(&mut self) {
        self.open = false;

        if !self.discard_on_close {
            return;
        }
        if let Some(ticket) = self.dispatcher.abandon() {
            if let Some(task) = self.task.take() {
                task.abort();
            }
            info!("Discarded in-flight chat request {:?} on close", ticket);
        }
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// True while an answer is outstanding
    pub fn is_typing(&self) -> bool {
        self.dispatcher.is_in_flight()
    }

    /// Whether the send action should be enabled
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_typing()
    }

    /// Dispatch the current input line.
    ///
    /// On success the input is cleared and the request is running in the
    /// background. A rejected submit leaves the input untouched.
    pub fn submit(&mut self) -> Result<Ticket, RejectReason> {
        let PendingRequest { ticket, request } = self.dispatcher.begin(&self.input)?;
        self.input.clear();

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = backend.send_chat(&request).await;
            // Receiver lives as long as the widget
            let _ = tx.send((ticket, outcome));
        });
        self.task = Some(handle.abort_handle());

        Ok(ticket)
    }

    /// Fold any finished requests into the conversation without waiting.
    /// Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((ticket, outcome)) = self.rx.try_recv() {
            if self.apply(ticket, outcome).is_some() {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the outstanding request, if any, and fold it in
    pub async fn settle(&mut self) -> Option<SendOutcome> {
        while self.dispatcher.is_in_flight() {
            let (ticket, outcome) = self.rx.recv().await?;
            if let Some(result) = self.apply(ticket, outcome) {
                return Some(result);
            }
        }
        None
    }

    fn apply(&mut self, ticket: Ticket, outcome: Result<ChatResponse, ApiError>) -> Option<SendOutcome> {
        let result = self.dispatcher.complete(ticket, outcome);
        if result.is_some() {
            self.task = None;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ChatRequest, MockChatBackend};
    use crate::chat::{FallbackKind, Role};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// Backend that answers only when released
    #[derive(Default)]
    struct GatedBackend {
        release: Notify,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl GatedBackend {
        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatBackend for GatedBackend {
        async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
            self.seen.lock().unwrap().push(request.clone());
            self.release.notified().await;
            Ok(ChatResponse {
                response: format!("echo: {}", request.message),
                session_id: "gated".to_string(),
            })
        }
    }

    async fn let_tasks_run() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    fn contents(widget: &ChatWidget) -> Vec<(Role, String)> {
        widget
            .store()
            .messages()
            .iter()
            .map(|m| (m.role(), m.content().to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_rapid_second_submit_is_dropped() {
        let backend = Arc::new(GatedBackend::default());
        let mut widget = ChatWidget::new(backend.clone(), false);
        widget.open();

        widget.set_input("A");
        assert!(widget.submit().is_ok());
        assert_eq!(widget.input(), "");
        assert!(widget.is_typing());

        widget.set_input("B");
        assert!(!widget.can_submit());
        assert_eq!(widget.submit().unwrap_err(), RejectReason::InFlight);
        assert_eq!(widget.input(), "B");

        let_tasks_run().await;
        assert_eq!(backend.calls(), 1);

        backend.release.notify_one();
        assert_eq!(widget.settle().await, Some(SendOutcome::Replied));

        assert_eq!(
            contents(&widget),
            vec![
                (Role::User, "A".to_string()),
                (Role::Assistant, "echo: A".to_string()),
            ]
        );
        assert_eq!(backend.calls(), 1);
        assert!(!widget.is_typing());
        assert!(widget.can_submit());
    }

    #[tokio::test]
    async fn test_close_keeps_reply_by_default() {
        let backend = Arc::new(GatedBackend::default());
        let mut widget = ChatWidget::new(backend.clone(), false);
        widget.open();
        widget.set_input("Hi");
        widget.submit().unwrap();

        widget.close();
        assert!(!widget.is_open());
        assert!(widget.is_typing());

        let_tasks_run().await;
        backend.release.notify_one();
        assert_eq!(widget.settle().await, Some(SendOutcome::Replied));

        widget.toggle();
        assert!(widget.is_open());
        assert_eq!(widget.store().len(), 2);
        assert_eq!(widget.store().session_id(), Some("gated"));
    }

    #[tokio::test]
    async fn test_close_discards_reply_when_configured() {
        let backend = Arc::new(GatedBackend::default());
        let mut widget = ChatWidget::new(backend.clone(), true);
        widget.open();
        widget.set_input("Hi");
        widget.submit().unwrap();
        let_tasks_run().await;

        widget.toggle();
        assert!(!widget.is_open());
        assert!(!widget.is_typing());

        backend.release.notify_one();
        let_tasks_run().await;
        assert_eq!(widget.poll(), 0);
        assert_eq!(contents(&widget), vec![(Role::User, "Hi".to_string())]);
        assert_eq!(widget.store().session_id(), None);

        // The widget is usable again straight away
        widget.open();
        widget.set_input("again");
        widget.submit().unwrap();
        let_tasks_run().await;
        backend.release.notify_one();
        assert_eq!(widget.settle().await, Some(SendOutcome::Replied));
        assert_eq!(widget.store().len(), 3);
        assert_eq!(widget.store().session_id(), Some("gated"));
    }

    #[tokio::test]
    async fn test_poll_applies_failure_fallback() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_send_chat()
            .times(1)
            .returning(|_| Err(ApiError::status(504, "Gateway Timeout")));
        let mut widget = ChatWidget::new(Arc::new(backend), false);

        widget.set_input("slow?");
        widget.submit().unwrap();

        let mut applied = 0;
        for _ in 0..20 {
            tokio::task::yield_now().await;
            applied += widget.poll();
            if applied > 0 {
                break;
            }
        }

        assert_eq!(applied, 1);
        assert_eq!(
            widget.store().last().unwrap().content(),
            FallbackKind::GatewayTimeout.message()
        );
        assert!(!widget.is_typing());
    }

    #[tokio::test]
    async fn test_blank_submit_is_ignored() {
        let mut backend = MockChatBackend::new();
        backend.expect_send_chat().never();
        let mut widget = ChatWidget::new(Arc::new(backend), false);

        widget.set_input("   ");
        assert!(!widget.can_submit());
        assert_eq!(widget.submit().unwrap_err(), RejectReason::Empty);
        assert_eq!(widget.input(), "   ");
        assert!(widget.store().is_empty());
        assert_eq!(widget.settle().await, None);
    }

    #[test]
    fn test_input_editing() {
        let mut widget = ChatWidget::new(Arc::new(MockChatBackend::new()), false);
        widget.push_char('h');
        widget.push_char('i');
        widget.pop_char();
        widget.push_char('o');
        assert_eq!(widget.input(), "ho");
    }
}
