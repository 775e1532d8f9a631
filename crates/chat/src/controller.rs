use std::sync::Arc;

use tokio::sync::watch;

use sprig_llm::{
    ChatProvider, Fragment, HistoryTurn, InlineImage, ProviderStreamHandle,
    StreamEvent as ProviderStreamEvent, StreamEventPayload as ProviderStreamEventPayload,
    StreamRequest, StreamSessionId as ProviderSessionId, TurnRole,
};

use crate::clipboard::Clipboard;
use crate::input::{PendingInput, StagedImage};
use crate::message::{
    Citation, Conversation, Message, MessageId, MessageStatus, Role, StreamSessionId,
    StreamTransition,
};
use crate::prompts::{STREAM_ERROR_FALLBACK, SYSTEM_PROMPT};

/// Why the input controller refused a send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    /// Trimmed text is empty and no image is staged.
    EmptyInput,
    /// A previous exchange has not reached a terminal state yet.
    StreamInFlight,
}

/// One accepted send, ready to be driven to its terminal state.
///
/// Holds no handle when the provider refused to open a stream; driving such
/// an exchange is a no-op because the fault was already finalized.
#[must_use = "an accepted exchange must be driven with run_exchange"]
pub struct Exchange {
    handle: Option<ProviderStreamHandle>,
}

/// Reducer-level stream bookkeeping kept outside the domain model.
#[derive(Debug, Clone, Copy)]
struct ActiveStream {
    session: StreamSessionId,
    assistant_message_id: MessageId,
}

/// Owns the conversation, the pending input, and the in-flight stream.
///
/// Single consumer by construction: all mutation funnels through `&mut self`
/// methods, and the one-active-session invariant keeps a second concurrent
/// stream from ever existing. The presentation layer observes through the
/// watch channel and never mutates messages directly.
pub struct ChatController {
    provider: Arc<dyn ChatProvider>,
    conversation: Conversation,
    pending: PendingInput,
    next_message_id: u64,
    next_session_id: u64,
    active_stream: Option<ActiveStream>,
    snapshot_tx: watch::Sender<Vec<Message>>,
}

impl ChatController {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());

        Self {
            provider,
            conversation: Conversation::new(),
            pending: PendingInput::default(),
            next_message_id: 1,
            next_session_id: 1,
            active_stream: None,
            snapshot_tx,
        }
    }

    /// Read-only snapshot feed for the presentation layer.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.snapshot_tx.subscribe()
    }

    pub fn messages(&self) -> &[Message] {
        &self.conversation.messages
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn pending_input(&self) -> &PendingInput {
        &self.pending
    }

    pub fn is_streaming(&self) -> bool {
        self.active_stream.is_some()
    }

    /// Mirrors the input box; kept so a snapshot of the draft survives
    /// presentation-layer rebuilds.
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending.set_text(text);
    }

    /// Stages an image for the next send, replacing any prior one.
    pub fn stage_image(&mut self, image: StagedImage) {
        self.pending.stage_image(image);
    }

    pub fn clear_staged_image(&mut self) {
        self.pending.clear_staged_image();
    }

    /// Validates send eligibility and, on acceptance, snapshots pending
    /// input and opens a provider stream seeded with pre-send history.
    ///
    /// Pending text and the staged image are cleared synchronously before
    /// the returned exchange is driven, so the next draft can be typed
    /// immediately even though a second send stays rejected until this one
    /// reaches a terminal state.
    pub fn try_send(&mut self, raw_text: &str) -> Result<Exchange, SendRejection> {
        if raw_text.trim().is_empty() && self.pending.staged_image.is_none() {
            return Err(SendRejection::EmptyInput);
        }
        if self.active_stream.is_some() {
            return Err(SendRejection::StreamInFlight);
        }

        let session = self.alloc_session_id();
        if self
            .conversation
            .apply_stream_transition(StreamTransition::Start(session))
            .is_err()
        {
            return Err(SendRejection::StreamInFlight);
        }

        // History as it stood before this send's two appends.
        let history = Self::build_history_turns(&self.conversation);

        // Snapshot-and-clear is atomic from the caller's view: no await
        // point exists between acceptance and this clear.
        let staged_image = self.pending.staged_image.take();
        self.pending.text.clear();

        let user_message_id = self.alloc_message_id();
        let assistant_message_id = self.alloc_message_id();

        self.conversation.messages.push(Message::user_done(
            user_message_id,
            raw_text,
            staged_image.as_ref().map(|image| image.display_url.clone()),
        ));
        self.conversation
            .messages
            .push(Message::assistant_streaming(assistant_message_id, session));

        self.active_stream = Some(ActiveStream {
            session,
            assistant_message_id,
        });
        self.publish_snapshot();

        let mut request = StreamRequest::new(
            Self::chat_session_to_provider(session),
            raw_text,
            history,
        )
        .with_system_instruction(SYSTEM_PROMPT);
        if let Some(image) = staged_image {
            request = request.with_image(InlineImage {
                mime_type: image.mime_type,
                data: image.data,
            });
        }

        match self.provider.stream_chat(request) {
            Ok(handle) => Ok(Exchange {
                handle: Some(handle),
            }),
            Err(error) => {
                tracing::error!(
                    session_id = session.0,
                    error = %error,
                    "failed to open provider stream"
                );
                self.finish_stream_with_error(session, error.to_string());
                Ok(Exchange { handle: None })
            }
        }
    }

    /// Drives an accepted exchange to its terminal state.
    ///
    /// The worker runs on the runtime; events cross one channel and fold
    /// here in arrival order. A channel that closes without a terminal
    /// event finalizes as a fault.
    pub async fn run_exchange(&mut self, exchange: Exchange) {
        let Some(ProviderStreamHandle { mut stream, worker }) = exchange.handle else {
            return;
        };
        let session = Self::provider_session_to_chat(stream.session());

        tokio::spawn(worker);

        while let Some(event) = stream.recv().await {
            if self.handle_stream_event(event) {
                return;
            }
        }

        self.handle_stream_reader_closed(session);
    }

    /// Validates, snapshots, and drives one full exchange.
    pub async fn send(&mut self, raw_text: &str) -> Result<(), SendRejection> {
        let exchange = self.try_send(raw_text)?;
        self.run_exchange(exchange).await;
        Ok(())
    }

    /// Empties the conversation and pending input. Idempotent.
    ///
    /// An in-flight stream is orphaned rather than cancelled: its session is
    /// forgotten here, so any late events fail the session check and drop as
    /// stale instead of re-populating the emptied history.
    pub fn clear_history(&mut self) {
        self.conversation.clear();
        self.pending.clear();
        self.active_stream = None;
        self.publish_snapshot();
    }

    /// Copies the widget share link; best effort, failures only logged.
    pub fn copy_share_link(&self, clipboard: &mut dyn Clipboard, url: &str) -> bool {
        match clipboard.set_text(url) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(error = %error, "failed to copy share link");
                false
            }
        }
    }

    /// Returns true when the event was terminal for the active stream.
    fn handle_stream_event(&mut self, event: ProviderStreamEvent) -> bool {
        let session = Self::provider_session_to_chat(event.session);

        if !self.stream_event_is_current(session) {
            // Orphaned or stale streams drain here without touching state.
            tracing::debug!(session_id = session.0, "dropping stale stream event");
            return false;
        }

        match event.payload {
            ProviderStreamEventPayload::Fragment(fragment) => {
                self.fold_fragment(&fragment);
                false
            }
            ProviderStreamEventPayload::Done => {
                self.finish_stream_with_done(session);
                true
            }
            ProviderStreamEventPayload::Error(message) => {
                self.finish_stream_with_error(session, message);
                true
            }
        }
    }

    fn handle_stream_reader_closed(&mut self, session: StreamSessionId) {
        if self.stream_event_is_current(session) {
            self.finish_stream_with_error(
                session,
                "provider stream ended before a terminal event".to_string(),
            );
        }
    }

    /// Folds one fragment into the in-flight message, in arrival order.
    fn fold_fragment(&mut self, fragment: &Fragment) {
        let Some(active_stream) = self.active_stream else {
            return;
        };

        let Some(message) = self
            .conversation
            .messages
            .iter_mut()
            .find(|message| message.id == active_stream.assistant_message_id)
        else {
            return;
        };

        message.content.push_str(fragment.delta());

        let citations = fragment.citations();
        if !citations.is_empty() {
            // Sticky-until-replaced: only a non-empty set may overwrite.
            message.sources = citations
                .iter()
                .map(|source| Citation::new(source.title.clone(), source.uri.clone()))
                .collect();
        }

        self.publish_snapshot();
    }

    fn finish_stream_with_done(&mut self, session: StreamSessionId) {
        self.finalize_stream(session, None);
    }

    fn finish_stream_with_error(&mut self, session: StreamSessionId, message: String) {
        self.finalize_stream(session, Some(message));
    }

    fn finalize_stream(&mut self, session: StreamSessionId, fault: Option<String>) {
        let Some(active_stream) = self.active_stream else {
            return;
        };
        if active_stream.session != session {
            return;
        }

        let transition = match &fault {
            None => StreamTransition::Complete(session),
            Some(message) => StreamTransition::Fail {
                session,
                message: message.clone(),
            },
        };
        let _ = self.conversation.apply_stream_transition(transition);

        if let Some(message) = self
            .conversation
            .messages
            .iter_mut()
            .find(|message| message.id == active_stream.assistant_message_id)
        {
            match fault {
                None => {
                    // Empty content is a valid success terminal.
                    message.status = MessageStatus::Done;
                }
                Some(fault_message) => {
                    // Partial content is discarded by policy; citations
                    // gathered before the fault stay.
                    message.content = STREAM_ERROR_FALLBACK.to_string();
                    message.status = MessageStatus::Error(fault_message);
                }
            }
        }

        self.active_stream = None;
        self.publish_snapshot();
    }

    fn stream_event_is_current(&self, session: StreamSessionId) -> bool {
        self.active_stream
            .is_some_and(|active_stream| active_stream.session == session)
            && self.conversation.stream_state.accepts_stream_event(session)
    }

    fn publish_snapshot(&self) {
        self.snapshot_tx
            .send_replace(self.conversation.messages.clone());
    }

    fn build_history_turns(conversation: &Conversation) -> Vec<HistoryTurn> {
        conversation
            .messages
            .iter()
            .filter(|message| !message.content.trim().is_empty())
            .filter(|message| !matches!(message.status, MessageStatus::Streaming(_)))
            .map(|message| {
                // Keep role mapping explicit at the crate boundary so llm
                // types stay decoupled from chat domain enums.
                HistoryTurn::new(
                    Self::chat_role_to_provider(message.role),
                    message.content.clone(),
                )
            })
            .collect()
    }

    fn chat_role_to_provider(role: Role) -> TurnRole {
        match role {
            Role::User => TurnRole::User,
            Role::Assistant => TurnRole::Model,
        }
    }

    fn chat_session_to_provider(session: StreamSessionId) -> ProviderSessionId {
        ProviderSessionId::new(session.0)
    }

    fn provider_session_to_chat(session: ProviderSessionId) -> StreamSessionId {
        StreamSessionId::new(session.0)
    }

    fn alloc_message_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_message_id);
        self.next_message_id = self.next_message_id.saturating_add(1);
        id
    }

    fn alloc_session_id(&mut self) -> StreamSessionId {
        let id = StreamSessionId::new(self.next_session_id);
        self.next_session_id = self.next_session_id.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use sprig_llm::{
        ProviderError, ProviderResult, ProviderWorker, SourceRef, StreamEvent,
        StreamEventPayload, make_event_stream,
    };

    use super::*;
    use crate::clipboard::{ClipboardError, ClipboardResult};
    use crate::message::StreamState;

    #[derive(Clone)]
    enum ScriptedStep {
        Fragment(Fragment),
        Fault(&'static str),
        /// Connection drop: the worker ends without any terminal event.
        Disconnect,
    }

    /// Deterministic provider double: replays scripted steps and records
    /// every request it receives.
    struct ScriptedProvider {
        steps: Vec<ScriptedStep>,
        fail_open: bool,
        requests: Arc<Mutex<Vec<StreamRequest>>>,
    }

    impl ScriptedProvider {
        fn new(steps: Vec<ScriptedStep>) -> Self {
            Self {
                steps,
                fail_open: false,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing_open() -> Self {
            Self {
                steps: Vec::new(),
                fail_open: true,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn requests(&self) -> Arc<Mutex<Vec<StreamRequest>>> {
            Arc::clone(&self.requests)
        }
    }

    impl ChatProvider for ScriptedProvider {
        fn stream_chat(&self, request: StreamRequest) -> ProviderResult<ProviderStreamHandle> {
            self.requests.lock().expect("request log").push(request.clone());

            if self.fail_open {
                return Err(ProviderError::MissingApiKey {
                    stage: "scripted-open",
                });
            }

            let session = request.session;
            let steps = self.steps.clone();
            let (event_tx, stream, cancel_rx) = make_event_stream(session);

            let worker: ProviderWorker = Box::pin(async move {
                // Hold the cancel receiver so the channel stays paired.
                let _cancel_rx = cancel_rx;
                let mut terminal_sent = false;

                for step in steps {
                    match step {
                        ScriptedStep::Fragment(fragment) => {
                            let _ = event_tx.send(StreamEvent {
                                session,
                                payload: StreamEventPayload::Fragment(fragment),
                            });
                        }
                        ScriptedStep::Fault(message) => {
                            terminal_sent = true;
                            let _ = event_tx.send(StreamEvent {
                                session,
                                payload: StreamEventPayload::Error(message.to_string()),
                            });
                            break;
                        }
                        ScriptedStep::Disconnect => {
                            terminal_sent = true;
                            break;
                        }
                    }
                }

                if !terminal_sent {
                    let _ = event_tx.send(StreamEvent {
                        session,
                        payload: StreamEventPayload::Done,
                    });
                }
            });

            Ok(ProviderStreamHandle { stream, worker })
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }

    fn controller_with(steps: Vec<ScriptedStep>) -> ChatController {
        init_tracing();
        ChatController::new(Arc::new(ScriptedProvider::new(steps)))
    }

    fn text(delta: &str) -> ScriptedStep {
        ScriptedStep::Fragment(Fragment::TextDelta(delta.to_string()))
    }

    fn source(title: &str, uri: &str) -> SourceRef {
        SourceRef {
            title: Some(title.to_string()),
            uri: uri.to_string(),
        }
    }

    #[tokio::test]
    async fn deltas_concatenate_in_arrival_order() {
        let mut controller = controller_with(vec![
            text("Delivery "),
            text("takes "),
            ScriptedStep::Fragment(Fragment::Both {
                delta: "2 days.".to_string(),
                citations: vec![source("FAQ", "https://x/faq")],
            }),
        ]);

        controller
            .send("How does delivery work?")
            .await
            .expect("send accepted");

        let messages = controller.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "How does delivery work?");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "Delivery takes 2 days.");
        assert_eq!(
            messages[1].sources,
            vec![Citation::new(Some("FAQ".to_string()), "https://x/faq")]
        );
        assert_eq!(messages[1].status, MessageStatus::Done);
        assert!(matches!(
            controller.conversation().stream_state,
            StreamState::Done(_)
        ));
    }

    #[tokio::test]
    async fn citations_are_sticky_until_replaced() {
        let mut controller = controller_with(vec![
            ScriptedStep::Fragment(Fragment::Citations(vec![
                source("A", "https://a"),
                source("B", "https://b"),
            ])),
            // An empty set must never erase previously populated sources.
            ScriptedStep::Fragment(Fragment::Citations(Vec::new())),
            text("answer"),
            ScriptedStep::Fragment(Fragment::Citations(vec![source("C", "https://c")])),
        ]);

        controller.send("sources?").await.expect("send accepted");

        let assistant = &controller.messages()[1];
        assert_eq!(
            assistant.sources,
            vec![Citation::new(Some("C".to_string()), "https://c")]
        );
    }

    #[tokio::test]
    async fn second_send_is_rejected_while_in_flight() {
        let mut controller = controller_with(vec![text("hi")]);

        let exchange = controller.try_send("first").expect("first send accepted");

        assert!(matches!(
            controller.try_send("second"),
            Err(SendRejection::StreamInFlight)
        ));
        // The rejected send created no messages.
        assert_eq!(controller.messages().len(), 2);

        controller.run_exchange(exchange).await;
        assert!(controller.try_send("third").is_ok());
    }

    #[tokio::test]
    async fn pending_input_clears_synchronously_on_acceptance() {
        let mut controller = controller_with(vec![text("ok")]);
        controller.set_pending_text("draft");
        controller.stage_image(StagedImage::from_bytes(b"img", "image/png", "blob:p"));

        let exchange = controller.try_send("look at this").expect("send accepted");

        // Before any fragment is processed the pending state is empty.
        assert!(controller.pending_input().is_empty());

        controller.run_exchange(exchange).await;
        assert!(controller.pending_input().is_empty());
    }

    #[tokio::test]
    async fn fault_discards_partial_content_for_the_apology() {
        let mut controller = controller_with(vec![
            text("Hello"),
            text(" wor"),
            ScriptedStep::Fault("connection reset"),
        ]);

        controller.send("hi").await.expect("send accepted");

        let assistant = &controller.messages()[1];
        assert_eq!(assistant.content, STREAM_ERROR_FALLBACK);
        assert_eq!(
            assistant.status,
            MessageStatus::Error("connection reset".to_string())
        );
        assert!(!controller.is_streaming());
    }

    #[tokio::test]
    async fn citations_before_a_fault_are_kept() {
        let mut controller = controller_with(vec![
            ScriptedStep::Fragment(Fragment::Both {
                delta: "partial".to_string(),
                citations: vec![source("FAQ", "https://x/faq")],
            }),
            ScriptedStep::Fault("quota exhausted"),
        ]);

        controller.send("hi").await.expect("send accepted");

        let assistant = &controller.messages()[1];
        assert_eq!(assistant.content, STREAM_ERROR_FALLBACK);
        assert_eq!(
            assistant.sources,
            vec![Citation::new(Some("FAQ".to_string()), "https://x/faq")]
        );
    }

    #[tokio::test]
    async fn clear_history_is_idempotent_on_empty() {
        let mut controller = controller_with(Vec::new());

        controller.clear_history();
        controller.clear_history();

        assert!(controller.messages().is_empty());
        assert_eq!(controller.conversation().stream_state, StreamState::Idle);
    }

    #[tokio::test]
    async fn clear_history_orphans_the_in_flight_stream() {
        let mut controller = controller_with(vec![text("late "), text("answer")]);

        let exchange = controller.try_send("hello").expect("send accepted");
        controller.clear_history();
        controller.run_exchange(exchange).await;

        // Late events fell out as stale; nothing re-populated the history.
        assert!(controller.messages().is_empty());
        assert_eq!(controller.conversation().stream_state, StreamState::Idle);
        assert!(!controller.is_streaming());
    }

    #[tokio::test]
    async fn image_only_send_reaches_the_provider_with_fallback_prompt() {
        let provider = ScriptedProvider::new(vec![text("A ripe avocado.")]);
        let requests = provider.requests();
        let mut controller = ChatController::new(Arc::new(provider));

        controller.stage_image(StagedImage::from_bytes(b"avocado", "image/png", "blob:a"));
        controller.send("").await.expect("image-only send accepted");

        let requests = requests.lock().expect("request log");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].effective_prompt(),
            sprig_llm::FALLBACK_IMAGE_PROMPT
        );
        let image = requests[0].image.as_ref().expect("image forwarded");
        assert_eq!(image.mime_type, "image/png");

        // The user turn still shows the attachment.
        assert_eq!(
            controller.messages()[0].image_url.as_deref(),
            Some("blob:a")
        );
    }

    #[tokio::test]
    async fn history_is_captured_before_the_new_turns() {
        let provider = ScriptedProvider::new(vec![text("Hello!")]);
        let requests = provider.requests();
        let mut controller = ChatController::new(Arc::new(provider));

        controller.send("Hi").await.expect("first send");
        controller.send("And substitutions?").await.expect("second send");

        let requests = requests.lock().expect("request log");
        assert!(requests[0].history.is_empty());

        let history: Vec<(TurnRole, &str)> = requests[1]
            .history
            .iter()
            .map(|turn| (turn.role, turn.text.as_str()))
            .collect();
        assert_eq!(
            history,
            vec![(TurnRole::User, "Hi"), (TurnRole::Model, "Hello!")]
        );
        assert_eq!(requests[1].system_instruction.as_deref(), Some(SYSTEM_PROMPT));
    }

    #[tokio::test]
    async fn stream_open_failure_finalizes_with_the_apology() {
        let mut controller = ChatController::new(Arc::new(ScriptedProvider::failing_open()));

        controller.send("hi").await.expect("send accepted");

        let assistant = &controller.messages()[1];
        assert_eq!(assistant.content, STREAM_ERROR_FALLBACK);
        assert!(matches!(assistant.status, MessageStatus::Error(_)));

        // The next send is a brand-new independent request.
        assert!(controller.try_send("again").is_ok());
    }

    #[tokio::test]
    async fn connection_drop_without_terminal_event_is_a_fault() {
        let mut controller =
            controller_with(vec![text("partial"), ScriptedStep::Disconnect]);

        controller.send("hi").await.expect("send accepted");

        let assistant = &controller.messages()[1];
        assert_eq!(assistant.content, STREAM_ERROR_FALLBACK);
        assert!(matches!(assistant.status, MessageStatus::Error(_)));
    }

    #[tokio::test]
    async fn empty_provider_output_is_a_valid_success() {
        let mut controller = controller_with(Vec::new());

        controller.send("hi").await.expect("send accepted");

        let assistant = &controller.messages()[1];
        assert_eq!(assistant.content, "");
        assert_eq!(assistant.status, MessageStatus::Done);
    }

    #[tokio::test]
    async fn empty_input_is_rejected_without_side_effects() {
        let mut controller = controller_with(Vec::new());

        assert!(matches!(
            controller.try_send("   "),
            Err(SendRejection::EmptyInput)
        ));
        assert!(controller.messages().is_empty());
    }

    #[tokio::test]
    async fn snapshots_reach_subscribers() {
        let mut controller = controller_with(vec![text("Delivery "), text("works.")]);
        let mut snapshots = controller.subscribe();

        controller.send("how?").await.expect("send accepted");

        assert!(snapshots.has_changed().expect("sender alive"));
        let latest = snapshots.borrow_and_update();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[1].content, "Delivery works.");
    }

    struct RecordingClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> ClipboardResult {
            if self.fail {
                return Err(ClipboardError::Unavailable {
                    source: arboard::Error::ClipboardNotSupported,
                });
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn copy_share_link_writes_through_the_boundary() {
        let controller = controller_with(Vec::new());
        let mut clipboard = RecordingClipboard {
            contents: None,
            fail: false,
        };

        assert!(controller.copy_share_link(&mut clipboard, "https://sprig.example/widget"));
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("https://sprig.example/widget")
        );
    }

    #[test]
    fn copy_share_link_failure_is_best_effort() {
        let controller = controller_with(Vec::new());
        let mut clipboard = RecordingClipboard {
            contents: None,
            fail: true,
        };

        assert!(!controller.copy_share_link(&mut clipboard, "https://sprig.example/widget"));
        assert!(clipboard.contents.is_none());
    }
}
