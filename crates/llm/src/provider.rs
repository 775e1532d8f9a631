use std::future::Future;
use std::pin::Pin;

use snafu::Snafu;
use tokio::sync::{mpsc, oneshot};

/// Identifier for one streaming exchange session.
///
/// This must change on every accepted send so stale events can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamSessionId(pub u64);

impl StreamSessionId {
    /// Creates a typed stream session identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Provider-side speaker vocabulary; assistant turns travel as `model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnRole {
    User,
    Model,
}

/// One prior conversation turn, carrying its final text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: TurnRole,
    pub text: String,
}

impl HistoryTurn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Transport-ready inline image, attached to the current turn only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload exactly as the wire expects it.
    pub data: String,
}

/// Web citation record projected out of provider grounding metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub title: Option<String>,
    pub uri: String,
}

/// One incremental piece of a streamed response, validated at the boundary.
///
/// Raw chunks that carry neither text nor web-backed citations never become
/// fragments, so consumers only ever fold meaningful payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    TextDelta(String),
    Citations(Vec<SourceRef>),
    Both {
        delta: String,
        citations: Vec<SourceRef>,
    },
}

impl Fragment {
    /// Text delta carried by this fragment, empty when absent.
    pub fn delta(&self) -> &str {
        match self {
            Self::TextDelta(delta) | Self::Both { delta, .. } => delta,
            Self::Citations(_) => "",
        }
    }

    /// Citations carried by this fragment, empty when absent.
    pub fn citations(&self) -> &[SourceRef] {
        match self {
            Self::Citations(citations) | Self::Both { citations, .. } => citations,
            Self::TextDelta(_) => &[],
        }
    }
}

/// Prompt substituted when the user sends an image with no text; the
/// provider rejects turns with empty text parts.
pub const FALLBACK_IMAGE_PROMPT: &str = "Help me understand this image.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRequest {
    pub session: StreamSessionId,
    pub prompt_text: String,
    pub history: Vec<HistoryTurn>,
    pub image: Option<InlineImage>,
    pub system_instruction: Option<String>,
}

impl StreamRequest {
    pub fn new(
        session: StreamSessionId,
        prompt_text: impl Into<String>,
        history: Vec<HistoryTurn>,
    ) -> Self {
        Self {
            session,
            prompt_text: prompt_text.into(),
            history,
            image: None,
            system_instruction: None,
        }
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// The prompt text adapters must actually send.
    ///
    /// An image-only send falls back to [`FALLBACK_IMAGE_PROMPT`]; a
    /// text-less, image-less request stays empty and is rejected before any
    /// network I/O happens.
    pub fn effective_prompt(&self) -> &str {
        if self.prompt_text.trim().is_empty() && self.image.is_some() {
            FALLBACK_IMAGE_PROMPT
        } else {
            &self.prompt_text
        }
    }
}

/// Provider payload mapped into boundary language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEventPayload {
    Fragment(Fragment),
    Done,
    Error(String),
}

/// One event emitted by a provider stream worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEvent {
    pub session: StreamSessionId,
    pub payload: StreamEventPayload,
}

pub type ProviderWorker = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ProviderError {
    #[snafu(display("missing API key for the generative-language provider"))]
    MissingApiKey { stage: &'static str },
    #[snafu(display("stream request for {session:?} has no prompt text and no image"))]
    EmptyPrompt {
        stage: &'static str,
        session: StreamSessionId,
    },
    #[snafu(display("http request failed on `{stage}`: {source}"))]
    HttpSend {
        stage: &'static str,
        source: reqwest::Error,
    },
    #[snafu(display("provider endpoint returned status {status}: {body}"))]
    HttpStatus {
        stage: &'static str,
        status: u16,
        body: String,
    },
    #[snafu(display("provider stream read failed on `{stage}`: {source}"))]
    StreamRead {
        stage: &'static str,
        source: reqwest::Error,
    },
    #[snafu(display("failed to decode provider payload: {source}"))]
    ChunkDecode {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("failed to decode provider response body: {source}"))]
    ResponseDecode {
        stage: &'static str,
        source: reqwest::Error,
    },
    #[snafu(display("provider response carried no inline image payload"))]
    MissingImagePayload { stage: &'static str },
}

/// Consumer side of one provider stream.
///
/// Dropping the stream signals cancellation to the worker so provider I/O
/// stops promptly even when the consumer loses interest mid-stream.
pub struct ProviderEventStream {
    session: StreamSessionId,
    events: mpsc::UnboundedReceiver<StreamEvent>,
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl ProviderEventStream {
    pub(crate) fn new(
        session: StreamSessionId,
        events: mpsc::UnboundedReceiver<StreamEvent>,
        cancel_tx: oneshot::Sender<()>,
    ) -> Self {
        Self {
            session,
            events,
            cancel_tx: Some(cancel_tx),
        }
    }

    pub fn session(&self) -> StreamSessionId {
        self.session
    }

    pub async fn recv(&mut self) -> Option<StreamEvent> {
        self.events.recv().await
    }

    pub fn try_recv(&mut self) -> Option<StreamEvent> {
        self.events.try_recv().ok()
    }

    pub fn cancel(&mut self) -> bool {
        self.cancel_tx
            .take()
            .map(|tx| tx.send(()).is_ok())
            .unwrap_or(false)
    }
}

impl Drop for ProviderEventStream {
    fn drop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
    }
}

/// A live stream plus the worker future that feeds it.
///
/// The caller decides where the worker runs; the stream side stays runtime
/// agnostic.
pub struct ProviderStreamHandle {
    pub stream: ProviderEventStream,
    pub worker: ProviderWorker,
}

impl std::fmt::Debug for ProviderStreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderStreamHandle")
            .field("stream", &self.stream.session())
            .field("worker", &"<provider worker future>")
            .finish()
    }
}

/// Boundary every chat backend implements; a test harness substitutes this
/// with a deterministic scripted sequence.
pub trait ChatProvider: Send + Sync {
    fn stream_chat(&self, request: StreamRequest) -> ProviderResult<ProviderStreamHandle>;
}

/// Builds the sender/stream/cancel trio backing one provider stream.
///
/// Custom providers and deterministic test fakes feed events through the
/// returned sender; the stream side is what consumers pump. The receiver
/// fires when the consumer cancels or drops the stream.
pub fn make_event_stream(
    session: StreamSessionId,
) -> (
    mpsc::UnboundedSender<StreamEvent>,
    ProviderEventStream,
    oneshot::Receiver<()>,
) {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (cancel_tx, cancel_rx) = oneshot::channel();
    (
        event_tx,
        ProviderEventStream::new(session, event_rx, cancel_tx),
        cancel_rx,
    )
}
