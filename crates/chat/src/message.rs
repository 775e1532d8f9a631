use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Creates a typed message identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

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

/// Chat speaker role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

/// Lifecycle status for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStatus {
    Streaming(StreamSessionId),
    Done,
    Error(String),
}

/// One web citation attached to an assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub title: Option<String>,
    pub uri: String,
}

impl Citation {
    pub fn new(title: Option<String>, uri: impl Into<String>) -> Self {
        Self {
            title,
            uri: uri.into(),
        }
    }

    /// Label shown for this citation.
    ///
    /// Falls back to the URI host when the provider sent no usable title.
    /// Stored data keeps the missing title untouched; the fallback applies
    /// at render time only.
    pub fn display_title(&self) -> &str {
        match &self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => uri_host(&self.uri).unwrap_or(&self.uri),
        }
    }
}

// Keep host extraction lightweight: strip the scheme, cut at the first
// path/query/fragment separator, drop userinfo and port.
fn uri_host(uri: &str) -> Option<&str> {
    let rest = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = host.rsplit_once('@').map(|(_, host)| host).unwrap_or(host);
    let host = host.split(':').next().unwrap_or(host);
    if host.is_empty() { None } else { Some(host) }
}

/// One conversation turn.
///
/// User content is final at creation; assistant content accumulates while
/// its status is `Streaming` and freezes on any terminal transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at_unix_seconds: u64,
    pub image_url: Option<String>,
    pub sources: Vec<Citation>,
    pub status: MessageStatus,
}

impl Message {
    /// Creates a message with explicit status.
    pub fn new(
        id: MessageId,
        role: Role,
        content: impl Into<String>,
        status: MessageStatus,
    ) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            created_at_unix_seconds: now_unix_seconds(),
            image_url: None,
            sources: Vec::new(),
            status,
        }
    }

    /// Creates a terminal user message, optionally carrying an attached image.
    pub fn user_done(id: MessageId, content: impl Into<String>, image_url: Option<String>) -> Self {
        let mut message = Self::new(id, Role::User, content, MessageStatus::Done);
        message.image_url = image_url;
        message
    }

    /// Creates an empty assistant placeholder for an opening stream.
    pub fn assistant_streaming(id: MessageId, session: StreamSessionId) -> Self {
        Self::new(
            id,
            Role::Assistant,
            String::new(),
            MessageStatus::Streaming(session),
        )
    }

    /// True once the message can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, MessageStatus::Streaming(_))
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// The ordered, append-only conversation log plus its stream lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversation {
    pub messages: Vec<Message>,
    pub stream_state: StreamState,
}

impl Conversation {
    /// Creates an empty conversation in idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a deterministic stream transition.
    pub fn apply_stream_transition(
        &mut self,
        transition: StreamTransition,
    ) -> StreamTransitionResult {
        let next_state = self.stream_state.apply(transition)?;
        self.stream_state = next_state.clone();
        Ok(next_state)
    }

    /// Resets to the empty idle conversation.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.stream_state = StreamState::Idle;
    }
}

/// Stream lifecycle boundary for the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StreamState {
    #[default]
    Idle,
    Streaming(StreamSessionId),
    Done(StreamSessionId),
    Error {
        session: StreamSessionId,
        message: String,
    },
}

/// State transition input for the stream lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamTransition {
    Start(StreamSessionId),
    Complete(StreamSessionId),
    Fail {
        session: StreamSessionId,
        message: String,
    },
    ResetToIdle,
}

/// Rejection reason for illegal stream transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamTransitionRejection {
    AlreadyStreaming {
        active: StreamSessionId,
        attempted: StreamSessionId,
    },
    NoActiveStream,
    SessionMismatch {
        active: StreamSessionId,
        attempted: StreamSessionId,
    },
}

/// Result type for stream transition application.
pub type StreamTransitionResult = Result<StreamState, StreamTransitionRejection>;

impl StreamState {
    /// Returns the active session if and only if a stream is running.
    pub fn active_session(&self) -> Option<StreamSessionId> {
        match self {
            Self::Streaming(session) => Some(*session),
            Self::Idle | Self::Done(_) | Self::Error { .. } => None,
        }
    }

    /// Returns true when incoming stream data matches the active session.
    pub fn accepts_stream_event(&self, session: StreamSessionId) -> bool {
        matches!(self, Self::Streaming(active) if *active == session)
    }

    /// Applies one transition deterministically.
    ///
    /// Non-streaming states may start a new session directly. Any terminal
    /// transition must name the currently active session exactly; there is
    /// no path back out of a terminal state except a new `Start`.
    pub fn apply(&self, transition: StreamTransition) -> StreamTransitionResult {
        match transition {
            StreamTransition::Start(session) => self.apply_start(session),
            StreamTransition::Complete(session) => self.apply_complete(session),
            StreamTransition::Fail { session, message } => self.apply_fail(session, message),
            StreamTransition::ResetToIdle => Ok(Self::Idle),
        }
    }

    fn apply_start(&self, session: StreamSessionId) -> StreamTransitionResult {
        match self {
            Self::Streaming(active) if *active != session => {
                Err(StreamTransitionRejection::AlreadyStreaming {
                    active: *active,
                    attempted: session,
                })
            }
            Self::Streaming(_) => Ok(self.clone()),
            Self::Idle | Self::Done(_) | Self::Error { .. } => Ok(Self::Streaming(session)),
        }
    }

    fn apply_complete(&self, session: StreamSessionId) -> StreamTransitionResult {
        match self {
            Self::Streaming(active) if *active == session => Ok(Self::Done(session)),
            Self::Streaming(active) => Err(StreamTransitionRejection::SessionMismatch {
                active: *active,
                attempted: session,
            }),
            Self::Idle | Self::Done(_) | Self::Error { .. } => {
                Err(StreamTransitionRejection::NoActiveStream)
            }
        }
    }

    fn apply_fail(&self, session: StreamSessionId, message: String) -> StreamTransitionResult {
        match self {
            Self::Streaming(active) if *active == session => Ok(Self::Error { session, message }),
            Self::Streaming(active) => Err(StreamTransitionRejection::SessionMismatch {
                active: *active,
                attempted: session,
            }),
            Self::Idle | Self::Done(_) | Self::Error { .. } => {
                Err(StreamTransitionRejection::NoActiveStream)
            }
        }
    }
}
