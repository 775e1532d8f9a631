pub mod clipboard;
pub mod controller;
pub mod input;
pub mod message;
pub mod prompts;

pub use clipboard::{Clipboard, ClipboardError, ClipboardResult, SystemClipboard};
pub use controller::{ChatController, Exchange, SendRejection};
pub use input::{PendingInput, StagedImage};
pub use message::{
    Citation, Conversation, Message, MessageId, MessageStatus, Role, StreamSessionId, StreamState,
    StreamTransition, StreamTransitionRejection, StreamTransitionResult,
};
pub use prompts::{STREAM_ERROR_FALLBACK, SUGGESTIONS, SYSTEM_PROMPT, Suggestion, WELCOME_MESSAGE};
