use std::sync::Arc;

pub mod audio;
mod gemini;
mod provider;
mod wire;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_IMAGE_MODEL, GeminiClient, GeminiConfig,
};
pub use provider::{
    ChatProvider, FALLBACK_IMAGE_PROMPT, Fragment, HistoryTurn, InlineImage, ProviderError,
    ProviderEventStream, ProviderResult, ProviderStreamHandle, ProviderWorker, SourceRef,
    StreamEvent, StreamEventPayload, StreamRequest, StreamSessionId, TurnRole, make_event_stream,
};

/// Builds the default provider client from explicit configuration.
pub fn create_client(config: GeminiConfig) -> ProviderResult<Arc<dyn ChatProvider>> {
    Ok(Arc::new(GeminiClient::new(config)?))
}
