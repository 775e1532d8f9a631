use futures::StreamExt;
use snafu::{ResultExt, ensure};
use tokio::sync::{mpsc, oneshot};

use crate::provider::{
    ChatProvider, EmptyPromptSnafu, HttpSendSnafu, HttpStatusSnafu, MissingApiKeySnafu,
    ProviderError, ProviderResult, ProviderStreamHandle, ProviderWorker, ResponseDecodeSnafu,
    StreamEvent, StreamEventPayload, StreamRequest, StreamSessionId, make_event_stream,
};
use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    SseLineBuffer,
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// Generation tuning for the support persona.
const DEFAULT_TEMPERATURE: f64 = 0.4;
const DEFAULT_TOP_P: f64 = 0.95;
const DEFAULT_TOP_K: u32 = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bootstraps provider credentials from the environment.
    ///
    /// `GEMINI_API_KEY` wins over the legacy `API_KEY` name; model and base
    /// URL overrides are optional and empty values are ignored.
    pub fn from_env() -> Option<Self> {
        let api_key = ["GEMINI_API_KEY", "API_KEY"]
            .into_iter()
            .find_map(non_empty_env)?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_empty_env("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = non_empty_env("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        Some(config)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Streaming client for the generative-language REST API.
///
/// Holds no conversational state; every call opens a fresh remote stream
/// over the shared HTTP connection pool.
#[derive(Debug)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> ProviderResult<Self> {
        ensure!(
            !config.api_key.trim().is_empty(),
            MissingApiKeySnafu {
                stage: "gemini-client-new",
            }
        );

        Ok(Self {
            config,
            http: reqwest::Client::new(),
        })
    }

    pub fn from_env() -> ProviderResult<Self> {
        let config = GeminiConfig::from_env().ok_or(ProviderError::MissingApiKey {
            stage: "gemini-client-from-env",
        })?;
        Self::new(config)
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn stream_url(config: &GeminiConfig) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            config.base_url.trim_end_matches('/'),
            config.model
        )
    }

    fn generate_url(config: &GeminiConfig, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn open_stream(
        http: &reqwest::Client,
        config: &GeminiConfig,
        request: &StreamRequest,
    ) -> ProviderResult<reqwest::Response> {
        let mut body = GenerateContentRequest::from_stream_request(request);
        body.generation_config = Some(GenerationConfig {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
        });

        let response = http
            .post(Self::stream_url(config))
            .header("x-goog-api-key", &config.api_key)
            .json(&body)
            .send()
            .await
            .context(HttpSendSnafu {
                stage: "open-stream",
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return HttpStatusSnafu {
                stage: "open-stream-status",
                status: status.as_u16(),
                body,
            }
            .fail();
        }

        Ok(response)
    }

    fn emit_error_event(
        event_tx: &mpsc::UnboundedSender<StreamEvent>,
        session: StreamSessionId,
        error: ProviderError,
    ) {
        let _ = event_tx.send(StreamEvent {
            session,
            payload: StreamEventPayload::Error(error.to_string()),
        });
    }

    async fn run_stream_worker(
        http: reqwest::Client,
        config: GeminiConfig,
        request: StreamRequest,
        event_tx: mpsc::UnboundedSender<StreamEvent>,
        mut cancel_rx: oneshot::Receiver<()>,
    ) {
        let session = request.session;
        let response = match Self::open_stream(&http, &config, &request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(
                    session_id = session.0,
                    model_id = %config.model,
                    error = %error,
                    "failed to open provider stream"
                );
                Self::emit_error_event(&event_tx, session, error);
                return;
            }
        };

        let mut body = response.bytes_stream();
        let mut lines = SseLineBuffer::default();
        let mut cancelled = false;
        let mut stream_failed = false;

        'read: loop {
            tokio::select! {
                _ = &mut cancel_rx => {
                    cancelled = true;
                    // Dropping the response body closes the remote stream.
                    tracing::debug!(session_id = session.0, "provider stream cancelled");
                    break;
                }
                next_chunk = body.next() => {
                    match next_chunk {
                        Some(Ok(bytes)) => {
                            for payload in lines.push(&bytes) {
                                let chunk: GenerateContentResponse =
                                    match serde_json::from_str(&payload) {
                                        Ok(chunk) => chunk,
                                        Err(source) => {
                                            stream_failed = true;
                                            tracing::warn!(
                                                session_id = session.0,
                                                error = %source,
                                                "provider emitted an undecodable chunk"
                                            );
                                            let error = ProviderError::ChunkDecode {
                                                stage: "stream-chunk-decode",
                                                source,
                                            };
                                            Self::emit_error_event(&event_tx, session, error);
                                            break 'read;
                                        }
                                    };

                                if let Some(fragment) = chunk.into_fragment()
                                    && event_tx
                                        .send(StreamEvent {
                                            session,
                                            payload: StreamEventPayload::Fragment(fragment),
                                        })
                                        .is_err()
                                {
                                    return;
                                }
                            }
                        }
                        Some(Err(source)) => {
                            stream_failed = true;
                            tracing::warn!(
                                session_id = session.0,
                                error = %source,
                                "provider stream read failed"
                            );
                            let error = ProviderError::StreamRead {
                                stage: "stream-read",
                                source,
                            };
                            Self::emit_error_event(&event_tx, session, error);
                            break;
                        }
                        None => break,
                    }
                }
            }
        }

        if !cancelled && !stream_failed {
            let _ = event_tx.send(StreamEvent {
                session,
                payload: StreamEventPayload::Done,
            });
        }
    }

    /// Generates a single product-style illustration for the given prompt.
    ///
    /// Unary call against the image model; the first inline image part comes
    /// back as a `data:` URL ready to display.
    pub async fn generate_image(&self, prompt: &str) -> ProviderResult<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(format!(
                    "A high quality professional grocery or food photography image: {prompt}"
                ))],
            }],
            system_instruction: None,
            generation_config: None,
        };

        let response = self
            .http
            .post(Self::generate_url(&self.config, DEFAULT_IMAGE_MODEL))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .context(HttpSendSnafu {
                stage: "generate-image",
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return HttpStatusSnafu {
                stage: "generate-image-status",
                status: status.as_u16(),
                body,
            }
            .fail();
        }

        let decoded: GenerateContentResponse =
            response.json().await.context(ResponseDecodeSnafu {
                stage: "generate-image-decode",
            })?;

        decoded
            .first_inline_image()
            .map(|(mime_type, data)| format!("data:{mime_type};base64,{data}"))
            .ok_or(ProviderError::MissingImagePayload {
                stage: "generate-image-parts",
            })
    }
}

impl ChatProvider for GeminiClient {
    fn stream_chat(&self, request: StreamRequest) -> ProviderResult<ProviderStreamHandle> {
        ensure!(
            !request.effective_prompt().trim().is_empty(),
            EmptyPromptSnafu {
                stage: "stream-chat",
                session: request.session,
            }
        );

        let (event_tx, stream, cancel_rx) = make_event_stream(request.session);
        let worker: ProviderWorker = Box::pin(Self::run_stream_worker(
            self.http.clone(),
            self.config.clone(),
            request,
            event_tx,
            cancel_rx,
        ));

        Ok(ProviderStreamHandle { stream, worker })
    }
}
