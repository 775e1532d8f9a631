use serde::{Deserialize, Serialize};

use crate::provider::{Fragment, SourceRef, StreamRequest, TurnRole};

/// Request body for `models/{model}:streamGenerateContent` and the unary
/// `generateContent` variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl GenerateContentRequest {
    /// Translates a boundary request into the provider's content list.
    ///
    /// History turns carry final text only; the inline image, when present,
    /// attaches to the current user turn and never to history.
    pub(crate) fn from_stream_request(request: &StreamRequest) -> Self {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|turn| Content {
                role: Some(turn_role_name(turn.role).to_string()),
                parts: vec![Part::text(turn.text.clone())],
            })
            .collect();

        let mut parts = vec![Part::text(request.effective_prompt())];
        if let Some(image) = &request.image {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                }),
            });
        }
        contents.push(Content {
            role: Some("user".to_string()),
            parts,
        });

        Self {
            contents,
            system_instruction: request.system_instruction.as_ref().map(|instruction| {
                Content {
                    role: None,
                    parts: vec![Part::text(instruction.clone())],
                }
            }),
            generation_config: None,
        }
    }
}

fn turn_role_name(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Model => "model",
    }
}

/// One decoded response payload, shared by stream chunks and unary calls.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WebSource {
    #[serde(default)]
    pub title: Option<String>,
    pub uri: String,
}

impl GenerateContentResponse {
    /// Projects one raw chunk into a validated fragment.
    ///
    /// Only web-backed grounding entries become citations, in provider
    /// order; everything else is discarded silently. Chunks with no text
    /// and no usable citations produce no fragment at all.
    pub(crate) fn into_fragment(self) -> Option<Fragment> {
        let candidate = self.candidates.into_iter().next()?;

        let mut delta = String::new();
        if let Some(content) = candidate.content {
            for part in content.parts {
                if let Some(text) = part.text {
                    delta.push_str(&text);
                }
            }
        }

        let citations: Vec<SourceRef> = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .map(|web| SourceRef {
                        title: web.title,
                        uri: web.uri,
                    })
                    .collect()
            })
            .unwrap_or_default();

        match (delta.is_empty(), citations.is_empty()) {
            (true, true) => None,
            (false, true) => Some(Fragment::TextDelta(delta)),
            (true, false) => Some(Fragment::Citations(citations)),
            (false, false) => Some(Fragment::Both { delta, citations }),
        }
    }

    /// First inline image part across the response, as (mime type, base64).
    pub(crate) fn first_inline_image(self) -> Option<(String, String)> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .find_map(|part| part.inline_data)
            .map(|inline| (inline.mime_type, inline.data))
    }
}

/// Incremental `text/event-stream` framing buffer.
///
/// The endpoint only ever emits `data:` lines and blank separators, so the
/// parser stays lightweight: buffer bytes, split on newlines, strip the
/// prefix. Multi-byte characters are safe because conversion happens per
/// complete line.
#[derive(Debug, Default)]
pub(crate) struct SseLineBuffer {
    buffer: Vec<u8>,
}

impl SseLineBuffer {
    /// Feeds raw bytes and returns every complete `data:` payload.
    pub(crate) fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);

        let mut payloads = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\r', '\n']);

            if let Some(data) = line.strip_prefix("data:") {
                let data = data.trim_start();
                if !data.is_empty() {
                    payloads.push(data.to_string());
                }
            }
        }
        payloads
    }
}
