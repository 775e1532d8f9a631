use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Image staged for the next send, in transport-ready form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    /// Display-only reference the presentation layer renders.
    pub display_url: String,
    /// Base64 payload for the provider's inline-data part.
    pub data: String,
    pub mime_type: String,
}

impl StagedImage {
    /// Encodes a raw image payload into its transport-ready form.
    ///
    /// The core assumes the payload is a valid image; filtering unsupported
    /// files is the presentation layer's concern.
    pub fn from_bytes(
        bytes: &[u8],
        mime_type: impl Into<String>,
        display_url: impl Into<String>,
    ) -> Self {
        Self {
            display_url: display_url.into(),
            data: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }
}

/// Transient input owned by the controller until a send is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingInput {
    pub text: String,
    pub staged_image: Option<StagedImage>,
}

impl PendingInput {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Stages an image for the next send, replacing any prior one.
    pub fn stage_image(&mut self, image: StagedImage) {
        self.staged_image = Some(image);
    }

    pub fn clear_staged_image(&mut self) {
        self.staged_image = None;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.staged_image = None;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.staged_image.is_none()
    }
}
