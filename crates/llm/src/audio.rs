//! Byte-level helpers for the live-voice collaborator.
//!
//! The core text/image flow never touches these; they exist so a voice
//! session can move PCM payloads across the provider boundary without any
//! session plumbing living here.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use snafu::{ResultExt, Snafu, ensure};

#[derive(Debug, Snafu)]
pub enum AudioError {
    #[snafu(display("failed to decode base64 audio payload: {source}"))]
    DecodePayload { source: base64::DecodeError },
    #[snafu(display("PCM16 payload of {len} bytes is not frame-aligned for {channels} channels"))]
    MisalignedFrames { len: usize, channels: usize },
}

/// Encodes a raw audio byte payload for transport.
pub fn encode_audio(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a transport payload back into raw audio bytes.
pub fn decode_audio(payload: &str) -> Result<Vec<u8>, AudioError> {
    STANDARD.decode(payload).context(DecodePayloadSnafu)
}

/// Converts interleaved little-endian PCM16 into per-channel f32 samples
/// in [-1.0, 1.0).
pub fn pcm16_to_f32_channels(data: &[u8], channels: usize) -> Result<Vec<Vec<f32>>, AudioError> {
    ensure!(
        channels > 0 && data.len() % (2 * channels) == 0,
        MisalignedFramesSnafu {
            len: data.len(),
            channels,
        }
    );

    let frames = data.len() / (2 * channels);
    let mut output = vec![Vec::with_capacity(frames); channels];

    for (index, pair) in data.chunks_exact(2).enumerate() {
        let sample = i16::from_le_bytes([pair[0], pair[1]]);
        output[index % channels].push(f32::from(sample) / 32_768.0);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips() {
        let payload = [0u8, 1, 2, 254, 255];

        let encoded = encode_audio(&payload);
        assert_eq!(decode_audio(&encoded).expect("decode"), payload);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        assert!(matches!(
            decode_audio("not base64!"),
            Err(AudioError::DecodePayload { .. })
        ));
    }

    #[test]
    fn pcm16_deinterleaves_stereo_frames() {
        // Two frames of stereo: (0, i16::MAX), (i16::MIN, 16384).
        let mut data = Vec::new();
        for sample in [0i16, i16::MAX, i16::MIN, 16_384] {
            data.extend_from_slice(&sample.to_le_bytes());
        }

        let output = pcm16_to_f32_channels(&data, 2).expect("aligned payload");

        assert_eq!(output.len(), 2);
        assert_eq!(output[0], vec![0.0, -1.0]);
        assert_eq!(output[1], vec![32_767.0 / 32_768.0, 0.5]);
    }

    #[test]
    fn pcm16_rejects_misaligned_payloads() {
        assert!(matches!(
            pcm16_to_f32_channels(&[0, 1, 2], 2),
            Err(AudioError::MisalignedFrames { .. })
        ));
        assert!(matches!(
            pcm16_to_f32_channels(&[0, 1], 0),
            Err(AudioError::MisalignedFrames { .. })
        ));
    }
}
