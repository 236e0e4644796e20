use base64::Engine;
use bytes::Bytes;

/// One captured video frame: encoded image bytes plus native resolution.
///
/// Detection coordinates are frame-relative, so consumers that draw over the
/// frame must size their surface to `width` x `height`, never to whatever
/// the frame happens to be displayed at.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    bytes: Bytes,
}

impl Frame {
    pub fn new(width: u32, height: u32, bytes: impl Into<Bytes>) -> Self {
        Self {
            width,
            height,
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// A frame with no image data cannot be sent anywhere.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Base64 payload for the wire. The server accepts raw base64 as well as
    /// data URLs, so no prefix is attached.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new(0, 0, Vec::new());
        assert!(frame.is_empty());
        assert_eq!(frame.to_base64(), "");
    }

    #[test]
    fn test_base64_round_trip() {
        let frame = Frame::new(2, 2, vec![0xde, 0xad, 0xbe, 0xef]);
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(frame.to_base64())
            .unwrap();
        assert_eq!(decoded, frame.bytes().as_ref());
    }
}
