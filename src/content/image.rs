//! Base64 image payloads for inline `data:` URIs.

use base64::Engine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub base64: String,
}

impl EncodedImage {
    pub fn encode(bytes: &[u8], extension: &str) -> Self {
        Self {
            mime: mime_for_extension(extension),
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg() {
        let image = EncodedImage::encode(b"hello", "jpg");
        assert_eq!(image.mime, "image/jpeg");
        assert_eq!(image.base64, "aGVsbG8=");
        assert_eq!(image.data_uri(), "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(EncodedImage::encode(b"", "PNG").mime, "image/png");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(EncodedImage::encode(b"", "bmpx").mime, "application/octet-stream");
    }
}
