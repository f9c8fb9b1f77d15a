use serde::Serialize;

/// Base64 text of a JPEG re-encode. Only `upload_client::encode` creates one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub(crate) fn from_base64(base64_text: String) -> Self {
        Self(base64_text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UploadRequest {
    image: String,
}

impl UploadRequest {
    pub fn wrapping(encoded_image: EncodedImage) -> Self {
        Self {
            image: encoded_image.0,
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
