use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::core::errors::ProcessingError;
use crate::core::models::{DecodedBitmap, EncodedImage, UploadRequest};
use crate::global_constants::{JPEG_QUALITY, LOG_TAG_UPLOAD};

/// JPEG re-encode at full quality, then standard padded base64 with no line breaks.
pub fn encode(bitmap: &DecodedBitmap) -> Result<EncodedImage, ProcessingError> {
    let jpeg_bytes = encode_jpeg(bitmap)?;
    let encoded_image = EncodedImage::from_base64(
        base64::engine::general_purpose::STANDARD.encode(&jpeg_bytes),
    );

    log::debug!(
        "{} encoded {}x{} bitmap into {} jpeg bytes ({} base64 chars)",
        LOG_TAG_UPLOAD,
        bitmap.width,
        bitmap.height,
        jpeg_bytes.len(),
        encoded_image.as_str().len()
    );

    Ok(encoded_image)
}

pub fn build_request_body(encoded_image: EncodedImage) -> UploadRequest {
    UploadRequest::wrapping(encoded_image)
}

fn encode_jpeg(bitmap: &DecodedBitmap) -> Result<Vec<u8>, ProcessingError> {
    let rgb_image = DynamicImage::ImageRgb8(bitmap.pixels().to_rgb8());

    let mut jpeg_bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, JPEG_QUALITY);
    rgb_image
        .write_with_encoder(encoder)
        .map_err(|e| ProcessingError::EncodeFailed(e.to_string()))?;

    Ok(jpeg_bytes)
}
