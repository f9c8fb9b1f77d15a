use std::sync::Arc;

use crate::core::errors::{CaptureError, CaptureFailure, ProcessingError};
use crate::core::interfaces::ports::{
    CameraFacility, CameraOutcome, Capability, MediaStorage, PermissionGate,
};
use crate::core::models::{CapturedImage, DecodedBitmap};
use crate::global_constants::{CAPTURE_MIME_TYPE, LOG_TAG_CAPTURE};

pub struct ImageCapture {
    permission_gate: Arc<dyn PermissionGate>,
    camera: Arc<dyn CameraFacility>,
    media_storage: Arc<dyn MediaStorage>,
}

impl ImageCapture {
    pub fn build(
        permission_gate: Arc<dyn PermissionGate>,
        camera: Arc<dyn CameraFacility>,
        media_storage: Arc<dyn MediaStorage>,
    ) -> Self {
        Self {
            permission_gate,
            camera,
            media_storage,
        }
    }

    pub async fn request_capture(&self) -> Result<CapturedImage, CaptureError> {
        if !self.ensure_camera_permission().await {
            log::warn!("{} camera permission denied", LOG_TAG_CAPTURE);
            return Err(CaptureError::PermissionDenied);
        }

        let display_name = CapturedImage::timestamped_name(chrono::Utc::now().timestamp_millis());
        let destination = self
            .media_storage
            .create_entry(&display_name, CAPTURE_MIME_TYPE)
            .await
            .map_err(|e| {
                log::error!("{} failed to allocate storage: {:#}", LOG_TAG_CAPTURE, e);
                CaptureError::CaptureFailed(CaptureFailure::StorageUnavailable(format!("{:#}", e)))
            })?;

        log::info!("{} handing {} to the camera", LOG_TAG_CAPTURE, destination);

        match self.camera.capture_into(&destination).await {
            Ok(CameraOutcome::Captured) => {
                log::info!("{} captured {}", LOG_TAG_CAPTURE, destination.display_name);
                Ok(destination)
            }
            Ok(CameraOutcome::Cancelled) => {
                log::info!("{} capture cancelled", LOG_TAG_CAPTURE);
                self.discard_unused_entry(&destination).await;
                Err(CaptureError::CaptureFailed(CaptureFailure::CameraAborted(
                    "capture was cancelled".to_string(),
                )))
            }
            Err(e) => {
                log::error!("{} camera failed: {:#}", LOG_TAG_CAPTURE, e);
                self.discard_unused_entry(&destination).await;
                Err(CaptureError::CaptureFailed(CaptureFailure::CameraAborted(
                    format!("{:#}", e),
                )))
            }
        }
    }

    pub async fn decode(&self, image: &CapturedImage) -> Result<DecodedBitmap, ProcessingError> {
        let raw_bytes = self
            .media_storage
            .read_entry(image)
            .await
            .map_err(|e| ProcessingError::Unreadable(e.to_string()))?;

        log::debug!(
            "{} decoding {} bytes from {}",
            LOG_TAG_CAPTURE,
            raw_bytes.len(),
            image.display_name
        );

        tokio::task::spawn_blocking(move || decode_image_bytes(&raw_bytes))
            .await
            .map_err(|e| ProcessingError::Unreadable(format!("decoder task failed: {}", e)))?
    }

    async fn ensure_camera_permission(&self) -> bool {
        if self.permission_gate.check_granted(Capability::Camera) {
            return true;
        }

        log::debug!("{} camera permission not yet granted, prompting", LOG_TAG_CAPTURE);
        self.permission_gate.request_grant(Capability::Camera).await
    }

    async fn discard_unused_entry(&self, image: &CapturedImage) {
        if let Err(e) = self.media_storage.discard_entry(image).await {
            log::warn!(
                "{} failed to discard unused entry {}: {}",
                LOG_TAG_CAPTURE,
                image.display_name,
                e
            );
        }
    }
}

pub fn decode_image_bytes(raw_bytes: &[u8]) -> Result<DecodedBitmap, ProcessingError> {
    if raw_bytes.is_empty() {
        return Err(ProcessingError::EmptyStream);
    }

    let image = image::load_from_memory(raw_bytes)
        .map_err(|e| ProcessingError::InvalidImage(e.to_string()))?;

    Ok(DecodedBitmap::from_dynamic_image(image))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    pub struct MockPermissionGate {
        granted: AtomicBool,
        answer: bool,
        pub prompt_count: AtomicUsize,
    }

    impl MockPermissionGate {
        pub fn already_granted() -> Self {
            Self {
                granted: AtomicBool::new(true),
                answer: true,
                prompt_count: AtomicUsize::new(0),
            }
        }

        pub fn answering(answer: bool) -> Self {
            Self {
                granted: AtomicBool::new(false),
                answer,
                prompt_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PermissionGate for MockPermissionGate {
        fn check_granted(&self, _capability: Capability) -> bool {
            self.granted.load(Ordering::SeqCst)
        }

        async fn request_grant(&self, _capability: Capability) -> bool {
            self.prompt_count.fetch_add(1, Ordering::SeqCst);
            self.granted.store(self.answer, Ordering::SeqCst);
            self.answer
        }
    }

    pub struct MockMediaStorage {
        pub entries: Mutex<HashMap<PathBuf, Vec<u8>>>,
        fail_allocation: bool,
    }

    impl MockMediaStorage {
        pub fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail_allocation: false,
            }
        }

        pub fn failing_allocation() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail_allocation: true,
            }
        }

        pub fn entry_count(&self) -> usize {
            self.entries.lock().unwrap().len()
        }

        pub fn write(&self, image: &CapturedImage, bytes: Vec<u8>) {
            self.entries
                .lock()
                .unwrap()
                .insert(image.location().to_path_buf(), bytes);
        }
    }

    #[async_trait]
    impl MediaStorage for MockMediaStorage {
        async fn create_entry(&self, display_name: &str, mime_type: &str) -> Result<CapturedImage> {
            if self.fail_allocation {
                anyhow::bail!("storage unavailable");
            }

            let image = CapturedImage::at_location(
                display_name,
                mime_type,
                PathBuf::from(format!("/mock/{}.jpg", display_name)),
            );
            self.write(&image, Vec::new());
            Ok(image)
        }

        async fn read_entry(&self, image: &CapturedImage) -> Result<Vec<u8>> {
            self.entries
                .lock()
                .unwrap()
                .get(image.location())
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no entry at {:?}", image.location()))
        }

        async fn discard_entry(&self, image: &CapturedImage) -> Result<()> {
            self.entries.lock().unwrap().remove(image.location());
            Ok(())
        }
    }

    pub struct MockCamera {
        media_storage: Arc<MockMediaStorage>,
        photo_bytes: Option<Vec<u8>>,
        pub capture_count: AtomicUsize,
    }

    impl MockCamera {
        pub fn producing(media_storage: Arc<MockMediaStorage>, photo_bytes: Vec<u8>) -> Self {
            Self {
                media_storage,
                photo_bytes: Some(photo_bytes),
                capture_count: AtomicUsize::new(0),
            }
        }

        pub fn cancelling(media_storage: Arc<MockMediaStorage>) -> Self {
            Self {
                media_storage,
                photo_bytes: None,
                capture_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CameraFacility for MockCamera {
        async fn capture_into(&self, destination: &CapturedImage) -> Result<CameraOutcome> {
            self.capture_count.fetch_add(1, Ordering::SeqCst);
            match &self.photo_bytes {
                Some(bytes) => {
                    self.media_storage.write(destination, bytes.clone());
                    Ok(CameraOutcome::Captured)
                }
                None => Ok(CameraOutcome::Cancelled),
            }
        }
    }

    pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
        let pixels = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 128])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(pixels)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
            .unwrap();
        bytes
    }

    fn build_capture(
        permission_gate: Arc<MockPermissionGate>,
        camera: Arc<MockCamera>,
        media_storage: Arc<MockMediaStorage>,
    ) -> ImageCapture {
        ImageCapture::build(permission_gate, camera, media_storage)
    }

    #[tokio::test]
    async fn test_request_capture_returns_handle_when_permission_granted() {
        let storage = Arc::new(MockMediaStorage::new());
        let camera = Arc::new(MockCamera::producing(storage.clone(), create_test_jpeg(8, 8)));
        let gate = Arc::new(MockPermissionGate::already_granted());
        let capture = build_capture(gate.clone(), camera, storage.clone());

        let image = capture.request_capture().await.unwrap();

        assert!(image.display_name.starts_with("img_"));
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(storage.entry_count(), 1);
        assert_eq!(gate.prompt_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_request_capture_prompts_once_and_proceeds_on_grant() {
        let storage = Arc::new(MockMediaStorage::new());
        let camera = Arc::new(MockCamera::producing(storage.clone(), create_test_jpeg(8, 8)));
        let gate = Arc::new(MockPermissionGate::answering(true));
        let capture = build_capture(gate.clone(), camera, storage);

        capture.request_capture().await.unwrap();
        capture.request_capture().await.unwrap();

        assert_eq!(gate.prompt_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_capture_denied_creates_no_storage_entry() {
        let storage = Arc::new(MockMediaStorage::new());
        let camera = Arc::new(MockCamera::producing(storage.clone(), create_test_jpeg(8, 8)));
        let gate = Arc::new(MockPermissionGate::answering(false));
        let capture = build_capture(gate, camera.clone(), storage.clone());

        let result = capture.request_capture().await;

        assert!(matches!(result, Err(CaptureError::PermissionDenied)));
        assert_eq!(storage.entry_count(), 0);
        assert_eq!(camera.capture_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_request_capture_fails_when_storage_cannot_allocate() {
        let storage = Arc::new(MockMediaStorage::failing_allocation());
        let camera = Arc::new(MockCamera::producing(storage.clone(), create_test_jpeg(8, 8)));
        let gate = Arc::new(MockPermissionGate::already_granted());
        let capture = build_capture(gate, camera.clone(), storage);

        let result = capture.request_capture().await;

        assert!(matches!(
            result,
            Err(CaptureError::CaptureFailed(CaptureFailure::StorageUnavailable(_)))
        ));
        assert_eq!(camera.capture_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancelled_capture_discards_entry() {
        let storage = Arc::new(MockMediaStorage::new());
        let camera = Arc::new(MockCamera::cancelling(storage.clone()));
        let gate = Arc::new(MockPermissionGate::already_granted());
        let capture = build_capture(gate, camera, storage.clone());

        let result = capture.request_capture().await;

        assert!(matches!(
            result,
            Err(CaptureError::CaptureFailed(CaptureFailure::CameraAborted(_)))
        ));
        assert_eq!(storage.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_decode_returns_bitmap_with_captured_dimensions() {
        let storage = Arc::new(MockMediaStorage::new());
        let camera = Arc::new(MockCamera::producing(storage.clone(), create_test_jpeg(16, 9)));
        let gate = Arc::new(MockPermissionGate::already_granted());
        let capture = build_capture(gate, camera, storage);

        let image = capture.request_capture().await.unwrap();
        let bitmap = capture.decode(&image).await.unwrap();

        assert_eq!(bitmap.width, 16);
        assert_eq!(bitmap.height, 9);
    }

    #[tokio::test]
    async fn test_decode_fails_for_corrupt_stream() {
        let storage = Arc::new(MockMediaStorage::new());
        let camera = Arc::new(MockCamera::producing(
            storage.clone(),
            b"definitely not a jpeg".to_vec(),
        ));
        let gate = Arc::new(MockPermissionGate::already_granted());
        let capture = build_capture(gate, camera, storage);

        let image = capture.request_capture().await.unwrap();
        let result = capture.decode(&image).await;

        assert!(matches!(result, Err(ProcessingError::InvalidImage(_))));
    }

    #[tokio::test]
    async fn test_decode_fails_for_missing_entry() {
        let storage = Arc::new(MockMediaStorage::new());
        let camera = Arc::new(MockCamera::cancelling(storage.clone()));
        let gate = Arc::new(MockPermissionGate::already_granted());
        let capture = build_capture(gate, camera, storage);
        let missing = CapturedImage::at_location(
            "img_0",
            "image/jpeg",
            PathBuf::from("/mock/img_0.jpg"),
        );

        let result = capture.decode(&missing).await;

        assert!(matches!(result, Err(ProcessingError::Unreadable(_))));
    }

    #[test]
    fn test_decode_image_bytes_rejects_empty_stream() {
        let result = decode_image_bytes(&[]);

        assert!(matches!(result, Err(ProcessingError::EmptyStream)));
    }
}
