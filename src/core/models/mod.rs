mod capture_session;
mod captured_image;
mod decoded_bitmap;
mod notification;
mod upload_request;
mod upload_result;
mod user_settings;

pub use capture_session::CaptureSession;
pub use captured_image::CapturedImage;
pub use decoded_bitmap::DecodedBitmap;
pub use notification::{Notification, NotificationDuration};
pub use upload_request::{EncodedImage, UploadRequest};
pub use upload_result::{UploadAttempt, UploadResult, UploadState};
pub use user_settings::UserSettings;
