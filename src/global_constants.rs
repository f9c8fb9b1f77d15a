pub const APPLICATION_NAME: &str = "photo-uploader";
pub const APPLICATION_TITLE: &str = "Photo Uploader";

pub const UPLOAD_ENDPOINT_URL: &str = "http://10.18.46.31:5000/upload";
pub const UPLOAD_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const UPLOAD_CONNECT_TIMEOUT_SECONDS: u64 = 30;
pub const UPLOAD_WRITE_TIMEOUT_SECONDS: u64 = 30;
pub const UPLOAD_READ_TIMEOUT_SECONDS: u64 = 30;

pub const CAPTURE_MIME_TYPE: &str = "image/jpeg";
pub const CAPTURE_NAME_PREFIX: &str = "img_";
pub const JPEG_QUALITY: u8 = 100;

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_UPLOAD: &str = "[UPLOAD]";
pub const LOG_TAG_STORAGE: &str = "[MEDIA_STORAGE]";
pub const LOG_TAG_CAMERA: &str = "[CAMERA]";
pub const LOG_TAG_PERMISSION: &str = "[PERMISSION]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";

pub const USER_MESSAGE_PERMISSION_DENIED: &str = "Camera permission is required for this feature";
pub const USER_MESSAGE_STORAGE_FAILED: &str = "Could not create a file for the image";
pub const USER_MESSAGE_CAPTURE_ABORTED: &str = "No photo was taken";
pub const USER_MESSAGE_NO_IMAGE: &str = "Take a photo first";
pub const USER_MESSAGE_UPLOAD_SUCCEEDED: &str = "Image uploaded successfully";
pub const USER_MESSAGE_SERVER_ERROR: &str = "Server error";
pub const USER_MESSAGE_TRANSPORT_ERROR: &str = "Error while sending";
pub const USER_MESSAGE_PROCESSING_ERROR: &str = "Error while processing the image";
pub const USER_MESSAGE_CAPTURED: &str = "Photo captured";
pub const USER_MESSAGE_NO_IMAGE_PLACEHOLDER: &str = "No image";

pub const PERMISSION_PROMPT_CAMERA: &str = "Allow photo-uploader to use the camera? [y/N] ";

pub const DEFAULT_CAMERA_COMMAND: &[&str] = &["fswebcam", "--no-banner", "-r", "1280x720"];
pub const MEDIA_DIRECTORY_NAME: &str = "photo-uploader";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Photo Uploader                                        ║
║                                                        ║
║  capture  take a new photo                             ║
║  upload   send the current photo to the server         ║
║  status   show the current photo                       ║
║  quit     exit                                         ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
