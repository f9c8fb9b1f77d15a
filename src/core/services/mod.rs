pub mod image_capture;
pub mod upload_client;
pub mod upload_pipeline;
