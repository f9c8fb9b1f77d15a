mod image_uploader;

pub use image_uploader::ImageUploader;
