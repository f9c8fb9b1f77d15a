use image::DynamicImage;

#[derive(Clone)]
pub struct DecodedBitmap {
    pub width: u32,
    pub height: u32,
    image: DynamicImage,
}

impl std::fmt::Debug for DecodedBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl DecodedBitmap {
    pub fn from_dynamic_image(image: DynamicImage) -> Self {
        log::debug!(
            "[DECODED_BITMAP] building bitmap: {}x{}",
            image.width(),
            image.height()
        );

        Self {
            width: image.width(),
            height: image.height(),
            image,
        }
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.image
    }
}
