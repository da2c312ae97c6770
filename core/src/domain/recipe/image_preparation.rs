use image::{DynamicImage, Rgb, RgbImage, codecs::jpeg::JpegEncoder};

use crate::domain::common::entities::app_errors::CoreError;

const JPEG_QUALITY: u8 = 90;

/// Decodes an uploaded image and re-encodes it as an opaque JPEG.
///
/// The vision provider only accepts opaque input, so images with an alpha
/// channel are composited onto a white background first.
pub fn prepare_image(image_data: &[u8]) -> Result<Vec<u8>, CoreError> {
    if image_data.is_empty() {
        return Err(CoreError::InvalidInput("No image data provided".to_string()));
    }

    let decoded = image::load_from_memory(image_data)
        .map_err(|e| CoreError::InvalidInput(format!("File must be an image: {}", e)))?;

    let opaque = if decoded.color().has_alpha() {
        flatten_onto_white(&decoded)
    } else {
        decoded.to_rgb8()
    };

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    DynamicImage::ImageRgb8(opaque)
        .write_with_encoder(encoder)
        .map_err(|e| CoreError::InternalServerError(format!("Failed to encode image: {}", e)))?;

    Ok(bytes)
}

fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = u16::from(pixel[3]);
        let blend = |channel: u8| -> u8 {
            ((u16::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        flattened.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }

    flattened
}
