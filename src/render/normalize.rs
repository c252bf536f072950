use image::{imageops::FilterType, DynamicImage, Rgb, RgbImage};

use crate::core::errors::AppResult;

/// Decodes fetched bytes and brings them to an opaque RGB image that fits the
/// card box.
pub fn normalize_bytes(bytes: &[u8], max_width: u32, max_height: u32) -> AppResult<RgbImage> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(fit_within(flatten_onto_white(decoded), max_width, max_height))
}

/// Composites any transparency over white; opaque images are only converted.
pub fn flatten_onto_white(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let px = rgba.get_pixel(x, y);
        let alpha = u32::from(px[3]);
        let over_white = |channel: u8| -> u8 {
            ((u32::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255) as u8
        };
        Rgb([over_white(px[0]), over_white(px[1]), over_white(px[2])])
    })
}

/// Shrinks to fit the box keeping the aspect ratio. Never enlarges.
pub fn fit_within(img: RgbImage, max_width: u32, max_height: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    if width <= max_width && height <= max_height {
        return img;
    }
    let ratio = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let new_width = ((f64::from(width) * ratio).round() as u32).clamp(1, max_width);
    let new_height = ((f64::from(height) * ratio).round() as u32).clamp(1, max_height);
    image::imageops::resize(&img, new_width, new_height, FilterType::Lanczos3)
}
