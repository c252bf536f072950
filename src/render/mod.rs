//! Raster helpers shared by the image producers: output encoding, placeholder
//! card drawing and normalization of fetched images.

pub mod normalize;
pub mod placeholder;

use std::path::Path;

use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    RgbImage,
};

use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Picks the encoding from the output filename's extension.
    pub fn for_filename(name: &str) -> AppResult<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(AppError::InvalidInput(format!(
                "unsupported output extension for {name}"
            ))),
        }
    }
}

/// Encodes into memory so a failed encode never leaves a file behind.
pub fn encode(img: &RgbImage, format: OutputFormat, jpeg_quality: u8) -> AppResult<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            img.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, jpeg_quality))?
        }
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new(&mut buf))?,
    }
    Ok(buf)
}
