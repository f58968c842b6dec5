// texture.rs      Texture image module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Decoded texture image
///
/// Pixels are tightly packed RGBA, 4 bytes per pixel, top row first.
#[derive(Clone, Debug)]
pub struct Image {
    /// Width in pixels
    width: u32,

    /// Height in pixels
    height: u32,

    /// RGBA pixel data
    pixels: Vec<u8>,
}

impl Image {
    /// Load an image from a file
    ///
    /// Any format supported by the platform codecs is accepted; pixels are
    /// converted to RGBA.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading image from {path:?}");
        let img = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(ref err)
                if err.kind() == ErrorKind::NotFound =>
            {
                Error::TextureNotFound(path.into())
            }
            _ => Error::Decode(e),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("loaded {width}x{height} image from {path:?}");
        Ok(Image {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// Create a solid-color image
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((width * height) as usize * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Image {
            width,
            height,
            pixels,
        }
    }

    /// Get width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get slice of RGBA pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
