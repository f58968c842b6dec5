// error.rs     Error definitions
//
// Copyright (c) 2024  Douglas Lau
//
use std::path::PathBuf;

/// Cuboid errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid cube size
    #[error("Invalid size: {0}")]
    InvalidSize(f32),

    /// Texture file not found
    #[error("Texture not found: {}", .0.display())]
    TextureNotFound(PathBuf),

    /// Image decode error
    #[error("Decode: {0}")]
    Decode(#[from] image::ImageError),

    /// Texture upload rejected by backend
    #[error("Upload: {0}")]
    Upload(String),

    /// Operation attempted before a required step
    #[error("Not ready: {0}")]
    NotReady(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
