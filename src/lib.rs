// lib.rs      cuboid crate.
//
// Copyright (c) 2024  Douglas Lau
//
mod ctx;
mod cube;
mod error;
mod texture;
#[cfg(test)]
mod trace;

pub use ctx::{Context, Filter, Primitive, TextureId, Wrap};
pub use cube::Cube;
pub use error::{Error, Result};
pub use texture::Image;
