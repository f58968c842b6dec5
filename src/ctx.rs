// ctx.rs      Rendering context module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::error::Result;
use glam::{Vec2, Vec3};

/// Texture object handle
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureId(pub u32);

/// Primitive batch mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Quadrilaterals (4 vertices each)
    Quads,

    /// Line segments (2 vertices each)
    Lines,
}

/// Texture sampling filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Nearest texel
    Nearest,

    /// Linear interpolation
    Linear,
}

/// Texture wrap mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
    /// Repeat outside [0, 1]
    Repeat,

    /// Clamp to edge texels
    ClampToEdge,
}

/// Immediate-mode rendering context
///
/// Boundary to the graphics backend.  Geometry is emitted attribute by
/// attribute between [begin] and [end]; a normal or texture coordinate
/// applies to the vertices emitted after it.  Texture parameter calls
/// affect the currently bound texture object.
///
/// [begin]: Context::begin
/// [end]: Context::end
pub trait Context {
    /// Begin a primitive batch
    fn begin(&mut self, prim: Primitive);

    /// End the current primitive batch
    fn end(&mut self);

    /// Emit one vertex position
    fn vertex(&mut self, pos: Vec3);

    /// Set the current normal
    fn normal(&mut self, norm: Vec3);

    /// Set the current texture coordinate
    fn tex_coord(&mut self, tc: Vec2);

    /// Generate a new texture object
    fn gen_texture(&mut self) -> TextureId;

    /// Bind a texture object
    fn bind_texture(&mut self, tex: TextureId);

    /// Upload RGBA pixels to the bound texture
    fn tex_image_2d(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<()>;

    /// Set min / mag filters of the bound texture
    fn tex_filter(&mut self, min: Filter, mag: Filter);

    /// Set wrap modes of the bound texture
    fn tex_wrap(&mut self, wrap_s: Wrap, wrap_t: Wrap);

    /// Delete a texture object
    fn delete_texture(&mut self, tex: TextureId);

    /// Enable or disable 2D texturing
    fn set_texture_2d(&mut self, enabled: bool);
}
