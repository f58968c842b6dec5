// cube.rs      Cube module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::ctx::{Context, Filter, Primitive, TextureId, Wrap};
use crate::error::{Error, Result};
use crate::texture::Image;
use glam::{Vec2, Vec3};
use std::path::Path;

/// Vertex indices of all faces, in winding order
const FACES: [[usize; 4]; 6] = [
    [0, 1, 5, 4], // left
    [1, 2, 6, 5], // back
    [2, 3, 7, 6], // right
    [3, 0, 4, 7], // front
    [0, 3, 2, 1], // bottom
    [4, 5, 6, 7], // top
];

/// Texture coordinates shared by all faces
const TEX_COORDS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
];

/// Textured cube primitive
///
/// An axis-aligned cube centered at the origin, drawn through an
/// immediate-mode [Context].  Face normals and texture coordinates are
/// calculated on demand; draw routines which need them fail with
/// [NotReady] until the matching `calc` / upload step has run.
///
/// ```rust
/// # use cuboid::{Cube, Error};
/// # fn main() -> Result<(), Error> {
/// let mut cube = Cube::new(2.0)?;
/// cube.calc_normals();
/// cube.calc_tex_coords();
/// # Ok(())
/// # }
/// ```
///
/// [Context]: crate::Context
/// [NotReady]: crate::Error::NotReady
pub struct Cube {
    /// Edge length
    size: f32,

    /// Corner vertices (bottom 4, then top 4)
    vertices: [Vec3; 8],

    /// Outward face normals (after [calc_normals])
    ///
    /// [calc_normals]: Cube::calc_normals
    normals: Option<[Vec3; 6]>,

    /// Shared texture coordinates (after [calc_tex_coords])
    ///
    /// [calc_tex_coords]: Cube::calc_tex_coords
    tex_coords: Option<[Vec2; 4]>,

    /// Decoded texture image, held until upload
    image: Option<Image>,

    /// Uploaded texture handle
    texture: Option<TextureId>,
}

impl Cube {
    /// Create a new cube
    ///
    /// * `size` Edge length; must be positive and finite.
    pub fn new(size: f32) -> Result<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(Error::InvalidSize(size));
        }
        let hs = size / 2.0;
        let vertices = [
            Vec3::new(-hs, -hs, hs),  // 0 left bottom front
            Vec3::new(-hs, -hs, -hs), // 1 left bottom back
            Vec3::new(hs, -hs, -hs),  // 2 right bottom back
            Vec3::new(hs, -hs, hs),   // 3 right bottom front
            Vec3::new(-hs, hs, hs),   // 4 left top front
            Vec3::new(-hs, hs, -hs),  // 5 left top back
            Vec3::new(hs, hs, -hs),   // 6 right top back
            Vec3::new(hs, hs, hs),    // 7 right top front
        ];
        Ok(Cube {
            size,
            vertices,
            normals: None,
            tex_coords: None,
            image: None,
            texture: None,
        })
    }

    /// Get the edge length
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get all corner vertices
    pub fn vertices(&self) -> &[Vec3; 8] {
        &self.vertices
    }

    /// Get vertex indices of all faces
    pub fn faces(&self) -> &[[usize; 4]; 6] {
        &FACES
    }

    /// Get outward face normals
    pub fn normals(&self) -> Result<&[Vec3; 6]> {
        self.normals.as_ref().ok_or(Error::NotReady("normals"))
    }

    /// Get the shared texture coordinates
    pub fn tex_coords(&self) -> Result<&[Vec2; 4]> {
        self.tex_coords.as_ref().ok_or(Error::NotReady("tex coords"))
    }

    /// Get the uploaded texture handle
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Calculate outward face normals
    ///
    /// Each normal comes from the first three vertices of its face; the
    /// winding order makes the negated cross product point outward.
    pub fn calc_normals(&mut self) {
        let mut normals = [Vec3::ZERO; 6];
        for (norm, face) in normals.iter_mut().zip(&FACES) {
            let v0 = self.vertices[face[0]];
            let v1 = self.vertices[face[1]];
            let v2 = self.vertices[face[2]];
            let u = v0 - v1;
            let v = v0 - v2;
            *norm = -(u.cross(v).normalize());
        }
        self.normals = Some(normals);
    }

    /// Assign the shared texture coordinates
    ///
    /// The same four unit-square corners are applied to every face, in
    /// face vertex order.
    pub fn calc_tex_coords(&mut self) {
        self.tex_coords = Some(TEX_COORDS);
    }

    /// Load the texture image from a file
    ///
    /// Replaces any previously loaded image.
    pub fn load_texture<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.image = Some(Image::load(path)?);
        Ok(())
    }

    /// Set a pre-decoded texture image
    pub fn set_texture_image(&mut self, image: Image) {
        self.image = Some(image);
    }

    /// Upload the texture image to the rendering context
    ///
    /// The texture object is left bound, with linear filtering and repeat
    /// wrapping on both axes.  The decoded image is released after a
    /// successful upload.
    pub fn upload_texture<C: Context>(&mut self, ctx: &mut C) -> Result<()> {
        let img = self.image.as_ref().ok_or(Error::NotReady("image"))?;
        let tex = ctx.gen_texture();
        ctx.bind_texture(tex);
        let res = ctx.tex_image_2d(img.width(), img.height(), img.pixels());
        if let Err(e) = res {
            ctx.delete_texture(tex);
            return Err(e);
        }
        ctx.tex_filter(Filter::Linear, Filter::Linear);
        ctx.tex_wrap(Wrap::Repeat, Wrap::Repeat);
        log::debug!(
            "uploaded {}x{} texture as {tex:?}",
            img.width(),
            img.height()
        );
        self.texture = Some(tex);
        self.image = None;
        Ok(())
    }

    /// Release the uploaded texture object
    pub fn dispose<C: Context>(&mut self, ctx: &mut C) {
        if let Some(tex) = self.texture.take() {
            ctx.delete_texture(tex);
        }
    }

    /// Draw all faces with positions only
    pub fn draw_mesh<C: Context>(&self, ctx: &mut C) {
        ctx.begin(Primitive::Quads);
        for face in &FACES {
            for &v in face {
                ctx.vertex(self.vertices[v]);
            }
        }
        ctx.end();
    }

    /// Draw all faces with flat per-face normals
    pub fn draw_mesh_with_normals<C: Context>(
        &self,
        ctx: &mut C,
    ) -> Result<()> {
        let normals = self.normals()?;
        ctx.begin(Primitive::Quads);
        for (face, norm) in FACES.iter().zip(normals) {
            ctx.normal(*norm);
            for &v in face {
                ctx.vertex(self.vertices[v]);
            }
        }
        ctx.end();
        Ok(())
    }

    /// Draw all faces with the texture applied
    pub fn draw_textured<C: Context>(&self, ctx: &mut C) -> Result<()> {
        let tex_coords = self.tex_coords()?;
        let tex = self.texture.ok_or(Error::NotReady("texture"))?;
        ctx.bind_texture(tex);
        ctx.set_texture_2d(true);
        ctx.begin(Primitive::Quads);
        for face in &FACES {
            for (j, &v) in face.iter().enumerate() {
                ctx.tex_coord(tex_coords[j]);
                ctx.vertex(self.vertices[v]);
            }
        }
        ctx.end();
        ctx.set_texture_2d(false);
        Ok(())
    }

    /// Draw all faces with the texture and flat normals
    pub fn draw_textured_with_normals<C: Context>(
        &self,
        ctx: &mut C,
    ) -> Result<()> {
        let normals = self.normals()?;
        let tex_coords = self.tex_coords()?;
        let tex = self.texture.ok_or(Error::NotReady("texture"))?;
        ctx.bind_texture(tex);
        ctx.set_texture_2d(true);
        ctx.begin(Primitive::Quads);
        for (face, norm) in FACES.iter().zip(normals) {
            ctx.normal(*norm);
            for (j, &v) in face.iter().enumerate() {
                ctx.tex_coord(tex_coords[j]);
                ctx.vertex(self.vertices[v]);
            }
        }
        ctx.end();
        ctx.set_texture_2d(false);
        Ok(())
    }

    /// Draw one line segment per face vertex showing the face normal
    ///
    /// All four segments of a face are parallel; each starts at a corner
    /// vertex and ends one normal length away.
    pub fn draw_normal_lines<C: Context>(&self, ctx: &mut C) -> Result<()> {
        let normals = self.normals()?;
        ctx.begin(Primitive::Lines);
        for (face, norm) in FACES.iter().zip(normals) {
            for &v in face {
                let start = self.vertices[v];
                ctx.vertex(start);
                ctx.vertex(start + *norm);
            }
        }
        ctx.end();
        Ok(())
    }

    /// Draw the edges of all faces as lines
    pub fn draw_wireframe<C: Context>(&self, ctx: &mut C) {
        ctx.begin(Primitive::Lines);
        for face in &FACES {
            for j in 0..4 {
                let next = (j + 1) % 4;
                ctx.vertex(self.vertices[face[j]]);
                ctx.vertex(self.vertices[face[next]]);
            }
        }
        ctx.end();
    }
}
