// trace.rs     Trace context module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::ctx::{Context, Filter, Primitive, TextureId, Wrap};
use crate::error::{Error, Result};
use glam::{Vec2, Vec3};

/// One recorded context call
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Begin(Primitive),
    End,
    Vertex(Vec3),
    Normal(Vec3),
    TexCoord(Vec2),
    GenTexture(TextureId),
    BindTexture(TextureId),
    TexImage2d(u32, u32, usize),
    TexFilter(Filter, Filter),
    TexWrap(Wrap, Wrap),
    DeleteTexture(TextureId),
    SetTexture2d(bool),
}

/// Context which records every call, for draw emission tests
#[derive(Default)]
pub struct TraceContext {
    /// Recorded calls, in order
    pub calls: Vec<Call>,

    /// Last generated texture ID
    last_tex: u32,

    /// Reject pixel uploads
    pub reject_upload: bool,
}

impl TraceContext {
    /// Create a new trace context
    pub fn new() -> Self {
        TraceContext::default()
    }

    /// Get all emitted vertices
    pub fn vertices(&self) -> Vec<Vec3> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Vertex(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Get all emitted line segments
    pub fn segments(&self) -> Vec<(Vec3, Vec3)> {
        self.vertices()
            .chunks(2)
            .map(|seg| (seg[0], seg[1]))
            .collect()
    }
}

impl Context for TraceContext {
    fn begin(&mut self, prim: Primitive) {
        self.calls.push(Call::Begin(prim));
    }

    fn end(&mut self) {
        self.calls.push(Call::End);
    }

    fn vertex(&mut self, pos: Vec3) {
        self.calls.push(Call::Vertex(pos));
    }

    fn normal(&mut self, norm: Vec3) {
        self.calls.push(Call::Normal(norm));
    }

    fn tex_coord(&mut self, tc: Vec2) {
        self.calls.push(Call::TexCoord(tc));
    }

    fn gen_texture(&mut self) -> TextureId {
        self.last_tex += 1;
        let tex = TextureId(self.last_tex);
        self.calls.push(Call::GenTexture(tex));
        tex
    }

    fn bind_texture(&mut self, tex: TextureId) {
        self.calls.push(Call::BindTexture(tex));
    }

    fn tex_image_2d(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<()> {
        if self.reject_upload {
            return Err(Error::Upload("rejected by trace context".to_string()));
        }
        self.calls.push(Call::TexImage2d(width, height, pixels.len()));
        Ok(())
    }

    fn tex_filter(&mut self, min: Filter, mag: Filter) {
        self.calls.push(Call::TexFilter(min, mag));
    }

    fn tex_wrap(&mut self, wrap_s: Wrap, wrap_t: Wrap) {
        self.calls.push(Call::TexWrap(wrap_s, wrap_t));
    }

    fn delete_texture(&mut self, tex: TextureId) {
        self.calls.push(Call::DeleteTexture(tex));
    }

    fn set_texture_2d(&mut self, enabled: bool) {
        self.calls.push(Call::SetTexture2d(enabled));
    }
}
