//! Renderer-agnostic presentation interface.
//!
//! A renderer receives the finished mesh once and a model matrix every frame.
//! It never mutates the mesh. GPU backends live outside this crate and
//! implement [`Renderer`]; [`HeadlessRenderer`] records what it was given.

use crate::error::RenderError;
use crate::mesh::{Indices, MeshBuffers};
use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Dimensions of the shared texture image. UV regions are fixed fractions of
/// it, so the content itself is irrelevant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureAtlas {
    pub width: u32,
    pub height: u32,
}

impl TextureAtlas {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyAtlas { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Presents a mesh under a model transform.
pub trait Renderer {
    /// What a single [`draw`](Renderer::draw) produces.
    type Frame;

    /// Uploads the mesh and atlas. Called once before any draw.
    fn upload(&mut self, mesh: &MeshBuffers, atlas: &TextureAtlas) -> Result<(), RenderError>;

    /// Draws one frame with `transform` as the model matrix.
    fn draw(&mut self, transform: &Mat4) -> Result<Self::Frame, RenderError>;
}

/// Byte sizes of an upload, as a GPU backend would allocate them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadStats {
    pub vertex_bytes: usize,
    pub uv_bytes: usize,
    pub index_bytes: usize,
    pub index_count: usize,
    pub wide_indices: bool,
}

/// Records uploads and frames without touching a GPU.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    uploaded: Option<(UploadStats, TextureAtlas)>,
    frames: u64,
    last_transform: Option<Mat4>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn upload_stats(&self) -> Option<UploadStats> {
        self.uploaded.map(|(stats, _)| stats)
    }

    pub fn last_transform(&self) -> Option<Mat4> {
        self.last_transform
    }
}

impl Renderer for HeadlessRenderer {
    type Frame = String;

    fn upload(&mut self, mesh: &MeshBuffers, atlas: &TextureAtlas) -> Result<(), RenderError> {
        let stats = UploadStats {
            vertex_bytes: mesh.position_bytes().len(),
            uv_bytes: mesh.uv_bytes().len(),
            index_bytes: mesh.index_bytes().len(),
            index_count: mesh.indices.len(),
            wide_indices: matches!(mesh.indices, Indices::U32(_)),
        };
        tracing::debug!(?stats, "mesh uploaded");
        self.uploaded = Some((stats, *atlas));
        Ok(())
    }

    fn draw(&mut self, transform: &Mat4) -> Result<String, RenderError> {
        let (stats, atlas) = self.uploaded.ok_or(RenderError::NotUploaded)?;
        self.frames += 1;
        self.last_transform = Some(*transform);

        let t = transform.w_axis;
        Ok(format!(
            "frame {}: {} indices ({}), {} vertex bytes, atlas {}x{}, origin=({:.2}, {:.2}, {:.2})",
            self.frames,
            stats.index_count,
            if stats.wide_indices { "u32" } else { "u16" },
            stats.vertex_bytes,
            atlas.width,
            atlas.height,
            t.x,
            t.y,
            t.z
        ))
    }
}
