//! Shared vertex, UV and index buffers that every builder appends to.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Region of the shared texture atlas a quad samples from.
///
/// The atlas is split into four fixed quadrants; there is no other region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureTag {
    /// Terracotta (pot walls and rim).
    Top,
    /// Bark (branch segments).
    Bottom,
    /// Soil at the top of the pot.
    Dirt,
    /// Foliage, and anything without a dedicated region.
    #[default]
    Default,
}

impl TextureTag {
    /// Parses a short tag (`"t"`, `"b"`, `"d"`). Anything else is [`TextureTag::Default`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "t" => Self::Top,
            "b" => Self::Bottom,
            "d" => Self::Dirt,
            _ => Self::Default,
        }
    }

    /// UVs for the four corners of a quad, in emission order.
    pub fn uv_quad(self) -> [[f32; 2]; 4] {
        match self {
            Self::Top => [[0.0, 0.0], [0.0, 0.5], [0.5, 0.0], [0.5, 0.5]],
            Self::Bottom => [[0.5, 1.0], [0.5, 0.5], [1.0, 1.0], [1.0, 0.5]],
            Self::Dirt => [[0.5, 0.5], [0.5, 0.0], [1.0, 0.5], [1.0, 1.0]],
            Self::Default => [[0.0, 0.5], [0.0, 1.0], [0.5, 0.5], [0.5, 1.0]],
        }
    }
}

/// Growable mesh data: 3 floats per position, 2 per UV, 6 indices per quad.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshAccumulator {
    positions: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u32>,
}

impl MeshAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends four corners as new vertices and two triangles
    /// `(n, n+1, n+2)`, `(n, n+2, n+3)` over them.
    pub fn add_quad(&mut self, corners: [Vec3; 4], tag: TextureTag) {
        let n = self.vertex_count() as u32;
        for corner in corners {
            self.positions.extend_from_slice(&corner.to_array());
        }
        self.indices
            .extend_from_slice(&[n, n + 1, n + 2, n, n + 2, n + 3]);
        for uv in tag.uv_quad() {
            self.uvs.extend_from_slice(&uv);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of vertex `i`.
    pub fn vertex(&self, i: usize) -> Option<Vec3> {
        let start = i.checked_mul(3)?;
        self.positions
            .get(start..start.checked_add(3)?)
            .map(Vec3::from_slice)
    }

    /// Freezes the buffers for upload, narrowing indices to 16 bits when
    /// every vertex is addressable that way.
    pub fn finish(self) -> MeshBuffers {
        let indices = if self.vertex_count() <= u16::MAX as usize + 1 {
            let mut narrow: Vec<u16> = self.indices.iter().map(|&i| i as u16).collect();
            pad_to_even(&mut narrow);
            Indices::U16(narrow)
        } else {
            Indices::U32(self.indices)
        };

        MeshBuffers {
            positions: self.positions,
            uvs: self.uvs,
            indices,
        }
    }
}

/// Duplicates the last element of an odd-length list.
///
/// 16-bit index buffers must span a multiple of 4 bytes.
pub fn pad_to_even<T: Copy>(indices: &mut Vec<T>) {
    if indices.len() % 2 != 0
        && let Some(&last) = indices.last()
    {
        indices.push(last);
    }
}

/// Index buffer in the narrowest format that addresses every vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Indices {
    pub fn len(&self) -> usize {
        match self {
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            Self::U16(v) => v.get(i).map(|&x| x as u32),
            Self::U32(v) => v.get(i).copied(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::U16(v) => bytemuck::cast_slice(v),
            Self::U32(v) => bytemuck::cast_slice(v),
        }
    }
}

/// Finished mesh handed to the renderer. Never mutated after [`MeshAccumulator::finish`].
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Indices,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    pub fn index_bytes(&self) -> &[u8] {
        self.indices.as_bytes()
    }
}
