//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Textured, tinted 2D vertex in screen pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Tints
pub mod colors {
    /// Draw an image as-is
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: egui::Color32 = egui::Color32::BLUE;
    pub const TEXT_SHADOW: egui::Color32 = egui::Color32::BLACK;
    /// Clear colour behind everything
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
