//! wgpu rendering module
//!
//! `scene` decides what to draw, `pipeline` draws it.

pub mod pipeline;
pub mod scene;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Quad, Scene, TextureSlot};
