//! What to draw this frame
//!
//! Turns the game state into an ordered list of textured quads followed by
//! the text lines drawn over them. Nothing here touches the GPU, so the draw
//! order and text placement are testable.

use std::ops::Range;

use glam::Vec2;

use super::text::TextLine;
use super::vertex::{Vertex, colors};
use crate::consts::TEXT_SHADOW_OFFSET;
use crate::sim::{Bounds, Extent, GameMode, GameState, Sprite, SpriteKind};

/// Which texture a quad samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// The loaded image for a sprite kind
    Image(SpriteKind),
    /// The font atlas text meshes sample
    Font,
}

impl TextureSlot {
    pub const COUNT: usize = SpriteKind::ALL.len() + 1;

    /// Dense index into the renderer's texture table
    pub fn index(self) -> usize {
        match self {
            Self::Image(kind) => kind as usize,
            Self::Font => SpriteKind::ALL.len(),
        }
    }
}

/// An axis aligned rectangle to fill with a texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub texture: TextureSlot,
    pub rect: Bounds,
    pub color: [f32; 4],
}

impl Quad {
    pub const fn new(texture: TextureSlot, rect: Bounds, color: [f32; 4]) -> Self {
        Self {
            texture,
            rect,
            color,
        }
    }

    /// Two triangles covering the rectangle, full texture
    pub fn vertices(&self) -> [Vertex; 6] {
        let min = self.rect.position;
        let max = self.rect.max();
        let c = self.color;
        let top_left = Vertex::new(min.x, min.y, 0.0, 0.0, c);
        let top_right = Vertex::new(max.x, min.y, 1.0, 0.0, c);
        let bottom_left = Vertex::new(min.x, max.y, 0.0, 1.0, c);
        let bottom_right = Vertex::new(max.x, max.y, 1.0, 1.0, c);
        [top_left, bottom_left, top_right, top_right, bottom_left, bottom_right]
    }
}

/// A run of consecutive vertices that share a texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub texture: TextureSlot,
    pub vertices: Range<u32>,
}

/// Ordered quads for one frame, back to front, with text on top
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub quads: Vec<Quad>,
    pub texts: Vec<TextLine>,
}

impl Scene {
    /// Lay out the title screen or the play screen
    pub fn build(state: &GameState) -> Self {
        let mut scene = Self::default();

        match state.mode {
            GameMode::Idle => {
                scene.push_sprite(&state.start_background);
                let top_score = format!("Top Score: {}", state.top_score);
                scene.push_centered_text(&top_score, 0.0, state.arena);
                for (text, y) in TITLE_LINES {
                    scene.push_centered_text(text, y, state.arena);
                }
            }
            GameMode::Running => {
                for sprite in state.sprites() {
                    scene.push_sprite(sprite);
                }
                let score = format!("Score {}", state.score);
                scene.push_centered_text(&score, 0.0, state.arena);
            }
        }

        scene
    }

    fn push_sprite(&mut self, sprite: &dyn Sprite) {
        self.quads.push(Quad::new(
            TextureSlot::Image(sprite.kind()),
            sprite.bounds(),
            colors::WHITE,
        ));
    }

    /// Shadowed text centred horizontally on the screen
    fn push_centered_text(&mut self, text: &str, y: f32, arena: Extent) {
        let anchor = Vec2::new(arena.width / 2.0, y);
        let offset = Vec2::splat(TEXT_SHADOW_OFFSET);

        self.texts.push(TextLine {
            text: text.to_string(),
            anchor,
            color: colors::TEXT_SHADOW,
        });
        self.texts.push(TextLine {
            text: text.to_string(),
            anchor: anchor + offset,
            color: colors::TEXT,
        });
    }

    /// Flatten into one vertex list plus the draw calls that cover it.
    ///
    /// `text` is the laid out mesh for `self.texts`; it is drawn last.
    pub fn vertices(&self, text: &[Vertex]) -> (Vec<Vertex>, Vec<Batch>) {
        let mut vertices = Vec::with_capacity(self.quads.len() * 6 + text.len());
        let mut batches: Vec<Batch> = Vec::new();

        for quad in &self.quads {
            let start = vertices.len() as u32;
            vertices.extend_from_slice(&quad.vertices());
            let end = vertices.len() as u32;

            match batches.last_mut() {
                Some(batch) if batch.texture == quad.texture => batch.vertices.end = end,
                _ => batches.push(Batch {
                    texture: quad.texture,
                    vertices: start..end,
                }),
            }
        }

        if !text.is_empty() {
            let start = vertices.len() as u32;
            vertices.extend_from_slice(text);
            batches.push(Batch {
                texture: TextureSlot::Font,
                vertices: start..vertices.len() as u32,
            });
        }

        (vertices, batches)
    }
}

/// Fixed title screen lines below the top score
const TITLE_LINES: [(&str, f32); 7] = [
    ("Welcome to Carrot Chase", 150.0),
    ("Steer the Snowshoe Hare to", 250.0),
    ("Capture the carrots!", 300.0),
    ("<@:D BEWARE THE HUNGRY LYNX <@:D", 350.0),
    ("Arrow keys to move", 450.0),
    ("Press the Enter key to play", 500.0),
    ("Press Escape to exit", 550.0),
];
