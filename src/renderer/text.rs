//! Text layout and rasterisation through egui
//!
//! egui lays out each line with its built-in proportional font and keeps the
//! glyphs in a font atlas. We only take its tessellated meshes and atlas
//! updates; drawing goes through our own sprite pipeline.

use glam::Vec2;

use super::vertex::Vertex;
use crate::assets::ImageData;
use crate::consts::TEXT_SIZE;
use crate::sim::Extent;

/// Largest font atlas side we let egui grow to
pub const MAX_ATLAS_SIDE: usize = 2048;

/// One line of text, centred horizontally on `anchor`
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Top centre of the line in screen pixels
    pub anchor: Vec2,
    pub color: egui::Color32,
}

/// New or changed pixels of the font atlas
#[derive(Debug, Clone)]
pub struct AtlasPatch {
    /// `None` replaces the whole atlas, `Some` writes a region at that corner
    pub origin: Option<[u32; 2]>,
    /// Unpremultiplied sRGBA pixels
    pub image: ImageData,
}

impl AtlasPatch {
    fn from_delta(delta: egui::epaint::ImageDelta) -> Self {
        let egui::ImageData::Color(image) = delta.image;
        let [width, height] = image.size;
        Self {
            origin: delta.pos.map(|[x, y]| [x as u32, y as u32]),
            image: ImageData {
                width: width as u32,
                height: height as u32,
                rgba: image
                    .pixels
                    .iter()
                    .flat_map(|p| p.to_srgba_unmultiplied())
                    .collect(),
            },
        }
    }
}

/// Everything the GPU needs to draw one frame of text
#[derive(Debug, Default)]
pub struct TextFrame {
    /// Atlas updates to apply before drawing
    pub atlas: Vec<AtlasPatch>,
    /// Triangle list sampling the font atlas
    pub vertices: Vec<Vertex>,
}

/// Lays out text lines into atlas-textured triangles
pub struct TextPainter {
    ctx: egui::Context,
    screen: Extent,
}

impl TextPainter {
    pub fn new(screen: Extent) -> Self {
        Self {
            ctx: egui::Context::default(),
            screen,
        }
    }

    pub fn paint(&mut self, lines: &[TextLine]) -> TextFrame {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(self.screen.width, self.screen.height),
            )),
            max_texture_side: Some(MAX_ATLAS_SIDE),
            ..Default::default()
        };

        let output = self.ctx.run(input, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            for line in lines {
                painter.text(
                    egui::pos2(line.anchor.x, line.anchor.y),
                    egui::Align2::CENTER_TOP,
                    &line.text,
                    egui::FontId::proportional(TEXT_SIZE),
                    line.color,
                );
            }
        });

        let mut frame = TextFrame::default();
        for (id, delta) in output.textures_delta.set {
            if id == egui::TextureId::default() {
                frame.atlas.push(AtlasPatch::from_delta(delta));
            } else {
                log::warn!("Ignoring egui texture {:?}", id);
            }
        }

        for primitive in self.ctx.tessellate(output.shapes, output.pixels_per_point) {
            let egui::epaint::Primitive::Mesh(mesh) = primitive.primitive else {
                continue;
            };
            frame.vertices.extend(
                mesh.indices
                    .iter()
                    .filter_map(|i| mesh.vertices.get(*i as usize))
                    .map(|v| {
                        let color = egui::Rgba::from(v.color).to_rgba_unmultiplied();
                        Vertex::new(v.pos.x, v.pos.y, v.uv.x, v.uv.y, color)
                    }),
            );
        }

        frame
    }
}
