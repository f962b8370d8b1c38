// SPDX-License-Identifier: MPL-2.0
//! Decorative animated background scene.
//!
//! A field of drifting ether glyphs drawn on a canvas behind the sections.
//! Purely cosmetic; the only architectural surface is [`SceneControl`]:
//! the navigator pauses the scene while external content fills the frame
//! view and resumes it for regular sections.

use crate::host::SceneControl;
use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Point, Rectangle, Theme};

const GLYPH_COUNT: usize = 28;
const DRIFT_SPEED: f32 = 14.0;

#[derive(Debug, Clone, Copy)]
struct Glyph {
    /// Horizontal position as a fraction of the scene width.
    x: f32,
    /// Starting vertical offset as a fraction of the scene height.
    y: f32,
    scale: f32,
    spin: f32,
}

/// Animated glyph field with advisory pause/resume.
#[derive(Debug)]
pub struct BackgroundScene {
    glyphs: Vec<Glyph>,
    elapsed_secs: f32,
    paused: bool,
    cache: canvas::Cache,
}

impl Default for BackgroundScene {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundScene {
    pub fn new() -> Self {
        // Deterministic pseudo-random layout; the scene does not need an
        // RNG dependency for decoration.
        let glyphs = (0..GLYPH_COUNT)
            .map(|i| {
                let n = i as f32;
                Glyph {
                    x: (n * 0.618_034).fract(),
                    y: (n * 0.414_214).fract(),
                    scale: 0.4 + (n * 0.271_828).fract() * 0.9,
                    spin: 0.2 + (n * 0.141_593).fract() * 0.6,
                }
            })
            .collect();
        Self {
            glyphs,
            elapsed_secs: 0.0,
            paused: false,
            cache: canvas::Cache::default(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances the animation clock. No-op while paused, so pausing
    /// freezes the scene rather than hiding it.
    pub fn tick(&mut self, delta_secs: f32) {
        if self.paused {
            return;
        }
        self.elapsed_secs += delta_secs;
        self.cache.clear();
    }
}

impl SceneControl for BackgroundScene {
    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }
}

impl<Message> canvas::Program<Message> for BackgroundScene {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::SCENE_BACKDROP);

            for glyph in &self.glyphs {
                let drift = (self.elapsed_secs * DRIFT_SPEED * glyph.spin) % bounds.height;
                let x = glyph.x * bounds.width;
                let y = (glyph.y * bounds.height + drift) % bounds.height;
                let size = 10.0 * glyph.scale;

                // Diamond outline, the ether mark reduced to four strokes.
                let path = canvas::Path::new(|builder| {
                    builder.move_to(Point::new(x, y - size));
                    builder.line_to(Point::new(x + size * 0.62, y));
                    builder.line_to(Point::new(x, y + size));
                    builder.line_to(Point::new(x - size * 0.62, y));
                    builder.close();
                });
                frame.stroke(
                    &path,
                    canvas::Stroke::default()
                        .with_color(palette::SCENE_GLYPH)
                        .with_width(1.0),
                );
            }
        });

        vec![geometry]
    }
}
