//! Wrapper around a pixel buffer that sprites are composited on.

use std::path::Path;

use glamour::Size2;
use imgref::ImgVec;
use miette::Result;
use rgb::{ComponentBytes, RGBA8};

use crate::sprite::Sprite;

/// Pixel buffer that sprites are drawn on in layer order.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Pixels of the canvas.
    buffer: ImgVec<RGBA8>,
    /// Color the canvas is filled with when cleared.
    background: RGBA8,
}

impl Canvas {
    /// Create a canvas filled with the background color.
    ///
    /// # Arguments
    ///
    /// * `size` - Amount of pixels of the canvas.
    /// * `background` - Color used when clearing the canvas.
    #[inline]
    #[must_use]
    pub fn new(size: impl Into<Size2<u32>>, background: RGBA8) -> Self {
        let size = size.into();
        let buffer = ImgVec::new(
            vec![background; size.width as usize * size.height as usize],
            size.width as usize,
            size.height as usize,
        );

        Self { buffer, background }
    }

    /// Fill everything with the background color.
    #[inline]
    pub fn clear(&mut self) {
        let background = self.background;
        self.buffer.buf_mut().fill(background);
    }

    /// Draw sprites sorted by layer.
    ///
    /// Sprites on the same layer are drawn in the order they are passed.
    #[inline]
    pub fn draw_sprites<'a>(&mut self, sprites: impl IntoIterator<Item = &'a Sprite>) {
        let mut sprites = sprites.into_iter().collect::<Vec<_>>();
        sprites.sort_by_key(|sprite| sprite.layer());

        for sprite in sprites {
            self.draw_sprite(sprite);
        }
    }

    /// Blend a single sprite on top of the canvas.
    ///
    /// Parts of the sprite outside of the canvas are ignored.
    #[inline]
    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        let position = sprite.xy();
        let image = sprite.image();

        let canvas_width = self.buffer.width() as i64;
        let canvas_height = self.buffer.height() as i64;

        // Clip the sprite rectangle to the canvas
        let left = i64::from(position.x).max(0);
        let top = i64::from(position.y).max(0);
        let right = (i64::from(position.x) + image.width() as i64).min(canvas_width);
        let bottom = (i64::from(position.y) + image.height() as i64).min(canvas_height);
        if left >= right || top >= bottom {
            return;
        }

        let stride = self.buffer.stride();
        let pixels = self.buffer.buf_mut();
        for y in top..bottom {
            let source_y = (y - i64::from(position.y)) as usize;
            for x in left..right {
                let source_x = (x - i64::from(position.x)) as usize;

                let source = image[(source_x, source_y)];
                let target = &mut pixels[x as usize + y as usize * stride];
                *target = blend(source, *target);
            }
        }
    }

    /// Color of a single pixel, `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<RGBA8> {
        (x < self.buffer.width() && y < self.buffer.height()).then(|| self.buffer[(x, y)])
    }

    /// All pixels of the canvas.
    #[inline]
    #[must_use]
    pub const fn image(&self) -> &ImgVec<RGBA8> {
        &self.buffer
    }

    /// Write the canvas to disk as a PNG.
    ///
    /// # Errors
    ///
    /// - When the file can't be written.
    #[inline]
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        crate::raster::write_png(
            path,
            self.buffer.width() as u32,
            self.buffer.height() as u32,
            self.buffer.buf().as_bytes(),
        )?;

        Ok(())
    }
}

/// Source-over blending of straight alpha colors.
fn blend(source: RGBA8, target: RGBA8) -> RGBA8 {
    match source.a {
        0 => target,
        255 => source,
        _ => {
            let source_alpha = f32::from(source.a) / 255.0;
            let target_alpha = f32::from(target.a) / 255.0 * (1.0 - source_alpha);
            let alpha = source_alpha + target_alpha;

            let channel = |source: u8, target: u8| {
                (f32::from(source).mul_add(source_alpha, f32::from(target) * target_alpha) / alpha)
                    .round() as u8
            };

            RGBA8::new(
                channel(source.r, target.r),
                channel(source.g, target.g),
                channel(source.b, target.b),
                (alpha * 255.0).round() as u8,
            )
        }
    }
}
