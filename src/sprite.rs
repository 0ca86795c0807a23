//! Positioned images that can be drawn on a [`crate::canvas::Canvas`].

use glamour::{Point2, Size2, Vector2};
use imgref::ImgVec;
use rgb::RGBA8;

/// Image with a position and a layer.
///
/// The position is the top-left corner of the image on the canvas.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Top-left corner on the canvas in pixels.
    position: Point2<i32>,
    /// Sprites on higher layers are drawn on top.
    layer: u8,
    /// Pixels of the sprite.
    image: ImgVec<RGBA8>,
}

impl Sprite {
    /// Create a new sprite on layer `0`.
    ///
    /// # Arguments
    ///
    /// * `position` - Top-left corner on the canvas in pixels.
    /// * `image` - Pixels of the sprite.
    #[inline]
    #[must_use]
    pub fn new(position: impl Into<Point2<i32>>, image: ImgVec<RGBA8>) -> Self {
        let position = position.into();
        let layer = 0;

        Self {
            position,
            layer,
            image,
        }
    }

    /// Set the layer the sprite is drawn on.
    #[inline]
    #[must_use]
    pub const fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;

        self
    }

    /// Set the layer the sprite is drawn on.
    #[inline]
    pub fn set_layer(&mut self, layer: u8) {
        self.layer = layer;
    }

    /// Layer the sprite is drawn on.
    #[inline]
    #[must_use]
    pub const fn layer(&self) -> u8 {
        self.layer
    }

    /// Top-left corner on the canvas in pixels.
    #[inline]
    #[must_use]
    pub const fn xy(&self) -> Point2<i32> {
        self.position
    }

    /// Move to an absolute position.
    #[inline]
    pub fn move_to(&mut self, position: impl Into<Point2<i32>>) {
        self.position = position.into();
    }

    /// Move relative to the current position.
    #[inline]
    pub fn move_relative(&mut self, offset: impl Into<Vector2<i32>>) {
        let offset = offset.into();

        self.position = Point2::new(self.position.x + offset.x, self.position.y + offset.y);
    }

    /// Replace the pixels, the position stays the same.
    #[inline]
    pub fn set_shape(&mut self, image: ImgVec<RGBA8>) {
        self.image = image;
    }

    /// Pixels of the sprite.
    #[inline]
    #[must_use]
    pub const fn image(&self) -> &ImgVec<RGBA8> {
        &self.image
    }

    /// Size of the image in pixels.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size2<u32> {
        Size2::new(self.image.width() as u32, self.image.height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use glamour::Point2;
    use imgref::ImgVec;
    use rgb::RGBA8;

    use super::Sprite;

    #[test]
    fn move_relative() {
        let mut sprite = Sprite::new((10, 20), ImgVec::new(vec![RGBA8::default(); 4], 2, 2));

        sprite.move_relative((5, -30));
        assert_eq!(sprite.xy(), Point2::new(15, -10));

        sprite.move_to((0, 0));
        sprite.move_relative((-1, -1));
        assert_eq!(sprite.xy(), Point2::new(-1, -1));
    }

    #[test]
    fn set_shape_keeps_position() {
        let mut sprite = Sprite::new((3, 4), ImgVec::new(vec![RGBA8::default(); 4], 2, 2));

        sprite.set_shape(ImgVec::new(vec![RGBA8::default(); 12], 3, 4));

        assert_eq!(sprite.xy(), Point2::new(3, 4));
        assert_eq!((sprite.size().width, sprite.size().height), (3, 4));
    }
}
