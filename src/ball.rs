//! The bouncing ball and its easter egg animation frames.

use std::{f32::consts::PI, path::Path};

use glamour::{Point2, Vector2};
use imgref::ImgVec;
use miette::{Context, IntoDiagnostic, Result};
use rgb::RGBA8;

use crate::{
    animation::{self, FrameSwitch, FRAME_COUNT},
    config::BallConfig,
    error::{ImageImport, ImageImportError},
    raster,
    sprite::Sprite,
    svg,
};

/// Sector angle used for the background disc, a full `2π` would collapse the arc.
const FULL_DISC_ANGLE: f32 = 1.999 * PI;

/// Ball sprite with the animation frames of it getting punctured.
///
/// The ball itself is moved around by the game, the frames are parked above the canvas until the animation is played with [`Self::next_frame`].
#[derive(Debug)]
pub struct Ball {
    /// Sprite of the ball.
    ball: Sprite,
    /// Easter egg animation frames.
    frames: [Sprite; FRAME_COUNT],
    /// Index of the animation frame that's currently visible.
    current_frame: usize,
    /// Colors and geometry.
    config: BallConfig,
}

impl Ball {
    /// Create the ball and the animation frames from an SVG file.
    ///
    /// All frames start hidden above the canvas.
    ///
    /// # Errors
    ///
    /// - When the file can't be read.
    /// - When the file is not a valid SVG document.
    #[inline]
    pub fn new(path: impl AsRef<Path>, config: BallConfig) -> Result<Self> {
        let (ball_image, frame_images) = Self::load_svg(path.as_ref(), &config)?;

        let ball = Sprite::new((0, 0), ball_image).with_layer(config.layer);
        let hidden = config.hidden_position();
        let frames =
            frame_images.map(|image| Sprite::new(hidden, image).with_layer(config.layer));

        Ok(Self {
            ball,
            frames,
            current_frame: 0,
            config,
        })
    }

    /// Replace the ball and regenerate the animation frames from another SVG file.
    ///
    /// # Errors
    ///
    /// - When the file can't be read, nothing is changed in that case.
    /// - When the file is not a valid SVG document, nothing is changed in that case.
    #[inline]
    pub fn new_ball(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let (ball_image, frame_images) = Self::load_svg(path.as_ref(), &self.config)?;

        self.ball.set_shape(ball_image);
        for (frame, image) in self.frames.iter_mut().zip(frame_images) {
            frame.set_shape(image);
        }

        Ok(())
    }

    /// Replace the ball with a photo.
    ///
    /// The photo is cropped to a centered square, scaled to the width of the ball and saved as a PNG to `save_path`.
    /// The animation frames are not changed.
    ///
    /// # Arguments
    ///
    /// * `path` - Photo to use, an empty path means no photo was chosen and nothing happens.
    /// * `save_path` - Where to write the cropped PNG.
    ///
    /// # Errors
    ///
    /// - When the photo can't be loaded, saved or rendered, the error is also logged and the ball is unchanged.
    #[inline]
    pub fn new_ball_from_image(
        &mut self,
        path: impl AsRef<Path>,
        save_path: impl AsRef<Path>,
    ) -> Result<ImageImport, ImageImportError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            log::debug!("No image file chosen, keeping the current ball");

            return Ok(ImageImport::Skipped);
        }

        match self.load_photo(path, save_path.as_ref()) {
            Ok(image) => {
                log::debug!("Replacing ball with image '{}'", path.display());
                self.ball.set_shape(image);

                Ok(ImageImport::Loaded)
            }
            Err(err) => {
                log::error!("{err}");

                Err(err)
            }
        }
    }

    /// Replace the ball with a disc showing a fraction as a sector.
    ///
    /// # Arguments
    ///
    /// * `fraction` - Part of the disc to highlight, `0.0` is nothing and `1.0` is the whole disc. Values above `1.0` are drawn as the whole disc, negative values as is.
    ///
    /// # Errors
    ///
    /// - When the generated document can't be rendered.
    #[inline]
    pub fn new_ball_from_fraction(&mut self, fraction: f32) -> Result<()> {
        let image = raster::svg_to_image(&self.fraction_svg(fraction))
            .wrap_err_with(|| format!("Error rendering ball for fraction {fraction}"))?;
        self.ball.set_shape(image);

        Ok(())
    }

    /// Horizontal position of the ball.
    #[inline]
    #[must_use]
    pub const fn ball_x(&self) -> i32 {
        self.ball.xy().x
    }

    /// Vertical position of the ball.
    #[inline]
    #[must_use]
    pub const fn ball_y(&self) -> i32 {
        self.ball.xy().y
    }

    /// Horizontal position of an animation frame.
    ///
    /// # Panics
    ///
    /// - When `index` is not smaller than [`FRAME_COUNT`].
    #[inline]
    #[must_use]
    pub const fn frame_x(&self, index: usize) -> i32 {
        self.frames[index].xy().x
    }

    /// Vertical position of an animation frame.
    ///
    /// # Panics
    ///
    /// - When `index` is not smaller than [`FRAME_COUNT`].
    #[inline]
    #[must_use]
    pub const fn frame_y(&self, index: usize) -> i32 {
        self.frames[index].xy().y
    }

    /// Width of the ball image in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.ball.size().width
    }

    /// Height of the ball image in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.ball.size().height
    }

    /// Index of the animation frame that's currently visible.
    #[inline]
    #[must_use]
    pub const fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Move the ball to an absolute position.
    #[inline]
    pub fn move_ball(&mut self, position: impl Into<Point2<i32>>) {
        self.ball.move_to(position);
    }

    /// Move the ball relative to its current position.
    #[inline]
    pub fn move_ball_relative(&mut self, offset: impl Into<Vector2<i32>>) {
        self.ball.move_relative(offset);
    }

    /// Move an animation frame to an absolute position.
    ///
    /// # Panics
    ///
    /// - When `index` is not smaller than [`FRAME_COUNT`].
    #[inline]
    pub fn move_frame(&mut self, index: usize, position: impl Into<Point2<i32>>) {
        self.frames[index].move_to(position);
    }

    /// Move an animation frame relative to its current position.
    ///
    /// # Panics
    ///
    /// - When `index` is not smaller than [`FRAME_COUNT`].
    #[inline]
    pub fn move_frame_relative(&mut self, index: usize, offset: impl Into<Vector2<i32>>) {
        self.frames[index].move_relative(offset);
    }

    /// Park all animation frames above the canvas.
    ///
    /// The current frame index is kept.
    #[inline]
    pub fn hide_frames(&mut self) {
        let hidden = self.config.hidden_position();
        for frame in &mut self.frames {
            frame.move_to(hidden);
        }
    }

    /// Advance the animation.
    ///
    /// Only does something when the tick is a keyframe in [`animation::ANIMATION`].
    ///
    /// # Arguments
    ///
    /// * `frame_counter` - Tick counter of the game loop.
    ///
    /// # Returns
    ///
    /// - Index of the animation frame that's visible after this tick.
    #[inline]
    pub fn next_frame(&mut self, frame_counter: u32) -> usize {
        if let Some(switch) = animation::switch_for_tick(frame_counter) {
            self.switch_frames(switch);
        }

        self.current_frame
    }

    /// Ball sprite followed by all animation frames.
    #[inline]
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        std::iter::once(&self.ball).chain(self.frames.iter())
    }

    /// Put the frame to show in the place of the frame to hide, then hide that one.
    fn switch_frames(&mut self, switch: FrameSwitch) {
        // Must be read before the hidden frame is moved away
        let position = self.frames[switch.hide].xy();

        self.move_frame(switch.show, position);
        self.move_frame(switch.hide, self.config.hidden_position());
        self.current_frame = switch.show;

        log::debug!(
            "Switched animation frame {} for {}",
            switch.hide,
            switch.show
        );
    }

    /// Render the ball and all animation frames from an SVG file.
    fn load_svg(
        path: &Path,
        config: &BallConfig,
    ) -> Result<(ImgVec<RGBA8>, [ImgVec<RGBA8>; FRAME_COUNT])> {
        let source = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error reading ball SVG '{}'", path.display()))?;

        let ball = raster::svg_to_image(&source)
            .wrap_err_with(|| format!("Error rendering ball SVG '{}'", path.display()))?;

        let payload = svg::extract_payload(&source);
        let mut frames: [ImgVec<RGBA8>; FRAME_COUNT] =
            std::array::from_fn(|_| ImgVec::new(vec![RGBA8::default()], 1, 1));
        for (index, frame) in frames.iter_mut().enumerate() {
            *frame = raster::svg_to_image(&animation::frame_svg(index, payload, config.size))
                .wrap_err_with(|| format!("Error rendering animation frame {index}"))?;
        }

        log::debug!("Rendered ball and animation frames from '{}'", path.display());

        Ok((ball, frames))
    }

    /// Crop, save and render a photo, without touching the ball.
    fn load_photo(&self, path: &Path, save_path: &Path) -> Result<ImgVec<RGBA8>, ImageImportError> {
        let photo = raster::load_square_photo(path, self.config.size.width).map_err(|source| {
            ImageImportError::Load {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let save_error = |source| ImageImportError::Save {
            path: save_path.to_path_buf(),
            source,
        };
        let png = raster::encode_png(photo.width(), photo.height(), photo.as_raw())
            .map_err(save_error)?;
        raster::write_file(save_path, &png).map_err(save_error)?;

        // Embed the bytes that were written instead of reading the file back
        raster::svg_to_image(&svg::ball_from_png(
            &png,
            self.config.size,
            self.config.label_box,
        ))
        .map_err(|source| ImageImportError::Render {
            path: save_path.to_path_buf(),
            source,
        })
    }

    /// SVG document of a disc with a highlighted sector.
    fn fraction_svg(&self, fraction: f32) -> String {
        let size = self.config.size;
        let label_box = self.config.label_box;
        let colors = &self.config.colors;
        let radius = self.config.radius();
        let center_y = radius + label_box.height as f32;

        [
            svg::header(size.width as f32, size.height as f32, 1.0),
            svg::sector(
                radius,
                center_y,
                radius - 1.0,
                FULL_DISC_ANGLE,
                &colors.stroke,
                &colors.fill,
            ),
            svg::sector(
                radius,
                center_y,
                radius - 1.0,
                (fraction * 2.0 * PI).min(FULL_DISC_ANGLE),
                &colors.fill,
                &colors.stroke,
            ),
            svg::rect(
                label_box.width as f32,
                label_box.height as f32,
                4.0,
                4.0,
                0.0,
                0.0,
                "#FFFFFF",
                "none",
            ),
            svg::footer().to_owned(),
        ]
        .concat()
    }
}
