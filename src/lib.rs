#![forbid(unsafe_code)]

//! Bouncing ball sprite for a fractions game.
//!
//! The ball is a disc divided into a colored wedge showing a fraction, a ball drawn in an SVG file, or a photo cropped into a circle.
//! Hidden behind it are eight pre-rendered frames of an easter egg animation where the ball gets punctured and deflates.
//!
//! # Features
//!
//! - Rendering SVG documents into RGBA sprites.
//! - Cropping photos into a round ball.
//! - Table-driven flip-book animation advanced by the tick counter of the game loop.
//! - Compositing sprites in layer order on a [`Canvas`] and writing it as a PNG.
//!
//! # Non-Goals
//!
//! - A generic graphics engine, there's a single ball with a single animation.
//! - Running the game loop, the game calls [`Ball::next_frame`] every tick.
//! - Drawing text labels.
//!
//! # Usage
//!
//! ```no_run
//! use fraction_ball::{Ball, BallConfig, Canvas, RGBA8};
//!
//! # fn try_main() -> miette::Result<()> {
//! let mut ball = Ball::new("assets/ball.svg", BallConfig::default())?;
//!
//! // Show three quarters
//! ball.new_ball_from_fraction(0.75)?;
//! ball.move_ball((100, 50));
//!
//! // Play the easter egg at the position of the ball
//! ball.move_frame(0, (ball.ball_x(), ball.ball_y()));
//! for tick in 0..=90 {
//!     ball.next_frame(tick);
//! }
//!
//! let mut canvas = Canvas::new((320, 240), RGBA8::new(255, 255, 255, 255));
//! canvas.draw_sprites(ball.sprites());
//! canvas.save_png("ball.png")?;
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod ball;
pub mod canvas;
pub mod config;
pub mod error;
pub mod raster;
pub mod sprite;
pub mod svg;

pub use ball::Ball;
pub use canvas::Canvas;
pub use config::{BallConfig, ThemeColors};
pub use error::{ImageImport, ImageImportError, PngError, RenderError};
pub use rgb::RGBA8;
pub use sprite::Sprite;
