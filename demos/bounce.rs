//! Bounce a fraction ball to the floor, play the easter egg animation where it lands and write every rendered tick as a PNG.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example bounce -- target/bounce
//! ```

use std::path::PathBuf;

use fraction_ball::{Ball, BallConfig, Canvas, RGBA8};
use miette::{Context, IntoDiagnostic, Result};

/// Size of the rendered canvas.
const CANVAS: (u32, u32) = (320, 400);

/// Ticks the ball falls before hitting the floor.
const FALL_TICKS: i32 = 24;

fn main() -> Result<()> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .map_or_else(|| std::env::temp_dir().join("bounce"), PathBuf::from);
    std::fs::create_dir_all(&output)
        .into_diagnostic()
        .wrap_err("Error creating output directory")?;

    let config = BallConfig::default();
    let ball_path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/ball.svg");
    let mut ball = Ball::new(ball_path, config)?;
    ball.new_ball_from_fraction(3.0 / 8.0)?;

    let mut canvas = Canvas::new(CANVAS, RGBA8::new(155, 173, 183, 255));
    let floor = CANVAS.1 as i32 - ball.height() as i32;
    let mut frame_counter = 0;

    // Fall with a constant acceleration
    ball.move_ball(((CANVAS.0 - ball.width()) as i32 / 2, 0));
    for tick in 1..=FALL_TICKS {
        let y = floor * tick * tick / (FALL_TICKS * FALL_TICKS);
        ball.move_ball_relative((0, y - ball.ball_y()));

        render(&mut canvas, &ball, &output, frame_counter)?;
        frame_counter += 1;
    }

    // Swap the ball for the first animation frame and let the table run
    ball.move_frame(0, (ball.ball_x(), ball.ball_y()));
    ball.move_ball((0, -(ball.height() as i32)));
    for tick in 0..=90 {
        let visible = ball.next_frame(tick);
        log::debug!("Tick {tick} shows animation frame {visible}");

        render(&mut canvas, &ball, &output, frame_counter)?;
        frame_counter += 1;
    }

    ball.hide_frames();
    log::info!(
        "Wrote {frame_counter} frames to '{}'",
        output.display()
    );

    Ok(())
}

/// Draw the ball on a cleared canvas and save it.
fn render(canvas: &mut Canvas, ball: &Ball, output: &std::path::Path, index: u32) -> Result<()> {
    canvas.clear();
    canvas.draw_sprites(ball.sprites());

    canvas.save_png(output.join(format!("frame_{index:03}.png")))
}
