//! Drive the ball through its public interface like the game does.

use fraction_ball::{Ball, BallConfig, Canvas, ImageImport, ImageImportError, RGBA8};
use image::{Rgba, RgbaImage};

/// Ball shipped with the crate.
const BALL_SVG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/ball.svg");

const BACKGROUND: RGBA8 = RGBA8::new(255, 255, 255, 255);

fn ball() -> Ball {
    Ball::new(BALL_SVG, BallConfig::default()).unwrap()
}

/// Pixels of the ball sprite.
fn ball_pixels(ball: &Ball) -> Vec<RGBA8> {
    ball.sprites().next().unwrap().image().buf().clone()
}

#[test]
fn frames_start_hidden() {
    let ball = ball();

    for index in 0..8 {
        assert_eq!(ball.frame_x(index), 0);
        assert_eq!(ball.frame_y(index), -120);
    }
    assert_eq!(ball.current_frame(), 0);
    assert_eq!((ball.width(), ball.height()), (85, 120));
}

#[test]
fn animation_chain() {
    let mut ball = ball();
    ball.move_frame(0, (40, 60));

    let mut visited = Vec::new();
    let mut previous = ball.current_frame();
    for tick in 0..=100 {
        let visible = ball.next_frame(tick);
        if tick % 5 == 0 && (10..=90).contains(&tick) {
            visited.push(visible);

            // The shown frame takes the place of the hidden one
            assert_eq!((ball.frame_x(visible), ball.frame_y(visible)), (40, 60));
            assert_eq!(ball.frame_y(previous), -120);
        } else {
            assert_eq!(visible, previous);
        }
        previous = visible;
    }

    assert_eq!(
        visited,
        [1, 2, 1, 2, 1, 2, 3, 4, 3, 4, 3, 4, 5, 6, 5, 6, 7]
    );
    // Only the last frame is on screen
    assert!((0..7).all(|index| ball.frame_y(index) == -120));
}

#[test]
fn unknown_tick_changes_nothing() {
    let mut ball = ball();
    ball.move_frame(3, (5, 5));

    assert_eq!(ball.next_frame(11), 0);
    assert_eq!(ball.next_frame(91), 0);

    assert_eq!((ball.frame_x(3), ball.frame_y(3)), (5, 5));
    assert!([0, 1, 2, 4, 5, 6, 7]
        .into_iter()
        .all(|index| ball.frame_y(index) == -120));
}

#[test]
fn hide_frames_resets_positions() {
    let mut ball = ball();
    ball.move_frame(2, (10, 10));
    ball.move_frame_relative(5, (3, 200));
    ball.next_frame(10);

    ball.hide_frames();

    for index in 0..8 {
        assert_eq!((ball.frame_x(index), ball.frame_y(index)), (0, -120));
    }
    // The frame index is not reset
    assert_eq!(ball.current_frame(), 1);
}

#[test]
fn moving_the_ball_leaves_frames_alone() {
    let mut ball = ball();

    ball.move_ball((100, 30));
    ball.move_ball_relative((-20, 5));

    assert_eq!((ball.ball_x(), ball.ball_y()), (80, 35));
    assert!((0..8).all(|index| ball.frame_y(index) == -120));
}

#[test]
#[should_panic]
fn frame_index_out_of_range() {
    let _ = ball().frame_x(8);
}

#[test]
fn fraction_boundaries() {
    let mut ball = ball();

    ball.new_ball_from_fraction(0.0).unwrap();
    ball.new_ball_from_fraction(1.0).unwrap();
    ball.new_ball_from_fraction(1.5).unwrap();

    assert_eq!((ball.width(), ball.height()), (85, 120));
}

#[test]
fn fraction_grows_to_the_whole_disc() {
    // Fill color of the fraction sector
    let highlight = RGBA8::new(0x00, 0x5F, 0xE4, 255);
    let highlighted = |fraction: f32| {
        let mut ball = ball();
        ball.new_ball_from_fraction(fraction).unwrap();

        ball_pixels(&ball)
            .into_iter()
            .filter(|&pixel| pixel == highlight)
            .count()
    };

    let nothing = highlighted(0.0);
    let half = highlighted(0.5);
    let whole = highlighted(1.0);

    assert!(half > nothing + 1000, "half {half}, nothing {nothing}");
    assert!(whole > half + 1000, "whole {whole}, half {half}");
    assert_eq!(highlighted(2.0), whole);
}

#[test]
fn fraction_is_drawn_below_label_box() {
    let mut ball = ball();
    ball.new_ball_from_fraction(0.5).unwrap();

    let mut canvas = Canvas::new((85, 120), BACKGROUND);
    canvas.draw_sprites(ball.sprites());

    // Center of the disc is colored, the corners are not
    assert_ne!(canvas.pixel(42, 74), Some(BACKGROUND));
    assert_eq!(canvas.pixel(1, 118), Some(BACKGROUND));
}

#[test]
fn empty_image_path_keeps_ball() {
    let mut ball = ball();
    let before = ball_pixels(&ball);
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("ball.png");

    assert_eq!(
        ball.new_ball_from_image("", &save_path).unwrap(),
        ImageImport::Skipped
    );

    assert_eq!(ball_pixels(&ball), before);
    assert!(!save_path.exists());
}

#[test]
fn missing_image_keeps_ball() {
    let mut ball = ball();
    let before = ball_pixels(&ball);
    let dir = tempfile::tempdir().unwrap();

    let result = ball.new_ball_from_image(dir.path().join("missing.jpg"), dir.path().join("ball.png"));

    assert!(matches!(result, Err(ImageImportError::Load { .. })));
    assert_eq!(ball_pixels(&ball), before);
}

#[test]
fn image_is_cropped_and_saved() {
    let mut ball = ball();
    let before = ball_pixels(&ball);
    let dir = tempfile::tempdir().unwrap();

    // Wide photo, the red sides must be cropped away
    let photo_path = dir.path().join("photo.png");
    RgbaImage::from_fn(300, 100, |x, _| {
        if (100..200).contains(&x) {
            Rgba([0, 200, 0, 255])
        } else {
            Rgba([255, 0, 0, 255])
        }
    })
    .save(&photo_path)
    .unwrap();

    let save_path = dir.path().join("ball.png");
    assert_eq!(
        ball.new_ball_from_image(&photo_path, &save_path).unwrap(),
        ImageImport::Loaded
    );

    let saved = image::open(&save_path).unwrap().into_rgba8();
    assert_eq!(saved.dimensions(), (85, 85));
    assert_eq!(saved.get_pixel(42, 42).0, [0, 200, 0, 255]);

    // Center of the disc under the label box shows the middle of the photo
    let pixels = ball_pixels(&ball);
    assert_ne!(pixels, before);
    assert_eq!(pixels[42 + 74 * 85], RGBA8::new(0, 200, 0, 255));
    assert_eq!((ball.width(), ball.height()), (85, 120));
}

/// Wide photo in a temporary directory.
fn photo(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("photo.png");
    RgbaImage::from_pixel(120, 90, Rgba([0, 200, 0, 255]))
        .save(&path)
        .unwrap();

    path
}

#[test]
fn unsaveable_image_keeps_ball() {
    let mut ball = ball();
    let before = ball_pixels(&ball);
    let dir = tempfile::tempdir().unwrap();
    let photo_path = photo(dir.path());

    let save_path = dir.path().join("missing").join("ball.png");
    let result = ball.new_ball_from_image(&photo_path, &save_path);

    assert!(matches!(result, Err(ImageImportError::Save { .. })));
    assert!(!save_path.exists());
    assert_eq!(ball_pixels(&ball), before);
}

#[test]
#[cfg(target_os = "linux")]
fn full_disk_keeps_ball() {
    let mut ball = ball();
    let before = ball_pixels(&ball);
    let dir = tempfile::tempdir().unwrap();
    let photo_path = photo(dir.path());

    // Opening succeeds but every write fails
    let result = ball.new_ball_from_image(&photo_path, "/dev/full");

    assert!(matches!(result, Err(ImageImportError::Save { .. })));
    assert_eq!(ball_pixels(&ball), before);
}

#[test]
fn new_ball_missing_file_is_an_error() {
    let mut ball = ball();
    let before = ball_pixels(&ball);

    assert!(ball.new_ball("does/not/exist.svg").is_err());
    assert_eq!(ball_pixels(&ball), before);
}

#[test]
fn new_ball_keeps_positions() {
    let mut ball = ball();
    ball.move_ball((7, 8));
    ball.new_ball_from_fraction(0.25).unwrap();

    ball.new_ball(BALL_SVG).unwrap();

    assert_eq!((ball.ball_x(), ball.ball_y()), (7, 8));
    assert!((0..8).all(|index| ball.frame_y(index) == -120));
}

#[test]
fn custom_layer() {
    let ball = Ball::new(BALL_SVG, BallConfig::default().with_layer(9)).unwrap();

    assert!(ball.sprites().all(|sprite| sprite.layer() == 9));
}
