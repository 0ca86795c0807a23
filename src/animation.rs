//! Easter egg animation of the ball getting punctured and deflating.
//!
//! The animation is a flip-book of [`FRAME_COUNT`] pre-rendered frames.
//! Which frame is visible is decided by the tick counter of the game loop through the [`ANIMATION`] table.

use glamour::Size2;

use crate::svg;

/// Amount of pre-rendered animation frames.
pub const FRAME_COUNT: usize = 8;

/// Swap of the visible animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct FrameSwitch {
    /// Frame that is currently visible and will be hidden.
    pub hide: usize,
    /// Frame that will take the place of the hidden frame.
    pub show: usize,
}

impl FrameSwitch {
    /// Construct a new switch.
    #[inline]
    #[must_use]
    pub const fn new(hide: usize, show: usize) -> Self {
        Self { hide, show }
    }
}

/// Tick counter values at which a frame switch happens, sorted by tick.
pub const ANIMATION: [(u32, FrameSwitch); 17] = [
    (10, FrameSwitch::new(0, 1)),
    (15, FrameSwitch::new(1, 2)),
    (20, FrameSwitch::new(2, 1)),
    (25, FrameSwitch::new(1, 2)),
    (30, FrameSwitch::new(2, 1)),
    (35, FrameSwitch::new(1, 2)),
    (40, FrameSwitch::new(2, 3)),
    (45, FrameSwitch::new(3, 4)),
    (50, FrameSwitch::new(4, 3)),
    (55, FrameSwitch::new(3, 4)),
    (60, FrameSwitch::new(4, 3)),
    (65, FrameSwitch::new(3, 4)),
    (70, FrameSwitch::new(4, 5)),
    (75, FrameSwitch::new(5, 6)),
    (80, FrameSwitch::new(6, 5)),
    (85, FrameSwitch::new(5, 6)),
    (90, FrameSwitch::new(6, 7)),
];

/// Find the frame switch for a tick, `None` if nothing should happen.
#[inline]
#[must_use]
pub fn switch_for_tick(tick: u32) -> Option<FrameSwitch> {
    ANIMATION
        .binary_search_by_key(&tick, |(key, _)| *key)
        .ok()
        .map(|index| ANIMATION[index].1)
}

/// Opening group of every frame, squashing and tilting the ball.
///
/// The last frame is the ball completely flattened.
pub const TRANSFORMS: [&str; FRAME_COUNT] = [
    "<g>",
    "<g transform=\"matrix(0.83251323,0.17764297,-0.48065174,1.0074555,27.969568,-8.7531294)\">",
    "<g transform=\"matrix(-0.83251323,0.17764297,0.48065174,1.0074555,57.030432,-8.7531294)\">",
    "<g transform=\"matrix(0.57147881,-0.357582,-0.32994345,0.96842187,32.525583,15.686767)\">",
    "<g transform=\"matrix(-0.57147881,-0.357582,0.32994345,0.96842187,52.474417,15.686767)\">",
    "<g transform=\"matrix(0.39557109,-0.57943591,-0.22838308,0.86196565,35.595823,29.733447)\">",
    "<g transform=\"matrix(-0.39557109,-0.57943591,0.22838308,0.86196565,49.404177,29.733447)\">",
    "<g transform=\"matrix(1,0,0,0.08410415,0,73.873449)\">",
];

/// Crossed marks where the ball got punctured.
pub const PUNCTURE: &str = r##"  <g transform="translate(2.5316175, -8)">
    <path d="m 33.19688,68.961518 c 3.900378,7.602149 10.970659,7.634416 13.708164,7.432138"
       style="fill:none;stroke:#000000;stroke-width:2;stroke-linecap:round;stroke-miterlimit:4" />
    <path d="m 33.031721,77.05429 c 8.199837,0.123635 12.819227,-7.570626 12.882372,-8.423089"
       style="fill:none;stroke:#000000;stroke-width:2;stroke-linecap:round;stroke-miterlimit:4" />
  </g>"##;

/// Lines of air escaping from the puncture.
pub const AIR: &str = r##"  <g transform="matrix(0.63786322,0,0,0.64837179,17.379518,68.534252)">
    <path d="M 39.054054,1.75 C 37.741313,16.51834 25.926641,23.082047 25.926641,23.082047 l 0,0"
       style="fill:none;stroke:#0ac9fb;stroke-width:6.0;stroke-linecap:round;stroke-miterlimit:4;" />
    <path d="m 39.710425,1.75 c 1.312741,14.76834 13.127413,21.332047 13.127413,21.332047 l 0,0"
       style="fill:none;stroke:#0ac9fb;stroke-width:6.0;stroke-linecap:round;stroke-miterlimit:4" />
    <path d="m 39.054054,1.75 c 1.969112,3.281854 -0.656371,20.347491 -0.656371,20.347491 l 0,0"
       style="fill:none;stroke:#0ac9fb;stroke-width:6.0;stroke-linecap:round;stroke-miterlimit:4" />
  </g>"##;

/// Complete SVG document of a single animation frame.
///
/// # Arguments
///
/// * `index` - Frame number, selects the transform.
/// * `payload` - Body of the ball SVG document, see [`svg::extract_payload`].
/// * `size` - Size of the frame document.
///
/// # Panics
///
/// - When `index` is not smaller than [`FRAME_COUNT`].
#[inline]
#[must_use]
pub fn frame_svg(index: usize, payload: &str, size: Size2<u32>) -> String {
    [
        svg::header(size.width as f32, size.height as f32, 1.0).as_str(),
        TRANSFORMS[index],
        payload,
        PUNCTURE,
        AIR,
        "</g>",
        svg::footer(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use glamour::Size2;

    use super::{FrameSwitch, ANIMATION, FRAME_COUNT};

    #[test]
    fn table_is_sorted_and_in_range() {
        assert!(ANIMATION.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert!(ANIMATION
            .iter()
            .all(|(_, switch)| switch.hide < FRAME_COUNT && switch.show < FRAME_COUNT));
    }

    #[test]
    fn table_forms_a_chain() {
        // Every switch must hide the frame that the previous switch showed
        let mut visible = 0;
        for (_, switch) in ANIMATION {
            assert_eq!(switch.hide, visible);
            visible = switch.show;
        }
        assert_eq!(visible, FRAME_COUNT - 1);
    }

    #[test]
    fn lookup() {
        assert_eq!(super::switch_for_tick(10), Some(FrameSwitch::new(0, 1)));
        assert_eq!(super::switch_for_tick(90), Some(FrameSwitch::new(6, 7)));
        assert_eq!(super::switch_for_tick(0), None);
        assert_eq!(super::switch_for_tick(11), None);
        assert_eq!(super::switch_for_tick(95), None);
    }

    #[test]
    fn frame_document_is_balanced() {
        let svg = super::frame_svg(7, "<circle r=\"5\"/>", Size2::new(85, 120));

        assert!(svg.contains("matrix(1,0,0,0.08410415,0,73.873449)"));
        assert!(svg.contains("<circle r=\"5\"/>"));
        assert_eq!(svg.matches("<g").count(), svg.matches("</g>").count());
    }
}
