//! Small SVG document builders.
//!
//! Everything here produces plain strings, turning them into pixels is done by [`crate::raster`].

use std::{f32::consts::PI, fmt::Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use glamour::Size2;

/// Opening of an SVG document.
///
/// Must be closed with [`footer`].
///
/// # Arguments
///
/// * `width` - Unscaled width of the document in pixels.
/// * `height` - Unscaled height of the document in pixels.
/// * `scale` - Factor applied to both the document size and all of its contents.
#[inline]
#[must_use]
pub fn header(width: f32, height: f32, scale: f32) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
         <svg\n   \
         xmlns:svg=\"http://www.w3.org/2000/svg\"\n   \
         xmlns=\"http://www.w3.org/2000/svg\"\n   \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\"\n   \
         version=\"1.1\"\n   \
         width=\"{:.6}\"\n   \
         height=\"{:.6}\">\n\
         <g\n       transform=\"matrix({scale:.6},0,0,{scale:.6},0,0)\">\n",
        width * scale,
        height * scale,
    )
}

/// Closing of an SVG document started with [`header`].
#[inline]
#[must_use]
pub const fn footer() -> &'static str {
    "</g>\n</svg>\n"
}

/// Rounded rectangle.
///
/// # Arguments
///
/// * `width` - Horizontal size in pixels.
/// * `height` - Vertical size in pixels.
/// * `rx` - Horizontal corner radius.
/// * `ry` - Vertical corner radius.
/// * `x` - Left side.
/// * `y` - Top side.
/// * `fill` - CSS fill color, `"none"` for no fill.
/// * `stroke` - CSS stroke color, `"none"` for no stroke.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn rect(
    width: f32,
    height: f32,
    rx: f32,
    ry: f32,
    x: f32,
    y: f32,
    fill: &str,
    stroke: &str,
) -> String {
    format!(
        "       <rect\n          \
         width=\"{width:.6}\"\n          \
         height=\"{height:.6}\"\n          \
         rx=\"{rx:.6}\"\n          \
         ry=\"{ry:.6}\"\n          \
         x=\"{x:.6}\"\n          \
         y=\"{y:.6}\"\n{}",
        style(fill, stroke)
    )
}

/// Circular sector starting at twelve o'clock and sweeping counter-clockwise.
///
/// An angle of `2π` would collapse into an empty arc, use a value slightly below it for a full disc.
///
/// # Arguments
///
/// * `x` - Horizontal center of the circle.
/// * `y` - Vertical center of the circle.
/// * `radius` - Radius of the circle.
/// * `angle` - Size of the wedge in radians.
/// * `fill` - CSS fill color.
/// * `stroke` - CSS stroke color.
#[inline]
#[must_use]
pub fn sector(x: f32, y: f32, radius: f32, angle: f32, fill: &str, stroke: &str) -> String {
    let big_arc = u8::from(angle >= PI);
    let (sin, cos) = angle.sin_cos();

    format!(
        "<path d=\"M{x:.6},{y:.6} v{:.6} a{radius:.6},{radius:.6} 0 {big_arc},0 {:.6},{:.6} z\"\n{}",
        -radius,
        -sin * radius,
        radius - cos * radius,
        style(fill, stroke)
    )
}

/// Take the body of an SVG document, everything between the `<svg ..>` opening tag and `</svg>`.
///
/// Returns an empty string when there's no `<svg` element.
/// When the closing tag is missing everything after the opening tag is returned.
#[inline]
#[must_use]
pub fn extract_payload(svg: &str) -> &str {
    let Some(start) = svg.find("<svg") else {
        return "";
    };
    let after_svg = &svg[start + "<svg".len()..];

    // Skip the attributes of the root element
    let Some(close) = after_svg.find('>') else {
        return "";
    };
    let body = &after_svg[close + 1..];

    body.find("</svg>").map_or(body, |end| &body[..end])
}

/// Complete ball document showing a photo clipped to a circle underneath the label box.
///
/// The photo is embedded as a base64 PNG data URI so the document doesn't depend on any external files.
///
/// # Arguments
///
/// * `png` - Encoded PNG bytes of a square photo.
/// * `size` - Size of the whole ball sprite.
/// * `label_box` - Size of the label box at the top of the sprite.
#[inline]
#[must_use]
pub fn ball_from_png(png: &[u8], size: Size2<u32>, label_box: Size2<u32>) -> String {
    let diameter = size.width as f32;
    let radius = diameter / 2.0;
    let top = label_box.height as f32;

    let mut svg = header(size.width as f32, size.height as f32, 1.0);
    // Infallible when writing into a string
    let _ = write!(
        svg,
        "<defs>\n  <clipPath id=\"ball-clip\">\n    \
         <circle cx=\"{radius:.6}\" cy=\"{:.6}\" r=\"{:.6}\" />\n  \
         </clipPath>\n</defs>\n\
         <image width=\"{diameter:.6}\" height=\"{diameter:.6}\" x=\"0\" y=\"{top:.6}\" \
         clip-path=\"url(#ball-clip)\" xlink:href=\"data:image/png;base64,{}\" />\n",
        top + radius,
        radius - 1.0,
        STANDARD.encode(png),
    );
    svg.push_str(footer());

    svg
}

/// Style attribute closing an element.
fn style(fill: &str, stroke: &str) -> String {
    format!("style=\"fill:{fill};stroke:{stroke};\"/>\n")
}
