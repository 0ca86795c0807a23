//! Turn SVG documents and image files into pixel buffers, and pixel buffers into PNG files.

use std::path::Path;

use image::{imageops::FilterType, RgbaImage};
use imgref::ImgVec;
use png::{BitDepth, ColorType, Encoder};
use resvg::{
    tiny_skia::{Pixmap, Transform},
    usvg::{Options, Tree},
};
use rgb::RGBA8;

use crate::error::{PngError, RenderError};

/// Render an SVG document into an un-premultiplied RGBA image.
///
/// The size of the image is the size of the SVG document rounded to whole pixels.
///
/// # Errors
///
/// - When the SVG could not be parsed.
/// - When the document has no area.
#[inline]
pub fn svg_to_image(svg: &str) -> Result<ImgVec<RGBA8>, RenderError> {
    // Parse the document
    let tree = Tree::from_str(svg, &Options::default())?;

    let size = tree.size().to_int_size();
    let mut pixmap =
        Pixmap::new(size.width(), size.height()).ok_or(RenderError::EmptySize)?;

    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied colors, sprites are blended straight
    let pixels = pixmap
        .pixels()
        .iter()
        .map(|pixel| {
            let color = pixel.demultiply();

            RGBA8::new(color.red(), color.green(), color.blue(), color.alpha())
        })
        .collect();

    Ok(ImgVec::new(
        pixels,
        size.width() as usize,
        size.height() as usize,
    ))
}

/// Cut the biggest centered square out of an image.
///
/// The side of the square is the smallest dimension, the longest dimension is cropped evenly on both sides.
#[inline]
#[must_use]
pub fn crop_square(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();

    let (x, y, side) = if width > height {
        ((width - height) / 2, 0, height)
    } else {
        (0, (height - width) / 2, width)
    };

    image::imageops::crop_imm(image, x, y, side, side).to_image()
}

/// Load a photo from disk, crop it to a centered square and scale it bilinearly.
///
/// # Arguments
///
/// * `path` - Any image file format the decoder understands.
/// * `side` - Width and height in pixels of the resulting image.
///
/// # Errors
///
/// - When the file can't be read.
/// - When the file is not a supported image.
#[inline]
pub fn load_square_photo(path: impl AsRef<Path>, side: u32) -> Result<RgbaImage, image::ImageError> {
    let photo = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .into_rgba8();

    let crop = crop_square(&photo);

    Ok(image::imageops::resize(
        &crop,
        side,
        side,
        FilterType::Triangle,
    ))
}

/// Encode 8 bit RGBA pixels as a complete PNG file in memory.
///
/// # Errors
///
/// - When the amount of pixels doesn't match the size.
#[inline]
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, PngError> {
    let mut bytes = Vec::new();

    let mut encoder = Encoder::new(&mut bytes, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    // Writes the end chunk, dropping the writer would swallow its error
    writer.finish()?;

    Ok(bytes)
}

/// Write 8 bit RGBA pixels as a PNG file.
///
/// # Errors
///
/// - When the amount of pixels doesn't match the size.
/// - When the file can't be written completely.
#[inline]
pub fn write_png(path: impl AsRef<Path>, width: u32, height: u32, rgba: &[u8]) -> Result<(), PngError> {
    let bytes = encode_png(width, height, rgba)?;

    write_file(path.as_ref(), &bytes)
}

/// Write already encoded PNG bytes to disk in one go.
///
/// # Errors
///
/// - When the file can't be written completely.
#[inline]
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), PngError> {
    std::fs::write(path, bytes).map_err(|source| PngError::Write {
        path: path.to_path_buf(),
        source,
    })
}
