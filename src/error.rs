//! Errors of rendering SVG documents, writing PNG files and replacing the ball with a photo.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// What happened when replacing the ball with a photo succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageImport {
    /// No photo was chosen, the ball stays the same.
    Skipped,
    /// The ball shows the cropped photo.
    Loaded,
}

/// Replacing the ball with a photo failed, the ball stays the same.
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum ImageImportError {
    /// Photo could not be read or decoded.
    #[error("Could not load image from '{path}': {source}")]
    #[diagnostic(help("supported formats are PNG, JPEG, GIF, WebP and BMP"))]
    Load {
        /// File that was being read.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// Cropped photo could not be encoded or written.
    #[error("Could not save cropped image to '{path}': {source}")]
    Save {
        /// File that was being written.
        path: PathBuf,
        /// Underlying encoding or I/O error.
        #[source]
        source: PngError,
    },
    /// Ball document with the photo could not be rendered.
    #[error("Could not render the ball from '{path}': {source}")]
    Render {
        /// Saved photo that was embedded.
        path: PathBuf,
        /// Underlying rendering error.
        #[source]
        source: RenderError,
    },
}

/// SVG document could not be turned into pixels.
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum RenderError {
    /// Document is not valid SVG.
    #[error("Error parsing SVG document: {0}")]
    Parse(#[from] resvg::usvg::Error),
    /// Document has no area to draw on.
    #[error("SVG document has an empty size")]
    EmptySize,
}

/// Pixels could not be stored as a PNG file.
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum PngError {
    /// Pixels don't fit the size or the encoder failed.
    #[error("Error encoding PNG: {0}")]
    Encode(#[from] png::EncodingError),
    /// Encoded bytes could not be written to disk.
    #[error("Error writing PNG file '{path}': {source}")]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
