//! Ball configuration.

use std::str::FromStr;

use glamour::{Point2, Size2};
use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;

/// Initial ball configuration passed to [`crate::Ball::new`].
///
/// There's three ways to initialize the config:
///
/// # Example
///
/// ```rust
/// # use fraction_ball::{BallConfig, ThemeColors};
/// BallConfig {
///   layer: 5,
///   ..Default::default()
/// };
/// ```
///
/// # Example
///
/// ```rust
/// # use fraction_ball::{BallConfig, ThemeColors};
/// BallConfig::default().with_colors("#00EA11,#F8E800".parse::<ThemeColors>().unwrap());
/// ```
///
/// # Example
///
/// ```rust
/// # use fraction_ball::BallConfig;
/// BallConfig::from_toml("layer = 2\ncolors = { stroke = \"#000000\", fill = \"#FFFFFF\" }").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Colors of the fraction sectors.
    ///
    /// Defaults to the red and blue colors of [`ThemeColors::default`].
    pub colors: ThemeColors,
    /// Size of the ball sprite and of every animation frame.
    ///
    /// Defaults to `(85, 120)`.
    pub size: Size2<u32>,
    /// Size of the label box at the top of the ball sprite.
    ///
    /// The ball itself is drawn underneath it.
    ///
    /// Defaults to `(85, 32)`.
    pub label_box: Size2<u32>,
    /// Layer the ball and the animation frames are drawn on.
    ///
    /// Defaults to `3`.
    pub layer: u8,
}

impl BallConfig {
    /// Parse the configuration from TOML, missing fields are filled with defaults.
    ///
    /// # Errors
    ///
    /// - When the TOML is invalid or a field has the wrong type.
    #[inline]
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text)
            .into_diagnostic()
            .wrap_err("Error parsing ball configuration")
    }

    /// Set the colors of the fraction sectors.
    #[inline]
    #[must_use]
    pub fn with_colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;

        self
    }

    /// Set the size of the ball sprite and of every animation frame.
    #[inline]
    #[must_use]
    pub fn with_size(mut self, size: impl Into<Size2<u32>>) -> Self {
        self.size = size.into();

        self
    }

    /// Set the size of the label box at the top of the ball sprite.
    #[inline]
    #[must_use]
    pub fn with_label_box(mut self, label_box: impl Into<Size2<u32>>) -> Self {
        self.label_box = label_box.into();

        self
    }

    /// Set the layer the ball and the animation frames are drawn on.
    #[inline]
    #[must_use]
    pub const fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;

        self
    }

    /// Radius of the ball, half of the width.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.size.width as f32 / 2.0
    }

    /// Position above the canvas where hidden animation frames are parked.
    pub(crate) fn hidden_position(&self) -> Point2<i32> {
        // Heights beyond the coordinate range park the frame as far up as possible
        Point2::new(0, i32::try_from(self.size.height).map_or(i32::MIN, |height| -height))
    }
}

impl Default for BallConfig {
    #[inline]
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            size: Size2::new(85, 120),
            label_box: Size2::new(85, 32),
            layer: 3,
        }
    }
}

/// Pair of user theme colors.
///
/// Can be parsed from the `"stroke,fill"` profile color format.
///
/// # Example
///
/// ```rust
/// # use fraction_ball::ThemeColors;
/// let colors = "#FF2B34,#005FE4".parse::<ThemeColors>().unwrap();
/// assert_eq!(colors.stroke, "#FF2B34");
/// assert_eq!(colors.fill, "#005FE4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[non_exhaustive]
pub struct ThemeColors {
    /// First profile color, fills the background disc and outlines the fraction sector.
    pub stroke: String,
    /// Second profile color, fills the fraction sector and outlines the background disc.
    pub fill: String,
}

impl ThemeColors {
    /// Create from two CSS colors.
    #[inline]
    #[must_use]
    pub fn new(stroke: impl Into<String>, fill: impl Into<String>) -> Self {
        let stroke = stroke.into();
        let fill = fill.into();

        Self { stroke, fill }
    }
}

impl Default for ThemeColors {
    #[inline]
    fn default() -> Self {
        Self::new("#FF2B34", "#005FE4")
    }
}

impl FromStr for ThemeColors {
    type Err = miette::Report;

    #[inline]
    fn from_str(profile: &str) -> Result<Self> {
        let (stroke, fill) = profile
            .split_once(',')
            .ok_or_else(|| miette!("Theme colors '{profile}' must be formatted as 'stroke,fill'"))?;

        let (stroke, fill) = (stroke.trim(), fill.trim());
        if stroke.is_empty() || fill.is_empty() || fill.contains(',') {
            return Err(miette!(
                "Theme colors '{profile}' must contain exactly two colors"
            ));
        }

        Ok(Self::new(stroke, fill))
    }
}
