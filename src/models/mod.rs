//! Each color space/notation is modeled with its own type. Conversions are
//! only implemented on relevant models.

use crate::color::{Color, Component};

pub mod hsb;
pub mod hsl;
pub mod hwb;
pub mod rgb;

pub use hsb::Hsb;
pub use hsl::Hsl;
pub use hwb::Hwb;
pub use rgb::Srgb;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model: Sized {
    /// Convert a model to a generic [`Color`]. NaN components are marked as
    /// missing.
    fn to_color(&self, alpha: Option<Component>) -> Color;

    /// Convert a generic [`Color`] to a model. Missing components are read as
    /// zero.
    fn from_color(color: &Color) -> Self;
}
