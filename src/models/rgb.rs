//! Model a color in the sRGB color space.

use crate::color::{Component, HasSpace, Space};

hexswatch_macros::gen_model! {
    /// A color specified in the gamma encoded sRGB color space.
    pub struct Srgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl HasSpace for Srgb {
    const SPACE: Space = Space::Srgb;
}

impl Srgb {
    /// Create a color from 8-bit channel values.
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        use crate::math::from_u8;

        Self::new(from_u8(red), from_u8(green), from_u8(blue))
    }

    /// Return the 8-bit channel values of the color, clamped to the sRGB
    /// gamut.
    pub fn to_u8(&self) -> [u8; 3] {
        use crate::math::to_u8;

        [to_u8(self.red), to_u8(self.green), to_u8(self.blue)]
    }
}
