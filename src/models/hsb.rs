//! Model a color with the HSB (HSV) notation in the sRGB color space.

use crate::color::{Component, HasSpace, Space};

hexswatch_macros::gen_model! {
    /// A color specified with the HSB notation in the sRGB color space.
    pub struct Hsb {
        /// The hue component of the color in degrees.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The brightness component of the color.
        pub brightness: Component,
    }
}

impl HasSpace for Hsb {
    const SPACE: Space = Space::Hsb;
}
