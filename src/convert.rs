//! Conversions between the supported color models. Every notation is a
//! different view of the sRGB color space, so conversions between notations
//! pass through [`Srgb`].
//!
//! Conversions only operate on the 3 color components (no alpha, missing
//! components).
//!
//! NOTE: When a conversion yields a NaN value, the component is powerless and
//!       should be treated as missing.
//! NOTE: The reverse is not the same. Passing a value of NaN to a conversion
//!       will treat the value as 0.0.
//!
//! ```rust
//! use hexswatch::models::Srgb;
//! let hsb = Srgb::new(1.0, 0.0, 0.0).to_hsb();
//! assert_eq!(hsb.hue, 0.0);
//! assert_eq!(hsb.brightness, 1.0);
//! ```

use crate::{
    color::{Color, Space},
    models::{Hsb, Hsl, Hwb, Model, Srgb},
};

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation. Alpha, including a missing alpha, is
    /// carried over.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return self.clone();
        }

        let srgb = match self.space {
            S::Srgb => Srgb::from_color(self),
            S::Hsb => Hsb::from_color(self).to_srgb(),
            S::Hsl => Hsl::from_color(self).to_srgb(),
            S::Hwb => Hwb::from_color(self).to_srgb(),
        };

        match space {
            S::Srgb => srgb.to_color(self.alpha()),
            S::Hsb => srgb.to_hsb().to_color(self.alpha()),
            S::Hsl => srgb.to_hsl().to_color(self.alpha()),
            S::Hwb => srgb.to_hwb().to_color(self.alpha()),
        }
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        util::rgb_to_hsb(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        util::rgb_to_hwb(&self.to_components()).into()
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsb_to_rgb(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl Hwb {
    /// Convert this color from the HWB notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hwb_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = from.map(normalize);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if !almost_zero(delta) {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSB notation.
    pub fn rgb_to_hsb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if almost_zero(max) {
            0.0
        } else {
            (max - min) / max
        };

        Components(hue, saturation, max)
    }

    /// Convert from HSB notation to RGB notation.
    pub fn hsb_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(brightness, brightness, brightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                brightness - brightness * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to HWB notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
    pub fn rgb_to_hwb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        Components(hue, min, 1.0 - max)
    }

    /// Convert from HWB notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn hwb_to_rgb(from: &Components) -> Components {
        let Components(hue, whiteness, blackness) = from.map(normalize);

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Components(gray, gray, gray);
        }

        let rgb = hsl_to_rgb(&Components(hue, 1.0, 0.5));
        rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::{Color, Component, Space};

    #[test]
    fn test_conversions() {
        use Space as S;

        // chocolate, rgb(210 105 30)
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(Space, Component, Component, Component, Space, Component, Component, Component)] = &[
            (S::Srgb, 0.8235294, 0.4117647, 0.1176471, S::Srgb, 0.8235294, 0.4117647, 0.1176471),
            (S::Srgb, 0.8235294, 0.4117647, 0.1176471, S::Hsb, 25.000000, 0.8571429, 0.8235294),
            (S::Srgb, 0.8235294, 0.4117647, 0.1176471, S::Hsl, 25.000000, 0.7500000, 0.4705882),
            (S::Srgb, 0.8235294, 0.4117647, 0.1176471, S::Hwb, 25.000000, 0.1176471, 0.1764706),
            (S::Hsb, 25.000000, 0.8571429, 0.8235294, S::Srgb, 0.8235294, 0.4117647, 0.1176471),
            (S::Hsb, 25.000000, 0.8571429, 0.8235294, S::Hsl, 25.000000, 0.7500000, 0.4705882),
            (S::Hsb, 25.000000, 0.8571429, 0.8235294, S::Hwb, 25.000000, 0.1176471, 0.1764706),
            (S::Hsl, 25.000000, 0.7500000, 0.4705882, S::Srgb, 0.8235294, 0.4117647, 0.1176471),
            (S::Hsl, 25.000000, 0.7500000, 0.4705882, S::Hsb, 25.000000, 0.8571429, 0.8235294),
            (S::Hsl, 25.000000, 0.7500000, 0.4705882, S::Hwb, 25.000000, 0.1176471, 0.1764706),
            (S::Hwb, 25.000000, 0.1176471, 0.1764706, S::Srgb, 0.8235294, 0.4117647, 0.1176471),
            (S::Hwb, 25.000000, 0.1176471, 0.1764706, S::Hsb, 25.000000, 0.8571429, 0.8235294),
            (S::Hwb, 25.000000, 0.1176471, 0.1764706, S::Hsl, 25.000000, 0.7500000, 0.4705882),
        ];

        for &(source_space, source_0, source_1, source_2, dest_space, dest_0, dest_1, dest_2) in
            TESTS
        {
            println!("{:?} -> {:?}", source_space, dest_space);
            let source = Color::new(source_space, source_0, source_1, source_2, 1.0);
            let dest = source.to_space(dest_space);
            assert_eq!(dest.space, dest_space);
            assert_component_eq!(dest.components.0, dest_0);
            assert_component_eq!(dest.components.1, dest_1);
            assert_component_eq!(dest.components.2, dest_2);
        }
    }

    #[test]
    fn hue_is_powerless_if_there_is_no_chroma() {
        assert!(Srgb::new(1.0, 1.0, 1.0).to_hsb().hue.is_nan());
        assert!(Srgb::new(0.0, 0.0, 0.0).to_hsb().hue.is_nan());
        assert!(Srgb::new(0.5, 0.5, 0.5).to_hsl().hue.is_nan());

        let gray = Color::new(Space::Srgb, 0.5, 0.5, 0.5, 1.0).to_space(Space::Hsb);
        assert_eq!(gray.c0(), None);
        assert_eq!(gray.c1(), Some(0.0));
        assert_eq!(gray.c2(), Some(0.5));
    }

    #[test]
    fn primaries_to_hsb() {
        let red = Srgb::new(1.0, 0.0, 0.0).to_hsb();
        assert_eq!(red, Hsb::new(0.0, 1.0, 1.0));

        let green = Srgb::new(0.0, 1.0, 0.0).to_hsb();
        assert_component_eq!(green.hue, 120.0);

        let blue = Srgb::new(0.0, 0.0, 1.0).to_hsb();
        assert_component_eq!(blue.hue, 240.0);

        let magenta = Srgb::new(1.0, 0.0, 1.0).to_hsb();
        assert_component_eq!(magenta.hue, 300.0);
    }

    #[test]
    fn hsb_to_rgb() {
        let srgb = Hsb::new(200.0, 0.5, 0.8).to_srgb();
        assert_component_eq!(srgb.red, 0.4);
        assert_component_eq!(srgb.green, 0.6666667);
        assert_component_eq!(srgb.blue, 0.8);

        // Hue wraps around.
        let srgb = Hsb::new(360.0, 1.0, 1.0).to_srgb();
        assert_eq!(srgb, Srgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn hwb_to_rgb() {
        // hwb(40deg 30% 40%)
        let hwb = Color::new(Space::Hwb, 40.0, 0.3, 0.4, 1.0);
        // rgb(153, 128, 77)
        let srgb = hwb.to_space(Space::Srgb);

        assert_component_eq!(srgb.components.0, 0.6);
        assert_component_eq!(srgb.components.1, 0.5);
        assert_component_eq!(srgb.components.2, 0.3);
    }

    #[test]
    fn converting_a_color_should_maintain_source_alpha() {
        let hsl = Color::new(Space::Hsl, 120.0, 0.4, 0.4, None);
        let srgb = hsl.to_space(Space::Srgb);
        assert!(srgb.alpha().is_none());

        let srgb = Color::new(Space::Srgb, 0.2, 0.4, 0.6, 0.25);
        assert_eq!(srgb.to_space(Space::Hsb).alpha(), Some(0.25));
    }

    #[test]
    fn rgb_to_hsl() {
        // color(srgb 0.46 0.52 0.28 / 0.5)
        let srgb = Color::new(Space::Srgb, 0.46, 0.52, 0.28, 0.5);
        let hsl = srgb.to_space(Space::Hsl);
        assert_component_eq!(hsl.components.0, 75.0);
        assert_component_eq!(hsl.components.1, 0.3);
        assert_component_eq!(hsl.components.2, 0.4);
    }
}
