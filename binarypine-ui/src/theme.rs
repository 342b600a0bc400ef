//! Color themes

use embedded_graphics::pixelcolor::{PixelColor, RgbColor};

/// Light or dark appearance of the watchface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Colors used to draw the face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette<C: PixelColor> {
    /// Color of a set bit and of the frame around an unset bit
    pub on: C,
    /// Color of the hole in an unset bit, also used as background
    pub off: C,
}

impl Theme {
    pub fn palette<C: RgbColor>(self) -> Palette<C> {
        match self {
            Theme::Dark => Palette {
                on: C::WHITE,
                off: C::BLACK,
            },
            Theme::Light => Palette {
                on: C::BLACK,
                off: C::WHITE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb565;

    #[test]
    fn test_dark_is_white_on_black() {
        let palette: Palette<Rgb565> = Theme::Dark.palette();
        assert_eq!(palette.on, Rgb565::WHITE);
        assert_eq!(palette.off, Rgb565::BLACK);
    }

    #[test]
    fn test_light_is_inverted_dark() {
        let dark: Palette<Rgb565> = Theme::Dark.palette();
        let light: Palette<Rgb565> = Theme::Light.palette();
        assert_eq!(light.on, dark.off);
        assert_eq!(light.off, dark.on);
    }
}
