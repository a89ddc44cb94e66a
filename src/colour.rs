/// A colour, expressed as an 8-bit-per-channel RGBA quadruple. Icons render to
/// an RGBA canvas, so an alpha component is always carried; the opaque
/// constructors fill it in as `0xff`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
            a: 0xff,
        }
    }

    /// Create a new opaque colour. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 0xff }
    }

    /// Create a new colour with alpha. All components range from 0.0 to 1.0
    pub fn new_rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Colour {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
            a: (a * 255.0).round() as u8,
        }
    }

    /// Create a new colour with alpha. All components range from 0 to 255
    pub const fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new opaque grey, where g ranges from 0.0 (black) to 1.0 (white)
    pub fn new_grey(g: f32) -> Colour {
        let g = (g * 255.0).round() as u8;
        Colour { r: g, g, b: g, a: 0xff }
    }

    /// Create a new opaque grey, where g ranges from 0 (black) to 255 (white)
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour { r: g, g, b: g, a: 0xff }
    }

    /// This colour with its alpha scaled by a coverage fraction in 0.0 to 1.0,
    /// as reported for antialiased glyph and border edges
    pub fn with_coverage(self, coverage: f32) -> Colour {
        Colour {
            a: (f32::from(self.a) * coverage.clamp(0.0, 1.0)).round() as u8,
            ..self
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::new_rgb(c.0.into(), c.1.into(), c.2.into())
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb(r.into(), g.into(), b.into())
    }
}

impl<T: Into<f32>> From<(T, T, T, T)> for Colour {
    fn from(c: (T, T, T, T)) -> Self {
        Colour::new_rgba(c.0.into(), c.1.into(), c.2.into(), c.3.into())
    }
}

impl<T: Into<f32>> From<[T; 4]> for Colour {
    fn from(c: [T; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::new_rgba(r.into(), g.into(), b.into(), a.into())
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> image::Rgba<u8> {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0x00);
    pub const WHITE: Colour = Colour::new_grey_bytes(0xff);
    pub const GREY: Colour = Colour::new_grey_bytes(0x80);
    pub const RED: Colour = Colour::new_rgb_bytes(0xff, 0x00, 0x00);
    pub const GREEN: Colour = Colour::new_rgb_bytes(0x00, 0xff, 0x00);
    pub const BLUE: Colour = Colour::new_rgb_bytes(0x00, 0x00, 0xff);
    pub const TRANSPARENT: Colour = Colour::new_rgba_bytes(0x00, 0x00, 0x00, 0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_components_round_to_bytes() {
        assert_eq!(Colour::new_rgb(1.0, 0.0, 0.5), Colour::new_rgb_bytes(255, 0, 128));
        assert_eq!(Colour::new_grey(1.0), colours::WHITE);
    }

    #[test]
    fn tuples_and_arrays_convert() {
        assert_eq!(Colour::from((1.0f32, 1.0, 1.0)), colours::WHITE);
        assert_eq!(Colour::from([0.0f32, 0.0, 0.0, 0.0]), colours::TRANSPARENT);
    }

    #[test]
    fn coverage_scales_alpha_only() {
        let faded = colours::BLACK.with_coverage(0.5);
        assert_eq!(faded.a, 128);
        assert_eq!((faded.r, faded.g, faded.b), (0, 0, 0));
        assert_eq!(colours::BLACK.with_coverage(2.0), colours::BLACK);
    }
}
