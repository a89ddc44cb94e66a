use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};

/// A measurement in rendered pixels. This is the unit all layout maths is
/// performed in: fragment widths, line widths, and the canvas width budget are
/// all [Px] values at a fixed dpi.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, From,
    Into, Display,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    /// Round to the nearest whole pixel, staying in [Px]
    pub fn round(self) -> Px {
        Px(self.0.round())
    }
}

impl std::ops::Mul<f32> for Px {
    type Output = Px;
    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;
    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

/// A measurement in typographic points (1pt = 1/72 inch). Font sizes are
/// specified in points and converted to pixels at the rendering dpi.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, From, Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Pt {
    /// Convert to pixels at the given dpi: `px = pt * dpi / 72`
    pub fn to_px(self, dpi: f32) -> Px {
        Px(self.0 * dpi / 72.0)
    }
}

/// A measurement in inches. Canvas dimensions are specified in inches and
/// converted to pixels at the rendering dpi.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, From, Into,
    Display,
)]
#[display("{_0}in")]
pub struct In(pub f32);

impl In {
    /// Convert to pixels at the given dpi: `px = in * dpi`
    pub fn to_px(self, dpi: f32) -> Px {
        Px(self.0 * dpi)
    }
}
