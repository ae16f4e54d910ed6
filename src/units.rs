use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length on the menu canvas, measured in (display) pixels
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub f64);

/// A font size, measured in points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Round down to a whole pixel
    pub fn floor(self) -> Px {
        Px(self.0.floor())
    }

    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Pt {
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

impl Mul<f64> for Px {
    type Output = Px;

    fn mul(self, rhs: f64) -> Px {
        Px(self.0 * rhs)
    }
}

impl Mul<Px> for f64 {
    type Output = Px;

    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl Div<f64> for Px {
    type Output = Px;

    fn div(self, rhs: f64) -> Px {
        Px(self.0 / rhs)
    }
}

/// Dividing two lengths yields a plain ratio
impl Div<Px> for Px {
    type Output = f64;

    fn div(self, rhs: Px) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<f64> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f64) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f64> for Pt {
    type Output = Pt;

    fn div(self, rhs: f64) -> Pt {
        Pt(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_arithmetic() {
        assert_eq!(Px(3.0) + Px(4.5), Px(7.5));
        assert_eq!(Px(10.0) - Px(4.0) * 2.0, Px(2.0));
        assert_eq!(Px(9.0) / Px(3.0), 3.0);
        assert_eq!(Px(7.9).floor(), Px(7.0));
        assert_eq!([Px(1.0), Px(2.0)].into_iter().sum::<Px>(), Px(3.0));
    }

    #[test]
    fn units_display_with_suffix() {
        assert_eq!(Px(12.5).to_string(), "12.5px");
        assert_eq!(Pt(18.0).to_string(), "18pt");
    }
}
