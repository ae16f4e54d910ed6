use crate::units::Px;

/// The extra margin a drop shadow adds around a button image, per side.
///
/// A shadow blurred with `sigma` grows the image by `2*sigma` on every side. Offsetting
/// the shadow moves that growth from one side to the opposite one: pushing the shadow
/// down grows the south side and shrinks the north side, but never below zero since a
/// shadow cannot make the image smaller than it was.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ShadowPadding {
    pub north: Px,
    pub east: Px,
    pub south: Px,
    pub west: Px,
}

impl ShadowPadding {
    /// Calculate the padding for a shadow with the given blur and offsets. Positive
    /// offsets push the shadow right (`x_offset`) and down (`y_offset`).
    ///
    /// ```
    /// use menu_layout::layout::ShadowPadding;
    /// use menu_layout::Px;
    ///
    /// let shadow = ShadowPadding::new(3.0, Px(5.0), Px(5.0));
    /// assert_eq!(shadow.north, Px(1.0));
    /// assert_eq!(shadow.south, Px(11.0));
    /// assert_eq!(shadow.y(), Px(12.0));
    /// ```
    pub fn new(sigma: f64, x_offset: Px, y_offset: Px) -> ShadowPadding {
        let spread = Px(sigma * 2.0);
        ShadowPadding {
            // moving north/west past the spread has no further effect
            north: (y_offset - spread).min(Px::ZERO).abs(),
            west: (x_offset - spread).min(Px::ZERO).abs(),
            // and likewise south/east
            south: (spread + y_offset).max(Px::ZERO),
            east: (spread + x_offset).max(Px::ZERO),
        }
    }

    /// Create padding where all values are 0.0
    pub fn empty() -> ShadowPadding {
        ShadowPadding::default()
    }

    /// Total horizontal growth (west + east)
    pub fn x(&self) -> Px {
        self.west + self.east
    }

    /// Total vertical growth (north + south)
    pub fn y(&self) -> Px {
        self.north + self.south
    }
}
