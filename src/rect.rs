use crate::units::*;

/// A rectangle on the menu canvas, specified by two opposite corners. The
/// canvas origin is the top-left corner, with y growing downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x0: Px,
    /// The y-coordinate of the top edge.
    pub y0: Px,
    /// The x-coordinate of the right edge.
    pub x1: Px,
    /// The y-coordinate of the bottom edge.
    pub y1: Px,
}

/// Where a single button (with its border, label and shadow) is placed on the canvas
pub type CellPlacement = Rect;

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn from_origin(x: Px, y: Px, width: Px, height: Px) -> Rect {
        Rect {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    pub fn width(&self) -> Px {
        self.x1 - self.x0
    }

    pub fn height(&self) -> Px {
        self.y1 - self.y0
    }

    /// Grow the rectangle by `amount` on every side
    pub fn outset(&self, amount: Px) -> Rect {
        Rect {
            x0: self.x0 - amount,
            y0: self.y0 - amount,
            x1: self.x1 + amount,
            y1: self.y1 + amount,
        }
    }

    /// Whether the two rectangles share any area. Rectangles that merely touch
    /// along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    /// Whether `other` lies entirely within this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::from_origin(Px(0.0), Px(0.0), Px(10.0), Px(10.0));
        let b = Rect::from_origin(Px(10.0), Px(0.0), Px(10.0), Px(10.0));
        let c = Rect::from_origin(Px(5.0), Px(5.0), Px(10.0), Px(10.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }

    #[test]
    fn outset_grows_every_side() {
        let a = Rect::from_origin(Px(4.0), Px(6.0), Px(10.0), Px(20.0));
        assert_eq!(
            a.outset(Px(3.0)),
            Rect::from_origin(Px(1.0), Px(3.0), Px(16.0), Px(26.0))
        );
        assert!(a.outset(Px(1.0)).contains(&a));
    }
}
