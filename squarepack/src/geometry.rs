//! Integer boxes used by the packer. All arithmetic stays in `u32`/`u64` so
//! that placements are reproducible across platforms.

use std::fmt;

/// A width and height with no position attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// The same box turned by 90 degrees.
    #[inline]
    pub fn rotated(self) -> Self {
        Self::new(self.height, self.width)
    }

    #[inline]
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[inline]
    pub fn perimeter(self) -> u64 {
        2 * u64::from(self.width) + 2 * u64::from(self.height)
    }

    #[inline]
    pub fn max_side(self) -> u32 {
        self.width.max(self.height)
    }

    /// Classifies how this box fits inside `container`. See [`classify_fit`].
    pub fn fits(self, container: Size) -> Fit {
        if self.width == container.width && self.height == container.height {
            Fit::ExactAsIs
        } else if self.height == container.width && self.width == container.height {
            Fit::ExactRotated
        } else if self.width <= container.width && self.height <= container.height {
            Fit::AsIs
        } else if self.height <= container.width && self.width <= container.height {
            Fit::Rotated
        } else {
            Fit::None
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}x{}", self.width, self.height)
    }
}

/// How a candidate box relates to a container box.
///
/// Exact variants let the insertion tree claim a node without splitting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fit {
    None,
    AsIs,
    Rotated,
    ExactAsIs,
    ExactRotated,
}

impl Fit {
    #[inline]
    pub fn fits(self) -> bool {
        self != Fit::None
    }

    #[inline]
    pub fn is_exact(self) -> bool {
        match self {
            Fit::ExactAsIs | Fit::ExactRotated => true,
            _ => false,
        }
    }

    #[inline]
    pub fn is_rotated(self) -> bool {
        match self {
            Fit::Rotated | Fit::ExactRotated => true,
            _ => false,
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            Fit::None => "does not fit",
            Fit::AsIs => "fits",
            Fit::Rotated => "fits when rotated",
            Fit::ExactAsIs => "fits exactly",
            Fit::ExactRotated => "fits exactly when rotated",
        };

        formatter.write_str(description)
    }
}

/// Classifies a `candidate_w` by `candidate_h` box against a `container_w` by
/// `container_h` box.
///
/// Only the dimensions are compared, never the areas. Exact fits are reported
/// before loose ones, and the unrotated orientation always wins a tie.
pub fn classify_fit(candidate_w: u32, candidate_h: u32, container_w: u32, container_h: u32) -> Fit {
    Size::new(candidate_w, candidate_h).fits(Size::new(container_w, container_h))
}

/// A box described by its four edges. Used for the free regions of the
/// insertion tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Edges {
    #[inline]
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A region anchored at the origin.
    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// A box described by its top-left corner and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub pos: (u32, u32),
    pub size: Size,
}

impl Rect {
    #[inline]
    pub fn new(pos: (u32, u32), size: Size) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.width, self.pos.1 + self.size.height)
    }

    /// Whether the two boxes share any area. Boxes that only touch along an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_min.0 < b_max.0 && b_min.0 < a_max.0 && a_min.1 < b_max.1 && b_min.1 < a_max.1
    }

    /// Whether this box lies entirely within a container of the given size
    /// anchored at the origin.
    pub fn is_within(&self, container: Size) -> bool {
        let max = self.max();
        max.0 <= container.width && max.1 <= container.height
    }
}

impl From<Edges> for Rect {
    fn from(edges: Edges) -> Self {
        Self::new((edges.left, edges.top), edges.size())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_fits_win() {
        assert_eq!(classify_fit(64, 64, 64, 64), Fit::ExactAsIs);
        assert_eq!(classify_fit(32, 64, 32, 64), Fit::ExactAsIs);
        assert_eq!(classify_fit(64, 32, 32, 64), Fit::ExactRotated);
    }

    #[test]
    fn loose_fits() {
        assert_eq!(classify_fit(10, 20, 64, 64), Fit::AsIs);
        assert_eq!(classify_fit(10, 20, 20, 20), Fit::AsIs);
        assert_eq!(classify_fit(30, 10, 20, 40), Fit::Rotated);
    }

    #[test]
    fn no_fit() {
        assert_eq!(classify_fit(65, 1, 64, 64), Fit::None);
        assert_eq!(classify_fit(30, 30, 20, 40), Fit::None);
    }

    #[test]
    fn as_is_before_rotated() {
        // A square candidate fits both ways; the unrotated answer is reported.
        assert_eq!(classify_fit(10, 10, 20, 30), Fit::AsIs);
        assert_eq!(classify_fit(20, 20, 20, 20), Fit::ExactAsIs);
    }

    #[test]
    fn fit_helpers() {
        assert!(Fit::ExactRotated.is_exact());
        assert!(Fit::ExactRotated.is_rotated());
        assert!(!Fit::AsIs.is_rotated());
        assert!(!Fit::None.fits());
    }

    #[test]
    fn measurements() {
        let size = Size::new(40, 20);

        assert_eq!(size.area(), 800);
        assert_eq!(size.perimeter(), 120);
        assert_eq!(size.max_side(), 40);
        assert_eq!(size.rotated(), Size::new(20, 40));
        assert_eq!(size.to_string(), "40x20");
    }

    #[test]
    fn edges_to_rect() {
        let edges = Edges::new(10, 20, 50, 30);

        assert_eq!(edges.size(), Size::new(40, 10));
        assert_eq!(Rect::from(edges), Rect::new((10, 20), Size::new(40, 10)));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new((0, 0), Size::new(32, 32));
        let b = Rect::new((32, 0), Size::new(32, 32));
        let c = Rect::new((16, 16), Size::new(32, 32));

        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&b));
    }

    #[test]
    fn within_container() {
        let rect = Rect::new((32, 0), Size::new(32, 64));

        assert!(rect.is_within(Size::square(64)));
        assert!(!rect.is_within(Size::new(63, 64)));
    }
}
