use crate::geometry::{Rect, Size};

/// A rectangle handed to the packer, along with the placement it was given.
///
/// `PackItem` carries a size and an opaque `context` value. The packer never
/// looks at the context; it's expected that consumers will use it to associate
/// packing results back to the application's own objects, like a sprite name
/// or an index into a list of images.
///
/// `size` always keeps the orientation it was created with. When the packer
/// decides to turn an item by 90 degrees it only sets `rotated`, and
/// [`footprint`](#method.footprint) reports the box the item actually
/// occupies inside its bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackItem<C> {
    pub(crate) size: Size,
    pub(crate) position: (u32, u32),
    pub(crate) rotated: bool,
    context: C,
}

impl<C> PackItem<C> {
    #[inline]
    pub fn new<S: Into<Size>>(size: S, context: C) -> Self {
        Self {
            size: size.into(),
            position: (0, 0),
            rotated: false,
            context,
        }
    }

    /// The size of this item in its original orientation.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The top-left corner of this item within its bin.
    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    /// Whether this item was turned by 90 degrees to be placed.
    #[inline]
    pub fn rotated(&self) -> bool {
        self.rotated
    }

    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// The box this item occupies within its bin, accounting for rotation.
    pub fn footprint(&self) -> Rect {
        let size = if self.rotated {
            self.size.rotated()
        } else {
            self.size
        };

        Rect::new(self.position, size)
    }

    pub(crate) fn clear_placement(&mut self) {
        self.position = (0, 0);
        self.rotated = false;
    }
}

/// The results from running the packer.
///
/// Every item passed to the packer belongs to exactly one bin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackOutput {
    pub(crate) bins: Vec<Bin>,
}

impl PackOutput {
    #[inline]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }
}

/// A group of items that were packed together into the same container.
///
/// Bins don't own their items; they refer to them by index into the slice
/// that was handed to the packer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bin {
    pub(crate) size: Size,
    pub(crate) items: Vec<usize>,
}

impl Bin {
    /// The bounding box of every item in this bin. This can be smaller than
    /// the square that the packer searched with, but never larger.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Indices of the items in this bin, in the order they were placed.
    #[inline]
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// The sum of the areas of every item in this bin.
    pub fn used_area<C>(&self, items: &[PackItem<C>]) -> u64 {
        self.items
            .iter()
            .map(|&index| items[index].size.area())
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn footprint_follows_rotation() {
        let mut item = PackItem::new((40, 20), "banner");
        item.position = (0, 20);

        assert_eq!(item.footprint(), Rect::new((0, 20), Size::new(40, 20)));

        item.rotated = true;
        assert_eq!(item.footprint(), Rect::new((0, 20), Size::new(20, 40)));
        assert_eq!(item.size(), Size::new(40, 20));
    }

    #[test]
    fn clear_placement() {
        let mut item = PackItem::new((8, 8), ());
        item.position = (4, 4);
        item.rotated = true;

        item.clear_placement();

        assert_eq!(item.position(), (0, 0));
        assert!(!item.rotated());
    }

    #[test]
    fn used_area() {
        let items = vec![
            PackItem::new((10, 10), 0),
            PackItem::new((20, 5), 1),
            PackItem::new((3, 3), 2),
        ];

        let bin = Bin {
            size: Size::new(30, 10),
            items: vec![0, 1],
        };

        assert_eq!(bin.used_area(&items), 200);
        assert_eq!(*items[2].context(), 2);
    }
}
