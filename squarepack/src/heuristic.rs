use std::{cmp::Ordering, fmt};

use crate::geometry::Size;

/// An order to feed rectangles into the insertion tree in. Every heuristic
/// sorts from largest to smallest by its own key.
///
/// The packer tries heuristics in the order of [`Heuristic::ALL`], and that
/// order also decides which heuristic wins when two of them perform equally
/// well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Area,
    Perimeter,
    MaxSide,
    Width,
    Height,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Area,
        Heuristic::Perimeter,
        Heuristic::MaxSide,
        Heuristic::Width,
        Heuristic::Height,
    ];

    fn key(self, size: Size) -> u64 {
        match self {
            Heuristic::Area => size.area(),
            Heuristic::Perimeter => size.perimeter(),
            Heuristic::MaxSide => u64::from(size.max_side()),
            Heuristic::Width => u64::from(size.width),
            Heuristic::Height => u64::from(size.height),
        }
    }

    /// Compares two sizes so that the one this heuristic wants placed first
    /// sorts first.
    pub fn compare(self, a: Size, b: Size) -> Ordering {
        self.key(b).cmp(&self.key(a))
    }

    /// Indices into `sizes`, in the order this heuristic would insert them.
    /// Sizes with equal keys keep their relative input order.
    pub fn order(self, sizes: &[Size]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..sizes.len()).collect();
        order.sort_by(|&a, &b| self.compare(sizes[a], sizes[b]));
        order
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Heuristic::Area => "area",
            Heuristic::Perimeter => "perimeter",
            Heuristic::MaxSide => "max-side",
            Heuristic::Width => "width",
            Heuristic::Height => "height",
        };

        formatter.write_str(name)
    }
}
