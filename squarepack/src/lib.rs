//! Squarepack packs rectangles into the fewest, smallest square bins it can
//! find, up to a maximum side. It was built for packing sprite images into
//! texture atlases, but only ever deals with sizes and positions; it never
//! sees any pixels.
//!
//! For every sorting heuristic, Squarepack binary searches for the smallest
//! square that a guillotine insertion tree can fit every rectangle into, then
//! keeps the best heuristic. Rectangles that don't fit within the maximum
//! side spill over into additional bins.
//!
//! ## Example
//! ```
//! use squarepack::{PackItem, Packer};
//!
//! // First, wrap the rectangles you want to pack in PackItem. The second
//! // value is yours to use to find your own objects again afterwards.
//! let mut items = vec![
//!     PackItem::new((128, 64), "banner"),
//!     PackItem::new((64, 64), "icon"),
//!     PackItem::new((1, 300), "divider"),
//! ];
//!
//! // Construct a packer and configure it with your constraints.
//! let packer = Packer::new().max_side(512);
//!
//! // Compute a solution. Positions and rotations are written into the items.
//! let output = packer.pack(&mut items).unwrap();
//!
//! for bin in output.bins() {
//!     for &index in bin.items() {
//!         let item = &items[index];
//!         println!("{} at {:?}", item.context(), item.position());
//!     }
//! }
//! ```

mod geometry;
mod heuristic;
mod packer;
mod search;
mod tree;
mod types;

pub use geometry::*;
pub use heuristic::*;
pub use packer::*;
pub use types::*;
