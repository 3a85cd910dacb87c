use thiserror::Error;

use crate::{
    geometry::Size,
    heuristic::Heuristic,
    search::{self, Attempt},
    tree::InsertionTree,
    types::{Bin, PackItem, PackOutput},
};

const DEFAULT_MAX_SIDE: u32 = 1024;
const DEFAULT_DISCARD_STEP: u32 = 128;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("Item {index} is {size}, which can never fit in a {max_side}x{max_side} bin")]
    Oversized {
        index: usize,
        size: Size,
        max_side: u32,
    },

    #[error("At least one heuristic is needed to pack anything")]
    NoHeuristics,

    #[error("No power-of-two bin up to {max_side}x{max_side} can hold every item")]
    NoSingleBin { max_side: u32 },
}

/// Packs rectangles into square bins, searching for the smallest square that
/// holds them and spilling whatever doesn't fit into further bins.
///
/// For every heuristic the packer binary searches over square sides between 1
/// and `max_side`, then keeps the heuristic that produced the smallest square,
/// or the most packed area if nothing fit.
#[derive(Debug, Clone)]
pub struct Packer {
    max_side: u32,
    discard_step: u32,
    heuristics: Vec<Heuristic>,
}

impl Packer {
    pub fn new() -> Self {
        Self {
            max_side: DEFAULT_MAX_SIDE,
            discard_step: DEFAULT_DISCARD_STEP,
            heuristics: Heuristic::ALL.to_vec(),
        }
    }

    /// The largest side any bin may have.
    pub fn max_side(self, max_side: u32) -> Self {
        Self { max_side, ..self }
    }

    /// The step size at which the search stops refining a bin size that
    /// already fits. Smaller values pack tighter and search longer. Values
    /// below 1 are treated as 1.
    pub fn discard_step(self, discard_step: u32) -> Self {
        Self {
            discard_step: discard_step.max(1),
            ..self
        }
    }

    /// Which heuristics to try, in priority order.
    pub fn heuristics(self, heuristics: &[Heuristic]) -> Self {
        Self {
            heuristics: heuristics.to_vec(),
            ..self
        }
    }

    /// Places every item into a bin, writing each item's position and
    /// rotation in place.
    ///
    /// Fails without packing anything if any item can't fit into a
    /// `max_side` by `max_side` square in either orientation.
    pub fn pack<C>(&self, items: &mut [PackItem<C>]) -> Result<PackOutput, PackError> {
        if self.heuristics.is_empty() {
            return Err(PackError::NoHeuristics);
        }

        let bounds = Size::square(self.max_side);
        for (index, item) in items.iter().enumerate() {
            if !item.size.fits(bounds).fits() {
                return Err(PackError::Oversized {
                    index,
                    size: item.size,
                    max_side: self.max_side,
                });
            }
        }

        for item in items.iter_mut() {
            item.clear_placement();
        }

        log::trace!("Packing {} items", items.len());

        let mut remaining: Vec<usize> = (0..items.len()).collect();
        let mut bins = Vec::new();

        while !remaining.is_empty() {
            let (bin, unplaced) = self.pack_one_bin(items, &remaining);

            debug_assert!(!bin.items.is_empty(), "a round must place at least one item");

            log::debug!(
                "Bin {} is {} with {} items, {} left over",
                bins.len(),
                bin.size,
                bin.items.len(),
                unplaced.len()
            );

            bins.push(bin);
            remaining = unplaced;
        }

        log::trace!(
            "Finished packing {} items into {} bins",
            items.len(),
            bins.len()
        );

        Ok(PackOutput { bins })
    }

    /// Finds the smallest power-of-two square, no larger than `max_side`,
    /// that holds every item in a single bin. Returns that side along with
    /// the bin.
    pub fn pack_single<C>(&self, items: &mut [PackItem<C>]) -> Result<(u32, Bin), PackError> {
        let mut side: u32 = 1;

        while side <= self.max_side {
            let packer = self.clone().max_side(side);

            match packer.pack(items) {
                Ok(output) if output.bins.len() <= 1 => {
                    let bin = output.bins.into_iter().next().unwrap_or_default();
                    log::debug!("All {} items fit in a single {}x{} bin", items.len(), side, side);

                    return Ok((side, bin));
                }
                Ok(output) => {
                    log::trace!("{}x{} needed {} bins", side, side, output.bins.len());
                }
                Err(PackError::Oversized { .. }) => {
                    log::trace!("Some item is too large for {}x{}", side, side);
                }
                Err(err) => return Err(err),
            }

            side = match side.checked_mul(2) {
                Some(next) => next,
                None => break,
            };
        }

        Err(PackError::NoSingleBin {
            max_side: self.max_side,
        })
    }

    /// Runs every heuristic over `remaining`, then places items for real with
    /// the winner. Returns the new bin and the indices of items that didn't
    /// make it in.
    fn pack_one_bin<C>(&self, items: &mut [PackItem<C>], remaining: &[usize]) -> (Bin, Vec<usize>) {
        let sizes: Vec<Size> = remaining.iter().map(|&index| items[index].size).collect();

        log::trace!(
            "Trying to pack {} remaining items into a bin of at most {}x{}",
            sizes.len(),
            self.max_side,
            self.max_side
        );

        let attempts =
            search::attempt_all(&sizes, &self.heuristics, self.max_side, self.discard_step);

        let winner = match search::select(&attempts) {
            Some(winner) => winner,
            None => return (Bin::default(), remaining.to_vec()),
        };

        self.place(items, remaining, &sizes, winner)
    }

    fn place<C>(
        &self,
        items: &mut [PackItem<C>],
        remaining: &[usize],
        sizes: &[Size],
        winner: &Attempt,
    ) -> (Bin, Vec<usize>) {
        let side = winner.side(self.max_side);

        log::trace!("Placing with heuristic {} at {}x{}", winner.heuristic, side, side);

        let mut tree = InsertionTree::new();
        tree.reset(Size::square(side));

        let mut placed = Vec::new();
        let mut unplaced = Vec::new();
        let mut extent = (0, 0);

        for &local in &winner.order {
            let index = remaining[local];

            match tree.insert(sizes[local]) {
                Some(leaf) => {
                    let item = &mut items[index];
                    item.position = leaf.position();
                    item.rotated = leaf.rotated;

                    extent.0 = extent.0.max(leaf.region.right);
                    extent.1 = extent.1.max(leaf.region.bottom);

                    placed.push(index);
                }
                None => unplaced.push(index),
            }
        }

        let bin = Bin {
            size: Size::from(extent),
            items: placed,
        };

        (bin, unplaced)
    }
}

impl Default for Packer {
    fn default() -> Self {
        Self::new()
    }
}

/// Packs `items` into bins no larger than `max_side` on either side, using
/// the default search settings. See [`Packer::pack`].
pub fn pack<C>(items: &mut [PackItem<C>], max_side: u32) -> Result<PackOutput, PackError> {
    Packer::new().max_side(max_side).pack(items)
}
