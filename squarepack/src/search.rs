//! Binary search over square bin sizes for a single heuristic, and selection
//! of the best heuristic once every one of them has been searched.

use std::cmp::Reverse;

use crate::{geometry::Size, heuristic::Heuristic, tree::InsertionTree};

/// What a heuristic managed to do within the maximum side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Every rectangle fit in a square of this side.
    Fits { side: u32 },

    /// Not every rectangle fit even at the maximum side. `area` is the total
    /// area that did fit there.
    Partial { area: u64 },
}

#[derive(Debug, Clone)]
pub(crate) struct Attempt {
    pub heuristic: Heuristic,
    pub order: Vec<usize>,
    pub outcome: Outcome,
}

impl Attempt {
    /// The square side to run the final placement pass with.
    pub fn side(&self, max_side: u32) -> u32 {
        match self.outcome {
            Outcome::Fits { side } => side,
            Outcome::Partial { .. } => max_side,
        }
    }
}

/// Searches for the smallest square side that holds every rectangle when they
/// are inserted in `order`.
///
/// The search starts at `max_side` with a step of half of it, shrinking the
/// square after every trial that fit and growing it after every trial that
/// didn't, halving the step each time. It stops once a trial fits and the
/// step has dropped to `discard_step` or below, which must be at least 1.
pub(crate) fn search(sizes: &[Size], order: &[usize], max_side: u32, discard_step: u32) -> Outcome {
    let mut tree = InsertionTree::new();

    let mut side = max_side;
    let mut step = max_side / 2;
    let mut smallest_fit: Option<u32> = None;

    loop {
        if side > max_side {
            break;
        }

        tree.reset(Size::square(side));
        let fits = order.iter().all(|&index| tree.insert(sizes[index]).is_some());

        log::trace!(
            "Trial at {}x{} with step {}: {}",
            side,
            side,
            step,
            if fits { "fit" } else { "did not fit" }
        );

        if fits {
            smallest_fit = Some(smallest_fit.map_or(side, |smallest| smallest.min(side)));

            if step <= discard_step {
                break;
            }

            side = side.saturating_sub(step);
        } else {
            side = match side.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }

        step = (step / 2).max(1);
    }

    match smallest_fit {
        Some(side) => Outcome::Fits { side },
        None => Outcome::Partial {
            area: packed_area(&mut tree, sizes, order, max_side),
        },
    }
}

/// Total area of the rectangles that fit in a square of `side`, inserting
/// every rectangle even after the first one fails.
fn packed_area(tree: &mut InsertionTree, sizes: &[Size], order: &[usize], side: u32) -> u64 {
    tree.reset(Size::square(side));

    order
        .iter()
        .map(|&index| sizes[index])
        .filter(|&size| tree.insert(size).is_some())
        .map(Size::area)
        .sum()
}

/// Runs the search for every heuristic.
pub(crate) fn attempt_all(
    sizes: &[Size],
    heuristics: &[Heuristic],
    max_side: u32,
    discard_step: u32,
) -> Vec<Attempt> {
    heuristics
        .iter()
        .map(|&heuristic| {
            let order = heuristic.order(sizes);
            let outcome = search(sizes, &order, max_side, discard_step);

            log::debug!("Heuristic {} gave {:?}", heuristic, outcome);

            Attempt {
                heuristic,
                order,
                outcome,
            }
        })
        .collect()
}

/// Picks the smallest side among attempts where everything fit. If nothing
/// fit anywhere, picks the attempt that packed the most area. Ties go to the
/// earliest attempt.
pub(crate) fn select(attempts: &[Attempt]) -> Option<&Attempt> {
    let smallest = attempts
        .iter()
        .filter_map(|attempt| match attempt.outcome {
            Outcome::Fits { side } => Some((side, attempt)),
            Outcome::Partial { .. } => None,
        })
        .min_by_key(|&(side, _)| side)
        .map(|(_, attempt)| attempt);

    smallest.or_else(|| {
        attempts
            .iter()
            .filter_map(|attempt| match attempt.outcome {
                Outcome::Partial { area } => Some((area, attempt)),
                Outcome::Fits { .. } => None,
            })
            .min_by_key(|&(area, _)| Reverse(area))
            .map(|(_, attempt)| attempt)
    })
}
