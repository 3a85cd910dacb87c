//! A guillotine insertion tree. Free space is split into two children every
//! time a rectangle is placed in a node that is larger than it.
//!
//! Nodes live in an arena and are addressed by index. Children are allocated
//! the first time a node is split and reused on every later trial, so running
//! many trials against one tree only allocates while it grows.

use crate::geometry::{Edges, Fit, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
struct Node {
    region: Edges,
    occupied: bool,

    /// Whether `children` are part of the current trial. Set at most once per
    /// trial; a split node only ever delegates to its children.
    split: bool,

    /// Lazily allocated child slots, kept across resets.
    children: Option<[NodeId; 2]>,
}

impl Node {
    fn new(region: Edges) -> Self {
        Self {
            region,
            occupied: false,
            split: false,
            children: None,
        }
    }
}

/// The node that accepted a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Leaf {
    pub region: Edges,
    pub rotated: bool,
}

impl Leaf {
    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.region.left, self.region.top)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InsertionTree {
    nodes: Vec<Node>,
    unvisited: Vec<NodeId>,
}

impl InsertionTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Edges::default())],
            unvisited: Vec::new(),
        }
    }

    /// Empties the tree and gives it a new root region anchored at the
    /// origin. Must be called before every trial.
    pub fn reset(&mut self, region: Size) {
        for node in &mut self.nodes {
            node.occupied = false;
            node.split = false;
        }

        self.node_mut(ROOT).region = Edges::from_size(region);
    }

    /// The region the tree was last reset to.
    #[cfg(test)]
    pub fn region(&self) -> Size {
        self.node(ROOT).region.size()
    }

    /// How many nodes have ever been allocated by this tree.
    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Places a rectangle in the first free node that can hold it, walking
    /// first children before second children.
    ///
    /// Returns `None` if there is no room left for it anywhere. That's
    /// expected while searching for a bin size and isn't an error.
    pub fn insert(&mut self, size: Size) -> Option<Leaf> {
        self.unvisited.clear();
        self.unvisited.push(ROOT);

        while let Some(id) = self.unvisited.pop() {
            let node = self.node(id);

            if node.split {
                if let Some([first, second]) = node.children {
                    self.unvisited.push(second);
                    self.unvisited.push(first);
                }
                continue;
            }

            if node.occupied {
                continue;
            }

            let fit = size.fits(node.region.size());
            if !fit.fits() {
                continue;
            }

            if fit.is_exact() {
                let node = self.node_mut(id);
                node.occupied = true;

                return Some(Leaf {
                    region: node.region,
                    rotated: fit == Fit::ExactRotated,
                });
            }

            let placed = if fit.is_rotated() {
                size.rotated()
            } else {
                size
            };

            // The first child is always an exact fit along one axis, so the
            // rectangle is guaranteed to land somewhere under it.
            let first = self.split(id, placed);
            self.unvisited.clear();
            self.unvisited.push(first);
        }

        None
    }

    /// Splits a free node around a rectangle placed in its top-left corner.
    /// The cut runs along whichever axis has more room left over; on a tie
    /// the first child is a full-width strip.
    fn split(&mut self, id: NodeId, placed: Size) -> NodeId {
        let region = self.node(id).region;

        let regions = if region.width() - placed.width > region.height() - placed.height {
            [
                Edges::new(region.left, region.top, region.left + placed.width, region.bottom),
                Edges::new(region.left + placed.width, region.top, region.right, region.bottom),
            ]
        } else {
            [
                Edges::new(region.left, region.top, region.right, region.top + placed.height),
                Edges::new(region.left, region.top + placed.height, region.right, region.bottom),
            ]
        };

        let children = match self.node(id).children {
            Some(children) => children,
            None => {
                let children = [self.allocate(), self.allocate()];
                self.node_mut(id).children = Some(children);
                children
            }
        };

        for (&child, &child_region) in children.iter().zip(regions.iter()) {
            let node = self.node_mut(child);
            node.region = child_region;
            node.occupied = false;
            node.split = false;
        }

        self.node_mut(id).split = true;

        children[0]
    }

    fn allocate(&mut self) -> NodeId {
        self.nodes.push(Node::new(Edges::default()));
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

impl Default for InsertionTree {
    fn default() -> Self {
        Self::new()
    }
}
