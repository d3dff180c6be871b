use std::fmt;

/// Identity of a node within its [Tree](crate::Tree).
///
/// Handles stay valid for the lifetime of the tree, nodes are never
/// removed and rotations only relink them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const MAX: usize = u32::MAX as usize;

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "NodeId::from_index(): index > NodeId::MAX");
        NodeId(index as u32)
    }

    /// Return the slot index of this node, useful for callers keeping
    /// per-node data in a vector.
    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

// Grow only slot vector, nodes are allocated on insert and never freed.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena { slots: Vec::new() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        let id = NodeId::from_index(self.slots.len());
        self.slots.push(element);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        &self.slots[id.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.slots[id.to_index()]
    }
}
