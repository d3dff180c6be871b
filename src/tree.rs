//! Module provide the red-black tree implemented by [Tree] type.
//!
//! - Each node in a Tree holds a unique key, parametrised over `key-type`.
//! - Insert with automatic rebalancing, via insert() api.
//! - In-order and level-order traversal.
//! - Nodes keep a link to their parent, fixup walks upward from the new
//!   node without descending again from the root.
//! - Snapshot after every significant mutation, refer to [Observer].
//! - Rebalancing can be disabled at construction.
//! - Not thread safe.
//!
//! Constructing a new [Tree] and inserting keys:
//!
//! ```
//! use redblack::{Insert, Tree};
//!
//! let mut tree: Tree<String> = Tree::new();
//! let a = tree.insert("hello".to_string());
//! let b = tree.insert("world".to_string());
//! let c = tree.insert("hello".to_string());
//!
//! assert_eq!(tree.len(), 2);
//! assert!(matches!(c, Insert::Duplicate(_)));
//! assert_eq!(a.to_node_id(), c.to_node_id());
//! assert_eq!(tree.as_key(b.to_node_id()), "world");
//! ```

use log::{debug, trace};

use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    iter::FromIterator,
};

use crate::{
    arena::{Arena, NodeId},
    node::{Color, Link, Node},
    observer::{Event, Observer, Silent, View},
    rotate::{rotate_left, rotate_right},
    Error, Result,
};

/// Tree manage a single instance of in-memory red-black tree.
///
/// Refer package level documentation for brief description.
pub struct Tree<K, O = Silent> {
    nodes: Arena<Node<K>>,
    root: Option<NodeId>,
    rebalance: bool,
    observer: O,
}

/// Outcome of [Tree::insert].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Insert {
    /// Key was not present, a new node is created.
    New(NodeId),
    /// Key was already present, nothing is mutated.
    Duplicate(NodeId),
}

impl Insert {
    /// Identity of the stored key, same for every insert of equal keys.
    pub fn to_node_id(&self) -> NodeId {
        match self {
            Insert::New(id) | Insert::Duplicate(id) => *id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Insert::New(_))
    }
}

/// Statistics gathered by [Tree::validate].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub n_count: usize,
    /// Edges on the longest path from root.
    pub height: usize,
    /// Black nodes from root to any sentinel, None when rebalancing is
    /// disabled.
    pub n_blacks: Option<usize>,
}

impl<K> Tree<K, Silent> {
    /// Create an empty, rebalancing, instance of Tree.
    pub fn new() -> Tree<K> {
        Tree::with_observer(true, Silent)
    }

    /// Create an empty tree that never rebalances, degrading into a plain
    /// binary search tree.
    pub fn unbalanced() -> Tree<K> {
        Tree::with_observer(false, Silent)
    }
}

impl<K> Default for Tree<K, Silent> {
    fn default() -> Tree<K> {
        Tree::new()
    }
}

impl<K, O> Tree<K, O> {
    /// Create an empty tree reporting snapshots to `observer`.
    pub fn with_observer(rebalance: bool, observer: O) -> Tree<K, O> {
        Tree {
            nodes: Arena::new(),
            root: None,
            rebalance,
            observer,
        }
    }

    pub fn as_observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Maintenance API.
impl<K, O> Tree<K, O> {
    /// Return number of keys in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Return whether this tree was constructed with rebalancing.
    #[inline]
    pub fn is_rebalancing(&self) -> bool {
        self.rebalance
    }

    /// Number of edges on the longest path from root, zero for
    /// empty tree and single node tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<NodeId> = self.root.into_iter().collect();
        loop {
            let mut next = vec![];
            for id in level.into_iter() {
                let node = self.nodes.get(id);
                next.extend(node.left.to_node_id());
                next.extend(node.right.to_node_id());
            }
            if next.is_empty() {
                break height;
            }
            height += 1;
            level = next;
        }
    }

    /// Read-only view of this tree, same as passed to observers.
    pub fn view(&self) -> View<'_, K> {
        View::new(&self.nodes, self.root)
    }

    /// Panics if `id` does not belong to this tree.
    pub fn as_key(&self, id: NodeId) -> &K {
        self.nodes.get(id).as_key()
    }

    /// Validate tree with following rules:
    ///
    /// * Parent links mirror child links.
    /// * Make sure keys are in sorted order.
    ///
    /// When rebalancing is enabled, additionally:
    ///
    /// * Root is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    pub fn validate(&self) -> Result<Stats>
    where
        K: Ord + fmt::Debug,
    {
        let root = match self.root {
            Some(root) => root,
            None if self.nodes.len() == 0 => {
                let n_blacks = if self.rebalance { Some(0) } else { None };
                return Ok(Stats {
                    n_blacks,
                    ..Stats::default()
                });
            }
            None => return err_at!(Fatal, msg: "no root for {} nodes", self.nodes.len()),
        };

        if self.nodes.get(root).parent.is_some() {
            return err_at!(Fatal, msg: "root {} has a parent", root);
        }
        if self.rebalance && self.nodes.get(root).is_red() {
            return err_at!(Fatal, msg: "root {} is red", root);
        }

        let mut stats = Stats::default();
        let n_blacks = self.validate_tree(root, 0 /*depth*/, &mut stats)?;
        if stats.n_count != self.nodes.len() {
            return err_at!(Fatal, msg: "mismatch in count {} != {}", stats.n_count, self.nodes.len());
        }
        stats.n_blacks = if self.rebalance { Some(n_blacks) } else { None };
        Ok(stats)
    }

    // return the number of blacks from `id` down to any sentinel,
    // including `id` itself.
    fn validate_tree(&self, id: NodeId, depth: usize, stats: &mut Stats) -> Result<usize>
    where
        K: Ord + fmt::Debug,
    {
        let node = self.nodes.get(id);
        stats.n_count += 1;
        stats.height = usize::max(stats.height, depth);

        let mut blacks = [0_usize; 2];
        for (i, link) in [node.left, node.right].iter().enumerate() {
            let child_id = match link {
                Link::Sentinel => continue,
                Link::Node(child_id) => *child_id,
            };
            let child = self.nodes.get(child_id);
            if child.parent != Some(id) {
                return err_at!(Fatal, msg: "parent link {} -> {:?} != {}", child_id, child.parent, id);
            }
            let sorted = match i {
                0 => child.as_key() < node.as_key(),
                _ => child.as_key() > node.as_key(),
            };
            if !sorted {
                return err_at!(Fatal, msg: "sort key:{:?} parent:{:?}", child.as_key(), node.as_key());
            }
            if self.rebalance && node.is_red() && child.is_red() {
                return err_at!(Fatal, msg: "consecutive reds {:?} {:?}", node.as_key(), child.as_key());
            }
            blacks[i] = self.validate_tree(child_id, depth + 1, stats)?;
        }

        if self.rebalance && blacks[0] != blacks[1] {
            return err_at!(Fatal, msg: "unbalanced blacks {} {} at {:?}", blacks[0], blacks[1], node.as_key());
        }

        Ok(blacks[0] + if node.is_black() { 1 } else { 0 })
    }
}

impl<K, O> Tree<K, O>
where
    O: Observer<K>,
{
    /// Insert key into this tree. If an equal key is present the tree is
    /// left untouched and the existing node is returned.
    pub fn insert(&mut self, key: K) -> Insert
    where
        K: Ord,
    {
        let mut cur = match self.root {
            Some(root) => root,
            None => {
                let mut node = Node::new(key, None);
                node.set_black();
                let id = self.nodes.alloc(node);
                self.root = Some(id);
                self.notify(Event::Created(id));
                return Insert::New(id);
            }
        };

        loop {
            let node = self.nodes.get(cur);
            let (link, left) = match key.cmp(node.as_key()) {
                Ordering::Less => (node.left, true),
                Ordering::Greater => (node.right, false),
                Ordering::Equal => {
                    debug!("duplicate key at {}", cur);
                    self.notify(Event::Duplicate(cur));
                    break Insert::Duplicate(cur);
                }
            };
            match link {
                Link::Node(next) => cur = next,
                Link::Sentinel => {
                    let id = self.nodes.alloc(Node::new(key, Some(cur)));
                    match left {
                        true => self.nodes.get_mut(cur).left = Link::Node(id),
                        false => self.nodes.get_mut(cur).right = Link::Node(id),
                    }
                    self.notify(Event::Attached(id));
                    if self.rebalance {
                        self.fixup(id);
                    }
                    break Insert::New(id);
                }
            }
        }
    }

    // walk upward from freshly attached red node `z`, until its
    // parent is black or it reaches the root.
    fn fixup(&mut self, mut z: NodeId) {
        while let Some(mut parent) = self.nodes.parent(z) {
            if self.nodes.get(parent).is_black() {
                break;
            }
            let grandparent = match self.nodes.parent(parent) {
                Some(grandparent) => grandparent,
                None => panic!("fixup(): red root {} ? Call the programmer", parent),
            };
            let uncle = self.nodes.uncle(z).unwrap_or(Link::Sentinel);

            if let (Color::Red, Link::Node(uncle)) = (self.nodes.color_of(uncle), uncle) {
                trace!("fixup red uncle {}, recolor at {}", uncle, grandparent);
                self.nodes.get_mut(parent).set_black();
                self.nodes.get_mut(uncle).set_black();
                self.nodes.get_mut(grandparent).set_red();
                self.notify(Event::Recolored(grandparent));
                z = grandparent;
                continue;
            }

            let outer_left = self.nodes.is_left_child(parent);
            if outer_left != self.nodes.is_left_child(z) {
                trace!("fixup black uncle, inner {} under {}", z, parent);
                let top = match outer_left {
                    true => rotate_left(&mut self.nodes, &mut self.root, parent),
                    false => rotate_right(&mut self.nodes, &mut self.root, parent),
                };
                self.notify_rotation(!outer_left, top);
                std::mem::swap(&mut z, &mut parent);
            }

            trace!("fixup black uncle, outer {} under {}", z, parent);
            self.nodes.get_mut(parent).set_black();
            self.nodes.get_mut(grandparent).set_red();
            let top = match outer_left {
                true => rotate_right(&mut self.nodes, &mut self.root, grandparent),
                false => rotate_left(&mut self.nodes, &mut self.root, grandparent),
            };
            self.notify_rotation(outer_left, top);
            break;
        }

        if let Some(root) = self.root {
            self.nodes.get_mut(root).set_black();
            self.notify(Event::RootBlack(root));
        }
    }

    #[inline]
    fn notify_rotation(&mut self, right: bool, top: NodeId) {
        match right {
            true => self.notify(Event::RotatedRight(top)),
            false => self.notify(Event::RotatedLeft(top)),
        }
    }

    #[inline]
    fn notify(&mut self, event: Event) {
        let view = View::new(&self.nodes, self.root);
        self.observer.on_snapshot(event, view)
    }
}

impl<K, O> Tree<K, O> {
    /// Return the node holding key, if present.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = self.root.map(Link::Node).unwrap_or(Link::Sentinel);
        while let Link::Node(id) = link {
            let node = self.nodes.get(id);
            link = match node.as_key().borrow().cmp(key) {
                Ordering::Less => node.right,
                Ordering::Greater => node.left,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Return an iterator over all keys in ascending order. Every call
    /// starts a fresh walk.
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let tree: Tree<u8> = vec![3, 1, 2].into_iter().collect();
    /// let keys: Vec<u8> = tree.iter().cloned().collect();
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut paths = Vec::default();
        build_iter(&self.nodes, self.root, &mut paths);
        Iter {
            nodes: &self.nodes,
            paths,
        }
    }

    /// Visit keys in ascending order.
    pub fn in_order<F>(&self, visit: F)
    where
        F: FnMut(&K),
    {
        self.iter().for_each(visit)
    }

    /// Visit keys breadth first, starting from root.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        self.view().by_level().for_each(|(_, node)| visit(node.as_key()))
    }
}

impl<K, O> Extend<K> for Tree<K, O>
where
    K: Ord,
    O: Observer<K>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        iter.into_iter().for_each(|key| {
            self.insert(key);
        });
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Tree<K>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

/// In-order iterator, refer to [Tree::iter].
pub struct Iter<'a, K> {
    nodes: &'a Arena<Node<K>>,
    paths: Vec<NodeId>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.paths.pop()?;
        let node = self.nodes.get(id);
        build_iter(self.nodes, node.right.to_node_id(), &mut self.paths);
        Some(node.as_key())
    }
}

// push `id` and its chain of left descendants
fn build_iter<K>(nodes: &Arena<Node<K>>, mut id: Option<NodeId>, paths: &mut Vec<NodeId>) {
    while let Some(nid) = id {
        paths.push(nid);
        id = nodes.get(nid).left.to_node_id();
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
