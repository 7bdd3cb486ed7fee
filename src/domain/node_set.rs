//! Named-node container: unique-by-name ownership with insertion-order enumeration.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

/// A node that can live in a [`NodeSet`]; the name is its only identity.
pub trait Named {
    fn name(&self) -> &str;
}

/// Stable handle to a node owned by a [`NodeSet`].
///
/// Handles are generational: after the node is removed the handle stops
/// resolving, even if the arena slot is reused by a later insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

/// Owning collection of nodes keyed by a unique name.
///
/// Insertion never overwrites: adding a node whose name is already present
/// keeps the existing node and hands that one back. Lookup is a linear scan
/// over the insertion order.
#[derive(Debug)]
pub struct NodeSet<T> {
    /// Arena storage for all owned nodes
    arena: Arena<T>,
    /// Arena indices of live nodes, in insertion order
    order: Vec<Index>,
}

impl<T> Default for NodeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeSet<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            order: Vec::new(),
        }
    }

    /// Number of currently owned nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id.0)
    }

    /// Handles of all nodes, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().map(|&idx| NodeId(idx))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { set: self, pos: 0 }
    }

    /// Mutable iteration in insertion order.
    ///
    /// The arena hands out slots in storage order, which diverges from
    /// insertion order once slots are reused, so the nodes are re-sorted by
    /// their position in `order`: O(n log n) plus one temporary `Vec`.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        let positions: HashMap<Index, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(pos, &idx)| (idx, pos))
            .collect();
        let mut nodes: Vec<(usize, &mut T)> = self
            .arena
            .iter_mut()
            .filter_map(|(idx, node)| positions.get(&idx).map(|&pos| (pos, node)))
            .collect();
        nodes.sort_unstable_by_key(|(pos, _)| *pos);
        nodes.into_iter().map(|(_, node)| node)
    }

    /// Removes every node, yielding them in insertion order.
    pub fn drain(&mut self) -> std::vec::IntoIter<T> {
        let order = std::mem::take(&mut self.order);
        let nodes: Vec<T> = order
            .into_iter()
            .filter_map(|idx| self.arena.remove(idx))
            .collect();
        self.arena.clear();
        nodes.into_iter()
    }
}

impl<T: Named> NodeSet<T> {
    /// Position in `order` and arena index of the node called `name`.
    fn locate(&self, name: &str) -> Option<(usize, Index)> {
        self.order.iter().enumerate().find_map(|(pos, &idx)| {
            self.arena
                .get(idx)
                .filter(|node| node.name() == name)
                .map(|_| (pos, idx))
        })
    }

    /// Takes ownership of `node` unless its name is taken, and returns the
    /// handle of the node now stored under that name.
    #[instrument(level = "trace", skip(self, node), fields(node = node.name()))]
    pub fn insert(&mut self, node: T) -> NodeId {
        if let Some((_, idx)) = self.locate(node.name()) {
            debug!(node = node.name(), "name already present, keeping existing node");
            return NodeId(idx);
        }
        let idx = self.arena.insert(node);
        self.order.push(idx);
        NodeId(idx)
    }

    /// Same contract as [`insert`](Self::insert), returning the stored node.
    pub fn add_node(&mut self, node: T) -> &mut T {
        let id = self.insert(node);
        &mut self.arena[id.0]
    }

    #[instrument(level = "trace", skip(self))]
    pub fn find_id(&self, name: &str) -> Option<NodeId> {
        self.locate(name).map(|(_, idx)| NodeId(idx))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn find_node(&self, name: &str) -> Option<&T> {
        self.locate(name).and_then(|(_, idx)| self.arena.get(idx))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn find_node_mut(&mut self, name: &str) -> Option<&mut T> {
        let (_, idx) = self.locate(name)?;
        self.arena.get_mut(idx)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }

    /// Detaches the node called `name` and hands ownership to the caller.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_node(&mut self, name: &str) -> Option<T> {
        let (pos, idx) = self.locate(name)?;
        self.order.remove(pos);
        debug!(node = name, "node detached");
        self.arena.remove(idx)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(Named::name)
    }
}

/// Insertion-order iterator over a [`NodeSet`].
pub struct Iter<'a, T> {
    set: &'a NodeSet<T>,
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&idx) = self.set.order.get(self.pos) {
            self.pos += 1;
            if let Some(node) = self.set.arena.get(idx) {
                return Some(node);
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a NodeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
