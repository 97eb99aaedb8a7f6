use std::slice::Iter;

use crate::tree::ids::NodeId;

/// Flat storage for tree nodes. Allocation order is the node id order, so
/// ids stay dense and stable for the lifetime of the tree.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    storage: Vec<T>,
}

impl<T> Arena<T> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Arena {
            storage: Vec::new(),
        }
    }

    /// Push an item into the arena and return its NodeId.
    pub fn allocate(&mut self, item: T) -> NodeId {
        let id = NodeId::from(self.storage.len());
        self.storage.push(item);
        id
    }

    /// Retrieve an item by id.
    pub fn get(&self, node_id: NodeId) -> Option<&T> {
        self.storage.get(node_id.index())
    }

    /// Retrieve an item by id as a mutable borrow.
    pub fn get_mut(&mut self, node_id: NodeId) -> Option<&mut T> {
        self.storage.get_mut(node_id.index())
    }

    /// Number of items allocated so far.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the arena holds no items.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterate items in allocation (id) order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.storage.iter()
    }
}

impl<'a, T> IntoIterator for &'a Arena<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}
