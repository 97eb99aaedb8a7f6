/// A wrapper for the integer index used to address nodes in the tree arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The underlying arena index of this node.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    /// Allow for explicit conversion from usize to NodeId.
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}
