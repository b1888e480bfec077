/// An owning edge in the chain: `None` marks the end of the list (or an empty
/// list at the head position).
pub(crate) type Link = Option<Box<Node>>;

// NOTE: Nodes are stored in Box rather than behind a raw allocation because Box has the special
// property that dereferencing it allows a value to be moved out of the heap, which pop and owned
// iteration rely on.

pub(crate) struct Node {
    pub value: String,
    pub next: Link,
}

impl Node {
    pub const fn new(value: String, next: Link) -> Node {
        Node { value, next }
    }

    /// Allocates a node and wraps it as an occupied [`Link`], ready to splice into a chain.
    pub fn link(value: String, next: Link) -> Link {
        Some(Box::new(Node::new(value, next)))
    }
}
