//! Append-only arena holding the search tree.
//!
//! Nodes refer to their parent and children by [`NodeId`], so growing the
//! arena never invalidates a reference.

mod node;

use std::ops::Index;

pub use node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new(transaction_count: usize) -> Self {
        Self {
            nodes: vec![Node::root(transaction_count)],
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Attaches `node` under `parent`, keeping the children ascending by
    /// support. Among equal supports, earlier attachments stay first.
    pub fn add_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        let support = node.support();
        let position = self.nodes[parent.0]
            .children
            .partition_point(|&child| self.nodes[child.0].support() <= support);

        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.insert(position, id);
        id
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self[id].children()
    }

    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        self[id].parent().map(|parent| &self[parent])
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (NodeId(position), node))
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
