use std::cmp::Ordering;

use crate::error::TreeError;

pub type Key = i64;

type Link = Option<Box<Node>>;

struct Node {
    key: Key,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(key: Key) -> Box<Node> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    fn child(&self, side: Side) -> &Link {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// The link that owns a node: the tree's root slot, or one child slot of the
/// node reached by following `parent` from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edge {
    Root,
    Child { parent: Vec<Side>, side: Side },
}

impl Edge {
    fn descend(self, side: Side) -> Edge {
        let parent = match self {
            Edge::Root => Vec::new(),
            Edge::Child {
                mut parent,
                side: last,
            } => {
                parent.push(last);
                parent
            }
        };
        Edge::Child { parent, side }
    }
}

/// Unbalanced binary search tree over unique integer keys.
#[derive(Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Tree {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// Inserts every key in order. The first duplicate aborts construction and
    /// the partially built tree is dropped.
    pub fn from_keys<I: IntoIterator<Item = Key>>(keys: I) -> Result<Self, TreeError> {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn insert(&mut self, key: Key) -> Result<(), TreeError> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Equal => return Err(TreeError::DuplicateKey(key)),
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::leaf(key));
        self.len += 1;
        Ok(())
    }

    pub fn search(&self, key: Key) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    pub fn delete(&mut self, key: Key) -> Result<(), TreeError> {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree);
        }
        self.delete_from(Edge::Root, key)
    }

    /// Deletes `key` from the subtree owned by `start`.
    ///
    /// A node with two children takes its in-order predecessor's key, and the
    /// predecessor (which has no right child) is then deleted from its own
    /// edge, so the unlink below is the only place a node leaves the tree.
    fn delete_from(&mut self, start: Edge, key: Key) -> Result<(), TreeError> {
        let edge = self.locate(start, key).ok_or(TreeError::NotFound(key))?;

        if let Some((predecessor, predecessor_key)) = self.predecessor(&edge) {
            self.node_mut(&edge).ok_or(TreeError::NotFound(key))?.key = predecessor_key;
            return self.delete_from(predecessor, predecessor_key);
        }

        let link = self.link_mut(&edge).ok_or(TreeError::NotFound(key))?;
        let node = link.as_mut().ok_or(TreeError::NotFound(key))?;
        let replacement = if node.left.is_none() {
            // leaf, or only a right child
            node.right.take()
        } else {
            node.left.take()
        };
        *link = replacement;
        self.len -= 1;
        Ok(())
    }

    /// Walks down from `start` by key comparison and returns the edge owning
    /// the node that holds `key`.
    fn locate(&self, start: Edge, key: Key) -> Option<Edge> {
        let mut link = self.link(&start)?;
        let mut edge = start;
        while let Some(node) = link {
            let side = match key.cmp(&node.key) {
                Ordering::Equal => return Some(edge),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            link = node.child(side);
            edge = edge.descend(side);
        }
        None
    }

    /// For a node with both children: the edge and key of the right-most node
    /// of its left subtree.
    fn predecessor(&self, edge: &Edge) -> Option<(Edge, Key)> {
        let node = self.node(edge)?;
        if node.right.is_none() {
            return None;
        }
        let mut current = node.left.as_deref()?;
        let mut predecessor = edge.clone().descend(Side::Left);
        while let Some(right) = current.right.as_deref() {
            current = right;
            predecessor = predecessor.descend(Side::Right);
        }
        Some((predecessor, current.key))
    }

    fn link(&self, edge: &Edge) -> Option<&Link> {
        match edge {
            Edge::Root => Some(&self.root),
            Edge::Child { parent, side } => {
                let mut link = &self.root;
                for step in parent {
                    link = link.as_ref()?.child(*step);
                }
                Some(link.as_ref()?.child(*side))
            }
        }
    }

    fn link_mut(&mut self, edge: &Edge) -> Option<&mut Link> {
        let mut link = &mut self.root;
        if let Edge::Child { parent, side } = edge {
            for step in parent {
                link = link.as_mut()?.child_mut(*step);
            }
            link = link.as_mut()?.child_mut(*side);
        }
        Some(link)
    }

    fn node(&self, edge: &Edge) -> Option<&Node> {
        self.link(edge)?.as_deref()
    }

    fn node_mut(&mut self, edge: &Edge) -> Option<&mut Node> {
        self.link_mut(edge)?.as_deref_mut()
    }
}

#[cfg(test)]
impl Tree {
    fn to_sorted_vec(&self) -> Vec<Key> {
        fn append_to_sorted_vec_recursive(link: &Link, result: &mut Vec<Key>) {
            if let Some(node) = link {
                append_to_sorted_vec_recursive(&node.left, result);
                result.push(node.key);
                append_to_sorted_vec_recursive(&node.right, result);
            }
        }
        let mut result = Vec::with_capacity(self.len);
        append_to_sorted_vec_recursive(&self.root, &mut result);
        result
    }

    /// Node-first listing; unlike the sorted one it tells tree shapes apart.
    fn to_pre_order_vec(&self) -> Vec<Key> {
        fn append_pre_order_recursive(link: &Link, result: &mut Vec<Key>) {
            if let Some(node) = link {
                result.push(node.key);
                append_pre_order_recursive(&node.left, result);
                append_pre_order_recursive(&node.right, result);
            }
        }
        let mut result = Vec::with_capacity(self.len);
        append_pre_order_recursive(&self.root, &mut result);
        result
    }

    fn root_key(&self) -> Option<Key> {
        self.root.as_ref().map(|node| node.key)
    }
}
