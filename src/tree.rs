// src/tree.rs
//! Huffman tree: leaves carry symbols, internal nodes carry merged weights.
//!
//! Built bottom-up by repeatedly merging the two lightest nodes taken from
//! an `OrderedList`. The first node removed becomes the left child, the
//! second the right child. Immutable once built.

use tracing::debug;

use crate::error::{HuffError, Result};
use crate::frequency::FrequencyTable;
use crate::ordered_list::OrderedList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left:   Box<HuffNode>,
        right:  Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Join two subtrees; `left` is the one removed first.
    ///
    /// Fails if the combined weight does not fit in a `u64`.
    pub fn merge(left: HuffNode, right: HuffNode) -> Result<Self> {
        let weight = left.weight().checked_add(right.weight()).ok_or_else(|| {
            HuffError::InternalInvariant(format!(
                "merged weight {} + {} overflows",
                left.weight(),
                right.weight()
            ))
        })?;
        Ok(HuffNode::Internal { weight, left: Box::new(left), right: Box::new(right) })
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Symbol held by a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    /// Build the tree for every symbol with a nonzero count.
    ///
    /// Fails with `EmptyCollection` when the table holds no symbols.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut list = OrderedList::with_capacity(frequencies.distinct());
        for (symbol, count) in frequencies.entries() {
            list.insert(HuffNode::leaf(symbol, count), count);
        }

        while list.len() > 1 {
            let a = list.remove_min().map_err(|_| lost_node("first"))?;
            let b = list.remove_min().map_err(|_| lost_node("second"))?;
            let merged = HuffNode::merge(a, b)?;
            let weight = merged.weight();
            list.insert(merged, weight);
        }

        let root = list.remove_min()?;
        if !list.is_empty() {
            return Err(HuffError::InternalInvariant(format!(
                "{} nodes left over after the root was taken",
                list.len()
            )));
        }

        let tree = HuffmanTree { root };
        debug!(
            "Tree built: {} leaves, weight {}, depth {}",
            tree.leaf_count(),
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Total weight, i.e. the number of symbols in the input.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// True when the input held one distinct symbol and the root is that leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

fn lost_node(which: &str) -> HuffError {
    HuffError::InternalInvariant(format!("ordered list emptied before the {} merge operand", which))
}
