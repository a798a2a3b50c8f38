//! The metadata store.
//!
//! `MdContext` owns every node built through it. Nodes are uniqued: building
//! a node from leaves that already form a node returns the existing handle.
//! Nodes are never freed individually; they live as long as the context.

use indexmap::{IndexMap, IndexSet};

use crate::interner::{Interner, StrId};
use crate::metadata::{Metadata, MdNode, ValueId};

#[derive(Debug, Clone, Default)]
pub struct MdContext {
    strings: Interner,
    nodes: IndexSet<Box<[Metadata]>>,
    /// Per-value attachments, keyed by attachment kind name.
    attachments: IndexMap<ValueId, IndexMap<StrId, MdNode>>,
    next_value: u32,
}

impl MdContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Leaves and nodes
    // ------------------------------------------------------------------------

    /// Intern `s` and return it as a string leaf.
    pub fn string(&mut self, s: &str) -> Metadata {
        Metadata::String(self.strings.intern(s))
    }

    pub fn intern(&mut self, s: &str) -> StrId {
        self.strings.intern(s)
    }

    /// Resolve an interned string.
    ///
    /// # Panics
    /// Panics if `id` was not interned by this context.
    pub fn resolve(&self, id: StrId) -> &str {
        self.strings.resolve(id)
    }

    /// Text of a string leaf, or `None` for any other leaf kind.
    pub fn string_value(&self, md: Metadata) -> Option<&str> {
        md.as_string().map(|id| self.strings.resolve(id))
    }

    /// Build (or find) the node with exactly these leaves.
    pub fn node(&mut self, leaves: Vec<Metadata>) -> MdNode {
        if let Some(index) = self.nodes.get_index_of(leaves.as_slice()) {
            return MdNode::from_index(index);
        }
        let (index, _) = self.nodes.insert_full(leaves.into_boxed_slice());
        MdNode::from_index(index)
    }

    /// Leaves of `node`, in order.
    ///
    /// # Panics
    /// Panics if `node` was not built by this context.
    pub fn operands(&self, node: MdNode) -> &[Metadata] {
        self.ensure_node(node)
    }

    pub fn num_operands(&self, node: MdNode) -> usize {
        self.operands(node).len()
    }

    /// Leaf `index` of `node`, or `None` past the end.
    pub fn operand(&self, node: MdNode, index: usize) -> Option<Metadata> {
        self.operands(node).get(index).copied()
    }

    /// Number of distinct nodes built so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn try_operands(&self, node: MdNode) -> Option<&[Metadata]> {
        self.nodes.get_index(node.index()).map(|leaves| &**leaves)
    }

    // ------------------------------------------------------------------------
    // Values and attachments
    // ------------------------------------------------------------------------

    /// Allocate a fresh program value handle.
    pub fn new_value(&mut self) -> ValueId {
        let id = ValueId::from_raw(self.next_value);
        self.next_value += 1;
        id
    }

    /// Attach `node` to `value` under `kind`, replacing any previous node.
    pub fn set_attachment(&mut self, value: ValueId, kind: &str, node: MdNode) {
        let kind = self.strings.intern(kind);
        self.attachments
            .entry(value)
            .or_default()
            .insert(kind, node);
    }

    /// Node attached to `value` under `kind`, if any.
    pub fn attachment(&self, value: ValueId, kind: &str) -> Option<MdNode> {
        let kind = self.strings.get(kind)?;
        self.attachments.get(&value)?.get(&kind).copied()
    }

    /// Detach and return the node attached to `value` under `kind`.
    pub fn remove_attachment(&mut self, value: ValueId, kind: &str) -> Option<MdNode> {
        let kind = self.strings.get(kind)?;
        let per_value = self.attachments.get_mut(&value)?;
        let removed = per_value.shift_remove(&kind);
        if per_value.is_empty() {
            self.attachments.shift_remove(&value);
        }
        removed
    }

    /// All attachments of `value` in insertion order.
    pub fn attachments(&self, value: ValueId) -> impl Iterator<Item = (&str, MdNode)> {
        self.attachments
            .get(&value)
            .into_iter()
            .flat_map(|per_value| per_value.iter())
            .map(|(kind, node)| (self.strings.resolve(*kind), *node))
    }

    /// Values that carry at least one attachment, in first-attached order.
    pub fn attached_values(&self) -> impl Iterator<Item = ValueId> + '_ {
        self.attachments.keys().copied()
    }
}
