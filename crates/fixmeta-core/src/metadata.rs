//! Metadata leaves and node handles.
//!
//! A node is an ordered list of leaves. A leaf is a nested node, an interned
//! string, or a numeric constant. There is no "null" leaf: encoders that need
//! an explicit absence marker pick one of the three kinds.

use crate::interner::StrId;

/// Handle to a uniqued node inside an `MdContext`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MdNode(u32);

impl MdNode {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MdNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "!{}", self.0)
    }
}

/// Numeric constant leaf.
///
/// Doubles are kept by bit pattern so that constants are `Eq + Hash` and
/// identical nodes can be uniqued. `0.0` and `-0.0` are therefore distinct
/// constants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Constant {
    /// Integer of `bits` width. `value` is stored exactly as given.
    Int { bits: u32, value: i64 },
    /// IEEE-754 double.
    Double { bits: u64 },
}

impl Constant {
    pub fn int(bits: u32, value: i64) -> Self {
        Self::Int { bits, value }
    }

    pub fn i1(value: bool) -> Self {
        Self::int(1, value as i64)
    }

    pub fn i32(value: i32) -> Self {
        Self::int(32, value as i64)
    }

    pub fn double(value: f64) -> Self {
        Self::Double {
            bits: value.to_bits(),
        }
    }

    /// Integer value, if this is an integer constant.
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int { value, .. } => Some(value),
            Self::Double { .. } => None,
        }
    }

    /// Integer value, if this is an integer constant of exactly `bits` width.
    pub fn as_int_of_width(self, width: u32) -> Option<i64> {
        match self {
            Self::Int { bits, value } if bits == width => Some(value),
            _ => None,
        }
    }

    pub fn as_double(self) -> Option<f64> {
        match self {
            Self::Double { bits } => Some(f64::from_bits(bits)),
            Self::Int { .. } => None,
        }
    }

    pub fn is_double(self) -> bool {
        matches!(self, Self::Double { .. })
    }
}

/// A single leaf of a metadata node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Metadata {
    Node(MdNode),
    String(StrId),
    Constant(Constant),
}

impl Metadata {
    pub fn as_node(self) -> Option<MdNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_string(self) -> Option<StrId> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_constant(self) -> Option<Constant> {
        match self {
            Self::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// Double value, if this leaf is a double constant.
    pub fn as_double(self) -> Option<f64> {
        self.as_constant().and_then(Constant::as_double)
    }

    pub fn is_node(self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Short leaf kind name for diagnostics.
    pub fn kind_name(self) -> &'static str {
        match self {
            Self::Node(_) => "node",
            Self::String(_) => "string",
            Self::Constant(Constant::Int { .. }) => "int",
            Self::Constant(Constant::Double { .. }) => "double",
        }
    }
}

impl From<MdNode> for Metadata {
    fn from(node: MdNode) -> Self {
        Self::Node(node)
    }
}

impl From<Constant> for Metadata {
    fn from(c: Constant) -> Self {
        Self::Constant(c)
    }
}

/// Handle to a program value that can carry named attachments.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ValueId(u32);

impl ValueId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ValueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.0)
    }
}
