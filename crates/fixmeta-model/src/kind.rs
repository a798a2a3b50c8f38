//! Canonical kind tags.
//!
//! Numeric types are discriminated on the wire by a string tag in their
//! first operand. Metadata info nodes carry no tag and are told apart by
//! shape, but still have a kind for diagnostics and dispatch.

/// Tag string of the fixed-point numeric type.
pub const FIXP_TYPE_FLAG: &str = "fixp";

/// Numeric representation kinds.
///
/// Adding a representation means adding a variant here and a matching
/// `NumericType` variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NumericKind {
    /// Two's-complement fixed point with a fixed number of fractional bits.
    FixedPoint,
}

impl NumericKind {
    /// All kinds, in tag order.
    pub const ALL: [Self; 1] = [Self::FixedPoint];

    /// Resolve a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            FIXP_TYPE_FLAG => Some(Self::FixedPoint),
            _ => None,
        }
    }

    /// Wire tag written as the first operand of an encoded numeric type.
    pub fn tag(self) -> &'static str {
        match self {
            Self::FixedPoint => FIXP_TYPE_FLAG,
        }
    }
}

/// Metadata info kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InfoKind {
    /// Type, range and error of a single scalar value.
    Scalar,
    /// Per-field info of a struct value.
    Aggregate,
}

impl InfoKind {
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar)
    }

    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::Aggregate)
    }

    /// Name used when rendering info of this kind.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Aggregate => "struct",
        }
    }
}
