//! Per-value precision info.
//!
//! A scalar value carries a [`ScalarInfo`]: optional numeric type, range and
//! error. A struct value carries an [`AggregateInfo`] with one slot per field,
//! each slot absent or holding nested info. Arrays, vectors and pointers never
//! get their own node; their element info lives wherever the element is a
//! struct.
//!
//! Components of a `ScalarInfo` are reference counted and may be shared by
//! several infos. They are immutable once published: mutation through
//! `*_mut` accessors is copy-on-write, so other holders keep seeing the old
//! value. `Clone` on any info is deep and never shares components.

use std::fmt;
use std::rc::Rc;

use fixmeta_core::TypeShape;

use crate::kind::InfoKind;
use crate::numeric_type::NumericType;
use crate::range::{ErrorValue, Range};

/// Precision info of a scalar or struct value.
#[derive(Clone, Debug, PartialEq)]
pub enum MetadataInfo {
    Scalar(ScalarInfo),
    Aggregate(AggregateInfo),
}

impl MetadataInfo {
    pub fn kind(&self) -> InfoKind {
        match self {
            Self::Scalar(_) => InfoKind::Scalar,
            Self::Aggregate(_) => InfoKind::Aggregate,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarInfo> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Aggregate(_) => None,
        }
    }

    pub fn as_scalar_mut(&mut self) -> Option<&mut ScalarInfo> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Aggregate(_) => None,
        }
    }

    pub fn as_aggregate(&self) -> Option<&AggregateInfo> {
        match self {
            Self::Aggregate(a) => Some(a),
            Self::Scalar(_) => None,
        }
    }

    pub fn as_aggregate_mut(&mut self) -> Option<&mut AggregateInfo> {
        match self {
            Self::Aggregate(a) => Some(a),
            Self::Scalar(_) => None,
        }
    }

    /// # Panics
    /// Panics if this is not scalar info.
    pub fn expect_scalar(&self) -> &ScalarInfo {
        self.as_scalar()
            .unwrap_or_else(|| self.ensure_kind(InfoKind::Scalar))
    }

    /// # Panics
    /// Panics if this is not aggregate info.
    pub fn expect_aggregate(&self) -> &AggregateInfo {
        self.as_aggregate()
            .unwrap_or_else(|| self.ensure_kind(InfoKind::Aggregate))
    }

    /// Locate the info describing a nested field or element.
    ///
    /// `ty` is the type this info describes; `indices` is the access path
    /// below it (as in a nested member access). While the current type is a
    /// struct the walk descends into the matching slot; through arrays,
    /// vectors and pointers only the type advances. Once an absent slot is
    /// reached the result stays absent.
    ///
    /// # Panics
    /// Panics if the path and type disagree with the shape of this info,
    /// e.g. a struct type described by scalar info or an index past the
    /// end of a struct.
    pub fn resolve_from_index_list<T>(&self, ty: &T, indices: &[usize]) -> Option<&MetadataInfo>
    where
        T: TypeShape + ?Sized,
    {
        let mut resolved_type = ty;
        let mut resolved = Some(self);
        for &index in indices {
            let Some(info) = resolved else {
                break;
            };
            if resolved_type.is_struct() {
                resolved = info.expect_aggregate().field(index);
            }
            resolved_type = resolved_type.contained_type(index);
        }
        resolved
    }
}

impl From<ScalarInfo> for MetadataInfo {
    fn from(info: ScalarInfo) -> Self {
        Self::Scalar(info)
    }
}

impl From<AggregateInfo> for MetadataInfo {
    fn from(info: AggregateInfo) -> Self {
        Self::Aggregate(info)
    }
}

impl fmt::Display for MetadataInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => s.fmt(f),
            Self::Aggregate(a) => a.fmt(f),
        }
    }
}

// ============================================================================
// Scalar info
// ============================================================================

/// Type, range and error of a scalar value. Each component may be absent.
#[derive(Debug, Default, PartialEq)]
pub struct ScalarInfo {
    numeric_type: Option<Rc<NumericType>>,
    range: Option<Rc<Range>>,
    error: Option<Rc<ErrorValue>>,
}

impl ScalarInfo {
    /// Info with every component absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Info that shares the given components.
    pub fn from_shared(
        numeric_type: Option<Rc<NumericType>>,
        range: Option<Rc<Range>>,
        error: Option<Rc<ErrorValue>>,
    ) -> Self {
        Self {
            numeric_type,
            range,
            error,
        }
    }

    pub fn with_type(mut self, numeric_type: impl Into<NumericType>) -> Self {
        self.numeric_type = Some(Rc::new(numeric_type.into()));
        self
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(Rc::new(range));
        self
    }

    pub fn with_error(mut self, error: impl Into<ErrorValue>) -> Self {
        self.error = Some(Rc::new(error.into()));
        self
    }

    pub fn numeric_type(&self) -> Option<&NumericType> {
        self.numeric_type.as_deref()
    }

    pub fn range(&self) -> Option<&Range> {
        self.range.as_deref()
    }

    pub fn error(&self) -> Option<ErrorValue> {
        self.error.as_deref().copied()
    }

    pub fn shared_type(&self) -> Option<&Rc<NumericType>> {
        self.numeric_type.as_ref()
    }

    pub fn shared_range(&self) -> Option<&Rc<Range>> {
        self.range.as_ref()
    }

    pub fn shared_error(&self) -> Option<&Rc<ErrorValue>> {
        self.error.as_ref()
    }

    pub fn set_type(&mut self, numeric_type: Option<Rc<NumericType>>) {
        self.numeric_type = numeric_type;
    }

    pub fn set_range(&mut self, range: Option<Rc<Range>>) {
        self.range = range;
    }

    pub fn set_error(&mut self, error: Option<Rc<ErrorValue>>) {
        self.error = error;
    }

    /// Mutable access to the numeric type, unsharing it first.
    pub fn type_mut(&mut self) -> Option<&mut NumericType> {
        self.numeric_type.as_mut().map(Rc::make_mut)
    }

    /// Mutable access to the range, unsharing it first.
    pub fn range_mut(&mut self) -> Option<&mut Range> {
        self.range.as_mut().map(Rc::make_mut)
    }

    /// Mutable access to the error, unsharing it first.
    pub fn error_mut(&mut self) -> Option<&mut ErrorValue> {
        self.error.as_mut().map(Rc::make_mut)
    }

    /// Share every component of `other`, dropping this info's own.
    pub fn assign_from(&mut self, other: &ScalarInfo) {
        self.numeric_type = other.numeric_type.clone();
        self.range = other.range.clone();
        self.error = other.error.clone();
    }

    /// Whether every component is absent.
    pub fn is_empty(&self) -> bool {
        self.numeric_type.is_none() && self.range.is_none() && self.error.is_none()
    }
}

impl Clone for ScalarInfo {
    fn clone(&self) -> Self {
        Self {
            numeric_type: self.numeric_type.as_deref().map(|t| Rc::new(*t)),
            range: self.range.as_deref().map(|r| Rc::new(*r)),
            error: self.error.as_deref().map(|e| Rc::new(*e)),
        }
    }
}

impl fmt::Display for ScalarInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("scalar(")?;
        let mut sep = "";
        if let Some(t) = self.numeric_type() {
            write!(f, "type({t})")?;
            sep = " ";
        }
        if let Some(r) = self.range() {
            write!(f, "{sep}{r}")?;
            sep = " ";
        }
        if let Some(e) = self.error() {
            write!(f, "{sep}{e}")?;
        }
        f.write_str(")")
    }
}

// ============================================================================
// Aggregate info
// ============================================================================

/// Per-field info of a struct value.
///
/// The slot count is fixed at construction and matches the field count of
/// the described struct. Slots of fields that are neither structs nor
/// contain one stay absent until a pass fills them with scalar info.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateInfo {
    fields: Vec<Option<MetadataInfo>>,
}

impl AggregateInfo {
    /// Aggregate with `size` absent slots.
    pub fn new(size: usize) -> Self {
        Self {
            fields: vec![None; size],
        }
    }

    pub fn from_fields(fields: impl IntoIterator<Item = Option<MetadataInfo>>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Skeleton mirroring the struct nesting of `ty`.
    ///
    /// Returns `None` when `ty` contains no struct at all, so "definitely
    /// scalar" stays distinct from "struct with unknown fields". For arrays,
    /// vectors and pointers the skeleton of the element type is returned.
    pub fn construct_from_type<T>(ty: &T) -> Option<Self>
    where
        T: TypeShape + ?Sized,
    {
        let count = ty.contained_count();
        if count == 0 {
            return None;
        }
        if ty.is_struct() {
            let fields = (0..count).map(|i| {
                Self::construct_from_type(ty.contained_type(i)).map(MetadataInfo::Aggregate)
            });
            return Some(Self::from_fields(fields));
        }
        Self::construct_from_type(ty.contained_type(0))
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Info in slot `index`, or `None` if the slot is absent.
    ///
    /// # Panics
    /// Panics if `index` is not a valid slot.
    pub fn field(&self, index: usize) -> Option<&MetadataInfo> {
        self.ensure_slot(index).as_ref()
    }

    /// # Panics
    /// Panics if `index` is not a valid slot.
    pub fn field_mut(&mut self, index: usize) -> Option<&mut MetadataInfo> {
        self.ensure_slot_mut(index).as_mut()
    }

    /// Replace slot `index`, returning the previous content.
    ///
    /// # Panics
    /// Panics if `index` is not a valid slot.
    pub fn set_field(
        &mut self,
        index: usize,
        info: impl Into<Option<MetadataInfo>>,
    ) -> Option<MetadataInfo> {
        std::mem::replace(self.ensure_slot_mut(index), info.into())
    }

    /// Slots in field order.
    pub fn iter(&self) -> std::slice::Iter<'_, Option<MetadataInfo>> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Option<MetadataInfo>> {
        self.fields.iter_mut()
    }
}

impl<'a> IntoIterator for &'a AggregateInfo {
    type Item = &'a Option<MetadataInfo>;
    type IntoIter = std::slice::Iter<'a, Option<MetadataInfo>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AggregateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("struct(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match field {
                Some(info) => info.fmt(f)?,
                None => f.write_str("void()")?,
            }
        }
        f.write_str(")")
    }
}
