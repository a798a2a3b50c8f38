//! Encoding of the model into metadata nodes, and back.
//!
//! Node shapes (leaves in order):
//!
//! | Entity                | Node                                         |
//! | --------------------- | -------------------------------------------- |
//! | `FixedPointType`      | `!{!"fixp", i32 signed_width, i32 point_pos}` |
//! | `Range`               | `!{double min, double max}`                  |
//! | `ErrorValue`          | `!{double error}`                            |
//! | `ScalarInfo`          | `!{type, range, error}`, absent = `i1 false` |
//! | `AggregateInfo`       | `!{slot0, .., slotN}`, absent = `!"void"`    |
//! | `ComparisonErrorInfo` | `!{double tolerance, i1 may_be_wrong}`       |
//!
//! Info nodes carry no tag. The two absence markers differ so that a scalar
//! with no components and a three-slot aggregate with no slots stay
//! distinguishable. `is_*_metadata` predicates run the full decoder, so a
//! predicate holds exactly when `from_metadata` succeeds.

use std::rc::Rc;

use fixmeta_core::{Constant, MdContext, MdNode, Metadata};

use crate::error::{DecodeError, Result};
use crate::kind::{FIXP_TYPE_FLAG, NumericKind};
use crate::{
    AggregateInfo, ComparisonErrorInfo, ErrorValue, FixedPointType, MetadataInfo, NumericType,
    Range, ScalarInfo,
};

/// String leaf marking an absent aggregate slot.
pub const VOID_SLOT_FLAG: &str = "void";

/// Marker for an absent scalar info component.
pub fn null_field() -> Metadata {
    Constant::i1(false).into()
}

pub fn is_null_field(md: Metadata) -> bool {
    md == null_field()
}

/// Marker for an absent aggregate slot.
pub fn void_slot(ctx: &mut MdContext) -> Metadata {
    ctx.string(VOID_SLOT_FLAG)
}

pub fn is_void_slot(ctx: &MdContext, md: Metadata) -> bool {
    ctx.string_value(md) == Some(VOID_SLOT_FLAG)
}

/// Node holding a single double.
pub fn create_double_node(ctx: &mut MdContext, value: f64) -> MdNode {
    ctx.node(vec![Constant::double(value).into()])
}

/// Value of a node built by [`create_double_node`].
pub fn retrieve_double_node(ctx: &MdContext, node: MdNode) -> Result<f64> {
    let ops = expect_operands(ctx, node, "double", 1)?;
    expect_double(ops[0], "double", 0)
}

// ============================================================================
// Numeric types
// ============================================================================

impl FixedPointType {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        let tag = ctx.string(FIXP_TYPE_FLAG);
        ctx.node(vec![
            tag,
            Constant::i32(self.signed_width()).into(),
            Constant::i32(self.point_pos() as i32).into(),
        ])
    }

    pub fn is_fixed_point_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node()
            .is_some_and(|node| decode_fixed_point(ctx, node).is_ok())
    }

    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("fixed-point", node, decode_fixed_point(ctx, node))
    }
}

impl NumericType {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        match self {
            Self::FixedPoint(t) => t.to_metadata(ctx),
        }
    }

    pub fn is_numeric_type_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node()
            .is_some_and(|node| decode_numeric_type(ctx, node).is_ok())
    }

    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("numeric type", node, decode_numeric_type(ctx, node))
    }
}

fn decode_numeric_type(ctx: &MdContext, node: MdNode) -> Result<NumericType> {
    let tag = numeric_tag(ctx, node)?;
    let kind =
        NumericKind::from_tag(tag).ok_or_else(|| DecodeError::UnknownNumericKind(tag.into()))?;
    match kind {
        NumericKind::FixedPoint => decode_fixed_point(ctx, node).map(NumericType::FixedPoint),
    }
}

fn numeric_tag(ctx: &MdContext, node: MdNode) -> Result<&str> {
    let leaf = ctx.operand(node, 0).ok_or(DecodeError::OperandCount {
        what: "numeric type",
        expected: 1,
        found: 0,
    })?;
    ctx.string_value(leaf)
        .ok_or_else(|| unexpected("numeric type", 0, "type tag string", leaf))
}

fn decode_fixed_point(ctx: &MdContext, node: MdNode) -> Result<FixedPointType> {
    const WHAT: &str = "fixed-point";
    let ops = expect_operands(ctx, node, WHAT, 3)?;
    let tag = ctx
        .string_value(ops[0])
        .ok_or_else(|| unexpected(WHAT, 0, "type tag string", ops[0]))?;
    if tag != FIXP_TYPE_FLAG {
        return Err(DecodeError::UnknownNumericKind(tag.into()));
    }
    let signed_width = expect_int(ops[1], 32, WHAT, 1, "i32 width")?;
    let point_pos = expect_int(ops[2], 32, WHAT, 2, "i32 point position")?;
    let invalid = DecodeError::InvalidFixedPoint {
        signed_width,
        point_pos,
    };
    let (Ok(signed_width), Ok(point_pos)) = (i32::try_from(signed_width), u32::try_from(point_pos))
    else {
        return Err(invalid);
    };
    FixedPointType::checked(signed_width, point_pos).ok_or(invalid)
}

// ============================================================================
// Range and error
// ============================================================================

impl Range {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        ctx.node(vec![
            Constant::double(self.min).into(),
            Constant::double(self.max).into(),
        ])
    }

    pub fn is_range_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node().is_some_and(|node| decode_range(ctx, node).is_ok())
    }

    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("range", node, decode_range(ctx, node))
    }
}

fn decode_range(ctx: &MdContext, node: MdNode) -> Result<Range> {
    let ops = expect_operands(ctx, node, "range", 2)?;
    Ok(Range::new(
        expect_double(ops[0], "range", 0)?,
        expect_double(ops[1], "range", 1)?,
    ))
}

impl ErrorValue {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        create_double_node(ctx, self.0)
    }

    /// Whether `md` is a node wrapping exactly one double.
    pub fn is_error_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node()
            .is_some_and(|node| retrieve_double_node(ctx, node).is_ok())
    }

    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("error", node, retrieve_double_node(ctx, node).map(ErrorValue))
    }
}

// ============================================================================
// Metadata info
// ============================================================================

impl ScalarInfo {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        let numeric_type: Metadata = match self.numeric_type() {
            Some(t) => t.to_metadata(ctx).into(),
            None => null_field(),
        };
        let range: Metadata = match self.range() {
            Some(r) => r.to_metadata(ctx).into(),
            None => null_field(),
        };
        let error: Metadata = match self.error() {
            Some(e) => e.to_metadata(ctx).into(),
            None => null_field(),
        };
        ctx.node(vec![numeric_type, range, error])
    }

    pub fn is_scalar_info_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node()
            .is_some_and(|node| decode_scalar_info(ctx, node).is_ok())
    }

    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("scalar info", node, decode_scalar_info(ctx, node))
    }
}

fn decode_scalar_info(ctx: &MdContext, node: MdNode) -> Result<ScalarInfo> {
    const WHAT: &str = "scalar info";
    let ops = expect_operands(ctx, node, WHAT, 3)?;
    let numeric_type = decode_component(ctx, ops[0], 0, decode_numeric_type)?;
    let range = decode_component(ctx, ops[1], 1, decode_range)?;
    let error = decode_component(ctx, ops[2], 2, |ctx, node| {
        retrieve_double_node(ctx, node).map(ErrorValue)
    })?;
    Ok(ScalarInfo::from_shared(
        numeric_type.map(Rc::new),
        range.map(Rc::new),
        error.map(Rc::new),
    ))
}

fn decode_component<T>(
    ctx: &MdContext,
    leaf: Metadata,
    index: usize,
    decode: impl FnOnce(&MdContext, MdNode) -> Result<T>,
) -> Result<Option<T>> {
    if is_null_field(leaf) {
        return Ok(None);
    }
    let node = leaf
        .as_node()
        .ok_or_else(|| unexpected("scalar info", index, "node or null field", leaf))?;
    decode(ctx, node).map(Some)
}

impl AggregateInfo {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        let slots = self
            .iter()
            .map(|slot| -> Metadata {
                match slot {
                    Some(info) => info.to_metadata(ctx).into(),
                    None => void_slot(ctx),
                }
            })
            .collect();
        ctx.node(slots)
    }

    pub fn is_aggregate_info_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node()
            .is_some_and(|node| decode_aggregate_info(ctx, node).is_ok())
    }

    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("aggregate info", node, decode_aggregate_info(ctx, node))
    }
}

fn decode_aggregate_info(ctx: &MdContext, node: MdNode) -> Result<AggregateInfo> {
    let fields = ctx
        .operands(node)
        .iter()
        .enumerate()
        .map(|(index, &leaf)| {
            if is_void_slot(ctx, leaf) {
                return Ok(None);
            }
            let child = leaf
                .as_node()
                .ok_or_else(|| unexpected("aggregate info", index, "node or void slot", leaf))?;
            decode_metadata_info(ctx, child).map(Some)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AggregateInfo::from_fields(fields))
}

impl MetadataInfo {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        match self {
            Self::Scalar(s) => s.to_metadata(ctx),
            Self::Aggregate(a) => a.to_metadata(ctx),
        }
    }

    pub fn is_metadata_info_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node()
            .is_some_and(|node| decode_metadata_info(ctx, node).is_ok())
    }

    /// Decode scalar or aggregate info, discriminating by node shape.
    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("metadata info", node, decode_metadata_info(ctx, node))
    }
}

fn decode_metadata_info(ctx: &MdContext, node: MdNode) -> Result<MetadataInfo> {
    let scalar = match decode_scalar_info(ctx, node) {
        Ok(scalar) => return Ok(MetadataInfo::Scalar(scalar)),
        Err(error) => error,
    };
    let aggregate = match decode_aggregate_info(ctx, node) {
        Ok(aggregate) => return Ok(MetadataInfo::Aggregate(aggregate)),
        Err(error) => error,
    };
    Err(DecodeError::UnrecognizedInfo {
        scalar: Box::new(scalar),
        aggregate: Box::new(aggregate),
    })
}

// ============================================================================
// Comparison error
// ============================================================================

impl ComparisonErrorInfo {
    pub fn to_metadata(&self, ctx: &mut MdContext) -> MdNode {
        ctx.node(vec![
            Constant::double(self.max_tolerance).into(),
            Constant::i1(self.may_be_wrong).into(),
        ])
    }

    pub fn is_cmp_error_metadata(ctx: &MdContext, md: Metadata) -> bool {
        md.as_node()
            .is_some_and(|node| decode_cmp_error(ctx, node).is_ok())
    }

    pub fn from_metadata(ctx: &MdContext, node: MdNode) -> Result<Self> {
        traced("comparison error", node, decode_cmp_error(ctx, node))
    }
}

fn decode_cmp_error(ctx: &MdContext, node: MdNode) -> Result<ComparisonErrorInfo> {
    const WHAT: &str = "comparison error";
    let ops = expect_operands(ctx, node, WHAT, 2)?;
    let tolerance = expect_double(ops[0], WHAT, 0)?;
    let may_be_wrong = expect_int(ops[1], 1, WHAT, 1, "i1 flag")?;
    Ok(ComparisonErrorInfo::with_verdict(tolerance, may_be_wrong != 0))
}

// ============================================================================
// Initial weight
// ============================================================================

/// Node holding an initial weight.
pub fn weight_to_metadata(ctx: &mut MdContext, weight: i32) -> MdNode {
    ctx.node(vec![Constant::i32(weight).into()])
}

pub fn weight_from_metadata(ctx: &MdContext, node: MdNode) -> Result<i32> {
    traced("initial weight", node, decode_weight(ctx, node))
}

fn decode_weight(ctx: &MdContext, node: MdNode) -> Result<i32> {
    let ops = expect_operands(ctx, node, "initial weight", 1)?;
    let raw = expect_int(ops[0], 32, "initial weight", 0, "i32 weight")?;
    i32::try_from(raw).map_err(|_| unexpected("initial weight", 0, "i32 weight", ops[0]))
}

// ============================================================================
// Helpers
// ============================================================================

fn expect_operands<'a>(
    ctx: &'a MdContext,
    node: MdNode,
    what: &'static str,
    expected: usize,
) -> Result<&'a [Metadata]> {
    let ops = ctx.operands(node);
    if ops.len() != expected {
        return Err(DecodeError::OperandCount {
            what,
            expected,
            found: ops.len(),
        });
    }
    Ok(ops)
}

fn expect_double(leaf: Metadata, what: &'static str, index: usize) -> Result<f64> {
    leaf.as_double()
        .ok_or_else(|| unexpected(what, index, "double", leaf))
}

fn expect_int(
    leaf: Metadata,
    width: u32,
    what: &'static str,
    index: usize,
    expected: &'static str,
) -> Result<i64> {
    leaf.as_constant()
        .and_then(|c| c.as_int_of_width(width))
        .ok_or_else(|| unexpected(what, index, expected, leaf))
}

fn unexpected(
    what: &'static str,
    index: usize,
    expected: &'static str,
    found: Metadata,
) -> DecodeError {
    DecodeError::UnexpectedLeaf {
        what,
        index,
        expected,
        found: found.kind_name(),
    }
}

fn traced<T>(what: &'static str, node: MdNode, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        tracing::debug!(%node, %error, "refused to decode {what} metadata");
    }
    result
}
