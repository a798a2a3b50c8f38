//! Numeric type descriptors.
//!
//! A `NumericType` describes the representation a value is converted to.
//! Only fixed point exists today; every query dispatches on the variant, so
//! a new representation is a new variant plus a new `NumericKind`.

use std::fmt;

use crate::kind::NumericKind;

/// Target representation of a numeric value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericType {
    FixedPoint(FixedPointType),
}

impl NumericType {
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::FixedPoint(_) => NumericKind::FixedPoint,
        }
    }

    /// Maximum error introduced by rounding an exact real to this type.
    pub fn rounding_error(&self) -> f64 {
        match self {
            Self::FixedPoint(t) => t.rounding_error(),
        }
    }

    /// Lower bound that every representable value is guaranteed to respect.
    ///
    /// May be looser than the true minimum, never tighter.
    pub fn min_value_bound(&self) -> f64 {
        match self {
            Self::FixedPoint(t) => t.min_value_bound(),
        }
    }

    /// Upper bound that every representable value is guaranteed to respect.
    ///
    /// May be looser than the true maximum, never tighter.
    pub fn max_value_bound(&self) -> f64 {
        match self {
            Self::FixedPoint(t) => t.max_value_bound(),
        }
    }

    pub fn as_fixed_point(&self) -> Option<&FixedPointType> {
        match self {
            Self::FixedPoint(t) => Some(t),
        }
    }

    /// Fixed-point view of this type.
    ///
    /// # Panics
    /// Panics if this is not a fixed-point type.
    pub fn expect_fixed_point(&self) -> &FixedPointType {
        self.as_fixed_point()
            .unwrap_or_else(|| self.ensure_kind(NumericKind::FixedPoint))
    }
}

impl From<FixedPointType> for NumericType {
    fn from(t: FixedPointType) -> Self {
        Self::FixedPoint(t)
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedPoint(t) => t.fmt(f),
        }
    }
}

/// Two's-complement fixed-point format.
///
/// Width and signedness share one field: a negative `signed_width` means a
/// signed format of `|signed_width|` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedPointType {
    signed_width: i32,
    /// Number of fractional bits.
    point_pos: u32,
}

impl FixedPointType {
    /// Format of `width` total bits, `point_pos` of them fractional.
    ///
    /// # Panics
    /// Panics unless `0 < width <= i32::MAX` and `point_pos <= width`.
    pub fn new(width: u32, point_pos: u32, signed: bool) -> Self {
        Self::ensure_format(width, point_pos);
        let width = width as i32;
        Self {
            signed_width: if signed { -width } else { width },
            point_pos,
        }
    }

    pub fn signed(width: u32, point_pos: u32) -> Self {
        Self::new(width, point_pos, true)
    }

    pub fn unsigned(width: u32, point_pos: u32) -> Self {
        Self::new(width, point_pos, false)
    }

    /// Build from the packed width, where negative means signed.
    ///
    /// # Panics
    /// Panics if the pair does not describe a valid format.
    pub fn from_signed_width(signed_width: i32, point_pos: u32) -> Self {
        Self::new(signed_width.unsigned_abs(), point_pos, signed_width < 0)
    }

    /// Like [`Self::from_signed_width`], but returns `None` for an invalid pair.
    pub fn checked(signed_width: i32, point_pos: u32) -> Option<Self> {
        let width = signed_width.unsigned_abs();
        if width == 0 || width > i32::MAX as u32 || point_pos > width {
            return None;
        }
        Some(Self {
            signed_width,
            point_pos,
        })
    }

    /// Total width in bits.
    pub fn width(&self) -> u32 {
        self.signed_width.unsigned_abs()
    }

    /// Packed width: negative when signed.
    pub fn signed_width(&self) -> i32 {
        self.signed_width
    }

    pub fn point_pos(&self) -> u32 {
        self.point_pos
    }

    pub fn is_signed(&self) -> bool {
        self.signed_width < 0
    }

    /// Number of integer bits (including the sign bit when signed).
    pub fn int_bits(&self) -> u32 {
        self.width() - self.point_pos
    }

    /// Half of one quantization step: `2^-(point_pos + 1)`.
    pub fn rounding_error(&self) -> f64 {
        pow2(-(self.point_pos as i64) - 1)
    }

    pub fn min_value_bound(&self) -> f64 {
        if self.is_signed() {
            -pow2(self.int_bits() as i64 - 1)
        } else {
            0.0
        }
    }

    pub fn max_value_bound(&self) -> f64 {
        let step = pow2(-(self.point_pos as i64));
        if self.is_signed() {
            pow2(self.int_bits() as i64 - 1) - step
        } else {
            pow2(self.int_bits() as i64) - step
        }
    }
}

impl fmt::Display for FixedPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_signed() { 's' } else { 'u' };
        write!(f, "{sign}{}_{}fixp", self.int_bits(), self.point_pos)
    }
}

/// Exact power of two. Saturates to `0.0` / `inf` outside the `f64` range.
fn pow2(exp: i64) -> f64 {
    let exp = exp.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    2f64.powi(exp)
}
