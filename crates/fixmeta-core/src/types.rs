//! Structural type queries.
//!
//! The metadata model only needs to know the shape of a type: whether it is
//! a struct, how many types it contains, and what those types are. Host IRs
//! implement [`TypeShape`] for their own type representation; [`IrType`] is
//! a small self-contained implementation.

use std::fmt;

/// Minimal view of a structural type.
pub trait TypeShape {
    /// Whether this is a struct (record) type with ordered fields.
    fn is_struct(&self) -> bool;

    /// Number of immediately contained types.
    ///
    /// Fields for structs; one for arrays, vectors and pointers; zero for
    /// scalars.
    fn contained_count(&self) -> usize;

    /// Type selected by `index` one level down.
    ///
    /// For structs `index` is a field number. For sequential types every
    /// index selects the element type.
    fn contained_type(&self, index: usize) -> &Self;

    /// Whether any struct appears anywhere inside this type.
    fn contains_struct(&self) -> bool {
        if self.is_struct() {
            return true;
        }
        (0..self.contained_count()).any(|i| self.contained_type(i).contains_struct())
    }
}

/// Self-contained IR type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IrType {
    Void,
    /// Integer with the given bit width.
    Int(u32),
    Float,
    Double,
    Pointer(Box<IrType>),
    Array(Box<IrType>, u64),
    Vector(Box<IrType>, u32),
    Struct(Vec<IrType>),
}

impl IrType {
    pub fn pointer(pointee: IrType) -> Self {
        Self::Pointer(Box::new(pointee))
    }

    pub fn array(element: IrType, len: u64) -> Self {
        Self::Array(Box::new(element), len)
    }

    pub fn vector(element: IrType, len: u32) -> Self {
        Self::Vector(Box::new(element), len)
    }

    pub fn struct_of(fields: impl IntoIterator<Item = IrType>) -> Self {
        Self::Struct(fields.into_iter().collect())
    }

    /// Whether this is a floating-point scalar.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl TypeShape for IrType {
    fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    fn contained_count(&self) -> usize {
        match self {
            Self::Void | Self::Int(_) | Self::Float | Self::Double => 0,
            Self::Pointer(_) | Self::Array(..) | Self::Vector(..) => 1,
            Self::Struct(fields) => fields.len(),
        }
    }

    fn contained_type(&self, index: usize) -> &Self {
        match self {
            Self::Pointer(inner) | Self::Array(inner, _) | Self::Vector(inner, _) => inner,
            Self::Struct(fields) => self.ensure_field(fields, index),
            Self::Void | Self::Int(_) | Self::Float | Self::Double => self.ensure_container(),
        }
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Int(bits) => write!(f, "i{bits}"),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Pointer(inner) => write!(f, "{inner}*"),
            Self::Array(inner, len) => write!(f, "[{len} x {inner}]"),
            Self::Vector(inner, len) => write!(f, "<{len} x {inner}>"),
            Self::Struct(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(" }")
            }
        }
    }
}
