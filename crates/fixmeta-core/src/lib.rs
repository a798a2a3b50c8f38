#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Host-IR building blocks for fixmeta.
//!
//! Two pieces:
//! - **Metadata store** (`MdContext`): uniqued nodes of typed leaves plus
//!   named per-value attachments
//! - **Type shapes** (`TypeShape`, `IrType`): the structural queries the
//!   metadata model needs from the host type system

mod context;
pub mod dump;
mod interner;
mod invariants;
mod metadata;
mod types;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod types_tests;

pub use context::MdContext;
pub use dump::{dump, dump_leaf, dump_value};
pub use interner::{Interner, StrId};
pub use metadata::{Constant, MdNode, Metadata, ValueId};
pub use types::{IrType, TypeShape};
