#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Precision metadata for floating-point to fixed-point conversion.
//!
//! This crate contains:
//! - The model: numeric types (`NumericType`, `FixedPointType`), value ranges,
//!   propagated errors, per-value info trees (`MetadataInfo`) and comparison
//!   error info
//! - The encoding of every model entity into metadata nodes (`codec`)
//! - Attachment of encoded metadata to program values (`MetadataManager`)

mod attach;
mod cmp_error;
pub mod codec;
mod config;
mod error;
mod info;
mod invariants;
pub mod kind;
mod numeric_type;
mod range;

#[cfg(test)]
mod info_tests;

pub use attach::MetadataManager;
pub use cmp_error::ComparisonErrorInfo;
pub use config::AttachmentConfig;
pub use error::{ConfigError, DecodeError, Result};
pub use info::{AggregateInfo, MetadataInfo, ScalarInfo};
pub use kind::{FIXP_TYPE_FLAG, InfoKind, NumericKind};
pub use numeric_type::{FixedPointType, NumericType};
pub use range::{ErrorValue, Range};
