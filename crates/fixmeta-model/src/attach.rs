//! Reading and writing model metadata on program values.
//!
//! Scalar info and aggregate info use separate attachment kinds; a value
//! carries at most one of the two. Comparison errors and initial weights
//! have their own kinds and are independent of the info.

use fixmeta_core::{MdContext, MdNode, ValueId};

use crate::codec::{weight_from_metadata, weight_to_metadata};
use crate::config::AttachmentConfig;
use crate::error::{ConfigError, Result};
use crate::{AggregateInfo, ComparisonErrorInfo, MetadataInfo, ScalarInfo};

/// Attaches model metadata to values under the configured kind names.
#[derive(Clone, Debug, Default)]
pub struct MetadataManager {
    config: AttachmentConfig,
}

impl MetadataManager {
    /// Manager over `config`, refused if two kinds share a name.
    pub fn new(config: AttachmentConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AttachmentConfig {
        &self.config
    }

    /// Encode `info` and attach it to `value`, replacing any previous info.
    pub fn set_info(&self, ctx: &mut MdContext, value: ValueId, info: &MetadataInfo) -> MdNode {
        let node = info.to_metadata(ctx);
        let (kind, stale) = match info {
            MetadataInfo::Scalar(_) => (&self.config.info_kind, &self.config.struct_info_kind),
            MetadataInfo::Aggregate(_) => (&self.config.struct_info_kind, &self.config.info_kind),
        };
        ctx.remove_attachment(value, stale);
        ctx.set_attachment(value, kind, node);
        tracing::trace!(%value, %node, kind = kind.as_str(), "attached {info}");
        node
    }

    /// Info attached to `value`, if any.
    pub fn info(&self, ctx: &MdContext, value: ValueId) -> Result<Option<MetadataInfo>> {
        if let Some(scalar) = self.scalar_info(ctx, value)? {
            return Ok(Some(MetadataInfo::Scalar(scalar)));
        }
        Ok(self
            .aggregate_info(ctx, value)?
            .map(MetadataInfo::Aggregate))
    }

    pub fn scalar_info(&self, ctx: &MdContext, value: ValueId) -> Result<Option<ScalarInfo>> {
        self.read(ctx, value, &self.config.info_kind, ScalarInfo::from_metadata)
    }

    pub fn aggregate_info(&self, ctx: &MdContext, value: ValueId) -> Result<Option<AggregateInfo>> {
        self.read(
            ctx,
            value,
            &self.config.struct_info_kind,
            AggregateInfo::from_metadata,
        )
    }

    /// Detach any info from `value`. Returns whether something was removed.
    pub fn remove_info(&self, ctx: &mut MdContext, value: ValueId) -> bool {
        let scalar = ctx.remove_attachment(value, &self.config.info_kind);
        let aggregate = ctx.remove_attachment(value, &self.config.struct_info_kind);
        scalar.is_some() || aggregate.is_some()
    }

    pub fn set_cmp_error(
        &self,
        ctx: &mut MdContext,
        value: ValueId,
        cmp_error: &ComparisonErrorInfo,
    ) -> MdNode {
        let node = cmp_error.to_metadata(ctx);
        ctx.set_attachment(value, &self.config.cmp_error_kind, node);
        tracing::trace!(%value, %node, "attached comparison error");
        node
    }

    pub fn cmp_error(
        &self,
        ctx: &MdContext,
        value: ValueId,
    ) -> Result<Option<ComparisonErrorInfo>> {
        self.read(
            ctx,
            value,
            &self.config.cmp_error_kind,
            ComparisonErrorInfo::from_metadata,
        )
    }

    /// Record how many steps `value` is from an annotated input.
    pub fn set_initial_weight(&self, ctx: &mut MdContext, value: ValueId, weight: i32) -> MdNode {
        let node = weight_to_metadata(ctx, weight);
        ctx.set_attachment(value, &self.config.init_weight_kind, node);
        tracing::trace!(%value, weight, "attached initial weight");
        node
    }

    pub fn initial_weight(&self, ctx: &MdContext, value: ValueId) -> Result<Option<i32>> {
        self.read(
            ctx,
            value,
            &self.config.init_weight_kind,
            weight_from_metadata,
        )
    }

    fn read<T>(
        &self,
        ctx: &MdContext,
        value: ValueId,
        kind: &str,
        decode: impl FnOnce(&MdContext, MdNode) -> Result<T>,
    ) -> Result<Option<T>> {
        let Some(node) = ctx.attachment(value, kind) else {
            return Ok(None);
        };
        tracing::trace!(%value, %node, kind, "reading attachment");
        decode(ctx, node).map(Some)
    }
}
