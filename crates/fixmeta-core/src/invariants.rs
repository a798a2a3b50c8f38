//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{IrType, MdContext, MdNode, Metadata};

impl MdContext {
    pub(crate) fn ensure_node(&self, node: MdNode) -> &[Metadata] {
        self.try_operands(node).unwrap_or_else(|| {
            panic!(
                "MdContext: node {node} not found \
                 (nodes are only valid in the context that built them)"
            )
        })
    }
}

impl IrType {
    pub(crate) fn ensure_field<'a>(&self, fields: &'a [IrType], index: usize) -> &'a IrType {
        fields.get(index).unwrap_or_else(|| {
            panic!(
                "IrType: field index {index} out of range for `{self}` \
                 ({} fields)",
                fields.len()
            )
        })
    }

    pub(crate) fn ensure_container(&self) -> ! {
        panic!("IrType: `{self}` has no contained types")
    }
}
