//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::kind::{InfoKind, NumericKind};
use crate::{AggregateInfo, FixedPointType, MetadataInfo, NumericType};

impl FixedPointType {
    pub(crate) fn ensure_format(width: u32, point_pos: u32) {
        assert!(
            width > 0 && width <= i32::MAX as u32,
            "FixedPointType: width {width} out of range"
        );
        assert!(
            point_pos <= width,
            "FixedPointType: point position {point_pos} exceeds width {width}"
        );
    }
}

impl NumericType {
    pub(crate) fn ensure_kind(&self, expected: NumericKind) -> ! {
        panic!(
            "NumericType: expected {expected:?}, found {:?} (`{self}`)",
            self.kind()
        )
    }
}

impl MetadataInfo {
    pub(crate) fn ensure_kind(&self, expected: InfoKind) -> ! {
        panic!(
            "MetadataInfo: expected {} info, found `{self}` \
             (type and index path must match the info shape)",
            expected.display_name()
        )
    }
}

impl AggregateInfo {
    pub(crate) fn ensure_slot(&self, index: usize) -> &Option<MetadataInfo> {
        let len = self.len();
        self.iter().nth(index).unwrap_or_else(|| {
            panic!("AggregateInfo: slot {index} out of range ({len} slots)")
        })
    }

    pub(crate) fn ensure_slot_mut(&mut self, index: usize) -> &mut Option<MetadataInfo> {
        let len = self.len();
        self.iter_mut().nth(index).unwrap_or_else(|| {
            panic!("AggregateInfo: slot {index} out of range ({len} slots)")
        })
    }
}
